use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use predictor::ArtifactCache;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{
    config::Config,
    ui::screens::{setup::SetupState, Action, Screen},
};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the salary form until the user quits.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails. Artifact and
/// prediction failures are shown on screen instead.
pub fn run(config: &Config) -> Result<()> {
    let cache = ArtifactCache::new(config.artifact_paths());

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut screen = match cache.get() {
        Ok(bundle) => Screen::form(bundle),
        Err(e) => Screen::SetupFailed(SetupState::new(e, cache.paths())),
    };

    loop {
        terminal.draw(|f| screen.draw(f))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(k.code) {
                    Action::Quit => break,
                    Action::Predict => {
                        terminal.draw(|f| screen.draw(f))?;
                        screen.predict();
                    }
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    log::info!("exiting");
    Ok(())
}

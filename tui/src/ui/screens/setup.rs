use std::sync::Arc;

use crossterm::event::KeyCode;
use predictor::{ArtifactError, ArtifactPaths};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::{layout, theme::Theme, widgets};

use super::Action;

const HEADLINE: &str =
    "Could not load model files. Make sure all artifact files are in the same folder!";

/// Why the artifacts could not be loaded, kept for display.
pub struct SetupState {
    error: Arc<ArtifactError>,
    expected: Vec<String>,
}

impl SetupState {
    pub fn new(error: Arc<ArtifactError>, paths: &ArtifactPaths) -> Self {
        let expected = [&paths.model, &paths.scaler, &paths.columns]
            .iter()
            .map(|p| p.display().to_string())
            .collect();

        Self { error, expected }
    }
}

pub fn handle_key(key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => Action::Quit,
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &SetupState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let outer = layout::centered_rect(70, 80, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title + subtitle
            Constraint::Length(2), // headline
            Constraint::Min(6),    // details
            Constraint::Length(1), // hints
        ])
        .split(outer);

    f.render_widget(widgets::header(), chunks[0]);

    f.render_widget(
        Paragraph::new(Span::styled(HEADLINE, Theme::error())).wrap(Wrap { trim: true }),
        chunks[1],
    );

    let mut lines = vec![
        Line::from(Span::styled(format!("Error: {}", state.error), Theme::text())),
        Line::from(""),
        Line::from(Span::styled("Expected files:", Theme::dim())),
    ];
    lines.extend(
        state
            .expected
            .iter()
            .map(|p| Line::from(Span::styled(format!("  {p}"), Theme::muted()))),
    );

    f.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::error())
                    .title(" Setup incomplete ")
                    .title_style(Theme::error()),
            )
            .wrap(Wrap { trim: true }),
        chunks[2],
    );

    f.render_widget(widgets::hints(&[("q / esc / enter", "quit")]), chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_quitting_is_possible() {
        assert!(matches!(handle_key(KeyCode::Char('q')), Action::Quit));
        assert!(matches!(handle_key(KeyCode::Char('p')), Action::None));
        assert!(matches!(handle_key(KeyCode::Right), Action::None));
    }
}

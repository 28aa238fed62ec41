pub mod form;
pub mod setup;

use crossterm::event::KeyCode;
use predictor::ArtifactBundle;
use ratatui::Frame;

use crate::state::form::FormState;

pub enum Action {
    None,
    Quit,
    /// Validation passed; draw the progress state, then run the pipeline.
    Predict,
}

pub enum Screen<'a> {
    Form {
        bundle: &'a ArtifactBundle,
        state: FormState,
    },
    /// Artifacts could not be loaded; nothing but quitting is possible.
    SetupFailed(setup::SetupState),
}

impl<'a> Screen<'a> {
    pub fn form(bundle: &'a ArtifactBundle) -> Self {
        Screen::Form {
            bundle,
            state: FormState::new(bundle.schema()),
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Form { state, .. } => form::draw(f, state),
            Screen::SetupFailed(s) => setup::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Form { state, .. } => form::handle_key(state, key),
            Screen::SetupFailed(_) => setup::handle_key(key),
        }
    }

    /// Runs the pipeline for a submission accepted by `handle_key`.
    pub fn predict(&mut self) {
        if let Screen::Form { bundle, state } = self {
            state.predict(*bundle);
        }
    }
}

use crossterm::event::KeyCode;
use predictor::input::{AGE_RANGE, EXPERIENCE_RANGE};
use ratatui::{
    widgets::{Block, Paragraph},
    Frame,
};

use crate::{
    state::form::{Field, FormState, PAGE_STEP},
    ui::{layout, theme::Theme, widgets},
};

use super::Action;

pub fn handle_key(state: &mut FormState, key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
            state.focus_prev();
            Action::None
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
            state.focus_next();
            Action::None
        }
        KeyCode::Left | KeyCode::Char('h') => {
            state.adjust(-1);
            Action::None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            state.adjust(1);
            Action::None
        }
        KeyCode::PageUp => {
            state.adjust(PAGE_STEP);
            Action::None
        }
        KeyCode::PageDown => {
            state.adjust(-PAGE_STEP);
            Action::None
        }
        KeyCode::Enter if state.focus() != Field::Predict => {
            state.focus_next();
            Action::None
        }
        KeyCode::Enter | KeyCode::Char('p') => submit(state),
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

fn submit(state: &mut FormState) -> Action {
    if state.begin_submit() {
        Action::Predict
    } else {
        Action::None
    }
}

pub fn draw(f: &mut Frame, state: &FormState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let regions = layout::form(area);
    f.render_widget(widgets::header(), regions.header);

    let block = widgets::details_block();
    let inner = block.inner(regions.details);
    f.render_widget(block, regions.details);

    let focus = state.focus();
    let rows = layout::rows(inner, Field::ALL.len());

    for (field, row) in Field::ALL.into_iter().zip(rows) {
        let focused = field == focus;
        let line = match field {
            Field::Age => widgets::slider("What's your age?", state.age(), AGE_RANGE, focused),
            Field::Experience => widgets::slider(
                "How many years of work experience do you have?",
                state.experience(),
                EXPERIENCE_RANGE,
                focused,
            ),
            Field::Gender => widgets::selector("Gender", Some(state.gender().label()), focused),
            Field::Education => widgets::selector(
                "Highest education level?",
                Some(state.education().label()),
                focused,
            ),
            Field::JobTitle => widgets::selector("What's your job title?", state.job_title(), focused),
            Field::Predict => widgets::predict_button(focused),
        };
        f.render_widget(Paragraph::new(line), row);
    }

    f.render_widget(widgets::outcome(state.phase()), regions.outcome);
    f.render_widget(
        widgets::hints(&[
            ("↑↓", "move"),
            ("←→", "change"),
            ("pgup/pgdn", "±5"),
            ("enter / p", "predict"),
            ("q", "quit"),
        ]),
        regions.hints,
    );
    f.render_widget(widgets::footer(), regions.footer);
}

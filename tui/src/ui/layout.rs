use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the single form page.
pub struct FormLayout {
    pub header: Rect,
    pub details: Rect,
    pub outcome: Rect,
    pub hints: Rect,
    pub footer: Rect,
}

/// Splits the page into header, details, outcome, hints and footer.
pub fn form(area: Rect) -> FormLayout {
    let outer = centered_rect(70, 96, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // title + subtitle
            Constraint::Length(14), // details block
            Constraint::Min(7),     // outcome
            Constraint::Length(1),  // hints
            Constraint::Length(1),  // footer
        ])
        .split(outer);

    FormLayout {
        header: chunks[0],
        details: chunks[1],
        outcome: chunks[2],
        hints: chunks[3],
        footer: chunks[4],
    }
}

/// One row per control inside the details block, with a blank line between.
pub fn rows(area: Rect, count: usize) -> Vec<Rect> {
    let constraints = (0..count)
        .flat_map(|_| [Constraint::Length(1), Constraint::Length(1)])
        .collect::<Vec<_>>();

    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .iter()
        .step_by(2)
        .copied()
        .collect()
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}

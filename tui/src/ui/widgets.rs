use std::ops::RangeInclusive;

use predictor::{format_usd, SalaryEstimate, SubmitError};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{state::form::Phase, ui::theme::Theme};

const TITLE: &str = "Paylytics: Salary Predictor";
const SUBTITLE: &str = "Enter your details below to get a salary estimate!";
const FOOTER: &str = "Predictions are estimates based on historical data";
const CAPTION: &str =
    "This is only an estimate based on historical trends and may vary in real scenarios.";
const SPINNER: &str = "Calculating your salary...";
const FAILURE: &str = "Something went wrong during prediction.";

const SLIDER_WIDTH: usize = 24;
const LABEL_WIDTH: usize = 48;

pub fn header() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(TITLE, Theme::title())),
        Line::from(Span::styled(SUBTITLE, Theme::dim())),
    ])
    .alignment(Alignment::Center)
}

pub fn footer() -> Paragraph<'static> {
    Paragraph::new(Span::styled(FOOTER, Theme::muted())).alignment(Alignment::Center)
}

pub fn details_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Your Details ")
        .title_style(Theme::title())
}

fn label(text: &str, focused: bool) -> Vec<Span<'static>> {
    let (marker, style) = if focused {
        ("▶ ", Theme::focused())
    } else {
        ("  ", Theme::dim())
    };

    vec![
        Span::styled(marker, style),
        Span::styled(format!("{text:<width$}", width = LABEL_WIDTH), style),
    ]
}

/// A bounded slider: `━━━━●──── 25`.
pub fn slider(text: &str, value: u32, range: RangeInclusive<u32>, focused: bool) -> Line<'static> {
    let (lo, hi) = (*range.start(), *range.end());
    let span = hi.saturating_sub(lo).max(1) as f64;
    let pos = ((value.saturating_sub(lo)) as f64 / span * (SLIDER_WIDTH - 1) as f64).round() as usize;
    let pos = pos.min(SLIDER_WIDTH - 1);

    let track_style = if focused { Theme::accent() } else { Theme::muted() };

    let mut spans = label(text, focused);
    spans.push(Span::styled("━".repeat(pos), track_style));
    spans.push(Span::styled("●", Theme::accent()));
    spans.push(Span::styled("─".repeat(SLIDER_WIDTH - 1 - pos), Theme::muted()));
    spans.push(Span::styled(format!(" {value:>2}"), Theme::text()));
    Line::from(spans)
}

/// A closed-choice selector: `◀ Bachelor's ▶`.
pub fn selector(text: &str, value: Option<&str>, focused: bool) -> Line<'static> {
    let arrows = if focused { Theme::accent() } else { Theme::muted() };

    let mut spans = label(text, focused);
    spans.push(Span::styled("◀ ", arrows));
    spans.push(match value {
        Some(v) => Span::styled(v.to_string(), Theme::text()),
        None => Span::styled("(none available)", Theme::muted()),
    });
    spans.push(Span::styled(" ▶", arrows));
    Line::from(spans)
}

pub fn predict_button(focused: bool) -> Line<'static> {
    let style = if focused { Theme::focused() } else { Theme::dim() };
    Line::from(vec![
        Span::styled(if focused { "▶ " } else { "  " }, style),
        Span::styled("[ Predict My Salary! ]", style),
    ])
}

/// The result, error or progress panel below the form.
pub fn outcome(phase: &Phase) -> Paragraph<'static> {
    let (lines, border) = match phase {
        Phase::Idle => (
            vec![Line::from(Span::styled(
                "Press enter on the button (or p) to estimate.",
                Theme::muted(),
            ))],
            Theme::border(),
        ),
        Phase::Validating | Phase::Predicting => (
            vec![Line::from(Span::styled(SPINNER, Theme::warn()))],
            Theme::border(),
        ),
        Phase::ShowingResult(estimate) => (estimate_lines(estimate), Theme::accent()),
        Phase::ShowingError(e) => (error_lines(e), Theme::error()),
    };

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" Estimate ")
                .title_style(Theme::title()),
        )
        .wrap(Wrap { trim: true })
}

fn estimate_lines(estimate: &SalaryEstimate) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Estimated Annual Salary:", Theme::title())),
        Line::from(Span::styled(
            format!("{} / year", format_usd(estimate.annual())),
            Theme::figure(),
        )),
        Line::from(Span::styled(
            format!("≈ {} per month", format_usd(estimate.monthly())),
            Theme::dim(),
        )),
        Line::from(""),
        Line::from(Span::styled(CAPTION, Theme::muted())),
    ]
}

fn error_lines(error: &SubmitError) -> Vec<Line<'static>> {
    match error {
        SubmitError::Rejected(e) => vec![Line::from(Span::styled(e.to_string(), Theme::error()))],
        SubmitError::Failed(e) => vec![
            Line::from(Span::styled(FAILURE, Theme::error())),
            Line::from(Span::styled(format!("Error details: {e}"), Theme::dim())),
        ],
    }
}

pub fn hints(hints: &[(&str, &str)]) -> Paragraph<'static> {
    let spans = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(key.to_string(), Theme::dim()),
                Span::styled(format!("  {action}    "), Theme::muted()),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use predictor::{PredictError, ValidationError};

    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn slider_marker_tracks_value() {
        let low = text(&slider("Age", 18, 18..=60, false));
        assert!(low.contains(&format!("●{}", "─".repeat(SLIDER_WIDTH - 1))));

        let high = text(&slider("Age", 60, 18..=60, true));
        assert!(high.contains(&format!("{}● 60", "━".repeat(SLIDER_WIDTH - 1))));
    }

    #[test]
    fn selector_shows_placeholder_without_choices() {
        assert!(text(&selector("Job", None, false)).contains("(none available)"));
        assert!(text(&selector("Job", Some("PhD"), true)).contains("◀ PhD ▶"));
    }

    #[test]
    fn estimate_shows_annual_and_monthly() {
        let lines = estimate_lines(&SalaryEstimate::new(85_000.0));
        assert_eq!(text(&lines[1]), "$85,000.00 / year");
        assert_eq!(text(&lines[2]), "≈ $7,083.33 per month");
    }

    #[test]
    fn failure_shows_message_and_details() {
        let lines = error_lines(&SubmitError::Failed(PredictError::NonFinite { what: "model" }));
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[0]), "Something went wrong during prediction.");
        assert_eq!(
            text(&lines[1]),
            "Error details: model produced a non-finite value"
        );
    }

    #[test]
    fn rejection_shows_only_the_rule() {
        let rejected = SubmitError::Rejected(ValidationError::ExperienceTooHigh {
            age: 18,
            experience: 5,
        });
        let lines = error_lines(&rejected);
        assert_eq!(lines.len(), 1);
        assert_eq!(
            text(&lines[0]),
            "Experience years seem too high for the given age!"
        );
    }
}

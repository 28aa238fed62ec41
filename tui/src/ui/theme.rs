use ratatui::style::{Color, Modifier, Style};

/// Plum-and-rose theme.
///
/// Base aesthetic:
/// - soft pink foreground on a deep plum background
/// - magenta accents for focus and results
/// - red reserved for errors
pub struct Theme;

impl Theme {
    // Core palette
    pub const BG: Color = Color::Rgb(30, 0, 32);
    pub const FG: Color = Color::Rgb(255, 224, 240);
    pub const FG_DIM: Color = Color::Rgb(224, 195, 252);
    pub const FG_MUTED: Color = Color::Rgb(140, 110, 150);

    pub const ACCENT_ROSE: Color = Color::Rgb(216, 27, 96);
    pub const ACCENT_VIOLET: Color = Color::Rgb(186, 104, 200);
    pub const ACCENT_RED: Color = Color::Rgb(255, 82, 82);
    pub const ACCENT_YELLOW: Color = Color::Rgb(255, 214, 0);

    /// Default full-screen style.
    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::ACCENT_VIOLET).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn text() -> Style {
        Style::default().fg(Self::FG)
    }

    pub fn dim() -> Style {
        Style::default().fg(Self::FG_DIM)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    /// The focused control.
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::ACCENT_ROSE)
            .add_modifier(Modifier::BOLD)
    }

    /// Salary figures.
    pub fn figure() -> Style {
        Style::default()
            .fg(Self::ACCENT_VIOLET)
            .add_modifier(Modifier::BOLD)
    }

    pub fn warn() -> Style {
        Style::default()
            .fg(Self::ACCENT_YELLOW)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ACCENT_RED)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT_ROSE)
            .add_modifier(Modifier::BOLD)
    }
}

//! Color palette for the terminal views.

use ratatui::style::Color;
use wd_core::settings::Theme;

/// Resolved palette handed to every render function.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub watched: Color,
    pub border: Color,
}

impl Palette {
    /// A terminal cannot ask the OS for a preference, so `System` falls
    /// back to the dark palette.
    pub fn for_theme(theme: &Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark | Theme::System => Self::dark(),
        }
    }

    fn dark() -> Self {
        Self {
            accent: Color::Magenta,
            text: Color::White,
            muted: Color::DarkGray,
            watched: Color::Green,
            border: Color::Gray,
        }
    }

    fn light() -> Self {
        Self {
            accent: Color::Blue,
            text: Color::Black,
            muted: Color::Gray,
            watched: Color::Green,
            border: Color::DarkGray,
        }
    }
}

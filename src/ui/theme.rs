//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Label text color.
    pub label: Color,
    /// Value text color.
    pub value: Color,
    /// Border color.
    pub border: Color,
    /// Focused-control foreground color.
    pub focus_fg: Color,
    /// Focused-control background color.
    pub focus_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Error color.
    pub error: Color,
    /// Accent color for Adelie.
    pub adelie: Color,
    /// Accent color for Gentoo.
    pub gentoo: Color,
    /// Accent color for Chinstrap.
    pub chinstrap: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                label: Color::Rgb(184, 187, 38),
                value: Color::Rgb(142, 192, 124),
                border: Color::Rgb(102, 92, 84),
                focus_fg: Color::Rgb(40, 40, 40),
                focus_bg: Color::Rgb(251, 184, 108),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                error: Color::Rgb(251, 73, 52),
                adelie: Color::Rgb(254, 128, 25),
                gentoo: Color::Rgb(142, 192, 124),
                chinstrap: Color::Rgb(211, 134, 155),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                label: Color::Rgb(121, 116, 14),
                value: Color::Rgb(102, 123, 3),
                border: Color::Rgb(213, 196, 161),
                focus_fg: Color::Rgb(251, 245, 234),
                focus_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                error: Color::Rgb(157, 0, 6),
                adelie: Color::Rgb(175, 58, 3),
                gentoo: Color::Rgb(102, 123, 3),
                chinstrap: Color::Rgb(143, 63, 113),
            },
        }
    }

    /// Accent color for a species.
    pub fn species(&self, species: crate::data::Species) -> Color {
        match species {
            crate::data::Species::Adelie => self.adelie,
            crate::data::Species::Gentoo => self.gentoo,
            crate::data::Species::Chinstrap => self.chinstrap,
        }
    }
}

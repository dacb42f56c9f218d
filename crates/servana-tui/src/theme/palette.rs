//! Terminal colors derived from the app palette.
//!
//! Every view re-derives its colors from the current dark-mode flag on each
//! frame, so toggling the theme repaints the whole screen.

use ratatui::style::Color;
use servana_app::theme::{Palette, Rgb};

/// Foreground used on top of the primary color
pub const CONTRAST_FG: Color = Color::Rgb(0xFF, 0xFF, 0xFF);

/// Shadow under modals
pub const SHADOW: Color = Color::Rgb(0x05, 0x06, 0x08);

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Palette in ratatui colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: Color,
    pub background: Color,
    pub card: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub notification: Color,
    pub secondary: Color,
    pub error: Color,
    pub success: Color,
}

impl From<&Palette> for ThemeColors {
    fn from(p: &Palette) -> Self {
        Self {
            primary: color(p.primary),
            background: color(p.background),
            card: color(p.card),
            text: color(p.text),
            text_muted: color(p.text_muted),
            border: color(p.border),
            notification: color(p.notification),
            secondary: color(p.secondary),
            error: color(p.error),
            success: color(p.success),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use servana_app::theme::{DARK_PALETTE, LIGHT_PALETTE};

    #[test]
    fn test_primary_maps_to_rgb() {
        let light = ThemeColors::from(&LIGHT_PALETTE);
        let dark = ThemeColors::from(&DARK_PALETTE);
        assert_eq!(light.primary, Color::Rgb(0x62, 0x00, 0xEE));
        assert_eq!(dark.primary, Color::Rgb(0xBB, 0x86, 0xFC));
        assert_eq!(dark.background, Color::Rgb(0x12, 0x12, 0x12));
    }
}

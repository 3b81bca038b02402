//! Monokai theme

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x27, 0x28, 0x22),
        foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
        muted: Color::Rgb(0x75, 0x71, 0x5e),
        accent: Color::Rgb(0xf9, 0x26, 0x72),
        status_bg: Color::Rgb(0x3e, 0x3d, 0x32),
    }
}

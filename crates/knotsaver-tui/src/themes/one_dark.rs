//! One Dark theme (Atom)

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2c, 0x34),
        foreground: Color::Rgb(0xab, 0xb2, 0xbf),
        muted: Color::Rgb(0x5c, 0x63, 0x70),
        accent: Color::Rgb(0x61, 0xaf, 0xef),
        status_bg: Color::Rgb(0x3e, 0x44, 0x51),
    }
}

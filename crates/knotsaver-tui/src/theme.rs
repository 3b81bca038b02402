use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Canvas background
    pub background: Color,
    /// Text and control point markers
    pub foreground: Color,
    /// Secondary text
    pub muted: Color,
    /// Help overlay border and key names
    pub accent: Color,
    /// Status bar background
    pub status_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Default to Midnight: black canvas, like a classic screensaver
        Self {
            background: Color::Rgb(0x00, 0x00, 0x00),
            foreground: Color::Rgb(0xff, 0xff, 0xff),
            muted: Color::Rgb(0x80, 0x80, 0xff),
            accent: Color::Rgb(0xff, 0x32, 0x32),
            status_bg: Color::Rgb(0x32, 0x32, 0x32),
        }
    }
}

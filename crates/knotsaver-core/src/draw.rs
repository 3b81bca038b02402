//! Outbound drawing requests.
//!
//! The core never touches a screen. Each frame it produces a list of
//! [`DrawCommand`]s that a render adapter turns into pixels or cells.

use serde::{Deserialize, Serialize};

use crate::geometry::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert HSL (hue in degrees, saturation and lightness in [0, 1])
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(channel(r), channel(g), channel(b))
    }
}

/// How a command's points are connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawStyle {
    /// Each point drawn on its own
    Points,
    /// Consecutive points joined, last back to first
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub points: Vec<Vec2d>,
    pub style: DrawStyle,
    pub width: u16,
    pub color: Rgb,
}

impl DrawCommand {
    pub fn new(points: Vec<Vec2d>, style: DrawStyle, width: u16, color: Rgb) -> Self {
        Self {
            points,
            style,
            width,
            color,
        }
    }

    /// Segments of a closed `Line` command; empty for `Points` or fewer than two points
    pub fn segments(&self) -> impl Iterator<Item = (Vec2d, Vec2d)> + '_ {
        let n = match self.style {
            DrawStyle::Line if self.points.len() >= 2 => self.points.len(),
            _ => 0,
        };
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }
}

/// Rainbow colour that shifts one degree of hue per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HueCycle {
    hue: u16,
}

impl HueCycle {
    pub fn new(hue: u16) -> Self {
        Self { hue: hue % 360 }
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Step to the next hue and return its colour
    pub fn advance(&mut self) -> Rgb {
        self.hue = (self.hue + 1) % 360;
        self.color()
    }

    pub fn color(&self) -> Rgb {
        Rgb::from_hsl(self.hue as f64, 1.0, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Rgb::from_hsl(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsl(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsl(240.0, 1.0, 0.5), Rgb::new(0, 0, 255));
        assert_eq!(Rgb::from_hsl(60.0, 1.0, 0.5), Rgb::new(255, 255, 0));
        assert_eq!(Rgb::from_hsl(360.0, 1.0, 0.5), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_hsl_greys() {
        assert_eq!(Rgb::from_hsl(200.0, 0.0, 1.0), Rgb::WHITE);
        assert_eq!(Rgb::from_hsl(200.0, 0.0, 0.0), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_hue_cycle_wraps() {
        let mut cycle = HueCycle::new(359);
        assert_eq!(cycle.advance(), Rgb::new(255, 0, 0));
        assert_eq!(cycle.hue(), 0);
        assert_eq!(HueCycle::new(725).hue(), 5);
    }

    #[test]
    fn test_line_segments_close_the_loop() {
        let points = vec![
            Vec2d::new(0.0, 0.0),
            Vec2d::new(1.0, 0.0),
            Vec2d::new(1.0, 1.0),
        ];
        let command = DrawCommand::new(points.clone(), DrawStyle::Line, 1, Rgb::WHITE);
        let segments: Vec<_> = command.segments().collect();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[2], (points[2], points[0]));
    }

    #[test]
    fn test_points_have_no_segments() {
        let command = DrawCommand::new(vec![Vec2d::ZERO; 4], DrawStyle::Points, 1, Rgb::WHITE);
        assert_eq!(command.segments().count(), 0);
        let single = DrawCommand::new(vec![Vec2d::ZERO], DrawStyle::Line, 1, Rgb::WHITE);
        assert_eq!(single.segments().count(), 0);
    }
}

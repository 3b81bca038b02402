use serde::{Deserialize, Serialize};

use super::{Canvas, Vec2d};
use crate::draw::{DrawCommand, DrawStyle, Rgb};

/// Velocity given to points added without an explicit one
pub const DEFAULT_VELOCITY: Vec2d = Vec2d::new(0.5, 0.5);

/// A polyline vertex together with its per-frame displacement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub position: Vec2d,
    pub velocity: Vec2d,
}

impl ControlPoint {
    pub fn new(position: Vec2d, velocity: Vec2d) -> Self {
        Self { position, velocity }
    }
}

/// Ordered sequence of control points. Insertion order is drawing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<ControlPoint>,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: Vec<ControlPoint>) -> Self {
        Self { points }
    }

    /// Append a point. Positions outside the canvas are accepted as-is.
    pub fn add_point(&mut self, position: Vec2d, velocity: Vec2d) {
        self.points.push(ControlPoint::new(position, velocity));
    }

    pub fn add_point_default(&mut self, position: Vec2d) {
        self.add_point(position, DEFAULT_VELOCITY);
    }

    /// Move every point by its velocity and reflect off the canvas edges.
    ///
    /// Each axis is checked on its own, so a point leaving through a corner
    /// has both components negated in the same step. Positions are not
    /// clamped: a point may sit just outside the canvas until it moves back.
    pub fn advance(&mut self, canvas: &Canvas) {
        for point in &mut self.points {
            point.position = point.position + point.velocity;
            if !canvas.contains_x(point.position.x) {
                point.velocity.x = -point.velocity.x;
            }
            if !canvas.contains_y(point.position.y) {
                point.velocity.y = -point.velocity.y;
            }
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn positions(&self) -> Vec<Vec2d> {
        self.points.iter().map(|p| p.position).collect()
    }

    pub fn draw_command(&self, style: DrawStyle, width: u16, color: Rgb) -> DrawCommand {
        DrawCommand::new(self.positions(), style, width, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<ControlPoint> {
        (1..=5)
            .map(|i| {
                let i = i as f64;
                ControlPoint::new(Vec2d::new(i, i + 2.0), DEFAULT_VELOCITY)
            })
            .collect()
    }

    #[test]
    fn test_create_empty_polyline() {
        let polyline = Polyline::new();
        assert!(polyline.is_empty());
        assert!(polyline.positions().is_empty());
    }

    #[test]
    fn test_create_polyline_from_points() {
        let points = sample_points();
        let polyline = Polyline::from_points(points.clone());
        assert_eq!(polyline.points(), points.as_slice());
    }

    #[test]
    fn test_add_point() {
        let mut polyline = Polyline::new();
        let point = ControlPoint::new(Vec2d::new(2.0, 5.0), Vec2d::new(0.7, 0.8));
        polyline.add_point(point.position, point.velocity);
        assert!(polyline.points().contains(&point));

        polyline.add_point_default(Vec2d::new(1.0, 1.0));
        assert_eq!(polyline.points()[1].velocity, DEFAULT_VELOCITY);
        assert_eq!(polyline.len(), 2);
    }

    #[test]
    fn test_advance_moves_by_velocity() {
        let mut polyline = Polyline::from_points(sample_points());
        polyline.advance(&Canvas::default());

        let expected: Vec<Vec2d> = (1..=5)
            .map(|i| {
                let i = i as f64;
                Vec2d::new(i + 0.5, i + 2.5)
            })
            .collect();
        assert_eq!(polyline.positions(), expected);
        assert!(polyline.points().iter().all(|p| p.velocity == DEFAULT_VELOCITY));
    }

    #[test]
    fn test_advance_reflects_single_axis() {
        let canvas = Canvas::new(10.0, 10.0).unwrap();
        let mut polyline = Polyline::new();
        polyline.add_point(Vec2d::new(9.5, 5.0), Vec2d::new(1.0, 1.0));
        polyline.advance(&canvas);

        let point = polyline.points()[0];
        assert_eq!(point.position, Vec2d::new(10.5, 6.0));
        assert_eq!(point.velocity, Vec2d::new(-1.0, 1.0));
    }

    #[test]
    fn test_advance_reflects_both_axes_at_corner() {
        let canvas = Canvas::new(10.0, 10.0).unwrap();
        let mut polyline = Polyline::new();
        polyline.add_point(Vec2d::new(0.5, 0.5), Vec2d::new(-1.0, -1.0));
        polyline.advance(&canvas);

        let point = polyline.points()[0];
        assert_eq!(point.position, Vec2d::new(-0.5, -0.5));
        assert_eq!(point.velocity, Vec2d::new(1.0, 1.0));

        // moves back inside on the next tick without another flip
        polyline.advance(&canvas);
        let point = polyline.points()[0];
        assert_eq!(point.position, Vec2d::new(0.5, 0.5));
        assert_eq!(point.velocity, Vec2d::new(1.0, 1.0));
    }

    #[test]
    fn test_edge_is_inside() {
        let canvas = Canvas::new(10.0, 10.0).unwrap();
        let mut polyline = Polyline::new();
        polyline.add_point(Vec2d::new(9.0, 9.0), Vec2d::new(1.0, 1.0));
        polyline.advance(&canvas);
        assert_eq!(polyline.points()[0].velocity, Vec2d::new(1.0, 1.0));
    }

    #[test]
    fn test_clear() {
        let mut polyline = Polyline::from_points(sample_points());
        polyline.clear();
        assert!(polyline.is_empty());
    }

    #[test]
    fn test_draw_command_uses_positions() {
        let polyline = Polyline::from_points(sample_points());
        let command = polyline.draw_command(DrawStyle::Points, 3, Rgb::WHITE);
        assert_eq!(command.points, polyline.positions());
        assert_eq!(command.style, DrawStyle::Points);
        assert_eq!(command.width, 3);
    }
}

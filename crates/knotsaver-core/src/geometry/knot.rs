//! Closed-curve smoothing of a control polygon.
//!
//! Every control point `P[i]` contributes one quadratic Bézier segment whose
//! control triple is `(mid(P[i-1], P[i]), P[i], mid(P[i], P[i+1]))`, with
//! indices taken modulo the point count. Adjacent segments share their
//! midpoint endpoints, so the concatenated samples trace a closed loop.

use tracing::debug;

use super::{Polyline, Vec2d};
use crate::error::{Error, Result};

/// Upper bound on samples per segment
pub const MAX_STEPS: usize = 10_000;

fn check_steps(steps: usize) -> Result<()> {
    if steps == 0 {
        return Err(Error::InvalidArgument(
            "steps must be at least 1".to_string(),
        ));
    }
    if steps > MAX_STEPS {
        return Err(Error::InvalidArgument(format!(
            "steps must be at most {}, got {}",
            MAX_STEPS, steps
        )));
    }
    Ok(())
}

/// Evaluate the Bézier curve defined by `points` at parameter `alpha`.
///
/// De Casteljau in its recursive form:
/// `interp(p, a, d) = a * p[d] + (1 - a) * interp(p, a, d - 1)` with
/// `interp(p, a, 0) = p[0]`. Works for any number of control points; an
/// empty slice evaluates to the origin.
pub fn interpolate(points: &[Vec2d], alpha: f64) -> Vec2d {
    match points.len() {
        0 => Vec2d::ZERO,
        n => interpolate_degree(points, alpha, n - 1),
    }
}

fn interpolate_degree(points: &[Vec2d], alpha: f64, degree: usize) -> Vec2d {
    if degree == 0 {
        return points[0];
    }
    points[degree] * alpha + interpolate_degree(points, alpha, degree - 1) * (1.0 - alpha)
}

/// Sample `steps` points of one segment at `alpha = k / steps`, `k in 0..steps`
fn sample_segment(control: &[Vec2d], steps: usize, out: &mut Vec<Vec2d>) {
    let delta = 1.0 / steps as f64;
    out.extend((0..steps).map(|k| interpolate(control, k as f64 * delta)));
}

/// Smooth a closed control polygon into `points.len() * steps` samples.
///
/// Fewer than three points cannot form a loop and yield an empty curve.
/// `steps` must lie in `1..=MAX_STEPS`.
pub fn smooth(points: &[Vec2d], steps: usize) -> Result<Vec<Vec2d>> {
    check_steps(steps)?;

    let n = points.len();
    if n < 3 {
        return Ok(Vec::new());
    }

    let samples = n.checked_mul(steps).ok_or_else(|| {
        Error::InvalidArgument(format!("{} points x {} steps is too many samples", n, steps))
    })?;
    let mut curve = Vec::with_capacity(samples);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let current = points[i];
        let next = points[(i + 1) % n];
        let control = [prev.midpoint(current), current, current.midpoint(next)];
        sample_segment(&control, steps, &mut curve);
    }

    debug!(control_points = n, steps, samples = curve.len(), "Smoothed knot");
    Ok(curve)
}

/// A polyline paired with the resolution used to smooth it
#[derive(Debug, Clone)]
pub struct Knot {
    polyline: Polyline,
    steps: usize,
}

impl Knot {
    pub fn new(polyline: Polyline, steps: usize) -> Result<Self> {
        let mut knot = Self { polyline, steps: 1 };
        knot.set_steps(steps)?;
        Ok(knot)
    }

    pub fn polyline(&self) -> &Polyline {
        &self.polyline
    }

    pub fn polyline_mut(&mut self) -> &mut Polyline {
        &mut self.polyline
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn set_steps(&mut self, steps: usize) -> Result<()> {
        check_steps(steps)?;
        self.steps = steps;
        Ok(())
    }

    /// Recompute the smoothed curve from the current control points
    pub fn curve(&self) -> Vec<Vec2d> {
        // steps is kept in range by set_steps
        smooth(&self.polyline.positions(), self.steps).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: Vec2d, b: Vec2d) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn triangle() -> Vec<Vec2d> {
        vec![
            Vec2d::new(0.0, 0.0),
            Vec2d::new(100.0, 0.0),
            Vec2d::new(50.0, 80.0),
        ]
    }

    #[test]
    fn test_interpolate_endpoints() {
        let control = [Vec2d::new(0.0, 0.0), Vec2d::new(5.0, 10.0), Vec2d::new(10.0, 0.0)];
        assert!(approx_eq(interpolate(&control, 0.0), control[0]));
        assert!(approx_eq(interpolate(&control, 1.0), control[2]));
    }

    #[test]
    fn test_interpolate_matches_recursive_form() {
        // a * p2 + (1 - a) * (a * p1 + (1 - a) * p0)
        let p = [Vec2d::new(0.0, 0.0), Vec2d::new(4.0, 8.0), Vec2d::new(8.0, 0.0)];
        let a = 0.25;
        let expected = p[2] * a + (p[1] * a + p[0] * (1.0 - a)) * (1.0 - a);
        assert!(approx_eq(interpolate(&p, a), expected));
    }

    #[test]
    fn test_interpolate_degenerate_inputs() {
        assert_eq!(interpolate(&[], 0.5), Vec2d::ZERO);
        let single = [Vec2d::new(3.0, 4.0)];
        assert_eq!(interpolate(&single, 0.7), single[0]);
        let line = [Vec2d::new(0.0, 0.0), Vec2d::new(10.0, 20.0)];
        assert!(approx_eq(interpolate(&line, 0.5), Vec2d::new(5.0, 10.0)));
    }

    #[test]
    fn test_smooth_needs_three_points() {
        for steps in [1, 5, 35] {
            assert!(smooth(&[], steps).unwrap().is_empty());
            assert!(smooth(&triangle()[..1], steps).unwrap().is_empty());
            assert!(smooth(&triangle()[..2], steps).unwrap().is_empty());
        }
    }

    #[test]
    fn test_smooth_rejects_zero_steps() {
        assert!(matches!(smooth(&triangle(), 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(smooth(&[], 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_smooth_rejects_huge_steps() {
        assert!(matches!(
            smooth(&triangle(), usize::MAX / 2),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            smooth(&triangle(), MAX_STEPS + 1),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(smooth(&triangle(), MAX_STEPS).unwrap().len(), 3 * MAX_STEPS);
    }

    #[test]
    fn test_smooth_length() {
        let mut points = triangle();
        points.push(Vec2d::new(-20.0, 40.0));
        for steps in [1, 2, 7, 35] {
            assert_eq!(smooth(&points, steps).unwrap().len(), points.len() * steps);
        }
    }

    #[test]
    fn test_smooth_single_step_yields_midpoints() {
        let points = triangle();
        let curve = smooth(&points, 1).unwrap();
        let n = points.len();
        for (i, sample) in curve.iter().enumerate() {
            let expected = points[(i + n - 1) % n].midpoint(points[i]);
            assert!(approx_eq(*sample, expected), "sample {}", i);
        }
    }

    #[test]
    fn test_smooth_is_closed_and_continuous() {
        let points = triangle();
        let steps = 10;
        let curve = smooth(&points, steps).unwrap();
        // each segment starts where the previous one would end
        for i in 0..points.len() {
            let start = curve[i * steps];
            let expected = points[i].midpoint(points[(i + points.len() - 1) % points.len()]);
            assert!(approx_eq(start, expected));
        }
    }

    #[test]
    fn test_smooth_is_deterministic() {
        let points = triangle();
        assert_eq!(smooth(&points, 12).unwrap(), smooth(&points, 12).unwrap());
    }

    #[test]
    fn test_knot_steps_validation() {
        assert!(Knot::new(Polyline::new(), 0).is_err());

        let mut knot = Knot::new(Polyline::new(), 4).unwrap();
        assert!(knot.set_steps(0).is_err());
        assert!(knot.set_steps(MAX_STEPS + 1).is_err());
        assert_eq!(knot.steps(), 4);
        assert!(knot.set_steps(MAX_STEPS).is_ok());
    }

    #[test]
    fn test_knot_curve_tracks_polyline() {
        let mut knot = Knot::new(Polyline::new(), 3).unwrap();
        assert!(knot.curve().is_empty());

        for p in triangle() {
            knot.polyline_mut().add_point_default(p);
        }
        assert_eq!(knot.curve().len(), 9);
        assert_eq!(knot.polyline().len(), 3);
    }
}

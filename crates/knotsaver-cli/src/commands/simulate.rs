use anyhow::Result;
use tracing::info;

use knotsaver_core::animation::FixedVelocity;
use knotsaver_core::{AnimationState, AppConfig, Frame, InputEvent, Vec2d};

/// Run `frames` unpaused ticks from the given control points.
///
/// Every point gets the configured default velocity, so the result is
/// reproducible.
pub fn simulate(
    config: &AppConfig,
    points: &[Vec2d],
    frames: usize,
    steps: Option<usize>,
) -> Result<(AnimationState, Frame)> {
    let steps = steps.unwrap_or(config.animation.steps);
    let mut state = AnimationState::new(config.canvas()?, steps)?.with_paused(false);
    let mut velocities = FixedVelocity(config.default_velocity());

    for p in points {
        state.apply(InputEvent::PointerClick { x: p.x, y: p.y }, &mut velocities);
    }

    // zero frames shows the points where they were placed
    let mut frame = state.frame();
    for _ in 0..frames {
        frame = state.tick(std::iter::empty(), &mut velocities);
    }

    info!(frames, steps, points = points.len(), "Simulation finished");
    Ok((state, frame))
}

pub fn run(
    config: &AppConfig,
    points: &[Vec2d],
    frames: usize,
    steps: Option<usize>,
    json: bool,
) -> Result<()> {
    let (state, frame) = simulate(config, points, frames, steps)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&frame)?);
        return Ok(());
    }

    println!("After {} frames ({} steps per segment):\n", frames, frame.steps);
    for (i, point) in state.polyline().points().iter().enumerate() {
        println!(
            "  #{:<3} position ({:.2}, {:.2})  velocity ({:.2}, {:.2})",
            i, point.position.x, point.position.y, point.velocity.x, point.velocity.y
        );
    }
    let samples = frame.curve().map(|c| c.points.len()).unwrap_or(0);
    println!("\nCurve samples: {}", samples);

    Ok(())
}

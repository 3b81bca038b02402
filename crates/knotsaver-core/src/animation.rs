//! Frame-stepped screensaver state.
//!
//! [`AnimationState::tick`] is the whole per-frame pipeline: apply the
//! pending input events in order, advance the control points unless paused,
//! rebuild the smoothed curve, and emit draw commands. The caller owns the
//! loop and stops once [`AnimationState::is_running`] turns false.

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::draw::{DrawCommand, DrawStyle, HueCycle, Rgb};
use crate::error::Result;
use crate::geometry::{Canvas, Knot, Polyline, Vec2d, MAX_STEPS};

/// Keys the animation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    TogglePause,
    Reset,
    IncreaseSteps,
    DecreaseSteps,
    ToggleHelp,
}

/// Discrete input consumed by the frame loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyPress(Key),
    /// Pointer press in canvas coordinates
    PointerClick { x: f64, y: f64 },
}

/// Supplies the velocity of newly placed control points
pub trait VelocitySource {
    fn next_velocity(&mut self) -> Vec2d;
}

/// Same velocity for every point
#[derive(Debug, Clone, Copy)]
pub struct FixedVelocity(pub Vec2d);

impl VelocitySource for FixedVelocity {
    fn next_velocity(&mut self) -> Vec2d {
        self.0
    }
}

/// Each component drawn uniformly from `[0, max)`
pub struct RandomVelocity<R: Rng> {
    rng: R,
    max: f64,
}

impl<R: Rng> RandomVelocity<R> {
    pub fn new(rng: R, max: f64) -> Self {
        Self { rng, max }
    }
}

impl<R: Rng> VelocitySource for RandomVelocity<R> {
    fn next_velocity(&mut self) -> Vec2d {
        Vec2d::new(
            self.rng.random::<f64>() * self.max,
            self.rng.random::<f64>() * self.max,
        )
    }
}

/// Style settings for emitted draw commands
#[derive(Debug, Clone, Copy)]
pub struct DrawSettings {
    pub point_width: u16,
    pub line_width: u16,
    pub point_color: Rgb,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            point_width: 3,
            line_width: 3,
            point_color: Rgb::WHITE,
        }
    }
}

/// Everything the render adapter needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
    pub show_help: bool,
    pub paused: bool,
    pub steps: usize,
    pub point_count: usize,
}

impl Frame {
    /// The smoothed curve, if one was drawn
    pub fn curve(&self) -> Option<&DrawCommand> {
        self.commands.iter().find(|c| c.style == DrawStyle::Line)
    }
}

#[derive(Debug, Clone)]
pub struct AnimationState {
    knot: Knot,
    canvas: Canvas,
    paused: bool,
    show_help: bool,
    running: bool,
    hue: HueCycle,
    draw: DrawSettings,
}

impl AnimationState {
    pub fn new(canvas: Canvas, steps: usize) -> Result<Self> {
        Ok(Self {
            knot: Knot::new(Polyline::new(), steps)?,
            canvas,
            paused: true,
            show_help: false,
            running: true,
            hue: HueCycle::default(),
            draw: DrawSettings::default(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut state = Self::new(config.canvas()?, config.animation.steps)?;
        state.paused = config.animation.start_paused;
        state.draw.point_width = config.animation.point_width;
        state.draw.line_width = config.animation.line_width;
        Ok(state)
    }

    pub fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn steps(&self) -> usize {
        self.knot.steps()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn polyline(&self) -> &Polyline {
        self.knot.polyline()
    }

    /// Apply a single input event
    pub fn apply(&mut self, event: InputEvent, velocities: &mut impl VelocitySource) {
        match event {
            InputEvent::Quit => {
                info!("Quit requested");
                self.running = false;
            }
            InputEvent::KeyPress(key) => self.apply_key(key),
            InputEvent::PointerClick { x, y } => {
                let velocity = velocities.next_velocity();
                self.knot
                    .polyline_mut()
                    .add_point(Vec2d::new(x, y), velocity);
                debug!(x, y, vx = velocity.x, vy = velocity.y, "Added control point");
            }
        }
    }

    fn apply_key(&mut self, key: Key) {
        match key {
            Key::TogglePause => self.paused = !self.paused,
            Key::Reset => self.knot.polyline_mut().clear(),
            Key::IncreaseSteps => {
                let steps = self.knot.steps();
                if steps < MAX_STEPS {
                    self.set_steps(steps + 1);
                }
            }
            Key::DecreaseSteps => {
                let steps = self.knot.steps();
                if steps > 1 {
                    self.set_steps(steps - 1);
                }
            }
            Key::ToggleHelp => self.show_help = !self.show_help,
        }
        debug!(?key, steps = self.knot.steps(), paused = self.paused, "Applied key");
    }

    fn set_steps(&mut self, steps: usize) {
        if let Err(e) = self.knot.set_steps(steps) {
            warn!("Keeping {} steps: {}", self.knot.steps(), e);
        }
    }

    /// Run one frame: events, motion, smoothing, draw commands
    pub fn tick(
        &mut self,
        events: impl IntoIterator<Item = InputEvent>,
        velocities: &mut impl VelocitySource,
    ) -> Frame {
        for event in events {
            self.apply(event, velocities);
        }

        if !self.paused {
            let canvas = self.canvas;
            self.knot.polyline_mut().advance(&canvas);
        }

        self.hue.advance();
        self.frame()
    }

    /// Draw commands for the current state without advancing anything
    pub fn frame(&self) -> Frame {
        let curve = self.knot.curve();
        let line_color = self.hue.color();
        let polyline = self.knot.polyline();

        let commands = vec![
            polyline.draw_command(DrawStyle::Points, self.draw.point_width, self.draw.point_color),
            DrawCommand::new(curve, DrawStyle::Line, self.draw.line_width, line_color),
        ];

        Frame {
            commands,
            show_help: self.show_help,
            paused: self.paused,
            steps: self.knot.steps(),
            point_count: polyline.len(),
        }
    }
}

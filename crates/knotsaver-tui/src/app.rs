use anyhow::Result;
use knotsaver_core::animation::VelocitySource;
use knotsaver_core::config::KeymapConfig;
use knotsaver_core::{AnimationState, AppConfig, Frame, InputEvent};
use ratatui::layout::Rect;
use tracing::debug;

use crate::event::AppEvent;
use crate::input::{translate, Viewport};
use crate::keymap::Keymap;
use crate::theme::Theme;

/// Application state
pub struct App {
    /// Screensaver state driven once per frame
    pub state: AnimationState,
    /// Key bindings used to translate key presses
    pub keymap: Keymap,
    /// Key strings shown in the help overlay
    pub key_labels: KeymapConfig,
    /// Active theme
    pub theme: Theme,
    /// Last frame produced by the animation
    pub frame: Option<Frame>,
    /// Terminal area the canvas was last drawn into
    pub viewport: Viewport,
    /// Whether the status bar is drawn below the canvas
    pub show_status_bar: bool,
}

impl App {
    pub fn new(config: &AppConfig, theme: Theme) -> Result<Self> {
        let state = AnimationState::from_config(config)?;
        let viewport = Viewport::new(Rect::default(), *state.canvas());
        Ok(Self {
            state,
            keymap: Keymap::from_config(&config.keymap),
            key_labels: config.keymap.clone(),
            theme,
            frame: None,
            viewport,
            show_status_bar: config.ui.show_status_bar,
        })
    }

    pub fn should_quit(&self) -> bool {
        !self.state.is_running()
    }

    /// Record where the canvas is drawn so clicks can be mapped back
    pub fn set_canvas_area(&mut self, area: Rect) {
        self.viewport.area = area;
    }

    /// Translate one tick's terminal events and advance the animation
    pub fn step(&mut self, events: &[AppEvent], velocities: &mut impl VelocitySource) -> &Frame {
        let inputs: Vec<InputEvent> = events
            .iter()
            .filter_map(|event| translate(event, &self.keymap, &self.viewport))
            .collect();
        if !inputs.is_empty() {
            debug!(count = inputs.len(), "Applying input events");
        }

        self.frame.insert(self.state.tick(inputs, velocities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use knotsaver_core::animation::FixedVelocity;
    use knotsaver_core::Vec2d;

    fn app() -> App {
        App::new(&AppConfig::default(), Theme::default()).unwrap()
    }

    fn key(c: char) -> AppEvent {
        AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_clicks_become_control_points() {
        let mut app = app();
        app.set_canvas_area(Rect::new(0, 0, 80, 30));
        let mut velocities = FixedVelocity(Vec2d::new(0.5, 0.5));

        let events = [
            AppEvent::Click { column: 10, row: 5 },
            AppEvent::Click { column: 40, row: 20 },
            AppEvent::Click { column: 70, row: 5 },
        ];
        let frame = app.step(&events, &mut velocities);
        assert_eq!(frame.point_count, 3);
        assert_eq!(frame.curve().unwrap().points.len(), 3 * 35);
    }

    #[test]
    fn test_clicks_before_first_draw_are_dropped() {
        let mut app = app();
        let mut velocities = FixedVelocity(Vec2d::ZERO);
        let frame = app.step(&[AppEvent::Click { column: 1, row: 1 }], &mut velocities);
        assert_eq!(frame.point_count, 0);
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        let mut velocities = FixedVelocity(Vec2d::ZERO);
        app.step(&[key('q')], &mut velocities);
        assert!(app.should_quit());
    }

    #[test]
    fn test_frame_is_kept() {
        let mut app = app();
        let mut velocities = FixedVelocity(Vec2d::ZERO);
        app.step(&[key('p'), key('-')], &mut velocities);
        let frame = app.frame.as_ref().unwrap();
        assert!(!frame.paused);
        assert_eq!(frame.steps, 34);
    }
}

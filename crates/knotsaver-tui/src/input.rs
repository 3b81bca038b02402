use crossterm::event::KeyEvent;
use knotsaver_core::{Canvas, InputEvent, Key};
use ratatui::layout::Rect;

use crate::event::AppEvent;
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    TogglePause,
    Reset,
    IncreaseSteps,
    DecreaseSteps,
    ToggleHelp,
    None,
}

impl Action {
    /// The animation event this action stands for, if any
    pub fn to_input_event(self) -> Option<InputEvent> {
        let key = match self {
            Action::Quit => return Some(InputEvent::Quit),
            Action::TogglePause => Key::TogglePause,
            Action::Reset => Key::Reset,
            Action::IncreaseSteps => Key::IncreaseSteps,
            Action::DecreaseSteps => Key::DecreaseSteps,
            Action::ToggleHelp => Key::ToggleHelp,
            Action::None => return None,
        };
        Some(InputEvent::KeyPress(key))
    }
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap) -> Action {
    keymap
        .get(&KeyBinding::new(key.code, key.modifiers))
        .copied()
        .unwrap_or(Action::None)
}

/// Maps terminal cells inside the canvas area to canvas coordinates.
///
/// Canvas y grows downward, like terminal rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub area: Rect,
    pub canvas: Canvas,
}

impl Viewport {
    pub fn new(area: Rect, canvas: Canvas) -> Self {
        Self { area, canvas }
    }

    /// Canvas point at the centre of a terminal cell, `None` outside the area
    pub fn to_canvas(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let area = self.area;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        if column < area.x || column >= area.x + area.width {
            return None;
        }
        if row < area.y || row >= area.y + area.height {
            return None;
        }

        let fx = (column - area.x) as f64 + 0.5;
        let fy = (row - area.y) as f64 + 0.5;
        Some((
            fx / area.width as f64 * self.canvas.width,
            fy / area.height as f64 * self.canvas.height,
        ))
    }
}

/// Translate a terminal event into an animation event
pub fn translate(event: &AppEvent, keymap: &Keymap, viewport: &Viewport) -> Option<InputEvent> {
    match event {
        AppEvent::Key(key) => handle_key_event(*key, keymap).to_input_event(),
        AppEvent::Click { column, row } => viewport
            .to_canvas(*column, *row)
            .map(|(x, y)| InputEvent::PointerClick { x, y }),
        AppEvent::Resize(_, _) => None,
    }
}

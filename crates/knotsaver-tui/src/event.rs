use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Collect every event that arrives before the current tick ends.
    ///
    /// Always takes one full tick, so the frame rate does not depend on how
    /// many events the terminal sends (mouse motion included).
    pub fn next_batch(&self) -> Result<Vec<AppEvent>> {
        let deadline = Instant::now() + self.tick_rate;
        let mut events = Vec::new();

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                break;
            }
            if let Some(event) = Self::convert(event::read()?) {
                events.push(event);
            }
        }

        Ok(events)
    }

    fn convert(event: Event) -> Option<AppEvent> {
        match event {
            // Only handle key press events, ignore release events
            // (crossterm 0.27+ sends release events on some systems)
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::Click {
                    column: mouse.column,
                    row: mouse.row,
                }),
                _ => None,
            },
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            _ => None,
        }
    }
}

/// Application events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Left mouse button pressed at a terminal cell
    Click { column: u16, row: u16 },
    /// Terminal was resized
    Resize(u16, u16),
}

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed rectangular drawing area, `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "canvas size must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    pub fn contains_x(&self, x: f64) -> bool {
        (0.0..=self.width).contains(&x)
    }

    pub fn contains_y(&self, y: f64) -> bool {
        (0.0..=self.height).contains(&y)
    }
}

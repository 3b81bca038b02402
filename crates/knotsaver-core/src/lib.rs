pub mod animation;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;

pub use animation::{AnimationState, Frame, InputEvent, Key};
pub use config::AppConfig;
pub use error::{Error, Result};
pub use geometry::{Canvas, Vec2d};

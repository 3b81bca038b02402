mod canvas;
mod knot;
mod polyline;
mod vector;

pub use canvas::Canvas;
pub use knot::{interpolate, smooth, Knot, MAX_STEPS};
pub use polyline::{ControlPoint, Polyline, DEFAULT_VELOCITY};
pub use vector::{Operand, Vec2d};

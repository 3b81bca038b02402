use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 2D point or displacement.
///
/// Values are immutable: every operation returns a new vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2d {
    pub x: f64,
    pub y: f64,
}

/// Right-hand operand whose type is only known at run time
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Vector(Vec2d),
    Scalar(f64),
    Text(String),
}

impl Operand {
    fn describe(&self) -> String {
        match self {
            Operand::Vector(v) => v.to_string(),
            Operand::Scalar(k) => format!("scalar {}", k),
            Operand::Text(s) => format!("text {:?}", s),
        }
    }
}

impl From<Vec2d> for Operand {
    fn from(v: Vec2d) -> Self {
        Operand::Vector(v)
    }
}

impl From<f64> for Operand {
    fn from(k: f64) -> Self {
        Operand::Scalar(k)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Text(s.to_string())
    }
}

impl Vec2d {
    pub const ZERO: Vec2d = Vec2d { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Vec2d) -> Vec2d {
        Vec2d::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Vec2d) -> Vec2d {
        Vec2d::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, k: f64) -> Vec2d {
        Vec2d::new(self.x * k, self.y * k)
    }

    /// Component-wise exact comparison
    pub fn equals(self, other: Vec2d) -> bool {
        self == other
    }

    /// Euclidean length
    pub fn magnitude(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean length truncated toward zero
    pub fn length(self) -> u64 {
        self.magnitude() as u64
    }

    /// Integer coordinates, truncated (not rounded)
    pub fn int_pair(self) -> (i64, i64) {
        (self.x as i64, self.y as i64)
    }

    pub fn midpoint(self, other: Vec2d) -> Vec2d {
        self.add(other).scale(0.5)
    }

    pub fn try_add(self, other: &Operand) -> Result<Vec2d> {
        match other {
            Operand::Vector(v) => Ok(self.add(*v)),
            _ => Err(unsupported("+", other)),
        }
    }

    pub fn try_sub(self, other: &Operand) -> Result<Vec2d> {
        match other {
            Operand::Vector(v) => Ok(self.sub(*v)),
            _ => Err(unsupported("-", other)),
        }
    }

    /// Scale by a run-time operand; only scalars are accepted
    pub fn try_scale(self, other: &Operand) -> Result<Vec2d> {
        match other {
            Operand::Scalar(k) => Ok(self.scale(*k)),
            _ => Err(unsupported("*", other)),
        }
    }

    /// Equality against a run-time operand. Non-vectors are never equal.
    pub fn equals_operand(self, other: &Operand) -> bool {
        matches!(other, Operand::Vector(v) if self.equals(*v))
    }
}

fn unsupported(op: &'static str, operand: &Operand) -> Error {
    Error::InvalidOperand {
        op,
        operand: operand.describe(),
    }
}

impl fmt::Display for Vec2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2d({}, {})", self.x, self.y)
    }
}

impl Add for Vec2d {
    type Output = Vec2d;

    fn add(self, rhs: Vec2d) -> Vec2d {
        Vec2d::add(self, rhs)
    }
}

impl Sub for Vec2d {
    type Output = Vec2d;

    fn sub(self, rhs: Vec2d) -> Vec2d {
        Vec2d::sub(self, rhs)
    }
}

impl Mul<f64> for Vec2d {
    type Output = Vec2d;

    fn mul(self, k: f64) -> Vec2d {
        self.scale(k)
    }
}

impl Mul<Vec2d> for f64 {
    type Output = Vec2d;

    fn mul(self, v: Vec2d) -> Vec2d {
        v.scale(self)
    }
}

impl Neg for Vec2d {
    type Output = Vec2d;

    fn neg(self) -> Vec2d {
        self.scale(-1.0)
    }
}

impl From<(f64, f64)> for Vec2d {
    fn from((x, y): (f64, f64)) -> Self {
        Vec2d::new(x, y)
    }
}

impl From<[f64; 2]> for Vec2d {
    fn from([x, y]: [f64; 2]) -> Self {
        Vec2d::new(x, y)
    }
}

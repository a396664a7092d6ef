//! Integer coordinates and the scaling rule shared by every shape dimension.

use std::fmt;

use crate::error::{ShapeError, ShapeResult};

/// Direction of a scale operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Multiply every dimension by the factor
    Multiply,
    /// Divide every dimension by the factor, truncating toward zero
    Divide,
}

impl From<bool> for ScaleMode {
    /// `true` selects multiplication, `false` division.
    fn from(multiply: bool) -> Self {
        if multiply {
            Self::Multiply
        } else {
            Self::Divide
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Multiply => write!(f, "multiply"),
            Self::Divide => write!(f, "divide"),
        }
    }
}

/// Scale a single integer dimension.
///
/// Multiplication wraps on overflow. Division truncates toward zero and
/// fails with [`ShapeError::DivisionByZero`] for a zero factor.
pub fn scale_value(value: i32, factor: i32, mode: ScaleMode) -> ShapeResult<i32> {
    match mode {
        ScaleMode::Multiply => Ok(value.wrapping_mul(factor)),
        ScaleMode::Divide if factor == 0 => Err(ShapeError::DivisionByZero),
        ScaleMode::Divide => Ok(value.wrapping_div(factor)),
    }
}

/// A 2D integer coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        // i64 differences cannot overflow for any pair of i32 coordinates.
        let dx = (i64::from(other.x) - i64::from(self.x)) as f64;
        let dy = (i64::from(other.y) - i64::from(self.y)) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Move the point by `(dx, dy)` in place.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }

    /// Scale both coordinates in place. On error the point is unchanged.
    pub fn scale(&mut self, factor: i32, mode: ScaleMode) -> ShapeResult<()> {
        let x = scale_value(self.x, factor, mode)?;
        let y = scale_value(self.y, factor, mode)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Returns the point as `X = {x}Y = {y}`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Point {
    // No separator between the two coordinates; console transcripts rely on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X = {}Y = {}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

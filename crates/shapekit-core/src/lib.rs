//! # ShapeKit Core
//!
//! Core types shared by every ShapeKit crate: the integer coordinate
//! [`Point`], the [`ScaleMode`] used by all resize operations, the error
//! taxonomy and the real-number formatting used when shapes are printed.

pub mod error;
pub mod format;
pub mod point;

pub use error::{ShapeError, ShapeResult};
pub use format::{format_real, DEFAULT_SIGNIFICANT_DIGITS};
pub use point::{scale_value, Point, ScaleMode};

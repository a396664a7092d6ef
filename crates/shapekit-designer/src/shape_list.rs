//! Ordered collection of owned shapes addressed by position.
//!
//! Indices are positional, not stable identities: removing a shape shifts
//! every later shape down by one.

use std::fmt;

use shapekit_core::{ScaleMode, ShapeError, ShapeResult};

use crate::model::{Shape, ShapeGeometry};

#[derive(Debug, Clone, Default)]
pub struct ShapeList {
    shapes: Vec<Shape>,
}

impl ShapeList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of shapes in the list.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    /// Appends a shape and returns its index.
    pub fn add(&mut self, shape: impl Into<Shape>) -> usize {
        let shape = shape.into();
        let index = self.shapes.len();
        tracing::debug!(index, shape_type = %shape.shape_type(), "shape added");
        self.shapes.push(shape);
        index
    }

    /// Removes the shape at `index`. Returns `false` (and changes nothing)
    /// when the index is out of range.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.shapes.len() {
            tracing::debug!(index, len = self.shapes.len(), "remove out of range");
            return false;
        }
        let removed = self.shapes.remove(index);
        tracing::debug!(index, shape_type = %removed.shape_type(), "shape removed");
        true
    }

    pub fn get(&self, index: usize) -> Option<&Shape> {
        self.shapes.get(index)
    }

    /// Like [`get`](Self::get), but reports a missing shape as
    /// [`ShapeError::OutOfRange`].
    pub fn try_get(&self, index: usize) -> ShapeResult<&Shape> {
        self.shapes.get(index).ok_or(ShapeError::OutOfRange {
            index,
            len: self.shapes.len(),
        })
    }

    /// Area of the shape at `index`, or 0.0 when there is no such shape.
    pub fn area_at(&self, index: usize) -> ShapeResult<f64> {
        match self.get(index) {
            Some(shape) => shape.area(),
            None => Ok(0.0),
        }
    }

    /// Perimeter of the shape at `index`, or 0.0 when there is no such shape.
    pub fn perimeter_at(&self, index: usize) -> f64 {
        self.get(index).map_or(0.0, |shape| shape.perimeter())
    }

    pub fn translate_all(&mut self, dx: i32, dy: i32) {
        tracing::debug!(dx, dy, count = self.shapes.len(), "translating shapes");
        for shape in &mut self.shapes {
            shape.translate(dx, dy);
        }
    }

    /// Scales every shape in insertion order.
    ///
    /// Stops at the first failure and reports its index. Shapes before that
    /// index stay scaled; the failing shape and those after it are untouched.
    pub fn scale_all(&mut self, factor: i32, mode: ScaleMode) -> ShapeResult<()> {
        tracing::debug!(factor, %mode, count = self.shapes.len(), "scaling shapes");
        for (index, shape) in self.shapes.iter_mut().enumerate() {
            if let Err(source) = shape.scale(factor, mode) {
                tracing::warn!(index, error = %source, "scaling stopped");
                return Err(ShapeError::ScaleFailed {
                    index,
                    source: Box::new(source),
                });
            }
        }
        Ok(())
    }

    /// Header line followed by one `index: description` line per shape.
    pub fn render_all(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ShapeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ShapeList: {} shapes: ", self.shapes.len())?;
        for (index, shape) in self.shapes.iter().enumerate() {
            write!(f, "{}: ", index)?;
            fmt::Display::fmt(shape, f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Circle, Rectangle, Square};
    use shapekit_core::Point;

    fn sample() -> ShapeList {
        let mut list = ShapeList::new();
        list.add(Rectangle::new(Point::new(0, 0), 4, 5));
        list.add(Square::new(Point::new(1, 1), 3));
        list.add(Circle::new(Point::new(0, 0), 2));
        list
    }

    #[test]
    fn test_add_returns_index() {
        let mut list = ShapeList::new();
        assert_eq!(list.add(Square::new(Point::new(0, 0), 1)), 0);
        assert_eq!(list.add(Square::new(Point::new(0, 0), 2)), 1);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_shifts_indices() {
        let mut list = sample();
        assert!(list.remove_at(0));
        assert_eq!(list.len(), 2);
        assert_eq!(list.area_at(0).unwrap(), 9.0);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut empty = ShapeList::new();
        assert!(!empty.remove_at(0));
        assert!(empty.is_empty());

        let mut list = sample();
        assert!(!list.remove_at(3));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_try_get_reports_range() {
        let list = sample();
        assert!(list.try_get(2).is_ok());
        assert_eq!(
            list.try_get(5).unwrap_err(),
            ShapeError::OutOfRange { index: 5, len: 3 }
        );
    }

    #[test]
    fn test_queries_on_invalid_index() {
        let list = sample();
        assert!(list.get(3).is_none());
        assert_eq!(list.area_at(3).unwrap(), 0.0);
        assert_eq!(list.perimeter_at(usize::MAX), 0.0);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_scale_all_division_by_zero_changes_nothing() {
        let mut list = sample();
        let err = list.scale_all(0, ScaleMode::Divide).unwrap_err();
        assert!(matches!(err, ShapeError::ScaleFailed { index: 0, .. }));
        assert!(err.is_division_by_zero());
        assert_eq!(list.area_at(0).unwrap(), 20.0);
    }

    #[test]
    fn test_render_empty_list() {
        assert_eq!(ShapeList::new().render_all(), "ShapeList: 0 shapes: \n");
    }
}

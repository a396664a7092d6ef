use std::fmt;

use shapekit_core::{scale_value, Point, ScaleMode, ShapeResult};

use super::{format_area, format_measure, ShapeGeometry, ShapeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    pub position: Point,
    pub length: i32,
    pub width: i32,
}

impl Rectangle {
    pub fn new(position: Point, length: i32, width: i32) -> Self {
        Self {
            position,
            length,
            width,
        }
    }
}

impl ShapeGeometry for Rectangle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Rectangle
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn area(&self) -> ShapeResult<f64> {
        Ok(f64::from(self.length) * f64::from(self.width))
    }

    fn perimeter(&self) -> f64 {
        2.0 * (f64::from(self.length) + f64::from(self.width))
    }

    fn scale(&mut self, factor: i32, mode: ScaleMode) -> ShapeResult<()> {
        let length = scale_value(self.length, factor, mode)?;
        let width = scale_value(self.width, factor, mode)?;
        self.length = length;
        self.width = width;
        Ok(())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let area = format_area(self.area(), f);
        let perimeter = format_measure(self.perimeter(), f);
        write!(
            f,
            "Position of Rectangle is {}, length is {}, width is {}, Area is {}Finally, the perimeter is {}",
            self.position, self.length, self.width, area, perimeter
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapekit_core::ShapeError;

    #[test]
    fn test_area_and_perimeter() {
        let rect = Rectangle::new(Point::new(0, 0), 4, 5);
        assert_eq!(rect.area().unwrap(), 20.0);
        assert_eq!(rect.perimeter(), 18.0);
        assert_eq!(rect.side_count(), 4);
    }

    #[test]
    fn test_scale_both_dimensions() {
        let mut rect = Rectangle::new(Point::new(0, 0), 4, 5);
        rect.scale(3, ScaleMode::Multiply).unwrap();
        assert_eq!((rect.length, rect.width), (12, 15));

        rect.scale(2, ScaleMode::Divide).unwrap();
        assert_eq!((rect.length, rect.width), (6, 7));
    }

    #[test]
    fn test_scale_does_not_move_position() {
        let mut rect = Rectangle::new(Point::new(3, 3), 1, 1);
        rect.scale(10, ScaleMode::Multiply).unwrap();
        assert_eq!(rect.position(), Point::new(3, 3));
    }

    #[test]
    fn test_divide_by_zero() {
        let mut rect = Rectangle::new(Point::new(0, 0), 4, 5);
        assert_eq!(
            rect.scale(0, ScaleMode::Divide),
            Err(ShapeError::DivisionByZero)
        );
        assert_eq!((rect.length, rect.width), (4, 5));
    }

    #[test]
    fn test_large_dimensions_do_not_overflow_area() {
        let rect = Rectangle::new(Point::new(0, 0), i32::MAX, 2);
        assert_eq!(rect.area().unwrap(), 2.0 * i32::MAX as f64);
    }

    #[test]
    fn test_render() {
        let rect = Rectangle::new(Point::new(0, 0), 4, 5);
        assert_eq!(
            rect.render(),
            "Position of Rectangle is X = 0Y = 0, length is 4, width is 5, Area is 20Finally, the perimeter is 18"
        );
    }
}

use std::fmt;

use shapekit_core::{scale_value, Point, ScaleMode, ShapeResult};

use super::{format_area, format_measure, ShapeGeometry, ShapeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    pub position: Point,
    pub side: i32,
}

impl Square {
    pub fn new(position: Point, side: i32) -> Self {
        Self { position, side }
    }
}

impl ShapeGeometry for Square {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Square
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn area(&self) -> ShapeResult<f64> {
        let side = f64::from(self.side);
        Ok(side * side)
    }

    fn perimeter(&self) -> f64 {
        4.0 * f64::from(self.side)
    }

    fn scale(&mut self, factor: i32, mode: ScaleMode) -> ShapeResult<()> {
        self.side = scale_value(self.side, factor, mode)?;
        Ok(())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let area = format_area(self.area(), f);
        let perimeter = format_measure(self.perimeter(), f);
        write!(
            f,
            "Position of Square is  {}, Side is {}, Area is {}, Finally the perimeter is  {}",
            self.position, self.side, area, perimeter
        )
    }
}

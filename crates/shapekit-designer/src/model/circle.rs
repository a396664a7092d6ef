use std::f64::consts::PI;
use std::fmt;

use shapekit_core::{scale_value, Point, ScaleMode, ShapeResult};

use super::{format_area, format_measure, ShapeGeometry, ShapeType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    pub position: Point,
    pub radius: i32,
}

impl Circle {
    pub fn new(position: Point, radius: i32) -> Self {
        Self { position, radius }
    }
}

impl ShapeGeometry for Circle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn position(&self) -> Point {
        self.position
    }

    fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    fn area(&self) -> ShapeResult<f64> {
        let radius = f64::from(self.radius);
        Ok(PI * radius * radius)
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * f64::from(self.radius)
    }

    fn scale(&mut self, factor: i32, mode: ScaleMode) -> ShapeResult<()> {
        self.radius = scale_value(self.radius, factor, mode)?;
        Ok(())
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let area = format_area(self.area(), f);
        let perimeter = format_measure(self.perimeter(), f);
        write!(
            f,
            "Position of Circle is {}, Radius is {}, Area is  {}, and finally perimeter is {}",
            self.position, self.radius, area, perimeter
        )
    }
}

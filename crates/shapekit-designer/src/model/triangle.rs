use std::fmt;

use shapekit_core::{scale_value, Point, ScaleMode, ShapeError, ShapeResult};

use super::{format_area, format_measure, ShapeGeometry, ShapeType};

/// Relative slack for a Heron radicand that is negative only through
/// floating-point rounding.
const HERON_TOLERANCE: f64 = 64.0 * f64::EPSILON;

/// Area of a triangle with side lengths `a`, `b`, `c` (Heron's formula).
///
/// Collinear vertices give an area of 0. Side lengths that violate the
/// triangle inequality fail with [`ShapeError::InvalidGeometry`] instead of
/// producing NaN.
pub fn heron_area(a: f64, b: f64, c: f64) -> ShapeResult<f64> {
    let s = (a + b + c) / 2.0;
    let radicand = s * (s - a) * (s - b) * (s - c);
    if !radicand.is_finite() {
        return Err(ShapeError::invalid_geometry(format!(
            "side lengths {a}, {b}, {c} give a non-finite area"
        )));
    }
    if radicand < -HERON_TOLERANCE * s.powi(4) {
        return Err(ShapeError::invalid_geometry(format!(
            "side lengths {a}, {b}, {c} do not form a triangle"
        )));
    }
    Ok(radicand.max(0.0).sqrt())
}

/// A triangle defined by three independent vertices.
///
/// The anchor position is always `vertex_1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    pub vertex_1: Point,
    pub vertex_2: Point,
    pub vertex_3: Point,
}

impl Triangle {
    pub fn new(vertex_1: Point, vertex_2: Point, vertex_3: Point) -> Self {
        Self {
            vertex_1,
            vertex_2,
            vertex_3,
        }
    }

    /// Side lengths `v1-v2`, `v2-v3`, `v3-v1`.
    pub fn side_lengths(&self) -> (f64, f64, f64) {
        (
            self.vertex_1.distance(&self.vertex_2),
            self.vertex_2.distance(&self.vertex_3),
            self.vertex_3.distance(&self.vertex_1),
        )
    }
}

impl ShapeGeometry for Triangle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Triangle
    }

    fn position(&self) -> Point {
        self.vertex_1
    }

    fn set_position(&mut self, position: Point) {
        let dx = position.x().wrapping_sub(self.vertex_1.x());
        let dy = position.y().wrapping_sub(self.vertex_1.y());
        self.translate(dx, dy);
    }

    fn area(&self) -> ShapeResult<f64> {
        let (a, b, c) = self.side_lengths();
        heron_area(a, b, c)
    }

    fn perimeter(&self) -> f64 {
        let (a, b, c) = self.side_lengths();
        a + b + c
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.vertex_1.translate(dx, dy);
        self.vertex_2.translate(dx, dy);
        self.vertex_3.translate(dx, dy);
    }

    fn scale(&mut self, factor: i32, mode: ScaleMode) -> ShapeResult<()> {
        // Validate once so a zero divisor cannot leave some vertices scaled.
        scale_value(0, factor, mode)?;
        self.vertex_1.scale(factor, mode)?;
        self.vertex_2.scale(factor, mode)?;
        self.vertex_3.scale(factor, mode)?;
        Ok(())
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let area = format_area(self.area(), f);
        let perimeter = format_measure(self.perimeter(), f);
        write!(
            f,
            "The vertex 1 of triangle is {}, the vertex 2 of triangle is {}, the vertex 3 of triangle is {}, the area of the triangle is {}, finally the perimeter of triangle is {}",
            self.vertex_1, self.vertex_2, self.vertex_3, area, perimeter
        )
    }
}

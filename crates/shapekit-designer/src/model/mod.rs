use std::fmt;

use shapekit_core::{format_real, Point, ScaleMode, ShapeResult, DEFAULT_SIGNIFICANT_DIGITS};

mod circle;
mod rectangle;
mod square;
mod triangle;

pub use circle::Circle;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::{heron_area, Triangle};

/// Capability set shared by every shape.
///
/// `Display` renders the human-readable description. The formatter
/// precision, when given (`{:.4}`), is the number of significant digits used
/// for area and perimeter.
pub trait ShapeGeometry: fmt::Display {
    fn shape_type(&self) -> ShapeType;

    /// Anchor point of the shape.
    fn position(&self) -> Point;

    /// Move the shape so that its anchor point lands on `position`.
    fn set_position(&mut self, position: Point);

    fn area(&self) -> ShapeResult<f64>;

    fn perimeter(&self) -> f64;

    /// Resize the shape. A failed scale leaves the shape unchanged.
    fn scale(&mut self, factor: i32, mode: ScaleMode) -> ShapeResult<()>;

    fn side_count(&self) -> u32 {
        self.shape_type().side_count()
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        let mut position = self.position();
        position.translate(dx, dy);
        self.set_position(position);
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Rectangle,
    Square,
    Circle,
    Triangle,
}

impl ShapeType {
    /// Number of sides; circles are not polygons and report 0.
    pub fn side_count(self) -> u32 {
        match self {
            ShapeType::Rectangle | ShapeType::Square => 4,
            ShapeType::Circle => 0,
            ShapeType::Triangle => 3,
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeType::Rectangle => write!(f, "Rectangle"),
            ShapeType::Square => write!(f, "Square"),
            ShapeType::Circle => write!(f, "Circle"),
            ShapeType::Triangle => write!(f, "Triangle"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Square(Square),
    Circle(Circle),
    Triangle(Triangle),
}

impl ShapeGeometry for Shape {
    fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Rectangle(s) => s.shape_type(),
            Shape::Square(s) => s.shape_type(),
            Shape::Circle(s) => s.shape_type(),
            Shape::Triangle(s) => s.shape_type(),
        }
    }

    fn position(&self) -> Point {
        match self {
            Shape::Rectangle(s) => s.position(),
            Shape::Square(s) => s.position(),
            Shape::Circle(s) => s.position(),
            Shape::Triangle(s) => s.position(),
        }
    }

    fn set_position(&mut self, position: Point) {
        match self {
            Shape::Rectangle(s) => s.set_position(position),
            Shape::Square(s) => s.set_position(position),
            Shape::Circle(s) => s.set_position(position),
            Shape::Triangle(s) => s.set_position(position),
        }
    }

    fn area(&self) -> ShapeResult<f64> {
        match self {
            Shape::Rectangle(s) => s.area(),
            Shape::Square(s) => s.area(),
            Shape::Circle(s) => s.area(),
            Shape::Triangle(s) => s.area(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            Shape::Rectangle(s) => s.perimeter(),
            Shape::Square(s) => s.perimeter(),
            Shape::Circle(s) => s.perimeter(),
            Shape::Triangle(s) => s.perimeter(),
        }
    }

    fn scale(&mut self, factor: i32, mode: ScaleMode) -> ShapeResult<()> {
        match self {
            Shape::Rectangle(s) => s.scale(factor, mode),
            Shape::Square(s) => s.scale(factor, mode),
            Shape::Circle(s) => s.scale(factor, mode),
            Shape::Triangle(s) => s.scale(factor, mode),
        }
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Rectangle(s) => s.translate(dx, dy),
            Shape::Square(s) => s.translate(dx, dy),
            Shape::Circle(s) => s.translate(dx, dy),
            Shape::Triangle(s) => s.translate(dx, dy),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Forward the formatter itself so a requested precision survives.
        match self {
            Shape::Rectangle(s) => fmt::Display::fmt(s, f),
            Shape::Square(s) => fmt::Display::fmt(s, f),
            Shape::Circle(s) => fmt::Display::fmt(s, f),
            Shape::Triangle(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(shape: Rectangle) -> Self {
        Shape::Rectangle(shape)
    }
}

impl From<Square> for Shape {
    fn from(shape: Square) -> Self {
        Shape::Square(shape)
    }
}

impl From<Circle> for Shape {
    fn from(shape: Circle) -> Self {
        Shape::Circle(shape)
    }
}

impl From<Triangle> for Shape {
    fn from(shape: Triangle) -> Self {
        Shape::Triangle(shape)
    }
}

/// Significant digits requested through the formatter, or the default.
fn significant_digits(f: &fmt::Formatter<'_>) -> usize {
    f.precision().unwrap_or(DEFAULT_SIGNIFICANT_DIGITS)
}

fn format_measure(value: f64, f: &fmt::Formatter<'_>) -> String {
    format_real(value, significant_digits(f))
}

/// Areas that cannot be computed print as `undefined`.
fn format_area(area: ShapeResult<f64>, f: &fmt::Formatter<'_>) -> String {
    match area {
        Ok(value) => format_measure(value, f),
        Err(_) => "undefined".to_string(),
    }
}

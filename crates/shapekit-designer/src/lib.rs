//! # ShapeKit Designer
//!
//! Shape models and the collection that owns them.
//!
//! ## Core Components
//!
//! ### Shapes
//! - **Rectangle**, **Square**, **Circle**: a single anchor position plus
//!   their own integer dimensions
//! - **Triangle**: three independent vertices; its position is always the
//!   first vertex
//! - **ShapeGeometry**: the capability set every shape implements (area,
//!   perimeter, translate, scale, text rendering)
//!
//! ### Collection
//! - **ShapeList**: ordered, index-addressed list of owned shapes with bulk
//!   translate and scale
//!
//! ## Architecture
//!
//! ```text
//! ShapeList (Vec<Shape>)
//!   └── Shape (closed enum, delegates to ShapeGeometry)
//!         ├── Rectangle
//!         ├── Square
//!         ├── Circle
//!         └── Triangle
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_designer::{Rectangle, ShapeList};
//! use shapekit_core::{Point, ScaleMode};
//!
//! let mut shapes = ShapeList::new();
//! shapes.add(Rectangle::new(Point::new(0, 0), 4, 5));
//! assert_eq!(shapes.area_at(0).unwrap(), 20.0);
//!
//! shapes.scale_all(2, ScaleMode::Multiply).unwrap();
//! assert_eq!(shapes.perimeter_at(0), 36.0);
//! ```

pub mod model;
pub mod shape_list;

pub use model::{Circle, Rectangle, Shape, ShapeGeometry, ShapeType, Square, Triangle};
pub use shape_list::ShapeList;

pub use shapekit_core::{Point, ScaleMode, ShapeError, ShapeResult};

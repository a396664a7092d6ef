//! # ShapeKit UI
//!
//! Text front end for the shape collection. A single [`Console`] owns the
//! session's [`ShapeList`](shapekit_designer::ShapeList), reads integer
//! tokens from any `BufRead` and writes prompts and results to any `Write`,
//! so the same code drives stdin/stdout and in-memory test transcripts.
//!
//! ```text
//! Console
//!   ├── TokenReader (whitespace-separated integers, may span lines)
//!   ├── MenuChoice  (numbered menu entries)
//!   └── ShapeList   (the session's shapes)
//! ```

pub mod console;
pub mod error;
pub mod input;
pub mod menu;

pub use console::{Console, ConsoleOptions};
pub use error::{InputError, InputResult};
pub use input::TokenReader;
pub use menu::{shape_type_from_code, MenuChoice};

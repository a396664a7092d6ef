//! The interactive menu loop.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use shapekit_core::{format_real, Point, ScaleMode, DEFAULT_SIGNIFICANT_DIGITS};
use shapekit_designer::{Circle, Rectangle, Shape, ShapeList, ShapeType, Square, Triangle};
use shapekit_settings::Config;

use crate::error::{InputError, InputResult};
use crate::input::TokenReader;
use crate::menu::{shape_type_from_code, MenuChoice, SHAPE_KINDS};

/// Presentation options taken from the configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Print the menu before every prompt instead of once per session.
    pub show_menu: bool,
    pub significant_digits: usize,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            show_menu: true,
            significant_digits: DEFAULT_SIGNIFICANT_DIGITS,
        }
    }
}

impl From<&Config> for ConsoleOptions {
    fn from(config: &Config) -> Self {
        Self {
            show_menu: config.console.show_menu,
            significant_digits: config.display.significant_digits,
        }
    }
}

/// Menu-driven session over a single shape list.
pub struct Console<R, W> {
    input: TokenReader<R>,
    output: W,
    shapes: ShapeList,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            input: TokenReader::new(reader),
            output,
            shapes: ShapeList::new(),
            options,
        }
    }

    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs until the user quits or input ends.
    ///
    /// Only output failures are returned; every input or shape error is
    /// reported on the console and the menu is shown again.
    pub fn run(&mut self) -> std::io::Result<()> {
        tracing::info!("console session started");
        let mut first = true;
        loop {
            if self.options.show_menu || first {
                self.print_menu()?;
            }
            first = false;

            write!(self.output, "Enter your choice: ")?;
            self.output.flush()?;

            let code = match self.input.next_i32() {
                Ok(code) => code,
                Err(err) => match self.recover(err)? {
                    Flow::Continue => continue,
                    Flow::Stop => break,
                },
            };

            let Some(choice) = MenuChoice::from_code(code) else {
                writeln!(self.output, "Number is not valid, enter again.")?;
                continue;
            };

            tracing::debug!(?choice, "menu command");
            match self.execute(choice) {
                Ok(ControlFlow::Continue(())) => {}
                Ok(ControlFlow::Break(())) => break,
                Err(err) => {
                    if let Flow::Stop = self.recover(err)? {
                        break;
                    }
                }
            }
        }
        tracing::info!(shapes = self.shapes.len(), "console session ended");
        self.output.flush()
    }

    /// Runs a single menu command, reading its arguments from the input.
    ///
    /// Returns `Break` once the session should end ([`MenuChoice::Quit`]).
    pub fn execute(&mut self, choice: MenuChoice) -> InputResult<ControlFlow<()>> {
        match choice {
            MenuChoice::AddShape => self.add_shape()?,
            MenuChoice::RemoveShape => self.remove_shape()?,
            MenuChoice::ShowShape => self.show_shape()?,
            MenuChoice::ShowMeasurements => self.show_measurements()?,
            MenuChoice::ShowAll => self.show_all()?,
            MenuChoice::TranslateAll => self.translate_all()?,
            MenuChoice::ScaleAll => self.scale_all()?,
            MenuChoice::Quit => {
                writeln!(self.output, "Exiting")?;
                return Ok(ControlFlow::Break(()));
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn recover(&mut self, err: InputError) -> std::io::Result<Flow> {
        match err {
            InputError::EndOfInput => {
                writeln!(self.output)?;
                Ok(Flow::Stop)
            }
            InputError::NotAnInteger { .. } => {
                tracing::debug!(error = %err, "rejected input");
                writeln!(self.output, "{}", err)?;
                Ok(Flow::Continue)
            }
            InputError::Io(err) => Err(err),
        }
    }

    fn print_menu(&mut self) -> std::io::Result<()> {
        writeln!(self.output, "\nManagement Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}", choice)?;
        }
        Ok(())
    }

    fn prompt_i32(&mut self, prompt: &str) -> InputResult<i32> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.input.next_i32()
    }

    fn read_point(&mut self) -> InputResult<Point> {
        let x = self.input.next_i32()?;
        let y = self.input.next_i32()?;
        Ok(Point::new(x, y))
    }

    /// Reads a position; negative values map to `None`.
    fn prompt_index(&mut self, prompt: &str) -> InputResult<Option<usize>> {
        let value = self.prompt_i32(prompt)?;
        Ok(usize::try_from(value).ok())
    }

    fn add_shape(&mut self) -> InputResult<()> {
        writeln!(self.output, "Select what shape you want to add.")?;
        for (index, kind) in SHAPE_KINDS.iter().enumerate() {
            writeln!(self.output, "{}. {}", index + 1, kind)?;
        }
        let code = self.prompt_i32("Choice: ")?;
        let Some(kind) = shape_type_from_code(code) else {
            writeln!(self.output, "Invalid choice")?;
            return Ok(());
        };

        write!(self.output, "Enter the x and y coordinates of the shape: ")?;
        self.output.flush()?;
        let position = self.read_point()?;

        let shape: Shape = match kind {
            ShapeType::Rectangle => {
                write!(
                    self.output,
                    "Enter the length and width of the shape of rectangle: "
                )?;
                self.output.flush()?;
                let length = self.input.next_i32()?;
                let width = self.input.next_i32()?;
                Rectangle::new(position, length, width).into()
            }
            ShapeType::Square => {
                let side = self.prompt_i32("Enter the side length of the shape of square: ")?;
                Square::new(position, side).into()
            }
            ShapeType::Circle => {
                let radius = self.prompt_i32("Enter the radius of the shape of circle: ")?;
                Circle::new(position, radius).into()
            }
            ShapeType::Triangle => {
                // The anchor read above is not used; a triangle is placed by its vertices.
                write!(
                    self.output,
                    "Enter the x and y coordinates of the triangle(x_1 y_1 x_2 y_2 x_3 y_3): "
                )?;
                self.output.flush()?;
                let v1 = self.read_point()?;
                let v2 = self.read_point()?;
                let v3 = self.read_point()?;
                Triangle::new(v1, v2, v3).into()
            }
        };

        self.shapes.add(shape);
        writeln!(self.output, "Shape created successfully.")?;
        Ok(())
    }

    fn remove_shape(&mut self) -> InputResult<()> {
        let index = self.prompt_index("Enter the position of the shape to remove: ")?;
        if index.is_some_and(|index| self.shapes.remove_at(index)) {
            writeln!(self.output, "Shape removed successfully.")?;
        } else {
            writeln!(
                self.output,
                "Position out of range or no such shape exists."
            )?;
        }
        Ok(())
    }

    fn show_shape(&mut self) -> InputResult<()> {
        let index =
            self.prompt_index("Enter the position of the shape to display information for: ")?;
        let digits = self.options.significant_digits;
        match index.and_then(|index| self.shapes.get(index)) {
            Some(shape) => writeln!(self.output, "{:.*}", digits, shape)?,
            None => writeln!(
                self.output,
                "No shape at that position or invalid position."
            )?,
        }
        Ok(())
    }

    fn show_measurements(&mut self) -> InputResult<()> {
        let index = self.prompt_index("Enter the position of the shape: ")?;
        let digits = self.options.significant_digits;
        let (area, perimeter) = match index {
            Some(index) => (self.shapes.area_at(index), self.shapes.perimeter_at(index)),
            None => (Ok(0.0), 0.0),
        };
        match area {
            Ok(area) => writeln!(self.output, "Area: {}", format_real(area, digits))?,
            Err(err) => {
                tracing::warn!(error = %err, "area unavailable");
                writeln!(self.output, "Area: undefined ({})", err)?;
            }
        }
        writeln!(self.output, "Perimeter: {}", format_real(perimeter, digits))?;
        Ok(())
    }

    fn show_all(&mut self) -> InputResult<()> {
        let digits = self.options.significant_digits;
        write!(self.output, "{:.*}", digits, self.shapes)?;
        Ok(())
    }

    fn translate_all(&mut self) -> InputResult<()> {
        let dx = self.prompt_i32("Enter the x distance to translate: ")?;
        let dy = self.prompt_i32("Enter the y distance to translate: ")?;
        self.shapes.translate_all(dx, dy);
        writeln!(self.output, "All done")?;
        Ok(())
    }

    fn scale_all(&mut self) -> InputResult<()> {
        let factor = self.prompt_i32("Enter the scaling factor: ")?;
        let mode = match self.prompt_i32("Enter 1 for multiplication or 0 for division: ")? {
            1 => ScaleMode::Multiply,
            0 => ScaleMode::Divide,
            _ => {
                writeln!(self.output, "Scale mode must be 1 or 0.")?;
                return Ok(());
            }
        };
        match self.shapes.scale_all(factor, mode) {
            Ok(()) => writeln!(self.output, "All done")?,
            Err(err) => writeln!(self.output, "{}", err)?,
        }
        Ok(())
    }
}

enum Flow {
    Continue,
    Stop,
}

//! Menu entries and their numeric codes.

use std::fmt;

use shapekit_designer::ShapeType;

/// Main menu entries, numbered 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddShape,
    RemoveShape,
    ShowShape,
    ShowMeasurements,
    ShowAll,
    TranslateAll,
    ScaleAll,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddShape,
        MenuChoice::RemoveShape,
        MenuChoice::ShowShape,
        MenuChoice::ShowMeasurements,
        MenuChoice::ShowAll,
        MenuChoice::TranslateAll,
        MenuChoice::ScaleAll,
        MenuChoice::Quit,
    ];

    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|code| code.checked_sub(1))
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn code(self) -> i32 {
        match self {
            MenuChoice::AddShape => 1,
            MenuChoice::RemoveShape => 2,
            MenuChoice::ShowShape => 3,
            MenuChoice::ShowMeasurements => 4,
            MenuChoice::ShowAll => 5,
            MenuChoice::TranslateAll => 6,
            MenuChoice::ScaleAll => 7,
            MenuChoice::Quit => 8,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddShape => "Add shape",
            MenuChoice::RemoveShape => "Remove a shape by position",
            MenuChoice::ShowShape => "Get info about a shape by position",
            MenuChoice::ShowMeasurements => "Area and perimeter of the shape by position",
            MenuChoice::ShowAll => "Display info for all the shapes",
            MenuChoice::TranslateAll => "Translate all the shapes",
            MenuChoice::ScaleAll => "Scale all the shapes",
            MenuChoice::Quit => "Quit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.code(), self.label())
    }
}

/// Shape kinds offered by "Add shape", numbered 1 to 4.
pub const SHAPE_KINDS: [ShapeType; 4] = [
    ShapeType::Rectangle,
    ShapeType::Square,
    ShapeType::Circle,
    ShapeType::Triangle,
];

pub fn shape_type_from_code(code: i32) -> Option<ShapeType> {
    usize::try_from(code)
        .ok()
        .and_then(|code| code.checked_sub(1))
        .and_then(|index| SHAPE_KINDS.get(index).copied())
}

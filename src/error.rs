//! Errors for input that comes from outside the program: configuration values, ASCII maps
//! and interactive cell selection. Misuse of the query API is not reported here; it panics.

use grid_util::point::Point;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Width or height is zero.
    EmptyDimension { width: usize, height: usize },
    /// Width or height exceeds the supported maximum.
    DimensionTooLarge {
        name: &'static str,
        value: usize,
        max: usize,
    },
    /// Wall probability is not a percentage.
    WallProbabilityOutOfRange(u8),
    /// A map row differs in length from the first row.
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A map contains a character other than `.` and `#`.
    UnknownCell { ch: char, x: usize, y: usize },
    /// The point lies outside the field.
    OutOfBounds(Point),
    /// The point is a blocked cell and cannot start or end a path.
    BlockedCell(Point),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimension { width, height } => {
                write!(f, "field must have at least one cell, got {width}x{height}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds the maximum of {max}")
            }
            Self::WallProbabilityOutOfRange(p) => {
                write!(f, "wall probability {p} is not in 0..=100")
            }
            Self::RaggedRow { row, len, expected } => {
                write!(f, "row {row} has {len} cells, expected {expected}")
            }
            Self::UnknownCell { ch, x, y } => {
                write!(f, "unknown cell {ch:?} at ({x}, {y})")
            }
            Self::OutOfBounds(p) => write!(f, "{p} is outside of the field"),
            Self::BlockedCell(p) => write!(f, "{p} is a wall and cannot be selected"),
        }
    }
}

impl std::error::Error for FieldError {}

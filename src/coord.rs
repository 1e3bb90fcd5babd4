//! Board coordinates and their human-readable labels ("A1" .. "J10").
//!
//! Internally a [`Coordinate`] is a zero-based `(row, col)` pair. Labels put
//! the column letter first and a 1-based row number after it, so `"B7"` is
//! row 6, column 1.

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, MAX_BOARD_SIZE};

/// Zero-based grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// `true` when the coordinate lies on a `size`×`size` grid.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Parse a label such as `"b7"` against a `board_size`×`board_size` grid.
    ///
    /// The column letter is case-insensitive; the row is one or two ASCII
    /// digits in `1..=board_size`. Anything else is [`BoardError::InvalidLabel`].
    pub fn parse(label: &str, board_size: usize) -> Result<Self, BoardError> {
        let bytes = label.as_bytes();
        if !(2..=3).contains(&bytes.len()) || board_size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidLabel);
        }

        let letter = bytes[0].to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return Err(BoardError::InvalidLabel);
        }
        let col = (letter - b'A') as usize;
        if col >= board_size {
            return Err(BoardError::InvalidLabel);
        }

        let digits = &bytes[1..];
        if !digits.iter().all(u8::is_ascii_digit) {
            return Err(BoardError::InvalidLabel);
        }
        let row = digits
            .iter()
            .fold(0usize, |acc, d| acc * 10 + (d - b'0') as usize);
        if row == 0 || row > board_size {
            return Err(BoardError::InvalidLabel);
        }

        Ok(Self::new(row - 1, col))
    }

    /// Column letter for this coordinate.
    pub fn column_letter(&self) -> char {
        column_letter(self.col)
    }
}

/// Letter used for column `col` in labels and board headers.
pub fn column_letter(col: usize) -> char {
    u32::try_from(col)
        .ok()
        .and_then(|c| char::from_u32('A' as u32 + c))
        .unwrap_or('?')
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row + 1)
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    /// Parses against the default [`BOARD_SIZE`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, BOARD_SIZE)
    }
}

/// Parse a label on the standard board.
pub fn parse_coordinate(label: &str) -> Result<Coordinate, BoardError> {
    Coordinate::parse(label, BOARD_SIZE)
}

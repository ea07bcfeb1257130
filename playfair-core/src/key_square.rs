// File:    key_square.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Builds the 5x5 Playfair key square from a keyword and answers letter/position lookups against it.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::letter::{ALPHABET, Letter, normalize, to_text};
use log::debug;
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::fmt;

/// Side length of the key square.
pub const SIZE: usize = 5;

/// The location of a letter inside a [`KeySquare`]. Both fields are in `0..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Position {
    /// This position moved `step` columns to the right, wrapping within the row.
    #[must_use]
    pub const fn shift_col(self, step: usize) -> Self {
        Self {
            row: self.row,
            col: (self.col + step) % SIZE,
        }
    }

    /// This position moved `step` rows down, wrapping within the column.
    #[must_use]
    pub const fn shift_row(self, step: usize) -> Self {
        Self {
            row: (self.row + step) % SIZE,
            col: self.col,
        }
    }
}

/// A 5x5 grid holding each letter of the Playfair alphabet exactly once.
///
/// The square is immutable once built. Alongside the grid it keeps the
/// reverse index from letter to position, so lookups never search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySquare {
    grid: [[Letter; SIZE]; SIZE],
    positions: [Position; ALPHABET.len()],
}

impl KeySquare {
    /// Builds the key square for `keyword`.
    ///
    /// The keyword is normalized (uppercased, `J` read as `I`, non-letters
    /// dropped) and its letters are placed in first-seen order, followed by
    /// the rest of the alphabet in alphabetical order. The 25 letters fill
    /// the grid row by row. A keyword with no letters yields the plain
    /// alphabetical square.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        let mut placed = [false; ALPHABET.len()];
        let mut order = Vec::with_capacity(ALPHABET.len());
        for letter in normalize(keyword).into_iter().chain(ALPHABET) {
            if !placed[letter.index()] {
                placed[letter.index()] = true;
                order.push(letter);
            }
        }
        debug_assert_eq!(
            order.len(),
            ALPHABET.len(),
            "key square must hold every letter"
        );

        let mut grid = [[ALPHABET[0]; SIZE]; SIZE];
        let mut positions = [Position { row: 0, col: 0 }; ALPHABET.len()];
        for (cell, letter) in order.into_iter().enumerate() {
            let position = Position {
                row: cell / SIZE,
                col: cell % SIZE,
            };
            grid[position.row][position.col] = letter;
            positions[letter.index()] = position;
        }

        let square = Self { grid, positions };
        debug!(
            "Built key square {:?} from a {}-char keyword",
            square.row_strings(),
            keyword.chars().count()
        );
        square
    }

    /// The grid, row-major.
    #[must_use]
    pub const fn rows(&self) -> &[[Letter; SIZE]; SIZE] {
        &self.grid
    }

    /// Each row rendered as a 5-letter string.
    #[must_use]
    pub fn row_strings(&self) -> Vec<String> {
        self.grid.iter().map(|row| to_text(row.as_slice())).collect()
    }

    /// The letter stored at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside the 5x5 grid.
    #[must_use]
    pub const fn letter_at(&self, position: Position) -> Letter {
        self.grid[position.row][position.col]
    }

    /// Where `letter` sits in the square. Every letter has exactly one cell.
    #[must_use]
    pub fn position(&self, letter: Letter) -> Position {
        self.positions[letter.index()]
    }
}

impl fmt::Display for KeySquare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, letter) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

impl Serialize for KeySquare {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(SIZE))?;
        for row in self.row_strings() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

// File:    transform.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Applies the Playfair row, column and rectangle rules to a single digraph.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::digraph::Digraph;
use crate::key_square::{KeySquare, Position, SIZE};
use log::trace;
use serde::Serialize;

/// Which way a digraph is substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Plaintext to ciphertext: shift right / down.
    Encrypt,
    /// Ciphertext to plaintext: shift left / up.
    Decrypt,
}

impl Direction {
    /// Forward shift that moves one cell in this direction on a wrapping 5-cell line.
    const fn step(self) -> usize {
        match self {
            Self::Encrypt => 1,
            Self::Decrypt => SIZE - 1,
        }
    }
}

/// Substitutes one digraph using `square`.
///
/// * Same row: each letter is replaced by its neighbour to the right
///   (encrypt) or left (decrypt), wrapping around the row.
/// * Same column: each letter is replaced by its neighbour below (encrypt)
///   or above (decrypt), wrapping around the column.
/// * Otherwise the letters mark opposite corners of a rectangle and each is
///   replaced by the corner on its own row. This case is its own inverse.
///
/// Decrypting the encryption of any digraph under the same square returns
/// the original digraph.
#[must_use]
pub fn transform_digraph(digraph: Digraph, square: &KeySquare, direction: Direction) -> Digraph {
    let first = square.position(digraph.0);
    let second = square.position(digraph.1);
    let step = direction.step();

    let (first, second) = if first.row == second.row {
        (first.shift_col(step), second.shift_col(step))
    } else if first.col == second.col {
        (first.shift_row(step), second.shift_row(step))
    } else {
        (
            Position {
                row: first.row,
                col: second.col,
            },
            Position {
                row: second.row,
                col: first.col,
            },
        )
    };

    let result = Digraph(square.letter_at(first), square.letter_at(second));
    trace!("{direction:?} {digraph} -> {result}");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::Letter;

    fn digraph(pair: &str) -> Digraph {
        let mut letters = pair.chars().filter_map(Letter::from_char);
        Digraph(letters.next().unwrap(), letters.next().unwrap())
    }

    fn playfair_square() -> KeySquare {
        // P L A Y F / I R B C D / E G H K M / N O Q S T / U V W X Z
        KeySquare::from_keyword("PLAYFAIR")
    }

    #[test]
    fn test_same_row_shifts_right_and_wraps() {
        let square = playfair_square();
        assert_eq!(
            transform_digraph(digraph("AF"), &square, Direction::Encrypt),
            digraph("YP")
        );
        assert_eq!(
            transform_digraph(digraph("YP"), &square, Direction::Decrypt),
            digraph("AF")
        );
    }

    #[test]
    fn test_same_column_shifts_down_and_wraps() {
        let square = playfair_square();
        assert_eq!(
            transform_digraph(digraph("DT"), &square, Direction::Encrypt),
            digraph("MZ")
        );
        assert_eq!(
            transform_digraph(digraph("FZ"), &square, Direction::Encrypt),
            digraph("DF")
        );
        assert_eq!(
            transform_digraph(digraph("DF"), &square, Direction::Decrypt),
            digraph("FZ")
        );
    }

    #[test]
    fn test_rectangle_keeps_rows() {
        let square = playfair_square();
        assert_eq!(
            transform_digraph(digraph("HI"), &square, Direction::Encrypt),
            digraph("EB")
        );
        assert_eq!(
            transform_digraph(digraph("EB"), &square, Direction::Decrypt),
            digraph("HI")
        );
    }

    #[test]
    fn test_rectangle_is_self_inverse() {
        let square = playfair_square();
        let once = transform_digraph(digraph("OD"), &square, Direction::Encrypt);
        assert_eq!(
            transform_digraph(once, &square, Direction::Encrypt),
            digraph("OD")
        );
    }

    #[test]
    fn test_identical_letters_shift_together() {
        let square = playfair_square();
        assert_eq!(
            transform_digraph(digraph("EE"), &square, Direction::Encrypt),
            digraph("GG")
        );
    }
}

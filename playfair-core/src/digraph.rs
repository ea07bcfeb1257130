// File:    digraph.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Splits messages into Playfair digraphs, inserting fillers between doubled letters and after an odd tail.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::error::{PlayfairError, Result};
use crate::letter::{Letter, normalize};
use serde::{Serialize, Serializer};
use std::fmt;

/// An ordered pair of letters, the unit the cipher substitutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digraph(pub Letter, pub Letter);

impl Digraph {
    /// Both letters as chars, in order.
    #[must_use]
    pub fn chars(self) -> [char; 2] {
        [self.0.as_char(), self.1.as_char()]
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

impl Serialize for Digraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Prepares a plaintext message for encryption.
///
/// The message is normalized, then read left to right:
///
/// * two different letters form a digraph and both are consumed;
/// * a doubled letter is paired with a filler (`X`, or `Z` for a doubled `X`)
///   and only the first copy is consumed, so the second starts the next pair;
/// * a lone final letter is paired with the same filler.
///
/// No returned digraph holds the same letter twice.
///
/// ```
/// use playfair_core::preprocess;
///
/// let digraphs: Vec<String> = preprocess("hello").iter().map(ToString::to_string).collect();
/// assert_eq!(digraphs, ["HE", "LX", "LO"]);
/// ```
#[must_use]
pub fn preprocess(message: &str) -> Vec<Digraph> {
    let letters = normalize(message);
    let mut digraphs = Vec::with_capacity(letters.len() / 2 + 1);
    let mut cursor = 0;

    while let Some(&first) = letters.get(cursor) {
        match letters.get(cursor + 1) {
            Some(&second) if second != first => {
                digraphs.push(Digraph(first, second));
                cursor += 2;
            }
            _ => {
                digraphs.push(Digraph(first, first.filler()));
                cursor += 1;
            }
        }
    }

    digraphs
}

/// Cuts ciphertext into consecutive 2-letter digraphs.
///
/// The ciphertext is normalized like any other input; no filler rules are
/// applied.
///
/// # Errors
///
/// Returns [`PlayfairError::OddLengthCiphertext`] if the normalized text has
/// an odd number of letters.
pub fn split_ciphertext(ciphertext: &str) -> Result<Vec<Digraph>> {
    let letters = normalize(ciphertext);
    if letters.len() % 2 != 0 {
        return Err(PlayfairError::OddLengthCiphertext {
            length: letters.len(),
        });
    }
    Ok(letters
        .chunks_exact(2)
        .map(|pair| Digraph(pair[0], pair[1]))
        .collect())
}

/// Joins digraphs back into one uppercase string.
#[must_use]
pub fn join(digraphs: &[Digraph]) -> String {
    digraphs.iter().flat_map(|&d| d.chars()).collect()
}

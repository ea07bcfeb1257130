// File:    letter.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Defines the 25-letter Playfair alphabet and the normalization applied to keywords, messages and ciphertext.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use serde::{Serialize, Serializer};
use std::fmt;

/// A letter of the Playfair alphabet: uppercase ASCII `A`-`Z` with `J` folded into `I`.
///
/// A `Letter` can never hold `J` or a non-letter, so every value has a cell
/// in any [`KeySquare`](crate::KeySquare).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// The Playfair alphabet in alphabetical order.
pub const ALPHABET: [Letter; 25] = {
    let mut letters = [Letter(b'A'); 25];
    let mut byte = b'A';
    let mut slot = 0;
    while byte <= b'Z' {
        if byte != b'J' {
            letters[slot] = Letter(byte);
            slot += 1;
        }
        byte += 1;
    }
    letters
};

impl Letter {
    /// Filler inserted between doubled letters and after an odd tail.
    pub const X: Self = Self(b'X');
    /// Filler used instead of `X` when the letter to separate is `X` itself.
    pub const Z: Self = Self(b'Z');

    /// Folds a character into the alphabet.
    ///
    /// Lowercase letters are uppercased and `J` is read as `I`. Anything that
    /// is not an ASCII letter yields `None`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let byte = u8::try_from(c).ok()?.to_ascii_uppercase();
        match byte {
            b'J' => Some(Self(b'I')),
            b'A'..=b'Z' => Some(Self(byte)),
            _ => None,
        }
    }

    /// The uppercase character for this letter.
    #[must_use]
    pub fn as_char(self) -> char {
        char::from(self.0)
    }

    /// Index of this letter within [`ALPHABET`], in `0..25`.
    #[must_use]
    pub fn index(self) -> usize {
        let offset = usize::from(self.0 - b'A');
        if self.0 > b'J' { offset - 1 } else { offset }
    }

    /// The filler that separates this letter from a copy of itself.
    #[must_use]
    pub const fn filler(self) -> Self {
        if self.0 == Self::X.0 { Self::Z } else { Self::X }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl Serialize for Letter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

/// Normalizes free text into Playfair letters.
///
/// The text is uppercased, every `J` becomes `I`, and every character that is
/// not an ASCII letter (digits, punctuation, whitespace, accented letters) is
/// dropped.
#[must_use]
pub fn normalize(text: &str) -> Vec<Letter> {
    text.chars().filter_map(Letter::from_char).collect()
}

/// Renders a run of letters as a plain uppercase string.
#[must_use]
pub fn to_text(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.as_char()).collect()
}

// File:    error.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Error types returned by the Playfair core library.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use thiserror::Error;

/// Errors produced by the Playfair core library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayfairError {
    /// Normalized ciphertext does not split into whole digraphs.
    #[error("ciphertext has an odd number of letters ({length}) and cannot be split into digraphs")]
    OddLengthCiphertext {
        /// Number of letters left after normalization.
        length: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PlayfairError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_odd_length() {
        let err = PlayfairError::OddLengthCiphertext { length: 7 };
        assert_eq!(
            err.to_string(),
            "ciphertext has an odd number of letters (7) and cannot be split into digraphs"
        );
    }
}

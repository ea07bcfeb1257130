// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: The main library crate for playfair-core, tying together key square construction, message preparation and digraph substitution.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Playfair Core Library
//!
//! This library implements the classical Playfair cipher: a 5x5 key square
//! derived from a keyword, message preparation into digraphs, and the
//! row/column/rectangle substitution applied to each digraph.
//!
//! The cipher offers no real-world security. Every function is pure: the same
//! text and key always produce the same output, and nothing is shared between
//! calls.
//!
//! ```
//! use playfair_core::{decrypt, encrypt};
//!
//! let sealed = encrypt("Hide the gold in the tree stump", "playfair");
//! assert_eq!(sealed.text, "EBIMQMGHVRIRONKGODKUKNNZEF");
//!
//! let opened = decrypt(&sealed.text, "playfair").unwrap();
//! assert_eq!(opened.text, "HIDETHEGOLDINTHETREXESTUMP");
//! ```

/// Encrypt/decrypt entry points that run a whole message through the cipher.
pub mod cipher;
/// Message preparation into digraphs and raw ciphertext chunking.
pub mod digraph;
/// Error types shared across the crate.
pub mod error;
/// Key square construction from a keyword.
pub mod key_square;
/// The 25-letter alphabet and text normalization.
pub mod letter;
/// The per-digraph substitution rule.
pub mod transform;

pub use cipher::{CipherOutput, decrypt, encrypt};
pub use digraph::{Digraph, preprocess, split_ciphertext};
pub use error::{PlayfairError, Result};
pub use key_square::{KeySquare, Position};
pub use letter::{ALPHABET, Letter, normalize};
pub use transform::{Direction, transform_digraph};

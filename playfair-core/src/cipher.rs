// File:    cipher.rs
// Author:  apezoo
// Date:    2026-10-15
//
// Description: Runs whole messages through the Playfair cipher, returning the result together with the key square and digraphs used.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Message-level encryption and decryption.
//!
//! Each call builds its own [`KeySquare`] from the key; nothing is cached or
//! shared between calls.

use crate::digraph::{Digraph, join, preprocess, split_ciphertext};
use crate::error::Result;
use crate::key_square::KeySquare;
use crate::transform::{Direction, transform_digraph};
use log::debug;
use serde::Serialize;

/// The outcome of an encrypt or decrypt call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherOutput {
    /// Which way the message was run.
    pub direction: Direction,
    /// The resulting ciphertext or plaintext, uppercase letters only.
    pub text: String,
    /// The key square derived from the key.
    pub square: KeySquare,
    /// The input digraphs, before substitution.
    pub digraphs: Vec<Digraph>,
}

/// Encrypts `plaintext` under `key`.
///
/// The plaintext is prepared with [`preprocess`], so fillers appear in the
/// ciphertext wherever letters were doubled or the message had an odd length.
#[must_use]
pub fn encrypt(plaintext: &str, key: &str) -> CipherOutput {
    let square = KeySquare::from_keyword(key);
    let digraphs = preprocess(plaintext);
    let text = substitute(&digraphs, &square, Direction::Encrypt);
    debug!("Encrypted {} digraph(s)", digraphs.len());
    CipherOutput {
        direction: Direction::Encrypt,
        text,
        square,
        digraphs,
    }
}

/// Decrypts `ciphertext` under `key`.
///
/// The ciphertext is normalized and cut into consecutive pairs. The
/// recovered plaintext still carries any fillers added during encryption.
///
/// # Errors
///
/// Returns [`PlayfairError::OddLengthCiphertext`](crate::PlayfairError::OddLengthCiphertext)
/// if the normalized ciphertext has an odd number of letters.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<CipherOutput> {
    let square = KeySquare::from_keyword(key);
    let digraphs = split_ciphertext(ciphertext)?;
    let text = substitute(&digraphs, &square, Direction::Decrypt);
    debug!("Decrypted {} digraph(s)", digraphs.len());
    Ok(CipherOutput {
        direction: Direction::Decrypt,
        text,
        square,
        digraphs,
    })
}

fn substitute(digraphs: &[Digraph], square: &KeySquare, direction: Direction) -> String {
    let output: Vec<Digraph> = digraphs
        .iter()
        .map(|&d| transform_digraph(d, square, direction))
        .collect();
    join(&output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlayfairError;

    #[test]
    fn test_encrypt_returns_square_and_digraphs() {
        let output = encrypt("Hello, World!", "monarchy");
        assert_eq!(output.direction, Direction::Encrypt);
        assert_eq!(output.text, "CFSUPMVNMTBZ");
        assert_eq!(output.square, KeySquare::from_keyword("MONARCHY"));
        assert_eq!(join(&output.digraphs), "HELXLOWORLDX");
    }

    #[test]
    fn test_decrypt_keeps_fillers() {
        let output = decrypt("CFSUPMVNMTBZ", "monarchy").unwrap();
        assert_eq!(output.direction, Direction::Decrypt);
        assert_eq!(output.text, "HELXLOWORLDX");
        assert_eq!(join(&output.digraphs), "CFSUPMVNMTBZ");
    }

    #[test]
    fn test_decrypt_ignores_case_and_separators() {
        let output = decrypt("cfsu pmvn-mtbz", "MONARCHY").unwrap();
        assert_eq!(output.text, "HELXLOWORLDX");

        let folded = decrypt("jj", "monarchy").unwrap();
        assert_eq!(folded, decrypt("II", "monarchy").unwrap());
        assert_eq!(join(&folded.digraphs), "II");
    }

    #[test]
    fn test_decrypt_rejects_odd_length() {
        assert_eq!(
            decrypt("CFS", "monarchy"),
            Err(PlayfairError::OddLengthCiphertext { length: 3 })
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(encrypt("", "key").text, "");
        assert_eq!(decrypt("", "key").unwrap().text, "");
    }
}

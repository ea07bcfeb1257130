#![allow(missing_docs)]
use playfair_core::digraph::join;
use playfair_core::{
    ALPHABET, Digraph, Direction, KeySquare, Letter, decrypt, encrypt, preprocess,
    transform_digraph,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const CASES: usize = 200;

/// Random text mixing letters (including J), digits, spaces and punctuation.
fn random_text(rng: &mut StdRng, max_len: usize) -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZXXLL0189 .,!?-";
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| char::from(CHARSET[rng.random_range(0..CHARSET.len())]))
        .collect()
}

fn random_letter(rng: &mut StdRng) -> Letter {
    ALPHABET[rng.random_range(0..ALPHABET.len())]
}

#[test]
fn test_square_holds_every_letter_once() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..CASES {
        let keyword = random_text(&mut rng, 40);
        let square = KeySquare::from_keyword(&keyword);
        let mut seen: Vec<Letter> = square.rows().iter().flatten().copied().collect();
        seen.sort();
        assert_eq!(seen, ALPHABET.to_vec(), "keyword {keyword:?}");
    }
}

#[test]
fn test_preprocessed_digraphs_are_distinct_pairs() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..CASES {
        let message = random_text(&mut rng, 60);
        for digraph in preprocess(&message) {
            assert_ne!(digraph.0, digraph.1, "message {message:?}");
            assert_ne!(digraph.0.as_char(), 'J');
            assert_ne!(digraph.1.as_char(), 'J');
        }
    }
}

#[test]
fn test_decrypt_recovers_preprocessed_plaintext() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..CASES {
        let plaintext = random_text(&mut rng, 60);
        let key = random_text(&mut rng, 20);
        let sealed = encrypt(&plaintext, &key);
        let opened = decrypt(&sealed.text, &key).unwrap();
        assert_eq!(
            opened.text,
            join(&preprocess(&plaintext)),
            "plaintext {plaintext:?}, key {key:?}"
        );
    }
}

#[test]
fn test_transform_is_invertible_for_every_digraph() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..20 {
        let square = KeySquare::from_keyword(&random_text(&mut rng, 20));
        for first in ALPHABET {
            for second in ALPHABET {
                let digraph = Digraph(first, second);
                let sealed = transform_digraph(digraph, &square, Direction::Encrypt);
                assert_eq!(
                    transform_digraph(sealed, &square, Direction::Decrypt),
                    digraph
                );
            }
        }
    }
}

#[test]
fn test_ciphertext_never_repeats_within_a_digraph() {
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..CASES {
        let square = KeySquare::from_keyword(&random_text(&mut rng, 20));
        let first = random_letter(&mut rng);
        let second = random_letter(&mut rng);
        if first == second {
            continue;
        }
        let sealed = transform_digraph(Digraph(first, second), &square, Direction::Encrypt);
        assert_ne!(sealed.0, sealed.1);
    }
}

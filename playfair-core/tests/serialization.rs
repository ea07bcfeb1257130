#![allow(missing_docs)]
use playfair_core::{ALPHABET, Letter, encrypt};
use serde_json::json;

#[test]
fn test_cipher_output_json_shape() {
    let output = encrypt("ABX", "TEST");
    let value = serde_json::to_value(&output).unwrap();
    assert_eq!(
        value,
        json!({
            "direction": "encrypt",
            "text": output.text,
            "square": ["TESAB", "CDFGH", "IKLMN", "OPQRU", "VWXYZ"],
            "digraphs": ["AB", "XZ"],
        })
    );
}

#[test]
fn test_letters_serialize_as_chars() {
    assert_eq!(serde_json::to_value(ALPHABET[0]).unwrap(), json!("A"));
    let folded = Letter::from_char('j').unwrap();
    assert_eq!(serde_json::to_value(folded).unwrap(), json!("I"));
    assert_eq!(
        serde_json::to_string(&ALPHABET[..3]).unwrap(),
        r#"["A","B","C"]"#
    );
}

//! Text rendering for key squares and digraph sequences.

use playfair_core::{CipherOutput, Digraph, Direction, KeySquare};
use std::fmt::Write;

const RULE_WIDTH: usize = 21;

/// Renders the key square as a boxed, titled table.
pub(crate) fn render_square(square: &KeySquare) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:=<RULE_WIDTH$}", "");
    let _ = writeln!(out, "   PLAYFAIR TABLE");
    let _ = writeln!(out, "{:=<RULE_WIDTH$}", "");
    for row in square.rows() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "  {}", cells.join(" "));
    }
    let _ = writeln!(out, "{:=<RULE_WIDTH$}", "");
    out
}

/// Renders digraphs as `Digraphs:  AB | CD | ...`.
pub(crate) fn render_digraphs(digraphs: &[Digraph]) -> String {
    let pairs: Vec<String> = digraphs.iter().map(ToString::to_string).collect();
    format!("Digraphs:  {}", pairs.join(" | "))
}

/// Renders a cipher result; the square and digraphs are included when `show_work` is set.
pub(crate) fn render_output(output: &CipherOutput, show_work: bool) -> String {
    let mut out = String::new();
    if show_work {
        out.push_str(&render_square(&output.square));
        let _ = writeln!(out, "{}", render_digraphs(&output.digraphs));
        let label = match output.direction {
            Direction::Encrypt => "Ciphertext",
            Direction::Decrypt => "Plaintext",
        };
        let _ = writeln!(out, "{label}: {}", output.text);
    } else {
        let _ = writeln!(out, "{}", output.text);
    }
    out
}

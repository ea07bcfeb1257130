//! Menu-driven console session.

use crate::display::{render_digraphs, render_square};
use crate::error::CliError;
use crate::input::require_non_empty;
use crate::self_test;
use log::{debug, info};
use playfair_core::digraph::join;
use playfair_core::{decrypt, encrypt};
use std::io::{self, BufRead, Write};

enum Step {
    Continue,
    Quit,
}

/// Runs the menu loop until the user exits or input ends.
pub(crate) fn run(input: &mut impl BufRead, out: &mut impl Write) -> Result<(), CliError> {
    info!("Starting interactive session");
    writeln!(out, "{:=<60}", "")?;
    writeln!(out, "          PLAYFAIR CIPHER - ENCRYPTION & DECRYPTION")?;
    writeln!(out, "{:=<60}", "")?;

    loop {
        writeln!(out)?;
        writeln!(out, "{:-<60}", "")?;
        writeln!(out, "OPTIONS:")?;
        writeln!(out, "  [1] Encrypt a message")?;
        writeln!(out, "  [2] Decrypt a message")?;
        writeln!(out, "  [3] Run reference tests")?;
        writeln!(out, "  [4] Exit")?;
        writeln!(out, "{:-<60}", "")?;

        let Some(choice) = prompt(input, out, "Enter your choice (1-4): ")? else {
            break;
        };
        debug!("Menu choice {choice:?}");
        let step = match choice.as_str() {
            "1" => encrypt_step(input, out)?,
            "2" => decrypt_step(input, out)?,
            "3" => {
                self_test::report(out, &self_test::run_all())?;
                Step::Continue
            }
            "4" => {
                writeln!(out, "Thank you for using Playfair Cipher!")?;
                Step::Quit
            }
            _ => {
                writeln!(out, "Invalid choice! Please enter 1, 2, 3, or 4.")?;
                Step::Continue
            }
        };
        if matches!(step, Step::Quit) {
            break;
        }
    }

    info!("Interactive session ended");
    Ok(())
}

fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

/// Prompts for a key and a message, or `None` once input runs out.
fn read_pair(
    input: &mut impl BufRead,
    out: &mut impl Write,
    message_label: &str,
) -> io::Result<Option<(String, String)>> {
    let Some(key) = prompt(input, out, "Enter the key: ")? else {
        return Ok(None);
    };
    let Some(message) = prompt(input, out, &format!("Enter the {message_label}: "))? else {
        return Ok(None);
    };
    Ok(Some((key, message)))
}

fn encrypt_step(input: &mut impl BufRead, out: &mut impl Write) -> Result<Step, CliError> {
    writeln!(out, "ENCRYPTION MODE")?;
    let Some((key, plaintext)) = read_pair(input, out, "plaintext")? else {
        return Ok(Step::Quit);
    };
    let checked = require_non_empty("Key", &key)
        .and_then(|_| require_non_empty("Plaintext", &plaintext));
    if let Err(e) = checked {
        writeln!(out, "Error: {e}")?;
        return Ok(Step::Continue);
    }

    let output = encrypt(&plaintext, &key);
    write!(out, "{}", render_square(&output.square))?;
    writeln!(out, "Original message:  {plaintext}")?;
    writeln!(out, "Preprocessed:      {}", join(&output.digraphs))?;
    writeln!(out, "{}", render_digraphs(&output.digraphs))?;
    writeln!(out, "CIPHERTEXT: {}", output.text)?;
    Ok(Step::Continue)
}

fn decrypt_step(input: &mut impl BufRead, out: &mut impl Write) -> Result<Step, CliError> {
    writeln!(out, "DECRYPTION MODE")?;
    let Some((key, ciphertext)) = read_pair(input, out, "ciphertext")? else {
        return Ok(Step::Quit);
    };
    let checked = require_non_empty("Key", &key)
        .and_then(|_| require_non_empty("Ciphertext", &ciphertext));
    if let Err(e) = checked {
        writeln!(out, "Error: {e}")?;
        return Ok(Step::Continue);
    }

    match decrypt(&ciphertext, &key) {
        Ok(output) => {
            write!(out, "{}", render_square(&output.square))?;
            writeln!(out, "Ciphertext:  {ciphertext}")?;
            writeln!(out, "{}", render_digraphs(&output.digraphs))?;
            writeln!(out, "PLAINTEXT: {}", output.text)?;
        }
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(Step::Continue)
}

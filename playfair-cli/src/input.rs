use crate::error::CliError;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Rejects values that are empty once surrounding whitespace is removed.
pub(crate) fn require_non_empty<'a>(
    label: &'static str,
    value: &'a str,
) -> Result<&'a str, CliError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptyInput(label))
    } else {
        Ok(trimmed)
    }
}

/// Resolves the message for a cipher command.
///
/// An inline argument wins, then `--input`, then whatever arrives on stdin.
pub(crate) fn read_message(
    inline: Option<&str>,
    file: Option<&Path>,
    stdin: impl Read,
) -> Result<String, CliError> {
    if let Some(text) = inline {
        return Ok(text.to_owned());
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }
    Ok(io::read_to_string(stdin)?)
}

use playfair_core::PlayfairError;
use thiserror::Error;

/// Everything that can stop a CLI command.
#[derive(Error, Debug)]
pub(crate) enum CliError {
    /// A required value was empty after trimming.
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Cipher(#[from] PlayfairError),

    #[error("{failed} of {total} self-test case(s) failed")]
    SelfTestFailed { failed: usize, total: usize },
}

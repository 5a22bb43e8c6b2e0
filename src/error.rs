use std::io;

use thiserror::Error;

/// Failures surfaced to the user outside of raw terminal mode.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("unknown theme `{name}` (available: {available})")]
    UnknownTheme { name: String, available: String },
}

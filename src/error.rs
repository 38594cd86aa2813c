use std::path::PathBuf;

/// Diagnostic code shown to the player when the banner cannot be loaded.
pub const ERROR_CODE_HEADER: u32 = 1000;

#[derive(thiserror::Error, Debug)]
pub enum GuessError {
    #[error("Unable to load header from {} (error: {source})", path.display())]
    HeaderMissing {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Upper bound must be between 1 and 2147483645, got {max}")]
    InvalidMax { max: u32 },
    #[error("Console i/o error (error: {0})")]
    Io(#[from] std::io::Error),
}

impl GuessError {
    /// Code printed in the player-facing diagnostic, if this error has one.
    pub fn code(&self) -> Option<u32> {
        match self {
            GuessError::HeaderMissing { .. } => Some(ERROR_CODE_HEADER),
            _ => None,
        }
    }
}

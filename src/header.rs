use std::fs;
use std::path::PathBuf;

use crate::error::GuessError;

const EMBEDDED_HEADER: &str = include_str!("../assets/guesser-header.txt");

/// Where the banner shown at startup comes from.
#[derive(Debug, Clone, Default)]
pub enum HeaderSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl HeaderSource {
    pub fn load(&self) -> Result<String, GuessError> {
        let raw = match self {
            HeaderSource::Embedded => EMBEDDED_HEADER.to_string(),
            HeaderSource::File(path) => {
                fs::read_to_string(path).map_err(|source| GuessError::HeaderMissing {
                    path: path.clone(),
                    source,
                })?
            }
        };
        // every line, the last one included, ends with '\n'
        Ok(raw.lines().map(|line| format!("{line}\n")).collect())
    }
}

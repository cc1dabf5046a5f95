//! scanner for XML documents

use std::path::Path;
use tracing::debug;

use crate::language::LoadingError;

pub mod scanner;
mod stack;

pub use scanner::{Scanner, TagEvent};

/// Read a file and return an owned String. We pass that ownership back to
/// the caller so the scan events borrowed from it can share its lifetime.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

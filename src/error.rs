//! Error types for patch generation.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse XML: {0}")]
    MalformedInput(String),

    #[error("Failed to parse XML: TraitDef #{index} has no defName")]
    MissingDefName { index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid patch configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PatchError>;

use crate::utils::diagnostics::Diagnostic;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CminusError {
    #[error("File read error: {0}")]
    FileReadError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("source rejected with {} error(s)", .0.len())]
    Rejected(Vec<Diagnostic>),
}

impl CminusError {
    /// Diagnostics carried by a rejected source; empty for file errors.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            CminusError::Rejected(diagnostics) => diagnostics,
            _ => &[],
        }
    }
}

impl From<Vec<Diagnostic>> for CminusError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        CminusError::Rejected(diagnostics)
    }
}

// Type alias for Result with CminusError
pub type CminusResult<T> = Result<T, CminusError>;

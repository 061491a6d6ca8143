//! Error types for cogviz operations.
//!
//! Layout itself never fails: unresolved relations, empty input and cyclic
//! link sets are all handled as data. Errors only arise at the edges, when
//! reading input documents, loading configuration or writing output.

use std::io;

use thiserror::Error;

/// The main error type for cogviz operations.
#[derive(Debug, Error)]
pub enum CogvizError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid input document: {0}")]
    Input(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for CogvizError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

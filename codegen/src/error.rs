//! Generator errors.

use thiserror::Error;

/// Errors produced while emitting generated code.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The output sink rejected a write.
    #[error("failed to write generated code: {0}")]
    Write(#[from] std::io::Error),
}

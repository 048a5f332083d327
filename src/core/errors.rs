/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::{Pid, Ticks};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors with serialization support
///
/// All variants are detected before the dispatch loop starts; nothing inside
/// the loop is expected to fail once configuration is validated.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Base quantum must be positive, got {0}")]
    #[diagnostic(
        code(config::invalid_quantum),
        help("A non-positive quantum would yield zero-length dispatches and the batch would never complete.")
    )]
    InvalidQuantum(Ticks),

    #[error("Process {0} has zero burst time")]
    #[diagnostic(
        code(config::zero_burst),
        help("Every process must demand at least one tick of CPU time.")
    )]
    ZeroBurst(Pid),

    #[error("No processes to schedule")]
    #[diagnostic(
        code(config::empty_batch),
        help("Provide at least one process descriptor.")
    )]
    EmptyBatch,

    #[error("Batch of {requested} processes exceeds limit {limit}")]
    #[diagnostic(
        code(config::batch_too_large),
        help("The batch is bounded to keep queue and record storage from growing without limit.")
    )]
    BatchTooLarge { requested: usize, limit: usize },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimulatorError {
    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(simulator::io_error),
        help("Reading prompts from the terminal failed. Check stdin availability.")
    )]
    Io(String),
}

impl From<std::io::Error> for SimulatorError {
    fn from(err: std::io::Error) -> Self {
        SimulatorError::Io(err.to_string())
    }
}

/// Result type for simulator operations
pub type Result<T> = std::result::Result<T, SimulatorError>;

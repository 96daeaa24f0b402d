//! Error types for the collection runner
//!
//! A configuration or invocation error is fatal to the whole sequence.
//! Assertion failures inside a completed run are carried by
//! [`crate::engine::RunSummary`] instead, and only show up here when the
//! halt-on-failure policy promotes them to [`Error::StepFailed`].

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the collection runner
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Unknown test plan '{0}'. Valid plans: setup-all, delete")]
    UnknownPlan(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === Engine Errors ===
    #[error("newman executable not found. Searched: {searched}")]
    EngineNotFound { searched: String },

    #[error("Failed to spawn newman: {0}")]
    EngineSpawn(#[source] io::Error),

    #[error("Step '{step}' could not be run: {reason}")]
    Invocation { step: String, reason: String },

    // === Run Errors ===
    #[error("Step '{step}' failed: {reason}")]
    StepFailed { step: String, reason: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invocation error for a step
    pub fn invocation(step: &str, reason: impl Into<String>) -> Self {
        Self::Invocation {
            step: step.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a step failure error
    pub fn step_failed(step: &str, reason: impl Into<String>) -> Self {
        Self::StepFailed {
            step: step.to_string(),
            reason: reason.into(),
        }
    }
}

//! Collection engine boundary
//!
//! HTTP execution, assertion evaluation, and per-request reporting are owned
//! by newman. This module defines the seam the executor drives, so tests can
//! substitute a scripted engine.

mod newman;

pub use newman::NewmanEngine;

use async_trait::async_trait;

use crate::common::Result;
use crate::plan::Step;

/// Outcome of a completed run
///
/// A run that executed but failed assertions is a summary-level failure,
/// distinct from the hard invocation error carried on the `Err` side of
/// [`CollectionEngine::run`].
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Failure summary from the engine; `None` when every assertion passed
    pub error: Option<String>,
}

impl RunSummary {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs one collection step to completion
#[async_trait]
pub trait CollectionEngine {
    /// Run `step` and wait for the engine's completion signal
    ///
    /// `Err` means the run could not even be attempted (unreadable files,
    /// spawn failure). `Ok` with an error inside means the run executed but
    /// reported failures.
    async fn run(&self, step: &Step) -> Result<RunSummary>;
}

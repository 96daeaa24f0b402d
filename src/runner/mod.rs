//! Sequential step executor
//!
//! Drives the engine once per step, strictly in order, waiting for each
//! completion before starting the next. A hard invocation error halts the
//! sequence; what a summary-level failure does is governed by
//! [`FailurePolicy`].

use colored::Colorize;

use crate::common::{Error, Result};
use crate::engine::CollectionEngine;
use crate::plan::Step;

/// What to do when a step's assertions fail
///
/// Only governs summary-level failures reported by a completed run; hard
/// invocation errors always halt the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure and keep going
    #[default]
    Continue,
    /// Treat the first failed step as fatal
    Halt,
}

/// Per-step outcome for the end-of-run summary
#[derive(Debug)]
pub struct StepReport {
    pub name: &'static str,
    pub passed: bool,
    pub detail: Option<String>,
}

/// How the sequence ended
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The step list was empty; nothing was invoked
    NothingToRun,
    /// Every step was attempted
    Completed,
}

/// Result of one executor invocation
#[derive(Debug)]
pub struct RunReport {
    pub outcome: Outcome,
    pub steps: Vec<StepReport>,
}

impl RunReport {
    /// True when every attempted step passed
    pub fn all_passed(&self) -> bool {
        self.steps.iter().all(|s| s.passed)
    }
}

/// Runs steps one at a time against a [`CollectionEngine`]
pub struct SequentialExecutor<E> {
    engine: E,
    policy: FailurePolicy,
}

impl<E: CollectionEngine> SequentialExecutor<E> {
    pub fn new(engine: E, policy: FailurePolicy) -> Self {
        Self { engine, policy }
    }

    /// Run every step in order
    ///
    /// An `Err` from the engine propagates immediately and no further step
    /// is attempted. A summary failure is logged and, under
    /// [`FailurePolicy::Continue`], the next step still runs.
    pub async fn run(&self, steps: &[Step]) -> Result<RunReport> {
        if steps.is_empty() {
            println!("{}", "No collections to run.".yellow());
            return Ok(RunReport {
                outcome: Outcome::NothingToRun,
                steps: Vec::new(),
            });
        }

        let total = steps.len();
        let mut reports = Vec::with_capacity(total);

        for (i, step) in steps.iter().enumerate() {
            println!(
                "\n{} {} ({}/{})",
                "Running:".blue().bold(),
                step.name.white().bold(),
                i + 1,
                total
            );

            let summary = self.engine.run(step).await?;

            match summary.error {
                None => {
                    println!("  {} {}", "✓".green(), step.name.dimmed());
                    reports.push(StepReport {
                        name: step.name,
                        passed: true,
                        detail: None,
                    });
                }
                Some(reason) => {
                    println!("  {} {}: {}", "✗".red(), step.name, reason);
                    tracing::error!(step = step.name, "{reason}");
                    if self.policy == FailurePolicy::Halt {
                        return Err(Error::step_failed(step.name, reason));
                    }
                    reports.push(StepReport {
                        name: step.name,
                        passed: false,
                        detail: Some(reason),
                    });
                }
            }
        }

        println!("\n{}", "Finished running.".green().bold());
        Ok(RunReport {
            outcome: Outcome::Completed,
            steps: reports,
        })
    }
}

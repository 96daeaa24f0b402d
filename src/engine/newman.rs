//! newman subprocess engine
//!
//! Shells out to the newman CLI, one process per step, with the cli reporter
//! writing straight to the terminal. Inputs are vetted before the spawn so
//! unreadable or malformed files surface as invocation errors rather than as
//! a failed run.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command as TokioCommand;

use crate::common::config::Config;
use crate::common::{Error, Result};
use crate::plan::{Step, SCHOOL_NAME_KEY};

use super::{CollectionEngine, RunSummary};

/// Engine backed by the `newman` executable
pub struct NewmanEngine {
    /// Explicit override from the config file; PATH lookup otherwise
    override_path: Option<PathBuf>,
}

impl NewmanEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            override_path: config.engine.path.clone(),
        }
    }

    /// Locate the newman executable
    ///
    /// Resolved per run so an empty plan never requires newman at all.
    fn binary(&self) -> Result<PathBuf> {
        match &self.override_path {
            Some(path) => Ok(path.clone()),
            None => which::which("newman").map_err(|_| Error::EngineNotFound {
                searched: "[engine] path in config.toml, PATH".to_string(),
            }),
        }
    }

    /// Reject inputs newman could not read, before spawning a process
    ///
    /// The iteration data must be a JSON array, one record per iteration.
    fn check_inputs(step: &Step) -> Result<()> {
        read_json(step.name, &step.collection)?;
        read_json(step.name, &step.environment)?;
        let data = read_json(step.name, &step.data)?;
        if !data.is_array() {
            return Err(Error::invocation(
                step.name,
                format!(
                    "iteration data '{}' is not a JSON array",
                    step.data.display()
                ),
            ));
        }
        Ok(())
    }
}

fn read_json(step: &str, path: &Path) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::invocation(step, format!("cannot read '{}': {}", path.display(), e)))?;
    serde_json::from_str(&content).map_err(|e| {
        Error::invocation(
            step,
            format!("'{}' is not valid JSON: {}", path.display(), e),
        )
    })
}

#[async_trait]
impl CollectionEngine for NewmanEngine {
    async fn run(&self, step: &Step) -> Result<RunSummary> {
        let binary = self.binary()?;
        Self::check_inputs(step)?;

        let mut cmd = TokioCommand::new(&binary);
        cmd.arg("run")
            .arg(&step.collection)
            .arg("--environment")
            .arg(&step.environment)
            .arg("--iteration-data")
            .arg(&step.data)
            .arg("--env-var")
            .arg(format!("{}={}", SCHOOL_NAME_KEY, step.school_name))
            .args(["--reporters", "cli"])
            .stdin(Stdio::null());

        tracing::debug!("spawning {:?}", cmd.as_std());

        let status = cmd.status().await.map_err(Error::EngineSpawn)?;

        if status.success() {
            Ok(RunSummary::default())
        } else {
            Ok(RunSummary {
                error: Some(match status.code() {
                    Some(code) => format!("newman exited with status {code}"),
                    None => "newman was terminated by a signal".to_string(),
                }),
            })
        }
    }
}

//! CLI dispatch
//!
//! Wires the parsed flags to the resolver, plan builder, engine, and
//! executor, and prints the end-of-run summary.

use colored::Colorize;

use crate::commands::{Cli, DEFAULT_SCHOOL_NAME};
use crate::common::config::Config;
use crate::common::Result;
use crate::engine::NewmanEngine;
use crate::plan::{self, ResolvedPaths};
use crate::runner::{FailurePolicy, Outcome, SequentialExecutor};

/// Run one full invocation from parsed flags
pub async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    let paths = ResolvedPaths::new(
        &cli.collection_path,
        &cli.data_path,
        cli.env_path.as_deref(),
        cli.env.file_stem(),
    );

    tracing::info!("collection root: {}", cli.collection_path.display());
    tracing::info!("data root: {}", cli.data_path.display());
    tracing::info!("environment: {}", paths.environment.display());

    let school_name = cli
        .school_name
        .or_else(|| config.defaults.school_name.clone())
        .unwrap_or_else(|| DEFAULT_SCHOOL_NAME.to_string());

    let steps = plan::build(&paths, &school_name, cli.tests.as_deref())?;

    let engine = NewmanEngine::new(&config);
    let policy = if cli.halt_on_failure || config.run.halt_on_failure {
        FailurePolicy::Halt
    } else {
        FailurePolicy::Continue
    };

    let report = SequentialExecutor::new(engine, policy).run(&steps).await?;

    if report.outcome == Outcome::Completed {
        let passed = report.steps.iter().filter(|s| s.passed).count();
        println!(
            "\n{} {}/{} steps passed",
            "Summary:".blue().bold(),
            passed,
            report.steps.len()
        );
        for step in report.steps.iter().filter(|s| !s.passed) {
            println!("  {} {}", "✗".red(), step.name);
        }
    }

    Ok(())
}

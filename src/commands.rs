//! CLI argument definitions
//!
//! One flat command: every invocation resolves paths, builds a plan, and
//! runs it. Sub-plan names under `--tests` are validated by the plan
//! builder, not by clap, so a bad name reports through our own error type.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// School name used when neither `--school-name` nor the config file sets one
pub const DEFAULT_SCHOOL_NAME: &str = "test runner newman";

/// Run the school API collections in sequence
#[derive(Parser, Debug)]
#[command(name = "newman-runner", about = "Sequence newman collection runs against a school API")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Root directory containing the collection files
    #[arg(long)]
    pub collection_path: PathBuf,

    /// Root directory containing the iteration data files
    #[arg(long)]
    pub data_path: PathBuf,

    /// Base name of the environment file
    #[arg(long, value_enum, default_value_t = Environment::Localhost)]
    pub env: Environment,

    /// Directory searched for the environment file (defaults to --collection-path)
    #[arg(long)]
    pub env_path: Option<PathBuf>,

    /// School name injected into every run [default: "test runner newman"]
    #[arg(long)]
    pub school_name: Option<String>,

    /// Sub-plans to run, in order (setup-all, delete); omit to run both
    #[arg(long, num_args = 0..)]
    pub tests: Option<Vec<String>>,

    /// Stop at the first step whose assertions fail
    #[arg(long)]
    pub halt_on_failure: bool,
}

/// Known environments, each backed by one environment file
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Environment {
    Localhost,
    Staging,
    Prod,
}

impl Environment {
    /// Base name of the backing environment file
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Localhost => "localhost",
            Self::Staging => "staging",
            Self::Prod => "prod",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tests_flag_distinguishes_absent_from_empty() {
        let cli = Cli::parse_from(["newman-runner", "--collection-path", "/c", "--data-path", "/d"]);
        assert!(cli.tests.is_none());

        let cli = Cli::parse_from([
            "newman-runner",
            "--collection-path",
            "/c",
            "--data-path",
            "/d",
            "--tests",
        ]);
        assert_eq!(cli.tests.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_tests_flag_keeps_given_order() {
        let cli = Cli::parse_from([
            "newman-runner",
            "--collection-path",
            "/c",
            "--data-path",
            "/d",
            "--tests",
            "delete",
            "setup-all",
        ]);
        assert_eq!(
            cli.tests.as_deref(),
            Some(&["delete".to_string(), "setup-all".to_string()][..])
        );
    }

    #[test]
    fn test_env_defaults_to_localhost() {
        let cli = Cli::parse_from(["newman-runner", "--collection-path", "/c", "--data-path", "/d"]);
        assert_eq!(cli.env, Environment::Localhost);
        assert_eq!(cli.env.file_stem(), "localhost");
    }

    #[test]
    fn test_env_rejects_values_outside_the_set() {
        let result = Cli::try_parse_from([
            "newman-runner",
            "--collection-path",
            "/c",
            "--data-path",
            "/d",
            "--env",
            "qa",
        ]);
        assert!(result.is_err());
    }
}

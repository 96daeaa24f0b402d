//! newman-runner - run the school API collections in order
//!
//! Thin binary over the library: parse flags, set up logging, dispatch.

use clap::Parser;
use newman_runner::{cli, commands::Cli, common};

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let args = Cli::parse();

    if let Err(e) = cli::dispatch(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

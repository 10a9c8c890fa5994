//! CLI command definitions
//!
//! Defines the clap commands for the harness.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Run the GUI test suite (skips silently when the automation tool is absent)
    Run {
        /// Path to the suite file (default: gui-suite.yaml on the search path)
        suite: Option<PathBuf>,

        /// Fail instead of skipping when the automation tool is absent
        #[arg(long)]
        require: bool,

        /// Verbose output
        #[arg(long, short)]
        verbose: bool,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report browser automation capability status
    Check {
        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Install browser drivers for the automation tool
    Install {
        /// Also install system dependencies
        #[arg(long)]
        with_deps: bool,

        /// Install a specific browser only
        #[arg(long)]
        browser: Option<String>,
    },

    /// List test cases discoverable in the suite without running them
    List {
        /// Path to the suite file (default: gui-suite.yaml on the search path)
        suite: Option<PathBuf>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },
}

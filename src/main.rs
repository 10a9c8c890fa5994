//! GUI test harness CLI
//!
//! Runs browser-driven GUI test suites, gated on the availability of an
//! optional browser-automation tool in the current environment.

use clap::Parser;
use uitest::{cli, commands, common};

use commands::Commands;

#[derive(Parser)]
#[command(name = "uitest", about = "Capability-gated browser GUI test harness")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! CLI command handling
//!
//! Dispatches CLI commands and formats output.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::capability::installer::{self, InstallOptions};
use crate::capability::{probe, verifier};
use crate::commands::Commands;
use crate::common::{Config, Error, Result};
use crate::suite::{loader, runner, RunOptions};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    let config = Config::load()?;

    match command {
        Commands::Run {
            suite,
            require,
            verbose,
            json,
        } => run(&config, suite, require, verbose, json).await,

        Commands::Check { json } => check(&config, json).await,

        Commands::Install { with_deps, browser } => install(&config, with_deps, browser).await,

        Commands::List { suite, json } => list(&config, suite, json),
    }
}

/// The run path: probe, install drivers, load the suite, execute it
///
/// Capability absence is not an error: the run registers zero cases and
/// exits successfully. Everything after a successful probe propagates.
async fn run(
    config: &Config,
    suite_path: Option<PathBuf>,
    require: bool,
    verbose: bool,
    json: bool,
) -> Result<()> {
    let cap = match probe::probe(config) {
        Some(cap) => cap,
        None => {
            if require {
                return Err(Error::ToolNotFound {
                    searched: probe::searched_description(config),
                });
            }
            tracing::debug!("browser automation tool not found, skipping GUI tests");
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "status": "skipped",
                        "total": 0,
                        "passed": 0,
                        "failed": 0,
                    })
                );
            } else {
                println!("Ran 0 tests");
            }
            return Ok(());
        }
    };

    tracing::debug!(
        tool = %cap.tool.display(),
        source = %cap.source,
        "resolved browser automation tool"
    );

    installer::install_browsers(
        &cap,
        &InstallOptions {
            quiet: json,
            ..Default::default()
        },
        config.timeouts.install_secs,
    )
    .await?;

    let (suite, path) = loader::load_suite(suite_path.as_deref(), config)?;
    let suite_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();

    let report = runner::run_suite(
        &cap,
        &suite,
        &suite_dir,
        config,
        RunOptions {
            verbose,
            quiet: json,
        },
    )
    .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        runner::print_summary(&report);
    }

    if report.failed > 0 {
        return Err(Error::CasesFailed {
            failed: report.failed,
            total: report.total,
        });
    }
    Ok(())
}

/// Report capability status without side effects
async fn check(config: &Config, json: bool) -> Result<()> {
    let platform = os_info::get();
    let platform_str = format!("{} {}", platform.os_type(), platform.version());

    match probe::probe(config) {
        Some(cap) => {
            let verify =
                verifier::verify_tool(&cap, &config.tool.min_version, config.timeouts.version_secs)
                    .await?;

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "found": true,
                        "path": cap.tool.display().to_string(),
                        "source": cap.source.to_string(),
                        "version": verify.version.as_ref().map(|v| v.to_string()),
                        "supported": verify.supported,
                        "error": verify.error,
                        "platform": platform_str,
                    }))?
                );
            } else {
                println!(
                    "{} {} found at {} (resolved from {})",
                    "✓".green(),
                    config.tool.name,
                    cap.tool.display(),
                    cap.source
                );
                match &verify.version {
                    Some(version) => {
                        println!("  Version: {}", version);
                        if !verify.supported {
                            println!(
                                "  {} below minimum supported version {}",
                                "✗".red(),
                                config.tool.min_version
                            );
                        }
                    }
                    None => {
                        println!(
                            "  {} version check failed: {}",
                            "✗".red(),
                            verify
                                .error
                                .as_deref()
                                .unwrap_or("could not parse version output")
                        );
                    }
                }
                println!("  Platform: {}", platform_str);
            }
        }
        None => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "found": false,
                        "searched": probe::searched_description(config),
                        "platform": platform_str,
                    }))?
                );
            } else {
                println!(
                    "{} {} not found. Searched: {}",
                    "✗".red(),
                    config.tool.name,
                    probe::searched_description(config)
                );
            }
        }
    }

    Ok(())
}

/// Run the driver installation explicitly
async fn install(config: &Config, with_deps: bool, browser: Option<String>) -> Result<()> {
    let cap = probe::probe(config).ok_or_else(|| Error::ToolNotFound {
        searched: probe::searched_description(config),
    })?;

    println!("Installing browser drivers with {}...", cap.tool.display());

    installer::install_browsers(
        &cap,
        &InstallOptions {
            with_deps,
            browser,
            quiet: false,
        },
        config.timeouts.install_secs,
    )
    .await?;

    println!("{} Browser drivers installed", "✓".green());
    Ok(())
}

/// List discoverable cases without executing them
fn list(config: &Config, suite_path: Option<PathBuf>, json: bool) -> Result<()> {
    let (suite, path) = loader::load_suite(suite_path.as_deref(), config)?;

    if json {
        let cases: Vec<_> = suite
            .cases
            .iter()
            .map(|c| {
                serde_json::json!({
                    "name": c.name,
                    "spec": c.spec.display().to_string(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "suite": suite.name,
                "path": path.display().to_string(),
                "cases": cases,
            }))?
        );
    } else {
        println!("{} ({})", suite.name.bold(), path.display());
        for case in &suite.cases {
            println!(
                "  {:24} {}",
                case.name,
                case.spec.display().to_string().dimmed()
            );
        }
        println!("\n{} case(s)", suite.cases.len());
    }

    Ok(())
}

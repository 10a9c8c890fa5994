//! Suite runner implementation
//!
//! Executes setup steps and delegates each case to the automation tool.
//! A case passes iff the delegated process exits zero within its timeout;
//! case failures are recorded, not raised, so the remaining cases still
//! run and the final exit code reflects the totals.

use std::path::Path;
use std::process::Stdio;
use std::time::{Duration, Instant};

use colored::Colorize;
use serde::Serialize;
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use crate::capability::Capability;
use crate::common::{tail_lines, Config, Error, Result};

use super::config::{SetupStep, TestCase, TestSuite};

/// Result of a single delegated case
#[derive(Debug, Serialize)]
pub struct CaseResult {
    pub name: String,
    pub passed: bool,
    pub duration_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a full suite run
#[derive(Debug, Serialize)]
pub struct SuiteReport {
    pub suite: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CaseResult>,
}

/// Output options for a suite run
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Show setup command output and tool invocations
    pub verbose: bool,
    /// Suppress human-readable progress (JSON mode)
    pub quiet: bool,
}

/// Run every case in the suite
pub async fn run_suite(
    cap: &Capability,
    suite: &TestSuite,
    suite_dir: &Path,
    config: &Config,
    opts: RunOptions,
) -> Result<SuiteReport> {
    if !opts.quiet {
        println!(
            "\n{} {}",
            "Running Suite:".blue().bold(),
            suite.name.white().bold()
        );
        if let Some(desc) = &suite.description {
            println!("  {}", desc.dimmed());
        }
    }

    if let Some(setup_steps) = &suite.setup {
        if !opts.quiet {
            println!("\n{}", "Setup:".cyan());
        }
        for step in setup_steps {
            run_setup_step(step, suite_dir, opts).await?;
        }
    }

    if !opts.quiet {
        println!("\n{}", "Cases:".cyan());
    }

    let mut results = Vec::with_capacity(suite.cases.len());
    for case in &suite.cases {
        results.push(run_case(cap, case, suite_dir, config, opts).await?);
    }

    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    Ok(SuiteReport {
        suite: suite.name.clone(),
        total: results.len(),
        passed,
        failed,
        results,
    })
}

/// Print the final `Ran N tests` summary
pub fn print_summary(report: &SuiteReport) {
    if report.failed == 0 {
        println!(
            "\n{}",
            format!("Ran {} tests: {} passed", report.total, report.passed)
                .green()
                .bold()
        );
    } else {
        println!(
            "\n{}",
            format!(
                "Ran {} tests: {} passed, {} failed",
                report.total, report.passed, report.failed
            )
            .red()
            .bold()
        );
    }
}

async fn run_setup_step(step: &SetupStep, suite_dir: &Path, opts: RunOptions) -> Result<()> {
    if opts.verbose {
        println!("  $ {}", step.shell.dimmed());
    }

    let status = TokioCommand::new("sh")
        .arg("-c")
        .arg(&step.shell)
        .current_dir(suite_dir)
        .stdin(Stdio::null())
        .stdout(if opts.verbose {
            Stdio::inherit()
        } else {
            Stdio::null()
        })
        .stderr(if opts.verbose {
            Stdio::inherit()
        } else {
            Stdio::null()
        })
        .status()
        .await
        .map_err(|e| Error::Internal(format!("Setup command failed to execute: {}", e)))?;

    if !status.success() {
        return Err(Error::SetupStep {
            step: step.shell.clone(),
            code: status.code().unwrap_or(-1),
        });
    }

    if !opts.quiet {
        println!("  {} {}", "✓".green(), step.shell.dimmed());
    }
    Ok(())
}

async fn run_case(
    cap: &Capability,
    case: &TestCase,
    suite_dir: &Path,
    config: &Config,
    opts: RunOptions,
) -> Result<CaseResult> {
    let timeout_secs = case.timeout.unwrap_or(config.timeouts.case_secs);

    let mut cmd = TokioCommand::new(&cap.tool);
    cmd.arg("test")
        .arg(&case.spec)
        .args(&case.args)
        .current_dir(suite_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    if opts.verbose {
        println!(
            "  $ {} test {}",
            cap.tool.display().to_string().dimmed(),
            case.spec.display().to_string().dimmed()
        );
    }

    let start = Instant::now();
    let result = timeout(Duration::from_secs(timeout_secs), cmd.output()).await;
    let duration = start.elapsed();

    let (passed, error) = match result {
        Ok(Ok(output)) if output.status.success() => (true, None),
        Ok(Ok(output)) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let tail = tail_lines(&stderr, 4);
            let detail = if tail.is_empty() {
                format!("exit code {}", output.status.code().unwrap_or(-1))
            } else {
                format!("exit code {}: {}", output.status.code().unwrap_or(-1), tail)
            };
            (false, Some(detail))
        }
        // The tool resolved at probe time but cannot be launched at all:
        // that is an environment failure, not a case failure
        Ok(Err(e)) => return Err(Error::tool_launch(&cap.tool, &e)),
        Err(_) => (
            false,
            Some(format!("timed out after {} seconds", timeout_secs)),
        ),
    };

    if !opts.quiet {
        if passed {
            println!(
                "  {} {} ({:.1}s)",
                "✓".green(),
                case.name,
                duration.as_secs_f64()
            );
        } else {
            println!(
                "  {} {}: {}",
                "✗".red(),
                case.name,
                error.as_deref().unwrap_or("failed")
            );
        }
    }

    Ok(CaseResult {
        name: case.name.clone(),
        passed,
        duration_ms: duration.as_millis(),
        error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::ResolvedFrom;
    use std::path::PathBuf;

    #[cfg(unix)]
    fn fake_tool(dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        // Fails any spec whose name contains "fail", passes the rest
        let path = dir.join("fake-tool");
        std::fs::write(
            &path,
            "#!/bin/sh\ncase \"$2\" in *fail*) echo boom >&2; exit 1 ;; *) exit 0 ;; esac\n",
        )
        .unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failing_case_does_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let cap = Capability {
            tool: fake_tool(dir.path()),
            source: ResolvedFrom::Config,
        };
        let suite: TestSuite = serde_yaml::from_str(
            r#"
            name: sample
            cases:
              - name: first
                spec: a_fail.spec.ts
              - name: second
                spec: b.spec.ts
            "#,
        )
        .unwrap();

        let config = Config::default();
        let report = run_suite(
            &cap,
            &suite,
            dir.path(),
            &config,
            RunOptions {
                verbose: false,
                quiet: true,
            },
        )
        .await
        .unwrap();

        assert_eq!(report.total, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.passed, 1);
        assert!(!report.results[0].passed);
        assert!(report.results[0].error.as_ref().unwrap().contains("boom"));
        assert!(report.results[1].passed);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_failed_setup_step_aborts() {
        let dir = tempfile::tempdir().unwrap();
        let cap = Capability {
            tool: fake_tool(dir.path()),
            source: ResolvedFrom::Config,
        };
        let suite: TestSuite = serde_yaml::from_str(
            r#"
            name: sample
            setup:
              - shell: exit 3
            cases:
              - name: never-runs
                spec: a.spec.ts
            "#,
        )
        .unwrap();

        let config = Config::default();
        let err = run_suite(
            &cap,
            &suite,
            dir.path(),
            &config,
            RunOptions {
                verbose: false,
                quiet: true,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::SetupStep { code: 3, .. }));
    }
}

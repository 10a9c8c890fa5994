//! Browser driver installation
//!
//! Delegates driver installation to the automation tool itself
//! (`<tool> install`). The exit status is checked and surfaced: a failed
//! install aborts the run with a diagnostic instead of letting the suite
//! fail later with a confusing unrelated error.

use std::process::Stdio;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::process::Command;
use tokio::time::timeout;

use crate::common::{tail_lines, Error, Result};

use super::Capability;

/// Options for the driver install step
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    /// Also install system dependencies (`--with-deps`)
    pub with_deps: bool,
    /// Install a specific browser only
    pub browser: Option<String>,
    /// Suppress progress output
    pub quiet: bool,
}

/// Install browser drivers via the automation tool
///
/// Invoked at most once per process run. Blocks until the installer
/// finishes or the timeout elapses; the child is killed on timeout.
pub async fn install_browsers(
    cap: &Capability,
    opts: &InstallOptions,
    timeout_secs: u64,
) -> Result<()> {
    let mut cmd = Command::new(&cap.tool);
    cmd.args(install_args(opts))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let pb = if opts.quiet {
        None
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("  {spinner} {msg}")
                .unwrap(),
        );
        pb.set_message("Installing browser drivers...");
        pb.enable_steady_tick(Duration::from_millis(120));
        Some(pb)
    };

    let result = timeout(Duration::from_secs(timeout_secs), cmd.output()).await;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let output = match result {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => return Err(Error::tool_launch(&cap.tool, &e)),
        Err(_) => return Err(Error::InstallTimeout(timeout_secs)),
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::install_failed(
            output.status.code(),
            &tail_lines(&stderr, 6),
        ));
    }

    tracing::debug!(tool = %cap.tool.display(), "browser drivers installed");
    Ok(())
}

/// Arguments passed to the tool for installation
///
/// The default options produce the bare `install` directive with no
/// further arguments.
fn install_args(opts: &InstallOptions) -> Vec<String> {
    let mut args = vec!["install".to_string()];
    if opts.with_deps {
        args.push("--with-deps".to_string());
    }
    if let Some(browser) = &opts.browser {
        args.push(browser.clone());
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_give_bare_install_directive() {
        assert_eq!(install_args(&InstallOptions::default()), vec!["install"]);
    }

    #[test]
    fn test_explicit_options_extend_args() {
        let opts = InstallOptions {
            with_deps: true,
            browser: Some("chromium".to_string()),
            quiet: false,
        };
        assert_eq!(
            install_args(&opts),
            vec!["install", "--with-deps", "chromium"]
        );
    }
}

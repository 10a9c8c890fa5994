//! Installation verification
//!
//! Checks that a resolved tool actually runs and reports a supported
//! version. Failures are absorbed into the result rather than raised, so
//! status commands can render them.

use std::process::Stdio;
use std::time::Duration;

use semver::Version;
use tokio::process::Command;
use tokio::time::timeout;

use crate::common::{Error, Result};

use super::Capability;

/// Result of verifying the automation tool
#[derive(Debug, Clone)]
pub struct VerifyResult {
    /// Whether the tool ran and exited successfully
    pub success: bool,
    /// Reported version, if it could be parsed
    pub version: Option<Version>,
    /// Whether the version meets the configured minimum
    pub supported: bool,
    /// Error message if verification failed
    pub error: Option<String>,
}

/// Verify the tool by running `--version` and parsing the output
pub async fn verify_tool(
    cap: &Capability,
    min_version: &str,
    timeout_secs: u64,
) -> Result<VerifyResult> {
    let min = Version::parse(min_version).map_err(|e| {
        Error::Config(format!("Invalid tool.min_version '{}': {}", min_version, e))
    })?;

    let mut cmd = Command::new(&cap.tool);
    cmd.arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let output = match timeout(Duration::from_secs(timeout_secs), cmd.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            return Ok(VerifyResult {
                success: false,
                version: None,
                supported: false,
                error: Some(e.to_string()),
            })
        }
        Err(_) => {
            return Ok(VerifyResult {
                success: false,
                version: None,
                supported: false,
                error: Some(format!("Timeout after {} seconds", timeout_secs)),
            })
        }
    };

    if !output.status.success() {
        return Ok(VerifyResult {
            success: false,
            version: None,
            supported: false,
            error: Some(format!(
                "Exit code: {}",
                output.status.code().unwrap_or(-1)
            )),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = parse_version_output(&stdout);
    let supported = version.as_ref().map(|v| *v >= min).unwrap_or(false);

    Ok(VerifyResult {
        success: true,
        version,
        supported,
        error: None,
    })
}

/// Parse a version out of `--version` output such as "Version 1.44.0"
fn parse_version_output(output: &str) -> Option<Version> {
    output
        .split_whitespace()
        .map(|tok| tok.trim_start_matches('v'))
        .find_map(|tok| Version::parse(tok).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixed_version_output() {
        let v = parse_version_output("Version 1.44.0\n").unwrap();
        assert_eq!(v, Version::new(1, 44, 0));
    }

    #[test]
    fn test_parse_bare_and_v_prefixed_versions() {
        assert_eq!(
            parse_version_output("1.2.3"),
            Some(Version::new(1, 2, 3))
        );
        assert_eq!(
            parse_version_output("tool v2.0.1 (release)"),
            Some(Version::new(2, 0, 1))
        );
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse_version_output("no version here").is_none());
        assert!(parse_version_output("").is_none());
    }
}

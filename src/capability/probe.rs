//! Capability resolution
//!
//! Detects whether the browser automation tool is available. Resolution
//! either succeeds with a handle or yields `None`; absence is never an
//! error, so callers branch with an `if` rather than unwinding.

use std::path::PathBuf;

use crate::common::Config;

use super::{Capability, ResolvedFrom};

/// Environment variable overriding the automation tool location
pub const TOOL_ENV_VAR: &str = "UITEST_TOOL";

/// Resolve the browser automation tool for this process
///
/// Resolution order: `UITEST_TOOL` environment override, then the
/// `tool.path` configuration entry, then a PATH lookup of the configured
/// tool name. Side-effect free: probing twice in the same environment
/// yields the same outcome.
pub fn probe(config: &Config) -> Option<Capability> {
    resolve(std::env::var_os(TOOL_ENV_VAR).map(PathBuf::from), config)
}

/// Human-readable list of the locations `probe` consults, for error
/// messages and status output.
pub fn searched_description(config: &Config) -> String {
    format!(
        "${}, tool.path in config, '{}' on PATH",
        TOOL_ENV_VAR, config.tool.name
    )
}

fn resolve(env_override: Option<PathBuf>, config: &Config) -> Option<Capability> {
    if let Some(path) = env_override {
        if path.is_file() {
            return Some(Capability {
                tool: path,
                source: ResolvedFrom::Env,
            });
        }
        tracing::debug!(
            path = %path.display(),
            "tool named by {} does not exist, trying next candidate",
            TOOL_ENV_VAR
        );
    }

    if let Some(path) = &config.tool.path {
        if path.is_file() {
            return Some(Capability {
                tool: path.clone(),
                source: ResolvedFrom::Config,
            });
        }
        tracing::debug!(
            path = %path.display(),
            "configured tool.path does not exist, trying next candidate"
        );
    }

    match which::which(&config.tool.name) {
        Ok(path) => Some(Capability {
            tool: path,
            source: ResolvedFrom::PathLookup,
        }),
        Err(_) => None,
    }
}

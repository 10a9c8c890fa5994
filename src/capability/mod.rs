//! Browser automation capability handling
//!
//! Resolves the optional automation tool at startup, installs its browser
//! drivers, and verifies that an installation works.

pub mod installer;
pub mod probe;
pub mod verifier;

use std::fmt;
use std::path::PathBuf;

/// Where the automation tool was resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedFrom {
    /// The `UITEST_TOOL` environment variable
    Env,
    /// The `tool.path` configuration entry
    Config,
    /// A `PATH` lookup of the configured tool name
    PathLookup,
}

impl fmt::Display for ResolvedFrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedFrom::Env => write!(f, "environment"),
            ResolvedFrom::Config => write!(f, "configuration"),
            ResolvedFrom::PathLookup => write!(f, "PATH"),
        }
    }
}

/// Handle to a resolved browser automation tool
///
/// Computed once per invocation and never mutated.
#[derive(Debug, Clone)]
pub struct Capability {
    /// Path to the tool binary
    pub tool: PathBuf,
    /// How the tool was resolved
    pub source: ResolvedFrom,
}

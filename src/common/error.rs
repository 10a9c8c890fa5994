//! Error types for the GUI test harness
//!
//! Error messages are designed to be actionable: they say what failed
//! and, where possible, what to do about it.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Capability Errors ===
    #[error("Browser automation tool not found. Searched: {searched}")]
    ToolNotFound { searched: String },

    #[error("Failed to launch '{tool}': {error}")]
    ToolLaunch { tool: String, error: String },

    // === Driver Installation Errors ===
    #[error("Browser driver install failed with exit code {code}: {detail}")]
    InstallFailed { code: i32, detail: String },

    #[error("Browser driver install timed out after {0} seconds")]
    InstallTimeout(u64),

    // === Suite Errors ===
    #[error("Test suite not found. Searched: {searched}")]
    SuiteNotFound { searched: String },

    #[error("Failed to parse test suite '{path}': {error}")]
    SuiteParse { path: String, error: String },

    #[error("Setup command '{step}' failed with exit code {code}")]
    SetupStep { step: String, code: i32 },

    #[error("{failed} of {total} test cases failed")]
    CasesFailed { failed: usize, total: usize },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Internal Errors ===
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an install failure error from a process exit and stderr
    pub fn install_failed(code: Option<i32>, stderr: &str) -> Self {
        let detail = if stderr.trim().is_empty() {
            "no diagnostic output".to_string()
        } else {
            stderr.trim().to_string()
        };
        Self::InstallFailed {
            code: code.unwrap_or(-1),
            detail,
        }
    }

    /// Create a tool launch error
    pub fn tool_launch(tool: &std::path::Path, error: &io::Error) -> Self {
        Self::ToolLaunch {
            tool: tool.display().to_string(),
            error: error.to_string(),
        }
    }
}

//! Test suite configuration types
//!
//! Defines the data structures for deserializing YAML suite files.

use serde::Deserialize;
use std::path::PathBuf;

/// A complete test suite loaded from a YAML file
#[derive(Deserialize, Debug)]
pub struct TestSuite {
    /// Name of the suite
    pub name: String,
    /// Optional description of what the suite verifies
    pub description: Option<String>,
    /// Optional setup steps to run before the cases (e.g., report generation)
    pub setup: Option<Vec<SetupStep>>,
    /// The test cases to delegate to the automation tool
    pub cases: Vec<TestCase>,
}

/// A setup step that runs before the cases
#[derive(Deserialize, Debug)]
pub struct SetupStep {
    /// Shell command to execute
    pub shell: String,
}

/// A single delegated test case
#[derive(Deserialize, Debug)]
pub struct TestCase {
    /// Case name shown in output
    pub name: String,
    /// Test specification passed to the automation tool, relative to the
    /// suite file
    pub spec: PathBuf,
    /// Extra arguments appended to the tool invocation
    #[serde(default)]
    pub args: Vec<String>,
    /// Timeout in seconds (default: from configuration)
    pub timeout: Option<u64>,
}

//! External GUI test suite loading and execution
//!
//! The suite is a separately-defined YAML collection of test cases; this
//! crate resolves it, parses it, and delegates each case to the
//! automation tool without validating case contents.

pub mod config;
pub mod loader;
pub mod runner;

pub use config::{SetupStep, TestCase, TestSuite};
pub use loader::load_suite;
pub use runner::{run_suite, CaseResult, RunOptions, SuiteReport};

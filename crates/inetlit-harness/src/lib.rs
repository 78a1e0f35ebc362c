//! Conformance testing harness for inetlit.
//!
//! This crate provides:
//! - Fixture loading: JSON case files describing literal inputs and expected outputs
//! - Execution: dispatch a case to the codec and render its result
//! - Verification: compare rendered output against the fixture, with a diff
//! - Report generation: markdown + JSON conformance reports
//! - Structured logging: one JSONL record per executed case

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod execute;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};

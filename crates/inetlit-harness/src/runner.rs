//! Test execution engine.

use std::time::Instant;

use crate::diff;
use crate::execute::execute_case;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome, StreamKind};
use crate::verify::VerificationResult;

/// API family recorded on every per-case log entry.
pub const API_FAMILY: &str = "inet";

/// Runs a fixture set and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| verify_case(&fixture_set.family, case).0)
            .collect()
    }

    /// Run a set, emitting one `fixture_case` entry per case.
    pub fn run_logged(
        &self,
        fixture_set: &FixtureSet,
        emitter: &mut LogEmitter,
    ) -> std::io::Result<Vec<VerificationResult>> {
        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let (result, latency_ns) = verify_case(&fixture_set.family, case);
            let (level, outcome) = if result.passed {
                (LogLevel::Info, Outcome::Pass)
            } else {
                (LogLevel::Error, Outcome::Fail)
            };
            let mut entry = LogEntry::new("", level, "fixture_case")
                .with_campaign(&self.campaign)
                .with_stream(StreamKind::Conformance)
                .with_api(API_FAMILY, &case.function)
                .with_case(&case.name)
                .with_outcome(outcome)
                .with_latency_ns(latency_ns);
            if !result.passed {
                entry = entry.with_details(serde_json::json!({
                    "input": case.input,
                    "expected": result.expected,
                    "actual": result.actual,
                }));
            }
            emitter.emit_entry(entry)?;
            results.push(result);
        }
        Ok(results)
    }
}

fn verify_case(family: &str, case: &FixtureCase) -> (VerificationResult, u64) {
    let start = Instant::now();
    let execution = execute_case(&case.function, &case.input);
    let latency_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

    let actual = match execution {
        Ok(out) => out,
        Err(err) => format!("error: {err}"),
    };
    let passed = actual == case.expected_output;
    let diff = (!passed).then(|| diff::render_diff(&case.expected_output, &actual));
    let result = VerificationResult {
        case_name: case.name.clone(),
        family: family.to_string(),
        function: case.function.clone(),
        reference: case.reference.clone(),
        input: case.input.clone(),
        passed,
        expected: case.expected_output.clone(),
        actual,
        diff,
    };
    (result, latency_ns)
}

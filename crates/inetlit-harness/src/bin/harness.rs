//! CLI entrypoint for the inetlit conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use inetlit_core::inet::{self, LiteralError};
use inetlit_harness::fixtures::load_fixtures;
use inetlit_harness::report::FixtureDigest;
use inetlit_harness::structured_log::{self, LogEmitter, LogLevel};
use inetlit_harness::{ConformanceReport, TestRunner, VerificationSummary};
use serde_json::json;

/// Conformance tooling for inetlit.
#[derive(Debug, Parser)]
#[command(name = "inetlit-harness")]
#[command(about = "Conformance testing harness for inetlit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the codec against fixture files.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown); a JSON twin is written alongside.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Fixed timestamp for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Decode one literal and print the result as JSON.
    Decode {
        #[arg(long, value_enum, default_value_t = Family::Auto)]
        family: Family,
        literal: String,
    },
    /// Validate a structured JSONL log.
    ValidateLog {
        #[arg(long)]
        log: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Family {
    V4,
    V6,
    /// IPv4 first, then IPv6.
    Auto,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            log,
            timestamp,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let loaded = load_fixtures(&fixture)?;

            let runner = TestRunner::new("inet");
            let run_id = format!("run-{}", std::process::id());
            let mut emitter = match &log {
                Some(path) => Some(LogEmitter::to_file(path, &runner.campaign, &run_id)?),
                None => None,
            };

            let mut results = Vec::new();
            for fixture in &loaded {
                match emitter.as_mut() {
                    Some(emitter) => results.extend(runner.run_logged(&fixture.set, emitter)?),
                    None => results.extend(runner.run(&fixture.set)),
                }
            }

            // Stable ordering so reports hash reproducibly.
            results.sort_by(|a, b| {
                a.family
                    .cmp(&b.family)
                    .then_with(|| a.function.cmp(&b.function))
                    .then_with(|| a.case_name.cmp(&b.case_name))
            });

            let summary = VerificationSummary::from_results(results);
            if let Some(emitter) = emitter.as_mut() {
                let level = if summary.all_passed() {
                    LogLevel::Info
                } else {
                    LogLevel::Error
                };
                emitter.emit_entry(
                    structured_log::LogEntry::new("", level, "verify_complete").with_details(
                        json!({
                            "total": summary.total,
                            "passed": summary.passed,
                            "failed": summary.failed,
                        }),
                    ),
                )?;
                emitter.flush()?;
            }

            let report_doc = ConformanceReport {
                title: String::from("inetlit Conformance Report"),
                timestamp: timestamp.unwrap_or_else(structured_log::now_utc),
                fixtures: loaded
                    .iter()
                    .map(|f| FixtureDigest {
                        path: f.path.display().to_string(),
                        family: f.set.family.clone(),
                        sha256: f.sha256.clone(),
                    })
                    .collect(),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failure in report_doc.summary.failures() {
                eprintln!(
                    "FAIL {} ({}) {:?}\n{}",
                    failure.case_name,
                    failure.function,
                    failure.input,
                    failure.diff.as_deref().unwrap_or_default()
                );
            }

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                std::fs::write(report_path.with_extension("json"), report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Decode { family, literal } => {
            let out = decode_json(family, &literal);
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Command::ValidateLog { log } => {
            let (lines, errors) = structured_log::validate_log_file(&log)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!(
                "Validated {} lines in {}: {} errors",
                lines,
                log.display(),
                errors.len()
            );
            if !errors.is_empty() {
                return Err("Structured log validation failed".into());
            }
        }
    }

    Ok(())
}

fn decode_json(family: Family, literal: &str) -> serde_json::Value {
    let src = literal.as_bytes();
    let v4 = || inet::try_decode_ipv4(src);
    let v6 = || inet::decode_ipv6_detailed(src);

    match family {
        Family::V4 => v4_json(literal, v4()),
        Family::V6 => v6_json(literal, v6()),
        Family::Auto => match v4() {
            Ok(octets) => v4_json(literal, Ok(octets)),
            Err(v4_err) => match v6() {
                Ok(decoded) => v6_json(literal, Ok(decoded)),
                Err(v6_err) => json!({
                    "input": literal,
                    "valid": false,
                    "ipv4_error": error_json(&v4_err),
                    "ipv6_error": error_json(&v6_err),
                }),
            },
        },
    }
}

fn v4_json(literal: &str, result: Result<[u8; 4], LiteralError>) -> serde_json::Value {
    match result {
        Ok(octets) => json!({
            "input": literal,
            "valid": true,
            "family": "ipv4",
            "octets": octets,
            "canonical": inet::format_ipv4(&octets),
        }),
        Err(err) => json!({"input": literal, "valid": false, "error": error_json(&err)}),
    }
}

fn v6_json(literal: &str, result: Result<inet::DecodedV6<'_>, LiteralError>) -> serde_json::Value {
    match result {
        Ok(decoded) => json!({
            "input": literal,
            "valid": true,
            "family": "ipv6",
            "octets": decoded.octets,
            "canonical": inet::format_ipv6(&decoded.octets),
            "zone": decoded.zone.map(|z| String::from_utf8_lossy(z).into_owned()),
            "mapped_ipv4": decoded.mapped.map(|m| inet::format_ipv4(&m)),
        }),
        Err(err) => json!({"input": literal, "valid": false, "error": error_json(&err)}),
    }
}

fn error_json(err: &LiteralError) -> serde_json::Value {
    json!({"kind": err.kind().as_str(), "reason": err.reason()})
}

//! Fixture loading and management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::HarnessError;

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Codec function being tested (e.g. `decode_ipv4`).
    pub function: String,
    /// Reference for the expected behavior (RFC section, BSD man page).
    pub reference: String,
    /// Literal text passed to the function.
    pub input: String,
    /// Expected rendered output.
    pub expected_output: String,
}

/// A collection of fixture cases for a function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

/// A fixture set together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedFixture {
    pub path: PathBuf,
    /// Lowercase hex SHA-256 of the file bytes.
    pub sha256: String,
    pub set: FixtureSet,
}

/// Load one fixture file, or every `*.json` file in a directory (sorted by path).
pub fn load_fixtures(path: &Path) -> Result<Vec<LoadedFixture>, HarnessError> {
    let mut paths: Vec<PathBuf> = if path.is_dir() {
        std::fs::read_dir(path)?
            .filter_map(|entry| entry.ok().map(|entry| entry.path()))
            .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
            .collect()
    } else {
        vec![path.to_path_buf()]
    };
    paths.sort();

    let mut loaded = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = std::fs::read(&path)?;
        let set: FixtureSet = serde_json::from_slice(&bytes)?;
        loaded.push(LoadedFixture {
            sha256: hex_lower(&Sha256::digest(&bytes)),
            path,
            set,
        });
    }
    if loaded.is_empty() {
        return Err(HarnessError::NoFixtures(path.display().to_string()));
    }
    Ok(loaded)
}

pub(crate) fn hex_lower(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(&mut out, "{b:02x}");
    }
    out
}

//! Harness error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported function {0:?}")]
    UnsupportedFunction(String),
    #[error("no fixture JSON files found in {0}")]
    NoFixtures(String),
}

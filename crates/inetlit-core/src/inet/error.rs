//! Rejection reasons for address literals.

use thiserror::Error;

/// Why a literal was rejected.
///
/// The public `decode_*` functions collapse every variant to `None`; the
/// `try_decode_*` entry points surface it for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// Character-set or length-bound violation.
    #[error("invalid format: {0}")]
    InvalidFormat(&'static str),
    /// A group exceeded 0xFFFF, or an IPv4 component exceeded its byte width.
    #[error("group overflow: {0}")]
    GroupOverflow(&'static str),
    /// Wrong dot count, repeated `::`, wrong total byte count, bad zone suffix.
    #[error("structural violation: {0}")]
    StructuralViolation(&'static str),
}

/// Coarse classification of a [`LiteralError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralErrorKind {
    InvalidFormat,
    GroupOverflow,
    StructuralViolation,
}

impl LiteralError {
    /// Returns the error class without the reason text.
    #[must_use]
    pub const fn kind(&self) -> LiteralErrorKind {
        match self {
            Self::InvalidFormat(_) => LiteralErrorKind::InvalidFormat,
            Self::GroupOverflow(_) => LiteralErrorKind::GroupOverflow,
            Self::StructuralViolation(_) => LiteralErrorKind::StructuralViolation,
        }
    }

    /// Static reason attached to the error.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidFormat(r) | Self::GroupOverflow(r) | Self::StructuralViolation(r) => r,
        }
    }
}

impl LiteralErrorKind {
    /// Stable lowercase tag, used in harness output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid_format",
            Self::GroupOverflow => "group_overflow",
            Self::StructuralViolation => "structural_violation",
        }
    }
}

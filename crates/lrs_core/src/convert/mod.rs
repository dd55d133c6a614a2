//! Field-level mappers between xAPI statements and Caliper events.
//!
//! # Responsibility
//! - Resolve actor identities across the three xAPI identifier schemes.
//! - Map activities to entities and context activities to groups.
//! - Own the error type shared by every conversion path.
//!
//! # Invariants
//! - Mappers are pure: no I/O, no shared mutable state.
//! - Vocabulary misses pass raw strings through; they are never errors.
//! - Missing optional fields are legitimate absence, not failure.

pub mod actor;
pub mod entity;
pub mod group;

use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ConversionResult<T> = Result<T, ConversionError>;

/// Failure that aborts a whole conversion call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    /// An extension key is not a well-formed absolute IRI.
    MalformedIdentifier { key: String, message: String },
    /// A statement timestamp is not an ISO-8601 date-time.
    MalformedTimestamp { value: String, message: String },
}

impl ConversionError {
    /// Stable machine-readable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedIdentifier { .. } => "malformed_identifier",
            Self::MalformedTimestamp { .. } => "malformed_timestamp",
        }
    }
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedIdentifier { key, message } => {
                write!(f, "extension key `{key}` is not an absolute IRI: {message}")
            }
            Self::MalformedTimestamp { value, message } => {
                write!(f, "timestamp `{value}` is not an ISO-8601 date-time: {message}")
            }
        }
    }
}

impl Error for ConversionError {}

/// Returns the value when it contains non-whitespace characters.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

//! Common error infrastructure for expedition-core.
//!
//! Every failure is fatal to the expedition being built: the generator never
//! returns a partially constructed record, and retrying with the same inputs
//! reproduces the same failure.
//!
//! # Design Principles
//!
//! - **Type Safety**: each failure kind is its own variant
//! - **Severity Classification**: errors are classified for callers that
//!   surface them differently (bad input vs. broken content)
//! - **Silent core**: errors are returned, never logged or swallowed here

use crate::env::OracleError;
use crate::state::{CardId, MageId, MarketId, TreasureId, VariantId};

/// Severity level of an error.
///
/// - **Validation**: the request or configuration is invalid; fix the input
/// - **Fatal**: referenced content is missing or an oracle is absent
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Validation,
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all expedition-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier of the error variant, for categorization and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// A content identifier that could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reference {
    Variant(VariantId),
    Market(MarketId),
    Mage(MageId),
    Card(CardId),
    Treasure(TreasureId),
}

impl core::fmt::Display for Reference {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Variant(id) => write!(f, "variant '{id}'"),
            Self::Market(id) => write!(f, "market '{id}'"),
            Self::Mage(id) => write!(f, "mage '{id}'"),
            Self::Card(id) => write!(f, "card '{id}'"),
            Self::Treasure(id) => write!(f, "treasure '{id}'"),
        }
    }
}

/// Failures of a generation step.
///
/// Pool exhaustion is deliberately absent: it is resolved by sentinel fill
/// and shows up only as empty slots.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationError {
    #[error("unresolved reference: {0}")]
    UnresolvedReference(Reference),

    #[error("duplicate reference in pool: {0}")]
    DuplicateReference(Reference),

    #[error("invalid slot count {requested}: counts must not be negative")]
    InvalidSlotCount { requested: i64 },

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl GenerationError {
    pub fn unresolved(reference: Reference) -> Self {
        Self::UnresolvedReference(reference)
    }
}

impl GameError for GenerationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidSlotCount { .. } | Self::DuplicateReference(_) => {
                ErrorSeverity::Validation
            }
            Self::UnresolvedReference(_) | Self::Oracle(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnresolvedReference(_) => "UNRESOLVED_REFERENCE",
            Self::DuplicateReference(_) => "DUPLICATE_REFERENCE",
            Self::InvalidSlotCount { .. } => "INVALID_SLOT_COUNT",
            Self::Oracle(_) => "ORACLE_NOT_AVAILABLE",
        }
    }
}

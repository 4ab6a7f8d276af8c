//! Error taxonomy for account codes and hierarchy rules.
//!
//! None of these are fatal. The analyzer and validator hand them back as
//! values, and the import reconciler folds them into per-row outcomes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a structural problem found in an account code or batch row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    /// Code contains non-digit characters or is empty.
    InvalidFormat,
    /// Row had no code left after sanitising.
    MissingCode,
    /// Code length does not map to a canonical level.
    IncompleteCode,
    /// Parent/child containment, ordering, or self-reference rule broken.
    HierarchyViolation,
    /// Code repeated within a batch or colliding with existing data.
    DuplicateCode,
    /// Declared parent not found anywhere.
    OrphanParent,
}

/// How an issue affects the row it was raised on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The row is rejected.
    Error,
    /// The row is still accepted; the issue is reported alongside.
    Warning,
}

impl IssueKind {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(self) -> &'static str {
        match self {
            Self::InvalidFormat | Self::MissingCode => "INVALID_FORMAT",
            Self::IncompleteCode => "INCOMPLETE_CODE",
            Self::HierarchyViolation => "HIERARCHY_VIOLATION",
            Self::DuplicateCode => "DUPLICATE_CODE",
            Self::OrphanParent => "ORPHAN_PARENT",
        }
    }

    /// Returns whether this issue blocks a row or only warns about it.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::OrphanParent => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// Reasons a code string fails classification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    /// Code is the empty string.
    #[error("empty")]
    Empty,

    /// Code contains something other than ASCII digits.
    #[error("invalid characters")]
    InvalidCharacters,

    /// Code length sits between canonical levels (3, 5).
    #[error("incomplete code: length {length} does not map to a level")]
    Incomplete {
        /// Number of digits in the code.
        length: usize,
    },
}

impl CodeError {
    /// Returns the taxonomy category of this error.
    #[must_use]
    pub const fn kind(&self) -> IssueKind {
        match self {
            Self::Empty | Self::InvalidCharacters => IssueKind::InvalidFormat,
            Self::Incomplete { .. } => IssueKind::IncompleteCode,
        }
    }
}

/// Reasons a code/parent pair breaks the containment rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// The child code itself does not classify.
    #[error("invalid code format")]
    InvalidCode(#[source] CodeError),

    /// Code and parent are the same string.
    #[error("code cannot equal parent code")]
    EqualsParent,

    /// Code is not strictly longer than its parent.
    #[error("code must be longer than parent code")]
    NotLongerThanParent,

    /// Code does not extend its parent.
    #[error("code must start with parent code {parent}")]
    NotUnderParent {
        /// The declared parent code.
        parent: String,
    },
}

impl HierarchyError {
    /// Returns the taxonomy category of this error.
    #[must_use]
    pub const fn kind(&self) -> IssueKind {
        match self {
            Self::InvalidCode(inner) => inner.kind(),
            _ => IssueKind::HierarchyViolation,
        }
    }
}

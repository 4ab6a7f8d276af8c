//! Structural classification of account codes.
//!
//! A PUC code encodes its position in the hierarchy purely by length:
//!
//! | digits | type       | level |
//! |--------|------------|-------|
//! | 1      | Class      | 1     |
//! | 2      | Group      | 2     |
//! | 4      | Account    | 3     |
//! | 6      | Subaccount | 4     |
//! | 7+     | Auxiliary  | 5     |
//!
//! Lengths 3 and 5 fall between levels and are reported as incomplete.

use serde::{Deserialize, Serialize};

use super::error::CodeError;

/// Code lengths that close a hierarchy segment, shortest first.
const SEGMENT_BOUNDARIES: [usize; 4] = [1, 2, 4, 6];

/// Hierarchy position implied by a code's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// One digit, e.g. `1` (Activo).
    Class,
    /// Two digits, e.g. `11`.
    Group,
    /// Four digits, e.g. `1105`.
    Account,
    /// Six digits, e.g. `110505`.
    Subaccount,
    /// Seven or more digits.
    Auxiliary,
    /// Anything that does not classify.
    Incomplete,
}

impl AccountType {
    /// Returns the level number (1..=5), or 0 for `Incomplete`.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Class => 1,
            Self::Group => 2,
            Self::Account => 3,
            Self::Subaccount => 4,
            Self::Auxiliary => 5,
            Self::Incomplete => 0,
        }
    }

    /// Returns the Spanish display label used in PUC listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Class => "Clase",
            Self::Group => "Grupo",
            Self::Account => "Cuenta",
            Self::Subaccount => "Subcuenta",
            Self::Auxiliary => "Auxiliar",
            Self::Incomplete => "Incompleto",
        }
    }

    /// Maps a digit count to its type.
    #[must_use]
    pub const fn from_length(length: usize) -> Self {
        match length {
            1 => Self::Class,
            2 => Self::Group,
            4 => Self::Account,
            6 => Self::Subaccount,
            n if n >= 7 => Self::Auxiliary,
            _ => Self::Incomplete,
        }
    }
}

/// Outcome of classifying a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// Type derived from the length.
    pub account_type: AccountType,
    /// Level derived from the type; 0 when invalid.
    pub level: u8,
    /// Why the code failed to classify, if it did.
    pub error: Option<CodeError>,
}

impl Classification {
    /// Returns true if the code maps to a canonical level.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the human-readable failure reason, if any.
    #[must_use]
    pub fn reason(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    fn invalid(error: CodeError) -> Self {
        Self {
            account_type: AccountType::Incomplete,
            level: 0,
            error: Some(error),
        }
    }
}

/// Returns true if `code` is non-empty and made only of ASCII digits.
#[must_use]
pub fn is_digit_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit())
}

/// Classifies a code string into its type and level.
///
/// Total over all inputs: empty or non-digit strings come back invalid
/// rather than panicking. Whitespace is not trimmed here.
#[must_use]
pub fn classify(code: &str) -> Classification {
    if code.is_empty() {
        return Classification::invalid(CodeError::Empty);
    }
    if !is_digit_code(code) {
        return Classification::invalid(CodeError::InvalidCharacters);
    }

    let account_type = AccountType::from_length(code.len());
    if account_type == AccountType::Incomplete {
        return Classification::invalid(CodeError::Incomplete { length: code.len() });
    }

    Classification {
        account_type,
        level: account_type.level(),
        error: None,
    }
}

/// Suggests the natural parent of a code by dropping its last segment.
///
/// `110505` yields `1105`, `1105` yields `11`, auxiliaries yield their
/// six-digit subaccount, and a class has no parent. Incomplete lengths fall
/// back to the nearest shorter boundary (`110` yields `11`). Non-digit input
/// yields `None`.
///
/// This is only a suggestion; a declared parent may skip levels as long as
/// it passes [`validate_hierarchy`](super::hierarchy::validate_hierarchy).
#[must_use]
pub fn derive_parent_code(code: &str) -> Option<String> {
    if !is_digit_code(code) {
        return None;
    }

    SEGMENT_BOUNDARIES
        .iter()
        .rev()
        .find(|&&boundary| boundary < code.len())
        .map(|&boundary| code[..boundary].to_string())
}

/// Strips every non-digit character from raw input.
#[must_use]
pub fn sanitize_code(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

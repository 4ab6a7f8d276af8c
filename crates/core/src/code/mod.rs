//! Account-code analysis.
//!
//! Everything that can be learned from a code string alone:
//! - Structural classification (type and level by length)
//! - Natural parent derivation
//! - Parent/child containment validation
//! - Default bookkeeping nature by class
//! - Form suggestions that respect user-set fields

pub mod analyzer;
pub mod error;
pub mod hierarchy;
pub mod nature;
pub mod suggest;

#[cfg(test)]
mod analyzer_props;

pub use analyzer::{
    AccountType, Classification, classify, derive_parent_code, is_digit_code, sanitize_code,
};
pub use error::{CodeError, HierarchyError, IssueKind, Severity};
pub use hierarchy::validate_hierarchy;
pub use nature::{
    Nature, NatureSuggestion, class_name, default_nature_for_class, default_nature_for_code,
};
pub use suggest::{AccountDraft, DraftField, Suggestion, suggest};

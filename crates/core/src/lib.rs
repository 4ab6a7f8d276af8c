//! Hierarchical account-code engine for the Plan Único de Cuentas (PUC).
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Callers supply raw account records and existing codes; the engine hands back
//! derived metadata, trees, and import reports. It performs no I/O.
//!
//! # Modules
//!
//! - `code` - Code classification, parent derivation, hierarchy rules, default nature
//! - `account` - The chart-of-accounts entry
//! - `tree` - Forest building, prefix filtering, subtree counts
//! - `import` - Bulk import reconciliation

pub mod account;
pub mod code;
pub mod import;
pub mod tree;

pub use account::{Account, AccountStatus};
pub use code::{
    AccountType, Classification, IssueKind, Nature, NatureSuggestion, classify,
    default_nature_for_class, derive_parent_code, suggest, validate_hierarchy,
};
pub use import::{ImportOptions, RawRow, ReconciliationReport, reconcile_import};
pub use tree::{MatchTier, TreeNode, build_tree, filter_by_prefix};

//! Field suggestions for account forms.
//!
//! Typing a code suggests a type, a nature, and a parent. Suggestions are
//! computed on demand and applied only to fields the user has not touched.

use std::collections::BTreeSet;

use super::analyzer::{AccountType, Classification, classify, derive_parent_code};
use super::nature::{Nature, default_nature_for_code};

/// Draft fields that can receive suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DraftField {
    /// The derived account type.
    AccountType,
    /// The bookkeeping nature.
    Nature,
    /// The parent code.
    ParentCode,
}

/// An account being edited, tracking which fields the user set explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountDraft {
    /// Code as currently typed.
    pub code: String,
    /// Account type shown in the form.
    pub account_type: Option<AccountType>,
    /// Nature shown in the form.
    pub nature: Option<Nature>,
    /// Parent code shown in the form.
    pub parent_code: Option<String>,
    touched: BTreeSet<DraftField>,
}

impl AccountDraft {
    /// Creates an empty draft for the given code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Records a user-chosen nature; it will never be overwritten by suggestions.
    pub fn set_nature(&mut self, nature: Option<Nature>) {
        self.nature = nature;
        self.touched.insert(DraftField::Nature);
    }

    /// Records a user-chosen parent code.
    pub fn set_parent_code(&mut self, parent_code: Option<String>) {
        self.parent_code = parent_code;
        self.touched.insert(DraftField::ParentCode);
    }

    /// Records a user-chosen account type.
    pub fn set_account_type(&mut self, account_type: Option<AccountType>) {
        self.account_type = account_type;
        self.touched.insert(DraftField::AccountType);
    }

    /// Returns true if the user has set the field explicitly.
    #[must_use]
    pub fn is_touched(&self, field: DraftField) -> bool {
        self.touched.contains(&field)
    }
}

/// Values derived from a code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Structural classification of the code.
    pub classification: Classification,
    /// Class default nature, if the class has one.
    pub nature: Option<Nature>,
    /// Natural parent code.
    pub parent_code: Option<String>,
}

impl Suggestion {
    /// Writes the suggestion into every untouched field of `draft`.
    pub fn apply_to(&self, draft: &mut AccountDraft) {
        if !draft.is_touched(DraftField::AccountType) {
            draft.account_type = self
                .classification
                .is_valid()
                .then_some(self.classification.account_type);
        }
        if !draft.is_touched(DraftField::Nature) {
            draft.nature = self.nature;
        }
        if !draft.is_touched(DraftField::ParentCode) {
            draft.parent_code.clone_from(&self.parent_code);
        }
    }
}

/// Derives type, nature, and parent suggestions from a code.
#[must_use]
pub fn suggest(code: &str) -> Suggestion {
    Suggestion {
        classification: classify(code),
        nature: default_nature_for_code(code).map(|s| s.nature),
        parent_code: derive_parent_code(code),
    }
}

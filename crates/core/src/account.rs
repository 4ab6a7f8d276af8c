//! Chart-of-accounts entry.

use chrono::{DateTime, Utc};
use puc_shared::types::{AccountId, UserId};
use serde::{Deserialize, Serialize};

use crate::code::{AccountType, Nature, classify};

/// Whether an account can be used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account is in use.
    #[default]
    Active,
    /// Account is retired but kept for history.
    Inactive,
}

/// A PUC account.
///
/// Level and type are not stored; they are always derived from the code
/// length, so two accounts with equally long codes share them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Persistence identifier, if the account has been stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AccountId>,
    /// Digit-only account code.
    pub code: String,
    /// Declared parent code.
    #[serde(default)]
    pub parent_code: Option<String>,
    /// Account name.
    #[serde(default)]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Bookkeeping nature; unset for classes without a default.
    #[serde(default)]
    pub nature: Option<Nature>,
    /// Account status.
    #[serde(default)]
    pub status: AccountStatus,
    /// Whether entries may be posted directly to this account.
    #[serde(default)]
    pub accepts_movements: bool,
    /// Whether postings must name a third party.
    #[serde(default)]
    pub requires_third_party: bool,
    /// Whether postings must name a cost center.
    #[serde(default)]
    pub requires_cost_center: bool,
    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// User who created the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserId>,
}

impl Account {
    /// Creates an active account with the given code and name.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: None,
            code: code.into(),
            parent_code: None,
            name: name.into(),
            description: None,
            nature: None,
            status: AccountStatus::Active,
            accepts_movements: false,
            requires_third_party: false,
            requires_cost_center: false,
            created_at: None,
            updated_at: None,
            created_by: None,
        }
    }

    /// Sets the declared parent code.
    #[must_use]
    pub fn with_parent(mut self, parent_code: impl Into<String>) -> Self {
        self.parent_code = Some(parent_code.into());
        self
    }

    /// Sets the nature.
    #[must_use]
    pub const fn with_nature(mut self, nature: Nature) -> Self {
        self.nature = Some(nature);
        self
    }

    /// Returns the level derived from the code (0 if it does not classify).
    #[must_use]
    pub fn level(&self) -> u8 {
        classify(&self.code).level
    }

    /// Returns the type derived from the code.
    #[must_use]
    pub fn account_type(&self) -> AccountType {
        classify(&self.code).account_type
    }

    /// Returns the class digit (first character of the code).
    #[must_use]
    pub fn class_digit(&self) -> Option<char> {
        self.code.chars().next()
    }

    /// Returns true if the account is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}

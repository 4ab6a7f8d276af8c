//! Default bookkeeping nature by PUC class.
//!
//! The table is advisory. Callers apply it only while the nature field is
//! unset; a value chosen by the user always wins.

use serde::{Deserialize, Serialize};

/// Side on which an account's balance conventionally grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    /// Increases with debits.
    Debit,
    /// Increases with credits.
    Credit,
}

impl Nature {
    /// Returns the Spanish display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Debit => "Débito",
            Self::Credit => "Crédito",
        }
    }
}

/// Suggested nature for a class, with the class label for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NatureSuggestion {
    /// Suggested nature.
    pub nature: Nature,
    /// Name of the class the suggestion comes from.
    pub label: &'static str,
}

/// Returns the PUC name of a class digit.
#[must_use]
pub const fn class_name(class_digit: char) -> Option<&'static str> {
    match class_digit {
        '1' => Some("Activo"),
        '2' => Some("Pasivo"),
        '3' => Some("Patrimonio"),
        '4' => Some("Ingresos"),
        '5' => Some("Gastos"),
        '6' => Some("Costos de ventas"),
        '7' => Some("Costos de producción o de operación"),
        '8' => Some("Cuentas de orden deudoras"),
        '9' => Some("Cuentas de orden acreedoras"),
        _ => None,
    }
}

/// Returns the default nature for a class digit.
///
/// Classes 7 through 9 have no agreed default and return `None`; callers
/// must leave the nature unset for them.
#[must_use]
pub fn default_nature_for_class(class_digit: char) -> Option<NatureSuggestion> {
    let nature = match class_digit {
        '1' | '5' | '6' => Nature::Debit,
        '2' | '3' | '4' => Nature::Credit,
        _ => return None,
    };

    Some(NatureSuggestion {
        nature,
        label: class_name(class_digit)?,
    })
}

/// Returns the default nature for the class a code belongs to.
#[must_use]
pub fn default_nature_for_code(code: &str) -> Option<NatureSuggestion> {
    code.chars().next().and_then(default_nature_for_class)
}

//! Collaborator traits for text resolution and money rendering

use std::collections::HashMap;

use crate::types::Money;

/// Resolves display text for label and tooltip identifiers
///
/// This lets the reconciliation builder stay independent of whichever
/// localization backend the host application uses (static tables, Fluent,
/// gettext, etc.).
pub trait TextSource: Send + Sync {
    /// Get the display text for an identifier such as
    /// `accounts.balance_reconciliation.labels.start_balance`
    fn text(&self, key: &str) -> String;
}

impl TextSource for HashMap<String, String> {
    fn text(&self, key: &str) -> String {
        self.get(key).cloned().unwrap_or_else(|| key.to_string())
    }
}

impl<T: TextSource + ?Sized> TextSource for &T {
    fn text(&self, key: &str) -> String {
        (**self).text(key)
    }
}

/// Renders monetary amounts for display
pub trait MoneyFormatter: Send + Sync {
    /// Format an amount, e.g. `-$1,234.50`
    fn format(&self, money: &Money) -> String;
}

//! In-memory text catalog for labels and tooltips

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::reconciliation::keys::{Label, Tooltip};
use crate::traits::TextSource;
use crate::types::*;

/// Flat map from text identifier to display string
///
/// Lookups for identifiers that are not present return the identifier
/// itself so missing translations stay visible instead of rendering blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextCatalog {
    entries: HashMap<String, String>,
}

impl TextCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with English text for every label and tooltip
    pub fn english() -> Self {
        let mut catalog = Self::new();
        for label in Label::ALL {
            catalog.insert(label.key(), english_label(label));
        }
        for tooltip in Tooltip::ALL {
            catalog.insert(tooltip.key(), english_tooltip(tooltip));
        }
        catalog
    }

    /// Load a catalog from a flat JSON object of identifier to text
    pub fn from_json(json: &str) -> ReconciliationResult<Self> {
        serde_json::from_str(json).map_err(|e| ReconciliationError::Catalog(e.to_string()))
    }

    /// Add or replace the text for an identifier
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Get the text for an identifier, if present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether an identifier has text
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Overlay another catalog on top of this one; its entries win
    pub fn merge(mut self, other: TextCatalog) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Number of identifiers in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TextSource for TextCatalog {
    fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}

fn english_label(label: Label) -> &'static str {
    match label {
        Label::StartBalance => "Start balance",
        Label::NetCashFlow => "Net cash flow",
        Label::EndBalance => "End balance",
        Label::Adjustments => "Adjustments",
        Label::FinalBalance => "Final balance",
        Label::Charges => "Charges",
        Label::Payments => "Payments",
        Label::ChangeInBrokerageCash => "Change in brokerage cash",
        Label::ChangeInHoldingsTrades => "Change in holdings (buys/sells)",
        Label::ChangeInHoldingsMarket => "Change in holdings (market price activity)",
        Label::StartPrincipal => "Start principal",
        Label::NetPrincipalChange => "Net principal change",
        Label::EndPrincipal => "End principal",
        Label::FinalPrincipal => "Final principal",
        Label::StartValue => "Start value",
        Label::NetValueChange => "Net value change",
        Label::EndValue => "End value",
        Label::FinalValue => "Final value",
        Label::Buys => "Buys",
        Label::Sells => "Sells",
        Label::MarketChanges => "Market changes",
    }
}

fn english_tooltip(tooltip: Tooltip) -> &'static str {
    match tooltip {
        Tooltip::StartBalance => "The account balance at the beginning of this day",
        Tooltip::NetCashFlow => "Net change in balance from all transactions during the day",
        Tooltip::EndBalance => "The calculated balance after all transactions but before any manual adjustments",
        Tooltip::Adjustments => "Manual balance corrections applied to match the actual account balance",
        Tooltip::FinalBalance => "The final account balance for the day",
        Tooltip::CreditCardStartBalance => "The amount owed on the card at the beginning of this day",
        Tooltip::Charges => "Total purchases and fees charged to the card",
        Tooltip::Payments => "Total payments made toward the card balance",
        Tooltip::CreditCardFinalBalance => "The amount owed on the card at the end of this day",
        Tooltip::InvestmentStartBalance => "The total value of cash and holdings at the beginning of this day",
        Tooltip::ChangeInBrokerageCash => "Net cash movement from deposits, withdrawals and trades",
        Tooltip::ChangeInHoldingsTrades => "Change in holdings value from buying and selling securities",
        Tooltip::ChangeInHoldingsMarket => "Change in holdings value from market price movements",
        Tooltip::InvestmentEndBalance => "The calculated total value before any manual adjustments",
        Tooltip::InvestmentFinalBalance => "The total value of cash and holdings at the end of this day",
        Tooltip::StartPrincipal => "The outstanding loan principal at the beginning of this day",
        Tooltip::NetPrincipalChange => "Change in principal from payments and new borrowing",
        Tooltip::EndPrincipal => "The calculated principal before any manual adjustments",
        Tooltip::FinalPrincipal => "The outstanding loan principal at the end of this day",
        Tooltip::StartValue => "The estimated asset value at the beginning of this day",
        Tooltip::NetValueChange => "Net change in asset value from all activity during the day",
        Tooltip::EndValue => "The calculated asset value before any manual adjustments",
        Tooltip::AssetAdjustments => "Manual value updates such as appraisals or revaluations",
        Tooltip::FinalValue => "The estimated asset value at the end of this day",
        Tooltip::CryptoStartBalance => "The value of crypto holdings at the beginning of this day",
        Tooltip::Buys => "Cash spent purchasing crypto",
        Tooltip::Sells => "Cash received from selling crypto",
        Tooltip::MarketChanges => "Change in value from crypto price movements",
        Tooltip::CryptoFinalBalance => "The value of crypto holdings at the end of this day",
    }
}

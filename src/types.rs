//! Core types and data structures for balance reconciliation

use bigdecimal::{BigDecimal, Zero};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;
use uuid::Uuid;

use crate::traits::MoneyFormatter;

/// Exact monetary amount tagged with an ISO currency code
///
/// Binary operations assume both operands share a currency, which holds for
/// every amount derived from a single [`Balance`]. The result carries the
/// currency of the left operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: BigDecimal,
    currency: String,
}

impl Money {
    /// Create a money amount in the given currency
    pub fn new(amount: BigDecimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Create a zero amount in the given currency
    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(BigDecimal::zero(), currency)
    }

    /// Parse a decimal string such as `"-12.50"` into money
    pub fn parse(amount: &str, currency: impl Into<String>) -> ReconciliationResult<Self> {
        let parsed = BigDecimal::from_str(amount.trim())
            .map_err(|e| ReconciliationError::InvalidAmount(format!("'{}': {}", amount, e)))?;
        Ok(Self::new(parsed, currency))
    }

    /// Get the decimal amount
    pub fn amount(&self) -> &BigDecimal {
        &self.amount
    }

    /// Get the ISO currency code
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if the amount is below zero
    pub fn is_negative(&self) -> bool {
        self.amount < BigDecimal::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money::new(self.amount + rhs.amount, self.currency)
    }
}

impl Add<&Money> for &Money {
    type Output = Money;

    fn add(self, rhs: &Money) -> Money {
        Money::new(&self.amount + &rhs.amount, self.currency.clone())
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money::new(self.amount - rhs.amount, self.currency)
    }
}

impl Sub<&Money> for &Money {
    type Output = Money;

    fn sub(self, rhs: &Money) -> Money {
        Money::new(&self.amount - &rhs.amount, self.currency.clone())
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money::new(-self.amount, self.currency)
    }
}

/// Account categories that drive how a balance breakdown is presented
///
/// Unknown category strings are kept verbatim in [`AccountCategory::Other`]
/// so parsing never fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccountCategory {
    Depository,
    OtherAsset,
    OtherLiability,
    CreditCard,
    Investment,
    Loan,
    Property,
    Vehicle,
    Crypto,
    /// Any category this crate does not know about
    Other(String),
}

impl AccountCategory {
    /// The accountable type string for this category
    pub fn as_str(&self) -> &str {
        match self {
            AccountCategory::Depository => "Depository",
            AccountCategory::OtherAsset => "OtherAsset",
            AccountCategory::OtherLiability => "OtherLiability",
            AccountCategory::CreditCard => "CreditCard",
            AccountCategory::Investment => "Investment",
            AccountCategory::Loan => "Loan",
            AccountCategory::Property => "Property",
            AccountCategory::Vehicle => "Vehicle",
            AccountCategory::Crypto => "Crypto",
            AccountCategory::Other(name) => name,
        }
    }

    /// Select the breakdown strategy used for this category
    pub fn reconciliation_kind(&self) -> ReconciliationKind {
        match self {
            AccountCategory::Depository
            | AccountCategory::OtherAsset
            | AccountCategory::OtherLiability => ReconciliationKind::Default,
            AccountCategory::CreditCard => ReconciliationKind::CreditCard,
            AccountCategory::Investment => ReconciliationKind::Investment,
            AccountCategory::Loan => ReconciliationKind::Loan,
            AccountCategory::Property | AccountCategory::Vehicle => ReconciliationKind::Asset,
            AccountCategory::Crypto => ReconciliationKind::Crypto,
            AccountCategory::Other(_) => ReconciliationKind::Default,
        }
    }

    /// Whether this category is one of the known accountable types
    pub fn is_known(&self) -> bool {
        !matches!(self, AccountCategory::Other(_))
    }
}

impl From<&str> for AccountCategory {
    fn from(value: &str) -> Self {
        match value {
            "Depository" => AccountCategory::Depository,
            "OtherAsset" => AccountCategory::OtherAsset,
            "OtherLiability" => AccountCategory::OtherLiability,
            "CreditCard" => AccountCategory::CreditCard,
            "Investment" => AccountCategory::Investment,
            "Loan" => AccountCategory::Loan,
            "Property" => AccountCategory::Property,
            "Vehicle" => AccountCategory::Vehicle,
            "Crypto" => AccountCategory::Crypto,
            other => AccountCategory::Other(other.to_string()),
        }
    }
}

impl From<String> for AccountCategory {
    fn from(value: String) -> Self {
        AccountCategory::from(value.as_str())
    }
}

impl From<AccountCategory> for String {
    fn from(value: AccountCategory) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The per-category strategies for building reconciliation items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconciliationKind {
    /// Depository, other assets, other liabilities and anything unrecognized
    Default,
    CreditCard,
    Investment,
    Loan,
    /// Property and vehicles
    Asset,
    Crypto,
}

/// Account descriptor consumed by the reconciliation builder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,
    /// Human-readable account name
    pub name: String,
    /// Category of the account (Depository, CreditCard, etc.)
    pub accountable_type: AccountCategory,
}

impl Account {
    /// Create a new account with a fresh identifier
    pub fn new(name: impl Into<String>, accountable_type: impl Into<AccountCategory>) -> Self {
        Self::with_id(Uuid::new_v4(), name, accountable_type)
    }

    /// Create an account with a known identifier
    pub fn with_id(
        id: Uuid,
        name: impl Into<String>,
        accountable_type: impl Into<AccountCategory>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            accountable_type: accountable_type.into(),
        }
    }
}

/// Snapshot of one account's activity over a period
///
/// All flow fields are pre-aggregated by the balance calculator. The
/// expected relation between them is
/// `end = start + cash_in - cash_out + non_cash_in - non_cash_out + market + adjustments`,
/// which is not enforced here (see [`crate::utils::validate_balance`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// Date the balance was computed for
    pub date: NaiveDate,
    /// ISO currency code shared by every amount
    pub currency: String,
    pub start_balance: BigDecimal,
    pub end_balance: BigDecimal,
    pub cash_inflows: BigDecimal,
    pub cash_outflows: BigDecimal,
    pub non_cash_inflows: BigDecimal,
    pub non_cash_outflows: BigDecimal,
    pub cash_adjustments: BigDecimal,
    pub non_cash_adjustments: BigDecimal,
    pub net_market_flows: BigDecimal,
}

impl Balance {
    /// Create a balance with every amount set to zero
    pub fn new(date: NaiveDate, currency: impl Into<String>) -> Self {
        Self {
            date,
            currency: currency.into(),
            start_balance: BigDecimal::zero(),
            end_balance: BigDecimal::zero(),
            cash_inflows: BigDecimal::zero(),
            cash_outflows: BigDecimal::zero(),
            non_cash_inflows: BigDecimal::zero(),
            non_cash_outflows: BigDecimal::zero(),
            cash_adjustments: BigDecimal::zero(),
            non_cash_adjustments: BigDecimal::zero(),
            net_market_flows: BigDecimal::zero(),
        }
    }

    fn money(&self, amount: &BigDecimal) -> Money {
        Money::new(amount.clone(), self.currency.clone())
    }

    /// Start balance in the balance currency
    pub fn start_balance_money(&self) -> Money {
        self.money(&self.start_balance)
    }

    /// End balance in the balance currency
    pub fn end_balance_money(&self) -> Money {
        self.money(&self.end_balance)
    }

    /// Cash inflows in the balance currency
    pub fn cash_inflows_money(&self) -> Money {
        self.money(&self.cash_inflows)
    }

    /// Cash outflows in the balance currency
    pub fn cash_outflows_money(&self) -> Money {
        self.money(&self.cash_outflows)
    }

    /// Non cash inflows in the balance currency
    pub fn non_cash_inflows_money(&self) -> Money {
        self.money(&self.non_cash_inflows)
    }

    /// Non cash outflows in the balance currency
    pub fn non_cash_outflows_money(&self) -> Money {
        self.money(&self.non_cash_outflows)
    }

    /// Cash adjustments in the balance currency
    pub fn cash_adjustments_money(&self) -> Money {
        self.money(&self.cash_adjustments)
    }

    /// Non cash adjustments in the balance currency
    pub fn non_cash_adjustments_money(&self) -> Money {
        self.money(&self.non_cash_adjustments)
    }

    /// Net market flows in the balance currency
    pub fn net_market_flows_money(&self) -> Money {
        self.money(&self.net_market_flows)
    }
}

/// Visual role of a line in a reconciliation breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemStyle {
    Start,
    Flow,
    Subtotal,
    Adjustment,
    Final,
}

/// One labeled line of a reconciliation breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub value: Money,
    pub tooltip: String,
    pub style: LineItemStyle,
}

impl LineItem {
    /// Create a new line item
    pub fn new(
        label: String,
        value: Money,
        tooltip: String,
        style: LineItemStyle,
    ) -> Self {
        Self {
            label,
            value,
            tooltip,
            style,
        }
    }

    /// Render the value through a money formatter
    pub fn formatted_value<F: MoneyFormatter + ?Sized>(&self, formatter: &F) -> String {
        formatter.format(&self.value)
    }
}

/// Errors raised by the supporting operations around reconciliation
#[derive(Debug, thiserror::Error)]
pub enum ReconciliationError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Text catalog error: {0}")]
    Catalog(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },
    #[error("Balance does not reconcile: expected end balance {expected}, actual {actual}")]
    Unbalanced {
        expected: BigDecimal,
        actual: BigDecimal,
    },
}

/// Result type for reconciliation operations
pub type ReconciliationResult<T> = Result<T, ReconciliationError>;

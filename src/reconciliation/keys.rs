//! Text identifiers for reconciliation labels and tooltips

use serde::{Deserialize, Serialize};

/// Prefix shared by every label identifier
pub const LABEL_PREFIX: &str = "accounts.balance_reconciliation.labels";

/// Prefix shared by every tooltip identifier
pub const TOOLTIP_PREFIX: &str = "accounts.balance_reconciliation.tooltips";

/// Line labels shown in a reconciliation breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    StartBalance,
    NetCashFlow,
    EndBalance,
    Adjustments,
    FinalBalance,
    Charges,
    Payments,
    ChangeInBrokerageCash,
    ChangeInHoldingsTrades,
    ChangeInHoldingsMarket,
    StartPrincipal,
    NetPrincipalChange,
    EndPrincipal,
    FinalPrincipal,
    StartValue,
    NetValueChange,
    EndValue,
    FinalValue,
    Buys,
    Sells,
    MarketChanges,
}

impl Label {
    /// Every label, in declaration order
    pub const ALL: [Label; 21] = [
        Label::StartBalance,
        Label::NetCashFlow,
        Label::EndBalance,
        Label::Adjustments,
        Label::FinalBalance,
        Label::Charges,
        Label::Payments,
        Label::ChangeInBrokerageCash,
        Label::ChangeInHoldingsTrades,
        Label::ChangeInHoldingsMarket,
        Label::StartPrincipal,
        Label::NetPrincipalChange,
        Label::EndPrincipal,
        Label::FinalPrincipal,
        Label::StartValue,
        Label::NetValueChange,
        Label::EndValue,
        Label::FinalValue,
        Label::Buys,
        Label::Sells,
        Label::MarketChanges,
    ];

    /// Short name of the label, e.g. `start_balance`
    pub fn name(&self) -> &'static str {
        match self {
            Label::StartBalance => "start_balance",
            Label::NetCashFlow => "net_cash_flow",
            Label::EndBalance => "end_balance",
            Label::Adjustments => "adjustments",
            Label::FinalBalance => "final_balance",
            Label::Charges => "charges",
            Label::Payments => "payments",
            Label::ChangeInBrokerageCash => "change_in_brokerage_cash",
            Label::ChangeInHoldingsTrades => "change_in_holdings_trades",
            Label::ChangeInHoldingsMarket => "change_in_holdings_market",
            Label::StartPrincipal => "start_principal",
            Label::NetPrincipalChange => "net_principal_change",
            Label::EndPrincipal => "end_principal",
            Label::FinalPrincipal => "final_principal",
            Label::StartValue => "start_value",
            Label::NetValueChange => "net_value_change",
            Label::EndValue => "end_value",
            Label::FinalValue => "final_value",
            Label::Buys => "buys",
            Label::Sells => "sells",
            Label::MarketChanges => "market_changes",
        }
    }

    /// Full identifier passed to a [`crate::TextSource`]
    pub fn key(&self) -> String {
        format!("{}.{}", LABEL_PREFIX, self.name())
    }
}

/// Tooltips explaining each reconciliation line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tooltip {
    StartBalance,
    NetCashFlow,
    EndBalance,
    Adjustments,
    FinalBalance,
    CreditCardStartBalance,
    Charges,
    Payments,
    CreditCardFinalBalance,
    InvestmentStartBalance,
    ChangeInBrokerageCash,
    ChangeInHoldingsTrades,
    ChangeInHoldingsMarket,
    InvestmentEndBalance,
    InvestmentFinalBalance,
    StartPrincipal,
    NetPrincipalChange,
    EndPrincipal,
    FinalPrincipal,
    StartValue,
    NetValueChange,
    EndValue,
    AssetAdjustments,
    FinalValue,
    CryptoStartBalance,
    Buys,
    Sells,
    MarketChanges,
    CryptoFinalBalance,
}

impl Tooltip {
    /// Every tooltip, in declaration order
    pub const ALL: [Tooltip; 29] = [
        Tooltip::StartBalance,
        Tooltip::NetCashFlow,
        Tooltip::EndBalance,
        Tooltip::Adjustments,
        Tooltip::FinalBalance,
        Tooltip::CreditCardStartBalance,
        Tooltip::Charges,
        Tooltip::Payments,
        Tooltip::CreditCardFinalBalance,
        Tooltip::InvestmentStartBalance,
        Tooltip::ChangeInBrokerageCash,
        Tooltip::ChangeInHoldingsTrades,
        Tooltip::ChangeInHoldingsMarket,
        Tooltip::InvestmentEndBalance,
        Tooltip::InvestmentFinalBalance,
        Tooltip::StartPrincipal,
        Tooltip::NetPrincipalChange,
        Tooltip::EndPrincipal,
        Tooltip::FinalPrincipal,
        Tooltip::StartValue,
        Tooltip::NetValueChange,
        Tooltip::EndValue,
        Tooltip::AssetAdjustments,
        Tooltip::FinalValue,
        Tooltip::CryptoStartBalance,
        Tooltip::Buys,
        Tooltip::Sells,
        Tooltip::MarketChanges,
        Tooltip::CryptoFinalBalance,
    ];

    /// Short name of the tooltip, e.g. `credit_card_start_balance`
    pub fn name(&self) -> &'static str {
        match self {
            Tooltip::StartBalance => "start_balance",
            Tooltip::NetCashFlow => "net_cash_flow",
            Tooltip::EndBalance => "end_balance",
            Tooltip::Adjustments => "adjustments",
            Tooltip::FinalBalance => "final_balance",
            Tooltip::CreditCardStartBalance => "credit_card_start_balance",
            Tooltip::Charges => "charges",
            Tooltip::Payments => "payments",
            Tooltip::CreditCardFinalBalance => "credit_card_final_balance",
            Tooltip::InvestmentStartBalance => "investment_start_balance",
            Tooltip::ChangeInBrokerageCash => "change_in_brokerage_cash",
            Tooltip::ChangeInHoldingsTrades => "change_in_holdings_trades",
            Tooltip::ChangeInHoldingsMarket => "change_in_holdings_market",
            Tooltip::InvestmentEndBalance => "investment_end_balance",
            Tooltip::InvestmentFinalBalance => "investment_final_balance",
            Tooltip::StartPrincipal => "start_principal",
            Tooltip::NetPrincipalChange => "net_principal_change",
            Tooltip::EndPrincipal => "end_principal",
            Tooltip::FinalPrincipal => "final_principal",
            Tooltip::StartValue => "start_value",
            Tooltip::NetValueChange => "net_value_change",
            Tooltip::EndValue => "end_value",
            Tooltip::AssetAdjustments => "asset_adjustments",
            Tooltip::FinalValue => "final_value",
            Tooltip::CryptoStartBalance => "crypto_start_balance",
            Tooltip::Buys => "buys",
            Tooltip::Sells => "sells",
            Tooltip::MarketChanges => "market_changes",
            Tooltip::CryptoFinalBalance => "crypto_final_balance",
        }
    }

    /// Full identifier passed to a [`crate::TextSource`]
    pub fn key(&self) -> String {
        format!("{}.{}", TOOLTIP_PREFIX, self.name())
    }
}

//! Builds the ordered line items explaining how a balance moved

use bigdecimal::Zero;
use tracing::debug;

use crate::reconciliation::flows::BalanceFlows;
use crate::reconciliation::keys::{Label, Tooltip};
use crate::traits::TextSource;
use crate::types::*;

/// Produces the reconciliation breakdown for one balance of one account
///
/// The strategy is picked from the account category; unrecognized
/// categories use the default (depository style) breakdown.
pub struct ReconciliationItemBuilder<'a, T: TextSource + ?Sized> {
    balance: &'a Balance,
    account: &'a Account,
    text: &'a T,
}

impl<'a, T: TextSource + ?Sized> ReconciliationItemBuilder<'a, T> {
    /// Create a builder over a balance snapshot and its account
    pub fn new(balance: &'a Balance, account: &'a Account, text: &'a T) -> Self {
        Self {
            balance,
            account,
            text,
        }
    }

    /// The strategy this builder will use
    pub fn kind(&self) -> ReconciliationKind {
        self.account.accountable_type.reconciliation_kind()
    }

    /// Build the ordered line items for display
    pub fn reconciliation_items(&self) -> Vec<LineItem> {
        let kind = self.kind();
        if !self.account.accountable_type.is_known() {
            debug!(
                account_id = %self.account.id,
                accountable_type = %self.account.accountable_type,
                "unrecognized account category, using default reconciliation"
            );
        }

        let items = match kind {
            ReconciliationKind::Default => self.default_items(),
            ReconciliationKind::CreditCard => self.credit_card_items(),
            ReconciliationKind::Investment => self.investment_items(),
            ReconciliationKind::Loan => self.loan_items(),
            ReconciliationKind::Asset => self.asset_items(),
            ReconciliationKind::Crypto => self.crypto_items(),
        };

        debug!(
            account_id = %self.account.id,
            accountable_type = %self.account.accountable_type,
            ?kind,
            item_count = items.len(),
            "built reconciliation items"
        );

        items
    }

    fn default_items(&self) -> Vec<LineItem> {
        let mut items = vec![
            self.item(
                Label::StartBalance,
                self.balance.start_balance_money(),
                Tooltip::StartBalance,
                LineItemStyle::Start,
            ),
            self.item(
                Label::NetCashFlow,
                self.flows().net_cash_flow(),
                Tooltip::NetCashFlow,
                LineItemStyle::Flow,
            ),
        ];

        self.push_adjustments(
            &mut items,
            Label::EndBalance,
            Tooltip::EndBalance,
            self.flows().total_adjustments(),
            Tooltip::Adjustments,
        );

        items.push(self.item(
            Label::FinalBalance,
            self.balance.end_balance_money(),
            Tooltip::FinalBalance,
            LineItemStyle::Final,
        ));
        items
    }

    fn credit_card_items(&self) -> Vec<LineItem> {
        let mut items = vec![
            self.item(
                Label::StartBalance,
                self.balance.start_balance_money(),
                Tooltip::CreditCardStartBalance,
                LineItemStyle::Start,
            ),
            self.item(
                Label::Charges,
                self.balance.cash_outflows_money(),
                Tooltip::Charges,
                LineItemStyle::Flow,
            ),
            self.item(
                Label::Payments,
                -self.balance.cash_inflows_money(),
                Tooltip::Payments,
                LineItemStyle::Flow,
            ),
        ];

        self.push_adjustments(
            &mut items,
            Label::EndBalance,
            Tooltip::EndBalance,
            self.flows().total_adjustments(),
            Tooltip::Adjustments,
        );

        items.push(self.item(
            Label::FinalBalance,
            self.balance.end_balance_money(),
            Tooltip::CreditCardFinalBalance,
            LineItemStyle::Final,
        ));
        items
    }

    fn investment_items(&self) -> Vec<LineItem> {
        let flows = self.flows();
        let mut items = vec![
            self.item(
                Label::StartBalance,
                self.balance.start_balance_money(),
                Tooltip::InvestmentStartBalance,
                LineItemStyle::Start,
            ),
            // Deposits, withdrawals and cash from trades
            self.item(
                Label::ChangeInBrokerageCash,
                flows.net_cash_flow(),
                Tooltip::ChangeInBrokerageCash,
                LineItemStyle::Flow,
            ),
            self.item(
                Label::ChangeInHoldingsTrades,
                flows.net_non_cash_flow(),
                Tooltip::ChangeInHoldingsTrades,
                LineItemStyle::Flow,
            ),
            self.item(
                Label::ChangeInHoldingsMarket,
                self.balance.net_market_flows_money(),
                Tooltip::ChangeInHoldingsMarket,
                LineItemStyle::Flow,
            ),
        ];

        self.push_adjustments(
            &mut items,
            Label::EndBalance,
            Tooltip::InvestmentEndBalance,
            flows.total_adjustments(),
            Tooltip::Adjustments,
        );

        items.push(self.item(
            Label::FinalBalance,
            self.balance.end_balance_money(),
            Tooltip::InvestmentFinalBalance,
            LineItemStyle::Final,
        ));
        items
    }

    fn loan_items(&self) -> Vec<LineItem> {
        let mut items = vec![
            self.item(
                Label::StartPrincipal,
                self.balance.start_balance_money(),
                Tooltip::StartPrincipal,
                LineItemStyle::Start,
            ),
            self.item(
                Label::NetPrincipalChange,
                self.flows().net_non_cash_flow(),
                Tooltip::NetPrincipalChange,
                LineItemStyle::Flow,
            ),
        ];

        // Loans only surface principal adjustments, cash adjustments are left out.
        self.push_adjustments(
            &mut items,
            Label::EndPrincipal,
            Tooltip::EndPrincipal,
            self.balance.non_cash_adjustments_money(),
            Tooltip::Adjustments,
        );

        items.push(self.item(
            Label::FinalPrincipal,
            self.balance.end_balance_money(),
            Tooltip::FinalPrincipal,
            LineItemStyle::Final,
        ));
        items
    }

    fn asset_items(&self) -> Vec<LineItem> {
        let mut items = vec![
            self.item(
                Label::StartValue,
                self.balance.start_balance_money(),
                Tooltip::StartValue,
                LineItemStyle::Start,
            ),
            self.item(
                Label::NetValueChange,
                self.flows().net_total_flow(),
                Tooltip::NetValueChange,
                LineItemStyle::Flow,
            ),
        ];

        self.push_adjustments(
            &mut items,
            Label::EndValue,
            Tooltip::EndValue,
            self.flows().total_adjustments(),
            Tooltip::AssetAdjustments,
        );

        items.push(self.item(
            Label::FinalValue,
            self.balance.end_balance_money(),
            Tooltip::FinalValue,
            LineItemStyle::Final,
        ));
        items
    }

    fn crypto_items(&self) -> Vec<LineItem> {
        let mut items = vec![self.item(
            Label::StartBalance,
            self.balance.start_balance_money(),
            Tooltip::CryptoStartBalance,
            LineItemStyle::Start,
        )];

        if !self.balance.cash_outflows.is_zero() {
            items.push(self.item(
                Label::Buys,
                -self.balance.cash_outflows_money(),
                Tooltip::Buys,
                LineItemStyle::Flow,
            ));
        }
        if !self.balance.cash_inflows.is_zero() {
            items.push(self.item(
                Label::Sells,
                self.balance.cash_inflows_money(),
                Tooltip::Sells,
                LineItemStyle::Flow,
            ));
        }
        if !self.balance.net_market_flows.is_zero() {
            items.push(self.item(
                Label::MarketChanges,
                self.balance.net_market_flows_money(),
                Tooltip::MarketChanges,
                LineItemStyle::Flow,
            ));
        }

        self.push_adjustments(
            &mut items,
            Label::EndBalance,
            Tooltip::InvestmentEndBalance,
            self.flows().total_adjustments(),
            Tooltip::Adjustments,
        );

        items.push(self.item(
            Label::FinalBalance,
            self.balance.end_balance_money(),
            Tooltip::CryptoFinalBalance,
            LineItemStyle::Final,
        ));
        items
    }

    /// Append the pre-adjustment subtotal and the adjustment line, if any
    fn push_adjustments(
        &self,
        items: &mut Vec<LineItem>,
        subtotal_label: Label,
        subtotal_tooltip: Tooltip,
        adjustment: Money,
        adjustment_tooltip: Tooltip,
    ) {
        let flows = self.flows();
        if !flows.has_adjustments() {
            return;
        }

        items.push(self.item(
            subtotal_label,
            flows.end_balance_before_adjustments(),
            subtotal_tooltip,
            LineItemStyle::Subtotal,
        ));
        items.push(self.item(
            Label::Adjustments,
            adjustment,
            adjustment_tooltip,
            LineItemStyle::Adjustment,
        ));
    }

    fn flows(&self) -> BalanceFlows<'a> {
        BalanceFlows::new(self.balance)
    }

    fn item(&self, label: Label, value: Money, tooltip: Tooltip, style: LineItemStyle) -> LineItem {
        LineItem::new(
            self.text.text(&label.key()),
            value,
            self.text.text(&tooltip.key()),
            style,
        )
    }
}

/// Build the reconciliation items for a balance and its account
pub fn build<T: TextSource + ?Sized>(
    balance: &Balance,
    account: &Account,
    text: &T,
) -> Vec<LineItem> {
    ReconciliationItemBuilder::new(balance, account, text).reconciliation_items()
}

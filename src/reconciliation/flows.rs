//! Derived quantities shared by every reconciliation strategy

use bigdecimal::Zero;

use crate::types::{Balance, Money};

/// Read-only view over a [`Balance`] exposing the aggregated flows
#[derive(Debug, Clone, Copy)]
pub struct BalanceFlows<'a> {
    balance: &'a Balance,
}

impl<'a> BalanceFlows<'a> {
    /// Create a flow view over a balance
    pub fn new(balance: &'a Balance) -> Self {
        Self { balance }
    }

    /// Cash inflows minus cash outflows
    pub fn net_cash_flow(&self) -> Money {
        self.balance.cash_inflows_money() - self.balance.cash_outflows_money()
    }

    /// Non-cash inflows minus non-cash outflows
    pub fn net_non_cash_flow(&self) -> Money {
        self.balance.non_cash_inflows_money() - self.balance.non_cash_outflows_money()
    }

    /// Cash, non-cash and market movement combined
    pub fn net_total_flow(&self) -> Money {
        self.net_cash_flow() + self.net_non_cash_flow() + self.balance.net_market_flows_money()
    }

    /// Cash and non-cash adjustments combined
    pub fn total_adjustments(&self) -> Money {
        self.balance.cash_adjustments_money() + self.balance.non_cash_adjustments_money()
    }

    /// Checked against the raw fields, so opposing adjustments that cancel
    /// out still count.
    pub fn has_adjustments(&self) -> bool {
        !self.balance.cash_adjustments.is_zero() || !self.balance.non_cash_adjustments.is_zero()
    }

    /// End balance with all adjustments backed out
    pub fn end_balance_before_adjustments(&self) -> Money {
        self.balance.end_balance_money() - self.total_adjustments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    fn usd(amount: i64) -> Money {
        Money::new(BigDecimal::from(amount), "USD")
    }

    fn sample_balance() -> Balance {
        Balance {
            start_balance: BigDecimal::from(1000),
            end_balance: BigDecimal::from(1265),
            cash_inflows: BigDecimal::from(500),
            cash_outflows: BigDecimal::from(200),
            non_cash_inflows: BigDecimal::from(40),
            non_cash_outflows: BigDecimal::from(90),
            cash_adjustments: BigDecimal::from(10),
            non_cash_adjustments: BigDecimal::from(-5),
            net_market_flows: BigDecimal::from(10),
            ..Balance::new(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(), "USD")
        }
    }

    #[test]
    fn test_net_flows() {
        let balance = sample_balance();
        let flows = BalanceFlows::new(&balance);

        assert_eq!(flows.net_cash_flow(), usd(300));
        assert_eq!(flows.net_non_cash_flow(), usd(-50));
        assert_eq!(flows.net_total_flow(), usd(260));
    }

    #[test]
    fn test_adjustments() {
        let balance = sample_balance();
        let flows = BalanceFlows::new(&balance);

        assert!(flows.has_adjustments());
        assert_eq!(flows.total_adjustments(), usd(5));
        assert_eq!(flows.end_balance_before_adjustments(), usd(1260));
    }

    #[test]
    fn test_cancelling_adjustments_still_count() {
        let balance = Balance {
            cash_adjustments: BigDecimal::from(5),
            non_cash_adjustments: BigDecimal::from(-5),
            ..sample_balance()
        };
        let flows = BalanceFlows::new(&balance);

        assert!(flows.has_adjustments());
        assert!(flows.total_adjustments().is_zero());
    }

    #[test]
    fn test_no_adjustments() {
        let balance = Balance {
            cash_adjustments: BigDecimal::from(0),
            non_cash_adjustments: BigDecimal::from(0),
            ..sample_balance()
        };
        let flows = BalanceFlows::new(&balance);

        assert!(!flows.has_adjustments());
        assert_eq!(flows.end_balance_before_adjustments(), usd(1265));
    }
}

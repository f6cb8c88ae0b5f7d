//! Validation utilities

use crate::reconciliation::BalanceFlows;
use crate::types::*;

/// End balance implied by the start balance plus every flow and adjustment
pub fn expected_end_balance(balance: &Balance) -> Money {
    let flows = BalanceFlows::new(balance);
    balance.start_balance_money() + flows.net_total_flow() + flows.total_adjustments()
}

/// Check that a balance's end value matches its start plus activity
pub fn validate_balance(balance: &Balance) -> ReconciliationResult<()> {
    let expected = expected_end_balance(balance);
    if expected.amount() != &balance.end_balance {
        return Err(ReconciliationError::Unbalanced {
            expected: expected.amount().clone(),
            actual: balance.end_balance.clone(),
        });
    }

    Ok(())
}

/// Check that every line item is denominated in the given currency
pub fn validate_line_items(items: &[LineItem], currency: &str) -> ReconciliationResult<()> {
    for item in items {
        if item.value.currency() != currency {
            return Err(ReconciliationError::CurrencyMismatch {
                expected: currency.to_string(),
                found: item.value.currency().to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    fn balanced() -> Balance {
        Balance {
            start_balance: BigDecimal::from(1000),
            end_balance: BigDecimal::from(1255),
            cash_inflows: BigDecimal::from(400),
            cash_outflows: BigDecimal::from(150),
            non_cash_inflows: BigDecimal::from(20),
            non_cash_outflows: BigDecimal::from(10),
            net_market_flows: BigDecimal::from(-10),
            cash_adjustments: BigDecimal::from(5),
            ..Balance::new(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), "USD")
        }
    }

    #[test]
    fn test_expected_end_balance() {
        assert_eq!(
            expected_end_balance(&balanced()),
            Money::new(BigDecimal::from(1255), "USD")
        );
        assert!(validate_balance(&balanced()).is_ok());
    }

    #[test]
    fn test_unbalanced() {
        let balance = Balance {
            end_balance: BigDecimal::from(1300),
            ..balanced()
        };

        match validate_balance(&balance) {
            Err(ReconciliationError::Unbalanced { expected, actual }) => {
                assert_eq!(expected, BigDecimal::from(1255));
                assert_eq!(actual, BigDecimal::from(1300));
            }
            other => panic!("expected Unbalanced, got {:?}", other),
        }
    }

    #[test]
    fn test_line_item_currency() {
        let item = LineItem::new(
            "Start balance".to_string(),
            Money::new(BigDecimal::from(1), "EUR"),
            "tooltip".to_string(),
            LineItemStyle::Start,
        );

        assert!(validate_line_items(std::slice::from_ref(&item), "EUR").is_ok());
        let err = validate_line_items(&[item], "USD").unwrap_err();
        assert!(matches!(err, ReconciliationError::CurrencyMismatch { .. }));
    }
}

//! Prints reconciliation breakdowns for a handful of sample accounts

use balance_reconciliation::utils::{validate_balance, TextCatalog};
use balance_reconciliation::{build, Account, Balance, MoneyFormat, MoneyFormatter};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();

    println!("Balance Reconciliation Example\n");

    let date = NaiveDate::from_ymd_opt(2024, 1, 31).ok_or("invalid date")?;
    let catalog = TextCatalog::english();
    let format = MoneyFormat::for_currency("USD");

    let samples = vec![
        (
            Account::new("Everyday Checking", "Depository"),
            Balance {
                start_balance: BigDecimal::from(2500),
                end_balance: BigDecimal::from(3120),
                cash_inflows: BigDecimal::from(4200),
                cash_outflows: BigDecimal::from(3600),
                cash_adjustments: BigDecimal::from(20),
                ..Balance::new(date, "USD")
            },
        ),
        (
            Account::new("Rewards Visa", "CreditCard"),
            Balance {
                start_balance: BigDecimal::from(800),
                end_balance: BigDecimal::from(650),
                cash_inflows: BigDecimal::from(800),
                cash_outflows: BigDecimal::from(950),
                ..Balance::new(date, "USD")
            },
        ),
        (
            Account::new("Brokerage", "Investment"),
            Balance {
                start_balance: BigDecimal::from(15000),
                end_balance: BigDecimal::from(15730),
                cash_inflows: BigDecimal::from(1000),
                cash_outflows: BigDecimal::from(500),
                non_cash_inflows: BigDecimal::from(500),
                net_market_flows: BigDecimal::from(-270),
                ..Balance::new(date, "USD")
            },
        ),
        (
            Account::new("Mortgage", "Loan"),
            Balance {
                start_balance: BigDecimal::from(250000),
                end_balance: BigDecimal::from(249100),
                non_cash_outflows: BigDecimal::from(1200),
                non_cash_adjustments: BigDecimal::from(300),
                ..Balance::new(date, "USD")
            },
        ),
        (
            Account::new("Bitcoin", "Crypto"),
            Balance {
                start_balance: BigDecimal::from(4000),
                end_balance: BigDecimal::from(4900),
                cash_inflows: BigDecimal::from(500),
                net_market_flows: BigDecimal::from(400),
                ..Balance::new(date, "USD")
            },
        ),
    ];

    for (account, balance) in &samples {
        println!("{} ({})", account.name, account.accountable_type);
        if let Err(e) = validate_balance(balance) {
            println!("  ! {}", e);
        }

        for item in build(balance, account, &catalog) {
            println!(
                "  {:<45} {:>14}  [{:?}]",
                item.label,
                format.format(&item.value),
                item.style
            );
        }
        println!();
    }

    Ok(())
}

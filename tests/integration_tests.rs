//! Integration tests for balance-reconciliation

use balance_reconciliation::{
    build,
    utils::{validate_balance, validate_line_items, TextCatalog},
    Account, Balance, Label, LineItemStyle, Money, MoneyFormat, ReconciliationItemBuilder,
    ReconciliationKind, Tooltip,
};
use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::collections::HashSet;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
}

fn usd(amount: i64) -> Money {
    Money::new(BigDecimal::from(amount), "USD")
}

#[test]
fn test_crypto_breakdown_with_english_text() {
    let balance = Balance {
        start_balance: BigDecimal::from(100),
        end_balance: BigDecimal::from(150),
        cash_outflows: BigDecimal::from(20),
        net_market_flows: BigDecimal::from(70),
        ..Balance::new(date(), "USD")
    };
    let account = Account::new("Cold wallet", "Crypto");
    let catalog = TextCatalog::english();
    let format = MoneyFormat::default();

    let items = build(&balance, &account, &catalog);

    let rendered: Vec<(String, String, LineItemStyle)> = items
        .iter()
        .map(|item| (item.label.clone(), item.formatted_value(&format), item.style))
        .collect();

    assert_eq!(
        rendered,
        vec![
            ("Start balance".to_string(), "$100.00".to_string(), LineItemStyle::Start),
            ("Buys".to_string(), "-$20.00".to_string(), LineItemStyle::Flow),
            ("Market changes".to_string(), "$70.00".to_string(), LineItemStyle::Flow),
            ("Final balance".to_string(), "$150.00".to_string(), LineItemStyle::Final),
        ]
    );
    assert!(!items.iter().any(|item| item.label == "Sells"));
}

#[test]
fn test_loan_breakdown_keeps_principal_adjustment() {
    let balance = Balance {
        start_balance: BigDecimal::from(1000),
        end_balance: BigDecimal::from(900),
        non_cash_outflows: BigDecimal::from(100),
        cash_adjustments: BigDecimal::from(5),
        non_cash_adjustments: BigDecimal::from(-5),
        ..Balance::new(date(), "USD")
    };
    let account = Account::new("Car loan", "Loan");
    let catalog = TextCatalog::english();

    let items = build(&balance, &account, &catalog);

    let adjustment = items
        .iter()
        .find(|item| item.style == LineItemStyle::Adjustment)
        .expect("adjustment line");
    assert_eq!(adjustment.value, usd(-5));
    assert_eq!(adjustment.label, "Adjustments");
    assert_eq!(items[0].label, "Start principal");
    assert_eq!(items.last().unwrap().label, "Final principal");
    assert!(validate_balance(&balance).is_ok());
}

#[test]
fn test_every_category_renders_distinct_tooltips() {
    let balance = Balance {
        start_balance: BigDecimal::from(500),
        end_balance: BigDecimal::from(640),
        cash_inflows: BigDecimal::from(100),
        cash_outflows: BigDecimal::from(30),
        non_cash_inflows: BigDecimal::from(50),
        non_cash_outflows: BigDecimal::from(10),
        net_market_flows: BigDecimal::from(20),
        cash_adjustments: BigDecimal::from(7),
        non_cash_adjustments: BigDecimal::from(3),
        ..Balance::new(date(), "USD")
    };
    let catalog = TextCatalog::english();

    for category in [
        "Depository",
        "OtherAsset",
        "OtherLiability",
        "CreditCard",
        "Investment",
        "Loan",
        "Property",
        "Vehicle",
        "Crypto",
        "Unknown",
    ] {
        let account = Account::new("Account", category);
        let items = build(&balance, &account, &catalog);

        let tooltips: HashSet<&str> = items.iter().map(|item| item.tooltip.as_str()).collect();
        assert_eq!(tooltips.len(), items.len(), "duplicate tooltip for {}", category);
        assert!(validate_line_items(&items, "USD").is_ok());
        assert!(items.iter().all(|item| !item.label.starts_with("accounts.")));
    }
}

#[test]
fn test_builder_reports_strategy() {
    let balance = Balance::new(date(), "USD");
    let catalog = TextCatalog::new();

    let cases = [
        ("Vehicle", ReconciliationKind::Asset),
        ("CreditCard", ReconciliationKind::CreditCard),
        ("Savings", ReconciliationKind::Default),
    ];

    for (category, kind) in cases {
        let account = Account::new("Account", category);
        let builder = ReconciliationItemBuilder::new(&balance, &account, &catalog);
        assert_eq!(builder.kind(), kind);
    }
}

#[test]
fn test_missing_catalog_entries_surface_identifiers() {
    let balance = Balance {
        start_balance: BigDecimal::from(10),
        end_balance: BigDecimal::from(10),
        ..Balance::new(date(), "USD")
    };
    let account = Account::new("House", "Property");

    let items = build(&balance, &account, &TextCatalog::new());

    assert_eq!(items[0].label, Label::StartValue.key());
    assert_eq!(items[0].tooltip, Tooltip::StartValue.key());
    assert_eq!(items[1].value, usd(0));
}

#[test]
fn test_line_items_serialize_for_display() {
    let balance = Balance {
        start_balance: BigDecimal::from(250),
        end_balance: BigDecimal::from(300),
        cash_outflows: BigDecimal::from(50),
        ..Balance::new(date(), "EUR")
    };
    let account = Account::new("Mastercard", "CreditCard");

    let items = build(&balance, &account, &TextCatalog::english());
    let json = serde_json::to_value(&items).unwrap();

    assert_eq!(json[0]["style"], "start");
    assert_eq!(json[1]["label"], "Charges");
    assert_eq!(json[1]["value"]["currency"], "EUR");
    assert_eq!(json[3]["style"], "final");
}

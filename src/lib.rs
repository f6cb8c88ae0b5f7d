//! # Balance Reconciliation
//!
//! Turns a pre-computed balance snapshot into the ordered, labeled line
//! items that explain how an account's balance moved over a period.
//!
//! ## Features
//!
//! - **Per-account breakdowns**: Depository, credit card, investment, loan,
//!   property/vehicle and crypto accounts each get their own line layout
//! - **Adjustment reporting**: Manual corrections are split out with a
//!   pre-adjustment subtotal
//! - **Pluggable text**: Labels and tooltips resolve through a [`TextSource`]
//! - **Money formatting**: Configurable symbol, precision and separators
//! - **Validation**: Optional checks that a balance actually reconciles
//!
//! ## Quick Start
//!
//! ```rust
//! use balance_reconciliation::utils::TextCatalog;
//! use balance_reconciliation::{build, Account, Balance, LineItemStyle, MoneyFormat};
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let balance = Balance {
//!     start_balance: BigDecimal::from(1000),
//!     end_balance: BigDecimal::from(1250),
//!     cash_inflows: BigDecimal::from(400),
//!     cash_outflows: BigDecimal::from(150),
//!     ..Balance::new(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(), "USD")
//! };
//! let account = Account::new("Checking", "Depository");
//!
//! let items = build(&balance, &account, &TextCatalog::english());
//! assert_eq!(items.len(), 3);
//! assert_eq!(items[1].label, "Net cash flow");
//! assert_eq!(items[1].formatted_value(&MoneyFormat::default()), "$250.00");
//! assert_eq!(items[2].style, LineItemStyle::Final);
//! ```

pub mod format;
pub mod reconciliation;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use format::*;
pub use reconciliation::*;
pub use traits::*;
pub use types::*;

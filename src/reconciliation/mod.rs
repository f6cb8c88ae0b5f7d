//! Reconciliation module turning balance snapshots into display line items

pub mod builder;
pub mod flows;
pub mod keys;

pub use builder::*;
pub use flows::*;
pub use keys::*;

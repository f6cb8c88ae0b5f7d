//! Utility modules

pub mod text_catalog;
pub mod validation;

pub use text_catalog::*;
pub use validation::*;

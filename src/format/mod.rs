//! Money formatting collaborators

pub mod money;

pub use money::*;

//! Customer records and their order aggregates.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

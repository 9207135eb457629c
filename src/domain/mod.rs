pub mod customer;
pub mod dashboard;
pub mod inventory;
pub mod money;
pub mod order;
pub mod search;
pub mod staff;
pub mod totals;
pub mod tracking;
pub mod transaction;
pub mod validation;

pub use customer::*;
pub use dashboard::*;
pub use inventory::*;
pub use order::*;
pub use search::*;
pub use staff::*;
pub use totals::*;
pub use tracking::*;
pub use transaction::*;

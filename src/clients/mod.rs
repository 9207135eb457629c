//! Typed clients for the record actors.
//!
//! Each client wraps a `ResourceClient` and maps framework failures into the
//! record kind's own error type. `OrderClient` additionally orchestrates the
//! other clients.

#[macro_use]
mod macros;

mod customer_client;
mod inventory_client;
mod order_client;
mod staff_client;

pub use customer_client::*;
pub use inventory_client::*;
pub use order_client::*;
pub use staff_client::*;

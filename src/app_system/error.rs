use thiserror::Error;

use super::config::ConfigError;
use crate::customer_actor::CustomerError;
use crate::inventory_actor::InventoryError;
use crate::order_actor::OrderError;
use crate::staff_actor::StaffError;

/// Top-level error for the binary and the system coordinator.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Customer(#[from] CustomerError),
    #[error(transparent)]
    Staff(#[from] StaffError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}

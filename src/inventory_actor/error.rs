use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("Inventory item not found: {0}")]
    NotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Insufficient fabric: requested {requested}m, available {available}m")]
    InsufficientFabric { requested: Decimal, available: Decimal },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
    #[error("Inventory validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(InventoryError);

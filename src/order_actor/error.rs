use thiserror::Error;

use crate::domain::money::AmountOverflow;
use crate::domain::OrderStatus;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),
    #[error("Invalid customer: {0}")]
    InvalidCustomer(String),
    #[error("Invalid salesperson: {0}")]
    InvalidSalesPerson(String),
    #[error("Invalid tailor: {0}")]
    InvalidTailor(String),
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Cannot {action} an order that is {from}")]
    InvalidTransition { from: OrderStatus, action: &'static str },
    #[error("Order status changed: expected {expected}, found {actual}")]
    StaleStatus { expected: OrderStatus, actual: OrderStatus },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(OrderError);

impl From<AmountOverflow> for OrderError {
    fn from(err: AmountOverflow) -> Self {
        OrderError::ValidationError(err.to_string())
    }
}

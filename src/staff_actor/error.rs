use thiserror::Error;

/// Errors that can occur during salesperson and tailor operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StaffError {
    #[error("Staff member not found: {0}")]
    NotFound(String),
    #[error("Staff validation error: {0}")]
    ValidationError(String),
    #[error("Salesperson has {0} order(s) on record")]
    HasOrders(u32),
    #[error("Tailor has no active orders")]
    NoActiveOrders,
    #[error("Tailor still has {0} active order(s)")]
    HasActiveOrders(u32),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

crate::impl_from_framework_error!(StaffError);

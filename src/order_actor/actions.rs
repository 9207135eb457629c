use crate::domain::{Order, OrderStatus, PaymentRequest, Transaction};

/// Custom actions for orders.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to its next status.
    ///
    /// `expected` is the status the caller last saw; the action fails if the
    /// order has moved since, so a repeated request cannot skip a stage.
    Advance { expected: OrderStatus },
    /// Moves the order to `cancelled`. Fails on delivered or cancelled orders.
    Cancel,
    /// Records a payment transaction and refreshes the totals.
    AddPayment(PaymentRequest),
    /// Assigns a tailor to a stitching order.
    AssignTailor(String),
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    Advanced(Order),
    Cancelled(Order),
    PaymentRecorded(Transaction),
    /// Carries the tailor that was replaced, if any.
    TailorAssigned { previous: Option<String> },
}

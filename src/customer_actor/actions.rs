use rust_decimal::Decimal;

use crate::domain::Customer;

/// Aggregate maintenance performed by the order workflow.
#[derive(Debug, Clone)]
pub enum CustomerAction {
    /// Counts a new order of the given value.
    RecordOrder { amount: Decimal },
    /// Undoes `RecordOrder` when an order is cancelled.
    ReverseOrder { amount: Decimal },
}

/// Results from CustomerActions - variants match 1:1 with CustomerAction
#[derive(Debug, Clone)]
pub enum CustomerActionResult {
    OrderRecorded(Customer),
    OrderReversed(Customer),
}

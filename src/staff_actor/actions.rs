use rust_decimal::Decimal;

use crate::domain::{SalesPerson, Tailor};

#[derive(Debug, Clone)]
pub enum SalesPersonAction {
    RecordSale { amount: Decimal },
    ReverseSale { amount: Decimal },
}

/// Results from SalesPersonActions - variants match 1:1 with SalesPersonAction
#[derive(Debug, Clone)]
pub enum SalesPersonActionResult {
    SaleRecorded(SalesPerson),
    SaleReversed(SalesPerson),
}

/// Workload bookkeeping for a tailor.
#[derive(Debug, Clone)]
pub enum TailorAction {
    /// A stitching order was handed to this tailor.
    AssignOrder,
    /// An assigned order was delivered.
    CompleteOrder,
    /// An assigned order was cancelled or moved to another tailor.
    ReleaseOrder,
}

/// Results from TailorActions - variants match 1:1 with TailorAction
#[derive(Debug, Clone)]
pub enum TailorActionResult {
    Assigned(Tailor),
    Completed(Tailor),
    Released(Tailor),
}

use rust_decimal::Decimal;

/// Custom actions for Product entities.
///
/// These actions represent stock operations beyond standard CRUD.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Checks the current stock level without modifying it.
    CheckStock,
    /// Takes units out of stock for an order.
    ///
    /// # Errors
    /// Will fail if the requested amount exceeds available stock.
    Reserve(u32),
    /// Puts previously reserved units back, e.g. on cancellation.
    Release(u32),
    /// Adds newly delivered units.
    Restock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    StockLevel(u32),
    Reserved { remaining: u32 },
    Released { stock: u32 },
    Restocked { stock: u32 },
}

/// Custom actions for Fabric entities, measured in meters.
#[derive(Debug, Clone)]
pub enum FabricAction {
    CheckStock,
    Consume(Decimal),
    Restock(Decimal),
}

/// Results from FabricActions - variants match 1:1 with FabricAction
#[derive(Debug, Clone, PartialEq)]
pub enum FabricActionResult {
    MetersInStock(Decimal),
    Consumed { remaining: Decimal },
    Restocked { meters: Decimal },
}

use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::money::checked_add;
use crate::domain::validation::validate_name;
use crate::domain::{Fabric, FabricCreate, FabricPatch, Product, ProductCreate, ProductPatch};
use super::actions::{FabricAction, FabricActionResult, ProductAction, ProductActionResult};
use super::error::InventoryError;

fn check_price(price: Decimal) -> Result<(), InventoryError> {
    if price.is_sign_negative() {
        return Err(InventoryError::ValidationError(format!("price must not be negative, got {price}")));
    }
    Ok(())
}

fn check_name(name: &str) -> Result<(), InventoryError> {
    validate_name(name).map_err(InventoryError::ValidationError)
}

fn positive_units(units: u32) -> Result<u32, InventoryError> {
    if units == 0 {
        return Err(InventoryError::InvalidQuantity("quantity must be positive".to_string()));
    }
    Ok(units)
}

fn positive_meters(meters: Decimal) -> Result<Decimal, InventoryError> {
    if meters <= Decimal::ZERO {
        return Err(InventoryError::InvalidQuantity(format!("meters must be positive, got {meters}")));
    }
    Ok(meters)
}

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = InventoryError;

    const KIND: &'static str = "product";

    fn id(&self) -> &String { &self.id }

    /// Creates a new Product from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the product
    /// * `params` - Name, section, unit price and opening stock
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, InventoryError> {
        check_name(&params.name)?;
        check_price(params.price)?;
        Ok(Self {
            id,
            name: params.name,
            section: params.section,
            price: params.price,
            stock: params.stock,
        })
    }

    /// Stock is only changed through actions.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), InventoryError> {
        if let Some(name) = &patch.name {
            check_name(name)?;
        }
        if let Some(price) = patch.price {
            check_price(price)?;
            self.price = price;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(section) = patch.section {
            self.section = section;
        }
        Ok(())
    }

    /// Handles stock actions.
    ///
    /// # Errors
    /// Returns an error if attempting to reserve more stock than available,
    /// or when any quantity is zero.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, InventoryError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::StockLevel(self.stock)),
            ProductAction::Reserve(amount) => {
                let amount = positive_units(amount)?;
                if self.stock < amount {
                    return Err(InventoryError::InsufficientStock { requested: amount, available: self.stock });
                }
                self.stock -= amount;
                Ok(ProductActionResult::Reserved { remaining: self.stock })
            }
            ProductAction::Release(amount) => {
                self.stock = self.stock.saturating_add(positive_units(amount)?);
                Ok(ProductActionResult::Released { stock: self.stock })
            }
            ProductAction::Restock(amount) => {
                self.stock = self.stock.saturating_add(positive_units(amount)?);
                Ok(ProductActionResult::Restocked { stock: self.stock })
            }
        }
    }
}

impl Entity for Fabric {
    type Id = String;
    type CreateParams = FabricCreate;
    type Patch = FabricPatch;
    type Action = FabricAction;
    type ActionResult = FabricActionResult;
    type Error = InventoryError;

    const KIND: &'static str = "fabric";

    fn id(&self) -> &String { &self.id }

    fn from_create_params(id: String, params: FabricCreate) -> Result<Self, InventoryError> {
        check_name(&params.name)?;
        check_price(params.price_per_meter)?;
        if params.meters_in_stock.is_sign_negative() {
            return Err(InventoryError::InvalidQuantity("opening stock must not be negative".to_string()));
        }
        Ok(Self {
            id,
            name: params.name,
            color: params.color,
            price_per_meter: params.price_per_meter,
            meters_in_stock: params.meters_in_stock,
        })
    }

    fn on_update(&mut self, patch: FabricPatch) -> Result<(), InventoryError> {
        if let Some(name) = &patch.name {
            check_name(name)?;
        }
        if let Some(price) = patch.price_per_meter {
            check_price(price)?;
            self.price_per_meter = price;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: FabricAction) -> Result<FabricActionResult, InventoryError> {
        match action {
            FabricAction::CheckStock => Ok(FabricActionResult::MetersInStock(self.meters_in_stock)),
            FabricAction::Consume(meters) => {
                let meters = positive_meters(meters)?;
                if self.meters_in_stock < meters {
                    return Err(InventoryError::InsufficientFabric {
                        requested: meters,
                        available: self.meters_in_stock,
                    });
                }
                self.meters_in_stock -= meters;
                Ok(FabricActionResult::Consumed { remaining: self.meters_in_stock })
            }
            FabricAction::Restock(meters) => {
                let meters = positive_meters(meters)?;
                self.meters_in_stock = checked_add(self.meters_in_stock, meters)
                    .map_err(|e| InventoryError::InvalidQuantity(e.to_string()))?;
                Ok(FabricActionResult::Restocked { meters: self.meters_in_stock })
            }
        }
    }
}

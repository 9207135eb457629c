use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Fabric, FabricCreate, FabricPatch, Product, ProductCreate, ProductPatch};
use crate::inventory_actor::{
    FabricAction, FabricActionResult, InventoryError, ProductAction, ProductActionResult,
};

fn unexpected() -> InventoryError {
    InventoryError::ActorCommunicationError("Unexpected result".to_string())
}

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, InventoryError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, InventoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(InventoryError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: String, patch: ProductPatch) -> Result<Product, InventoryError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(InventoryError::from)
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: String) -> Result<u32, InventoryError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::CheckStock).await? {
            ProductActionResult::StockLevel(level) => Ok(level),
            _ => Err(unexpected()),
        }
    }

    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: String, quantity: u32) -> Result<u32, InventoryError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::Reserve(quantity)).await? {
            ProductActionResult::Reserved { remaining } => Ok(remaining),
            _ => Err(unexpected()),
        }
    }

    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: String, quantity: u32) -> Result<u32, InventoryError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::Release(quantity)).await? {
            ProductActionResult::Released { stock } => Ok(stock),
            _ => Err(unexpected()),
        }
    }

    #[instrument(skip(self))]
    pub async fn restock(&self, id: String, quantity: u32) -> Result<u32, InventoryError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::Restock(quantity)).await? {
            ProductActionResult::Restocked { stock } => Ok(stock),
            _ => Err(unexpected()),
        }
    }
}

/// Client for interacting with the Fabric actor.
#[derive(Clone)]
pub struct FabricClient {
    inner: ResourceClient<Fabric>,
}

impl_basic_client!(FabricClient, Fabric, InventoryError, fabric);

impl FabricClient {
    #[instrument(skip(self))]
    pub async fn create_fabric(&self, params: FabricCreate) -> Result<String, InventoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(InventoryError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_fabric(&self, id: String, patch: FabricPatch) -> Result<Fabric, InventoryError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(InventoryError::from)
    }

    #[instrument(skip(self))]
    pub async fn meters_in_stock(&self, id: String) -> Result<Decimal, InventoryError> {
        debug!("Sending request");
        match self.inner.perform_action(id, FabricAction::CheckStock).await? {
            FabricActionResult::MetersInStock(meters) => Ok(meters),
            _ => Err(unexpected()),
        }
    }

    #[instrument(skip(self))]
    pub async fn consume(&self, id: String, meters: Decimal) -> Result<Decimal, InventoryError> {
        debug!("Sending request");
        match self.inner.perform_action(id, FabricAction::Consume(meters)).await? {
            FabricActionResult::Consumed { remaining } => Ok(remaining),
            _ => Err(unexpected()),
        }
    }

    #[instrument(skip(self))]
    pub async fn restock(&self, id: String, meters: Decimal) -> Result<Decimal, InventoryError> {
        debug!("Sending request");
        match self.inner.perform_action(id, FabricAction::Restock(meters)).await? {
            FabricActionResult::Restocked { meters } => Ok(meters),
            _ => Err(unexpected()),
        }
    }
}

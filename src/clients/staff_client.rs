use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{SalesPerson, SalesPersonCreate, StaffPatch, Tailor, TailorCreate};
use crate::staff_actor::{
    SalesPersonAction, SalesPersonActionResult, StaffError, TailorAction, TailorActionResult,
};

/// Client for interacting with the SalesPerson actor.
#[derive(Clone)]
pub struct SalesPersonClient {
    inner: ResourceClient<SalesPerson>,
}

impl_basic_client!(SalesPersonClient, SalesPerson, StaffError, salesperson);

impl SalesPersonClient {
    #[instrument(skip(self))]
    pub async fn create_salesperson(&self, params: SalesPersonCreate) -> Result<String, StaffError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(StaffError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_salesperson(&self, id: String, patch: StaffPatch) -> Result<SalesPerson, StaffError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(StaffError::from)
    }

    #[instrument(skip(self))]
    pub async fn record_sale(&self, id: String, amount: Decimal) -> Result<SalesPerson, StaffError> {
        debug!("Sending request");
        match self.inner.perform_action(id, SalesPersonAction::RecordSale { amount }).await {
            Ok(SalesPersonActionResult::SaleRecorded(sp)) => Ok(sp),
            Ok(_) => Err(StaffError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn reverse_sale(&self, id: String, amount: Decimal) -> Result<SalesPerson, StaffError> {
        debug!("Sending request");
        match self.inner.perform_action(id, SalesPersonAction::ReverseSale { amount }).await {
            Ok(SalesPersonActionResult::SaleReversed(sp)) => Ok(sp),
            Ok(_) => Err(StaffError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

/// Client for interacting with the Tailor actor.
#[derive(Clone)]
pub struct TailorClient {
    inner: ResourceClient<Tailor>,
}

impl_basic_client!(TailorClient, Tailor, StaffError, tailor);

impl TailorClient {
    #[instrument(skip(self))]
    pub async fn create_tailor(&self, params: TailorCreate) -> Result<String, StaffError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(StaffError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_tailor(&self, id: String, patch: StaffPatch) -> Result<Tailor, StaffError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(StaffError::from)
    }

    #[instrument(skip(self))]
    pub async fn assign_order(&self, id: String) -> Result<Tailor, StaffError> {
        debug!("Sending request");
        match self.inner.perform_action(id, TailorAction::AssignOrder).await {
            Ok(TailorActionResult::Assigned(t)) => Ok(t),
            Ok(_) => Err(StaffError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn complete_order(&self, id: String) -> Result<Tailor, StaffError> {
        debug!("Sending request");
        match self.inner.perform_action(id, TailorAction::CompleteOrder).await {
            Ok(TailorActionResult::Completed(t)) => Ok(t),
            Ok(_) => Err(StaffError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn release_order(&self, id: String) -> Result<Tailor, StaffError> {
        debug!("Sending request");
        match self.inner.perform_action(id, TailorAction::ReleaseOrder).await {
            Ok(TailorActionResult::Released(t)) => Ok(t),
            Ok(_) => Err(StaffError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::customer_actor::{CustomerAction, CustomerActionResult, CustomerError};
use crate::domain::{Customer, CustomerCreate, CustomerPatch};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl_basic_client!(CustomerClient, Customer, CustomerError, customer);

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<String, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(CustomerError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_customer(&self, id: String, patch: CustomerPatch) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(CustomerError::from)
    }

    #[instrument(skip(self))]
    pub async fn record_order(&self, id: String, amount: Decimal) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        match self.inner.perform_action(id, CustomerAction::RecordOrder { amount }).await {
            Ok(CustomerActionResult::OrderRecorded(customer)) => Ok(customer),
            Ok(_) => Err(CustomerError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn reverse_order(&self, id: String, amount: Decimal) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        match self.inner.perform_action(id, CustomerAction::ReverseOrder { amount }).await {
            Ok(CustomerActionResult::OrderReversed(customer)) => Ok(customer),
            Ok(_) => Err(CustomerError::ActorCommunicationError("Unexpected result".to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

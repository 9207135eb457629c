//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to answer the
//! requests the client under test sends.

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};
use tokio::sync::mpsc;

/// Creates a mock client and a receiver standing in for the actor.
///
/// Requests sent through the client arrive on the receiver, where the test
/// inspects them and replies (success, failure or nothing at all).
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message must be a Create request.
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Response<T::Id, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message must be a Get request.
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be a List request.
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>, T::Error>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next message must be an Update request.
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, Response<T, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Next message must be a Delete request.
pub async fn expect_delete<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<(), T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message must be an Action request.
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult, T::Error>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::domain::{Customer, CustomerCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);

        let create_task = tokio::spawn(async move {
            client.create(CustomerCreate::new("Test", "0700 000 000")).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        responder.send(Ok("customer_1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("customer_1".to_string()));
    }

    #[tokio::test]
    async fn test_client_filters_mocked_listing() {
        let (inner, mut receiver) = create_mock_client::<Customer>(10);
        let client = crate::clients::CustomerClient::new(inner);

        let list_task = tokio::spawn(async move {
            client.list_customers(crate::domain::RecordFilter::query("AMINA")).await
        });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        let customer = |id: &str, name: &str| Customer {
            id: id.into(),
            name: name.into(),
            phone: "0700 111 222".into(),
            email: None,
            address: None,
            total_orders: 0,
            total_spent: rust_decimal::Decimal::ZERO,
            orders_on_record: 0,
        };
        responder
            .send(Ok(vec![customer("customer_1", "Amina Yusuf"), customer("customer_2", "Brian Otieno")]))
            .unwrap();

        let found = list_task.await.unwrap().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "customer_1");
    }

    #[tokio::test]
    async fn test_update_rejection_maps_to_record_error() {
        let (inner, mut receiver) = create_mock_client::<Customer>(10);
        let client = crate::clients::CustomerClient::new(inner);

        let update_task = tokio::spawn(async move {
            let patch = crate::domain::CustomerPatch { phone: Some("12".into()), ..Default::default() };
            client.update_customer("customer_1".into(), patch).await
        });

        let (id, patch, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, "customer_1");
        assert_eq!(patch.phone.as_deref(), Some("12"));
        let rejection = crate::customer_actor::CustomerError::ValidationError("phone too short".into());
        responder.send(Err(FrameworkError::Entity(rejection.clone()))).unwrap();

        assert_eq!(update_task.await.unwrap(), Err(rejection));
    }

    #[tokio::test]
    async fn test_mock_client_reports_dropped_responder() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);

        let get_task = tokio::spawn(async move { client.get("customer_1".to_string()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "customer_1");
        drop(responder);

        assert_eq!(get_task.await.unwrap(), Err(FrameworkError::ActorDropped));
    }
}

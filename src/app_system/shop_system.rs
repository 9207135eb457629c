use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, instrument};

use super::config::AppConfig;
use super::error::AppError;
use crate::actor_framework::{Entity, ResourceActor, ResourceClient};
use crate::clients::{
    CustomerClient, FabricClient, OrderClient, ProductClient, SalesPersonClient, TailorClient,
};
use crate::domain::{Customer, Fabric, Order, Product, SalesPerson, Tailor};

/// Returns an id generator producing `<prefix><counter>` ids, starting at 1.
fn counter_ids(format: impl Fn(u64) -> String + Send + Sync + 'static) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format(counter.fetch_add(1, Ordering::SeqCst))
}

fn spawn_actor<T>(
    buffer_size: usize,
    next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    handles: &mut Vec<tokio::task::JoinHandle<()>>,
) -> ResourceClient<T>
where
    T: Entity,
{
    let (actor, client) = ResourceActor::<T>::new(buffer_size, next_id);
    handles.push(tokio::spawn(actor.run()));
    client
}

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct ShopSystem {
    pub customer_client: CustomerClient,
    pub salesperson_client: SalesPersonClient,
    pub tailor_client: TailorClient,
    pub product_client: ProductClient,
    pub fabric_client: FabricClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Create and start every record actor.
    ///
    /// Sub-actors (customers, staff, inventory) start first; the order client
    /// is then wired with their clients.
    #[instrument(name = "shop_system", skip(config))]
    pub fn new(config: &AppConfig) -> Self {
        let buffer = config.channel_buffer;
        let mut handles = Vec::new();

        info!("Starting shop system");

        let customer_client = CustomerClient::new(spawn_actor::<Customer>(
            buffer,
            counter_ids(|n| format!("customer_{}", n)),
            &mut handles,
        ));
        let salesperson_client = SalesPersonClient::new(spawn_actor::<SalesPerson>(
            buffer,
            counter_ids(|n| format!("salesperson_{}", n)),
            &mut handles,
        ));
        let tailor_client = TailorClient::new(spawn_actor::<Tailor>(
            buffer,
            counter_ids(|n| format!("tailor_{}", n)),
            &mut handles,
        ));
        let product_client = ProductClient::new(spawn_actor::<Product>(
            buffer,
            counter_ids(|n| format!("product_{}", n)),
            &mut handles,
        ));
        let fabric_client = FabricClient::new(spawn_actor::<Fabric>(
            buffer,
            counter_ids(|n| format!("fabric_{}", n)),
            &mut handles,
        ));

        let prefix = config.invoice_prefix.clone();
        let order_inner = spawn_actor::<Order>(
            buffer,
            counter_ids(move |n| format!("{}-{:05}", prefix, n)),
            &mut handles,
        );
        let order_client = OrderClient::new(
            order_inner,
            customer_client.clone(),
            salesperson_client.clone(),
            tailor_client.clone(),
            product_client.clone(),
        );

        info!(actors = handles.len(), "Shop system started successfully");

        Self {
            customer_client,
            salesperson_client,
            tailor_client,
            product_client,
            fabric_client,
            order_client,
            handles,
        }
    }

    /// Drops every client, which closes the actor channels, then waits for the
    /// actors to drain.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), AppError> {
        info!("Shutting down shop system");

        // The order client holds clones of the others, so it goes first.
        drop(self.order_client);
        drop(self.customer_client);
        drop(self.salesperson_client);
        drop(self.tailor_client);
        drop(self.product_client);
        drop(self.fabric_client);

        let mut failure = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                failure.get_or_insert_with(|| AppError::TaskFailed(e.to_string()));
            }
        }

        match failure {
            Some(e) => Err(e),
            None => {
                info!("Shop system shutdown complete");
                Ok(())
            }
        }
    }
}

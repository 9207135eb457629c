use chrono::NaiveDate;
use tracing::{error, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::clients::{CustomerClient, ProductClient, SalesPersonClient, TailorClient};
use crate::domain::totals::total_amount;
use crate::domain::{
    DashboardSummary, NewOrder, Order, OrderCreate, OrderPatch, OrderStatus, OrderType, PaymentRequest,
    RecordFilter, TrackingView, Transaction,
};
use crate::order_actor::entity::{validate_items, validate_payment};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

fn unexpected() -> OrderError {
    OrderError::ActorCommunicationError("Unexpected result".to_string())
}

/// Client for interacting with the Order actor.
///
/// This client handles the cross-record workflows: it validates customers,
/// salespersons and stock before creating an order, and keeps aggregates and
/// stock in step when orders are cancelled or delivered.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    customer_client: CustomerClient,
    salesperson_client: SalesPersonClient,
    tailor_client: TailorClient,
    product_client: ProductClient,
}

impl OrderClient {
    pub fn new(
        inner: ResourceClient<Order>,
        customer_client: CustomerClient,
        salesperson_client: SalesPersonClient,
        tailor_client: TailorClient,
        product_client: ProductClient,
    ) -> Self {
        Self {
            inner,
            customer_client,
            salesperson_client,
            tailor_client,
            product_client,
        }
    }

    #[instrument(skip(self, new_order), fields(customer_id = %new_order.customer_id, items = new_order.items.len()))]
    pub async fn create_order(&self, new_order: NewOrder) -> Result<String, OrderError> {
        info!("Processing create_order request");

        // Step 1: Validate customer
        let customer = match self.customer_client.get_customer(new_order.customer_id.clone()).await {
            Ok(Some(customer)) => {
                info!(customer_name = %customer.name, "Customer validation successful");
                customer
            }
            Ok(None) => {
                error!("Customer not found");
                return Err(OrderError::InvalidCustomer(new_order.customer_id));
            }
            Err(e) => {
                error!(error = %e, "Customer validation failed");
                return Err(OrderError::InvalidCustomer(format!("Customer validation failed: {}", e)));
            }
        };

        // Step 2: Validate salesperson
        match self.salesperson_client.get_salesperson(new_order.salesperson_id.clone()).await {
            Ok(Some(sp)) => info!(salesperson_name = %sp.name, "Salesperson validation successful"),
            Ok(None) => {
                error!("Salesperson not found");
                return Err(OrderError::InvalidSalesPerson(new_order.salesperson_id));
            }
            Err(e) => {
                error!(error = %e, "Salesperson validation failed");
                return Err(OrderError::InvalidSalesPerson(format!("Salesperson validation failed: {}", e)));
            }
        }

        // Step 3: Validate items and the deposit before touching stock
        validate_items(&new_order.items)?;
        if let Some(payment) = &new_order.initial_payment {
            validate_payment(payment)?;
        }
        let total = total_amount(&new_order.items)?;

        // Step 4: Reserve stock, releasing earlier reservations on failure
        let mut reserved: Vec<(String, u32)> = Vec::new();
        for item in &new_order.items {
            let Some(product_id) = &item.product_id else { continue };
            match self.product_client.reserve_stock(product_id.clone(), item.quantity).await {
                Ok(remaining) => {
                    info!(product_id = %product_id, remaining, "Stock reserved");
                    reserved.push((product_id.clone(), item.quantity));
                }
                Err(e) => {
                    error!(product_id = %product_id, error = %e, "Stock reservation failed");
                    self.release_reserved(&reserved).await;
                    return Err(OrderError::InsufficientStock(format!("{}: {}", item.product_name, e)));
                }
            }
        }

        // Step 5: Create order in ResourceActor
        let params = OrderCreate {
            order_type: new_order.order_type,
            customer_id: customer.id.clone(),
            customer_name: customer.name.clone(),
            salesperson_id: new_order.salesperson_id.clone(),
            items: new_order.items,
            notes: new_order.notes,
            delivery_date: new_order.delivery_date,
        };
        let order_id = match self.inner.create(params).await {
            Ok(id) => id,
            Err(e) => {
                self.release_reserved(&reserved).await;
                return Err(e.into());
            }
        };
        info!(order_id = %order_id, total = %total, "Order created");

        // Step 6: Initial payment
        if let Some(payment) = new_order.initial_payment {
            if let Err(e) = self.add_payment(order_id.clone(), payment).await {
                error!(order_id = %order_id, error = %e, "Initial payment was not recorded");
                self.abandon_order(&order_id, &reserved).await;
                return Err(e);
            }
        }

        // Step 7: Aggregates
        if let Err(e) = self.customer_client.record_order(customer.id.clone(), total).await {
            warn!(error = %e, "Customer aggregates not updated");
        }
        if let Err(e) = self.salesperson_client.record_sale(new_order.salesperson_id, total).await {
            warn!(error = %e, "Salesperson aggregates not updated");
        }

        Ok(order_id)
    }

    /// Cancels and purges an order that could not be completed, then hands
    /// back its stock.
    async fn abandon_order(&self, order_id: &str, reserved: &[(String, u32)]) {
        if let Err(e) = self.inner.perform_action(order_id.to_string(), OrderAction::Cancel).await {
            error!(order_id = %order_id, error = %e, "Failed to cancel abandoned order");
        } else if let Err(e) = self.inner.delete(order_id.to_string()).await {
            error!(order_id = %order_id, error = %e, "Failed to purge abandoned order");
        }
        self.release_reserved(reserved).await;
    }

    async fn release_reserved(&self, reserved: &[(String, u32)]) {
        for (product_id, quantity) in reserved {
            if let Err(e) = self.product_client.release_stock(product_id.clone(), *quantity).await {
                error!(product_id = %product_id, error = %e, "Failed to release reserved stock");
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: String, patch: OrderPatch) -> Result<Order, OrderError> {
        self.inner.update(id, patch).await.map_err(OrderError::from)
    }

    /// Records a payment transaction against an order.
    #[instrument(skip(self), fields(amount = %payment.amount))]
    pub async fn add_payment(&self, id: String, payment: PaymentRequest) -> Result<Transaction, OrderError> {
        match self.inner.perform_action(id, OrderAction::AddPayment(payment)).await? {
            OrderActionResult::PaymentRecorded(transaction) => {
                info!(transaction_id = %transaction.id, "Payment recorded");
                Ok(transaction)
            }
            _ => Err(unexpected()),
        }
    }

    /// Moves an order one stage forward, provided it is still in `expected`.
    #[instrument(skip(self))]
    pub async fn advance_status(&self, id: String, expected: OrderStatus) -> Result<Order, OrderError> {
        let order = match self.inner.perform_action(id, OrderAction::Advance { expected }).await? {
            OrderActionResult::Advanced(order) => order,
            _ => return Err(unexpected()),
        };
        info!(status = %order.status, stage = order.stage(), "Order advanced");

        if order.status == OrderStatus::Delivered {
            if let Some(tailor_id) = &order.tailor_id {
                if let Err(e) = self.tailor_client.complete_order(tailor_id.clone()).await {
                    warn!(tailor_id = %tailor_id, error = %e, "Tailor workload not updated");
                }
            }
        }
        Ok(order)
    }

    /// Cancels an order and undoes its side effects: reserved stock goes back
    /// on the shelf, customer and salesperson aggregates are reversed and the
    /// tailor is released.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: String) -> Result<Order, OrderError> {
        let order = match self.inner.perform_action(id, OrderAction::Cancel).await? {
            OrderActionResult::Cancelled(order) => order,
            _ => return Err(unexpected()),
        };
        info!(order_id = %order.id, "Order cancelled");

        let reserved: Vec<(String, u32)> = order
            .items()
            .iter()
            .filter_map(|item| item.product_id.clone().map(|id| (id, item.quantity)))
            .collect();
        self.release_reserved(&reserved).await;

        let total = order.totals().total_amount;
        if let Err(e) = self.customer_client.reverse_order(order.customer_id.clone(), total).await {
            warn!(error = %e, "Customer aggregates not reversed");
        }
        if let Err(e) = self.salesperson_client.reverse_sale(order.salesperson_id.clone(), total).await {
            warn!(error = %e, "Salesperson aggregates not reversed");
        }
        if let Some(tailor_id) = &order.tailor_id {
            if let Err(e) = self.tailor_client.release_order(tailor_id.clone()).await {
                warn!(tailor_id = %tailor_id, error = %e, "Tailor not released");
            }
        }
        Ok(order)
    }

    /// Hands a stitching order to a tailor, releasing any previous one.
    ///
    /// The tailor is booked before the order changes, so a tailor that
    /// disappears in between leaves the order untouched.
    #[instrument(skip(self))]
    pub async fn assign_tailor(&self, order_id: String, tailor_id: String) -> Result<(), OrderError> {
        match self.tailor_client.get_tailor(tailor_id.clone()).await {
            Ok(Some(tailor)) => info!(tailor_name = %tailor.name, "Tailor validation successful"),
            Ok(None) => return Err(OrderError::InvalidTailor(tailor_id)),
            Err(e) => return Err(OrderError::InvalidTailor(format!("Tailor validation failed: {}", e))),
        }

        let order = self.require_order(order_id.clone()).await?;
        if order.tailor_id.as_deref() == Some(tailor_id.as_str()) {
            return Ok(());
        }

        self.tailor_client
            .assign_order(tailor_id.clone())
            .await
            .map_err(|e| OrderError::InvalidTailor(e.to_string()))?;

        let assigned = match self
            .inner
            .perform_action(order_id, OrderAction::AssignTailor(tailor_id.clone()))
            .await
        {
            Ok(OrderActionResult::TailorAssigned { previous }) => Ok(previous),
            Ok(_) => Err(unexpected()),
            Err(e) => Err(OrderError::from(e)),
        };
        let previous = match assigned {
            Ok(previous) => previous,
            Err(e) => {
                if let Err(release) = self.tailor_client.release_order(tailor_id.clone()).await {
                    error!(tailor_id = %tailor_id, error = %release, "Failed to undo tailor booking");
                }
                return Err(e);
            }
        };

        // Also covers a concurrent assignment of the same tailor: the second
        // booking is handed back.
        if let Some(previous) = previous {
            if let Err(e) = self.tailor_client.release_order(previous.clone()).await {
                warn!(tailor_id = %previous, error = %e, "Previous tailor not released");
            }
        }
        Ok(())
    }

    /// Payments on one order, filtered by id, payment type, amount or
    /// status (`COMPLETED`/`PENDING`).
    #[instrument(skip(self))]
    pub async fn list_payments(&self, order_id: String, filter: RecordFilter) -> Result<Vec<Transaction>, OrderError> {
        let order = self.require_order(order_id).await?;
        Ok(filter.retain(order.transactions().to_vec()))
    }

    /// Customer-facing lookup by invoice id.
    #[instrument(skip(self))]
    pub async fn track_order(&self, invoice_id: String) -> Result<TrackingView, OrderError> {
        let order = self.require_order(invoice_id).await?;
        Ok(TrackingView::from(&order))
    }

    #[instrument(skip(self))]
    pub async fn dashboard_summary(&self, today: NaiveDate) -> Result<DashboardSummary, OrderError> {
        let orders = self.inner.list().await?;
        Ok(DashboardSummary::from_orders(&orders, today))
    }

    /// Convenience listing of open stitching work, oldest first.
    #[instrument(skip(self))]
    pub async fn tailoring_queue(&self) -> Result<Vec<Order>, OrderError> {
        let orders = self.list_orders(RecordFilter::default()).await?;
        Ok(orders
            .into_iter()
            .filter(|o| o.order_type == OrderType::Stitching && !o.status.is_terminal())
            .collect())
    }
}

impl_client_methods!(OrderClient, Order, OrderError, order);

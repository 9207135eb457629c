mod actor_framework;
mod app_system;
mod clients;
mod customer_actor;
mod domain;
mod inventory_actor;
mod order_actor;
mod staff_actor;

#[cfg(test)]
mod mock_framework;
#[cfg(test)]
mod integration_tests;

use chrono::{Days, Utc};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, AppConfig, AppError, ShopSystem};
use crate::domain::{
    CustomerCreate, FabricCreate, LineItem, NewOrder, OrderType, PaymentRequest, PaymentType,
    ProductCreate, RecordFilter, SalesPersonCreate, TailorCreate,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    setup_tracing(&config.logging);

    info!(
        environment = config.environment.as_str(),
        currency = %config.currency,
        "Starting tailor desk"
    );

    let system = ShopSystem::new(&config);

    // Seed the records an order needs
    let span = tracing::info_span!("seed_records");
    let (customer_id, salesperson_id, tailor_id, product_id) = async {
        let customer_id = system
            .customer_client
            .create_customer(CustomerCreate::new("Amina Yusuf", "0700 111 222"))
            .await?;
        let salesperson_id = system
            .salesperson_client
            .create_salesperson(SalesPersonCreate {
                name: "Grace Wanjiru".into(),
                phone: "0711 222 333".into(),
                email: Some("grace@example.com".into()),
            })
            .await?;
        let tailor_id = system
            .tailor_client
            .create_tailor(TailorCreate {
                name: "Joseph Kamau".into(),
                phone: "0733 444 555".into(),
                specialty: "Suits".into(),
            })
            .await?;
        let product_id = system
            .product_client
            .create_product(ProductCreate {
                name: "Silk tie".into(),
                section: "Accessories".into(),
                price: Decimal::new(1500, 2),
                stock: 12,
            })
            .await?;
        let fabric_id = system
            .fabric_client
            .create_fabric(FabricCreate {
                name: "Wool blend".into(),
                color: "Navy".into(),
                price_per_meter: Decimal::new(2400, 2),
                meters_in_stock: Decimal::new(300, 1),
            })
            .await?;
        let remaining = system.fabric_client.consume(fabric_id, Decimal::new(35, 1)).await?;
        info!(meters = %remaining, "Fabric cut for the suit");
        Ok::<_, AppError>((customer_id, salesperson_id, tailor_id, product_id))
    }
    .instrument(span)
    .await?;

    info!(customer_id = %customer_id, salesperson_id = %salesperson_id, "Records created successfully");

    let today = Utc::now().date_naive();
    let order = NewOrder {
        order_type: OrderType::Stitching,
        customer_id,
        salesperson_id,
        items: vec![
            LineItem::new("Two-piece suit", "Menswear", Decimal::new(24000, 2), 1),
            LineItem::new("Silk tie", "Accessories", Decimal::new(1500, 2), 2).from_stock(product_id),
        ],
        initial_payment: Some(PaymentRequest::new(PaymentType::Cash, Decimal::new(10000, 2))),
        notes: Some("Slim fit, two fittings".into()),
        delivery_date: today.checked_add_days(Days::new(14)),
    };

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        info!("Processing order through shop system");
        let order_id = system.order_client.create_order(order).await?;
        system.order_client.assign_tailor(order_id.clone(), tailor_id).await?;

        let mut status = system.order_client.require_order(order_id.clone()).await?.status;
        while !status.is_terminal() {
            status = system.order_client.advance_status(order_id.clone(), status).await?.status;
        }

        system
            .order_client
            .add_payment(
                order_id.clone(),
                PaymentRequest::new(PaymentType::Visa, Decimal::new(17000, 2)).with_reference("POS-7781"),
            )
            .await?;
        Ok::<_, AppError>(order_id)
    }
    .instrument(span)
    .await;

    match &order_result {
        Ok(order_id) => {
            let view = system.order_client.track_order(order_id.clone()).await?;
            info!(
                invoice_id = %view.invoice_id,
                status = %view.status,
                progress = view.progress_percent,
                pending = %view.totals.pending_amount,
                "Order processed successfully"
            );
        }
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    let summary = system.order_client.dashboard_summary(today).await?;
    info!(
        total_orders = summary.total_orders,
        total_sales = %summary.total_sales,
        collected = %summary.collected,
        outstanding = %summary.outstanding,
        "Dashboard summary"
    );

    let matches = system.customer_client.list_customers(RecordFilter::query("amina")).await?;
    info!(matches = matches.len(), "Customer search");

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

//! Customer-facing view of a single order.

use chrono::NaiveDate;
use serde::Serialize;

use super::order::{progress_percent, Order, OrderStatus, OrderType, StatusChange};
use super::totals::OrderTotals;

/// What the public tracking page shows. Staff references and payment details
/// are left out.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingView {
    pub invoice_id: String,
    pub customer_name: String,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub stage: u8,
    pub progress_percent: u8,
    pub delivery_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub totals: OrderTotals,
    /// Nothing left to pay.
    pub settled: bool,
    pub history: Vec<StatusChange>,
}

impl From<&Order> for TrackingView {
    fn from(order: &Order) -> Self {
        let stage = order.stage();
        Self {
            invoice_id: order.id.clone(),
            customer_name: order.customer_name.clone(),
            order_type: order.order_type,
            status: order.status,
            stage,
            progress_percent: progress_percent(stage),
            delivery_date: order.delivery_date,
            totals: order.totals(),
            settled: order.totals().is_settled(),
            history: order.status_history().to_vec(),
        }
    }
}

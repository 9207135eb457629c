//! Aggregate figures for the dashboard landing page.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::order::{Order, OrderStatus};
use super::transaction::PaymentType;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_orders: usize,
    /// Keyed by status name; every status is present.
    pub orders_by_status: BTreeMap<&'static str, usize>,
    /// Order value of all non-cancelled orders.
    pub total_sales: Decimal,
    pub collected: Decimal,
    pub outstanding: Decimal,
    pub collected_by_payment_type: BTreeMap<&'static str, Decimal>,
    pub overdue_orders: Vec<String>,
}

impl DashboardSummary {
    pub fn from_orders(orders: &[Order], today: NaiveDate) -> Self {
        let mut summary = Self {
            total_orders: orders.len(),
            orders_by_status: OrderStatus::ALL.iter().map(|s| (s.as_str(), 0)).collect(),
            collected_by_payment_type: PaymentType::ALL
                .iter()
                .map(|p| (p.as_str(), Decimal::ZERO))
                .collect(),
            ..Self::default()
        };

        for order in orders {
            *summary.orders_by_status.entry(order.status.as_str()).or_default() += 1;

            // Payments taken on cancelled orders still count as collected.
            for transaction in order.transactions() {
                summary.collected += transaction.amount;
                *summary
                    .collected_by_payment_type
                    .entry(transaction.payment_type.as_str())
                    .or_default() += transaction.amount;
            }

            if order.status == OrderStatus::Cancelled {
                continue;
            }
            let totals = order.totals();
            summary.total_sales += totals.total_amount;
            summary.outstanding += totals.pending_amount;
            if order.is_overdue(today) {
                summary.overdue_orders.push(order.id.clone());
            }
        }

        summary
    }
}

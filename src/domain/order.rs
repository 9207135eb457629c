//! Orders, line items and the tailoring lifecycle.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::{checked_mul, AmountOverflow};
use super::search::Searchable;
use super::totals::OrderTotals;
use super::transaction::{PaymentRequest, Transaction};

/// Stage index of the last lifecycle status.
pub const FINAL_STAGE: u8 = 5;

/// Order status. The lifecycle is `confirmed → processing → tailoring → ready
/// → delivered`; `cancelled` is absorbing and sits outside the stage scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
    Processing,
    Tailoring,
    Ready,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Tailoring,
        OrderStatus::Ready,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Tailoring => "tailoring",
            OrderStatus::Ready => "ready",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Exact, lowercase match only.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Ordinal position within the lifecycle, 1..=5; `cancelled` is 0.
    pub fn stage(&self) -> u8 {
        match self {
            OrderStatus::Confirmed => 1,
            OrderStatus::Processing => 2,
            OrderStatus::Tailoring => 3,
            OrderStatus::Ready => 4,
            OrderStatus::Delivered => 5,
            OrderStatus::Cancelled => 0,
        }
    }

    /// The status an order of `order_type` moves to next, if any.
    pub fn next(&self, order_type: OrderType) -> Option<OrderStatus> {
        match (self, order_type) {
            (OrderStatus::Confirmed, _) => Some(OrderStatus::Processing),
            (OrderStatus::Processing, OrderType::Stitching) => Some(OrderStatus::Tailoring),
            (OrderStatus::Processing, OrderType::ReadyMade) => Some(OrderStatus::Ready),
            (OrderStatus::Tailoring, _) => Some(OrderStatus::Ready),
            (OrderStatus::Ready, _) => Some(OrderStatus::Delivered),
            (OrderStatus::Delivered, _) | (OrderStatus::Cancelled, _) => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    pub fn can_cancel(&self) -> bool {
        !self.is_terminal()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a raw status string to its stage: `confirmed`=1 .. `delivered`=5,
/// anything else 0.
pub fn stage_of(status: &str) -> u8 {
    OrderStatus::parse(status).map(|s| s.stage()).unwrap_or(0)
}

/// Progress bar fill for a stage, `stage / 5 * 100`.
pub fn progress_percent(stage: u8) -> u8 {
    (u32::from(stage.min(FINAL_STAGE)) * 100 / u32::from(FINAL_STAGE)) as u8
}

/// Whether the order is made to measure or sold off the shelf. Ready-made
/// orders skip the tailoring stage and cannot have a tailor assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Stitching,
    ReadyMade,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Stitching => "stitching",
            OrderType::ReadyMade => "ready_made",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_name: String,
    pub section: String,
    pub product_price: Decimal,
    pub quantity: u32,
    /// Stocked product this line draws from, if any.
    #[serde(default)]
    pub product_id: Option<String>,
}

impl LineItem {
    pub fn new(
        product_name: impl Into<String>,
        section: impl Into<String>,
        product_price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            section: section.into(),
            product_price,
            quantity,
            product_id: None,
        }
    }

    pub fn from_stock(mut self, product_id: impl Into<String>) -> Self {
        self.product_id = Some(product_id.into());
        self
    }

    pub fn line_total(&self) -> Result<Decimal, AmountOverflow> {
        checked_mul(self.product_price, Decimal::from(self.quantity))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusChange {
    pub status: OrderStatus,
    pub at: DateTime<Utc>,
}

/// A customer order. Totals are derived from `items` and `transactions` and
/// only change through methods that refresh them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub customer_id: String,
    pub customer_name: String,
    pub salesperson_id: String,
    pub tailor_id: Option<String>,
    pub notes: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub(crate) items: Vec<LineItem>,
    pub(crate) transactions: Vec<Transaction>,
    #[serde(flatten)]
    pub(crate) totals: OrderTotals,
    pub(crate) status_history: Vec<StatusChange>,
}

impl Order {
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn totals(&self) -> OrderTotals {
        self.totals
    }

    pub fn status_history(&self) -> &[StatusChange] {
        &self.status_history
    }

    pub fn stage(&self) -> u8 {
        self.status.stage()
    }

    /// Recomputes the derived amounts. Called after any change to items or
    /// transactions.
    pub(crate) fn refresh_totals(&mut self) -> Result<(), AmountOverflow> {
        self.totals = OrderTotals::compute(&self.items, &self.transactions)?;
        Ok(())
    }

    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.status_history.push(StatusChange { status, at: Utc::now() });
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.status.is_terminal() && self.delivery_date.is_some_and(|due| due < today)
    }
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.customer_name.clone(),
            self.status.as_str().to_string(),
            self.order_type.as_str().to_string(),
            self.totals.total_amount.to_string(),
        ]
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

/// Caller-facing request to open a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub order_type: OrderType,
    pub customer_id: String,
    pub salesperson_id: String,
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub initial_payment: Option<PaymentRequest>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
}

/// Params handed to the order actor once references have been validated.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub order_type: OrderType,
    pub customer_id: String,
    pub customer_name: String,
    pub salesperson_id: String,
    pub items: Vec<LineItem>,
    pub notes: Option<String>,
    pub delivery_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    pub notes: Option<String>,
    pub delivery_date: Option<NaiveDate>,
}

use chrono::Utc;
use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::totals::total_amount;
use crate::domain::{
    LineItem, Order, OrderCreate, OrderPatch, OrderStatus, OrderTotals, OrderType, PaymentRequest,
    StatusChange, Transaction,
};
use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;

/// Checks the line items of a new order.
pub fn validate_items(items: &[LineItem]) -> Result<(), OrderError> {
    if items.is_empty() {
        return Err(OrderError::ValidationError("order has no items".to_string()));
    }
    for item in items {
        if item.quantity == 0 {
            return Err(OrderError::ValidationError(format!(
                "quantity of {} must be positive",
                item.product_name
            )));
        }
        if item.product_price.is_sign_negative() {
            return Err(OrderError::ValidationError(format!(
                "price of {} must not be negative",
                item.product_name
            )));
        }
    }
    total_amount(items)?;
    Ok(())
}

/// Checks a payment before it is recorded.
pub fn validate_payment(payment: &PaymentRequest) -> Result<(), OrderError> {
    if payment.amount <= Decimal::ZERO {
        return Err(OrderError::ValidationError(format!(
            "payment amount must be positive, got {}",
            payment.amount
        )));
    }
    Ok(())
}

impl Order {
    fn advance(&mut self, expected: OrderStatus) -> Result<Order, OrderError> {
        if self.status != expected {
            return Err(OrderError::StaleStatus { expected, actual: self.status });
        }
        let next = self
            .status
            .next(self.order_type)
            .ok_or(OrderError::InvalidTransition { from: self.status, action: "advance" })?;
        self.set_status(next);
        Ok(self.clone())
    }

    fn cancel(&mut self) -> Result<Order, OrderError> {
        if !self.status.can_cancel() {
            return Err(OrderError::InvalidTransition { from: self.status, action: "cancel" });
        }
        self.set_status(OrderStatus::Cancelled);
        Ok(self.clone())
    }

    fn add_payment(&mut self, payment: PaymentRequest) -> Result<Transaction, OrderError> {
        if self.status == OrderStatus::Cancelled {
            return Err(OrderError::InvalidTransition { from: self.status, action: "pay for" });
        }
        validate_payment(&payment)?;
        let transaction = Transaction {
            id: format!("{}-TXN-{}", self.id, self.transactions.len() + 1),
            payment_type: payment.payment_type,
            amount: payment.amount,
            status: payment.status,
            date: Utc::now(),
            reference: payment.reference,
        };
        self.transactions.push(transaction.clone());
        if let Err(e) = self.refresh_totals() {
            self.transactions.pop();
            return Err(e.into());
        }
        Ok(transaction)
    }

    fn assign_tailor(&mut self, tailor_id: String) -> Result<Option<String>, OrderError> {
        if self.order_type != OrderType::Stitching {
            return Err(OrderError::ValidationError(
                "tailors can only be assigned to stitching orders".to_string(),
            ));
        }
        if self.status.is_terminal() {
            return Err(OrderError::InvalidTransition { from: self.status, action: "assign a tailor to" });
        }
        Ok(self.tailor_id.replace(tailor_id))
    }
}

impl Entity for Order {
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = OrderPatch;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Error = OrderError;

    const KIND: &'static str = "order";

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from validated creation parameters.
    ///
    /// The order starts `confirmed`, with no payments and its totals derived
    /// from the items.
    fn from_create_params(id: String, params: OrderCreate) -> Result<Self, OrderError> {
        validate_items(&params.items)?;
        let now = Utc::now();
        let mut order = Self {
            id,
            order_type: params.order_type,
            status: OrderStatus::Confirmed,
            customer_id: params.customer_id,
            customer_name: params.customer_name,
            salesperson_id: params.salesperson_id,
            tailor_id: None,
            notes: params.notes,
            delivery_date: params.delivery_date,
            created_at: now,
            items: params.items,
            transactions: Vec::new(),
            totals: OrderTotals::default(),
            status_history: vec![StatusChange { status: OrderStatus::Confirmed, at: now }],
        };
        order.refresh_totals()?;
        Ok(order)
    }

    /// Updates notes and the promised delivery date.
    ///
    /// The delivery date of a delivered or cancelled order is frozen.
    fn on_update(&mut self, patch: OrderPatch) -> Result<(), OrderError> {
        if patch.delivery_date.is_some() && self.status.is_terminal() {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                action: "reschedule",
            });
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(date) = patch.delivery_date {
            self.delivery_date = Some(date);
        }
        Ok(())
    }

    /// Only cancelled orders may be purged.
    fn on_delete(&self) -> Result<(), OrderError> {
        if self.status == OrderStatus::Cancelled {
            Ok(())
        } else {
            Err(OrderError::InvalidTransition { from: self.status, action: "delete" })
        }
    }

    fn handle_action(&mut self, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::Advance { expected } => self.advance(expected).map(OrderActionResult::Advanced),
            OrderAction::Cancel => self.cancel().map(OrderActionResult::Cancelled),
            OrderAction::AddPayment(payment) => {
                self.add_payment(payment).map(OrderActionResult::PaymentRecorded)
            }
            OrderAction::AssignTailor(tailor_id) => self
                .assign_tailor(tailor_id)
                .map(|previous| OrderActionResult::TailorAssigned { previous }),
        }
    }
}

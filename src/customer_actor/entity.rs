use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::validation::{validate_email, validate_name, validate_phone};
use crate::domain::{money, Customer, CustomerCreate, CustomerPatch};
use super::actions::{CustomerAction, CustomerActionResult};
use super::error::CustomerError;

fn check(result: Result<(), String>) -> Result<(), CustomerError> {
    result.map_err(CustomerError::ValidationError)
}

impl Entity for Customer {
    type Id = String;
    type CreateParams = CustomerCreate;
    type Patch = CustomerPatch;
    type Action = CustomerAction;
    type ActionResult = CustomerActionResult;
    type Error = CustomerError;

    const KIND: &'static str = "customer";

    fn id(&self) -> &String { &self.id }

    /// Registers a customer with zeroed aggregates.
    fn from_create_params(id: String, params: CustomerCreate) -> Result<Self, CustomerError> {
        check(validate_name(&params.name))?;
        check(validate_phone(&params.phone))?;
        if let Some(email) = &params.email {
            check(validate_email(email))?;
        }
        Ok(Self {
            id,
            name: params.name.trim().to_string(),
            phone: params.phone.trim().to_string(),
            email: params.email,
            address: params.address,
            total_orders: 0,
            total_spent: Decimal::ZERO,
            orders_on_record: 0,
        })
    }

    /// Updates contact details. Aggregates are not patchable.
    ///
    /// The patch is checked as a whole before anything is applied.
    fn on_update(&mut self, patch: CustomerPatch) -> Result<(), CustomerError> {
        if let Some(name) = &patch.name {
            check(validate_name(name))?;
        }
        if let Some(phone) = &patch.phone {
            check(validate_phone(phone))?;
        }
        if let Some(email) = &patch.email {
            check(validate_email(email))?;
        }
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(phone) = patch.phone {
            self.phone = phone.trim().to_string();
        }
        if patch.email.is_some() {
            self.email = patch.email;
        }
        if patch.address.is_some() {
            self.address = patch.address;
        }
        Ok(())
    }

    /// Customers with order history are kept for the records, cancelled
    /// orders included.
    fn on_delete(&self) -> Result<(), CustomerError> {
        if self.orders_on_record > 0 {
            Err(CustomerError::HasOrders(self.orders_on_record))
        } else {
            Ok(())
        }
    }

    fn handle_action(&mut self, action: CustomerAction) -> Result<CustomerActionResult, CustomerError> {
        match action {
            CustomerAction::RecordOrder { amount } => {
                self.total_spent = money::checked_add(self.total_spent, amount)
                    .map_err(|e| CustomerError::ValidationError(e.to_string()))?;
                self.total_orders += 1;
                self.orders_on_record += 1;
                Ok(CustomerActionResult::OrderRecorded(self.clone()))
            }
            CustomerAction::ReverseOrder { amount } => {
                self.total_orders = self.total_orders.saturating_sub(1);
                self.total_spent = money::saturating_sub(self.total_spent, amount);
                Ok(CustomerActionResult::OrderReversed(self.clone()))
            }
        }
    }
}

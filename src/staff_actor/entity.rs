use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::validation::{validate_email, validate_name, validate_phone};
use crate::domain::{money, SalesPerson, SalesPersonCreate, StaffPatch, Tailor, TailorCreate};
use super::actions::{SalesPersonAction, SalesPersonActionResult, TailorAction, TailorActionResult};
use super::error::StaffError;

fn check(result: Result<(), String>) -> Result<(), StaffError> {
    result.map_err(StaffError::ValidationError)
}

fn check_patch(patch: &StaffPatch) -> Result<(), StaffError> {
    if let Some(name) = &patch.name {
        check(validate_name(name))?;
    }
    if let Some(phone) = &patch.phone {
        check(validate_phone(phone))?;
    }
    if let Some(email) = &patch.email {
        check(validate_email(email))?;
    }
    Ok(())
}

impl Entity for SalesPerson {
    type Id = String;
    type CreateParams = SalesPersonCreate;
    type Patch = StaffPatch;
    type Action = SalesPersonAction;
    type ActionResult = SalesPersonActionResult;
    type Error = StaffError;

    const KIND: &'static str = "salesperson";

    fn id(&self) -> &String { &self.id }

    fn from_create_params(id: String, params: SalesPersonCreate) -> Result<Self, StaffError> {
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
            total_orders: 0,
            total_sales_amount: Decimal::ZERO,
            orders_on_record: 0,
        })
    }

    /// `specialty` is ignored for salespersons.
    fn on_update(&mut self, patch: StaffPatch) -> Result<(), StaffError> {
        check_patch(&patch)?;
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(phone) = patch.phone {
            self.phone = phone.trim().to_string();
        }
        if patch.email.is_some() {
            self.email = patch.email;
        }
        Ok(())
    }

    /// Orders keep a reference to the salesperson who took them.
    fn on_delete(&self) -> Result<(), StaffError> {
        if self.orders_on_record > 0 {
            Err(StaffError::HasOrders(self.orders_on_record))
        } else {
            Ok(())
        }
    }

    fn handle_action(&mut self, action: SalesPersonAction) -> Result<SalesPersonActionResult, StaffError> {
        match action {
            SalesPersonAction::RecordSale { amount } => {
                self.total_sales_amount = money::checked_add(self.total_sales_amount, amount)
                    .map_err(|e| StaffError::ValidationError(e.to_string()))?;
                self.total_orders += 1;
                self.orders_on_record += 1;
                Ok(SalesPersonActionResult::SaleRecorded(self.clone()))
            }
            SalesPersonAction::ReverseSale { amount } => {
                self.total_orders = self.total_orders.saturating_sub(1);
                self.total_sales_amount = money::saturating_sub(self.total_sales_amount, amount);
                Ok(SalesPersonActionResult::SaleReversed(self.clone()))
            }
        }
    }
}

impl Entity for Tailor {
    type Id = String;
    type CreateParams = TailorCreate;
    type Patch = StaffPatch;
    type Action = TailorAction;
    type ActionResult = TailorActionResult;
    type Error = StaffError;

    const KIND: &'static str = "tailor";

    fn id(&self) -> &String { &self.id }

    fn from_create_params(id: String, params: TailorCreate) -> Result<Self, StaffError> {
        check(validate_name(&params.name))?;
        check(validate_phone(&params.phone))?;
        Ok(Self {
            id,
            name: params.name.trim().to_string(),
            phone: params.phone.trim().to_string(),
            specialty: params.specialty,
            active_orders: 0,
            completed_orders: 0,
        })
    }

    /// `email` is ignored for tailors.
    fn on_update(&mut self, patch: StaffPatch) -> Result<(), StaffError> {
        check_patch(&patch)?;
        if let Some(name) = patch.name {
            self.name = name.trim().to_string();
        }
        if let Some(phone) = patch.phone {
            self.phone = phone.trim().to_string();
        }
        if let Some(specialty) = patch.specialty {
            self.specialty = specialty;
        }
        Ok(())
    }

    fn on_delete(&self) -> Result<(), StaffError> {
        if self.active_orders > 0 {
            Err(StaffError::HasActiveOrders(self.active_orders))
        } else {
            Ok(())
        }
    }

    fn handle_action(&mut self, action: TailorAction) -> Result<TailorActionResult, StaffError> {
        match action {
            TailorAction::AssignOrder => {
                self.active_orders += 1;
                Ok(TailorActionResult::Assigned(self.clone()))
            }
            TailorAction::CompleteOrder => {
                self.active_orders = self.active_orders.checked_sub(1).ok_or(StaffError::NoActiveOrders)?;
                self.completed_orders += 1;
                Ok(TailorActionResult::Completed(self.clone()))
            }
            TailorAction::ReleaseOrder => {
                self.active_orders = self.active_orders.checked_sub(1).ok_or(StaffError::NoActiveOrders)?;
                Ok(TailorActionResult::Released(self.clone()))
            }
        }
    }
}

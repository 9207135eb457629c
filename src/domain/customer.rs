use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::search::Searchable;

/// A shop customer. `total_orders` and `total_spent` are maintained by the
/// order workflow and cannot be patched directly. `orders_on_record` counts
/// every order ever opened, cancelled ones included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub total_orders: u32,
    pub total_spent: Decimal,
    pub orders_on_record: u32,
}

/// Payload for registering a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl CustomerCreate {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: None,
            address: None,
        }
    }
}

/// Contact details that may be edited after registration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.phone.clone(),
            self.email.clone().unwrap_or_default(),
        ]
    }
}

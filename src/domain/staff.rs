//! Shop staff: salespersons who take orders and tailors who stitch them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::search::Searchable;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPerson {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub total_orders: u32,
    pub total_sales_amount: Decimal,
    /// Every order ever taken, cancelled ones included.
    pub orders_on_record: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesPersonCreate {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tailor {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub specialty: String,
    pub active_orders: u32,
    pub completed_orders: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailorCreate {
    pub name: String,
    pub phone: String,
    pub specialty: String,
}

/// Contact details shared by both staff kinds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub specialty: Option<String>,
}

impl Searchable for SalesPerson {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.phone.clone(),
            self.email.clone().unwrap_or_default(),
        ]
    }
}

impl Searchable for Tailor {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.phone.clone(),
            self.specialty.clone(),
        ]
    }
}

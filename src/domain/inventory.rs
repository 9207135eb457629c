use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::search::Searchable;

/// A stocked, ready-made product sold by the unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub section: String,
    pub price: Decimal,
    pub stock: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub section: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub name: Option<String>,
    pub section: Option<String>,
    pub price: Option<Decimal>,
}

/// Fabric sold or consumed by the meter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fabric {
    pub id: String,
    pub name: String,
    pub color: String,
    pub price_per_meter: Decimal,
    pub meters_in_stock: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricCreate {
    pub name: String,
    pub color: String,
    pub price_per_meter: Decimal,
    #[serde(default)]
    pub meters_in_stock: Decimal,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FabricPatch {
    pub name: Option<String>,
    pub color: Option<String>,
    pub price_per_meter: Option<Decimal>,
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone(), self.section.clone()]
    }
}

impl Searchable for Fabric {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone(), self.color.clone()]
    }
}

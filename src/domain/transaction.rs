use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::search::Searchable;

/// How a payment was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentType {
    Cash,
    Visa,
    BankTransfer,
}

impl PaymentType {
    pub const ALL: [PaymentType; 3] = [PaymentType::Cash, PaymentType::Visa, PaymentType::BankTransfer];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Cash => "CASH",
            PaymentType::Visa => "VISA",
            PaymentType::BankTransfer => "BANK_TRANSFER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Completed,
    Pending,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Pending => "PENDING",
        }
    }
}

/// A payment recorded against exactly one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub payment_type: PaymentType,
    pub amount: Decimal,
    pub status: TransactionStatus,
    pub date: DateTime<Utc>,
    pub reference: Option<String>,
}

/// Payment details supplied by the caller; the order assigns id and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub payment_type: PaymentType,
    pub amount: Decimal,
    #[serde(default = "default_payment_status")]
    pub status: TransactionStatus,
    #[serde(default)]
    pub reference: Option<String>,
}

fn default_payment_status() -> TransactionStatus {
    TransactionStatus::Completed
}

impl PaymentRequest {
    pub fn new(payment_type: PaymentType, amount: Decimal) -> Self {
        Self {
            payment_type,
            amount,
            status: TransactionStatus::Completed,
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

impl Searchable for Transaction {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.payment_type.as_str().to_string(),
            self.amount.to_string(),
            self.status.as_str().to_string(),
        ]
    }

    fn status_key(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

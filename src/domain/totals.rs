//! Single place where order amounts are derived from items and payments.

use rust_decimal::Decimal;
use serde::Serialize;

use super::money::{checked_add, checked_sum, round_money, saturating_sub, AmountOverflow};
use super::order::LineItem;
use super::transaction::Transaction;

/// Derived amounts for one order.
///
/// `pending_amount` never goes negative; any overpayment is carried in
/// `overpaid_amount` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OrderTotals {
    #[serde(rename = "totalAmount")]
    pub total_amount: Decimal,
    #[serde(rename = "PaidAmount")]
    pub paid_amount: Decimal,
    #[serde(rename = "PendingAmount")]
    pub pending_amount: Decimal,
    #[serde(rename = "overpaidAmount")]
    pub overpaid_amount: Decimal,
}

impl OrderTotals {
    pub fn compute(items: &[LineItem], transactions: &[Transaction]) -> Result<Self, AmountOverflow> {
        let total_amount = total_amount(items)?;
        let paid_amount = paid_amount(transactions)?;
        Ok(Self {
            total_amount,
            paid_amount,
            pending_amount: saturating_sub(total_amount, paid_amount),
            overpaid_amount: saturating_sub(paid_amount, total_amount),
        })
    }

    pub fn is_settled(&self) -> bool {
        self.pending_amount.is_zero()
    }
}

/// Σ(price × quantity) over all line items.
pub fn total_amount(items: &[LineItem]) -> Result<Decimal, AmountOverflow> {
    let total = items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| checked_add(acc, item.line_total()?))?;
    Ok(round_money(total))
}

/// Σ amount over all transactions, whatever their status.
pub fn paid_amount(transactions: &[Transaction]) -> Result<Decimal, AmountOverflow> {
    Ok(round_money(checked_sum(transactions.iter().map(|t| t.amount))?))
}

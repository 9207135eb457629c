//! Monetary helpers. All amounts are `Decimal`, never floats.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Number of decimal places kept on derived amounts.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a derived amount to cents, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// An amount left the range `Decimal` can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("amount out of range")]
pub struct AmountOverflow;

pub fn checked_add(a: Decimal, b: Decimal) -> Result<Decimal, AmountOverflow> {
    a.checked_add(b).ok_or(AmountOverflow)
}

pub fn checked_mul(a: Decimal, b: Decimal) -> Result<Decimal, AmountOverflow> {
    a.checked_mul(b).ok_or(AmountOverflow)
}

/// Σ amounts, failing instead of panicking on overflow.
pub fn checked_sum(amounts: impl IntoIterator<Item = Decimal>) -> Result<Decimal, AmountOverflow> {
    amounts.into_iter().try_fold(Decimal::ZERO, checked_add)
}

/// `a - b`, floored at zero. Both sides are non-negative amounts.
pub fn saturating_sub(a: Decimal, b: Decimal) -> Decimal {
    (a - b).max(Decimal::ZERO)
}

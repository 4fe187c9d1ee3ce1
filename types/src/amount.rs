//! Transfer amounts and balances.
//!
//! Amounts are whole units stored as `u128` to avoid floating-point drift
//! during settlement. Fractional amounts are not expressible; the smallest
//! transferable value is one unit.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A balance or transfer amount in whole units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Amount(u128);

impl Amount {
    pub const ZERO: Self = Self(0);

    pub fn new(units: u128) -> Self {
        Self(units)
    }

    pub fn units(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Decimal rendering used as hash input.
    pub fn to_decimal_string(&self) -> String {
        self.0.to_string()
    }
}

impl From<u128> for Amount {
    fn from(units: u128) -> Self {
        Self(units)
    }
}

/// Saturates at `u128::MAX`. Settlement uses [`Amount::checked_add`].
impl Add for Amount {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

/// Saturating sum, used for reporting totals.
impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, a| acc + a)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sum_saturates_instead_of_overflowing() {
        let total: Amount = [Amount::new(u128::MAX), Amount::new(u128::MAX), Amount::new(7)]
            .into_iter()
            .sum();
        assert_eq!(total, Amount::new(u128::MAX));
    }

    #[test]
    fn add_saturates_at_max() {
        assert_eq!(Amount::new(u128::MAX) + Amount::new(1), Amount::new(u128::MAX));
        assert_eq!(Amount::new(40) + Amount::new(2), Amount::new(42));
    }

    #[test]
    fn checked_add_still_reports_overflow() {
        assert_eq!(Amount::new(u128::MAX).checked_add(Amount::new(1)), None);
    }
}

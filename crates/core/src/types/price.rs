//! Whole-rupee price representation.
//!
//! Catalog prices are authored as whole-rupee integers, so the money path
//! involves no decimal arithmetic and no rounding. Display output uses
//! Indian-system digit grouping ("₹1,00,000", not "₹100,000") to match how
//! the storefront quotes prices to customers.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use serde::{Deserialize, Serialize};

/// A price in whole rupees.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    /// Zero rupees.
    pub const ZERO: Self = Self(0);

    /// Create a price from a whole-rupee amount.
    #[must_use]
    pub const fn new(rupees: i64) -> Self {
        Self(rupees)
    }

    /// Get the underlying whole-rupee amount.
    #[must_use]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Whether this price is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * i64::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", group_indian(self.0))
    }
}

/// Group digits in the Indian system: last three digits, then pairs.
fn group_indian(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 2);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 {
            let remaining = len - i;
            if remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0) {
                grouped.push(',');
            }
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_small_amounts_ungrouped() {
        assert_eq!(Price::new(0).to_string(), "₹0");
        assert_eq!(Price::new(150).to_string(), "₹150");
        assert_eq!(Price::new(999).to_string(), "₹999");
    }

    #[test]
    fn display_uses_indian_grouping() {
        assert_eq!(Price::new(1499).to_string(), "₹1,499");
        assert_eq!(Price::new(12999).to_string(), "₹12,999");
        assert_eq!(Price::new(100_000).to_string(), "₹1,00,000");
        assert_eq!(Price::new(12_345_678).to_string(), "₹1,23,45,678");
    }

    #[test]
    fn arithmetic_over_whole_rupees() {
        let subtotal: Price = [Price::new(1200), Price::new(150), Price::new(150)]
            .into_iter()
            .sum();
        assert_eq!(subtotal, Price::new(1500));
        assert_eq!(Price::new(999) * 3, Price::new(2997));
    }
}

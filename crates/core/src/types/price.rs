//! Money in integer minor units.
//!
//! Prices are stored as kobo (1/100 of a naira) so cart arithmetic is exact
//! integer math. Decimal conversion only happens when rendering.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative amount of Nigerian naira, held in kobo.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// ISO 4217 code of the storefront currency.
    pub const CURRENCY_CODE: &'static str = "NGN";

    /// Symbol used when rendering prices.
    pub const CURRENCY_SYMBOL: &'static str = "₦";

    /// Zero naira.
    pub const ZERO: Self = Self(0);

    /// Create a price from kobo.
    #[must_use]
    pub const fn from_kobo(kobo: u64) -> Self {
        Self(kobo)
    }

    /// Create a price from whole naira.
    #[must_use]
    pub const fn from_naira(naira: u64) -> Self {
        Self(naira.saturating_mul(100))
    }

    /// The amount in kobo.
    #[must_use]
    pub const fn kobo(self) -> u64 {
        self.0
    }

    /// The price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// The amount as a decimal number of naira, always at two places.
    #[must_use]
    pub fn as_decimal(self) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), 2)
    }

    /// Format for display with thousands grouping, e.g. `₦15,290.00`.
    #[must_use]
    pub fn display(self) -> String {
        let amount = format!("{:.2}", self.as_decimal());
        let (naira, kobo) = amount.split_once('.').unwrap_or((amount.as_str(), "00"));
        format!(
            "{}{}.{kobo}",
            Self::CURRENCY_SYMBOL,
            group_thousands(naira)
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Insert a comma between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::from_naira(15_290).display(), "₦15,290.00");
        assert_eq!(Price::from_naira(1_000_000).display(), "₦1,000,000.00");
        assert_eq!(Price::from_kobo(750_050).display(), "₦7,500.50");
    }

    #[test]
    fn test_display_small_amounts() {
        assert_eq!(Price::ZERO.display(), "₦0.00");
        assert_eq!(Price::from_kobo(5).display(), "₦0.05");
        assert_eq!(Price::from_naira(999).display(), "₦999.00");
    }

    #[test]
    fn test_times_and_sum() {
        let line_a = Price::from_naira(2_500).times(3);
        let line_b = Price::from_naira(1_000).times(2);
        let total: Price = [line_a, line_b].into_iter().sum();
        assert_eq!(total, Price::from_naira(9_500));
    }

    #[test]
    fn test_as_decimal() {
        assert_eq!(
            Price::from_kobo(152_990).as_decimal(),
            Decimal::new(152_990, 2)
        );
        assert_eq!(Price::from_naira(7).as_decimal().to_string(), "7.00");
    }

    #[test]
    fn test_serializes_as_kobo() {
        let json = serde_json::to_string(&Price::from_naira(50)).unwrap();
        assert_eq!(json, "5000");
    }
}

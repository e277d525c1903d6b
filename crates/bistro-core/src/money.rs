//! # Money Module
//!
//! Provides the `Money` type for prices and the `Amount` type for taxed
//! totals.
//!
//! ## Integer Cents, Exact Totals
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Where Money flows                                                      │
//! │                                                                         │
//! │  menu file "9.99" ──parse──► MenuItem.price (999¢)                      │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                     OrderLine.line_total = price × qty                  │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │      OrderTicket.total = subtotal × (1 + rate) − discount  (Amount)     │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │                  "Total Bill (including tax): $21.978"                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bistro_core::money::Money;
//!
//! let price: Money = "9.99".parse().unwrap();
//! assert_eq!(price.cents(), 999);
//!
//! let line = price * 2;
//! assert_eq!(line.to_string(), "$19.98");
//! assert_eq!(line.to_decimal_string(), "19.98");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::error::ValidationError;
use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Signed, so a bill whose discount exceeds its taxed subtotal is simply a
/// negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use bistro_core::money::Money;
    ///
    /// let price = Money::from_cents(1299); // Represents $12.99
    /// assert_eq!(price.cents(), 1299);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Price × quantity, or `None` when the product does not fit.
    #[inline]
    pub const fn checked_mul(&self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Sum of two amounts, or `None` when it does not fit.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Plain decimal form used by the menu file, e.g. `9.99` or `-5.50`.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses a locale-independent decimal such as `12`, `8.5` or `9.99`.
///
/// Digits past the second decimal place round half-up to the cent.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: reason.to_string(),
        };

        let text = s.trim();
        let (negative, digits) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return Err(invalid("expected a decimal number"));
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid("expected a decimal number"));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount is too large"))?
        };

        let frac_bytes = frac.as_bytes();
        let digit = |i: usize| frac_bytes.get(i).map_or(0, |b| (b - b'0') as i64);
        let mut minor = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            minor += 1;
        }

        let cents = whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(|| invalid("amount is too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Amount Type
// =============================================================================

/// Micro-units (millionths of a dollar) in one cent.
const MICROS_PER_CENT: i128 = 10_000;

/// A monetary value at sub-cent precision, in millionths of a dollar.
///
/// Bills and earnings are `Amount`s. A subtotal in cents times a rate in
/// basis points lands exactly on this scale, and any `Money` widens into
/// an `Amount` without loss.
///
/// ## Example
/// ```rust
/// use bistro_core::money::{Amount, Money};
/// use bistro_core::types::TaxRate;
///
/// // $19.98 × 1.10 = $21.978
/// let total = Amount::taxed(Money::from_cents(1998), TaxRate::from_bps(1000));
/// assert_eq!(total.micros(), 21_978_000);
/// assert_eq!(total.to_string(), "$21.978");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(i128);

impl Amount {
    #[inline]
    pub const fn from_micros(micros: i128) -> Self {
        Amount(micros)
    }

    /// Returns the value in millionths of a dollar.
    #[inline]
    pub const fn micros(&self) -> i128 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Amount(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// `amount × rate`, exact.
    pub fn tax_on(amount: Money, rate: TaxRate) -> Amount {
        Amount(amount.cents() as i128 * rate.bps() as i128)
    }

    /// `amount × (1 + rate)`, exact.
    pub fn taxed(amount: Money, rate: TaxRate) -> Amount {
        Amount::from(amount) + Amount::tax_on(amount, rate)
    }
}

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        Amount(money.cents() as i128 * MICROS_PER_CENT)
    }
}

/// Shows at least two decimals and as many more as the value needs:
/// `$21.98`, `$21.978`, `-$5.00`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let frac = format!("{:06}", abs % 1_000_000);
        let frac = frac.trim_end_matches('0');
        write!(f, "{}${}.{:0<2}", sign, abs / 1_000_000, frac)
    }
}

impl Add for Amount {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Amount(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Amount(self.0 - other.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Self {
        iter.fold(Amount::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_decimal_string() {
        assert_eq!(Money::from_cents(999).to_decimal_string(), "9.99");
        assert_eq!(Money::from_cents(5).to_decimal_string(), "0.05");
        assert_eq!(Money::from_cents(-550).to_decimal_string(), "-5.50");
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!("9.99".parse::<Money>().unwrap().cents(), 999);
        assert_eq!("12".parse::<Money>().unwrap().cents(), 1200);
        assert_eq!("8.5".parse::<Money>().unwrap().cents(), 850);
        assert_eq!(".75".parse::<Money>().unwrap().cents(), 75);
        assert_eq!("  5.99 ".parse::<Money>().unwrap().cents(), 599);
        assert_eq!("-5.50".parse::<Money>().unwrap().cents(), -550);
    }

    #[test]
    fn test_parse_rounds_extra_digits() {
        assert_eq!("8.999".parse::<Money>().unwrap().cents(), 900);
        assert_eq!("8.994".parse::<Money>().unwrap().cents(), 899);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!(".".parse::<Money>().is_err());
        assert!("abc".parse::<Money>().is_err());
        assert!("9.99abc".parse::<Money>().is_err());
        assert!("1.2.3".parse::<Money>().is_err());
        assert!("99999999999999999999".parse::<Money>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 50].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 400);
    }

    #[test]
    fn test_checked_arithmetic() {
        let burger = Money::from_cents(999);
        assert_eq!(burger.checked_mul(2), Some(Money::from_cents(1998)));
        assert_eq!(burger.checked_mul(i64::MAX), None);
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(
            burger.checked_add(Money::from_cents(1)),
            Some(Money::from_cents(1000))
        );
    }

    #[test]
    fn test_amount_keeps_sub_cent_tax() {
        let subtotal = Money::from_cents(1998);
        let rate = TaxRate::from_bps(1000);

        assert_eq!(Amount::tax_on(subtotal, rate).micros(), 1_998_000);
        assert_eq!(Amount::taxed(subtotal, rate).micros(), 21_978_000);
        assert_eq!(Amount::taxed(subtotal, TaxRate::zero()), Amount::from(subtotal));
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::from_micros(21_978_000).to_string(), "$21.978");
        assert_eq!(Amount::from(Money::from_cents(1998)).to_string(), "$19.98");
        assert_eq!(Amount::from(Money::from_cents(500)).to_string(), "$5.00");
        assert_eq!(Amount::from_micros(10_814_175).to_string(), "$10.814175");
        assert_eq!(Amount::from_micros(-5_000_000).to_string(), "-$5.00");
        assert_eq!(Amount::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_amount_sum_is_exact() {
        let total: Amount = [1_099_000, 999_000, 1]
            .into_iter()
            .map(Amount::from_micros)
            .sum();
        assert_eq!(total.micros(), 2_098_001);
        assert!(!total.is_negative());
    }
}

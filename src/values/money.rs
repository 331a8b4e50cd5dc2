use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};

use super::ValueObject;
use crate::core::{ErrorCode, FieldError};

/// Largest monetary value accepted by the authority's schema.
pub const MAX_AMOUNT: Decimal = dec!(99999999999.99);

/// Tolerance for value equality between decimal value objects.
pub const EPSILON: Decimal = dec!(0.000001);

const AMOUNT_SCALE: u32 = 8;

/// Round a Decimal to `dp` decimal places using half-up (commercial rounding).
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

fn parse_decimal(field: &'static str, code: ErrorCode, raw: &str) -> Result<Decimal, FieldError> {
    Decimal::from_str(raw.trim())
        .map_err(|_| FieldError::new(code, field, "a decimal number", raw))
}

fn from_f64(field: &'static str, code: ErrorCode, raw: f64) -> Result<Decimal, FieldError> {
    Decimal::from_f64(raw).ok_or_else(|| FieldError::new(code, field, "a finite number", raw))
}

/// A non-negative monetary amount.
///
/// Two construction modes:
/// - [`Amount::new`] keeps up to 8 decimal places (unit prices, line values).
/// - [`Amount::for_total`] requires the value to resolve to whole cents, so
///   totals never drift by a fraction of a cent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, FieldError> {
        let rounded = value.round_dp(AMOUNT_SCALE);
        check_amount_range(rounded)?;
        Ok(Self(rounded))
    }

    pub fn for_total(value: Decimal) -> Result<Self, FieldError> {
        check_amount_range(value)?;
        let cents = value * dec!(100);
        if !cents.fract().is_zero() {
            return Err(FieldError::new(
                ErrorCode::InvalidDecimalPrecision,
                "amount",
                "at most 2 decimal places",
                value,
            ));
        }
        Ok(Self(value))
    }

    pub fn from_f64(value: f64) -> Result<Self, FieldError> {
        Self::new(from_f64("amount", ErrorCode::InvalidAmount, value)?)
    }

    pub fn for_total_f64(value: f64) -> Result<Self, FieldError> {
        Self::for_total(from_f64("amount", ErrorCode::InvalidAmount, value)?)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

/// Deserialize an [`Amount`] through [`Amount::for_total`].
///
/// Plain `Amount` deserialization keeps 8 decimal places; total and payment
/// fields use this with `#[serde(deserialize_with = "deserialize_total")]`.
pub fn deserialize_total<'de, D>(deserializer: D) -> Result<Amount, D::Error>
where
    D: Deserializer<'de>,
{
    let value = <Decimal as Deserialize>::deserialize(deserializer)?;
    Amount::for_total(value).map_err(serde::de::Error::custom)
}

fn check_amount_range(value: Decimal) -> Result<(), FieldError> {
    if value < Decimal::ZERO || value > MAX_AMOUNT {
        return Err(FieldError::new(
            ErrorCode::InvalidAmount,
            "amount",
            format!("0..={MAX_AMOUNT}"),
            value,
        ));
    }
    Ok(())
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Amount {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_decimal("amount", ErrorCode::InvalidAmount, s)?)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = FieldError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(v: Amount) -> Decimal {
        v.0
    }
}

impl ValueObject for Amount {
    fn equals(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < EPSILON
    }
}

/// A strictly positive quantity of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Quantity(Decimal);

impl Quantity {
    pub fn new(value: Decimal) -> Result<Self, FieldError> {
        let rounded = value.round_dp(AMOUNT_SCALE);
        if rounded <= Decimal::ZERO || rounded > MAX_AMOUNT {
            return Err(FieldError::new(
                ErrorCode::InvalidQuantity,
                "quantity",
                format!("greater than 0 and at most {MAX_AMOUNT}"),
                value,
            ));
        }
        Ok(Self(rounded))
    }

    pub fn from_f64(value: f64) -> Result<Self, FieldError> {
        Self::new(from_f64("quantity", ErrorCode::InvalidQuantity, value)?)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_decimal("quantity", ErrorCode::InvalidQuantity, s)?)
    }
}

impl TryFrom<Decimal> for Quantity {
    type Error = FieldError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for Decimal {
    fn from(v: Quantity) -> Decimal {
        v.0
    }
}

impl ValueObject for Quantity {
    fn equals(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < EPSILON
    }
}

/// A discount percentage between 0 and 100, kept to 2 decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Discount(Decimal);

impl Discount {
    pub const NONE: Discount = Discount(Decimal::ZERO);

    pub fn new(value: Decimal) -> Result<Self, FieldError> {
        let rounded = round_half_up(value, 2);
        if rounded < Decimal::ZERO || rounded > dec!(100) {
            return Err(FieldError::new(
                ErrorCode::InvalidDiscount,
                "discount",
                "0..=100",
                value,
            ));
        }
        // Normalise a negative zero produced by rounding tiny negatives.
        Ok(Self(if rounded.is_zero() { Decimal::ZERO } else { rounded }))
    }

    pub fn from_f64(value: f64) -> Result<Self, FieldError> {
        Self::new(from_f64("discount", ErrorCode::InvalidDiscount, value)?)
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Discount {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_decimal("discount", ErrorCode::InvalidDiscount, s)?)
    }
}

impl TryFrom<Decimal> for Discount {
    type Error = FieldError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Discount> for Decimal {
    fn from(v: Discount) -> Decimal {
        v.0
    }
}

impl ValueObject for Discount {
    fn equals(&self, other: &Self) -> bool {
        (self.0 - other.0).abs() < EPSILON
    }
}

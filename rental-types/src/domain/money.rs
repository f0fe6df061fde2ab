//! Monetary amounts and rental pricing.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// A monetary amount in the smallest currency unit (cents).
///
/// Stored as an integer to avoid floating-point precision issues. The value is
/// signed: rental durations are not validated, so a non-positive duration
/// prices to a zero or negative amount and that amount is still charged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
    ToSchema,
)]
#[serde(transparent)]
#[schema(value_type = i64, example = 1500)]
pub struct Money(i64);

impl Money {
    /// Creates an amount from minor units (cents).
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Creates a zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the amount in minor units.
    pub fn minor_units(&self) -> i64 {
        self.0
    }

    /// Multiplies the amount by a whole number of units, saturating on overflow.
    pub fn times(&self, units: i64) -> Money {
        Money(self.0.saturating_mul(units))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Price of renting a movie for one day: 5.00.
pub const DAILY_RENTAL_RATE: Money = Money::from_minor(500);

/// Total price of a rental lasting `days_rented` days.
pub fn rental_price(days_rented: i32) -> Money {
    DAILY_RENTAL_RATE.times(i64::from(days_rented))
}

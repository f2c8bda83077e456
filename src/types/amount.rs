use crate::types::errors::AmountError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const THOUSANDS_SEPARATOR: char = ',';
const ZERO_PLACEHOLDERS: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// A ledger amount in whole currency units with arbitrary decimal precision.
///
/// Amounts coming from spreadsheet exports use `,` as a thousands separator and a
/// dash for zero, so parsing goes through [`Amount::from_str`] rather than
/// straight into a `Decimal`. Arithmetic is checked: an overflow is an
/// [`AmountError::Overflow`], never a panic.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct Amount(Decimal);

impl Amount {
    pub const ZERO: Amount = Amount(Decimal::ZERO);

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    pub fn checked_add(self, rhs: Amount) -> Result<Amount, AmountError> {
        self.0.checked_add(rhs.0)
            .map(Amount)
            .ok_or_else(|| AmountError::overflow("+", self, rhs))
    }

    pub fn checked_sub(self, rhs: Amount) -> Result<Amount, AmountError> {
        self.0.checked_sub(rhs.0)
            .map(Amount)
            .ok_or_else(|| AmountError::overflow("-", self, rhs))
    }

    /// Adds every amount, stopping at the first overflow.
    pub fn checked_sum(amounts: impl IntoIterator<Item = Amount>) -> Result<Amount, AmountError> {
        amounts.into_iter().try_fold(Amount::ZERO, Amount::checked_add)
    }

    /// Rounds to the nearest whole unit, ties to even.
    pub fn round_whole(self) -> Amount {
        Amount(self.0.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven))
    }

    /// Formats the amount rounded to whole units with `,` grouping, e.g. `-2,000,000`.
    pub fn to_grouped_string(self) -> String {
        let rounded = self.round_whole();
        let digits = rounded.0.abs().normalize().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(THOUSANDS_SEPARATOR);
            }
            grouped.push(digit);
        }

        if rounded.is_negative() {
            format!("-{grouped}")
        } else {
            grouped
        }
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Amount(Decimal::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Amount(Decimal::from(value))
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0.normalize())
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        // Any run of dash placeholders, spaced or not, is a zero cell
        if value.chars().all(|c| c.is_whitespace() || ZERO_PLACEHOLDERS.contains(&c)) {
            return Ok(Amount::ZERO);
        }

        let normalized: String = value.chars().filter(|c| *c != THOUSANDS_SEPARATOR).collect();

        if normalized.is_empty() {
            return Err(AmountError::invalid(value, "Value only contains separators"));
        }

        Decimal::from_str(&normalized)
            .map(Amount)
            .map_err(|error| AmountError::invalid(value, error.to_string()))
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

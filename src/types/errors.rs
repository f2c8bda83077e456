use thiserror::Error;

use crate::types::Amount;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Amount error: '{value}' is not a valid amount ({reason})")]
    InvalidFormat {
        value: String,
        reason: String
    },
    #[error("Amount error: {lhs} {operator} {rhs} overflows")]
    Overflow {
        operator: &'static str,
        lhs: Amount,
        rhs: Amount
    }
}

impl AmountError {
    pub fn invalid(value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            value: value.to_string(),
            reason: reason.into()
        }
    }

    pub fn overflow(operator: &'static str, lhs: Amount, rhs: Amount) -> Self {
        Self::Overflow { operator, lhs, rhs }
    }
}

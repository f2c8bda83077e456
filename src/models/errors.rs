use crate::types::{AccountCode, AmountError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Malformed {column} '{value}' for account [{code}]")]
    MalformedOpeningBalance {
        code: AccountCode,
        column: &'static str,
        value: String,
        #[source]
        source: AmountError
    },
    #[error("Malformed {column} '{value}' on transaction line {line}")]
    MalformedMovement {
        line: u64,
        column: &'static str,
        value: String,
        #[source]
        source: AmountError
    },
    #[error("Suspense account [{code}] is not present in the opening balances")]
    MissingSuspenseAccount {
        code: AccountCode
    },
    #[error("Amount overflow in {stage} for [{code}]")]
    AmountOverflow {
        stage: &'static str,
        code: AccountCode,
        #[source]
        source: AmountError
    }
}

impl ReconcileError {
    pub fn malformed_opening_balance(code: &str, column: &'static str, value: &str, source: AmountError) -> Self {
        Self::MalformedOpeningBalance {
            code: code.to_string(),
            column,
            value: value.to_string(),
            source
        }
    }

    pub fn malformed_movement(line: u64, column: &'static str, value: &str, source: AmountError) -> Self {
        Self::MalformedMovement {
            line,
            column,
            value: value.to_string(),
            source
        }
    }

    pub fn missing_suspense_account(code: &str) -> Self {
        Self::MissingSuspenseAccount { code: code.to_string() }
    }

    pub fn amount_overflow(stage: &'static str, code: &str, source: AmountError) -> Self {
        Self::AmountOverflow {
            stage,
            code: code.to_string(),
            source
        }
    }
}

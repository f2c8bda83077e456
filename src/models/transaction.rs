use serde::Deserialize;
use std::str::FromStr;

use crate::models::errors::ReconcileError;
use crate::types::{AccountCode, Amount};

/// Represents a single row from the bank transaction CSV file.
///
/// Bank exports name the movement columns after the bank (`mandiri_dr`,
/// `mandiri_cr`), both spellings are accepted. Extra columns are ignored. Amounts
/// stay as raw text until [`TransactionRecord::from_row`] so that a bad cell can be
/// reported with its line number.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionRow {
    pub code: AccountCode,
    #[serde(default, alias = "mandiri_dr")]
    pub movement_dr: String,
    #[serde(default, alias = "mandiri_cr")]
    pub movement_cr: String
}

/// A parsed transaction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Account the line is posted against.
    pub code: AccountCode,
    pub movement_dr: Amount,
    pub movement_cr: Amount
}

impl TransactionRecord {
    pub fn new(code: impl Into<AccountCode>, movement_dr: Amount, movement_cr: Amount) -> Self {
        Self {
            code: code.into(),
            movement_dr,
            movement_cr
        }
    }

    /// Parses the amounts of a raw row read from `line` of the transaction file.
    pub fn from_row(line: u64, row: TransactionRow) -> Result<Self, ReconcileError> {
        let movement_dr = Amount::from_str(&row.movement_dr)
            .map_err(|error| ReconcileError::malformed_movement(line, "movement_dr", &row.movement_dr, error))?;

        let movement_cr = Amount::from_str(&row.movement_cr)
            .map_err(|error| ReconcileError::malformed_movement(line, "movement_cr", &row.movement_cr, error))?;

        Ok(Self::new(row.code, movement_dr, movement_cr))
    }
}

/// Period movement for one account code, summed over all its transaction lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedMovement {
    pub code: AccountCode,
    pub movement_dr: Amount,
    pub movement_cr: Amount
}

/// Grand totals over every transaction line regardless of code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementTotals {
    pub total_movement_dr: Amount,
    pub total_movement_cr: Amount
}

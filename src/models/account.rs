use serde::Deserialize;
use std::str::FromStr;

use crate::models::errors::ReconcileError;
use crate::types::{AccountCode, Amount};

/// Represents a single row from the opening balance CSV file.
///
/// Opening amounts are kept as raw text here so that a malformed value can be
/// reported against the account code it belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct AccountRecord {
    pub code: AccountCode,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub opening_dr: String,
    #[serde(default)]
    pub opening_cr: String
}

/// A ledger account with its opening balance carried forward from the prior period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Account code, compared as literal text.
    pub code: AccountCode,
    /// Display label.
    pub name: String,
    pub opening_dr: Amount,
    pub opening_cr: Amount
}

impl Account {
    pub fn new(code: impl Into<AccountCode>, name: impl Into<String>, opening_dr: Amount, opening_cr: Amount) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            opening_dr,
            opening_cr
        }
    }
}

impl TryFrom<AccountRecord> for Account {
    type Error = ReconcileError;

    fn try_from(record: AccountRecord) -> Result<Self, Self::Error> {
        let opening_dr = Amount::from_str(&record.opening_dr)
            .map_err(|error| ReconcileError::malformed_opening_balance(&record.code, "opening_dr", &record.opening_dr, error))?;

        let opening_cr = Amount::from_str(&record.opening_cr)
            .map_err(|error| ReconcileError::malformed_opening_balance(&record.code, "opening_cr", &record.opening_cr, error))?;

        Ok(Self::new(record.code, record.name, opening_dr, opening_cr))
    }
}

use serde::Serialize;

use crate::models::{Account, ReconcileError};
use crate::types::{AccountCode, Amount};

pub const SUBTOTAL_CODE: &str = "SUBTOTAL";

/// One line of the trial balance, serialized in the fixed output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialBalanceRow {
    pub code: AccountCode,
    pub name: String,
    pub opening_dr: Amount,
    pub opening_cr: Amount,
    pub movement_dr: Amount,
    pub movement_cr: Amount,
    pub closing_dr: Amount,
    pub closing_cr: Amount
}

impl TrialBalanceRow {
    /// Creates a row from an account and its period movement. Closing is left at zero.
    pub fn new(account: &Account, movement_dr: Amount, movement_cr: Amount) -> Self {
        Self {
            code: account.code.clone(),
            name: account.name.clone(),
            opening_dr: account.opening_dr,
            opening_cr: account.opening_cr,
            movement_dr,
            movement_cr,
            closing_dr: Amount::ZERO,
            closing_cr: Amount::ZERO
        }
    }

    /// Returns the row with closing balances derived from opening plus net movement.
    pub fn with_closing(self) -> Result<Self, ReconcileError> {
        let closing_dr = self.opening_dr.checked_add(self.movement_dr)
            .and_then(|amount| amount.checked_sub(self.movement_cr))
            .map_err(|error| ReconcileError::amount_overflow("closing_dr", &self.code, error))?;

        let closing_cr = self.opening_cr.checked_add(self.movement_cr)
            .and_then(|amount| amount.checked_sub(self.movement_dr))
            .map_err(|error| ReconcileError::amount_overflow("closing_cr", &self.code, error))?;

        Ok(Self { closing_dr, closing_cr, ..self })
    }

    /// True when the account carries an opening balance or any movement on either side.
    pub fn is_active(&self) -> bool {
        !(self.opening_dr.is_zero()
            && self.opening_cr.is_zero()
            && self.movement_dr.is_zero()
            && self.movement_cr.is_zero())
    }
}

/// The reconciled table: account rows in input order followed by the subtotal row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialBalanceTable {
    rows: Vec<TrialBalanceRow>,
    subtotal: TrialBalanceRow
}

impl TrialBalanceTable {
    pub fn new(rows: Vec<TrialBalanceRow>, subtotal: TrialBalanceRow) -> Self {
        Self { rows, subtotal }
    }

    /// Account rows, without the subtotal.
    pub fn rows(&self) -> &[TrialBalanceRow] {
        &self.rows
    }

    pub fn subtotal(&self) -> &TrialBalanceRow {
        &self.subtotal
    }

    /// Iterates every output line, subtotal last.
    pub fn iter(&self) -> impl Iterator<Item = &TrialBalanceRow> {
        self.rows.iter().chain(std::iter::once(&self.subtotal))
    }

    /// Number of output lines, subtotal included.
    pub fn line_count(&self) -> usize {
        self.rows.len() + 1
    }
}

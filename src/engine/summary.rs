use tracing::warn;

use crate::models::{Category, ReconcileError, TrialBalanceRow, TrialBalanceTable, ValidationRecord, ValidationReport, SUBTOTAL_CODE};
use crate::types::Amount;

/// Appends the subtotal row and checks debit/credit equality for each checkpoint.
///
/// Column sums are rounded to whole units, ties to even, and the checks compare the
/// rounded values. Imbalance is reported in the returned [`ValidationReport`], never
/// as an error. Only a column sum that overflows fails.
pub fn summarize(rows: Vec<TrialBalanceRow>) -> Result<(TrialBalanceTable, ValidationReport), ReconcileError> {
    let subtotal = TrialBalanceRow {
        code: SUBTOTAL_CODE.to_string(),
        name: String::new(),
        opening_dr: column_total(&rows, "opening_dr", |row| row.opening_dr)?,
        opening_cr: column_total(&rows, "opening_cr", |row| row.opening_cr)?,
        movement_dr: column_total(&rows, "movement_dr", |row| row.movement_dr)?,
        movement_cr: column_total(&rows, "movement_cr", |row| row.movement_cr)?,
        closing_dr: column_total(&rows, "closing_dr", |row| row.closing_dr)?,
        closing_cr: column_total(&rows, "closing_cr", |row| row.closing_cr)?
    };

    let report = ValidationReport::new(
        ValidationRecord::new(Category::Opening, subtotal.opening_dr, subtotal.opening_cr),
        ValidationRecord::new(Category::Movement, subtotal.movement_dr, subtotal.movement_cr),
        ValidationRecord::new(Category::Closing, subtotal.closing_dr, subtotal.closing_cr)
    );

    for record in report.iter().filter(|record| !record.balanced) {
        warn!(
            "{} is not balanced: debit {} vs credit {}",
            record.category, record.debit_total, record.credit_total
        );
    }

    Ok((TrialBalanceTable::new(rows, subtotal), report))
}

fn column_total(rows: &[TrialBalanceRow], column: &'static str, select: impl Fn(&TrialBalanceRow) -> Amount) -> Result<Amount, ReconcileError> {
    Amount::checked_sum(rows.iter().map(select))
        .map(Amount::round_whole)
        .map_err(|error| ReconcileError::amount_overflow(column, SUBTOTAL_CODE, error))
}

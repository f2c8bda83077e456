use tracing::debug;

use crate::models::TrialBalanceRow;

/// Drops dormant accounts: no opening balance and no movement on either side.
pub fn filter_active(rows: Vec<TrialBalanceRow>) -> Vec<TrialBalanceRow> {
    let before = rows.len();
    let active: Vec<TrialBalanceRow> = rows.into_iter().filter(TrialBalanceRow::is_active).collect();

    debug!("Dropped {} dormant accounts, {} remain", before - active.len(), active.len());

    active
}

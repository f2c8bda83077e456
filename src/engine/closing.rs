use crate::models::{ReconcileError, TrialBalanceRow};

pub fn compute_closing(rows: Vec<TrialBalanceRow>) -> Result<Vec<TrialBalanceRow>, ReconcileError> {
    rows.into_iter().map(TrialBalanceRow::with_closing).collect()
}

use tracing::{debug, warn};

use crate::engine::MissingSuspensePolicy;
use crate::models::{MovementTotals, ReconcileError, TrialBalanceRow};

/// Posts the inverse of the period totals to the suspense account.
///
/// The suspense row receives the total credit movement on its debit side and the total
/// debit movement on its credit side, on top of whatever was posted to it directly.
/// Every row carrying `suspense_code` is adjusted.
pub fn apply_suspense_adjustment(
    mut rows: Vec<TrialBalanceRow>,
    totals: &MovementTotals,
    suspense_code: &str,
    policy: MissingSuspensePolicy
) -> Result<Vec<TrialBalanceRow>, ReconcileError> {
    let mut adjusted = 0usize;

    for row in rows.iter_mut().filter(|row| row.code == suspense_code) {
        row.movement_dr = row.movement_dr.checked_add(totals.total_movement_cr)
            .map_err(|error| ReconcileError::amount_overflow("suspense adjustment", suspense_code, error))?;
        row.movement_cr = row.movement_cr.checked_add(totals.total_movement_dr)
            .map_err(|error| ReconcileError::amount_overflow("suspense adjustment", suspense_code, error))?;
        adjusted += 1;
    }

    if adjusted == 0 {
        match policy {
            MissingSuspensePolicy::Error => return Err(ReconcileError::missing_suspense_account(suspense_code)),
            MissingSuspensePolicy::Skip => {
                warn!("Suspense account [{suspense_code}] not found, adjustment skipped");
            }
        }
    } else {
        debug!(
            "Suspense account [{suspense_code}] adjusted: dr += {}, cr += {}",
            totals.total_movement_cr, totals.total_movement_dr
        );
    }

    Ok(rows)
}

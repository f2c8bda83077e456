use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{AggregatedMovement, MovementTotals, ReconcileError, TransactionRecord};
use crate::types::Amount;

/// Groups transaction lines by account code and sums each movement column.
///
/// Returns one entry per distinct code, ordered by code, together with the grand
/// totals across every line. An empty input yields no movements and zero totals.
pub fn aggregate(records: &[TransactionRecord]) -> Result<(Vec<AggregatedMovement>, MovementTotals), ReconcileError> {
    let mut groups = BTreeMap::<&str, (Amount, Amount)>::new();
    let mut totals = MovementTotals::default();

    for record in records {
        let overflow = |error| ReconcileError::amount_overflow("movement", &record.code, error);

        let (movement_dr, movement_cr) = groups.entry(record.code.as_str()).or_default();
        *movement_dr = movement_dr.checked_add(record.movement_dr).map_err(overflow)?;
        *movement_cr = movement_cr.checked_add(record.movement_cr).map_err(overflow)?;

        totals.total_movement_dr = totals.total_movement_dr.checked_add(record.movement_dr).map_err(overflow)?;
        totals.total_movement_cr = totals.total_movement_cr.checked_add(record.movement_cr).map_err(overflow)?;
    }

    debug!("Aggregated {} transaction lines into {} account codes", records.len(), groups.len());

    let movements = groups.into_iter()
        .map(|(code, (movement_dr, movement_cr))| AggregatedMovement {
            code: code.to_string(),
            movement_dr,
            movement_cr
        })
        .collect();

    Ok((movements, totals))
}

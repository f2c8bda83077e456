use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::models::{Account, AggregatedMovement, TrialBalanceRow, SUBTOTAL_CODE};
use crate::types::Amount;

/// Left-joins aggregated movements onto the opening balance accounts.
///
/// Every account produces exactly one row, in input order, with zero movement when no
/// transaction was posted to its code. Duplicate account codes are kept as separate rows
/// and each receives the full movement of that code. Movements for codes that are not in
/// the account list are dropped. An account coded `SUBTOTAL` is kept but warned about,
/// since only its position tells it apart from the appended subtotal row.
pub fn merge(accounts: &[Account], movements: &[AggregatedMovement]) -> Vec<TrialBalanceRow> {
    let by_code: HashMap<&str, &AggregatedMovement> = movements.iter()
        .map(|movement| (movement.code.as_str(), movement))
        .collect();

    let mut seen = HashSet::<&str>::with_capacity(accounts.len());

    for account in accounts {
        if !seen.insert(account.code.as_str()) {
            warn!("Account code [{}] appears more than once in the opening balances", account.code);
        }

        if account.code == SUBTOTAL_CODE {
            warn!("Account code [{SUBTOTAL_CODE}] collides with the subtotal row of the output");
        }
    }

    for movement in movements.iter().filter(|movement| !seen.contains(movement.code.as_str())) {
        debug!("Movement for unknown account code [{}] is not part of the trial balance", movement.code);
    }

    accounts.iter()
        .map(|account| match by_code.get(account.code.as_str()) {
            Some(movement) => TrialBalanceRow::new(account, movement.movement_dr, movement.movement_cr),
            None => TrialBalanceRow::new(account, Amount::ZERO, Amount::ZERO)
        })
        .collect()
}

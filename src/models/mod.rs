mod account;
mod errors;
mod transaction;
mod trial_balance;
mod validation;

pub use account::{Account, AccountRecord};
pub use errors::ReconcileError;
pub use transaction::{AggregatedMovement, MovementTotals, TransactionRecord, TransactionRow};
pub use trial_balance::{TrialBalanceRow, TrialBalanceTable, SUBTOTAL_CODE};
pub use validation::{Category, ValidationRecord, ValidationReport};

mod csv_storage;
mod errors;
#[cfg(test)]
mod tests;

use crate::models::{Account, TransactionRecord, TrialBalanceTable};

pub use csv_storage::CsvStorage;
pub use errors::StorageError;

/// Source of the two input tables and sink for the reconciled trial balance.
pub trait TableStorage {
    fn load_accounts(&self) -> Result<Vec<Account>, StorageError>;
    fn load_transactions(&self) -> Result<Vec<TransactionRecord>, StorageError>;
    fn save_trial_balance(&self, table: &TrialBalanceTable) -> Result<(), StorageError>;
}

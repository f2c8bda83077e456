use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim, Writer};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{Account, AccountRecord, TransactionRecord, TransactionRow, TrialBalanceTable};
use crate::storage::{StorageError, TableStorage};

/// Reads the opening balance and bank transaction tables from CSV files and writes
/// the trial balance back out as CSV.
pub struct CsvStorage {
    accounts_path: PathBuf,
    transactions_path: PathBuf,
    output_path: PathBuf
}

impl CsvStorage {
    pub fn new(accounts_path: impl Into<PathBuf>, transactions_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            accounts_path: accounts_path.into(),
            transactions_path: transactions_path.into(),
            output_path: output_path.into()
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl TableStorage for CsvStorage {
    fn load_accounts(&self) -> Result<Vec<Account>, StorageError> {
        let records: Vec<(u64, AccountRecord)> = read_records(&self.accounts_path)?;

        records.into_iter()
            .map(|(_, record)| Account::try_from(record).map_err(|error| StorageError::invalid_record(&self.accounts_path, error)))
            .collect()
    }

    fn load_transactions(&self) -> Result<Vec<TransactionRecord>, StorageError> {
        let rows: Vec<(u64, TransactionRow)> = read_records(&self.transactions_path)?;

        rows.into_iter()
            .map(|(line, row)| TransactionRecord::from_row(line, row).map_err(|error| StorageError::invalid_record(&self.transactions_path, error)))
            .collect()
    }

    fn save_trial_balance(&self, table: &TrialBalanceTable) -> Result<(), StorageError> {
        let path = self.output_path.as_path();
        let mut writer = Writer::from_path(path).map_err(|error| StorageError::write(path, error))?;

        for row in table.iter() {
            writer.serialize(row).map_err(|error| StorageError::write(path, error))?;
        }

        writer.flush().map_err(|error| StorageError::flush(path, error))?;

        debug!("Saved {} rows to [{}]", table.line_count(), path.display());

        Ok(())
    }
}

/// Reads every record of `path` together with the line it starts on.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<(u64, T)>, StorageError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)
        .map_err(|error| StorageError::read(path, error))?;

    let headers = reader.headers()
        .map_err(|error| StorageError::read(path, error))?
        .clone();

    let mut records = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|error| StorageError::read(path, error))?;
        let line = record.position().map_or(0, |position| position.line());
        let value = record.deserialize::<T>(Some(&headers))
            .map_err(|error| StorageError::read(path, error))?;

        records.push((line, value));
    }

    debug!("Read {} records from [{}]", records.len(), path.display());

    Ok(records)
}

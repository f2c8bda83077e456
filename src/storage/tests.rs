use super::{CsvStorage, StorageError, TableStorage};

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tempfile::{tempdir, NamedTempFile};

use crate::models::{Account, ReconcileError, TrialBalanceRow, TrialBalanceTable, SUBTOTAL_CODE};
use crate::types::Amount;

fn create_temporary_csv(content: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    write!(file, "{content}")?;

    Ok(file)
}

fn storage_for(accounts: &Path, transactions: &Path) -> CsvStorage {
    CsvStorage::new(accounts, transactions, "unused.csv")
}

#[test]
fn test_storage_loads_accounts_with_ledger_formatted_balances() -> Result<()> {
    let accounts = create_temporary_csv("code,name,opening_dr,opening_cr\n1101105,Bank Mandiri,-,-\n0100, Cash ,\"1,500,000\",-\n2100,Payables,-,\"1,500,000\"\n")?;
    let storage = storage_for(accounts.path(), Path::new("missing.csv"));

    let loaded = storage.load_accounts()?;

    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded[0], Account::new("1101105", "Bank Mandiri", Amount::ZERO, Amount::ZERO));
    assert_eq!(loaded[1], Account::new("0100", "Cash", Amount::from(1_500_000), Amount::ZERO));
    assert_eq!(loaded[2].opening_cr, Amount::from(1_500_000));

    Ok(())
}

#[test]
fn test_storage_rejects_malformed_opening_balance() -> Result<()> {
    let accounts = create_temporary_csv("code,name,opening_dr,opening_cr\n3000,Equity,n/a,-\n")?;
    let storage = storage_for(accounts.path(), Path::new("missing.csv"));

    let result = storage.load_accounts();

    assert!(matches!(
        result,
        Err(StorageError::InvalidRecord { source: ReconcileError::MalformedOpeningBalance { ref code, .. }, .. }) if code == "3000"
    ));

    Ok(())
}

#[test]
fn test_storage_loads_transactions_using_bank_column_names() -> Result<()> {
    let transactions = create_temporary_csv("date,code,description,mandiri_dr,mandiri_cr\n2024-01-02,5100,Fees,2500,\n2024-01-03,4100,Sales,,10000.50\n")?;
    let storage = storage_for(Path::new("missing.csv"), transactions.path());

    let loaded = storage.load_transactions()?;

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].code, "5100");
    assert_eq!(loaded[0].movement_dr, Amount::from(2500));
    assert!(loaded[0].movement_cr.is_zero());
    assert_eq!(loaded[1].movement_cr.to_string(), "10000.5");

    Ok(())
}

#[test]
fn test_storage_reports_unparseable_transaction_amount_with_its_line() -> Result<()> {
    let transactions = create_temporary_csv("code,movement_dr,movement_cr\n5100,\"1,000\",-\n5100,abc,0\n")?;
    let storage = storage_for(Path::new("missing.csv"), transactions.path());

    assert!(matches!(
        storage.load_transactions(),
        Err(StorageError::InvalidRecord { source: ReconcileError::MalformedMovement { line: 3, column: "movement_dr", ref value, .. }, .. })
            if value == "abc"
    ));

    Ok(())
}

#[test]
fn test_storage_treats_dash_runs_as_zero_movement() -> Result<()> {
    let transactions = create_temporary_csv("code,mandiri_dr,mandiri_cr\n5100,--,- -\n")?;
    let storage = storage_for(Path::new("missing.csv"), transactions.path());

    let loaded = storage.load_transactions()?;

    assert!(loaded[0].movement_dr.is_zero());
    assert!(loaded[0].movement_cr.is_zero());

    Ok(())
}

#[test]
fn test_storage_reports_missing_input_file() {
    let storage = storage_for(Path::new("does-not-exist.csv"), Path::new("does-not-exist.csv"));

    assert!(matches!(storage.load_accounts(), Err(StorageError::Read { .. })));
    assert!(matches!(storage.load_transactions(), Err(StorageError::Read { .. })));
}

#[test]
fn test_storage_writes_trial_balance_in_fixed_column_order() -> Result<()> {
    let directory = tempdir()?;
    let output = directory.path().join("trial_balance.csv");
    let storage = CsvStorage::new("unused.csv", "unused.csv", &output);

    let account = Account::new("0100", "Cash, on hand", Amount::from(100), Amount::ZERO);
    let subtotal_account = Account::new(SUBTOTAL_CODE, "", Amount::from(100), Amount::ZERO);
    let table = TrialBalanceTable::new(
        vec![TrialBalanceRow::new(&account, Amount::ZERO, Amount::ZERO).with_closing()?],
        TrialBalanceRow::new(&subtotal_account, Amount::ZERO, Amount::ZERO).with_closing()?
    );

    storage.save_trial_balance(&table)?;

    let written = fs::read_to_string(storage.output_path())?;
    let lines: Vec<&str> = written.lines().collect();

    assert_eq!(lines, vec![
        "code,name,opening_dr,opening_cr,movement_dr,movement_cr,closing_dr,closing_cr",
        "0100,\"Cash, on hand\",100,0,0,0,100,0",
        "SUBTOTAL,,100,0,0,0,100,0",
    ]);

    Ok(())
}

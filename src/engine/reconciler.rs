use std::time::Instant;

use tracing::info;

use crate::engine::{aggregate, apply_suspense_adjustment, compute_closing, filter_active, merge, summarize};
use crate::models::{Account, ReconcileError, TransactionRecord, TrialBalanceTable, ValidationReport};
use crate::storage::TableStorage;
use crate::types::AccountCode;

pub const DEFAULT_SUSPENSE_CODE: &str = "1101105";

/// What to do when the suspense account is not among the opening balances.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingSuspensePolicy {
    /// Abort the run with [`ReconcileError::MissingSuspenseAccount`].
    #[default]
    Error,
    /// Log a warning and leave the table unadjusted.
    Skip
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileConfig {
    pub suspense_code: AccountCode,
    pub missing_suspense: MissingSuspensePolicy
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            suspense_code: DEFAULT_SUSPENSE_CODE.to_string(),
            missing_suspense: MissingSuspensePolicy::default()
        }
    }
}

/// Output of a single reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub table: TrialBalanceTable,
    pub report: ValidationReport
}

/// Builds a trial balance from opening balances and one period's bank transactions.
#[derive(Debug, Default)]
pub struct Reconciler {
    config: ReconcileConfig
}

impl Reconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suspense_code(mut self, code: impl Into<AccountCode>) -> Self {
        self.config.suspense_code = code.into();
        self
    }

    pub fn with_missing_suspense(mut self, policy: MissingSuspensePolicy) -> Self {
        self.config.missing_suspense = policy;
        self
    }

    /// Runs every stage over fully loaded inputs. Deterministic for identical inputs.
    pub fn reconcile(&self, accounts: &[Account], transactions: &[TransactionRecord]) -> Result<Reconciliation, ReconcileError> {
        let (movements, totals) = aggregate(transactions)?;

        info!(
            "Period movement: dr {}, cr {} over {} account codes",
            totals.total_movement_dr, totals.total_movement_cr, movements.len()
        );

        let rows = merge(accounts, &movements);
        let rows = apply_suspense_adjustment(rows, &totals, &self.config.suspense_code, self.config.missing_suspense)?;
        let rows = compute_closing(rows)?;
        let rows = filter_active(rows);
        let (table, report) = summarize(rows)?;

        Ok(Reconciliation { table, report })
    }

    /// Loads both input tables, reconciles them and persists the resulting table.
    pub fn run<S: TableStorage>(&self, storage: &S) -> anyhow::Result<Reconciliation> {
        let timer = Instant::now();

        let accounts = storage.load_accounts()?;
        let transactions = storage.load_transactions()?;

        info!("Loaded {} accounts and {} transaction lines", accounts.len(), transactions.len());

        let reconciliation = self.reconcile(&accounts, &transactions)?;
        storage.save_trial_balance(&reconciliation.table)?;

        let subtotal = reconciliation.table.subtotal();

        info!(
            "Wrote {} active accounts plus subtotal in {:?}, closing dr {} cr {}",
            reconciliation.table.rows().len(), timer.elapsed(), subtotal.closing_dr, subtotal.closing_cr
        );

        Ok(reconciliation)
    }
}

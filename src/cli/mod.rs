#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::engine::{MissingSuspensePolicy, DEFAULT_SUSPENSE_CODE};
use crate::storage::CsvStorage;

/// Build a period trial balance from opening balances and bank transactions
#[derive(Parser, Debug)]
#[command(name = "trial-balance-reconciler")]
#[command(about = "Build a period trial balance from opening balances and bank transactions", long_about = None)]
pub struct Args {
    /// Opening balance CSV (code,name,opening_dr,opening_cr)
    #[arg(long, value_name = "FILE", default_value = "opening-balance.csv")]
    pub accounts: PathBuf,

    /// Bank transaction CSV (code,movement_dr,movement_cr)
    #[arg(long, value_name = "FILE", default_value = "bank-mandiri.csv")]
    pub transactions: PathBuf,

    /// Where the trial balance CSV is written
    #[arg(long, value_name = "FILE", default_value = "trial_balance.csv")]
    pub output: PathBuf,

    /// Account that absorbs the inverse of the period's postings
    #[arg(long, value_name = "CODE", default_value = DEFAULT_SUSPENSE_CODE)]
    pub suspense_code: String,

    /// Label of the movement category in the report
    #[arg(long, value_name = "LABEL", default_value = "Mandiri")]
    pub source_label: String,

    /// Continue without adjustment when the suspense account is missing
    #[arg(long)]
    pub allow_missing_suspense: bool,

    /// Exit with status 2 when any category is not balanced
    #[arg(long)]
    pub fail_on_imbalance: bool,

    /// Do not print the report to stdout
    #[arg(long, short)]
    pub quiet: bool,

    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", default_value = "error", value_parser = parse_log_level)]
    pub log_level: LevelFilter
}

impl Args {
    pub fn missing_suspense_policy(&self) -> MissingSuspensePolicy {
        if self.allow_missing_suspense {
            MissingSuspensePolicy::Skip
        } else {
            MissingSuspensePolicy::Error
        }
    }

    pub fn storage(&self) -> CsvStorage {
        CsvStorage::new(&self.accounts, &self.transactions, &self.output)
    }
}

pub fn parse_log_level(level: &str) -> Result<LevelFilter, String> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        "off" => Ok(LevelFilter::OFF),
        _ => Err(format!("invalid log level '{level}', expected one of: error, warn, info, debug, trace, off"))
    }
}

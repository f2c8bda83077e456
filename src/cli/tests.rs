use super::{parse_log_level, Args};

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;

use crate::engine::{MissingSuspensePolicy, DEFAULT_SUSPENSE_CODE};

#[test]
fn test_args_default_to_original_file_names() -> Result<()> {
    let args = Args::try_parse_from(["trial-balance-reconciler"])?;

    assert_eq!(args.accounts, Path::new("opening-balance.csv"));
    assert_eq!(args.transactions, Path::new("bank-mandiri.csv"));
    assert_eq!(args.output, Path::new("trial_balance.csv"));
    assert_eq!(args.suspense_code, DEFAULT_SUSPENSE_CODE);
    assert_eq!(args.source_label, "Mandiri");
    assert_eq!(args.log_level, LevelFilter::ERROR);
    assert!(!args.quiet);
    assert!(!args.fail_on_imbalance);
    assert_eq!(args.missing_suspense_policy(), MissingSuspensePolicy::Error);

    Ok(())
}

#[test]
fn test_args_select_suspense_handling() -> Result<()> {
    let args = Args::try_parse_from([
        "trial-balance-reconciler",
        "--suspense-code", "0110",
        "--allow-missing-suspense",
        "--log-level", "DEBUG",
    ])?;

    assert_eq!(args.suspense_code, "0110");
    assert_eq!(args.missing_suspense_policy(), MissingSuspensePolicy::Skip);
    assert_eq!(args.log_level, LevelFilter::DEBUG);

    Ok(())
}

#[test]
fn test_args_reject_unknown_log_level() {
    assert!(Args::try_parse_from(["trial-balance-reconciler", "--log-level", "loud"]).is_err());
}

#[test]
fn test_parse_log_level_accepts_every_level() -> Result<()> {
    let test_cases = vec![
        ("trace", LevelFilter::TRACE),
        ("debug", LevelFilter::DEBUG),
        ("Info", LevelFilter::INFO),
        ("warn", LevelFilter::WARN),
        ("error", LevelFilter::ERROR),
        ("off", LevelFilter::OFF),
    ];

    for (input, expected) in test_cases {
        assert_eq!(parse_log_level(input).map_err(anyhow::Error::msg)?, expected);
    }

    Ok(())
}

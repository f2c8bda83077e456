mod cli;
mod engine;
mod models;
mod report;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter};
use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::cli::Args;
use crate::engine::Reconciler;

const IMBALANCE_EXIT_CODE: i32 = 2;

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.log_level);

    let storage = args.storage();
    let reconciler = Reconciler::new()
        .with_suspense_code(args.suspense_code.as_str())
        .with_missing_suspense(args.missing_suspense_policy());

    let reconciliation = reconciler.run(&storage)
        .with_context(|| format!("Failed to reconcile [{}] against [{}]", args.accounts.display(), args.transactions.display()))
        .inspect_err(|failure| error!("{failure:#}"))?;

    info!("Trial balance written to [{}]", storage.output_path().display());

    if !args.quiet {
        let mut output = BufWriter::new(stdout().lock());
        report::render(&mut output, &reconciliation, &args.source_label)?;
    }

    if !reconciliation.report.is_balanced() {
        warn!("Trial balance is not balanced");

        if args.fail_on_imbalance {
            exit(IMBALANCE_EXIT_CODE);
        }
    }

    Ok(())
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the report, logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}


use std::io::{self, Write};

use crate::engine::Reconciliation;
use crate::models::ValidationRecord;

const COLUMN_GAP: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right
}

/// Renders the balance status and the trial balance as plain-text tables.
///
/// Amounts are shown in whole units with thousands separators. `source_label` names the
/// movement category after the transaction source, e.g. the bank.
pub fn render<W: Write>(output: &mut W, reconciliation: &Reconciliation, source_label: &str) -> io::Result<()> {
    writeln!(output, "Balance Status")?;

    let report = &reconciliation.report;
    let status_rows = vec![
        status_row(&report.opening().category.to_string(), report.opening()),
        status_row(source_label, report.movement()),
        status_row(&report.closing().category.to_string(), report.closing()),
    ];

    write_table(
        output,
        &[("Category", Align::Left), ("Debit", Align::Right), ("Credit", Align::Right), ("Status", Align::Left)],
        &status_rows
    )?;

    writeln!(output)?;
    writeln!(output, "Trial Balance")?;

    let balance_rows: Vec<Vec<String>> = reconciliation.table.iter()
        .map(|row| vec![
            row.code.clone(),
            row.name.clone(),
            row.opening_dr.to_grouped_string(),
            row.opening_cr.to_grouped_string(),
            row.movement_dr.to_grouped_string(),
            row.movement_cr.to_grouped_string(),
            row.closing_dr.to_grouped_string(),
            row.closing_cr.to_grouped_string(),
        ])
        .collect();

    write_table(
        output,
        &[
            ("code", Align::Left),
            ("name", Align::Left),
            ("opening_dr", Align::Right),
            ("opening_cr", Align::Right),
            ("movement_dr", Align::Right),
            ("movement_cr", Align::Right),
            ("closing_dr", Align::Right),
            ("closing_cr", Align::Right),
        ],
        &balance_rows
    )?;

    output.flush()
}

fn status_row(label: &str, record: &ValidationRecord) -> Vec<String> {
    let status = if record.balanced { "Balanced" } else { "Not Balanced" };

    vec![
        label.to_string(),
        record.debit_total.to_grouped_string(),
        record.credit_total.to_grouped_string(),
        status.to_string(),
    ]
}

fn write_table<W: Write>(output: &mut W, columns: &[(&str, Align)], rows: &[Vec<String>]) -> io::Result<()> {
    let widths: Vec<usize> = columns.iter()
        .enumerate()
        .map(|(index, (header, _))| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let headers: Vec<String> = columns.iter().map(|(header, _)| header.to_string()).collect();
    write_line(output, columns, &widths, &headers)?;

    for row in rows {
        write_line(output, columns, &widths, row)?;
    }

    Ok(())
}

fn write_line<W: Write>(output: &mut W, columns: &[(&str, Align)], widths: &[usize], cells: &[String]) -> io::Result<()> {
    let line = columns.iter()
        .zip(widths.iter().copied())
        .zip(cells)
        .map(|(((_, align), width), cell)| match align {
            Align::Left => format!("{cell:<width$}"),
            Align::Right => format!("{cell:>width$}")
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);

    writeln!(output, "{}", line.trim_end())
}

//! Ledger export: spreadsheet bytes or a short textual summary.

use std::fmt::Write as _;

use thiserror::Error;

use sealtrack_ledger::{GroupKey, Ledger, Measure, daily_average, top_n};
use sealtrack_store::ledger::LEDGER_HEADER;

/// Requested download shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Tabular CSV with the fixed ledger schema, header row included.
    Spreadsheet,
    /// Short human-readable production report.
    Summary,
}

/// Failure while rendering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv codec failure: {0}")]
    Csv(#[from] csv::Error),

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Render `ledger` into a byte stream in `format`.
pub fn export(ledger: &Ledger, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
    match format {
        ExportFormat::Spreadsheet => spreadsheet(ledger),
        ExportFormat::Summary => Ok(summary(ledger).into_bytes()),
    }
}

fn spreadsheet(ledger: &Ledger) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(LEDGER_HEADER)?;
    for record in ledger {
        writer.serialize(record)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(bytes)
}

/// The home-screen statistics block: record count, total and average daily
/// production, top 3 companies and operators.
fn summary(ledger: &Ledger) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Production Summary");
    let _ = writeln!(out, "==================");
    let _ = writeln!(out, "Records: {}", ledger.len());

    let total: i64 = ledger.iter().map(|r| r.seal_count).sum();
    let _ = writeln!(out, "Total seals: {total}");

    match daily_average(ledger) {
        Some(avg) => {
            let _ = writeln!(out, "Average daily production: {avg:.2} seals");
        }
        None => {
            let _ = writeln!(out, "No data available.");
            return out;
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Top 3 companies by production:");
    for (company, count) in top_n(ledger, GroupKey::Company, 3, Measure::SealCount) {
        let _ = writeln!(out, "  {company}: {count:.0}");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Top 3 operators by production:");
    for (operator, count) in top_n(ledger, GroupKey::Operator, 3, Measure::SealCount) {
        let _ = writeln!(out, "  {operator}: {count:.0}");
    }

    out
}

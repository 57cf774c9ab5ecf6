use std::path::{Path, PathBuf};

use log::info;

use crate::data;
use crate::errors::SummaryResult;
use crate::models::SummaryTable;
use crate::traits::Document;

/// Materialize the summary table inside `doc` and persist it to `path`.
///
/// The single linear pass: title paragraph, header row, one data row per
/// indicator/answer pair with a textual 1-based row number, then a one-time
/// save. Returns the output path on success; a save failure propagates
/// unrecovered.
pub fn build_and_save<D: Document>(
    doc: &mut D,
    table: &SummaryTable,
    path: &Path,
) -> SummaryResult<PathBuf> {
    info!("Building summary table with {} rows", table.len());

    doc.add_paragraph(data::TITLE);

    // Header row first; data rows are appended one at a time below.
    doc.add_table(1, data::HEADERS.len());
    for (col, header) in data::HEADERS.iter().enumerate() {
        doc.set_cell_text(0, col, header)?;
    }

    for row in table.rows() {
        doc.add_row()?;
        doc.set_cell_text(row.number, 0, &row.number.to_string())?;
        doc.set_cell_text(row.number, 1, &row.indicator)?;
        doc.set_cell_text(row.number, 2, &row.answer)?;
    }

    doc.save(path)?;
    info!("Summary document saved to {}", path.display());

    Ok(path.to_path_buf())
}

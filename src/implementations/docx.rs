use std::fs::File;
use std::path::Path;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use log::debug;

use crate::errors::{SummaryError, SummaryResult};
use crate::traits::Document;

/// Document model backed by the `docx-rs` crate.
///
/// Paragraphs and the table grid are buffered in memory; the .docx is
/// materialized and written only inside `save`, so the output file handle is
/// scoped to that call.
#[derive(Debug, Default)]
pub struct DocxDocument {
    paragraphs: Vec<String>,
    grid: Vec<Vec<String>>,
}

impl DocxDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current table content, row-major. Exposed for inspection in tests.
    pub fn grid(&self) -> &[Vec<String>] {
        &self.grid
    }

    fn cell(cell_text: &str) -> TableCell {
        // One paragraph per line, matching how the reference document lays
        // out multi-line answers.
        let mut cell = TableCell::new();
        for line in cell_text.split('\n') {
            cell = cell.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
        }
        cell
    }
}

impl Document for DocxDocument {
    fn add_paragraph(&mut self, text: &str) {
        self.paragraphs.push(text.to_string());
    }

    fn add_table(&mut self, rows: usize, cols: usize) {
        self.grid = vec![vec![String::new(); cols]; rows];
    }

    fn add_row(&mut self) -> SummaryResult<()> {
        let cols = match self.grid.first() {
            Some(row) => row.len(),
            None => return Err(SummaryError::MissingTable { operation: "add_row" }),
        };
        self.grid.push(vec![String::new(); cols]);
        Ok(())
    }

    fn set_cell_text(&mut self, row: usize, col: usize, text: &str) -> SummaryResult<()> {
        let cell = self
            .grid
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(SummaryError::CellOutOfBounds { row, col })?;
        *cell = text.to_string();
        Ok(())
    }

    fn save(&mut self, path: &Path) -> SummaryResult<()> {
        debug!(
            "Packing docx with {} paragraph(s) and a {}-row table to {}",
            self.paragraphs.len(),
            self.grid.len(),
            path.display()
        );

        let mut docx = Docx::new();
        for text in &self.paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)));
        }

        if !self.grid.is_empty() {
            let rows = self
                .grid
                .iter()
                .map(|row| TableRow::new(row.iter().map(|c| Self::cell(c)).collect()))
                .collect();
            docx = docx.add_table(Table::new(rows));
        }

        let file = File::create(path)?;
        docx.build()
            .pack(file)
            .map_err(|e| SummaryError::Document(e.to_string()))?;

        Ok(())
    }
}

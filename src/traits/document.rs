use std::path::Path;

use crate::errors::SummaryResult;

/// Minimal capability set the summary builder needs from a document model:
/// a title paragraph, one grid table, and a one-time save.
///
/// Rows and columns are 0-indexed. A document holds at most one table; calling
/// `add_table` again replaces it.
pub trait Document {
    /// Append a plain paragraph of free text.
    fn add_paragraph(&mut self, text: &str);

    /// Create the table with the given initial row and column count. Cells
    /// start empty.
    fn add_table(&mut self, rows: usize, cols: usize);

    /// Append one empty row to the table.
    fn add_row(&mut self) -> SummaryResult<()>;

    /// Set the text of one cell.
    fn set_cell_text(&mut self, row: usize, col: usize, text: &str) -> SummaryResult<()>;

    /// Persist the document to `path`, overwriting any existing file.
    fn save(&mut self, path: &Path) -> SummaryResult<()>;
}

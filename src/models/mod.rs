pub mod summary;

// Re-export common model types
pub use summary::{SummaryRow, SummaryTable};

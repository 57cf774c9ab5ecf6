pub mod data;
pub mod errors;
pub mod implementations;
pub mod models;
pub mod traits;

// Re-export core components
pub use errors::{SummaryError, SummaryResult};
pub use implementations::docx::DocxDocument;
pub use implementations::summary_builder::build_and_save;
pub use models::{SummaryRow, SummaryTable};
pub use traits::Document;

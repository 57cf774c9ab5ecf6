pub mod document;

// Re-export traits
pub use document::Document;

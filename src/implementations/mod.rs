pub mod docx;
pub mod summary_builder;

use anyhow::Result;
use std::path::Path;

use paper_summary::data;
use paper_summary::implementations::summary_builder::build_and_save;
use paper_summary::models::SummaryTable;
use paper_summary::DocxDocument;

use crate::cli::ui;

/// Build command: transcribe the embedded review data into the summary
/// document and write it out.
pub fn execute(output_path: Option<&Path>) -> Result<()> {
    ui::print_header("Building Summary Document");

    let table = SummaryTable::from_pairs(&data::INDICATORS, &data::ANSWERS);
    ui::print_info(format!("Loaded {} indicator/answer pairs", table.len()).as_str());

    let output_path = output_path.unwrap_or_else(|| Path::new(data::DEFAULT_OUTPUT));

    let spinner = ui::spinner_with_message("Writing summary document...");
    let mut doc = DocxDocument::new();
    let saved_path = build_and_save(&mut doc, &table, output_path)?;
    spinner.finish_with_message("Document written!");

    ui::print_result("Rows", &format!("{} data rows + header", table.len()));
    ui::print_success(format!("Summary saved to {}", saved_path.display()).as_str());

    Ok(())
}

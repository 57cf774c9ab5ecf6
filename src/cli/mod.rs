use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "paper-summary",
    about = "Formats literary-review indicator/answer pairs into a summary table document",
    version,
    author,
    long_about = None
)]
pub struct SummaryCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the summary document from the embedded review data
    Build {
        /// Output file for the document
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

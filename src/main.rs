use clap::Parser;
use log::info;

mod cli;
use cli::{Commands, SummaryCli};

fn main() {
    // Parse the command line arguments
    let cli = SummaryCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Handle commands
    match &cli.command {
        Commands::Build { output } => {
            if let Err(e) = cli::commands::build::execute(output.as_deref()) {
                cli::ui::print_error(&format!("{:#}", e));
                std::process::exit(1);
            }
        }
    }
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}

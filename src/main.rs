// src/main.rs

use clap::Parser;
use export_notion_pages::{
    AppError, CommandLineInput, ExportConfig, ExportSummary, Exporter, NotionHttpClient,
};
use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;

/// Sets up logging configuration.
fn setup_logging(verbose: bool) -> anyhow::Result<()> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file_path = std::env::temp_dir().join("export_notion_pages.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stdout")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Runs a full export against the live API.
async fn run_export(config: &ExportConfig) -> Result<ExportSummary, AppError> {
    let backend = NotionHttpClient::new(&config.api_key, &config.http)?;
    let exporter = Exporter::new(&backend, config);
    exporter.run().await
}

fn report_completion(summary: &ExportSummary, config: &ExportConfig) {
    if summary.pages_skipped > 0 {
        println!(
            "Skipped {} row(s) without a title property.",
            summary.pages_skipped
        );
    }
    println!(
        "Exported {} page(s) ({} bytes) to {}",
        summary.pages_exported,
        summary.bytes_written,
        config.output_dir.display()
    );
}

#[tokio::main]
async fn main() {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = match ExportConfig::resolve(cli) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    match run_export(&config).await {
        Ok(summary) => report_completion(&summary, &config),
        Err(e) => {
            log::error!("Export failed: {}", e);
            std::process::exit(1);
        }
    }
}

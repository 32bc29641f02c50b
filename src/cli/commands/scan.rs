//! Scan command implementation
//!
//! This module implements the `scan` command: run detection and conflict
//! resolution over the inputs without rewriting anything, and print a
//! report of what would be redacted.

use crate::config::load_config_or_default;
use crate::extract::extract_text;
use crate::redaction::{PiiType, RedactionEngine, ScanReport};
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Input files to scan
    #[arg(required_unless_present = "text")]
    pub inputs: Vec<PathBuf>,

    /// Scan a literal string instead of files
    #[arg(long, conflicts_with = "inputs")]
    pub text: Option<String>,

    /// Override enabled PII types (comma-separated: email,phone,name,address)
    #[arg(long)]
    pub types: Option<String>,

    /// Print the report as JSON instead of the console format
    #[arg(long)]
    pub json: bool,

    /// Write the JSON report to a file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting scan command");

        let mut config = load_config_or_default(config_path)?;

        if let Some(ref types) = self.types {
            let parsed: Result<Vec<PiiType>, String> =
                types.split(',').map(|s| s.trim().parse()).collect();
            match parsed {
                Ok(parsed) => config.redaction.enabled_types = parsed,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return Ok(2);
                }
            }
        }

        let engine = match RedactionEngine::with_region(
            config.redaction.to_options(),
            config.redaction.phone_region,
        ) {
            Ok(engine) => engine,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(2);
            }
        };

        let mut report = ScanReport::new();

        if let Some(ref text) = self.text {
            let start = Instant::now();
            match engine.scan(text) {
                Ok(matches) => {
                    report.add_document("<inline>", &matches, start.elapsed().as_millis() as u64);
                }
                Err(e) => report.add_warning(format!("<inline>: {e}")),
            }
        }

        for input in &self.inputs {
            let start = Instant::now();
            let matches = extract_text(input).and_then(|text| engine.scan(&text));

            match matches {
                Ok(matches) => {
                    report.add_document(
                        &input.display().to_string(),
                        &matches,
                        start.elapsed().as_millis() as u64,
                    );
                }
                Err(e) => {
                    tracing::error!(input = %input.display(), error = %e, "Scan failed");
                    report.add_warning(format!("{}: {}", input.display(), e));
                }
            }
        }

        if self.json {
            println!("{}", report.format_json()?);
        } else {
            print!("{}", report.format_console());
        }

        if let Some(ref output) = self.output {
            report.write_to_file(output)?;
            println!("Report written to {}", output.display());
        }

        if report.warnings.is_empty() {
            Ok(0)
        } else {
            Ok(1) // Partial failure exit code
        }
    }
}

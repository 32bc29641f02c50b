//! Redact command implementation
//!
//! This module implements the `redact` command: extract text from the given
//! files (or take inline text), run the redaction engine, and write the
//! redacted output.

use crate::config::load_config_or_default;
use crate::extract::extract_text;
use crate::redaction::{PiiType, RedactionEngine, RedactionStyle};
use clap::Args;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Input files to redact
    #[arg(required_unless_present = "text")]
    pub inputs: Vec<PathBuf>,

    /// Redact a literal string instead of files
    #[arg(long, conflicts_with = "inputs")]
    pub text: Option<String>,

    /// Output path (single input only; default: <name>.redacted.<ext>)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override enabled PII types (comma-separated: email,phone,name,address)
    #[arg(long)]
    pub types: Option<String>,

    /// Override redaction style (mask or label)
    #[arg(long)]
    pub style: Option<String>,

    /// Print the full redaction result as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!("Starting redact command");

        let mut config = load_config_or_default(config_path)?;

        // Apply CLI overrides
        if let Some(ref types) = self.types {
            let parsed: Result<Vec<PiiType>, String> =
                types.split(',').map(|s| s.trim().parse()).collect();
            match parsed {
                Ok(parsed) => {
                    tracing::info!(types = ?parsed, "Overriding enabled types from CLI");
                    config.redaction.enabled_types = parsed;
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    return Ok(2);
                }
            }
        }

        if let Some(ref style) = self.style {
            match style.parse::<RedactionStyle>() {
                Ok(style) => {
                    tracing::info!(style = %style, "Overriding redaction style from CLI");
                    config.redaction.style = style;
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    return Ok(2);
                }
            }
        }

        if self.output.is_some() && self.inputs.len() > 1 {
            eprintln!("Error: --output can only be used with a single input file");
            return Ok(2);
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

        // Inline text mode
        if let Some(ref text) = self.text {
            let result = engine.redact(text)?;
            if self.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.redacted_text);
            }
            return Ok(0);
        }

        // File mode: one bad file must not abort the rest
        let mut failures = 0usize;
        for input in &self.inputs {
            crate::log_redaction_start!(input.display());
            let start = Instant::now();

            match self.redact_file(&engine, input) {
                Ok((output_path, matches)) => {
                    crate::log_redaction_complete!(matches, start.elapsed());
                    println!(
                        "✅ {} → {} ({} matches)",
                        input.display(),
                        output_path.display(),
                        matches
                    );
                }
                Err(e) => {
                    tracing::error!(input = %input.display(), error = %e, "Redaction failed");
                    println!("❌ {}: {}", input.display(), e);
                    failures += 1;
                }
            }
        }

        if failures == 0 {
            Ok(0)
        } else if failures < self.inputs.len() {
            Ok(1) // Partial failure exit code
        } else {
            Ok(5) // Fatal error exit code
        }
    }

    /// Redact a single file, returning the output path and match count
    fn redact_file(
        &self,
        engine: &RedactionEngine,
        input: &Path,
    ) -> anyhow::Result<(PathBuf, usize)> {
        let text = extract_text(input)?;
        let result = engine.redact(&text)?;

        let output_path = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input));

        if self.json {
            std::fs::write(&output_path, serde_json::to_string_pretty(&result)?)?;
        } else {
            std::fs::write(&output_path, &result.redacted_text)?;
        }

        Ok((output_path, result.total_matches()))
    }
}

/// Derive the default output path: `letter.txt` → `letter.redacted.txt`
fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");

    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}.redacted.{ext}"),
        None => format!("{stem}.redacted"),
    };

    input.with_file_name(name)
}

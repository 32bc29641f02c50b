//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "cloak.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Cloak configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: cloak validate-config");
                println!("  3. Scan a file: cloak scan document.txt");
                println!("  4. Redact it: cloak redact document.txt");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Cloak Configuration File
# PII detection and redaction tool

[application]
name = "cloak"
log_level = "info"

[redaction]
# PII types to detect: EMAIL, PHONE, NAME, ADDRESS
enabled_types = ["EMAIL", "PHONE", "NAME", "ADDRESS"]

# Redaction style:
#   label - typed numbered placeholders: [EMAIL1], [PHONE1], ...
#   mask  - length-preserving filler characters
style = "label"

# Filler character for the mask style
mask_char = "█"

# Default region for phone numbers without a country code
# One of: US, GB, DE, FR, IN, AU
phone_region = "US"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"  # daily | hourly | never
"#
        .to_string()
    }
}

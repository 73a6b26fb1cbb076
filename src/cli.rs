//! CLI interface for placement prep

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "placement-prep")]
#[command(about = "Rule-based interview readiness analysis for job descriptions")]
#[command(long_about = "Detect skills in a job description, predict interview rounds, and build a 7-day prep plan, checklist, questions and readiness score")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a job description
    Analyze {
        /// Company name
        #[arg(long, default_value = "")]
        company: String,

        /// Role title
        #[arg(long, default_value = "")]
        role: String,

        /// Path to job description file (TXT, MD, PDF)
        #[arg(short, long, conflicts_with = "text")]
        jd: Option<PathBuf>,

        /// Job description text (read from stdin when neither --jd nor --text is given)
        #[arg(short, long)]
        text: Option<String>,

        /// Output format: console, json, markdown, html, text
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Do not add the analysis to history
        #[arg(long)]
        no_store: bool,

        /// Skip the processing delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Browse and manage saved analyses
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Rate your confidence in detected skills and update the score
    Rate {
        /// Analysis id (or unique prefix)
        id: String,

        /// Skills you already know
        #[arg(long = "know", value_name = "SKILL")]
        know: Vec<String>,

        /// Skills you still need to practice
        #[arg(long = "practice", value_name = "SKILL")]
        practice: Vec<String>,

        /// Skills to flip between know and practice
        #[arg(long = "toggle", value_name = "SKILL")]
        toggle: Vec<String>,
    },

    /// Export a saved analysis
    Export {
        /// Analysis id (or unique prefix); latest when omitted
        id: Option<String>,

        /// Output format: console, json, markdown, html, text
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List the skill vocabulary
    Skills,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved analyses, newest first
    List,

    /// Show one analysis
    Show {
        /// Analysis id (or unique prefix); latest when omitted
        id: Option<String>,

        /// Output format: console, json, markdown, html, text
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Remove one analysis
    Remove {
        /// Analysis id (or unique prefix)
        id: String,
    },

    /// Remove all analyses
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file path
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "analysis.processing_delay_ms")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        "text" | "txt" => Ok(crate::config::OutputFormat::Text),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html, text", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

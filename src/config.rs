//! Configuration management for placement prep

use crate::error::{PrepError, Result};
use crate::storage::history::DEFAULT_HISTORY_KEY;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub history_key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Pause before analyzing, so the run feels like processing.
    pub processing_delay_ms: u64,
    /// JDs shorter than this still get analyzed, with a warning.
    pub min_jd_chars: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
    Text,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Console | OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("placement-prep");

        Self {
            storage: StorageConfig {
                data_dir,
                history_key: DEFAULT_HISTORY_KEY.to_string(),
            },
            analysis: AnalysisConfig {
                processing_delay_ms: 800,
                min_jd_chars: 200,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| PrepError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| PrepError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("placement-prep")
            .join("config.toml")
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.storage.data_dir
    }

    /// Set one scalar value by dotted key, e.g. `analysis.processing_delay_ms`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage.data_dir" => self.storage.data_dir = PathBuf::from(value),
            "storage.history_key" => {
                if value.trim().is_empty() {
                    return Err(PrepError::Configuration("history_key cannot be empty".to_string()));
                }
                self.storage.history_key = value.to_string();
            }
            "analysis.processing_delay_ms" => {
                self.analysis.processing_delay_ms = parse_value(key, value)?;
            }
            "analysis.min_jd_chars" => self.analysis.min_jd_chars = parse_value(key, value)?,
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value)
                    .map_err(PrepError::Configuration)?;
            }
            "output.detailed" => self.output.detailed = parse_value(key, value)?,
            "output.color_output" => self.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(PrepError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| PrepError::Configuration(format!("Invalid value for {}: {}", key, value)))
}

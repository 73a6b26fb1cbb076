//! Error handling for the placement prep application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis not found: {0}")]
    EntryNotFound(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("Command failed: {0}")]
    Command(String),
}

pub type Result<T> = std::result::Result<T, PrepError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for PrepError {
    fn from(err: anyhow::Error) -> Self {
        PrepError::Command(format!("{:#}", err))
    }
}

impl From<askama::Error> for PrepError {
    fn from(err: askama::Error) -> Self {
        PrepError::OutputFormatting(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_conversions() {
        let err: PrepError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, PrepError::Command(ref msg) if msg == "boom"));

        let err: PrepError = Err::<(), _>(PrepError::Storage("disk full".to_string()))
            .context("Failed to write configuration")
            .unwrap_err()
            .into();
        match err {
            PrepError::Command(msg) => {
                assert!(msg.starts_with("Failed to write configuration: "));
                assert!(msg.contains("disk full"));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let err: PrepError = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(err.to_string().starts_with("Serialization error"));

        let err = PrepError::EntryNotFound("abc".to_string());
        assert_eq!(err.to_string(), "Analysis not found: abc");
    }
}

//! Input manager for loading job descriptions

use crate::error::{PrepError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{debug, info};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use unicode_segmentation::UnicodeSegmentation;

/// Where the job description comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum JdSource {
    File(PathBuf),
    Text(String),
    Stdin,
}

/// Size of a job description as the user sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JdStats {
    pub chars: usize,
    pub words: usize,
    pub lines: usize,
}

impl JdStats {
    pub fn of(text: &str) -> Self {
        Self {
            chars: text.chars().count(),
            words: text.unicode_words().count(),
            lines: text.lines().filter(|line| !line.trim().is_empty()).count(),
        }
    }

    pub fn is_short(&self, min_chars: usize) -> bool {
        self.chars < min_chars
    }
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Load JD text from any source. Blank text is rejected.
    pub async fn load(&mut self, source: &JdSource) -> Result<String> {
        let text = match source {
            JdSource::File(path) => self.extract_text(path).await?,
            JdSource::Text(text) => text.clone(),
            JdSource::Stdin => {
                info!("Reading job description from stdin");
                let mut buffer = String::new();
                tokio::io::stdin().read_to_string(&mut buffer).await?;
                buffer
            }
        };

        if text.trim().is_empty() {
            return Err(PrepError::InvalidInput(
                "Job description is empty. Paste the full JD to analyze it.".to_string(),
            ));
        }

        debug!("Loaded job description: {:?}", JdStats::of(&text));
        Ok(text)
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(PrepError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let file_type = self.detect_file_type(path)?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            },
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            },
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            },
            FileType::Unknown => {
                return Err(PrepError::UnsupportedFormat(
                    format!("Unsupported file type for: {}", path.display())
                ));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        FileType::from_path(path).ok_or_else(|| {
            PrepError::InvalidInput(format!("File has no extension: {}", path.display()))
        })
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats() {
        let stats = JdStats::of("Java developer\n\n  Spring Boot, SQL ");
        assert_eq!(stats.words, 5);
        assert_eq!(stats.lines, 2);
        assert!(stats.is_short(200));
        assert!(!stats.is_short(10));
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let mut manager = InputManager::new();
        let result = manager.load(&JdSource::Text("   \n ".to_string())).await;
        assert!(matches!(result, Err(PrepError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_inline_text_passes_through() {
        let mut manager = InputManager::new();
        let text = manager.load(&JdSource::Text("React and SQL".to_string())).await.unwrap();
        assert_eq!(text, "React and SQL");
        assert_eq!(manager.cache_size(), 0);
    }
}

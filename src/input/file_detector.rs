//! File type detection for job description sources

use std::path::Path;

/// Extensions accepted for `--jd`.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "markdown", "pdf"];

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("markdown"), FileType::Markdown);
        assert_eq!(FileType::from_path(Path::new("jd.txt")), Some(FileType::Text));
        assert_eq!(FileType::from_path(Path::new("jd.docx")), Some(FileType::Unknown));
        assert_eq!(FileType::from_path(Path::new("jd")), None);
    }
}

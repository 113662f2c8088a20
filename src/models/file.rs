// file: src/models/file.rs
// description: cataloged file record and logical file type
// reference: internal data structures

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical document category inferred from a file extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileType {
    Pdf,
    Html,
    Doc,
    Txt,
    /// Any extension outside the fixed table, kept verbatim.
    Other(String),
}

impl FileType {
    pub fn from_extension(extension: &str) -> Self {
        let lower = extension.trim_start_matches('.').to_lowercase();
        match lower.as_str() {
            "pdf" => FileType::Pdf,
            "html" | "htm" => FileType::Html,
            "doc" | "docx" => FileType::Doc,
            "txt" => FileType::Txt,
            _ => FileType::Other(lower),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FileType::Pdf => "pdf",
            FileType::Html => "html",
            FileType::Doc => "doc",
            FileType::Txt => "txt",
            FileType::Other(ext) => ext.as_str(),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for FileType {
    fn from(value: String) -> Self {
        FileType::from_extension(&value)
    }
}

impl From<FileType> for String {
    fn from(value: FileType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogedFile {
    pub name: String,
    pub display_name: String,
    pub extension: String,
    pub file_type: FileType,
    pub size: Option<u64>,
    pub source_path: String,
    pub folder: String,
    pub subfolder: Option<String>,
    /// Date found in the filename. Serialized as `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
    pub url: String,
    pub html_url: Option<String>,
    pub sha: Option<String>,
    pub last_modified: Option<DateTime<Utc>>,
}

impl CatalogedFile {
    pub fn iso_date(&self) -> Option<String> {
        self.date.map(|d| d.format("%Y-%m-%d").to_string())
    }

    pub fn size_or_zero(&self) -> u64 {
        self.size.unwrap_or(0)
    }
}

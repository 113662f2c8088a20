// file: src/models/entry.rs
// description: directory listing entries returned by content providers
// reference: github contents api directory listing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Maps the contents api `type` field. Symlinks and submodules have no kind.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "file" => Some(EntryKind::File),
            "dir" => Some(EntryKind::Directory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "dir",
        }
    }
}

/// One immediate child of a listed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: String,
    pub kind: EntryKind,
    pub size: Option<u64>,
    pub last_modified: Option<DateTime<Utc>>,
    pub html_url: Option<String>,
    pub download_url: Option<String>,
    pub sha: Option<String>,
}

impl DirectoryEntry {
    pub fn file(path: &str, size: Option<u64>) -> Self {
        Self::new(path, EntryKind::File, size)
    }

    pub fn directory(path: &str) -> Self {
        Self::new(path, EntryKind::Directory, None)
    }

    fn new(path: &str, kind: EntryKind, size: Option<u64>) -> Self {
        let path = path.trim_matches('/');
        let name = path.rsplit('/').next().unwrap_or(path);

        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind,
            size,
            last_modified: None,
            html_url: None,
            download_url: None,
            sha: None,
        }
    }

    pub fn with_html_url(mut self, url: impl Into<String>) -> Self {
        self.html_url = Some(url.into());
        self
    }

    pub fn with_sha(mut self, sha: impl Into<String>) -> Self {
        self.sha = Some(sha.into());
        self
    }

    pub fn with_last_modified(mut self, timestamp: DateTime<Utc>) -> Self {
        self.last_modified = Some(timestamp);
        self
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_kind_mapping() {
        assert_eq!(EntryKind::from_wire("file"), Some(EntryKind::File));
        assert_eq!(EntryKind::from_wire("dir"), Some(EntryKind::Directory));
        assert_eq!(EntryKind::from_wire("symlink"), None);
        assert_eq!(EntryKind::from_wire("submodule"), None);
    }

    #[test]
    fn test_entry_name_from_path() {
        let entry = DirectoryEntry::file("articles/2025/report.pdf", Some(10));
        assert_eq!(entry.name, "report.pdf");
        assert_eq!(entry.path, "articles/2025/report.pdf");
        assert!(entry.is_file());

        let dir = DirectoryEntry::directory("/notes/");
        assert_eq!(dir.name, "notes");
        assert_eq!(dir.path, "notes");
        assert!(dir.is_dir());
    }
}

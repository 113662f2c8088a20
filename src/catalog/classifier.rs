// file: src/catalog/classifier.rs
// description: file classification, display names and record construction
// reference: extension table lookup with raw-extension fallback

use super::dates::extract_date;
use super::urls::UrlPolicy;
use crate::models::{CatalogedFile, DirectoryEntry, FileType};

pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["html", "htm", "pdf", "doc", "docx", "txt"];

/// Case-insensitive suffix check against the supported extensions.
pub fn is_supported(name: &str) -> bool {
    let lower = name.to_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

/// Lower-cased text after the last dot. Names without a dot return themselves.
pub fn file_extension(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

pub fn file_type(name: &str) -> FileType {
    FileType::from_extension(&file_extension(name))
}

/// Human label for a filename.
///
/// Drops the final extension, turns `-` and `_` into spaces and uppercases the first
/// character of every whitespace-delimited word. Everything else is left alone.
pub fn create_display_name(name: &str) -> String {
    let stem = match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() && !name[idx + 1..].contains('/') => &name[..idx],
        _ => name,
    };

    let mut display = String::with_capacity(stem.len());
    let mut word_start = true;

    for c in stem.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };

        if c.is_whitespace() {
            word_start = true;
            display.push(c);
        } else if word_start {
            word_start = false;
            display.extend(c.to_uppercase());
        } else {
            display.push(c);
        }
    }

    display
}

/// Part of a folder path below its top-level segment.
pub fn subfolder_of(folder: &str) -> Option<String> {
    folder
        .split_once('/')
        .map(|(_, rest)| rest.to_string())
        .filter(|rest| !rest.is_empty())
}

pub struct FileClassifier {
    urls: UrlPolicy,
}

impl FileClassifier {
    pub fn new(urls: UrlPolicy) -> Self {
        Self { urls }
    }

    pub fn urls(&self) -> &UrlPolicy {
        &self.urls
    }

    pub fn accepts(&self, entry: &DirectoryEntry) -> bool {
        entry.is_file() && is_supported(&entry.name)
    }

    /// Builds the catalog record for a file entry found in `folder`.
    /// Returns `None` for directories and unsupported extensions.
    pub fn classify(&self, entry: &DirectoryEntry, folder: &str) -> Option<CatalogedFile> {
        if !self.accepts(entry) {
            return None;
        }

        let extension = file_extension(&entry.name);

        Some(CatalogedFile {
            name: entry.name.clone(),
            display_name: create_display_name(&entry.name),
            file_type: FileType::from_extension(&extension),
            extension,
            size: entry.size,
            source_path: entry.path.clone(),
            folder: folder.to_string(),
            subfolder: subfolder_of(folder),
            date: extract_date(&entry.name),
            url: self.urls.file_url(folder, &entry.name),
            html_url: entry.html_url.clone(),
            sha: entry.sha.clone(),
            last_modified: entry.last_modified,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_display_name() {
        assert_eq!(
            create_display_name("2025-01-24-sample-article.html"),
            "2025 01 24 Sample Article"
        );
        assert_eq!(create_display_name("setup_guide.v2.pdf"), "Setup Guide.v2");
        assert_eq!(create_display_name("already Spaced.txt"), "Already Spaced");
        assert_eq!(create_display_name("mIxEd-case.doc"), "MIxEd Case");
    }

    #[test]
    fn test_display_name_without_extension() {
        assert_eq!(create_display_name("README"), "README");
        assert_eq!(create_display_name("trailing."), "Trailing.");
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported("report.PDF"));
        assert!(is_supported("page.htm"));
        assert!(is_supported("letter.docx"));
        assert!(!is_supported("photo.png"));
        assert!(!is_supported("pdf"));
    }

    #[test]
    fn test_file_type_resolution() {
        assert_eq!(file_type("a.html"), FileType::Html);
        assert_eq!(file_type("a.HTM"), FileType::Html);
        assert_eq!(file_type("a.docx"), FileType::Doc);
        assert_eq!(file_type("a.md"), FileType::Other("md".to_string()));
        assert_eq!(file_type("noext"), FileType::Other("noext".to_string()));
    }

    #[test]
    fn test_subfolder() {
        assert_eq!(subfolder_of("articles"), None);
        assert_eq!(subfolder_of("articles/2025/q1"), Some("2025/q1".to_string()));
    }

    #[test]
    fn test_classify_entry() {
        let classifier = FileClassifier::new(UrlPolicy::local("http://localhost:5000"));
        let entry = DirectoryEntry::file("articles/2025-01-24-sample-article.html", Some(2048))
            .with_sha("abc123");

        let file = classifier.classify(&entry, "articles").unwrap();

        assert_eq!(file.file_type, FileType::Html);
        assert_eq!(file.extension, "html");
        assert_eq!(file.display_name, "2025 01 24 Sample Article");
        assert_eq!(file.date, NaiveDate::from_ymd_opt(2025, 1, 24));
        assert_eq!(file.iso_date().as_deref(), Some("2025-01-24"));
        assert_eq!(
            file.url,
            "http://localhost:5000/articles/2025-01-24-sample-article.html"
        );
        assert_eq!(file.sha.as_deref(), Some("abc123"));
        assert_eq!(file.subfolder, None);
    }

    #[test]
    fn test_classify_skips_directories_and_unsupported() {
        let classifier = FileClassifier::new(UrlPolicy::local("http://localhost"));

        assert!(classifier
            .classify(&DirectoryEntry::directory("articles/archive.html"), "articles")
            .is_none());
        assert!(classifier
            .classify(&DirectoryEntry::file("articles/cover.jpg", Some(1)), "articles")
            .is_none());
    }
}

// file: src/query/filter.rs
// description: type filtering and text search over a discovered catalog
// reference: case-insensitive substring matching

use crate::error::HubError;
use crate::models::{CatalogedFile, FileType};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(FileType),
}

impl FromStr for TypeFilter {
    type Err = HubError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(TypeFilter::All),
            "pdf" => Ok(TypeFilter::Only(FileType::Pdf)),
            "html" => Ok(TypeFilter::Only(FileType::Html)),
            "doc" => Ok(TypeFilter::Only(FileType::Doc)),
            "txt" => Ok(TypeFilter::Only(FileType::Txt)),
            other => Err(HubError::InvalidQuery(format!(
                "file type '{}' (expected all, pdf, html, doc or txt)",
                other
            ))),
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::All => f.write_str("all"),
            TypeFilter::Only(file_type) => write!(f, "{}", file_type),
        }
    }
}

impl TypeFilter {
    pub fn matches(&self, file: &CatalogedFile) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(file_type) => &file.file_type == file_type,
        }
    }
}

pub fn filter_by_type(files: Vec<CatalogedFile>, filter: &TypeFilter) -> Vec<CatalogedFile> {
    if *filter == TypeFilter::All {
        return files;
    }
    files.into_iter().filter(|file| filter.matches(file)).collect()
}

/// True when the name or display name contains `needle`. `needle` must be lower-case.
pub fn matches_query(file: &CatalogedFile, needle: &str) -> bool {
    file.name.to_lowercase().contains(needle) || file.display_name.to_lowercase().contains(needle)
}

/// Keeps files whose name or display name contains the query, ignoring case.
/// A blank query keeps everything.
pub fn search(files: Vec<CatalogedFile>, query: &str) -> Vec<CatalogedFile> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return files;
    }

    files
        .into_iter()
        .filter(|file| matches_query(file, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::tests::sample_file;
    use pretty_assertions::assert_eq;

    fn catalog() -> Vec<CatalogedFile> {
        vec![
            sample_file("2025-01-24-budget-report.pdf", Some(100)),
            sample_file("meeting_notes.txt", Some(10)),
            sample_file("Roadmap.HTML", None),
            sample_file("letter.docx", Some(50)),
        ]
    }

    #[test]
    fn test_filter_all_is_identity() {
        let files = catalog();
        assert_eq!(filter_by_type(files.clone(), &TypeFilter::All), files);
    }

    #[test]
    fn test_filter_only_type() {
        let pdfs = filter_by_type(catalog(), &TypeFilter::Only(FileType::Pdf));
        assert_eq!(pdfs.len(), 1);
        assert!(pdfs.iter().all(|f| f.file_type == FileType::Pdf));

        let html = filter_by_type(catalog(), &"html".parse().unwrap());
        assert_eq!(html[0].name, "Roadmap.HTML");
    }

    #[test]
    fn test_type_filter_parse() {
        assert_eq!("ALL".parse::<TypeFilter>().unwrap(), TypeFilter::All);
        assert_eq!(
            "doc".parse::<TypeFilter>().unwrap(),
            TypeFilter::Only(FileType::Doc)
        );
        assert!("docx".parse::<TypeFilter>().is_err());
        assert_eq!(TypeFilter::Only(FileType::Txt).to_string(), "txt");
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let results = search(catalog(), "  BUDGET ");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "2025-01-24-budget-report.pdf");
    }

    #[test]
    fn test_search_matches_display_name() {
        // "meeting notes" only appears in the display name
        let results = search(catalog(), "meeting notes");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "meeting_notes.txt");
    }

    #[test]
    fn test_blank_search_is_noop() {
        assert_eq!(search(catalog(), "   "), catalog());
        assert_eq!(search(catalog(), ""), catalog());
    }
}

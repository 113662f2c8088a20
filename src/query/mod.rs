// file: src/query/mod.rs
// description: stateless search, filter and sort over a discovered catalog
// reference: internal module structure

pub mod filter;
pub mod sort;

pub use filter::{TypeFilter, filter_by_type, matches_query, search};
pub use sort::{SortOrder, sort_files};

use crate::models::CatalogedFile;

/// Search text, type filter and sort order applied together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileQuery {
    pub query: Option<String>,
    pub file_type: TypeFilter,
    pub sort: SortOrder,
}

impl FileQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_type(mut self, file_type: TypeFilter) -> Self {
        self.file_type = file_type;
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Search first, then the type filter, then sort.
    pub fn apply(&self, files: &[CatalogedFile]) -> Vec<CatalogedFile> {
        let mut results = files.to_vec();

        if let Some(query) = &self.query {
            results = search(results, query);
        }

        results = filter_by_type(results, &self.file_type);
        sort_files(results, self.sort)
    }
}

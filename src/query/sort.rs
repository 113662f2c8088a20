// file: src/query/sort.rs
// description: multi-key ordering of cataloged files
// reference: stable sort with dated-first tie-breaking

use crate::error::HubError;
use crate::models::CatalogedFile;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    DateDesc,
    DateAsc,
    NameAsc,
    NameDesc,
    SizeDesc,
    SizeAsc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::DateDesc => "date-desc",
            SortOrder::DateAsc => "date-asc",
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
            SortOrder::SizeDesc => "size-desc",
            SortOrder::SizeAsc => "size-asc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = HubError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "date-desc" => Ok(SortOrder::DateDesc),
            "date-asc" => Ok(SortOrder::DateAsc),
            "name-asc" => Ok(SortOrder::NameAsc),
            "name-desc" => Ok(SortOrder::NameDesc),
            "size-desc" => Ok(SortOrder::SizeDesc),
            "size-asc" => Ok(SortOrder::SizeAsc),
            other => Err(HubError::InvalidQuery(format!("sort order '{}'", other))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive name order, falling back to the raw names for a stable total order.
pub fn by_name(a: &CatalogedFile, b: &CatalogedFile) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Dated files always come first, whichever direction is requested.
/// Two undated files fall back to their names in the same direction.
fn by_date(a: &CatalogedFile, b: &CatalogedFile, newest_first: bool) -> Ordering {
    match (a.date, b.date) {
        (Some(x), Some(y)) if newest_first => y.cmp(&x),
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) if newest_first => by_name(b, a),
        (None, None) => by_name(a, b),
    }
}

pub fn compare(a: &CatalogedFile, b: &CatalogedFile, order: SortOrder) -> Ordering {
    match order {
        SortOrder::DateDesc => by_date(a, b, true),
        SortOrder::DateAsc => by_date(a, b, false),
        SortOrder::NameAsc => by_name(a, b),
        SortOrder::NameDesc => by_name(b, a),
        SortOrder::SizeDesc => b.size_or_zero().cmp(&a.size_or_zero()),
        SortOrder::SizeAsc => a.size_or_zero().cmp(&b.size_or_zero()),
    }
}

pub fn sort_files(mut files: Vec<CatalogedFile>, order: SortOrder) -> Vec<CatalogedFile> {
    files.sort_by(|a, b| compare(a, b, order));
    files
}

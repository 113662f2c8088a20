// file: src/provider/mock.rs
// description: in-memory content tree for offline use and tests
// reference: static directory listing keyed by path

use super::ContentProvider;
use crate::error::{HubError, Result};
use crate::models::DirectoryEntry;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct MockProvider {
    tree: HashMap<String, Vec<DirectoryEntry>>,
    failing: Mutex<HashSet<String>>,
    calls: AtomicUsize,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// The sample tree: an articles folder, a notes folder and a root index page.
    pub fn sample(origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        let published = Utc
            .with_ymd_and_hms(2025, 1, 24, 0, 0, 0)
            .single()
            .unwrap_or_default();

        let page = |path: &str, size: u64, sha: &str| {
            DirectoryEntry::file(path, Some(size))
                .with_html_url(format!("{}/{}", origin, path))
                .with_sha(sha)
                .with_last_modified(published)
        };

        Self::new()
            .with_folder(
                "",
                vec![
                    DirectoryEntry::directory("articles"),
                    DirectoryEntry::directory("notes"),
                    DirectoryEntry::file("index.html", None),
                ],
            )
            .with_folder(
                "articles",
                vec![
                    page("articles/2025-01-24-sample-article.html", 2048, "abc123"),
                    page("articles/index.html", 1024, "def456"),
                ],
            )
            .with_folder(
                "notes",
                vec![
                    page("notes/2025-01-24-setup-guide.html", 3072, "ghi789"),
                    page("notes/index.html", 1024, "jkl012"),
                ],
            )
    }

    pub fn with_folder(mut self, path: &str, entries: Vec<DirectoryEntry>) -> Self {
        self.tree.insert(path.trim_matches('/').to_string(), entries);
        self
    }

    /// Makes every later listing of `path` fail.
    pub fn fail_on(&self, path: &str) {
        if let Ok(mut failing) = self.failing.lock() {
            failing.insert(path.to_string());
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn is_failing(&self, path: &str) -> bool {
        self.failing
            .lock()
            .map(|failing| failing.contains(path))
            .unwrap_or(false)
    }
}

#[async_trait]
impl ContentProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list_children(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let path = path.trim_matches('/');

        if self.is_failing(path) {
            return Err(HubError::fetch(path, "simulated provider failure"));
        }

        Ok(self.tree.get(path).cloned().unwrap_or_default())
    }
}

// file: src/provider/local.rs
// description: directory listings from a checked-out copy on disk
// reference: https://docs.rs/walkdir

use super::{ContentProvider, join_path};
use crate::error::{HubError, Result};
use crate::models::{DirectoryEntry, EntryKind};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

pub struct LocalProvider {
    root: PathBuf,
}

impl LocalProvider {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn list_dir(dir: &Path, rel: &str) -> Result<Vec<DirectoryEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        let file_type = entry.file_type();

        let kind = if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            debug!("Skipping non-regular entry {}", entry.path().display());
            continue;
        };

        let name = entry.file_name().to_string_lossy().to_string();
        let metadata = entry.metadata().ok();

        let size = match kind {
            EntryKind::File => metadata.as_ref().map(|m| m.len()),
            EntryKind::Directory => None,
        };

        let last_modified = metadata
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Utc>::from);

        entries.push(DirectoryEntry {
            path: join_path(rel, &name),
            name,
            kind,
            size,
            last_modified,
            html_url: None,
            download_url: None,
            sha: None,
        });
    }

    Ok(entries)
}

#[async_trait]
impl ContentProvider for LocalProvider {
    fn name(&self) -> &str {
        "local"
    }

    async fn list_children(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        let rel = path.trim_matches('/').to_string();

        if rel.split('/').any(|segment| segment == "..") {
            return Err(HubError::fetch(path, "path escapes the provider root"));
        }

        let dir = self.root.join(&rel);
        if !dir.is_dir() {
            debug!("Directory {} not found, treating as empty", dir.display());
            return Ok(Vec::new());
        }

        tokio::task::spawn_blocking(move || list_dir(&dir, &rel))
            .await
            .map_err(|e| HubError::fetch(path, e))?
    }
}

// file: src/provider/github.rs
// description: GitHub contents api client for directory listings
// reference: https://docs.github.com/en/rest/repos/contents

use super::ContentProvider;
use crate::config::{RepositoryConfig, RepositoryIdentity};
use crate::error::{HubError, Result};
use crate::models::{DirectoryEntry, EntryKind};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("file_hub/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github+json";

/// One element of a contents api directory response.
#[derive(Debug, Deserialize)]
struct ContentItem {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: String,
    size: Option<u64>,
    html_url: Option<String>,
    download_url: Option<String>,
    sha: Option<String>,
    updated_at: Option<String>,
    created_at: Option<String>,
}

impl ContentItem {
    fn into_entry(self) -> Option<DirectoryEntry> {
        let Some(kind) = EntryKind::from_wire(&self.kind) else {
            debug!("Ignoring {} entry {}", self.kind, self.path);
            return None;
        };

        let last_modified = self
            .updated_at
            .as_deref()
            .or(self.created_at.as_deref())
            .and_then(parse_timestamp);

        Some(DirectoryEntry {
            name: self.name,
            path: self.path,
            kind,
            size: if kind == EntryKind::File { self.size } else { None },
            last_modified,
            html_url: self.html_url,
            download_url: self.download_url,
            sha: self.sha,
        })
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Decides whether a response body should be read.
/// `Ok(false)` means the path does not exist.
fn check_status(path: &str, status: StatusCode) -> Result<bool> {
    if status == StatusCode::NOT_FOUND {
        debug!("Path '{}' not found, treating as empty", path);
        return Ok(false);
    }

    if !status.is_success() {
        return Err(HubError::Status {
            path: path.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(true)
}

/// Maps a response body to entries. A body that is not an array describes a
/// single file rather than a directory and yields no children.
fn parse_listing(path: &str, body: &str) -> Result<Vec<DirectoryEntry>> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| HubError::Decode {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    if !value.is_array() {
        debug!("Path '{}' is not a directory", path);
        return Ok(Vec::new());
    }

    let items: Vec<ContentItem> =
        serde_json::from_value(value).map_err(|e| HubError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    Ok(items.into_iter().filter_map(ContentItem::into_entry).collect())
}

pub struct GitHubProvider {
    client: Client,
    identity: RepositoryIdentity,
    api_base_url: String,
    branch: String,
    token: Option<String>,
}

impl GitHubProvider {
    pub fn new(
        identity: RepositoryIdentity,
        config: &RepositoryConfig,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| HubError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            identity,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            branch: config.branch.clone(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    pub fn identity(&self) -> &RepositoryIdentity {
        &self.identity
    }

    pub fn contents_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base_url,
            self.identity.owner,
            self.identity.name,
            path.trim_matches('/')
        )
    }
}

#[async_trait]
impl ContentProvider for GitHubProvider {
    fn name(&self) -> &str {
        "github"
    }

    async fn list_children(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        let url = self.contents_url(path);
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", ACCEPT)
            .query(&[("ref", self.branch.as_str())]);

        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| HubError::fetch(path, e))?;

        if !check_status(path, response.status())? {
            return Ok(Vec::new());
        }

        let body = response
            .text()
            .await
            .map_err(|e| HubError::fetch(path, e))?;

        let entries = parse_listing(path, &body)?;
        debug!("Listed {} entries under '{}'", entries.len(), path);
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {
            "name": "2025-01-24-sample-article.html",
            "path": "articles/2025-01-24-sample-article.html",
            "type": "file",
            "size": 2048,
            "sha": "abc123",
            "html_url": "https://github.com/octo/hub/blob/main/articles/2025-01-24-sample-article.html",
            "download_url": "https://raw.githubusercontent.com/octo/hub/main/articles/2025-01-24-sample-article.html",
            "updated_at": "2025-01-24T10:30:00Z"
        },
        {
            "name": "archive",
            "path": "articles/archive",
            "type": "dir",
            "size": 0,
            "sha": "def456"
        },
        {
            "name": "shared",
            "path": "articles/shared",
            "type": "symlink"
        },
        {
            "name": "notes.txt",
            "path": "articles/notes.txt",
            "type": "file",
            "updated_at": "not a timestamp"
        }
    ]"#;

    #[test]
    fn test_parse_listing() {
        let entries = parse_listing("articles", LISTING).unwrap();
        assert_eq!(entries.len(), 3);

        let article = &entries[0];
        assert_eq!(article.kind, EntryKind::File);
        assert_eq!(article.size, Some(2048));
        assert_eq!(
            article.last_modified.map(|ts| ts.to_rfc3339()),
            Some("2025-01-24T10:30:00+00:00".to_string())
        );

        let dir = &entries[1];
        assert_eq!(dir.kind, EntryKind::Directory);
        assert_eq!(dir.size, None);
    }

    #[test]
    fn test_missing_metadata_degrades_to_none() {
        let entries = parse_listing("articles", LISTING).unwrap();
        let notes = entries.iter().find(|e| e.name == "notes.txt").unwrap();
        assert_eq!(notes.size, None);
        assert_eq!(notes.last_modified, None);
        assert_eq!(notes.sha, None);
    }

    #[test]
    fn test_single_file_body_is_empty_listing() {
        let body = r#"{"name": "a.pdf", "path": "a.pdf", "type": "file", "size": 1}"#;
        assert!(parse_listing("a.pdf", body).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_body() {
        assert!(matches!(
            parse_listing("articles", "<html>rate limited</html>"),
            Err(HubError::Decode { .. })
        ));
    }

    #[test]
    fn test_status_handling() {
        assert!(check_status("articles", StatusCode::OK).unwrap());
        assert!(!check_status("missing", StatusCode::NOT_FOUND).unwrap());

        match check_status("articles", StatusCode::FORBIDDEN) {
            Err(HubError::Status { status, path }) => {
                assert_eq!(status, 403);
                assert_eq!(path, "articles");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_contents_url() {
        let identity = RepositoryIdentity::parse("octo/hub").unwrap();
        let config = RepositoryConfig {
            api_base_url: "https://api.github.com/".to_string(),
            ..RepositoryConfig::default()
        };
        let provider = GitHubProvider::new(identity, &config, Duration::from_secs(5)).unwrap();

        assert_eq!(
            provider.contents_url("articles/2025"),
            "https://api.github.com/repos/octo/hub/contents/articles/2025"
        );
        assert_eq!(
            provider.contents_url(""),
            "https://api.github.com/repos/octo/hub/contents/"
        );
    }
}

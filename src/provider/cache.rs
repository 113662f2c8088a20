// file: src/provider/cache.rs
// description: time-boxed response cache around any content provider
// reference: decorator over ContentProvider with stale-on-error fallback

use super::ContentProvider;
use crate::error::Result;
use crate::models::DirectoryEntry;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

struct CachedListing {
    entries: Vec<DirectoryEntry>,
    fetched_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub valid_entries: usize,
    pub expired_entries: usize,
}

/// Memoizes listings by path for a fixed time-to-live.
///
/// Expired entries are kept after they go stale. When `stale_on_error` is set and the
/// inner provider fails to fetch, the last good listing for that path is returned
/// instead of the error. Other errors always propagate.
pub struct CachedProvider<P> {
    inner: P,
    label: String,
    ttl: Duration,
    stale_on_error: bool,
    listings: Mutex<HashMap<String, CachedListing>>,
}

impl<P: ContentProvider> CachedProvider<P> {
    pub fn new(inner: P, ttl: Duration, stale_on_error: bool) -> Self {
        let label = format!("cached {}", inner.name());
        Self {
            inner,
            label,
            ttl,
            stale_on_error,
            listings: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_default_ttl(inner: P) -> Self {
        Self::new(inner, DEFAULT_TTL, true)
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    pub async fn clear(&self) {
        self.listings.lock().await.clear();
    }

    pub async fn stats(&self) -> CacheStats {
        let listings = self.listings.lock().await;
        let valid_entries = listings
            .values()
            .filter(|listing| listing.fetched_at.elapsed() < self.ttl)
            .count();

        CacheStats {
            total_entries: listings.len(),
            valid_entries,
            expired_entries: listings.len() - valid_entries,
        }
    }

    async fn fresh(&self, path: &str) -> Option<Vec<DirectoryEntry>> {
        let listings = self.listings.lock().await;
        listings
            .get(path)
            .filter(|listing| listing.fetched_at.elapsed() < self.ttl)
            .map(|listing| listing.entries.clone())
    }

    async fn stale(&self, path: &str) -> Option<Vec<DirectoryEntry>> {
        let listings = self.listings.lock().await;
        listings.get(path).map(|listing| listing.entries.clone())
    }
}

#[async_trait]
impl<P: ContentProvider> ContentProvider for CachedProvider<P> {
    fn name(&self) -> &str {
        &self.label
    }

    async fn list_children(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        if let Some(entries) = self.fresh(path).await {
            debug!("Cache hit for '{}'", path);
            return Ok(entries);
        }

        match self.inner.list_children(path).await {
            Ok(entries) => {
                let listing = CachedListing {
                    entries: entries.clone(),
                    fetched_at: Instant::now(),
                };
                self.listings.lock().await.insert(path.to_string(), listing);
                Ok(entries)
            }
            Err(err) => {
                if self.stale_on_error
                    && err.is_fetch_error()
                    && let Some(entries) = self.stale(path).await
                {
                    warn!(
                        "Fetch failed for '{}', serving stale cached listing: {}",
                        path, err
                    );
                    return Ok(entries);
                }
                Err(err)
            }
        }
    }
}

// file: src/catalog/discovery.rs
// description: recursive folder walk producing the flat file catalog
// reference: https://docs.rs/futures

use super::classifier::FileClassifier;
use super::urls::{DEFAULT_LOCAL_ORIGIN, UrlPolicy};
use crate::config::{Config, ProviderKind};
use crate::error::Result;
use crate::models::CatalogedFile;
use crate::provider::{ContentProvider, join_path};
use futures::future::{BoxFuture, FutureExt};
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

pub const DEFAULT_MAX_DEPTH: usize = 8;
pub const DEFAULT_PARALLEL_REQUESTS: usize = 4;

pub struct Discovery {
    provider: Arc<dyn ContentProvider>,
    classifier: FileClassifier,
    max_depth: usize,
    parallel_requests: usize,
}

impl Discovery {
    pub fn new(provider: Arc<dyn ContentProvider>, urls: UrlPolicy) -> Self {
        Self {
            provider,
            classifier: FileClassifier::new(urls),
            max_depth: DEFAULT_MAX_DEPTH,
            parallel_requests: DEFAULT_PARALLEL_REQUESTS,
        }
    }

    pub fn from_config(provider: Arc<dyn ContentProvider>, config: &Config) -> Result<Self> {
        let identity = config.repository.identity().ok();
        let urls = match UrlPolicy::from_config(&config.discovery, identity.as_ref()) {
            Ok(urls) => urls,
            // the sample tree has no published site to link to
            Err(err) if config.provider.kind == ProviderKind::Mock => {
                debug!("{}, linking sample files to {}", err, DEFAULT_LOCAL_ORIGIN);
                UrlPolicy::local(DEFAULT_LOCAL_ORIGIN)
            }
            Err(err) => return Err(err),
        };

        Ok(Self::new(provider, urls)
            .with_max_depth(config.discovery.max_depth)
            .with_parallel_requests(config.discovery.parallel_requests))
    }

    /// Subfolders deeper than this below the starting folder are not visited.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_parallel_requests(mut self, parallel_requests: usize) -> Self {
        self.parallel_requests = parallel_requests.max(1);
        self
    }

    pub fn provider(&self) -> &Arc<dyn ContentProvider> {
        &self.provider
    }

    pub fn urls(&self) -> &UrlPolicy {
        self.classifier.urls()
    }

    /// Catalogs every supported file under `folder`.
    ///
    /// Files of a folder come before the files of its subfolders, and subfolders keep
    /// their listing order. A folder that cannot be listed contributes nothing, but its
    /// siblings are still walked. This never fails.
    pub async fn discover(&self, folder: &str) -> Vec<CatalogedFile> {
        let start = Instant::now();
        let folder = folder.trim_matches('/').to_string();

        info!("Discovering files in '{}' via {}", folder, self.provider.name());
        let files = self.walk(folder.clone(), 0).await;

        info!(
            "Found {} files in '{}' ({} ms)",
            files.len(),
            folder,
            start.elapsed().as_millis()
        );
        files
    }

    fn walk(&self, folder: String, depth: usize) -> BoxFuture<'_, Vec<CatalogedFile>> {
        async move {
            let children = match self.provider.list_children(&folder).await {
                Ok(children) => children,
                Err(err) => {
                    warn!("Error fetching files from '{}': {}", folder, err);
                    return Vec::new();
                }
            };

            let (files, subfolders): (Vec<_>, Vec<_>) =
                children.into_iter().partition(|entry| entry.is_file());

            let mut catalog: Vec<CatalogedFile> = files
                .iter()
                .filter_map(|entry| {
                    let file = self.classifier.classify(entry, &folder);
                    if file.is_none() {
                        debug!("Skipping unsupported file {}", entry.path);
                    }
                    file
                })
                .collect();

            if subfolders.is_empty() {
                return catalog;
            }

            if depth >= self.max_depth {
                warn!(
                    "Depth limit {} reached at '{}', skipping {} subfolders",
                    self.max_depth,
                    folder,
                    subfolders.len()
                );
                return catalog;
            }

            let walks: Vec<_> = subfolders
                .iter()
                .map(|dir| self.walk(join_path(&folder, &dir.name), depth + 1))
                .collect();

            let nested: Vec<Vec<CatalogedFile>> = stream::iter(walks)
                .buffered(self.parallel_requests)
                .collect()
                .await;

            catalog.extend(nested.into_iter().flatten());
            catalog
        }
        .boxed()
    }
}

// file: src/provider/mod.rs
// description: repository content providers and provider construction
// reference: https://docs.rs/async-trait

pub mod cache;
pub mod github;
pub mod local;
pub mod mock;

pub use cache::{CacheStats, CachedProvider};
pub use github::GitHubProvider;
pub use local::LocalProvider;
pub use mock::MockProvider;

use crate::catalog::urls::DEFAULT_LOCAL_ORIGIN;
use crate::config::{Config, ProviderKind};
use crate::error::Result;
use crate::models::DirectoryEntry;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Source of directory listings for a repository tree.
///
/// A missing path is an empty listing, not an error. Errors are reserved for
/// transport failures and unexpected responses.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// Short label used in log output.
    fn name(&self) -> &str;

    /// Immediate children of `path`. The empty path is the repository root.
    async fn list_children(&self, path: &str) -> Result<Vec<DirectoryEntry>>;
}

#[async_trait]
impl<P: ContentProvider + ?Sized> ContentProvider for Arc<P> {
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn list_children(&self, path: &str) -> Result<Vec<DirectoryEntry>> {
        (**self).list_children(path).await
    }
}

/// Joins a folder and a child name the way listing paths are written.
pub fn join_path(folder: &str, name: &str) -> String {
    let folder = folder.trim_matches('/');
    if folder.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", folder, name)
    }
}

/// Builds the configured provider, wrapped in a response cache when enabled.
pub fn build_provider(config: &Config) -> Result<Arc<dyn ContentProvider>> {
    match config.provider.kind {
        ProviderKind::Github => {
            let identity = config.repository.identity()?;
            info!("Using GitHub contents api for {}", identity.slug());
            let provider = GitHubProvider::new(
                identity,
                &config.repository,
                Duration::from_secs(config.provider.request_timeout_secs),
            )?;
            Ok(with_cache(provider, config))
        }
        ProviderKind::Local => {
            let provider = LocalProvider::new(config.provider.local_root.clone());
            info!(
                "Using local directory provider at {}",
                provider.root().display()
            );
            Ok(with_cache(provider, config))
        }
        ProviderKind::Mock => {
            let origin = config
                .discovery
                .url_base
                .as_deref()
                .unwrap_or(DEFAULT_LOCAL_ORIGIN);
            info!("Using built-in sample tree");
            Ok(with_cache(MockProvider::sample(origin), config))
        }
    }
}

fn with_cache<P: ContentProvider + 'static>(provider: P, config: &Config) -> Arc<dyn ContentProvider> {
    if config.provider.cache_enabled {
        Arc::new(CachedProvider::new(
            provider,
            Duration::from_secs(config.provider.cache_ttl_secs),
            config.provider.stale_on_error,
        ))
    } else {
        Arc::new(provider)
    }
}

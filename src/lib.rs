// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod hub;
pub mod models;
pub mod provider;
pub mod query;
pub mod utils;

pub use catalog::{Discovery, FileClassifier, UrlPolicy, create_display_name, extract_date};
pub use config::{Config, DiscoveryConfig, ProjectsConfig, ProviderConfig, RepositoryConfig};
pub use error::{HubError, Result};
pub use hub::{CatalogStats, FileHub};
pub use models::{CatalogedFile, DirectoryEntry, EntryKind, FileType, Project, ProjectOrigin};
pub use provider::{
    CachedProvider, ContentProvider, GitHubProvider, LocalProvider, MockProvider, build_provider,
};
pub use query::{FileQuery, SortOrder, TypeFilter};
pub use utils::{format_date, format_file_size};

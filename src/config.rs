// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{HubError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const REPOSITORY_ENV_VAR: &str = "GITHUB_REPOSITORY";
pub const ENV_PREFIX: &str = "FILE_HUB";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub projects: ProjectsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RepositoryConfig {
    /// `owner/name`, takes precedence over the split fields
    pub slug: Option<String>,
    pub owner: Option<String>,
    pub name: Option<String>,
    pub branch: String,
    pub api_base_url: String,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Github,
    Local,
    Mock,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub kind: ProviderKind,
    pub local_root: PathBuf,
    pub cache_enabled: bool,
    pub cache_ttl_secs: u64,
    pub stale_on_error: bool,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlPolicyKind {
    Local,
    Pages,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub folders: Vec<String>,
    pub max_depth: usize,
    pub parallel_requests: usize,
    pub url_policy: UrlPolicyKind,
    pub url_base: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProjectsConfig {
    pub folder: String,
    pub image_folders: Vec<String>,
    pub hub_name: String,
    pub hub_description: String,
    /// Folder name to the keywords that pick its preview image
    pub category_keywords: BTreeMap<String, Vec<String>>,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            slug: None,
            owner: None,
            name: None,
            branch: "main".to_string(),
            api_base_url: "https://api.github.com".to_string(),
            token: None,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: ProviderKind::Github,
            local_root: PathBuf::from("."),
            cache_enabled: true,
            cache_ttl_secs: 300,
            stale_on_error: true,
            request_timeout_secs: 30,
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            folders: vec!["articles".to_string(), "notes".to_string()],
            max_depth: 8,
            parallel_requests: 4,
            url_policy: UrlPolicyKind::Pages,
            url_base: None,
        }
    }
}

impl Default for ProjectsConfig {
    fn default() -> Self {
        Self {
            folder: "Projects".to_string(),
            image_folders: vec!["images".to_string()],
            hub_name: "File Management Hub".to_string(),
            hub_description:
                "Organized collection of articles, notes, and documents with search functionality"
                    .to_string(),
            category_keywords: BTreeMap::from([
                (
                    "articles".to_string(),
                    vec!["retail".to_string(), "news".to_string(), "article".to_string()],
                ),
                (
                    "notes".to_string(),
                    vec![
                        "washington".to_string(),
                        "oregon".to_string(),
                        "contractor".to_string(),
                        "bill".to_string(),
                    ],
                ),
            ]),
        }
    }
}

/// Owner and repository name of the hosting repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentity {
    pub owner: String,
    pub name: String,
}

impl RepositoryIdentity {
    pub fn parse(slug: &str) -> Result<Self> {
        let mut parts = slug.trim().splitn(2, '/');
        let owner = parts.next().unwrap_or("").trim();
        let name = parts.next().unwrap_or("").trim().trim_end_matches(".git");

        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(HubError::RepositoryIdentity(format!(
                "expected 'owner/name', got '{}'",
                slug
            )));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Default GitHub Pages site for this repository.
    pub fn pages_base_url(&self) -> String {
        format!(
            "https://{}.github.io/{}",
            self.owner.to_lowercase(),
            self.name
        )
    }
}

impl RepositoryConfig {
    /// Resolves the repository from config, then from `GITHUB_REPOSITORY`.
    pub fn identity(&self) -> Result<RepositoryIdentity> {
        self.identity_with_env(std::env::var(REPOSITORY_ENV_VAR).ok())
    }

    pub fn identity_with_env(&self, env_slug: Option<String>) -> Result<RepositoryIdentity> {
        if let Some(slug) = self.slug.as_deref().filter(|s| !s.trim().is_empty()) {
            return RepositoryIdentity::parse(slug);
        }

        if let (Some(owner), Some(name)) = (&self.owner, &self.name) {
            return RepositoryIdentity::parse(&format!("{}/{}", owner, name));
        }

        match env_slug {
            Some(slug) if !slug.trim().is_empty() => RepositoryIdentity::parse(&slug),
            _ => Err(HubError::RepositoryIdentity(format!(
                "set repository.slug or the {} environment variable",
                REPOSITORY_ENV_VAR
            ))),
        }
    }
}

/// `FILE_HUB_<SECTION>__<KEY>` variables, e.g. `FILE_HUB_PROVIDER__KIND=local`.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with(path, environment())
    }

    fn load_with(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(
                config::File::from(Path::new("config/default.toml")).required(false),
            );
        }

        builder = builder.add_source(env);

        let settings = builder
            .build()
            .map_err(|e| HubError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| HubError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            repository: RepositoryConfig::default(),
            provider: ProviderConfig::default(),
            discovery: DiscoveryConfig::default(),
            projects: ProjectsConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.discovery.parallel_requests == 0 {
            return Err(HubError::Config(
                "parallel_requests must be greater than 0".to_string(),
            ));
        }

        if self.discovery.folders.is_empty() {
            return Err(HubError::Config(
                "at least one discovery folder is required".to_string(),
            ));
        }

        if self.provider.request_timeout_secs == 0 {
            return Err(HubError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

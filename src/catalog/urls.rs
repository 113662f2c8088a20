// file: src/catalog/urls.rs
// description: navigable link construction for cataloged files
// reference: local origin vs github pages hosting

use crate::config::{DiscoveryConfig, RepositoryIdentity, UrlPolicyKind};
use crate::error::{HubError, Result};

pub const DEFAULT_LOCAL_ORIGIN: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPolicy {
    /// Files served by a local web server rooted at the repository
    Local { origin: String },
    /// Files published through a pages site
    Pages { base: String },
}

impl UrlPolicy {
    pub fn local(origin: &str) -> Self {
        UrlPolicy::Local {
            origin: origin.trim_end_matches('/').to_string(),
        }
    }

    pub fn pages(base: &str) -> Self {
        UrlPolicy::Pages {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(
        discovery: &DiscoveryConfig,
        identity: Option<&RepositoryIdentity>,
    ) -> Result<Self> {
        let base = discovery.url_base.as_deref().filter(|b| !b.trim().is_empty());

        match discovery.url_policy {
            UrlPolicyKind::Local => Ok(Self::local(base.unwrap_or(DEFAULT_LOCAL_ORIGIN))),
            UrlPolicyKind::Pages => match (base, identity) {
                (Some(base), _) => Ok(Self::pages(base)),
                (None, Some(identity)) => Ok(Self::pages(&identity.pages_base_url())),
                (None, None) => Err(HubError::Config(
                    "pages url policy needs discovery.url_base or a repository identity"
                        .to_string(),
                )),
            },
        }
    }

    pub fn base(&self) -> &str {
        match self {
            UrlPolicy::Local { origin } => origin,
            UrlPolicy::Pages { base } => base,
        }
    }

    /// Link for `name` inside `folder`.
    pub fn file_url(&self, folder: &str, name: &str) -> String {
        let folder = folder.trim_matches('/');
        if folder.is_empty() {
            format!("{}/{}", self.base(), name)
        } else {
            format!("{}/{}/{}", self.base(), folder, name)
        }
    }
}

// file: src/models/project.rs
// description: project links discovered in the repository
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectOrigin {
    /// The hub site itself
    Hub,
    /// An html page found in the projects folder
    Discovered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub url: String,
    pub screenshot: Option<String>,
    pub path: String,
    pub origin: ProjectOrigin,
}

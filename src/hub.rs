// file: src/hub.rs
// description: multi-folder catalog operations and project discovery
// reference: concurrent discovery over the configured top-level folders

use crate::catalog::Discovery;
use crate::config::{Config, ProjectsConfig};
use crate::error::Result;
use crate::models::{CatalogedFile, DirectoryEntry, FileType, Project, ProjectOrigin};
use crate::provider::ContentProvider;
use crate::query::sort::by_name;
use crate::query::{SortOrder, TypeFilter, filter_by_type, search, sort_files};
use futures::future::join_all;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Per-folder counts shown next to a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub total_bytes: u64,
    pub dated: usize,
    pub by_type: BTreeMap<String, usize>,
}

impl CatalogStats {
    pub fn from_files(files: &[CatalogedFile]) -> Self {
        let mut stats = CatalogStats {
            total: files.len(),
            ..CatalogStats::default()
        };

        for file in files {
            stats.total_bytes += file.size_or_zero();
            if file.date.is_some() {
                stats.dated += 1;
            }
            *stats
                .by_type
                .entry(file.file_type.as_str().to_string())
                .or_insert(0) += 1;
        }

        stats
    }

    pub fn count(&self, file_type: &FileType) -> usize {
        self.by_type.get(file_type.as_str()).copied().unwrap_or(0)
    }
}

/// Name hits first, then newest dated files, then case-insensitive name order.
fn search_rank(a: &CatalogedFile, b: &CatalogedFile, needle: &str) -> Ordering {
    let a_hit = a.name.to_lowercase().contains(needle);
    let b_hit = b.name.to_lowercase().contains(needle);

    b_hit
        .cmp(&a_hit)
        .then_with(|| match (a.date, b.date) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
        .then_with(|| by_name(a, b))
}

pub struct FileHub {
    discovery: Discovery,
    folders: Vec<String>,
    projects: ProjectsConfig,
}

impl FileHub {
    pub fn new(discovery: Discovery, folders: Vec<String>) -> Self {
        Self {
            discovery,
            folders,
            projects: ProjectsConfig::default(),
        }
    }

    pub fn from_config(provider: Arc<dyn ContentProvider>, config: &Config) -> Result<Self> {
        let discovery = Discovery::from_config(provider, config)?;
        Ok(Self::new(discovery, config.discovery.folders.clone())
            .with_projects(config.projects.clone()))
    }

    pub fn with_projects(mut self, projects: ProjectsConfig) -> Self {
        self.projects = projects;
        self
    }

    pub fn discovery(&self) -> &Discovery {
        &self.discovery
    }

    pub fn folders(&self) -> &[String] {
        &self.folders
    }

    pub async fn folder_files(&self, folder: &str) -> Vec<CatalogedFile> {
        self.discovery.discover(folder).await
    }

    /// Every top-level folder, discovered concurrently and concatenated in folder order.
    pub async fn all_files(&self) -> Vec<CatalogedFile> {
        let per_folder = join_all(
            self.folders
                .iter()
                .map(|folder| self.discovery.discover(folder)),
        )
        .await;

        per_folder.into_iter().flatten().collect()
    }

    pub async fn file_count(&self, folder: &str) -> usize {
        self.folder_files(folder).await.len()
    }

    pub async fn stats(&self, folder: &str) -> CatalogStats {
        CatalogStats::from_files(&self.folder_files(folder).await)
    }

    /// Newest files across all top-level folders.
    pub async fn recent_files(&self, limit: usize) -> Vec<CatalogedFile> {
        let mut files = sort_files(self.all_files().await, SortOrder::DateDesc);
        files.truncate(limit);
        files
    }

    pub async fn search_across_folders(
        &self,
        query: &str,
        file_type: &TypeFilter,
    ) -> Vec<CatalogedFile> {
        let files = filter_by_type(self.all_files().await, file_type);
        let mut results = search(files, query);

        let needle = query.trim().to_lowercase();
        results.sort_by(|a, b| search_rank(a, b, &needle));

        info!(
            "Search '{}' ({}) matched {} files",
            query,
            file_type,
            results.len()
        );
        results
    }

    fn hub_project(&self) -> Project {
        Project {
            name: self.projects.hub_name.clone(),
            description: self.projects.hub_description.clone(),
            url: format!("{}/", self.discovery.urls().base()),
            screenshot: None,
            path: "index.html".to_string(),
            origin: ProjectOrigin::Hub,
        }
    }

    async fn listing_or_empty(&self, folder: &str) -> Vec<DirectoryEntry> {
        match self.discovery.provider().list_children(folder).await {
            Ok(entries) => entries,
            Err(err) => {
                debug!("No images from '{}': {}", folder, err);
                Vec::new()
            }
        }
    }

    fn find_screenshot(&self, stem: &str, sources: &[(&str, &[DirectoryEntry])]) -> Option<String> {
        let stem = stem.to_lowercase();
        let candidates = [format!("{}.png", stem), format!("{}.jpg", stem)];

        sources.iter().find_map(|(folder, entries)| {
            entries
                .iter()
                .find(|entry| entry.is_file() && candidates.contains(&entry.name.to_lowercase()))
                .map(|image| self.discovery.urls().file_url(folder, &image.name))
        })
    }

    /// Html pages in the projects folder, after the hub's own entry.
    ///
    /// A screenshot named after the page (`.png` or `.jpg`) is looked up in the
    /// projects folder first and then in each image folder.
    pub async fn discover_projects(&self) -> Vec<Project> {
        let mut projects = vec![self.hub_project()];
        let folder = self.projects.folder.as_str();

        let listing = match self.discovery.provider().list_children(folder).await {
            Ok(listing) => listing,
            Err(err) => {
                warn!("Error discovering projects in '{}': {}", folder, err);
                return projects;
            }
        };

        let image_listings = join_all(
            self.projects
                .image_folders
                .iter()
                .map(|images| self.listing_or_empty(images)),
        )
        .await;

        let mut sources: Vec<(&str, &[DirectoryEntry])> = vec![(folder, listing.as_slice())];
        sources.extend(
            self.projects
                .image_folders
                .iter()
                .map(String::as_str)
                .zip(image_listings.iter().map(Vec::as_slice)),
        );

        for page in listing
            .iter()
            .filter(|entry| entry.is_file() && entry.name.to_lowercase().ends_with(".html"))
        {
            let stem = &page.name[..page.name.len() - ".html".len()];

            projects.push(Project {
                name: stem.replace('-', " "),
                description: format!("Project application in {} folder", folder),
                url: self.discovery.urls().file_url(folder, &page.name),
                screenshot: self.find_screenshot(stem, &sources),
                path: page.path.clone(),
                origin: ProjectOrigin::Discovered,
            });
        }

        info!("Discovered {} projects", projects.len() - 1);
        projects
    }

    /// Preview picture for a top-level folder: the first image whose name contains
    /// one of the folder's keywords. Image folders are searched in order.
    pub async fn category_image(&self, folder: &str) -> Option<String> {
        let keywords: Vec<String> = self
            .projects
            .category_keywords
            .get(folder)?
            .iter()
            .map(|keyword| keyword.to_lowercase())
            .collect();

        for images in &self.projects.image_folders {
            let listing = self.listing_or_empty(images).await;
            let found = listing.iter().find(|entry| {
                let name = entry.name.to_lowercase();
                entry.is_file() && keywords.iter().any(|keyword| name.contains(keyword.as_str()))
            });

            if let Some(image) = found {
                return Some(self.discovery.urls().file_url(images, &image.name));
            }
        }

        debug!("No preview image for '{}'", folder);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UrlPolicy;
    use crate::provider::MockProvider;
    use pretty_assertions::assert_eq;

    fn provider() -> MockProvider {
        MockProvider::new()
            .with_folder(
                "articles",
                vec![
                    DirectoryEntry::file("articles/2024-03-01-budget-report.pdf", Some(100)),
                    DirectoryEntry::file("articles/report-guidelines.html", Some(50)),
                    DirectoryEntry::file("articles/2025-01-24-sample-article.html", Some(2048)),
                    DirectoryEntry::directory("articles/archive"),
                ],
            )
            .with_folder(
                "articles/archive",
                vec![DirectoryEntry::file("articles/archive/2020-01-01-old.txt", Some(5))],
            )
            .with_folder(
                "notes",
                vec![
                    DirectoryEntry::file("notes/2025-02-10-team-report.txt", Some(30)),
                    DirectoryEntry::file("notes/scratch.txt", None),
                ],
            )
            .with_folder(
                "Projects",
                vec![
                    DirectoryEntry::file("Projects/budget-tracker.html", Some(10)),
                    DirectoryEntry::file("Projects/budget-tracker.PNG", Some(10)),
                    DirectoryEntry::file("Projects/todo-app.html", Some(10)),
                    DirectoryEntry::file("Projects/notes.txt", Some(10)),
                ],
            )
            .with_folder(
                "images",
                vec![DirectoryEntry::file("images/todo-app.jpg", Some(10))],
            )
    }

    fn hub(provider: MockProvider) -> FileHub {
        let discovery = Discovery::new(
            Arc::new(provider),
            UrlPolicy::pages("https://octo.github.io/FilesHub"),
        );
        FileHub::new(discovery, vec!["articles".to_string(), "notes".to_string()])
    }

    fn names(files: &[CatalogedFile]) -> Vec<&str> {
        files.iter().map(|f| f.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_all_files_keeps_folder_order() {
        let files = hub(provider()).all_files().await;
        assert_eq!(
            names(&files),
            vec![
                "2024-03-01-budget-report.pdf",
                "report-guidelines.html",
                "2025-01-24-sample-article.html",
                "2020-01-01-old.txt",
                "2025-02-10-team-report.txt",
                "scratch.txt",
            ]
        );
    }

    #[tokio::test]
    async fn test_one_failing_folder_does_not_cancel_other() {
        let provider = provider();
        provider.fail_on("notes");

        let files = hub(provider).all_files().await;
        assert_eq!(files.len(), 4);
        assert!(files.iter().all(|f| f.folder.starts_with("articles")));
    }

    #[tokio::test]
    async fn test_recent_files() {
        let recent = hub(provider()).recent_files(3).await;
        assert_eq!(
            names(&recent),
            vec![
                "2025-02-10-team-report.txt",
                "2025-01-24-sample-article.html",
                "2024-03-01-budget-report.pdf",
            ]
        );
    }

    #[tokio::test]
    async fn test_file_count_and_stats() {
        let hub = hub(provider());
        assert_eq!(hub.file_count("articles").await, 4);

        let stats = hub.stats("articles").await;
        assert_eq!(stats.total, 4);
        assert_eq!(stats.count(&FileType::Html), 2);
        assert_eq!(stats.count(&FileType::Pdf), 1);
        assert_eq!(stats.count(&FileType::Doc), 0);
        assert_eq!(stats.total_bytes, 2203);
        assert_eq!(stats.dated, 3);
    }

    #[tokio::test]
    async fn test_search_across_folders_ranking() {
        let results = hub(provider())
            .search_across_folders("report", &TypeFilter::All)
            .await;

        assert_eq!(
            names(&results),
            vec![
                "2025-02-10-team-report.txt",
                "2024-03-01-budget-report.pdf",
                "report-guidelines.html",
            ]
        );
    }

    #[tokio::test]
    async fn test_search_across_folders_with_type() {
        let results = hub(provider())
            .search_across_folders("REPORT", &TypeFilter::Only(FileType::Txt))
            .await;

        assert_eq!(names(&results), vec!["2025-02-10-team-report.txt"]);
    }

    #[tokio::test]
    async fn test_search_matches_display_name_across_folders() {
        let results = hub(provider())
            .search_across_folders("sample article", &TypeFilter::All)
            .await;

        assert_eq!(names(&results), vec!["2025-01-24-sample-article.html"]);
    }

    #[tokio::test]
    async fn test_discover_projects() {
        let projects = hub(provider()).discover_projects().await;

        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].origin, ProjectOrigin::Hub);
        assert_eq!(projects[0].url, "https://octo.github.io/FilesHub/");

        let tracker = &projects[1];
        assert_eq!(tracker.name, "budget tracker");
        assert_eq!(
            tracker.url,
            "https://octo.github.io/FilesHub/Projects/budget-tracker.html"
        );
        assert_eq!(
            tracker.screenshot.as_deref(),
            Some("https://octo.github.io/FilesHub/Projects/budget-tracker.PNG")
        );

        let todo = &projects[2];
        assert_eq!(todo.name, "todo app");
        assert_eq!(
            todo.screenshot.as_deref(),
            Some("https://octo.github.io/FilesHub/images/todo-app.jpg")
        );
    }

    #[tokio::test]
    async fn test_discover_projects_falls_back_to_hub() {
        let provider = provider();
        provider.fail_on("Projects");

        let projects = hub(provider).discover_projects().await;
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "File Management Hub");
    }

    #[tokio::test]
    async fn test_category_images_match_keywords() {
        let provider = MockProvider::new().with_folder(
            "images",
            vec![
                DirectoryEntry::directory("images/news"),
                DirectoryEntry::file("images/Oregon-Coast.jpg", Some(10)),
                DirectoryEntry::file("images/retail-floor.png", Some(10)),
                DirectoryEntry::file("images/news-desk.png", Some(10)),
            ],
        );
        let hub = hub(provider);

        assert_eq!(
            hub.category_image("articles").await.as_deref(),
            Some("https://octo.github.io/FilesHub/images/retail-floor.png")
        );
        assert_eq!(
            hub.category_image("notes").await.as_deref(),
            Some("https://octo.github.io/FilesHub/images/Oregon-Coast.jpg")
        );
        assert_eq!(hub.category_image("Projects").await, None);
    }

    #[tokio::test]
    async fn test_category_image_missing_folder() {
        let provider = MockProvider::new();
        provider.fail_on("images");
        assert_eq!(hub(provider).category_image("articles").await, None);
    }

    #[tokio::test]
    async fn test_mock_provider_from_default_config() {
        let mut config = Config::default_config();
        config.provider.kind = crate::config::ProviderKind::Mock;

        let provider = crate::provider::build_provider(&config).unwrap();
        let hub = FileHub::from_config(provider, &config).unwrap();

        let articles = hub.folder_files("articles").await;
        assert_eq!(articles.len(), 2);
        assert_eq!(hub.file_count("notes").await, 2);

        // a repository named by the environment switches links to its pages site
        if std::env::var(crate::config::REPOSITORY_ENV_VAR).is_err() {
            assert_eq!(
                articles[0].url,
                "http://localhost:8000/articles/2025-01-24-sample-article.html"
            );
        }
    }

    #[test]
    fn test_github_kind_still_needs_identity_for_pages() {
        let config = Config::default_config();
        let provider: Arc<dyn ContentProvider> = Arc::new(MockProvider::new());

        if std::env::var(crate::config::REPOSITORY_ENV_VAR).is_err() {
            assert!(FileHub::from_config(provider, &config).is_err());
        }
    }

    #[test]
    fn test_stats_from_empty() {
        let stats = CatalogStats::from_files(&[]);
        assert_eq!(stats, CatalogStats::default());
    }
}

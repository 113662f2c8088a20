// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use file_hub::utils::logging::{format_error, format_heading, format_info, format_warning};
use file_hub::{
    CatalogedFile, Config, ContentProvider, FileHub, FileQuery, Project, SortOrder, TypeFilter,
    build_provider, format_date, format_file_size,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{error, info, warn};

const MIN_SEARCH_LEN: usize = 2;

#[derive(Parser)]
#[command(name = "file_hub")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Browse and search documents published in a GitHub repository", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Print results as json instead of a listing
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the files of one folder
    List {
        folder: String,

        #[arg(short, long)]
        query: Option<String>,

        #[arg(short = 't', long = "type", default_value = "all")]
        file_type: TypeFilter,

        #[arg(short, long, default_value = "date-desc")]
        sort: SortOrder,
    },

    /// Newest files across all configured folders
    Recent {
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Search every configured folder
    Search {
        query: String,

        #[arg(short = 't', long = "type", default_value = "all")]
        file_type: TypeFilter,
    },

    /// File counts per type
    Stats { folders: Vec<String> },

    /// Html projects published next to the hub
    Projects,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    file_hub::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    let provider = match build_provider(&config) {
        Ok(provider) => provider,
        Err(e) => {
            error!("Cannot create content provider: {}", e);
            return Err(anyhow::anyhow!(e).context("Failed to create content provider"));
        }
    };
    let hub = FileHub::from_config(provider, &config).context("Failed to set up file hub")?;
    info!(
        "Linking files under {} via {}",
        hub.discovery().urls().base(),
        hub.discovery().provider().name()
    );

    match cli.command {
        Commands::List {
            folder,
            query,
            file_type,
            sort,
        } => {
            cmd_list(&hub, &folder, query, file_type, sort, cli.json).await?;
        }
        Commands::Recent { limit } => {
            cmd_recent(&hub, limit, cli.json).await?;
        }
        Commands::Search { query, file_type } => {
            cmd_search(&hub, &query, &file_type, cli.json).await?;
        }
        Commands::Stats { folders } => {
            cmd_stats(&hub, folders, cli.json).await?;
        }
        Commands::Projects => {
            cmd_projects(&hub, cli.json).await?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}

fn print_files(title: &str, files: &[CatalogedFile]) {
    println!("\n{}\n", format_heading(title, files.len()));

    for file in files {
        println!("  {} [{}]", file.display_name, file.file_type);
        println!(
            "     {} · {} · {}",
            format_date(file.date),
            format_file_size(file.size),
            file.folder
        );
        println!("     {}", file.url);
    }
    println!();
}

async fn cmd_list(
    hub: &FileHub,
    folder: &str,
    query: Option<String>,
    file_type: TypeFilter,
    sort: SortOrder,
    json: bool,
) -> Result<()> {
    let start = Instant::now();
    let files = hub.folder_files(folder).await;

    let mut file_query = FileQuery::new().with_type(file_type).with_sort(sort);
    if let Some(query) = query {
        file_query = file_query.with_query(query);
    }
    let listed = file_query.apply(&files);

    info!(
        "Listed {} of {} files in {:.2}s",
        listed.len(),
        files.len(),
        start.elapsed().as_secs_f64()
    );

    if json {
        return print_json(&listed);
    }

    if listed.is_empty() {
        println!("{}", format_info(&format!("No files found in '{}'", folder)));
        return Ok(());
    }

    print_files(folder, &listed);
    Ok(())
}

async fn cmd_recent(hub: &FileHub, limit: usize, json: bool) -> Result<()> {
    let files = hub.recent_files(limit).await;

    if json {
        return print_json(&files);
    }

    print_files("Recent files", &files);
    Ok(())
}

async fn cmd_search(hub: &FileHub, query: &str, file_type: &TypeFilter, json: bool) -> Result<()> {
    if query.trim().chars().count() < MIN_SEARCH_LEN {
        println!(
            "{}",
            format_warning(&format!(
                "Search query must be at least {} characters",
                MIN_SEARCH_LEN
            ))
        );
        return Ok(());
    }

    let results = hub.search_across_folders(query, file_type).await;

    if json {
        return print_json(&results);
    }

    if results.is_empty() {
        println!("\nNo results found for query: \"{}\"\n", query);
        println!("Try:");
        println!("  - Using different search terms");
        println!("  - Removing the type filter");
        return Ok(());
    }

    print_files(&format!("Search results for \"{}\"", query), &results);
    Ok(())
}

async fn cmd_stats(hub: &FileHub, folders: Vec<String>, json: bool) -> Result<()> {
    let folders = if folders.is_empty() {
        hub.folders().to_vec()
    } else {
        folders
    };

    let mut report = Vec::with_capacity(folders.len());
    for folder in folders {
        let stats = hub.stats(&folder).await;
        let preview = hub.category_image(&folder).await;
        report.push((folder, stats, preview));
    }

    if json {
        let map: serde_json::Map<String, serde_json::Value> = report
            .into_iter()
            .map(|(folder, stats, preview)| {
                let mut value = serde_json::to_value(stats)?;
                if let Some(object) = value.as_object_mut() {
                    object.insert("preview".to_string(), serde_json::to_value(preview)?);
                }
                Ok((folder, value))
            })
            .collect::<std::result::Result<_, serde_json::Error>>()
            .context("Failed to serialize stats")?;
        return print_json(&map);
    }

    for (folder, stats, preview) in &report {
        println!("\n{}", format_heading(folder, stats.total));
        for (file_type, count) in &stats.by_type {
            println!("  {:<6} {}", file_type, count);
        }
        println!(
            "  dated  {}\n  size   {}",
            stats.dated,
            format_file_size(Some(stats.total_bytes))
        );
        if let Some(preview) = preview {
            println!("  image  {}", preview);
        }
    }
    println!();

    Ok(())
}

async fn cmd_projects(hub: &FileHub, json: bool) -> Result<()> {
    let projects: Vec<Project> = hub.discover_projects().await;

    if json {
        return print_json(&projects);
    }

    if projects.len() == 1 {
        println!("{}", format_error("No projects discovered, showing the hub only"));
    }

    println!("\n{}\n", format_heading("Projects", projects.len()));
    for project in &projects {
        println!("  {}", project.name);
        println!("     {}", project.description);
        println!("     {}", project.url);
        if let Some(screenshot) = &project.screenshot {
            println!("     screenshot: {}", screenshot);
        }
    }
    println!();

    Ok(())
}

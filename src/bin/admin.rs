//! CLI administration tool for url-redirector.
//!
//! Inspects the registries the server would load, without starting it.
//!
//! # Usage
//!
//! ```bash
//! # List every redirect and static key
//! cargo run --bin admin -- registry list
//!
//! # Show what a request for /github would produce
//! cargo run --bin admin -- registry resolve github
//!
//! # Validate a registry file before deploying it
//! cargo run --bin admin -- registry check --file registry.json
//! ```
//!
//! # Environment Variables
//!
//! - `REGISTRY_FILE` (optional): registry file, same as the server.
//!   Overridden by `--file`.

use url_redirector::application::services::ResolverService;
use url_redirector::domain::entities::{Registries, Resolution};
use url_redirector::infrastructure::memory::InMemoryRedirectRepository;
use url_redirector::infrastructure::registry_file::load_registries;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

/// CLI tool for inspecting url-redirector registries.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect redirect and static-page registries
    Registry {
        #[command(subcommand)]
        action: RegistryAction,
    },
}

/// Registry subcommands.
#[derive(Subcommand)]
enum RegistryAction {
    /// List all redirects and static pages
    List {
        /// Registry file (defaults to REGISTRY_FILE, then the built-in registries)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show how a key would be dispatched
    Resolve {
        /// Key as it would appear in the request path
        key: String,

        /// Registry file (defaults to REGISTRY_FILE, then the built-in registries)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Validate the registry and print counts
    Check {
        /// Registry file (defaults to REGISTRY_FILE, then the built-in registries)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Registry { action } => handle_registry_action(action).await?,
    }

    Ok(())
}

/// Dispatches registry commands.
async fn handle_registry_action(action: RegistryAction) -> Result<()> {
    match action {
        RegistryAction::List { file } => {
            let service = ResolverService::from_registries(load(file)?);
            list_registry(&service).await?;
        }
        RegistryAction::Resolve { key, file } => {
            let service = ResolverService::from_registries(load(file)?);
            resolve_key(&service, &key).await;
        }
        RegistryAction::Check { file } => {
            check_registry(file)?;
        }
    }

    Ok(())
}

/// `--file` wins over `REGISTRY_FILE`; neither means built-in.
fn registry_path(file: Option<PathBuf>) -> Option<PathBuf> {
    file.or_else(|| {
        std::env::var("REGISTRY_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
    })
}

fn load(file: Option<PathBuf>) -> Result<Registries> {
    let path = registry_path(file);
    load_registries(path.as_deref()).context("Failed to load registries")
}

/// Prints both registries.
///
/// # Output Format
///
/// ```text
/// Redirects
///
///   Key                  Target
///   ────────────────────────────────────────────────────────────
///   github               https://github.com/jawscout
///   home                 https://www.jawscout.cc
///
/// Static pages
///
///   icon.ico             noop
///   robots.txt           noop
/// ```
async fn list_registry(service: &ResolverService<InMemoryRedirectRepository>) -> Result<()> {
    println!("{}", "Redirects".bright_blue().bold());
    println!();

    let redirects = service
        .redirects()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list redirects: {}", e))?;

    if redirects.is_empty() {
        println!("{}", "  No redirects registered".yellow());
    } else {
        println!(
            "  {:<20} {}",
            "Key".bright_white().bold(),
            "Target".bright_white().bold()
        );
        println!("  {}", "─".repeat(60).bright_black());

        for (key, target) in &redirects {
            let target = if service.static_pages().contains(target) {
                format!("{} (static)", target).magenta()
            } else {
                target.normal()
            };
            println!("  {:<20} {}", key.cyan(), target);
        }
    }

    println!();
    println!("{}", "Static pages".bright_blue().bold());
    println!();

    let pages = service.static_pages();
    if pages.is_empty() {
        println!("{}", "  No static pages registered".yellow());
    }
    for key in pages.keys() {
        let kind = pages.get(key).map(|entry| entry.kind()).unwrap_or("-");
        println!("  {:<20} {}", key.cyan(), kind.bright_black());
    }

    println!();
    println!(
        "  Total: {} redirects, {} static pages",
        redirects.len().to_string().bright_white().bold(),
        pages.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints the response `dispatch` would produce for `key`.
async fn resolve_key(service: &ResolverService<InMemoryRedirectRepository>, key: &str) {
    println!("{} /{}", "Resolving".bright_blue().bold(), key.cyan());
    println!();

    match service.resolve_request(key).await {
        Ok(Resolution::Redirect(target)) => {
            println!("  Status:   {}", "302 Found".green().bold());
            println!("  Location: {}", target.bright_white());
        }
        Ok(Resolution::Static { key: page, entry }) => {
            let status = if entry.is_delegate() {
                "delegated to handler"
            } else {
                "200 OK (empty)"
            };
            println!("  Static:   {}", page.magenta());
            println!("  Status:   {}", status.green().bold());
        }
        Err(e) => {
            println!(
                "  Status:   {}",
                format!(
                    "{} {}",
                    e.status_code().as_u16(),
                    e.status_code().canonical_reason().unwrap_or("")
                )
                .red()
                .bold()
            );
            println!("  Body:     {}", e.to_string().bright_white());
        }
    }
    println!();
}

/// Validates the registry and reports counts.
fn check_registry(file: Option<PathBuf>) -> Result<()> {
    let path = registry_path(file);

    match &path {
        Some(p) => println!(
            "{} {}",
            "Checking registry file".bright_blue(),
            p.display().to_string().cyan()
        ),
        None => println!("{}", "Checking built-in registries".bright_blue()),
    }

    let registries = load_registries(path.as_deref()).context("Registry is invalid")?;

    println!("{}", "Registry OK".green().bold());
    println!(
        "  Redirects:    {}",
        registries.redirects.len().to_string().bright_green().bold()
    );
    println!(
        "  Static pages: {}",
        registries.static_pages.len().to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

mod format;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Catalog, Film, LoadOptions};
use pipeline::{filter_films, parse_date, search_films, FilmCriteria};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

use crate::format::CatalogStats;

/// bfi-films - BFI Southbank screening catalog
#[derive(Parser)]
#[command(name = "bfi-films")]
#[command(about = "Browse, filter and search BFI Southbank film screenings", long_about = None)]
struct Cli {
    /// Directory holding the bfi_*.json data files
    #[arg(short, long, env = "BFI_DATA_DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    /// File name prefix of the data files to load
    #[arg(long, default_value = "bfi_", global = true)]
    prefix: String,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List films, optionally filtered
    List {
        /// Category, e.g. james_cameron or christmas_films
        #[arg(long)]
        category: Option<String>,

        /// Cinema location, e.g. NFT1 or "BFI IMAX"
        #[arg(long)]
        location: Option<String>,

        /// Director name (partial match)
        #[arg(long)]
        director: Option<String>,

        /// Only screenings on or after this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        start_date: Option<NaiveDate>,

        /// Only screenings on or before this date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date_arg)]
        end_date: Option<NaiveDate>,

        /// Maximum number of films to return
        #[arg(long, default_value = "50")]
        limit: usize,
    },

    /// Search films by title, director or description
    Search {
        /// Text to look for (case-insensitive substring match)
        query: String,

        /// Maximum number of results to return
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show complete details for one film
    Details {
        /// Film title (case-insensitive exact match)
        title: String,
    },

    /// List categories with their film counts
    Categories,

    /// Show catalog statistics
    Stats,
}

fn main() -> Result<()> {
    // Initialize tracing; results go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let options = LoadOptions {
        file_prefix: cli.prefix.clone(),
        ..Default::default()
    };
    let start = Instant::now();
    let catalog = Catalog::load_with_options(&cli.data_dir, &options)
        .with_context(|| format!("Failed to load film catalog from {}", cli.data_dir.display()))?;
    eprintln!(
        "{} Loaded {} films, {} screenings in {:?}",
        "✓".green(),
        catalog.get_film_count(),
        catalog.get_total_screenings(),
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List {
            category,
            location,
            director,
            start_date,
            end_date,
            limit,
        } => {
            let criteria = FilmCriteria {
                category,
                location,
                director,
                start_date,
                end_date,
            };
            handle_list(&catalog, &criteria, limit, cli.json)?
        }
        Commands::Search { query, limit } => handle_search(&catalog, &query, limit, cli.json)?,
        Commands::Details { title } => handle_details(&catalog, &title, cli.json)?,
        Commands::Categories => handle_categories(&catalog, cli.json)?,
        Commands::Stats => handle_stats(&catalog, cli.json)?,
    }

    Ok(())
}

fn parse_date_arg(value: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", value))
}

/// Handle the 'list' command
fn handle_list(catalog: &Catalog, criteria: &FilmCriteria, limit: usize, json: bool) -> Result<()> {
    let mut films = filter_films(catalog.get_all_films(), criteria);
    tracing::debug!("{} films matched {:?}", films.len(), criteria);
    films.truncate(limit);

    if json {
        return print_json(&films);
    }
    print_text(&format::format_film_list(&films));
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, query: &str, limit: usize, json: bool) -> Result<()> {
    if query.trim().is_empty() {
        bail!("Search query cannot be empty");
    }

    let mut films = search_films(catalog.get_all_films(), query);
    films.truncate(limit);

    if json {
        return print_json(&films);
    }
    print_text(&format::format_search_results(query, &films));
    Ok(())
}

/// Handle the 'details' command
fn handle_details(catalog: &Catalog, title: &str, json: bool) -> Result<()> {
    if title.trim().is_empty() {
        bail!("Title cannot be empty");
    }

    let film: &Film = match catalog.get_film_by_title(title) {
        Some(film) => film,
        None => bail!("Film '{}' not found", title),
    };

    if json {
        return print_json(film);
    }
    print_text(&format::format_film_details(film));
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(catalog: &Catalog, json: bool) -> Result<()> {
    let categories = format::category_summaries(catalog);
    if json {
        return print_json(&categories);
    }
    print_text(&format::format_categories(&categories));
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(catalog: &Catalog, json: bool) -> Result<()> {
    let stats = CatalogStats::from_catalog(catalog);
    if json {
        return print_json(&stats);
    }
    println!("{}", "Catalog statistics:".bold().blue());
    print_text(&format::format_stats(&stats));
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize results")?;
    println!("{}", text);
    Ok(())
}

fn print_text(text: &str) {
    println!("{}", text);
}

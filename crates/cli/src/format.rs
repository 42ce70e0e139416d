//! Human-readable rendering of query results.
//!
//! Every function returns a plain `String`; `main` decides where it goes.

use data_loader::{Catalog, Film};
use pipeline::{get_directors, get_locations};
use serde::Serialize;

/// Longest cast list shown in film details before it is cut short.
const MAX_CAST_CHARS: usize = 100;

const UNKNOWN: &str = "Unknown";

/// Summary numbers for the `stats` command.
#[derive(Debug, Serialize)]
pub struct CatalogStats {
    pub films: usize,
    pub screenings: usize,
    pub categories: Vec<CategorySummary>,
    pub locations: Vec<String>,
    pub directors: usize,
    pub files_loaded: usize,
    pub files_skipped: usize,
    pub duplicates_removed: usize,
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub films: usize,
}

impl CatalogStats {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let films = catalog.get_all_films();
        let report = catalog.load_report();
        Self {
            films: catalog.get_film_count(),
            screenings: catalog.get_total_screenings(),
            categories: category_summaries(catalog),
            locations: get_locations(films),
            directors: get_directors(films).len(),
            files_loaded: report.files_loaded(),
            files_skipped: report.files_skipped(),
            duplicates_removed: report.duplicates_removed,
        }
    }
}

/// Categories with their film counts, sorted by name.
pub fn category_summaries(catalog: &Catalog) -> Vec<CategorySummary> {
    catalog
        .get_categories()
        .into_iter()
        .map(|name| CategorySummary {
            name: name.to_string(),
            films: catalog.category_size(name),
        })
        .collect()
}

/// Result of the `list` command.
pub fn format_film_list(films: &[Film]) -> String {
    if films.is_empty() {
        return "No films found matching the criteria.".to_string();
    }

    let mut lines = vec![format!("Found {} film(s):\n", films.len())];
    for film in films {
        lines.push(format!(
            "• {}\n  Director: {} | Runtime: {} | Rating: {}\n  Screenings: {}\n",
            film.title,
            film.director.as_deref().unwrap_or(UNKNOWN),
            film.runtime.as_deref().unwrap_or(UNKNOWN),
            film.rating.as_deref().unwrap_or("Not rated"),
            film.screening_count()
        ));
    }
    lines.join("\n")
}

/// Result of the `search` command.
pub fn format_search_results(query: &str, films: &[Film]) -> String {
    if films.is_empty() {
        return format!("No films found matching '{}'.", query);
    }

    let mut lines = vec![format!("Found {} film(s) matching '{}':\n", films.len(), query)];
    for film in films {
        lines.push(format!(
            "• {}\n  Director: {}\n  Screenings: {}\n",
            film.title,
            film.director.as_deref().unwrap_or(UNKNOWN),
            film.screening_count()
        ));
    }
    lines.join("\n")
}

/// Full details of one film, including every screening.
pub fn format_film_details(film: &Film) -> String {
    let mut lines = vec![format!("🎬 {}\n", film.title)];

    let labelled = [
        ("Country/Year", film.country_year.as_deref()),
        ("Director", film.director.as_deref()),
        ("Cast", film.cast.as_deref()),
        ("Runtime", film.runtime.as_deref()),
        ("Format", film.format.as_deref()),
        ("Rating", film.rating.as_deref()),
    ];
    for (label, value) in labelled {
        match value.filter(|v| !v.is_empty()) {
            Some(v) if label == "Cast" => lines.push(format!("{}: {}", label, truncate(v, MAX_CAST_CHARS))),
            Some(v) => lines.push(format!("{}: {}", label, v)),
            None => {}
        }
    }
    lines.push(String::new());

    if let Some(description) = film.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("Description:\n{}\n", description));
    }

    if film.screenings.is_empty() {
        lines.push("No screenings scheduled.".to_string());
    } else {
        lines.push(format!("Screenings ({} total):\n", film.screenings.len()));
        for screening in &film.screenings {
            lines.push(format!(
                "  • {} at {} ({})",
                screening.date.as_deref().unwrap_or(UNKNOWN),
                screening.time.as_deref().unwrap_or(UNKNOWN),
                screening.location.as_deref().unwrap_or(UNKNOWN)
            ));
        }
    }
    lines.join("\n")
}

/// Result of the `categories` command.
pub fn format_categories(categories: &[CategorySummary]) -> String {
    let mut lines = vec![format!("{} categories:", categories.len())];
    for category in categories {
        lines.push(format!("  • {} ({} films)", category.name, category.films));
    }
    lines.join("\n")
}

/// Result of the `stats` command.
pub fn format_stats(stats: &CatalogStats) -> String {
    let mut lines = vec![
        format!("Films: {}", stats.films),
        format!("Screenings: {}", stats.screenings),
        format!("Categories: {}", stats.categories.len()),
        format!("Directors: {}", stats.directors),
        format!("Locations: {}", stats.locations.join(", ")),
        format!(
            "Files: {} loaded, {} skipped",
            stats.files_loaded, stats.files_skipped
        ),
    ];
    if stats.duplicates_removed > 0 {
        lines.push(format!("Duplicates removed: {}", stats.duplicates_removed));
    }
    lines.join("\n")
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::Screening;

    fn terminator() -> Film {
        Film {
            category: Some("james_cameron".to_string()),
            director: Some("James Cameron".to_string()),
            runtime: Some("107min".to_string()),
            country_year: Some("USA 1984".to_string()),
            description: Some("A cyborg is sent back in time.".to_string()),
            screenings: vec![
                Screening {
                    date: Some("2025-10-24".to_string()),
                    time: Some("20:30".to_string()),
                    location: Some("NFT1".to_string()),
                },
                Screening {
                    date: Some("2025-10-31".to_string()),
                    time: None,
                    location: Some("BFI IMAX".to_string()),
                },
            ],
            ..Film::new("The Terminator")
        }
    }

    #[test]
    fn test_film_list() {
        let text = format_film_list(&[terminator()]);
        assert!(text.starts_with("Found 1 film(s):"));
        assert!(text.contains("• The Terminator"));
        assert!(text.contains("Director: James Cameron | Runtime: 107min | Rating: Not rated"));
        assert!(text.contains("Screenings: 2"));
    }

    #[test]
    fn test_empty_results() {
        assert_eq!(format_film_list(&[]), "No films found matching the criteria.");
        assert_eq!(format_search_results("kubrick", &[]), "No films found matching 'kubrick'.");
    }

    #[test]
    fn test_search_results() {
        let text = format_search_results("cameron", &[terminator(), Film::new("Untitled")]);
        assert!(text.starts_with("Found 2 film(s) matching 'cameron':"));
        assert!(text.contains("• Untitled\n  Director: Unknown"));
    }

    #[test]
    fn test_film_details() {
        let text = format_film_details(&terminator());
        assert!(text.starts_with("🎬 The Terminator"));
        assert!(text.contains("Country/Year: USA 1984"));
        assert!(text.contains("Description:\nA cyborg is sent back in time."));
        assert!(text.contains("Screenings (2 total):"));
        assert!(text.contains("  • 2025-10-24 at 20:30 (NFT1)"));
        assert!(text.contains("  • 2025-10-31 at Unknown (BFI IMAX)"));
        assert!(!text.contains("Format:"));
    }

    #[test]
    fn test_details_without_screenings() {
        let text = format_film_details(&Film::new("Heat"));
        assert!(text.ends_with("No screenings scheduled."));
    }

    #[test]
    fn test_long_cast_is_truncated() {
        let film = Film {
            cast: Some("é".repeat(120)),
            ..Film::new("Crowded")
        };
        let text = format_film_details(&film);
        assert!(text.contains(&format!("Cast: {}...", "é".repeat(100))));
    }

    #[test]
    fn test_stats() {
        let catalog = Catalog::from_films(vec![terminator(), Film::new("Heat"), Film::new("Heat")]);
        let stats = CatalogStats::from_catalog(&catalog);

        assert_eq!(stats.films, 2);
        assert_eq!(stats.screenings, 2);
        assert_eq!(stats.directors, 1);
        assert_eq!(stats.locations, vec!["BFI IMAX", "NFT1"]);
        assert_eq!(stats.duplicates_removed, 1);

        let text = format_stats(&stats);
        assert!(text.contains("Locations: BFI IMAX, NFT1"));
        assert!(text.contains("Duplicates removed: 1"));

        let categories = format_categories(&stats.categories);
        assert!(categories.contains("  • james_cameron (1 films)"));
        assert!(categories.contains("  • unknown (1 films)"));
    }
}

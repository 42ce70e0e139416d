use data_loader::{Catalog, FileOutcome};
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    println!("Loading film catalog...\n");

    let start = Instant::now();
    let catalog = Catalog::load_from_dir(data_dir)
        .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    let report = catalog.load_report();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Files: {} loaded, {} skipped", report.files_loaded(), report.files_skipped());
    for outcome in &report.files {
        if let FileOutcome::Skipped { path, reason } = outcome {
            println!("  skipped {}: {}", path.display(), reason);
        }
    }
    println!("Films: {} ({} duplicates removed)", catalog.get_film_count(), report.duplicates_removed);
    println!("Screenings: {}", catalog.get_total_screenings());
    println!("Categories: {}", catalog.get_categories().join(", "));
}

use data_loader::ListingCatalog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/internships.json");

    println!("Loading listings from {}...\n", path.display());

    let start = Instant::now();
    let catalog = ListingCatalog::load_from_file(path)
        .expect("Failed to load listings");
    let elapsed = start.elapsed();

    let (listings, companies, open) = catalog.counts();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Listings: {}", listings);
    println!("Companies: {}", companies);
    println!("Open: {}", open);
    println!("\nPerformance: {:.0} listings/second",
             listings as f64 / elapsed.as_secs_f64());
}

//! Simple test harness for the search orchestrator.
//!
//! Loads a listing document, runs a few searches and logs what the page would
//! show. Pass the document path as the first argument.

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use pipeline::FilterCriteria;
use server::{DisplayState, SearchOrchestrator};
use sources::JsonFileSource;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,server=debug,sources=debug,pipeline=debug")
        .init();

    info!("Starting internship search test harness");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/internships.json"));

    let orchestrator = SearchOrchestrator::new(JsonFileSource::new(&path));
    let available = orchestrator.refresh().await;
    if let Some(err) = orchestrator.last_error().await {
        info!("No listings available: {}", err);
    }
    info!("{} listings available from {}", available, path.display());

    let searches = [
        ("everything", FilterCriteria::default()),
        ("remote", FilterCriteria::new().with_type("remote")),
        ("python, semester 5", FilterCriteria::new().with_skills("python").with_semester("5")),
        ("paid in jakarta", FilterCriteria::new().with_location("jakarta").with_paid_status("paid")),
    ];

    for (label, criteria) in &searches {
        let results = orchestrator.search(criteria).await?;
        match results.display_state() {
            DisplayState::Loading => info!("[{}] still loading", label),
            DisplayState::Unavailable => info!("[{}] no data available", label),
            DisplayState::Empty => info!("[{}] no matching internships", label),
            DisplayState::Populated { count } => {
                info!("[{}] {} of {} listings match:", label, count, results.total());
                for (i, record) in results.iter().enumerate() {
                    info!(
                        "  {}. {} ({}, {}) [{}] min semester {}",
                        i + 1,
                        record,
                        record.location,
                        record.work_type,
                        record.paid,
                        record.min_semester
                    );
                }
            }
        }
    }

    Ok(())
}

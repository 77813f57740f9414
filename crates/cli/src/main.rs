use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{InternshipRecord, ListingCatalog, ListingStatus};
use pipeline::FilterCriteria;
use server::{DisplayState, SearchOrchestrator};
use sources::{JsonFileSource, ProfileSource, StaticProfileSource, ViewerProfile};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// intern-search - browse and filter internship listings
#[derive(Parser)]
#[command(name = "intern-search")]
#[command(about = "Search internship listings with the same filters as the web search page", long_about = None)]
struct Cli {
    /// Path to the listing document (JSON)
    #[arg(short, long, default_value = "data/internships.json")]
    data_file: PathBuf,

    /// Name shown in the header
    #[arg(long)]
    viewer: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter listings
    Search {
        /// Text matched against title, company and description
        #[arg(long, default_value = "")]
        search: String,

        /// Location substring
        #[arg(long, default_value = "")]
        location: String,

        /// Work type (on-site, remote, hybrid) or "all"
        #[arg(long = "type", default_value = "all")]
        work_type: String,

        /// Comma-separated skills
        #[arg(long, default_value = "")]
        skill: String,

        /// Comma-separated majors
        #[arg(long, default_value = "")]
        major: String,

        /// Your current semester
        #[arg(long, default_value = "")]
        semester: String,

        /// "paid" or "unpaid"
        #[arg(long, default_value = "")]
        paid: String,

        /// Number of listings to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Show one listing in full
    Show {
        /// Listing ID
        #[arg(long)]
        id: String,
    },

    /// Show catalog statistics
    Stats,

    /// Run benchmark to test filter throughput
    Benchmark {
        /// Number of searches to run
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of concurrent searches
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let profile = match &cli.viewer {
        Some(name) => StaticProfileSource::new(ViewerProfile::new(name.clone())),
        None => StaticProfileSource::guest(),
    }
    .fetch_profile()
    .await?;
    println!("{} {}", "Signed in as".dimmed(), profile.label().bold());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Search {
            search,
            location,
            work_type,
            skill,
            major,
            semester,
            paid,
            limit,
        } => {
            let criteria = FilterCriteria {
                search_term: search,
                location_filter: location,
                type_filter: work_type,
                skill_filter: skill,
                major_filter: major,
                semester_filter: semester,
                status_filter: paid,
            };
            handle_search(cli.data_file, criteria, limit).await?
        }
        Commands::Show { id } => handle_show(&load_catalog(&cli.data_file)?, &id)?,
        Commands::Stats => handle_stats(&load_catalog(&cli.data_file)?),
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(cli.data_file, requests, concurrent).await?,
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<ListingCatalog> {
    let start = Instant::now();
    let catalog = ListingCatalog::load_from_file(path)
        .with_context(|| format!("Failed to load listings from {}", path.display()))?;
    println!("{} Loaded {} listings in {:?}", "✓".green(), catalog.len(), start.elapsed());
    Ok(catalog)
}

/// Handle the 'search' command
async fn handle_search(data_file: PathBuf, criteria: FilterCriteria, limit: usize) -> Result<()> {
    tracing::debug!("Searching with {:?}", criteria);
    let orchestrator = SearchOrchestrator::new(JsonFileSource::new(data_file));
    orchestrator.refresh().await;

    let results = orchestrator.search(&criteria).await?;
    match results.display_state() {
        DisplayState::Loading => println!("{}", "Still loading listings...".yellow()),
        DisplayState::Unavailable => {
            let reason = orchestrator
                .last_error()
                .await
                .unwrap_or_else(|| "unknown error".to_string());
            println!("{}", "No data available.".red().bold());
            println!("  {}", reason.dimmed());
        }
        DisplayState::Empty => println!("{}", "No internships match your filters.".yellow()),
        DisplayState::Populated { count } => {
            println!(
                "{}",
                format!("{} of {} internships match", count, results.total()).bold().blue()
            );
            for (rank, record) in results.iter().take(limit).enumerate() {
                print_listing_line(rank + 1, record);
            }
            if count > limit {
                println!("  ... and {} more (use --limit)", count - limit);
            }
        }
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &ListingCatalog, id: &str) -> Result<()> {
    let record = catalog
        .get(id)
        .ok_or_else(|| anyhow!("Listing {} not found", id))?;

    println!("{}", record.title.bold().blue());
    println!("{}Company: {}", "• ".green(), record.company);
    println!("{}Location: {} ({})", "• ".green(), record.location, record.work_type);
    println!("{}Status: {}", "• ".green(), status_label(record.status));
    println!("{}Compensation: {}", "• ".green(), compensation(record));
    println!("{}Minimum semester: {}", "• ".green(), record.min_semester);
    println!("{}Duration: {}", "• ".cyan(), record.duration);
    println!("{}Posted: {}  Deadline: {}", "• ".cyan(), record.posted, record.deadline);
    if !record.requirements.is_empty() {
        println!("Requirements:");
        for requirement in &record.requirements {
            println!("  - {}", requirement);
        }
    }
    if !record.tags.is_empty() {
        println!("Tags: {}", record.tags.join(", "));
    }
    if !record.description.is_empty() {
        println!("\n{}", record.description);
    }
    Ok(())
}

/// Handle the 'stats' command
fn handle_stats(catalog: &ListingCatalog) {
    let (listings, companies, open) = catalog.counts();
    let paid = catalog.records().iter().filter(|r| r.paid == "paid").count();

    println!("{}", "Catalog statistics:".bold().blue());
    println!("{}Listings: {}", "• ".green(), listings);
    println!("{}Companies: {}", "• ".green(), companies);
    println!("{}Open: {}", "• ".green(), open);
    println!("{}Paid: {}", "• ".green(), paid);

    let mut by_type: Vec<(String, usize)> = Vec::new();
    for record in catalog.records() {
        let work_type = record.work_type.to_lowercase();
        match by_type.iter_mut().find(|(t, _)| *t == work_type) {
            Some((_, count)) => *count += 1,
            None => by_type.push((work_type, 1)),
        }
    }
    by_type.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    println!("By work type:");
    for (work_type, count) in by_type {
        println!("  - {}: {}", work_type, count);
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(data_file: PathBuf, requests: usize, concurrent: usize) -> Result<()> {
    let orchestrator = SearchOrchestrator::new(JsonFileSource::new(data_file));
    if orchestrator.refresh().await == 0 {
        return Err(anyhow!(
            "No listings to benchmark against: {}",
            orchestrator.last_error().await.unwrap_or_default()
        ));
    }
    let records = orchestrator.snapshot().await;

    // Build randomized criteria from the listings themselves so searches hit
    let criteria: Vec<FilterCriteria> = (0..requests)
        .map(|_| random_criteria(&records))
        .collect();

    let limiter = Arc::new(Semaphore::new(concurrent.max(1)));
    let started = Instant::now();
    let mut handles = vec![];
    for criteria in criteria {
        let orchestrator = orchestrator.clone();
        let limiter = limiter.clone();
        let handle = tokio::spawn(async move {
            let _permit = limiter.acquire_owned().await?;
            let start = Instant::now();
            orchestrator.search(&criteria).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let wall_time = started.elapsed();

    if timings.is_empty() {
        println!("No searches run.");
        return Ok(());
    }

    let total_time: Duration = timings.iter().sum();
    let avg_latency = total_time / (timings.len() as u32);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];
    let throughput = requests as f32 / wall_time.as_secs_f32();

    println!("Benchmark results ({} listings):", records.len());
    println!("Wall time: {:?}", wall_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!("Throughput: {:.2} searches/second", throughput);

    Ok(())
}

fn random_criteria(records: &[InternshipRecord]) -> FilterCriteria {
    let pick = |n: usize| (rand::random::<u32>() as usize) % n;
    let record = &records[pick(records.len())];

    let mut criteria = FilterCriteria::new().with_semester((pick(8) + 1).to_string());
    if let Some(word) = record.title.split_whitespace().next() {
        criteria = criteria.with_search_term(word);
    }
    if !record.requirements.is_empty() {
        let skill = &record.requirements[pick(record.requirements.len())];
        criteria = criteria.with_skills(skill.clone());
    }
    if pick(2) == 0 {
        criteria = criteria.with_type(record.work_type.clone());
    }
    criteria
}

fn print_listing_line(rank: usize, record: &InternshipRecord) {
    println!(
        "{}. {} - {} [{}] {} | semester {}+ | {}",
        rank.to_string().green(),
        record.title.bold(),
        record.company,
        record.location,
        record.work_type,
        record.min_semester,
        status_label(record.status)
    );
    if !record.requirements.is_empty() {
        println!("   {}", record.requirements.join(", ").dimmed());
    }
}

fn status_label(status: ListingStatus) -> colored::ColoredString {
    match status {
        ListingStatus::Open => "Open".green(),
        ListingStatus::Closed => "Closed".red(),
        ListingStatus::Filled => "Filled".yellow(),
        ListingStatus::Unknown => "Unknown".dimmed(),
    }
}

fn compensation(record: &InternshipRecord) -> String {
    match (&record.salary, &record.salary_amount) {
        (Some(salary), _) => format!("{} ({})", record.paid, salary),
        (None, Some(amount)) => format!("{} ({})", record.paid, amount),
        (None, None) => record.paid.clone(),
    }
}

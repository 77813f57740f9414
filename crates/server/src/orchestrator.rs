//! # Search Orchestrator
//!
//! Coordinates one search page:
//! 1. Fetch the listing collection from a source
//! 2. Keep the last successful collection as the snapshot
//! 3. Evaluate the filter engine against the snapshot for each criteria change
//! 4. Tell the page which state to render (loading, unavailable, empty, results)
//!
//! A failed fetch never discards the snapshot and never reaches the filter
//! engine; the page just sees "no data available" until something loads.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use data_loader::InternshipRecord;
use pipeline::{FilterCriteria, FilterPipeline};
use pipeline::filter_pipeline::DEFAULT_PARALLEL_THRESHOLD;
use sources::InternshipSource;

/// Progress of the most recent fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    /// Nothing requested yet
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch succeeded
    Loaded,
    /// The last fetch failed; the snapshot is whatever loaded before
    Failed,
}

/// What the page should render for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// First fetch still in flight
    Loading,
    /// No listings were ever loaded and the last fetch failed
    Unavailable,
    /// Listings are loaded but none match
    Empty,
    /// `count` listings match
    Populated { count: usize },
}

/// Matching listings for one evaluation.
///
/// Holds the snapshot it was computed from, so results stay valid even if a
/// refresh swaps the snapshot while the page is still rendering.
#[derive(Debug, Clone)]
pub struct SearchResults {
    snapshot: Arc<Vec<InternshipRecord>>,
    positions: Vec<usize>,
    state: DisplayState,
}

impl SearchResults {
    /// Matching listings in provider order.
    pub fn iter(&self) -> impl Iterator<Item = &InternshipRecord> + '_ {
        self.positions.iter().map(|&pos| &self.snapshot[pos])
    }

    /// Count of matches.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn display_state(&self) -> DisplayState {
        self.state
    }

    /// Size of the collection the search ran against.
    pub fn total(&self) -> usize {
        self.snapshot.len()
    }
}

struct Snapshot {
    records: Arc<Vec<InternshipRecord>>,
    fetch_state: FetchState,
    loaded_once: bool,
    last_error: Option<String>,
}

/// Main orchestrator for a search page.
///
/// Cloning shares the snapshot, so a refresh through one clone is visible to
/// searches through another.
pub struct SearchOrchestrator<S> {
    source: Arc<S>,
    snapshot: Arc<RwLock<Snapshot>>,
}

impl<S> Clone for SearchOrchestrator<S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            snapshot: self.snapshot.clone(),
        }
    }
}

impl<S: InternshipSource + 'static> SearchOrchestrator<S> {
    /// Create an orchestrator with an empty snapshot. Nothing is fetched
    /// until `refresh` is called.
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            snapshot: Arc::new(RwLock::new(Snapshot {
                records: Arc::new(Vec::new()),
                fetch_state: FetchState::Idle,
                loaded_once: false,
                last_error: None,
            })),
        }
    }

    /// Fetch the listing collection and replace the snapshot wholesale.
    ///
    /// On failure the previous snapshot is kept and the error is recorded
    /// (see `last_error`). Returns the number of listings available after the
    /// call either way.
    pub async fn refresh(&self) -> usize {
        let start_time = Instant::now();
        {
            let mut snapshot = self.snapshot.write().await;
            snapshot.fetch_state = FetchState::Loading;
        }

        let result = self.source.fetch_internships().await;

        let mut snapshot = self.snapshot.write().await;
        match result {
            Ok(records) => {
                info!(
                    "Loaded {} listings from {} in {:.2?}",
                    records.len(),
                    self.source.name(),
                    start_time.elapsed()
                );
                snapshot.records = Arc::new(records);
                snapshot.fetch_state = FetchState::Loaded;
                snapshot.loaded_once = true;
                snapshot.last_error = None;
            }
            Err(err) => {
                warn!(
                    "Fetching listings from {} failed, keeping {} cached listings: {:#}",
                    self.source.name(),
                    snapshot.records.len(),
                    err
                );
                snapshot.fetch_state = FetchState::Failed;
                snapshot.last_error = Some(format!("{:#}", err));
            }
        }
        snapshot.records.len()
    }

    /// Evaluate `criteria` against the current snapshot.
    pub async fn search(&self, criteria: &FilterCriteria) -> Result<SearchResults> {
        let (records, fetch_state, loaded_once) = {
            let snapshot = self.snapshot.read().await;
            (snapshot.records.clone(), snapshot.fetch_state, snapshot.loaded_once)
        };

        let positions = evaluate(records.clone(), criteria, |pipeline, records| {
            pipeline.matching_indices(records)
        })
        .await?;

        let state = display_state(fetch_state, loaded_once, positions.len());
        debug!(
            "Search matched {} of {} listings ({:?})",
            positions.len(),
            records.len(),
            state
        );

        Ok(SearchResults {
            snapshot: records,
            positions,
            state,
        })
    }

    /// Count of matches for `criteria` against the current snapshot.
    pub async fn match_count(&self, criteria: &FilterCriteria) -> Result<usize> {
        let records = self.snapshot().await;
        evaluate(records, criteria, |pipeline, records| pipeline.count(records)).await
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<Vec<InternshipRecord>> {
        self.snapshot.read().await.records.clone()
    }

    pub async fn fetch_state(&self) -> FetchState {
        self.snapshot.read().await.fetch_state
    }

    /// Message of the last failed fetch, cleared by the next success.
    pub async fn last_error(&self) -> Option<String> {
        self.snapshot.read().await.last_error.clone()
    }
}

/// Run `op` with the pipeline for `criteria` over `records`. Collections at
/// or above the parallel threshold are evaluated on the blocking pool.
async fn evaluate<T, F>(
    records: Arc<Vec<InternshipRecord>>,
    criteria: &FilterCriteria,
    op: F,
) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce(&FilterPipeline, &[InternshipRecord]) -> T + Send + 'static,
{
    if records.len() < DEFAULT_PARALLEL_THRESHOLD {
        return Ok(op(&FilterPipeline::from_criteria(criteria), records.as_slice()));
    }
    let criteria = criteria.clone();
    tokio::task::spawn_blocking(move || op(&FilterPipeline::from_criteria(&criteria), records.as_slice()))
        .await
        .context("Filter task panicked")
}

fn display_state(fetch_state: FetchState, loaded_once: bool, matches: usize) -> DisplayState {
    if !loaded_once {
        match fetch_state {
            FetchState::Idle | FetchState::Loading => return DisplayState::Loading,
            FetchState::Failed => return DisplayState::Unavailable,
            FetchState::Loaded => {}
        }
    }
    if matches == 0 {
        DisplayState::Empty
    } else {
        DisplayState::Populated { count: matches }
    }
}

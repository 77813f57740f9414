//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! filters together using the builder pattern, plus the `filter_internships`
//! / `match_count` entry points used by callers that just hold criteria.

use crate::criteria::FilterCriteria;
use crate::filters::{
    LocationFilter, PaidStatusFilter, RequirementFilter, SemesterFilter, TextSearchFilter,
    WorkTypeFilter,
};
use crate::traits::Filter;
use data_loader::InternshipRecord;
use rayon::prelude::*;

/// Collections at least this large are evaluated on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// Chains multiple filters together into a processing pipeline.
///
/// A listing is kept only if every filter accepts it. Output keeps input
/// order and borrows from the input slice.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextSearchFilter::new("backend"))
///     .add_filter(SemesterFilter::new(5));
///
/// let matches = pipeline.apply(&records);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
    parallel_threshold: usize,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Build the pipeline for a set of criteria, skipping every field left
    /// at its default.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new();
        if let Some(filter) = TextSearchFilter::from_criteria(criteria) {
            pipeline = pipeline.add_filter(filter);
        }
        if let Some(filter) = LocationFilter::from_criteria(criteria) {
            pipeline = pipeline.add_filter(filter);
        }
        if let Some(filter) = WorkTypeFilter::from_criteria(criteria) {
            pipeline = pipeline.add_filter(filter);
        }
        if let Some(filter) = RequirementFilter::skills(criteria) {
            pipeline = pipeline.add_filter(filter);
        }
        if let Some(filter) = RequirementFilter::majors(criteria) {
            pipeline = pipeline.add_filter(filter);
        }
        if let Some(filter) = SemesterFilter::from_criteria(criteria) {
            pipeline = pipeline.add_filter(filter);
        }
        if let Some(filter) = PaidStatusFilter::from_criteria(criteria) {
            pipeline = pipeline.add_filter(filter);
        }
        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Configure the collection size from which stages run in parallel
    /// (default: 2048).
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Names of the active filters, in evaluation order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Positions (into `records`) of the listings that pass every filter.
    ///
    /// ## Algorithm
    /// 1. Start with every position
    /// 2. For each filter in order:
    ///    a. Keep the positions whose listing the filter accepts
    ///    b. Log filter name with input and output counts
    /// 3. Return the surviving positions, still ascending
    pub fn matching_indices(&self, records: &[InternshipRecord]) -> Vec<usize> {
        let mut current: Vec<usize> = (0..records.len()).collect();
        for filter in &self.filters {
            let input_count = current.len();
            current = if input_count >= self.parallel_threshold {
                // Indexed parallel collect keeps the ascending order.
                current
                    .into_par_iter()
                    .filter(|&pos| filter.matches(&records[pos]))
                    .collect()
            } else {
                current
                    .into_iter()
                    .filter(|&pos| filter.matches(&records[pos]))
                    .collect()
            };
            tracing::debug!(
                "Filter applied: {} (input count: {}, output count: {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        current
    }

    /// Apply all filters to the listings.
    pub fn apply<'a>(&self, records: &'a [InternshipRecord]) -> Vec<&'a InternshipRecord> {
        self.matching_indices(records)
            .into_iter()
            .map(|pos| &records[pos])
            .collect()
    }

    /// Number of listings that pass every filter.
    pub fn count(&self, records: &[InternshipRecord]) -> usize {
        if self.filters.is_empty() {
            return records.len();
        }
        if records.len() >= self.parallel_threshold {
            records.par_iter().filter(|r| self.accepts(r)).count()
        } else {
            records.iter().filter(|r| self.accepts(r)).count()
        }
    }

    /// True if a single listing passes every filter.
    pub fn accepts(&self, record: &InternshipRecord) -> bool {
        self.filters.iter().all(|f| f.matches(record))
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Listings matching `criteria`, in their original order.
pub fn filter_internships<'a>(
    records: &'a [InternshipRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a InternshipRecord> {
    FilterPipeline::from_criteria(criteria).apply(records)
}

/// How many listings match `criteria`.
pub fn match_count(records: &[InternshipRecord], criteria: &FilterCriteria) -> usize {
    FilterPipeline::from_criteria(criteria).count(records)
}

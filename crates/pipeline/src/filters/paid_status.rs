//! Paid / unpaid filter.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use data_loader::InternshipRecord;

/// Keeps listings whose `paid` code equals the requested one exactly.
///
/// Unlike the text filters this comparison is case-sensitive: `paid` is a
/// fixed code chosen from a select box, not typed text.
pub struct PaidStatusFilter {
    code: String,
}

impl PaidStatusFilter {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    pub fn from_criteria(criteria: &FilterCriteria) -> Option<Self> {
        if criteria.status_filter.is_empty() {
            None
        } else {
            Some(Self::new(criteria.status_filter.clone()))
        }
    }
}

impl Filter for PaidStatusFilter {
    fn name(&self) -> &str {
        "PaidStatusFilter"
    }

    fn matches(&self, record: &InternshipRecord) -> bool {
        record.paid == self.code
    }
}

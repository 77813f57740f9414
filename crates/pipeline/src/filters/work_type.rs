//! Work arrangement filter (on-site / remote / hybrid).

use crate::criteria::{FilterCriteria, is_any_type};
use crate::traits::Filter;
use data_loader::InternshipRecord;

/// Keeps listings whose work type equals the requested one, ignoring case.
pub struct WorkTypeFilter {
    work_type: String,
}

impl WorkTypeFilter {
    pub fn new(work_type: &str) -> Self {
        Self {
            work_type: work_type.to_lowercase(),
        }
    }

    /// `None` for an empty filter or the `all` sentinel.
    pub fn from_criteria(criteria: &FilterCriteria) -> Option<Self> {
        if is_any_type(&criteria.type_filter) {
            None
        } else {
            Some(Self::new(&criteria.type_filter))
        }
    }
}

impl Filter for WorkTypeFilter {
    fn name(&self) -> &str {
        "WorkTypeFilter"
    }

    fn matches(&self, record: &InternshipRecord) -> bool {
        record.work_type.to_lowercase() == self.work_type
    }
}

//! Location filter.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use data_loader::InternshipRecord;

/// Keeps listings whose location contains the requested place, ignoring case.
pub struct LocationFilter {
    location: String,
}

impl LocationFilter {
    pub fn new(location: &str) -> Self {
        Self {
            location: location.to_lowercase(),
        }
    }

    pub fn from_criteria(criteria: &FilterCriteria) -> Option<Self> {
        if criteria.location_filter.is_empty() {
            None
        } else {
            Some(Self::new(&criteria.location_filter))
        }
    }
}

impl Filter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn matches(&self, record: &InternshipRecord) -> bool {
        record.location.to_lowercase().contains(&self.location)
    }
}

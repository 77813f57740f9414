//! Semester eligibility filter.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use data_loader::InternshipRecord;

/// Keeps listings the viewer is eligible for: their semester must be at
/// least the listing's `min_semester`.
pub struct SemesterFilter {
    semester: i64,
}

impl SemesterFilter {
    pub fn new(semester: i64) -> Self {
        Self { semester }
    }

    /// Parses the typed semester as a whole integer after trimming. Anything
    /// else ("6th", "6.0", "sem 6") counts as 0.
    pub fn from_criteria(criteria: &FilterCriteria) -> Option<Self> {
        if criteria.semester_filter.is_empty() {
            return None;
        }
        let semester = criteria.semester_filter.trim().parse::<i64>().unwrap_or(0);
        Some(Self::new(semester))
    }
}

impl Filter for SemesterFilter {
    fn name(&self) -> &str {
        "SemesterFilter"
    }

    fn matches(&self, record: &InternshipRecord) -> bool {
        self.semester >= i64::from(record.min_semester)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(min_semester: u32) -> InternshipRecord {
        let mut record = InternshipRecord::new("s", "Intern");
        record.min_semester = min_semester;
        record
    }

    fn filter_for(input: &str) -> SemesterFilter {
        SemesterFilter::from_criteria(&FilterCriteria::default().with_semester(input)).unwrap()
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let filter = filter_for("5");

        assert!(filter.matches(&listing(4)));
        assert!(filter.matches(&listing(5)));
        assert!(!filter.matches(&listing(6)));
    }

    #[test]
    fn test_unparsable_counts_as_zero() {
        let filter = filter_for("fifth");

        assert!(filter.matches(&listing(0)));
        assert!(!filter.matches(&listing(1)));
        assert!(filter_for(" 3 ").matches(&listing(3)));
    }

    #[test]
    fn test_suffixed_number_counts_as_zero() {
        for input in ["6th", "6.0", "6 semester"] {
            let filter = filter_for(input);
            assert!(!filter.matches(&listing(5)), "input: {}", input);
            assert!(filter.matches(&listing(0)), "input: {}", input);
        }
    }

    #[test]
    fn test_negative_never_eligible_for_positive_minimum() {
        assert!(!filter_for("-2").matches(&listing(1)));
    }

    #[test]
    fn test_inactive_when_empty() {
        assert!(SemesterFilter::from_criteria(&FilterCriteria::default()).is_none());
    }
}

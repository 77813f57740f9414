//! Free-text search over the descriptive fields of a listing.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use data_loader::InternshipRecord;

/// Keeps listings whose title, company or description contains the search
/// term, ignoring case.
pub struct TextSearchFilter {
    term: String,
}

impl TextSearchFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
        }
    }

    /// `None` when the criteria carry no search term.
    pub fn from_criteria(criteria: &FilterCriteria) -> Option<Self> {
        if criteria.search_term.is_empty() {
            None
        } else {
            Some(Self::new(&criteria.search_term))
        }
    }
}

impl Filter for TextSearchFilter {
    fn name(&self) -> &str {
        "TextSearchFilter"
    }

    fn matches(&self, record: &InternshipRecord) -> bool {
        [&record.title, &record.company, &record.description]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(title: &str, company: &str, description: &str) -> InternshipRecord {
        let mut record = InternshipRecord::new("t", title);
        record.company = company.to_string();
        record.description = description.to_string();
        record
    }

    #[test]
    fn test_matches_any_text_field() {
        let filter = TextSearchFilter::new("ACME");

        assert!(filter.matches(&listing("Backend Intern", "Acme Corp", "")));
        assert!(filter.matches(&listing("Acme Labs Intern", "Globex", "")));
        assert!(filter.matches(&listing("Intern", "Globex", "Work with acme tools")));
        assert!(!filter.matches(&listing("Intern", "Globex", "Nothing here")));
    }

    #[test]
    fn test_location_is_not_searched() {
        let mut record = listing("Intern", "Globex", "");
        record.location = "Backend City".to_string();

        assert!(!TextSearchFilter::new("backend").matches(&record));
    }

    #[test]
    fn test_inactive_without_term() {
        assert!(TextSearchFilter::from_criteria(&FilterCriteria::default()).is_none());
    }
}

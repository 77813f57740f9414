//! User-supplied search criteria.
//!
//! Every field is optional. A field left at its default never excludes a
//! listing; the active fields are combined with logical AND.

use serde::{Deserialize, Serialize};

/// Sentinel accepted by `type_filter` to mean "any work arrangement".
pub const ALL_TYPES: &str = "all";

/// The current set of filter values chosen by the viewer.
///
/// Field names follow the search form's query parameters when
/// (de)serialized, so a form payload can be decoded directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Matched against title, company and description.
    pub search_term: String,
    pub location_filter: String,
    /// A work type such as `remote`, or `all`.
    pub type_filter: String,
    /// Comma-separated skill terms.
    pub skill_filter: String,
    /// Comma-separated major terms.
    pub major_filter: String,
    /// The viewer's current semester, as typed.
    pub semester_filter: String,
    /// `paid` / `unpaid`. Compared against the listing's `paid` code.
    pub status_filter: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            location_filter: String::new(),
            type_filter: ALL_TYPES.to_string(),
            skill_filter: String::new(),
            major_filter: String::new(),
            semester_filter: String::new(),
            status_filter: String::new(),
        }
    }
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location_filter = location.into();
        self
    }

    pub fn with_type(mut self, work_type: impl Into<String>) -> Self {
        self.type_filter = work_type.into();
        self
    }

    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skill_filter = skills.into();
        self
    }

    pub fn with_majors(mut self, majors: impl Into<String>) -> Self {
        self.major_filter = majors.into();
        self
    }

    pub fn with_semester(mut self, semester: impl Into<String>) -> Self {
        self.semester_filter = semester.into();
        self
    }

    pub fn with_paid_status(mut self, paid: impl Into<String>) -> Self {
        self.status_filter = paid.into();
        self
    }

    /// True if no field would exclude any listing.
    pub fn is_unconstrained(&self) -> bool {
        self.search_term.is_empty()
            && self.location_filter.is_empty()
            && is_any_type(&self.type_filter)
            && self.skill_filter.is_empty()
            && self.major_filter.is_empty()
            && self.semester_filter.is_empty()
            && self.status_filter.is_empty()
    }
}

/// An empty type filter is treated like the `all` sentinel.
pub(crate) fn is_any_type(type_filter: &str) -> bool {
    type_filter.is_empty() || type_filter.to_lowercase() == ALL_TYPES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconstrained() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.type_filter, "all");
        assert!(criteria.is_unconstrained());
    }

    #[test]
    fn test_any_active_field_constrains() {
        assert!(!FilterCriteria::new().with_search_term("rust").is_unconstrained());
        assert!(!FilterCriteria::new().with_type("remote").is_unconstrained());
        assert!(!FilterCriteria::new().with_semester("abc").is_unconstrained());
        assert!(FilterCriteria::new().with_type("ALL").is_unconstrained());
        assert!(FilterCriteria::new().with_type("").is_unconstrained());
    }

    #[test]
    fn test_partial_payload_uses_defaults() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{ "skillFilter": "python", "semesterFilter": "4" }"#).unwrap();

        assert_eq!(criteria.skill_filter, "python");
        assert_eq!(criteria.semester_filter, "4");
        assert_eq!(criteria.type_filter, "all");
        assert!(criteria.search_term.is_empty());
    }
}

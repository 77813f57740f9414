//! Skill and major filters.
//!
//! Listings carry a single `requirements` list that mixes skills
//! ("Python", "SQL") with academic majors ("Computer Science"). Both the skill
//! and the major box of the search form are matched against that same list,
//! with the same fuzzy rule.

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use data_loader::InternshipRecord;

/// Which search box a `RequirementFilter` was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequirementKind {
    Skill,
    Major,
}

/// Keeps listings where at least one requirement and one search term are
/// related by bidirectional substring match.
///
/// ## Algorithm
/// 1. Split the input on commas, trim and lower-case each term
/// 2. For each requirement (lower-cased), check every term
/// 3. Related if the requirement contains the term or the term contains the
///    requirement, so "python" finds "Python 3" and "machine learning
///    engineering" finds "Machine Learning"
///
/// A listing with no requirements never matches an active filter.
pub struct RequirementFilter {
    kind: RequirementKind,
    terms: Vec<String>,
}

impl RequirementFilter {
    pub fn new(kind: RequirementKind, input: &str) -> Self {
        Self {
            kind,
            terms: split_terms(input),
        }
    }

    pub fn skills(criteria: &FilterCriteria) -> Option<Self> {
        if criteria.skill_filter.is_empty() {
            None
        } else {
            Some(Self::new(RequirementKind::Skill, &criteria.skill_filter))
        }
    }

    pub fn majors(criteria: &FilterCriteria) -> Option<Self> {
        if criteria.major_filter.is_empty() {
            None
        } else {
            Some(Self::new(RequirementKind::Major, &criteria.major_filter))
        }
    }
}

impl Filter for RequirementFilter {
    fn name(&self) -> &str {
        match self.kind {
            RequirementKind::Skill => "SkillFilter",
            RequirementKind::Major => "MajorFilter",
        }
    }

    fn matches(&self, record: &InternshipRecord) -> bool {
        record.requirements.iter().any(|requirement| {
            let requirement = requirement.to_lowercase();
            self.terms
                .iter()
                .any(|term| requirement.contains(term.as_str()) || term.contains(&requirement))
        })
    }
}

/// Comma-separated input to normalized terms. Blank segments are kept as
/// empty terms (an empty term is contained in every requirement).
fn split_terms(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|term| term.trim().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(requirements: &[&str]) -> InternshipRecord {
        let mut record = InternshipRecord::new("r", "Intern");
        record.requirements = requirements.iter().map(|r| r.to_string()).collect();
        record
    }

    #[test]
    fn test_split_terms() {
        assert_eq!(split_terms(" Python, JAVA ,sql"), vec!["python", "java", "sql"]);
        assert_eq!(split_terms("rust"), vec!["rust"]);
    }

    #[test]
    fn test_term_inside_requirement() {
        let filter = RequirementFilter::new(RequirementKind::Skill, "python");
        assert!(filter.matches(&listing(&["Python 3", "Docker"])));
    }

    #[test]
    fn test_requirement_inside_term() {
        let filter = RequirementFilter::new(RequirementKind::Major, "bachelor of computer science");
        assert!(filter.matches(&listing(&["Computer Science"])));
    }

    #[test]
    fn test_any_term_any_requirement() {
        let filter = RequirementFilter::new(RequirementKind::Skill, "go, kotlin, figma");

        assert!(filter.matches(&listing(&["SQL", "Figma"])));
        assert!(!filter.matches(&listing(&["SQL", "Excel"])));
    }

    #[test]
    fn test_no_requirements_never_matches() {
        let filter = RequirementFilter::new(RequirementKind::Skill, "python");
        assert!(!filter.matches(&listing(&[])));
    }

    #[test]
    fn test_blank_segment_matches_any_requirement() {
        let filter = RequirementFilter::new(RequirementKind::Skill, "cobol, ");

        assert!(filter.matches(&listing(&["Excel"])));
        assert!(!filter.matches(&listing(&[])));
    }

    #[test]
    fn test_skill_and_major_read_their_own_inputs() {
        let criteria = FilterCriteria::default()
            .with_skills("sql")
            .with_majors("statistics");

        let skills = RequirementFilter::skills(&criteria).unwrap();
        let majors = RequirementFilter::majors(&criteria).unwrap();

        assert_eq!(skills.kind, RequirementKind::Skill);
        assert_eq!(skills.name(), "SkillFilter");
        assert_eq!(skills.terms, vec!["sql".to_string()]);
        assert_eq!(majors.name(), "MajorFilter");
        assert_eq!(majors.terms, vec!["statistics".to_string()]);
        assert!(RequirementFilter::skills(&FilterCriteria::default()).is_none());
    }
}

//! Parser for listing documents.
//!
//! The listings backend answers with one of three JSON shapes:
//! - a bare array: `[{...}, {...}]`
//! - an envelope: `{ "internships": [...] }`
//! - a generic API envelope: `{ "data": [...] }`
//!
//! All three decode into the same `Vec<InternshipRecord>`. A `null` document
//! or a `null` envelope field means the backend has nothing to list.

use crate::error::{DataLoadError, Result};
use crate::types::InternshipRecord;
use serde::Deserialize;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Absent,
    Listings(Vec<serde_json::Value>),
    Envelope {
        // Present but possibly null.
        #[serde(alias = "data", deserialize_with = "Option::deserialize")]
        internships: Option<Vec<serde_json::Value>>,
    },
}

/// Parse a listing document held in memory.
///
/// `source_name` only appears in error messages (a file name or URL).
pub fn parse_internships_json(text: &str, source_name: &str) -> Result<Vec<InternshipRecord>> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| DataLoadError::JsonError {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;

    let raw = match Document::deserialize(value) {
        Ok(Document::Absent) => Vec::new(),
        Ok(Document::Listings(raw)) => raw,
        Ok(Document::Envelope { internships }) => internships.unwrap_or_default(),
        Err(_) => {
            return Err(DataLoadError::UnexpectedShape {
                source_name: source_name.to_string(),
            });
        }
    };

    raw.into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            InternshipRecord::deserialize(entry).map_err(|e| DataLoadError::JsonError {
                source_name: source_name.to_string(),
                reason: format!("listing #{}: {}", idx + 1, e),
            })
        })
        .collect()
}

/// Read and parse a listing document from disk.
pub fn parse_internships_file(path: &Path) -> Result<Vec<InternshipRecord>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    parse_internships_json(&text, &path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ListingStatus;

    #[test]
    fn test_parse_bare_array() {
        let json = r#"[
            {
                "id": "a1",
                "title": "Backend Intern",
                "company": "Acme",
                "location": "Jakarta",
                "type": "remote",
                "requirements": ["Python", "SQL"],
                "status": "Open",
                "tags": ["backend"],
                "paid": "paid",
                "minSemester": 5,
                "salaryAmount": "4000000"
            }
        ]"#;

        let records = parse_internships_json(json, "test").unwrap();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.id, "a1");
        assert_eq!(record.work_type, "remote");
        assert_eq!(record.requirements, vec!["Python", "SQL"]);
        assert_eq!(record.min_semester, 5);
        assert_eq!(record.salary_amount.as_deref(), Some("4000000"));
        assert_eq!(record.salary, None);
    }

    #[test]
    fn test_parse_envelopes() {
        let wrapped = r#"{ "internships": [ { "id": 1, "title": "A" } ] }"#;
        let data = r#"{ "data": [ { "id": 2, "title": "B" }, { "id": 3, "title": "C" } ] }"#;

        assert_eq!(parse_internships_json(wrapped, "test").unwrap().len(), 1);
        let records = parse_internships_json(data, "test").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, "3");
    }

    #[test]
    fn test_missing_and_null_collections_become_empty() {
        let json = r#"[
            { "id": "x", "title": "No lists" },
            { "id": "y", "title": "Null lists", "requirements": null, "tags": null, "minSemester": null }
        ]"#;

        let records = parse_internships_json(json, "test").unwrap();
        for record in &records {
            assert!(record.requirements.is_empty());
            assert!(record.tags.is_empty());
            assert_eq!(record.min_semester, 0);
        }
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let json = r#"[ { "id": "s", "status": "Archived" }, { "id": "t", "status": "Filled" } ]"#;

        let records = parse_internships_json(json, "test").unwrap();
        assert_eq!(records[0].status, ListingStatus::Unknown);
        assert_eq!(records[1].status, ListingStatus::Filled);
    }

    #[test]
    fn test_null_collection_is_empty() {
        assert!(parse_internships_json("null", "feed.json").unwrap().is_empty());
        assert!(parse_internships_json(r#"{ "data": null }"#, "feed.json").unwrap().is_empty());
        assert!(parse_internships_json("[]", "feed.json").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_documents() {
        assert!(matches!(
            parse_internships_json("not json", "feed.json"),
            Err(DataLoadError::JsonError { .. })
        ));
        assert!(matches!(
            parse_internships_json(r#"{ "items": [] }"#, "feed.json"),
            Err(DataLoadError::UnexpectedShape { .. })
        ));

        // A listing without an id cannot be addressed, so it is rejected.
        let err = parse_internships_json(r#"[ { "title": "anonymous" } ]"#, "feed.json")
            .unwrap_err();
        assert!(err.to_string().contains("listing #1"));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_internships_file(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }
}

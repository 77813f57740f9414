//! Core domain types for internship listings.
//!
//! Records arrive as JSON from the listings backend. Decoding is lenient:
//! optional collections that are missing or `null` become empty, ids may be
//! strings or numbers, and unknown status codes do not fail the whole load.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Type Aliases
// =============================================================================

/// Opaque identifier for a listing, normalized to text.
pub type ListingId = String;

// =============================================================================
// Listing Types
// =============================================================================

/// A single internship listing as published by a company.
///
/// `work_type` and `paid` stay as the provider's raw codes: the listing
/// backend is not strict about them (`"wfh"` shows up next to `"remote"`),
/// and the search filters compare them textually anyway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternshipRecord {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: ListingId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    /// One of `on-site`, `remote`, `hybrid` in well-formed data.
    #[serde(rename = "type", default)]
    pub work_type: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub posted: String,
    #[serde(default)]
    pub deadline: String,
    /// Skills and majors share this list.
    #[serde(default, deserialize_with = "vec_or_null")]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub status: ListingStatus,
    #[serde(default, deserialize_with = "vec_or_null")]
    pub tags: Vec<String>,
    /// `paid` or `unpaid`.
    #[serde(default)]
    pub paid: String,
    /// Minimum semester a student must have reached to apply.
    #[serde(default, deserialize_with = "number_or_null")]
    pub min_semester: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_amount: Option<String>,
}

impl InternshipRecord {
    /// Create a listing with the given id and title; every other field empty.
    pub fn new(id: impl Into<ListingId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            company: String::new(),
            location: String::new(),
            description: String::new(),
            work_type: String::new(),
            duration: String::new(),
            posted: String::new(),
            deadline: String::new(),
            requirements: Vec::new(),
            status: ListingStatus::default(),
            tags: Vec::new(),
            paid: String::new(),
            min_semester: 0,
            salary: None,
            salary_amount: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == ListingStatus::Open
    }
}

impl fmt::Display for InternshipRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.title, self.company)
    }
}

/// Publication status of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    #[default]
    Open,
    Closed,
    Filled,
    /// Any status code this version does not know about.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ListingStatus::Open => "Open",
            ListingStatus::Closed => "Closed",
            ListingStatus::Filled => "Filled",
            ListingStatus::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered listing collection with an id lookup.
///
/// The order of `records` is the order the provider returned them in and is
/// what search results are reported against.
#[derive(Debug, Default)]
pub struct ListingCatalog {
    pub(crate) records: Vec<InternshipRecord>,
    pub(crate) by_id: HashMap<ListingId, usize>,
}

impl ListingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a listing by id.
    pub fn get(&self, id: &str) -> Option<&InternshipRecord> {
        self.by_id.get(id).map(|&pos| &self.records[pos])
    }

    /// All listings in provider order.
    pub fn records(&self) -> &[InternshipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a listing. A later listing with an existing id shadows the
    /// earlier one in lookups; `validate` reports that case.
    pub fn insert(&mut self, record: InternshipRecord) {
        self.by_id.insert(record.id.clone(), self.records.len());
        self.records.push(record);
    }

    /// Get counts for debugging/validation: (listings, companies, open listings)
    pub fn counts(&self) -> (usize, usize, usize) {
        let companies = self
            .records
            .iter()
            .map(|r| r.company.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len();
        let open = self.records.iter().filter(|r| r.is_open()).count();
        (self.records.len(), companies, open)
    }

    /// Give up the lookup and keep the ordered records.
    pub fn into_records(self) -> Vec<InternshipRecord> {
        self.records
    }
}

// =============================================================================
// Lenient field decoding
// =============================================================================

fn vec_or_null<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn number_or_null<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<ListingId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Unsigned(id) => id.to_string(),
        RawId::Signed(id) => id.to_string(),
    })
}

//! Boundary types shared by every listing and profile source.

use anyhow::Result;
use data_loader::InternshipRecord;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Anything that can produce the full listing collection.
///
/// A fetch returns every listing the backend has for the session; there is no
/// paging at this layer. Callers decide what a failure means for the page.
pub trait InternshipSource: Send + Sync {
    /// Returns the name of this source (for logging/debugging)
    fn name(&self) -> &str;

    fn fetch_internships(&self) -> impl Future<Output = Result<Vec<InternshipRecord>>> + Send;
}

/// Supplies who is looking at the search page.
pub trait ProfileSource: Send + Sync {
    fn fetch_profile(&self) -> impl Future<Output = Result<ViewerProfile>> + Send;
}

/// The viewer's display identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerProfile {
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Current semester, when the student filled it in.
    #[serde(default)]
    pub semester: Option<u32>,
}

impl ViewerProfile {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            ..Self::default()
        }
    }

    /// Name to show in the header; falls back to the email, then "Guest".
    pub fn label(&self) -> &str {
        let name = self.display_name.trim();
        if !name.is_empty() {
            return name;
        }
        self.email.as_deref().unwrap_or("Guest")
    }
}

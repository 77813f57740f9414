//! Viewer profile sources.
//!
//! The search page greets the viewer by name; nothing here influences which
//! listings are shown.

use crate::types::{ProfileSource, ViewerProfile};
use anyhow::Result;

/// Serves a fixed profile, e.g. one read from the session at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticProfileSource {
    profile: ViewerProfile,
}

impl StaticProfileSource {
    pub fn new(profile: ViewerProfile) -> Self {
        Self { profile }
    }

    /// A profile source for a signed-out visitor.
    pub fn guest() -> Self {
        Self::default()
    }
}

impl ProfileSource for StaticProfileSource {
    async fn fetch_profile(&self) -> Result<ViewerProfile> {
        Ok(self.profile.clone())
    }
}

//! Server crate for the internship search page.
//!
//! This crate contains the orchestrator that ties a listing source to the
//! filter engine and reports what the page should render.

pub mod orchestrator;

pub use orchestrator::{DisplayState, FetchState, SearchOrchestrator, SearchResults};

//! # Sources Crate
//!
//! Where listings and the viewer's identity come from.
//!
//! ## Components
//!
//! ### Listing sources
//! - `JsonFileSource`: reads a listing document from disk (the same JSON the
//!   listings API answers with)
//! - `StaticSource`: serves a fixed in-memory collection
//!
//! ### Profile sources
//! - `StaticProfileSource`: a fixed `ViewerProfile`
//!
//! ## Example Usage
//!
//! ```ignore
//! use sources::{InternshipSource, JsonFileSource};
//!
//! let source = JsonFileSource::new("data/internships.json");
//! let records = source.fetch_internships().await?;
//! ```
//!
//! A fetch is a single request/response. Retrying, and deciding what the
//! page shows when a fetch fails, is left to the caller.

// Public modules
pub mod types;
pub mod json_file;
pub mod memory;
pub mod user_context;

// Re-export commonly used types
pub use types::{InternshipSource, ProfileSource, ViewerProfile};
pub use json_file::JsonFileSource;
pub use memory::StaticSource;
pub use user_context::StaticProfileSource;

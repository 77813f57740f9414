//! Filter implementations for the listing pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline. Each one maps to a single
//! field of `FilterCriteria` and offers a constructor returning `None` when
//! that field is left at its default.

pub mod location;
pub mod paid_status;
pub mod requirements;
pub mod semester;
pub mod text_search;
pub mod work_type;

// Re-export for convenience
pub use location::LocationFilter;
pub use paid_status::PaidStatusFilter;
pub use requirements::{RequirementFilter, RequirementKind};
pub use semester::SemesterFilter;
pub use text_search::TextSearchFilter;
pub use work_type::WorkTypeFilter;

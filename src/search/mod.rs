//! Search core (pure).
//!
//! Query normalization, entry matching, highlight rendering and the
//! visibility cascade. Nothing here touches a rendering surface.

pub mod cascade;
pub mod highlight;
pub mod matcher;
pub mod query;

// Re-export for convenience
pub use cascade::{apply, CascadeResult};
pub use highlight::{highlight_spans, render, Segment};
pub use matcher::matches;
pub use query::Query;

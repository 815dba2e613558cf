//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod identifiers;
pub mod index;
pub mod key_action;
pub mod section;

// Re-export for convenience
pub use error::{AppError, IndexError};
pub use identifiers::{InvalidSectionId, SectionId};
pub use index::{DocIndex, EntryPos};
pub use key_action::KeyAction;
pub use section::{Entry, Section, SectionKind};

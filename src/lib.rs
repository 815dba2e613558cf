//! Knowledge-page index viewer (knowdex)
//!
//! Incremental search over a tree of documentation sections: case-insensitive
//! matching with highlighted labels, a section-visibility cascade, manual
//! expand/collapse state that survives searching, and an address fragment
//! that remembers which sections are open.
//!
//! The crate follows a Pure Core / Impure Shell split. `model`, `search`,
//! `state` and `surface` are pure; `persist`, `builder`, `config`, `logging`
//! and `view` touch the outside world.

pub mod builder;
pub mod config;
pub mod logging;
pub mod model;
pub mod persist;
pub mod search;
pub mod state;
pub mod surface;
pub mod view;

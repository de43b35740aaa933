//! Commands Layer
//!
//! Session operations that bridge the presentation layer to the core.

mod checklist_cmd;

pub use checklist_cmd::*;

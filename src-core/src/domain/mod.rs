//! Domain Layer
//!
//! Contains checklist types, selections and core abstractions.
//! This layer has no storage or presentation dependencies.

mod entity;
mod item;
mod selection;
mod state;
mod tent_size;

pub use entity::{DomainError, DomainResult, Entity};
pub use item::{flatten_items, ChecklistItem, ChecklistSection};
pub use selection::{BallastType, Selections, Toggle};
pub use state::ChecklistState;
pub use tent_size::TentSize;

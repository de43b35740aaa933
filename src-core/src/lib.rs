//! Tent Checklist Core
//!
//! Layered architecture:
//! - domain: Checklist types, selections and errors
//! - catalog: Static per-size checklist content
//! - assembler / progress: Selection-dependent list and its counts
//! - repository: Local storage for checkmarks and selections
//! - commands: Session object driven by the presentation layer

pub mod assembler;
pub mod catalog;
pub mod commands;
pub mod domain;
pub mod progress;
pub mod repository;

pub use assembler::{assemble, assemble_size, Assembly};
pub use catalog::{all_sizes, get_checklist, validate_catalog, TentChecklist};
pub use commands::ChecklistSession;
pub use domain::{
    BallastType, ChecklistItem, ChecklistSection, ChecklistState, DomainError, DomainResult,
    Selections, TentSize, Toggle,
};
pub use progress::{aggregate, aggregate_assembly, Progress, SectionStatus};
pub use repository::{ChecklistRepository, KeyValueStorage, MemoryStorage, SqliteStorage};

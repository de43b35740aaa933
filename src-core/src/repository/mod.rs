//! Repository Layer
//!
//! Local-storage abstraction and the per-size checklist store on top.

mod checklist_repo;
mod db;
mod memory_storage;
mod sqlite_storage;
mod traits;

#[cfg(test)]
mod tests;

pub use checklist_repo::{
    ballast_key, lighting_key, state_key, walls_key, ChecklistRepository, STORAGE_PREFIX,
};
pub use db::init_db;
pub use memory_storage::MemoryStorage;
pub use sqlite_storage::SqliteStorage;
pub use traits::KeyValueStorage;

//! In-process Link Store backend.
//!
//! Used for local runs (`STORAGE_BACKEND=memory`) and handler tests. State is
//! lost on restart.

mod memory_store;

pub use memory_store::InMemoryStore;

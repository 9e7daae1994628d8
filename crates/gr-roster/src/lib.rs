//! Persisted player roster for Godroll.
//!
//! [`RosterStore`] owns the ordered list of players, enforces name
//! uniqueness, and re-serializes the whole roster to a [`KeyValueStore`]
//! after every mutation. Storage problems are logged, never surfaced.

pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use config::RosterConfig;
pub use error::{RosterError, RosterResult, StorageError, StorageResult};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::RosterStore;

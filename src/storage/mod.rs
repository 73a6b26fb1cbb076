//! Persistence behind an injected key-value store

pub mod store;
pub mod history;

pub use history::HistoryStore;
pub use store::{FileStore, KeyValueStore, MemoryStore};

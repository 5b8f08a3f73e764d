//! Storage layer for focuspot.
//!
//! Session history lives behind the [`KeyValueStore`] contract:
//! - [`Database`]: `SQLite`-backed store used by the binary
//! - [`MemoryStore`]: volatile store for tests and throwaway runs

mod database;
mod kv;
mod migrations;

pub use database::Database;
#[cfg(test)]
pub use kv::MockKeyValueStore;
pub use kv::{KeyValueStore, MemoryStore};

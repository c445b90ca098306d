//! Persistence layer: string-valued key-value storage.

pub mod file_storage;
pub mod memory;

pub use file_storage::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// Storage key names as constants.
pub mod keys {
    /// Serialized workout list
    pub const WORKOUTS: &str = "workouts";
}

/// Synchronous key-value storage holding string values.
pub trait KeyValueStorage: Send {
    /// Read a value, or `None` if the key was never set or has been removed.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

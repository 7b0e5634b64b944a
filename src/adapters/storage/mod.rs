//! Storage scope adapters.
//!
//! - `InMemoryKeyValueStore` - tab scope, and tests
//! - `JsonFileKeyValueStore` - durable scope, one JSON file on disk

mod in_memory_key_value_store;
mod json_file_key_value_store;

pub use in_memory_key_value_store::InMemoryKeyValueStore;
pub use json_file_key_value_store::JsonFileKeyValueStore;

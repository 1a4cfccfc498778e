//! Key/value storage boundary.
//!
//! Services depend on the `KeyValueStore` trait only, so the in-memory map used
//! today can be swapped for a durable backend without touching them.

pub mod in_memory;
pub mod key_value;

pub use in_memory::InMemoryStore;
pub use key_value::KeyValueStore;

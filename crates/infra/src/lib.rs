//! Infrastructure layer: storage backends behind domain-agnostic traits.

pub mod store;

pub use store::{InMemoryStore, KeyValueStore};

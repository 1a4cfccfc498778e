//! `storefront-core` — domain building blocks shared by every storefront crate.
//!
//! Nothing here touches HTTP, storage, or logging.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;

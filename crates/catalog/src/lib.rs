//! Catalog domain module.
//!
//! Products are created once at startup by [`seed::seed_sample_products`] and
//! are read-only afterwards; [`CatalogService`] exposes lookups only.

pub mod product;
pub mod seed;
pub mod service;

pub use product::{Price, Product};
pub use seed::seed_sample_products;
pub use service::{CatalogService, PRODUCT_NOT_FOUND};

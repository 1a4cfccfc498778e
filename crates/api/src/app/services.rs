//! Service wiring: one owned store per domain, built once per process.

use std::sync::Arc;

use tracing::info;

use storefront_auth::{AuthService, PasswordDigest, Username};
use storefront_catalog::{CatalogService, Product, seed_sample_products};
use storefront_core::{DomainResult, ProductId};
use storefront_infra::InMemoryStore;

pub type UserStore = InMemoryStore<Username, PasswordDigest>;
pub type ProductStore = InMemoryStore<ProductId, Product>;

/// Everything request handlers need, shared behind an `Arc`.
#[derive(Debug)]
pub struct AppServices {
    pub auth: AuthService<Arc<UserStore>>,
    pub catalog: CatalogService<Arc<ProductStore>>,
}

impl AppServices {
    /// Wire services over existing stores without seeding anything.
    pub fn new(users: Arc<UserStore>, products: Arc<ProductStore>) -> Self {
        Self {
            auth: AuthService::new(users),
            catalog: CatalogService::new(products),
        }
    }

    /// Fresh stores with the sample catalog seeded. Call once at startup,
    /// before the listener accepts traffic.
    pub fn bootstrap() -> DomainResult<Self> {
        let users = Arc::new(UserStore::new());
        let products = Arc::new(ProductStore::new());

        let seeded = seed_sample_products(&products)?;
        info!(products = seeded.len(), "catalog bootstrapped");

        Ok(Self::new(users, products))
    }
}

use storefront_core::{DomainError, DomainResult, ProductId};
use storefront_infra::KeyValueStore;

use crate::product::Product;

/// Detail returned when a product id does not resolve.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Read-only access to the product catalog.
#[derive(Debug)]
pub struct CatalogService<S> {
    products: S,
}

impl<S> CatalogService<S>
where
    S: KeyValueStore<ProductId, Product>,
{
    pub fn new(products: S) -> Self {
        Self { products }
    }

    /// Every product in the store. Never fails; may be empty.
    pub fn list_products(&self) -> Vec<Product> {
        self.products.list()
    }

    /// Look a product up by its string id.
    ///
    /// Any string is accepted: ids that do not parse as a product id cannot be
    /// in the store, so they are reported as `NotFound` like any other miss.
    pub fn get_product(&self, id: &str) -> DomainResult<Product> {
        id.parse::<ProductId>()
            .ok()
            .and_then(|id| self.products.get(&id))
            .ok_or_else(|| DomainError::not_found(PRODUCT_NOT_FOUND))
    }
}

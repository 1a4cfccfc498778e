//! Startup sample data.

use tracing::info;

use storefront_core::{DomainResult, Entity, ProductId};
use storefront_infra::KeyValueStore;

use crate::product::{Price, Product};

/// `(name, price, description)` of each sample product, in insertion order.
pub const SAMPLE_PRODUCTS: [(&str, f64, &str); 2] = [
    ("Phone", 29999.99, "Smartphone with 6GB RAM"),
    ("Laptop", 59999.99, "14-inch laptop with SSD"),
];

/// Insert the sample products under freshly generated ids.
///
/// Not idempotent: each call adds another full set. Call it once per store.
pub fn seed_sample_products<S>(store: &S) -> DomainResult<Vec<ProductId>>
where
    S: KeyValueStore<ProductId, Product>,
{
    let mut ids = Vec::with_capacity(SAMPLE_PRODUCTS.len());

    for (name, price, description) in SAMPLE_PRODUCTS {
        let product = Product::new(ProductId::new(), name, Price::new(price)?, description);
        let id = *product.id();
        store.put(id, product);
        ids.push(id);
    }

    info!(count = ids.len(), "seeded sample products");
    Ok(ids)
}

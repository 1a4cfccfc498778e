use serde::{Deserialize, Serialize};

use storefront_catalog::Product;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /register` and `POST /login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

impl MessageResponse {
    pub const REGISTERED: Self = Self {
        message: "User registered successfully",
    };
    pub const LOGGED_IN: Self = Self {
        message: "Login successful",
    };
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id_typed().to_string(),
            name: p.name().to_string(),
            price: p.price().amount(),
            description: p.description().to_string(),
        }
    }
}

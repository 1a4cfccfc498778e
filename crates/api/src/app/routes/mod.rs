use axum::{Router, routing::post};

pub mod auth;
pub mod products;
pub mod system;

/// Router for the public API surface. No route requires authentication.
pub fn router() -> Router {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .nest("/products", products::router())
}

use std::sync::Arc;

use axum::{Extension, Json, extract::rejection::JsonRejection};

use crate::app::dto::{CredentialsRequest, MessageResponse};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub async fn register(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = body?;
    services.auth.register(&body.username, &body.password)?;
    Ok(Json(MessageResponse::REGISTERED))
}

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(body) = body?;
    services.auth.login(&body.username, &body.password)?;
    Ok(Json(MessageResponse::LOGGED_IN))
}

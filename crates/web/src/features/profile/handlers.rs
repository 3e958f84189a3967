use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::dto::profile::{ProfileResponse, UpdateProfileRequest};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Session;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/profile",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile of the authenticated user", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No profile stored yet")
    ),
    tag = "profile"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response, WebError> {
    let profile = services::get_profile(state.store(), &session).await?;

    Ok(Json(ProfileResponse::from(profile)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/profile",
    request_body = UpdateProfileRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile created or updated", body = ProfileResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "profile"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let profile = services::update_profile(state.store(), &session, &req).await?;

    Ok(Json(ProfileResponse::from(profile)).into_response())
}

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::reference::{NameRequest, SportResponse};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Session;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/sports",
    responses(
        (status = 200, description = "List all sports", body = Vec<SportResponse>)
    ),
    tag = "sports"
)]
pub async fn list_sports(State(state): State<AppState>) -> Result<Response, WebError> {
    let sports = services::list_sports(state.store()).await?;

    let response: Vec<SportResponse> = sports.into_iter().map(SportResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sports",
    request_body = NameRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Sport created successfully", body = SportResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Administrator role required")
    ),
    tag = "sports"
)]
pub async fn create_sport(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(req): Json<NameRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let sport = services::create_sport(state.store(), &session, &req.name).await?;

    Ok((StatusCode::CREATED, Json(SportResponse::from(sport))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/sports/{id}",
    params(
        ("id" = String, Path, description = "Sport id")
    ),
    request_body = NameRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Sport renamed", body = SportResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Sport not found")
    ),
    tag = "sports"
)]
pub async fn rename_sport(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Json(req): Json<NameRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let sport = services::rename_sport(state.store(), &session, &id, &req.name).await?;

    Ok(Json(SportResponse::from(sport)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/sports/{id}",
    params(
        ("id" = String, Path, description = "Sport id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Sport deleted"),
        (status = 403, description = "Administrator role required")
    ),
    tag = "sports"
)]
pub async fn delete_sport(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_sport(state.store(), &session, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::reference::{CityResponse, NameRequest};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Session;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/cities",
    responses(
        (status = 200, description = "List all cities", body = Vec<CityResponse>)
    ),
    tag = "cities"
)]
pub async fn list_cities(State(state): State<AppState>) -> Result<Response, WebError> {
    let cities = services::list_cities(state.store()).await?;

    let response: Vec<CityResponse> = cities.into_iter().map(CityResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/cities",
    request_body = NameRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "City created successfully", body = CityResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Administrator role required")
    ),
    tag = "cities"
)]
pub async fn create_city(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(req): Json<NameRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let city = services::create_city(state.store(), &session, &req.name).await?;

    Ok((StatusCode::CREATED, Json(CityResponse::from(city))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/cities/{id}",
    params(
        ("id" = String, Path, description = "City id")
    ),
    request_body = NameRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "City renamed", body = CityResponse),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "City not found")
    ),
    tag = "cities"
)]
pub async fn rename_city(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Json(req): Json<NameRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let city = services::rename_city(state.store(), &session, &id, &req.name).await?;

    Ok(Json(CityResponse::from(city)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/cities/{id}",
    params(
        ("id" = String, Path, description = "City id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "City deleted"),
        (status = 403, description = "Administrator role required")
    ),
    tag = "cities"
)]
pub async fn delete_city(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_city(state.store(), &session, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

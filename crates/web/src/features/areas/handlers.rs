use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::reference::{AreaFilter, AreaResponse, CreateAreaRequest};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Session;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/areas",
    params(AreaFilter),
    responses(
        (status = 200, description = "Areas of the given city", body = Vec<AreaResponse>),
        (status = 400, description = "city_id missing")
    ),
    tag = "areas"
)]
pub async fn list_areas(
    State(state): State<AppState>,
    Query(filter): Query<AreaFilter>,
) -> Result<Response, WebError> {
    filter.validate()?;

    let areas = services::list_areas(state.store(), &filter.city_id).await?;

    let response: Vec<AreaResponse> = areas.into_iter().map(AreaResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/api/areas",
    request_body = CreateAreaRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Area created successfully", body = AreaResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Administrator role required")
    ),
    tag = "areas"
)]
pub async fn create_area(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(req): Json<CreateAreaRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let area = services::create_area(state.store(), &session, &req.city_id, &req.name).await?;

    Ok((StatusCode::CREATED, Json(AreaResponse::from(area))).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/areas/{id}",
    params(
        ("id" = String, Path, description = "Area id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Area deleted"),
        (status = 403, description = "Administrator role required")
    ),
    tag = "areas"
)]
pub async fn delete_area(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_area(state.store(), &session, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

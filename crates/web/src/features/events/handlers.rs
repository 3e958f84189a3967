use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::event::{
    CreateEventRequest, EventLocations, EventResponse, LocationQuery, SimilarLocations,
    SuggestionQuery, UpdateEventRequest,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::Session;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/events",
    responses(
        (status = 200, description = "List all events", body = Vec<EventResponse>)
    ),
    tag = "events"
)]
pub async fn list_events(State(state): State<AppState>) -> Result<Response, WebError> {
    let events = services::list_events(state.store()).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/nearby",
    params(LocationQuery),
    responses(
        (status = 200, description = "Events whose city and area match, ignoring case", body = Vec<EventResponse>),
        (status = 400, description = "City or area missing")
    ),
    tag = "events"
)]
pub async fn events_nearby(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let events = services::events_nearby(state.store(), &query.city, &query.area).await?;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/similar",
    params(LocationQuery),
    responses(
        (status = 200, description = "Cities and areas resembling the query", body = SimilarLocations)
    ),
    tag = "events"
)]
pub async fn similar_locations(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Result<Response, WebError> {
    let similar = services::similar_locations(state.store(), &query.city, &query.area).await;

    Ok(Json(similar).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/locations",
    responses(
        (status = 200, description = "Distinct cities and areas used by events", body = EventLocations)
    ),
    tag = "events"
)]
pub async fn event_locations(State(state): State<AppState>) -> Result<Response, WebError> {
    let locations = services::event_locations(state.store()).await?;

    Ok(Json(locations).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/suggestions",
    params(SuggestionQuery),
    responses(
        (status = 200, description = "Random complete events", body = Vec<EventResponse>),
        (status = 400, description = "Invalid count")
    ),
    tag = "events"
)]
pub async fn event_suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> Result<Response, WebError> {
    query.validate()?;

    let events = services::suggestions(state.store(), query.count(), state.shuffle()).await;

    let response: Vec<EventResponse> = events.into_iter().map(EventResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Event found", body = EventResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let event = services::get_event(state.store(), &id).await?;

    Ok(Json(EventResponse::from(event)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/events",
    request_body = CreateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event created successfully", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "events"
)]
pub async fn create_event(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::create_event(state.store(), &session, &req).await?;

    Ok((StatusCode::CREATED, Json(EventResponse::from(event))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event id")
    ),
    request_body = UpdateEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Event updated successfully", body = EventResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the creator of the event"),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn update_event(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
    Json(update_req): Json<UpdateEventRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;
    if update_req.is_empty() {
        return Err(WebError::BadRequest("No fields to update".to_string()));
    }

    let updated = services::update_event(state.store(), &session, &id, &update_req).await?;

    Ok(Json(EventResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    params(
        ("id" = String, Path, description = "Event id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Event deleted, or it did not exist"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not the creator of the event")
    ),
    tag = "events"
)]
pub async fn delete_event(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    services::delete_event(state.store(), &session, &id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_event, delete_event, event_locations, event_suggestions, events_nearby, get_event,
    list_events, similar_locations, update_event,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_event))
        .route("/:id", put(update_event))
        .route("/:id", delete(delete_event))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new()
        .route("/", get(list_events))
        .route("/nearby", get(events_nearby))
        .route("/similar", get(similar_locations))
        .route("/locations", get(event_locations))
        .route("/suggestions", get(event_suggestions))
        .route("/:id", get(get_event))
        .merge(protected)
}

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{create_sport, delete_sport, list_sports, rename_sport};
use crate::middleware::auth::{require_admin, require_auth};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_sport))
        .route("/:id", put(rename_sport))
        .route("/:id", delete(delete_sport))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new().route("/", get(list_sports)).merge(admin)
}

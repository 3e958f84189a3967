use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use super::handlers::{create_city, delete_city, list_cities, rename_city};
use crate::middleware::auth::{require_admin, require_auth};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_city))
        .route("/:id", put(rename_city))
        .route("/:id", delete(delete_city))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new().route("/", get(list_cities)).merge(admin)
}

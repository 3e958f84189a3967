use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{create_area, delete_area, list_areas};
use crate::middleware::auth::{require_admin, require_auth};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/", post(create_area))
        .route("/:id", delete(delete_area))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state, require_auth));

    Router::new().route("/", get(list_areas)).merge(admin)
}

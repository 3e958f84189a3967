use axum::{
    Router, middleware,
    routing::get,
};

use super::handlers::{get_profile, update_profile};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_profile).put(update_profile))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

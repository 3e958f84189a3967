pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod openapi;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use openapi::ApiDoc;
use state::AppState;

/// Assemble the full HTTP application.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/events", features::events::routes::routes(state.clone()))
        .nest("/sports", features::sports::routes::routes(state.clone()))
        .nest("/cities", features::cities::routes::routes(state.clone()))
        .nest("/areas", features::areas::routes::routes(state.clone()))
        .nest("/profile", features::profile::routes::routes(state.clone()));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    Router::new()
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

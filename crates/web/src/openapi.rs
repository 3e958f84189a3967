use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::events::handlers::list_events,
        features::events::handlers::events_nearby,
        features::events::handlers::similar_locations,
        features::events::handlers::event_locations,
        features::events::handlers::event_suggestions,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::update_event,
        features::events::handlers::delete_event,
        features::sports::handlers::list_sports,
        features::sports::handlers::create_sport,
        features::sports::handlers::rename_sport,
        features::sports::handlers::delete_sport,
        features::cities::handlers::list_cities,
        features::cities::handlers::create_city,
        features::cities::handlers::rename_city,
        features::cities::handlers::delete_city,
        features::areas::handlers::list_areas,
        features::areas::handlers::create_area,
        features::areas::handlers::delete_area,
        features::profile::handlers::get_profile,
        features::profile::handlers::update_profile,
    ),
    components(
        schemas(
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::event::EventResponse,
            storage::dto::event::EventLocations,
            storage::dto::event::SimilarLocations,
            storage::dto::reference::NameRequest,
            storage::dto::reference::CreateAreaRequest,
            storage::dto::reference::SportResponse,
            storage::dto::reference::CityResponse,
            storage::dto::reference::AreaResponse,
            storage::dto::profile::UpdateProfileRequest,
            storage::dto::profile::ProfileResponse,
        )
    ),
    tags(
        (name = "events", description = "Event search, suggestions and management"),
        (name = "sports", description = "Sport reference data"),
        (name = "cities", description = "City reference data"),
        (name = "areas", description = "Area reference data"),
        (name = "profile", description = "Profile of the authenticated user"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API token")
                        .build(),
                ),
            )
        }
    }
}

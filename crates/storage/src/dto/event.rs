use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::{double_option, validate_not_blank};
use crate::models::Event;

pub const DEFAULT_SUGGESTION_COUNT: usize = 3;

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(length(max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    pub sport: String,

    #[validate(length(max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    pub city: String,

    #[validate(length(max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    pub area: String,

    /// ISO-8601 date or date-time, kept as entered
    #[validate(length(max = 64))]
    #[validate(custom(function = "validate_not_blank"))]
    pub date: String,

    #[validate(length(max = 2000))]
    pub desc: Option<String>,
}

/// Request payload for updating an existing event. Only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,

    #[validate(length(max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[validate(length(max = 255))]
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,

    #[validate(length(max = 64))]
    #[validate(custom(function = "validate_not_blank"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// `null` clears the description
    #[validate(length(max = 2000))]
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, nullable)]
    pub desc: Option<Option<String>>,
}

impl UpdateEventRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sport.is_none()
            && self.city.is_none()
            && self.area.is_none()
            && self.date.is_none()
            && self.desc.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub sport: String,
    pub city: String,
    pub area: String,
    pub date: String,
    pub desc: Option<String>,
    pub created_by: String,
    pub created_at: String,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            sport: event.sport,
            city: event.city,
            area: event.area,
            date: event.date,
            desc: event.desc,
            created_by: event.created_by,
            created_at: event.created_at,
        }
    }
}

/// City/area pair given by the caller; absent values read as empty strings.
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocationQuery {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub city: String,

    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub area: String,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SuggestionQuery {
    /// Number of suggestions wanted (default 3)
    #[validate(range(max = 100, message = "count must be at most 100"))]
    pub count: Option<usize>,
}

impl SuggestionQuery {
    pub fn count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_SUGGESTION_COUNT)
    }
}

/// Distinct city and area values used by events, case preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventLocations {
    pub cities: Vec<String>,
    pub areas: Vec<String>,
}

/// "Did you mean" candidates for a location query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SimilarLocations {
    pub similar_cities: Vec<String>,
    pub similar_areas: Vec<String>,
    pub all_cities: Vec<String>,
    pub all_areas: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateEventRequest {
        CreateEventRequest {
            name: "Sunday league".into(),
            sport: "Football".into(),
            city: "Pune".into(),
            area: "Kothrud".into(),
            date: "2025-06-01".into(),
            desc: None,
        }
    }

    #[test]
    fn test_create_request_rejects_blank_required_fields() {
        assert!(valid_request().validate().is_ok());

        let mut req = valid_request();
        req.city = "   ".into();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("city"));

        let mut req = valid_request();
        req.date = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_only_checks_supplied_fields() {
        let patch = UpdateEventRequest {
            name: Some("Renamed".into()),
            ..Default::default()
        };
        assert!(patch.validate().is_ok());
        assert!(!patch.is_empty());

        let patch = UpdateEventRequest {
            area: Some(" ".into()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(UpdateEventRequest::default().is_empty());
    }

    #[test]
    fn test_update_request_tells_null_desc_from_absent() {
        let absent: UpdateEventRequest = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(absent.desc, None);

        let cleared: UpdateEventRequest = serde_json::from_str(r#"{"desc":null}"#).unwrap();
        assert_eq!(cleared.desc, Some(None));
        assert!(!cleared.is_empty());
        assert!(cleared.validate().is_ok());

        let set: UpdateEventRequest = serde_json::from_str(r#"{"desc":"Bring water"}"#).unwrap();
        assert_eq!(set.desc, Some(Some("Bring water".to_string())));
    }

    #[test]
    fn test_suggestion_count_defaults_to_three() {
        assert_eq!(SuggestionQuery { count: None }.count(), 3);
        assert_eq!(SuggestionQuery { count: Some(7) }.count(), 7);
        assert!(SuggestionQuery { count: Some(500) }.validate().is_err());
    }
}

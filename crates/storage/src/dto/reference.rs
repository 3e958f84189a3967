use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::common::validate_not_blank;
use crate::models::{Area, City, Sport};

/// Payload for adding or renaming a sport or city
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NameRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAreaRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub city_id: String,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AreaFilter {
    #[serde(default)]
    #[validate(custom(function = "validate_not_blank"))]
    pub city_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SportResponse {
    pub id: String,
    pub name: String,
}

impl From<Sport> for SportResponse {
    fn from(sport: Sport) -> Self {
        Self {
            id: sport.id,
            name: sport.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CityResponse {
    pub id: String,
    pub name: String,
}

impl From<City> for CityResponse {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AreaResponse {
    pub id: String,
    pub city_id: String,
    pub name: String,
}

impl From<Area> for AreaResponse {
    fn from(area: Area) -> Self {
        Self {
            id: area.id,
            city_id: area.city_id,
            name: area.name,
        }
    }
}

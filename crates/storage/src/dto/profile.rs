use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::common::validate_not_blank;
use crate::models::UserProfile;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,

    #[validate(length(max = 100))]
    pub display_name: Option<String>,

    #[validate(length(max = 50))]
    #[validate(custom(function = "validate_not_blank"))]
    pub skill_level: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub uid: String,
    pub email: Option<String>,
    pub role: String,
    pub display_name: String,
    pub skill_level: String,
    pub created_at: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            uid: profile.uid,
            email: profile.email,
            role: profile.role,
            display_name: profile.display_name,
            skill_level: profile.skill_level,
            created_at: profile.created_at,
        }
    }
}

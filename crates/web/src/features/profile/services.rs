use storage::{
    DocumentStore, dto::profile::UpdateProfileRequest, models::UserProfile,
    repository::user_profile::UserProfileRepository,
};

use crate::error::{WebError, WebResult};
use crate::middleware::auth::Session;

pub async fn get_profile(store: &dyn DocumentStore, session: &Session) -> WebResult<UserProfile> {
    UserProfileRepository::new(store)
        .find(&session.user_id)
        .await?
        .ok_or(WebError::NotFound)
}

pub async fn update_profile(
    store: &dyn DocumentStore,
    session: &Session,
    request: &UpdateProfileRequest,
) -> WebResult<UserProfile> {
    Ok(UserProfileRepository::new(store)
        .update(&session.user_id, request)
        .await?)
}

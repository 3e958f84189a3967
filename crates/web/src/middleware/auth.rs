use std::collections::HashMap;

use axum::{
    Extension,
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use storage::repository::user_profile::UserProfileRepository;

use crate::error::WebError;
use crate::state::AppState;

/// Resolves a bearer token to the opaque id of the user it belongs to.
pub trait IdentityProvider: Send + Sync {
    fn resolve(&self, token: &str) -> Option<String>;
}

/// Static token table, configured as `token:user_id` pairs separated by commas.
#[derive(Clone, Default)]
pub struct ApiTokens {
    tokens: HashMap<String, String>,
}

impl ApiTokens {
    pub fn from_comma_separated(tokens_str: &str) -> Self {
        let tokens = tokens_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|entry| match entry.split_once(':') {
                Some((token, user_id)) if !token.trim().is_empty() && !user_id.trim().is_empty() => {
                    Some((token.trim().to_string(), user_id.trim().to_string()))
                }
                _ => {
                    tracing::warn!("Ignoring malformed API token entry");
                    None
                }
            })
            .collect();

        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl IdentityProvider for ApiTokens {
    fn resolve(&self, token: &str) -> Option<String> {
        self.tokens.get(token).cloned()
    }
}

/// The authenticated caller of the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub is_admin: bool,
}

impl Session {
    /// Creators and administrators may change or remove a record.
    pub fn can_modify(&self, owner_id: &str) -> bool {
        self.is_admin || self.user_id == owner_id
    }
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, WebError> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .ok_or(WebError::Unauthorized)?;

    let user_id = state.identities().resolve(token).ok_or_else(|| {
        tracing::warn!("Invalid API token attempt");
        WebError::Unauthorized
    })?;

    // First sight of a user creates their default profile
    let profile = UserProfileRepository::new(state.store())
        .ensure(&user_id, None)
        .await?;
    let is_admin = state.is_bootstrap_admin(&user_id) || profile.is_admin();

    req.extensions_mut().insert(Session { user_id, is_admin });

    Ok(next.run(req).await)
}

pub async fn require_admin(
    Extension(session): Extension<Session>,
    req: Request,
    next: Next,
) -> Result<Response, WebError> {
    if !session.is_admin {
        tracing::warn!(user_id = %session.user_id, "Non-admin attempted an admin action");
        return Err(WebError::Forbidden);
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_from_comma_separated() {
        let tokens = ApiTokens::from_comma_separated(" t1:alice , t2:bob,broken,:nobody,t3:");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.resolve("t1").as_deref(), Some("alice"));
        assert_eq!(tokens.resolve("t2").as_deref(), Some("bob"));
        assert!(tokens.resolve("broken").is_none());
        assert!(ApiTokens::from_comma_separated("").is_empty());
    }

    #[test]
    fn test_session_can_modify() {
        let owner = Session {
            user_id: "alice".into(),
            is_admin: false,
        };
        assert!(owner.can_modify("alice"));
        assert!(!owner.can_modify("bob"));

        let admin = Session {
            user_id: "root".into(),
            is_admin: true,
        };
        assert!(admin.can_modify("bob"));
    }
}

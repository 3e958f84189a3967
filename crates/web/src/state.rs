use std::collections::HashSet;
use std::sync::Arc;

use storage::DocumentStore;
use storage::services::event_matching::ShuffleMode;

use crate::middleware::auth::IdentityProvider;

/// Shared handles given to every handler.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn DocumentStore>,
    identities: Arc<dyn IdentityProvider>,
    admin_user_ids: Arc<HashSet<String>>,
    shuffle: ShuffleMode,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        identities: Arc<dyn IdentityProvider>,
        admin_user_ids: HashSet<String>,
        shuffle: ShuffleMode,
    ) -> Self {
        Self {
            store,
            identities,
            admin_user_ids: Arc::new(admin_user_ids),
            shuffle,
        }
    }

    pub fn store(&self) -> &dyn DocumentStore {
        self.store.as_ref()
    }

    pub fn identities(&self) -> &dyn IdentityProvider {
        self.identities.as_ref()
    }

    /// Ids configured as administrators regardless of their stored profile
    pub fn is_bootstrap_admin(&self, user_id: &str) -> bool {
        self.admin_user_ids.contains(user_id)
    }

    pub fn shuffle(&self) -> ShuffleMode {
        self.shuffle
    }
}

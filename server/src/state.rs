//! Shared application state.

use keyward_auth::{CredentialEngine, TokenConfig, TokenIssuer};
use keyward_crypto::HashParams;
use keyward_license::LicenseEngine;
use keyward_storage::SqliteStore;
use keyward_types::Clock;
use std::sync::Arc;

/// Engines shared by every request. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialEngine<SqliteStore>>,
    pub licenses: Arc<LicenseEngine<SqliteStore>>,
}

impl AppState {
    /// Builds both engines over one store and one clock.
    pub fn new(
        store: SqliteStore,
        tokens: TokenConfig,
        hash_params: HashParams,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let issuer = TokenIssuer::new(tokens, clock.clone());
        Self {
            credentials: Arc::new(CredentialEngine::new(store.clone(), issuer, hash_params)),
            licenses: Arc::new(LicenseEngine::new(store, clock)),
        }
    }
}

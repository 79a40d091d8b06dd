pub mod auth;
pub mod error;
pub mod models;
pub mod paths;
pub mod services;
pub mod storage;
pub mod store;
pub mod views;

pub use error::{StoreError, StoreResult};
pub use models::*;

use auth::SessionManager;
use sitedesk_ai::{GeminiClient, TextGenerator};
use std::sync::Arc;
use storage::SessionStorage;
use store::MockStore;
use tracing::info;

/// Core application state shared between the server and embedded callers
pub struct AppCore {
    pub store: Arc<MockStore>,
    pub session: SessionManager,
    pub generator: Arc<dyn TextGenerator>,
}

impl AppCore {
    /// Initialize over the seeded demo corpus, with the session snapshot
    /// database at `db_path` and the environment-configured text generator.
    pub async fn new(db_path: &str) -> anyhow::Result<Self> {
        Self::with_store(MockStore::seeded(), db_path).await
    }

    /// Initialize over an explicit store (tests, alternate corpora).
    pub async fn with_store(store: MockStore, db_path: &str) -> anyhow::Result<Self> {
        let store = Arc::new(store);
        let snapshots = SessionStorage::open(db_path)?;
        let session = SessionManager::restore(store.clone(), snapshots);

        info!("Initializing SiteDesk core");

        Ok(Self {
            store,
            session,
            generator: Arc::new(GeminiClient::from_env()),
        })
    }

    /// Swap the text-generation capability.
    pub fn with_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = generator;
        self
    }
}

//! Application state wiring the list service, session store and cookie
//! signer together.

use std::sync::Arc;

use listkeeper_core::service::list::ListService;
use listkeeper_infra::session::{CookieSigner, InMemorySessionStore};
use listkeeper_types::config::AppConfig;

/// The list service pinned to the in-memory session store.
pub type ConcreteListService = ListService<InMemorySessionStore>;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub list_service: Arc<ConcreteListService>,
    pub signer: Arc<CookieSigner>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build the state from configuration. Without a configured secret the
    /// cookie key is random, so existing cookies stop verifying on restart.
    pub fn init(config: AppConfig) -> anyhow::Result<Self> {
        let signer = match config.session.secret.as_deref() {
            Some(secret) => CookieSigner::new(secret.as_bytes())?,
            None => {
                tracing::warn!(
                    "No session secret configured; generated a random key for this process"
                );
                CookieSigner::random()?
            }
        };

        Ok(Self {
            list_service: Arc::new(ListService::new(InMemorySessionStore::new())),
            signer: Arc::new(signer),
            config: Arc::new(config),
        })
    }
}

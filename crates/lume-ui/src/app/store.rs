//! App-wide yewdux store.
//!
//! # Design
//! - The session store is the only state shared across components.
//! - `Store::new` performs the one-time read-back of the persisted session.

use lume_identity::session::{OpaqueTokenIssuer, SessionStore};
use lume_identity::IdentityConfig;
use lume_status::{NetworkStatus, StaticStatusSource, StatusSource};
use yewdux::store::Store;

use super::preferences::{BrowserStorage, load_config};

/// Global application store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct AppStore {
    /// Widget configuration, loaded once.
    pub config: IdentityConfig,
    /// Session mirrored into local storage.
    pub session: SessionStore<BrowserStorage>,
    /// Latest network snapshot for the dashboard.
    pub network: NetworkStatus,
}

impl Store for AppStore {
    fn new() -> Self {
        let config = load_config();
        let session =
            SessionStore::restore(BrowserStorage, OpaqueTokenIssuer, config.session_key.clone());
        Self {
            config,
            session,
            network: StaticStatusSource::default().snapshot(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

use std::sync::Arc;

use sql_middleware::middleware::ConfigAndPool;
use tokio::sync::RwLock;

use crate::controller::lookup::LookupConfig;
use crate::prefs::PrefStore;
use crate::round::RoundState;
use crate::sync::{ChangeFeed, SyncSession};

pub type RoundHandle = Arc<RwLock<RoundState>>;
/// `Some` while an identity is signed in; sign-out takes the session out
/// and tears it down.
pub type SessionHandle = Arc<RwLock<Option<SyncSession>>>;
pub type PrefsHandle = Arc<RwLock<PrefStore>>;

/// Everything a handler needs, passed in at construction instead of
/// reached for ambiently. All mutation happens behind the tokio locks on
/// the single server runtime.
#[derive(Clone)]
pub struct AppState {
    pub config_and_pool: ConfigAndPool,
    pub feed: ChangeFeed,
    pub round: RoundHandle,
    pub session: SessionHandle,
    pub prefs: PrefsHandle,
    pub lookup: LookupConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config_and_pool: ConfigAndPool, lookup: LookupConfig, prefs: PrefStore) -> Self {
        Self {
            config_and_pool,
            feed: ChangeFeed::new(),
            round: Arc::new(RwLock::new(RoundState::new())),
            session: Arc::new(RwLock::new(None)),
            prefs: Arc::new(RwLock::new(prefs)),
            lookup,
        }
    }

    /// Owner id of the signed-in identity, if any.
    pub async fn signed_in_owner(&self) -> Option<String> {
        self.session.read().await.as_ref().map(|s| s.owner.clone())
    }
}

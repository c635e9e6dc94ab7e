//! Chain and resolver status as reported by the local Lume node.

use serde::{Deserialize, Serialize};

/// Sync state of a single chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    /// Catching up with the network.
    Syncing,
    /// Fully synced.
    Done,
    /// Sync stopped on an error.
    Error,
}

impl SyncState {
    /// Lowercase label used in the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Syncing => "syncing",
            Self::Done => "done",
            Self::Error => "error",
        }
    }
}

/// What a chain provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainKind {
    /// Name-resolution blockchain.
    Blockchain,
    /// Content network.
    Content,
}

/// Status of one chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainStatus {
    /// Display name.
    pub name: String,
    /// Stable identifier, also used as the render key.
    pub chain_id: String,
    /// Current sync state.
    pub sync_state: SyncState,
    /// Whether this chain is the active resolver target.
    pub active: bool,
    /// Sync progress in percent.
    pub progress: u8,
    /// Recent log lines.
    #[serde(default)]
    pub logs: Vec<String>,
    /// Chain category.
    #[serde(rename = "type")]
    pub kind: ChainKind,
    /// Connected peers, for content networks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peer_count: Option<u32>,
}

/// Where names are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolverMode {
    /// The embedded node.
    Local,
    /// A remote RPC endpoint.
    Rpc,
}

/// Snapshot of every chain plus the active resolver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    /// Chains in display order.
    pub chains: Vec<ChainStatus>,
    /// Resolver in use.
    pub active_resolver: ResolverMode,
}

impl NetworkStatus {
    /// Seed data shown until a live node reports in.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            chains: vec![
                ChainStatus {
                    name: "Ethereum".to_string(),
                    chain_id: "1".to_string(),
                    sync_state: SyncState::Done,
                    active: true,
                    progress: 100,
                    logs: Vec::new(),
                    kind: ChainKind::Blockchain,
                    peer_count: None,
                },
                ChainStatus {
                    name: "IPFS".to_string(),
                    chain_id: "2".to_string(),
                    sync_state: SyncState::Syncing,
                    active: false,
                    progress: 50,
                    logs: Vec::new(),
                    kind: ChainKind::Content,
                    peer_count: Some(3),
                },
            ],
            active_resolver: ResolverMode::Local,
        }
    }

    /// Aggregate state: any error wins, then any syncing chain, else done.
    ///
    /// An empty chain list reports [`SyncState::Done`].
    #[must_use]
    pub fn overall_state(&self) -> SyncState {
        let states = || self.chains.iter().map(|chain| chain.sync_state);
        if states().any(|state| state == SyncState::Error) {
            SyncState::Error
        } else if states().any(|state| state == SyncState::Syncing) {
            SyncState::Syncing
        } else {
            SyncState::Done
        }
    }

    /// Look a chain up by id.
    #[must_use]
    pub fn chain(&self, chain_id: &str) -> Option<&ChainStatus> {
        self.chains.iter().find(|chain| chain.chain_id == chain_id)
    }
}

/// Provider of network status snapshots.
pub trait StatusSource {
    /// Current snapshot.
    fn snapshot(&self) -> NetworkStatus;
}

/// Source that always returns the same snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaticStatusSource {
    status: NetworkStatus,
}

impl StaticStatusSource {
    /// Serve `status` forever.
    #[must_use]
    pub const fn new(status: NetworkStatus) -> Self {
        Self { status }
    }
}

impl Default for StaticStatusSource {
    fn default() -> Self {
        Self::new(NetworkStatus::demo())
    }
}

impl StatusSource for StaticStatusSource {
    fn snapshot(&self) -> NetworkStatus {
        self.status.clone()
    }
}

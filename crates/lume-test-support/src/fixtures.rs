//! Canned recovery phrases and network snapshots.

use lume_identity::phrase::RecoveryPhrase;
use lume_status::{ChainKind, ChainStatus, NetworkStatus, ResolverMode, SyncState};

/// Phrase `w1 w2 ... wN`.
#[must_use]
pub fn recovery_phrase(words: usize) -> RecoveryPhrase {
    RecoveryPhrase::new((1..=words).map(|n| format!("w{n}")).collect())
}

/// Three chains covering every sync state, resolved over RPC.
#[must_use]
pub fn sample_network() -> NetworkStatus {
    let chain = |id: &str, name: &str, sync_state: SyncState, progress: u8, kind: ChainKind| {
        ChainStatus {
            name: name.to_string(),
            chain_id: id.to_string(),
            sync_state,
            active: false,
            progress,
            logs: Vec::new(),
            kind,
            peer_count: None,
        }
    };
    NetworkStatus {
        chains: vec![
            chain("1", "Ethereum", SyncState::Done, 100, ChainKind::Blockchain),
            chain("2", "IPFS", SyncState::Syncing, 35, ChainKind::Content),
            chain("3", "Handshake", SyncState::Error, 10, ChainKind::Blockchain),
        ],
        active_resolver: ResolverMode::Rpc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovery_phrase_is_numbered() {
        let phrase = recovery_phrase(3);
        assert_eq!(phrase.secret(), "w1 w2 w3");
    }

    #[test]
    fn sample_network_covers_every_state() {
        let network = sample_network();
        assert_eq!(network.chains.len(), 3);
        assert_eq!(network.overall_state(), SyncState::Error);
    }
}

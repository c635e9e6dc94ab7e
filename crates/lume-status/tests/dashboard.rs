use lume_status::{
    NetworkStatus, ProgressRing, StaticStatusSource, StatusSource, SyncState, Tone,
};
use lume_test_support::fixtures::sample_network;

#[test]
fn rings_follow_chain_states() {
    let network = StaticStatusSource::new(sample_network()).snapshot();
    let tones: Vec<Tone> = network
        .chains
        .iter()
        .map(|chain| ProgressRing::for_chain(chain).tone)
        .collect();
    assert_eq!(tones, [Tone::Primary, Tone::Warning, Tone::Danger]);
}

#[test]
fn chain_rows_show_lowercase_state() {
    let labels: Vec<&str> = sample_network()
        .chains
        .iter()
        .map(|chain| chain.sync_state.label())
        .collect();
    assert_eq!(labels, ["done", "syncing", "error"]);
}

#[test]
fn status_uses_node_wire_format() -> anyhow::Result<()> {
    let value = serde_json::to_value(NetworkStatus::demo())?;
    assert_eq!(value["activeResolver"], "local");
    assert_eq!(value["chains"][1]["syncState"], "syncing");
    assert_eq!(value["chains"][1]["type"], "content");
    assert_eq!(value["chains"][1]["peerCount"], 3);
    assert!(value["chains"][0].get("peerCount").is_none());

    let parsed: NetworkStatus = serde_json::from_value(value)?;
    assert_eq!(parsed.overall_state(), SyncState::Syncing);
    Ok(())
}

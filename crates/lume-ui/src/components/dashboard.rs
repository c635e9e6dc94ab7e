//! Network dashboard drawer with one progress ring per chain.

use crate::core::view::connection_title;
use lume_status::{ChainStatus, NetworkStatus, ProgressRing, RING_CIRCUMFERENCE};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardDrawerProps {
    pub network: NetworkStatus,
}

#[function_component(DashboardDrawer)]
pub(crate) fn dashboard_drawer(props: &DashboardDrawerProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <>
            <button class="btn btn-ghost lume-dashboard-trigger" onclick={toggle.clone()}>
                {"Open"}
            </button>
            if *open {
                <div class="lume-drawer-overlay" onclick={toggle} />
                <aside class="lume-drawer lume-slide-in-right" role="dialog" aria-modal="true">
                    <h3>{connection_title(props.network.overall_state())}</h3>
                    <p class="muted">{"Network Log:"}</p>
                    { for props.network.chains.iter().map(|chain| html! {
                        <div key={chain.chain_id.clone()} class="lume-chain">
                            <CircularProgress chain={chain.clone()} />
                            <span class="lume-chain-name">{&chain.name}</span>
                            <span class="lume-chain-state">{chain.sync_state.label()}</span>
                            if let Some(peers) = chain.peer_count {
                                <span class="muted">{format!("{peers} peers")}</span>
                            }
                        </div>
                    }) }
                </aside>
            }
        </>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CircularProgressProps {
    pub chain: ChainStatus,
}

#[function_component(CircularProgress)]
pub(crate) fn circular_progress(props: &CircularProgressProps) -> Html {
    let ring = ProgressRing::for_chain(&props.chain);
    let dash = format!("{RING_CIRCUMFERENCE}px");
    html! {
        <svg
            class={ring.tone.class()}
            width="100"
            height="100"
            viewBox="0 0 200 200"
            style="transform: rotate(-90deg)"
        >
            <circle
                r="90"
                cx="100"
                cy="100"
                fill="transparent"
                stroke="#e0e0e0"
                stroke-width="16px"
                stroke-dasharray={dash.clone()}
                stroke-dashoffset="0"
            />
            <circle
                r="90"
                cx="100"
                cy="100"
                stroke="currentColor"
                stroke-width="16px"
                stroke-linecap="round"
                stroke-dashoffset={format!("{}px", ring.dash_offset)}
                fill="transparent"
                stroke-dasharray={dash}
            />
            <g transform="scale(2)">
                <text
                    x={ring.label_x.to_string()}
                    y="57.5"
                    fill="currentColor"
                    font-size="26px"
                    font-weight="bold"
                    transform="rotate(90 50 50)"
                >
                    {ring.progress}
                </text>
            </g>
        </svg>
    }
}

use crate::components::dashboard::DashboardDrawer;
use crate::components::identity::LumeIdentity;
use gloo::console;
use store::AppStore;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod preferences;
pub(crate) mod store;

#[function_component(LumeApp)]
pub(crate) fn lume_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let signed_in = use_selector(|store: &AppStore| store.session.is_signed_in());
    let config = use_selector(|store: &AppStore| store.config.clone());
    let network = use_selector(|store: &AppStore| store.network.clone());

    let on_sign_out = Callback::from(move |_: MouseEvent| {
        dispatch.reduce_mut(|store| {
            if let Err(err) = store.session.sign_out() {
                console::error!("sign-out failed", err.to_string());
            }
        });
    });

    html! {
        <main class="lume-app">
            <DashboardDrawer network={(*network).clone()} />
            if *signed_in {
                <section class="lume-signed-in">
                    <p>{"You're signed in with Lume."}</p>
                    <button class="btn btn-outline" onclick={on_sign_out}>{"Sign out"}</button>
                </section>
            } else {
                <LumeIdentity config={(*config).clone()} />
            }
        </main>
    }
}

/// Mount the app on `#root`, or on `<body>` when it is missing.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<LumeApp>::with_root(root).render();
    } else {
        yew::Renderer::<LumeApp>::new().render();
    }
}

//! Keyed container that replays the entry animation whenever the visible panel changes.

use crate::core::motion::panel_enter;
use lume_identity::wizard::Panel;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SwitchableContainerProps {
    pub panel: Panel,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SwitchableContainer)]
pub(crate) fn switchable_container(props: &SwitchableContainerProps) -> Html {
    let motion = panel_enter(props.panel);
    let id = props.panel.id().to_string();
    html! {
        <div class="lume-switchable">
            <div
                key={id.clone()}
                data-panel={id}
                class={classes!("lume-panel", motion.class)}
                style={motion.style()}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}

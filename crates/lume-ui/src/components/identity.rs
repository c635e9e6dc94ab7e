//! Sign-in / create-account wizard component.
//!
//! # Design
//! - One controller per mounted component; the initial panel is applied once, on mount.
//! - Actions run synchronously against the session held in the app store.
//! - Sign-in errors render under the panel and leave the panel as it was.

use crate::app::store::AppStore;
use crate::components::panels::{PanelRender, PanelView, render_for};
use crate::components::switchable::SwitchableContainer;
use crate::core::view::{divider_class, footer_button_class, wizard_error_message};
use gloo::console;
use lume_identity::wizard::{
    Panel, PanelProps, Transition, ViewFlags, WizardAction, WizardController, lume_registry,
};
use lume_identity::{IdentityConfig, WizardError};
use yew::prelude::*;
use yewdux::prelude::Dispatch;

type Controller = WizardController<PanelRender>;

#[derive(Properties, PartialEq)]
pub(crate) struct LumeIdentityProps {
    pub config: IdentityConfig,
}

#[function_component(LumeIdentity)]
pub(crate) fn lume_identity(props: &LumeIdentityProps) -> Html {
    let wizard = {
        let config = props.config.clone();
        use_mut_ref(move || Controller::mount(lume_registry(render_for), &config))
    };
    let error = use_state(|| None as Option<&'static str>);
    let redraw = use_force_update();
    let copy_window = props.config.copy_feedback();

    {
        let wizard = wizard.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    // Busy when teardown happens inside a sign-in dispatch.
                    if let Ok(mut slot) = wizard.try_borrow_mut()
                        && let Ok(controller) = slot.as_mut()
                    {
                        controller.unmount();
                    }
                }
            },
            (),
        );
    }

    let on_action = {
        let wizard = wizard.clone();
        let error = error.clone();
        Callback::from(move |action: WizardAction| {
            let outcome = {
                let mut guard = wizard.borrow_mut();
                let Ok(controller) = guard.as_mut() else {
                    return;
                };
                let mut outcome = None;
                Dispatch::<AppStore>::new().reduce_mut(|store| {
                    outcome = Some(controller.dispatch(action, &mut store.session));
                });
                outcome
            };
            match outcome {
                Some(Ok(Transition::Moved { .. })) => {
                    error.set(None);
                    redraw.force_update();
                }
                Some(Ok(Transition::SignedIn(_))) => error.set(None),
                Some(Err(err)) => {
                    console::error!("wizard action failed", err.to_string());
                    error.set(Some(wizard_error_message(&err)));
                }
                None => {}
            }
        })
    };

    let guard = wizard.borrow();
    let view = guard.as_ref().map_err(WizardError::clone).and_then(current_view);
    let (panel, flags, panel_props, render) = match view {
        Ok(view) => view,
        Err(err) => {
            console::error!("wizard unavailable", err.to_string());
            return html! {
                <div class="lume-identity">
                    <p class="error-text">{wizard_error_message(&err)}</p>
                </div>
            };
        }
    };

    let footer = {
        let action = flags.footer_action();
        let on_action = on_action.clone();
        Callback::from(move |_| on_action.emit(action.clone()))
    };
    let panel_view = PanelView {
        props: panel_props,
        on_action,
        copy_window,
    };

    html! {
        <div class="lume-identity">
            <div class="lume-logo-bg" aria-hidden="true" />
            <div class="lume-body">
                <h2 class="lume-heading">{flags.heading()}</h2>
                <div class="lume-stack">
                    <SwitchableContainer {panel}>
                        { render(panel_view) }
                    </SwitchableContainer>
                    if let Some(message) = *error {
                        <p class="error-text" role="alert">{message}</p>
                    }
                    if flags.show_divider() {
                        <div class={divider_class(&flags)}>
                            <span class="lume-divider-line" />
                            <span>{"or"}</span>
                            <span class="lume-divider-line" />
                        </div>
                    }
                    <button class={footer_button_class(&flags)} onclick={footer}>
                        <span>{flags.footer_label()}</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

fn current_view(
    controller: &Controller,
) -> Result<(Panel, ViewFlags, PanelProps, PanelRender), WizardError> {
    Ok((
        controller.current()?,
        controller.flags()?,
        controller.props()?,
        *controller.current_entry()?.render(),
    ))
}

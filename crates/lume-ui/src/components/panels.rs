//! The four wizard panels and their render functions.

use std::time::Duration;

use crate::app::preferences::{BrowserClock, phrase_seed, write_clipboard};
use crate::core::motion::{reveal_overlay, reveal_sign_in, reveal_warning};
use crate::core::view::{copy_button_class, copy_icon, phrase_cells};
use gloo::console;
use gloo::timers::callback::Timeout;
use lume_identity::config::DEFAULT_PHRASE_LENGTH;
use lume_identity::feedback::CopyFeedback;
use lume_identity::phrase::{DemoPhraseGenerator, PhraseGenerator, PhraseReveal, RevealStep};
use lume_identity::wizard::{Panel, PanelProps, WizardAction};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Everything a panel render function receives.
#[derive(Clone, PartialEq)]
pub(crate) struct PanelView {
    pub props: PanelProps,
    pub on_action: Callback<WizardAction>,
    pub copy_window: Duration,
}

/// Render function stored in the panel registry.
pub(crate) type PanelRender = fn(PanelView) -> Html;

pub(crate) fn render_for(panel: Panel) -> PanelRender {
    match panel {
        Panel::SubmitButton => render_submit_button,
        Panel::SeedPhraseInput => render_seed_phrase_input,
        Panel::SetupAccountKey => render_setup_account_key,
        Panel::SeedPhraseGeneration => render_seed_phrase_generation,
    }
}

fn render_submit_button(view: PanelView) -> Html {
    html! { <SubmitButtonPanel on_action={view.on_action} /> }
}

fn render_seed_phrase_input(view: PanelView) -> Html {
    html! { <SeedPhraseInputPanel on_action={view.on_action} /> }
}

fn render_setup_account_key(view: PanelView) -> Html {
    html! { <SetupAccountKeyPanel on_action={view.on_action} /> }
}

fn render_seed_phrase_generation(view: PanelView) -> Html {
    let phrase_length = match view.props {
        PanelProps::SeedPhraseGeneration { phrase_length } => phrase_length,
        _ => DEFAULT_PHRASE_LENGTH,
    };
    html! {
        <SeedPhraseGenerationPanel
            {phrase_length}
            copy_window={view.copy_window}
            on_action={view.on_action}
        />
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ActionProps {
    pub on_action: Callback<WizardAction>,
}

#[function_component(SubmitButtonPanel)]
pub(crate) fn submit_button_panel(props: &ActionProps) -> Html {
    let onclick = {
        let on_action = props.on_action.clone();
        Callback::from(move |_| on_action.emit(WizardAction::SignInWithAccountKey))
    };
    html! {
        <button class="btn btn-outline lume-wide" {onclick}>
            <span>{"Sign in with Account Key"}</span>
        </button>
    }
}

#[function_component(SeedPhraseInputPanel)]
pub(crate) fn seed_phrase_input_panel(props: &ActionProps) -> Html {
    let input = use_node_ref();
    let onsubmit = {
        let input = input.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let phrase = input
                .cast::<HtmlInputElement>()
                .map(|element| element.value())
                .unwrap_or_default();
            on_action.emit(WizardAction::SubmitSeedPhrase(phrase));
        })
    };
    html! {
        <form class="lume-stack" {onsubmit}>
            <input
                ref={input}
                class="input lume-wide"
                name="seedPhrase"
                autocomplete="off"
                spellcheck="false"
            />
            <div class="lume-slide-up" style="animation-delay: 100ms;">
                <button class="btn btn-primary lume-wide" type="submit">{"Sign in"}</button>
            </div>
        </form>
    }
}

#[function_component(SetupAccountKeyPanel)]
pub(crate) fn setup_account_key_panel(props: &ActionProps) -> Html {
    let onclick = {
        let on_action = props.on_action.clone();
        Callback::from(move |_| on_action.emit(WizardAction::KeepItSafe))
    };
    html! {
        <button class="btn btn-primary lume-wide" {onclick}>
            <span>{"I get it, I'll keep it safe. Let's see the key."}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct SeedPhraseGenerationProps {
    pub phrase_length: usize,
    pub copy_window: Duration,
    pub on_action: Callback<WizardAction>,
}

#[function_component(SeedPhraseGenerationPanel)]
pub(crate) fn seed_phrase_generation_panel(props: &SeedPhraseGenerationProps) -> Html {
    let reveal = {
        let length = props.phrase_length;
        use_state(move || {
            PhraseReveal::new(DemoPhraseGenerator::new(phrase_seed()).generate(length))
        })
    };
    let step = reveal.step();

    let on_continue = {
        let reveal = reveal.clone();
        Callback::from(move |_| {
            let mut next = (*reveal).clone();
            next.continue_to_reveal();
            reveal.set(next);
        })
    };
    let on_sign_in = {
        let reveal = reveal.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |_| match reveal.confirm() {
            Ok(secret) => on_action.emit(WizardAction::SubmitGeneratedPhrase(secret)),
            Err(err) => console::error!("sign-in before reveal", err.to_string()),
        })
    };

    html! {
        <div class="lume-generation">
            if let Some(motion) = reveal_overlay(step) {
                <div class={classes!("lume-overlay", motion.class)} style={motion.style()} />
            }
            <div class="lume-phrase-grid">
                { for phrase_cells(reveal.phrase()).into_iter().map(|cell| html! {
                    <div class="lume-phrase-cell" key={cell.position}>
                        <span class="lume-phrase-word">{cell.word}</span>
                        <span class="lume-phrase-index">{cell.position}</span>
                    </div>
                }) }
                if let Some(motion) = reveal_warning(step) {
                    <div class={classes!("lume-warning", motion.class)} style={motion.style()}>
                        <span class="icon icon-exclamation-triangle" aria-hidden="true" />
                        <span>{"Make sure to write this down for safe keeping."}</span>
                    </div>
                }
                <CopyButton secret={reveal.phrase().secret()} window={props.copy_window} />
            </div>
            if step == RevealStep::Idle {
                <button class="btn btn-secondary lume-wide" onclick={on_continue}>{"Continue"}</button>
            }
            if let Some(motion) = reveal_sign_in(step) {
                <div class={classes!("lume-wide", motion.class)} style={motion.style()}>
                    <button class="btn btn-primary lume-wide" onclick={on_sign_in}>{"Sign In"}</button>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CopyButtonProps {
    pub secret: String,
    pub window: Duration,
}

/// Copy-to-clipboard button with a timed "Copied!" acknowledgement.
///
/// The revert timer is owned by the component and dropped (cancelled) on unmount.
#[function_component(CopyButton)]
pub(crate) fn copy_button(props: &CopyButtonProps) -> Html {
    let feedback = {
        let window = props.window;
        use_mut_ref(move || CopyFeedback::new(BrowserClock, window))
    };
    let timer = use_mut_ref(|| None as Option<Timeout>);
    let redraw = use_force_update();

    {
        let feedback = feedback.clone();
        let timer = timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    timer.borrow_mut().take();
                    feedback.borrow_mut().cancel();
                }
            },
            (),
        );
    }

    let onclick = {
        let feedback = feedback.clone();
        let timer = timer.clone();
        let redraw = redraw.clone();
        let secret = props.secret.clone();
        Callback::from(move |_| {
            write_clipboard(&secret);
            feedback.borrow_mut().copy();
            if let Some(remaining) = feedback.borrow().remaining() {
                let redraw = redraw.clone();
                let millis = u32::try_from(remaining.as_millis()).unwrap_or(u32::MAX);
                // Replacing the handle drops the previous timeout.
                *timer.borrow_mut() = Some(Timeout::new(millis, move || redraw.force_update()));
            }
            redraw.force_update();
        })
    };

    let state = feedback.borrow().state();
    html! {
        <button class={copy_button_class(state)} {onclick}>
            <span class={classes!("icon", format!("icon-{}", copy_icon(state)))} aria-hidden="true" />
            {state.label()}
        </button>
    }
}

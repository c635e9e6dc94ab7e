//! Sign-in / create-account wizard: panel set, transition table and view flags.
//!
//! # Design
//! - Panels are a closed enum; the registry maps each to the host's render function.
//! - View flags are derived from the current panel on every read and never stored.
//! - Back navigation is flattened: it always returns to [`Panel::SubmitButton`].
//! - Sign-in failures leave the visible panel untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::IdentityConfig;
use crate::error::WizardError;
use crate::panel::{PanelEntry, PanelId, PanelRegistry};
use crate::session::{Session, SignIn};
use crate::switchable::SwitchableStore;

/// The fixed set of wizard panels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// Entry panel with the "Sign in with Account Key" button.
    SubmitButton,
    /// Recovery-phrase input for existing accounts.
    SeedPhraseInput,
    /// Safety notice before a new key is shown.
    SetupAccountKey,
    /// Generated recovery phrase with copy and sign-in.
    SeedPhraseGeneration,
}

impl Panel {
    /// Every panel, in flow order.
    pub const ALL: [Self; 4] = [
        Self::SubmitButton,
        Self::SeedPhraseInput,
        Self::SetupAccountKey,
        Self::SeedPhraseGeneration,
    ];

    /// Logical registry name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SubmitButton => "SubmitButton",
            Self::SeedPhraseInput => "SeedPhraseInput",
            Self::SetupAccountKey => "SetupAccountKey",
            Self::SeedPhraseGeneration => "SeedPhraseGeneration",
        }
    }

    /// Explicit identity token registered for this panel.
    #[must_use]
    pub const fn id(self) -> PanelId {
        PanelId::from_static(match self {
            Self::SubmitButton => "submit-button",
            Self::SeedPhraseInput => "seed-phrase-input",
            Self::SetupAccountKey => "setup-account-key",
            Self::SeedPhraseGeneration => "seed-phrase-form",
        })
    }

    /// Resolve a logical registry name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|panel| panel.name() == name)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Props each panel requires, one variant per panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelProps {
    /// No props.
    SubmitButton,
    /// No props.
    SeedPhraseInput,
    /// No props.
    SetupAccountKey,
    /// Number of words to generate.
    SeedPhraseGeneration {
        /// Words per phrase.
        phrase_length: usize,
    },
}

impl PanelProps {
    /// Panel these props belong to.
    #[must_use]
    pub const fn panel(self) -> Panel {
        match self {
            Self::SubmitButton => Panel::SubmitButton,
            Self::SeedPhraseInput => Panel::SeedPhraseInput,
            Self::SetupAccountKey => Panel::SetupAccountKey,
            Self::SeedPhraseGeneration { .. } => Panel::SeedPhraseGeneration,
        }
    }
}

/// Build the registry of lume panels, asking the host for each render function.
pub fn lume_registry<R>(mut render_for: impl FnMut(Panel) -> R) -> PanelRegistry<R> {
    let mut registry = PanelRegistry::new();
    for panel in Panel::ALL {
        registry.register(panel.name(), render_for(panel), Some(panel.id()));
    }
    registry
}

/// User actions the wizard reacts to.
#[derive(Clone, PartialEq, Eq)]
pub enum WizardAction {
    /// "Sign in with Account Key".
    SignInWithAccountKey,
    /// "Create an Account".
    CreateAccount,
    /// "I get it, I'll keep it safe. Let's see the key."
    KeepItSafe,
    /// "Go Back".
    GoBack,
    /// Submit the phrase typed into the input panel.
    SubmitSeedPhrase(String),
    /// "Sign In" with the generated phrase.
    SubmitGeneratedPhrase(String),
}

impl WizardAction {
    /// Stable action name for logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SignInWithAccountKey => "sign_in_with_account_key",
            Self::CreateAccount => "create_account",
            Self::KeepItSafe => "keep_it_safe",
            Self::GoBack => "go_back",
            Self::SubmitSeedPhrase(_) => "submit_seed_phrase",
            Self::SubmitGeneratedPhrase(_) => "submit_generated_phrase",
        }
    }
}

impl fmt::Debug for WizardAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flags derived from the visible panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ViewFlags {
    /// The entry panel is visible.
    pub is_submit_button_in_view: bool,
    /// The phrase input is visible.
    pub is_login_with_account_key: bool,
    /// One of the account-creation panels is visible.
    pub is_creating_account: bool,
    /// The generated phrase is visible.
    pub is_showing_seed_phrase: bool,
    /// The last creation step is visible.
    pub is_final_step: bool,
    /// The footer shows "Go Back".
    pub should_show_back_button: bool,
}

impl ViewFlags {
    /// Derive the flags for `panel`.
    #[must_use]
    pub const fn for_panel(panel: Panel) -> Self {
        let is_creating_account =
            matches!(panel, Panel::SetupAccountKey | Panel::SeedPhraseGeneration);
        Self {
            is_submit_button_in_view: matches!(panel, Panel::SubmitButton),
            is_login_with_account_key: matches!(panel, Panel::SeedPhraseInput),
            is_creating_account,
            is_showing_seed_phrase: matches!(panel, Panel::SeedPhraseGeneration),
            is_final_step: matches!(panel, Panel::SeedPhraseGeneration),
            should_show_back_button: is_creating_account,
        }
    }

    /// Heading above the panel.
    #[must_use]
    pub const fn heading(&self) -> &'static str {
        if self.is_showing_seed_phrase {
            "Here's your account key"
        } else if self.is_creating_account {
            "Set up your account key"
        } else {
            "Sign in with Lume"
        }
    }

    /// Label of the footer button.
    #[must_use]
    pub const fn footer_label(&self) -> &'static str {
        if self.should_show_back_button {
            "Go Back"
        } else {
            "Create an Account"
        }
    }

    /// Action dispatched by the footer button.
    #[must_use]
    pub const fn footer_action(&self) -> WizardAction {
        if self.should_show_back_button {
            WizardAction::GoBack
        } else {
            WizardAction::CreateAccount
        }
    }

    /// Whether the "or" divider and footer button use the accent colour.
    #[must_use]
    pub const fn accent_footer(&self) -> bool {
        self.is_submit_button_in_view
    }

    /// Whether the "or" divider is drawn above the footer.
    #[must_use]
    pub const fn show_divider(&self) -> bool {
        !self.is_final_step
    }
}

/// Outcome of a dispatched action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The visible panel changed.
    Moved {
        /// Panel before the action.
        from: Panel,
        /// Panel after the action.
        to: Panel,
    },
    /// Sign-in succeeded; the wizard is done.
    SignedIn(Session),
}

/// Drives one mounted wizard over a registry of lume panels.
#[derive(Clone, Debug)]
pub struct WizardController<R> {
    registry: PanelRegistry<R>,
    store: SwitchableStore,
    phrase_length: usize,
}

impl<R> WizardController<R> {
    /// Mount a wizard on `config.initial_panel`.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::Panel`] when the registry lacks the initial panel.
    pub fn mount(registry: PanelRegistry<R>, config: &IdentityConfig) -> Result<Self, WizardError> {
        let initial = registry.lookup(config.initial_panel.name())?.id().clone();
        tracing::debug!(initial = %initial, "wizard mounted");
        Ok(Self {
            registry,
            store: SwitchableStore::mounted(initial),
            phrase_length: config.phrase_length,
        })
    }

    /// Tear the wizard down; later reads fail with `NotInitialized`.
    pub fn unmount(&mut self) {
        self.store.unmount();
    }

    /// Visible panel.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::Store`] after unmount and [`WizardError::UnknownPanel`]
    /// when the store holds an id outside the lume panel set.
    pub fn current(&self) -> Result<Panel, WizardError> {
        let entry = self.current_entry()?;
        Panel::from_name(entry.name()).ok_or_else(|| WizardError::UnknownPanel {
            id: entry.id().clone(),
        })
    }

    /// Registry entry of the visible panel.
    ///
    /// # Errors
    ///
    /// Same as [`WizardController::current`].
    pub fn current_entry(&self) -> Result<&PanelEntry<R>, WizardError> {
        let id = self.store.current()?;
        self.registry
            .find_by_id(id)
            .ok_or_else(|| WizardError::UnknownPanel { id: id.clone() })
    }

    /// Flags for the visible panel.
    ///
    /// # Errors
    ///
    /// Same as [`WizardController::current`].
    pub fn flags(&self) -> Result<ViewFlags, WizardError> {
        self.current().map(ViewFlags::for_panel)
    }

    /// Props to render the visible panel with.
    ///
    /// # Errors
    ///
    /// Same as [`WizardController::current`].
    pub fn props(&self) -> Result<PanelProps, WizardError> {
        Ok(match self.current()? {
            Panel::SubmitButton => PanelProps::SubmitButton,
            Panel::SeedPhraseInput => PanelProps::SeedPhraseInput,
            Panel::SetupAccountKey => PanelProps::SetupAccountKey,
            Panel::SeedPhraseGeneration => PanelProps::SeedPhraseGeneration {
                phrase_length: self.phrase_length,
            },
        })
    }

    /// Apply `action`, signing in through `session` on terminal steps.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::IllegalTransition`] for actions the visible panel does not
    /// offer and [`WizardError::SignIn`] when sign-in is rejected; the visible panel is
    /// unchanged in both cases.
    pub fn dispatch(
        &mut self,
        action: WizardAction,
        session: &mut impl SignIn,
    ) -> Result<Transition, WizardError> {
        let from = self.current()?;
        let to = match (from, &action) {
            (Panel::SubmitButton, WizardAction::SignInWithAccountKey) => Panel::SeedPhraseInput,
            (Panel::SubmitButton | Panel::SeedPhraseInput, WizardAction::CreateAccount) => {
                Panel::SetupAccountKey
            }
            (Panel::SetupAccountKey, WizardAction::KeepItSafe) => Panel::SeedPhraseGeneration,
            (Panel::SetupAccountKey | Panel::SeedPhraseGeneration, WizardAction::GoBack) => {
                Panel::SubmitButton
            }
            (Panel::SeedPhraseInput, WizardAction::SubmitSeedPhrase(secret))
            | (Panel::SeedPhraseGeneration, WizardAction::SubmitGeneratedPhrase(secret)) => {
                return match session.sign_in(secret) {
                    Ok(session) => Ok(Transition::SignedIn(session)),
                    Err(err) => {
                        tracing::warn!(panel = %from, error = %err, "sign-in rejected");
                        Err(err.into())
                    }
                };
            }
            _ => {
                return Err(WizardError::IllegalTransition {
                    from,
                    action: action.name(),
                });
            }
        };
        self.switch_to(to)?;
        Ok(Transition::Moved { from, to })
    }

    /// Whether the wizard is mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.store.is_mounted()
    }

    fn switch_to(&mut self, panel: Panel) -> Result<(), WizardError> {
        let entry = self.registry.lookup(panel.name())?;
        self.store.transition_to(entry)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SessionError, StoreError};

    #[derive(Default)]
    struct Recorder {
        secrets: Vec<String>,
        reject: bool,
    }

    impl SignIn for Recorder {
        fn sign_in(&mut self, secret: &str) -> Result<Session, SessionError> {
            if self.reject {
                return Err(SessionError::Rejected { reason: "test" });
            }
            self.secrets.push(secret.to_string());
            Ok(Session::new("token"))
        }
    }

    fn wizard() -> Result<WizardController<Panel>, WizardError> {
        WizardController::mount(lume_registry(|panel| panel), &IdentityConfig::default())
    }

    #[test]
    fn back_button_shows_only_while_creating_account() {
        for panel in Panel::ALL {
            let expected = matches!(panel, Panel::SetupAccountKey | Panel::SeedPhraseGeneration);
            assert_eq!(ViewFlags::for_panel(panel).should_show_back_button, expected);
        }
    }

    #[test]
    fn headings_follow_flags() {
        assert_eq!(
            ViewFlags::for_panel(Panel::SubmitButton).heading(),
            "Sign in with Lume"
        );
        assert_eq!(
            ViewFlags::for_panel(Panel::SeedPhraseInput).heading(),
            "Sign in with Lume"
        );
        assert_eq!(
            ViewFlags::for_panel(Panel::SetupAccountKey).heading(),
            "Set up your account key"
        );
        assert_eq!(
            ViewFlags::for_panel(Panel::SeedPhraseGeneration).heading(),
            "Here's your account key"
        );
    }

    #[test]
    fn footer_switches_between_create_and_back() {
        let entry = ViewFlags::for_panel(Panel::SubmitButton);
        assert_eq!(entry.footer_label(), "Create an Account");
        assert_eq!(entry.footer_action(), WizardAction::CreateAccount);
        assert!(entry.accent_footer());
        let setup = ViewFlags::for_panel(Panel::SetupAccountKey);
        assert_eq!(setup.footer_label(), "Go Back");
        assert_eq!(setup.footer_action(), WizardAction::GoBack);
        assert!(!setup.accent_footer());
        assert!(!ViewFlags::for_panel(Panel::SeedPhraseGeneration).show_divider());
    }

    #[test]
    fn click_through_with_flattened_back() -> Result<(), WizardError> {
        let mut wizard = wizard()?;
        let mut session = Recorder::default();
        assert_eq!(wizard.current()?, Panel::SubmitButton);

        wizard.dispatch(WizardAction::SignInWithAccountKey, &mut session)?;
        assert_eq!(wizard.current()?, Panel::SeedPhraseInput);
        assert!(!wizard.flags()?.should_show_back_button);

        let mut wizard = self::wizard()?;
        wizard.dispatch(WizardAction::CreateAccount, &mut session)?;
        assert_eq!(wizard.current()?, Panel::SetupAccountKey);
        assert!(wizard.flags()?.should_show_back_button);

        let step = wizard.dispatch(WizardAction::KeepItSafe, &mut session)?;
        assert_eq!(
            step,
            Transition::Moved {
                from: Panel::SetupAccountKey,
                to: Panel::SeedPhraseGeneration
            }
        );
        wizard.dispatch(WizardAction::GoBack, &mut session)?;
        assert_eq!(wizard.current()?, Panel::SubmitButton);
        Ok(())
    }

    #[test]
    fn illegal_actions_leave_state_unchanged() -> Result<(), WizardError> {
        let mut wizard = wizard()?;
        let mut session = Recorder::default();
        let err = wizard.dispatch(WizardAction::GoBack, &mut session).err();
        assert_eq!(
            err,
            Some(WizardError::IllegalTransition {
                from: Panel::SubmitButton,
                action: "go_back"
            })
        );
        let err = wizard
            .dispatch(WizardAction::SubmitSeedPhrase("w1".into()), &mut session)
            .err();
        assert!(matches!(err, Some(WizardError::IllegalTransition { .. })));
        assert!(session.secrets.is_empty());
        assert_eq!(wizard.current()?, Panel::SubmitButton);
        Ok(())
    }

    #[test]
    fn sign_in_from_input_panel_is_terminal() -> Result<(), WizardError> {
        let mut wizard = wizard()?;
        let mut session = Recorder::default();
        wizard.dispatch(WizardAction::SignInWithAccountKey, &mut session)?;
        let step = wizard.dispatch(
            WizardAction::SubmitSeedPhrase("w1 w2 w3".into()),
            &mut session,
        )?;
        assert_eq!(step, Transition::SignedIn(Session::new("token")));
        assert_eq!(session.secrets, ["w1 w2 w3"]);
        Ok(())
    }

    #[test]
    fn rejected_sign_in_keeps_input_panel() -> Result<(), WizardError> {
        let mut wizard = wizard()?;
        let mut session = Recorder {
            reject: true,
            ..Recorder::default()
        };
        wizard.dispatch(WizardAction::SignInWithAccountKey, &mut session)?;
        let err = wizard
            .dispatch(WizardAction::SubmitSeedPhrase(String::new()), &mut session)
            .err();
        assert!(matches!(err, Some(WizardError::SignIn(_))));
        assert_eq!(wizard.current()?, Panel::SeedPhraseInput);
        Ok(())
    }

    #[test]
    fn generation_panel_gets_configured_phrase_length() -> Result<(), WizardError> {
        let config = IdentityConfig {
            phrase_length: 24,
            initial_panel: Panel::SeedPhraseGeneration,
            ..IdentityConfig::default()
        };
        let wizard = WizardController::mount(lume_registry(|_| ()), &config)?;
        assert_eq!(
            wizard.props()?,
            PanelProps::SeedPhraseGeneration { phrase_length: 24 }
        );
        assert_eq!(wizard.props()?.panel(), Panel::SeedPhraseGeneration);
        Ok(())
    }

    #[test]
    fn unmounted_wizard_reports_not_initialized() -> Result<(), WizardError> {
        let mut wizard = wizard()?;
        wizard.unmount();
        assert!(!wizard.is_mounted());
        assert_eq!(
            wizard.current(),
            Err(WizardError::Store(StoreError::NotInitialized))
        );
        Ok(())
    }

    #[test]
    fn mount_requires_initial_panel_in_registry() {
        let registry: PanelRegistry<()> = PanelRegistry::new();
        assert!(matches!(
            WizardController::mount(registry, &IdentityConfig::default()),
            Err(WizardError::Panel(_))
        ));
    }

    #[test]
    fn registry_uses_explicit_ids() -> Result<(), crate::error::PanelError> {
        let registry = lume_registry(|_| ());
        assert_eq!(registry.len(), 4);
        for panel in Panel::ALL {
            assert_eq!(registry.lookup(panel.name())?.id(), &panel.id());
            assert_eq!(Panel::from_name(panel.name()), Some(panel));
        }
        Ok(())
    }
}

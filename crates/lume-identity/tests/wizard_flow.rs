use std::collections::BTreeSet;

use lume_identity::phrase::{DemoPhraseGenerator, PhraseGenerator, PhraseReveal};
use lume_identity::{
    IdentityConfig, MemoryStore, OpaqueTokenIssuer, Panel, PanelId, PanelProps, PanelRegistry,
    SessionStore, SwitchableStore, Transition, WizardAction, WizardController, WizardError,
    lume_registry,
};
use lume_test_support::fixtures::recovery_phrase;
use lume_test_support::logging::{count_warnings, init_test_logging};

fn session() -> SessionStore<MemoryStore> {
    SessionStore::restore(MemoryStore::new(), OpaqueTokenIssuer, "lume-session")
}

#[test]
fn full_click_through_signs_in_from_input_panel() -> anyhow::Result<()> {
    init_test_logging();
    let mut wizard = WizardController::mount(lume_registry(|p| p), &IdentityConfig::default())?;
    let mut session = session();

    assert_eq!(wizard.current()?, Panel::SubmitButton);
    wizard.dispatch(WizardAction::SignInWithAccountKey, &mut session)?;
    assert_eq!(wizard.current()?, Panel::SeedPhraseInput);
    assert!(!wizard.flags()?.should_show_back_button);

    let step = wizard.dispatch(
        WizardAction::SubmitSeedPhrase(recovery_phrase(12).secret()),
        &mut session,
    )?;
    assert!(matches!(step, Transition::SignedIn(_)));
    assert!(session.is_signed_in());
    Ok(())
}

#[test]
fn create_account_path_reveals_then_signs_in() -> anyhow::Result<()> {
    init_test_logging();
    let config = IdentityConfig::default();
    let mut wizard = WizardController::mount(lume_registry(|p| p), &config)?;
    let mut session = session();

    wizard.dispatch(WizardAction::CreateAccount, &mut session)?;
    assert!(wizard.flags()?.should_show_back_button);
    wizard.dispatch(WizardAction::KeepItSafe, &mut session)?;
    assert_eq!(wizard.flags()?.heading(), "Here's your account key");

    let PanelProps::SeedPhraseGeneration { phrase_length } = wizard.props()? else {
        anyhow::bail!("generation panel expected");
    };
    let mut reveal = PhraseReveal::new(DemoPhraseGenerator::new(7).generate(phrase_length));
    assert_eq!(reveal.phrase().len(), config.phrase_length);
    assert_eq!(reveal.confirm(), Err(WizardError::PhraseNotRevealed));
    reveal.continue_to_reveal();

    let step = wizard.dispatch(
        WizardAction::SubmitGeneratedPhrase(reveal.confirm()?),
        &mut session,
    )?;
    assert!(matches!(step, Transition::SignedIn(_)));
    Ok(())
}

#[test]
fn back_from_any_creation_step_lands_on_entry_panel() -> anyhow::Result<()> {
    let mut session = session();
    for start in [Panel::SetupAccountKey, Panel::SeedPhraseGeneration] {
        let config = IdentityConfig {
            initial_panel: start,
            ..IdentityConfig::default()
        };
        let mut wizard = WizardController::mount(lume_registry(|p| p), &config)?;
        let step = wizard.dispatch(WizardAction::GoBack, &mut session)?;
        assert_eq!(
            step,
            Transition::Moved {
                from: start,
                to: Panel::SubmitButton
            }
        );
        assert!(!wizard.flags()?.should_show_back_button);
    }
    Ok(())
}

#[test]
fn most_recent_transition_wins() -> anyhow::Result<()> {
    let registry = lume_registry(|p| p);
    let mut store = SwitchableStore::mounted(Panel::SubmitButton.id());
    store.transition_to(registry.lookup("SetupAccountKey")?)?;
    store.transition_to(registry.lookup("SeedPhraseInput")?)?;
    assert_eq!(store.current()?, &Panel::SeedPhraseInput.id());
    Ok(())
}

#[test]
fn explicit_and_generated_ids_are_pairwise_distinct() {
    let mut registry: PanelRegistry<()> = PanelRegistry::new();
    for panel in Panel::ALL {
        registry.register(panel.name(), (), Some(panel.id()));
    }
    registry.register("Anonymous", (), None);
    registry.register("AnotherAnonymous", (), None);
    registry.register("Custom", (), Some(PanelId::new("custom")));

    let ids: BTreeSet<PanelId> = registry.iter().map(|entry| entry.id().clone()).collect();
    assert_eq!(ids.len(), registry.len());
}

#[test]
fn repeated_mount_warns_and_keeps_current_panel() -> anyhow::Result<()> {
    let mut store = SwitchableStore::mounted(PanelId::from_static("a"));
    let (applied, warnings) = count_warnings(|| store.mount(PanelId::from_static("b")));
    assert!(!applied);
    assert_eq!(warnings, 1);
    assert_eq!(store.current()?, &PanelId::from_static("a"));

    store.unmount();
    let (applied, warnings) = count_warnings(|| store.mount(PanelId::from_static("b")));
    assert!(applied);
    assert_eq!(warnings, 0);
    Ok(())
}

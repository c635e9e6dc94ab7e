//! Enter/exit animation presets for the switchable container and the reveal step.
//!
//! # Design
//! - Motion reacts to a committed panel change; nothing here gates a transition.
//! - Presets are CSS class names plus a delay so the stylesheet owns the keyframes.

use lume_identity::phrase::RevealStep;
use lume_identity::wizard::Panel;

/// Class plus delay for one animated element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Motion {
    /// Animation class applied on mount.
    pub class: &'static str,
    /// Start delay in milliseconds.
    pub delay_ms: u32,
}

impl Motion {
    const fn new(class: &'static str, delay_ms: u32) -> Self {
        Self { class, delay_ms }
    }

    /// Inline style carrying the delay.
    #[must_use]
    pub fn style(&self) -> String {
        format!("animation-delay: {}ms;", self.delay_ms)
    }
}

/// Entry animation for a freshly mounted panel.
#[must_use]
pub const fn panel_enter(panel: Panel) -> Motion {
    match panel {
        Panel::SubmitButton => Motion::new("lume-fade-in", 0),
        Panel::SeedPhraseInput | Panel::SetupAccountKey => Motion::new("lume-slide-up", 100),
        Panel::SeedPhraseGeneration => Motion::new("lume-fade-in", 100),
    }
}

/// Dimming overlay behind the phrase once the warning is shown.
#[must_use]
pub const fn reveal_overlay(step: RevealStep) -> Option<Motion> {
    match step {
        RevealStep::Idle => None,
        RevealStep::Revealed => Some(Motion::new("lume-overlay-in", 0)),
    }
}

/// "Write this down" warning shown after "Continue".
#[must_use]
pub const fn reveal_warning(step: RevealStep) -> Option<Motion> {
    match step {
        RevealStep::Idle => None,
        RevealStep::Revealed => Some(Motion::new("lume-slide-up", 200)),
    }
}

/// Sign-in button on the generation panel; held back so the warning is read first.
#[must_use]
pub const fn reveal_sign_in(step: RevealStep) -> Option<Motion> {
    match step {
        RevealStep::Idle => None,
        RevealStep::Revealed => Some(Motion::new("lume-slide-down", 2_000)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_up_panels_enter_with_delay() {
        assert_eq!(panel_enter(Panel::SubmitButton).delay_ms, 0);
        assert_eq!(panel_enter(Panel::SeedPhraseInput).delay_ms, 100);
        assert_eq!(panel_enter(Panel::SetupAccountKey).class, "lume-slide-up");
    }

    #[test]
    fn reveal_elements_only_after_continue() {
        assert!(reveal_overlay(RevealStep::Idle).is_none());
        assert!(reveal_warning(RevealStep::Idle).is_none());
        assert_eq!(
            reveal_sign_in(RevealStep::Revealed).map(|m| m.style()),
            Some("animation-delay: 2000ms;".to_string())
        );
    }
}

//! Recovery-phrase generation and the local reveal step of the generation panel.
//!
//! # Design
//! - Generation is behind [`PhraseGenerator`]; the bundled generator is a placeholder
//!   that must be swapped for a real wordlist-backed source before issuing real keys.
//! - The reveal step is independent of the outer wizard state.

use crate::error::WizardError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

static DEMO_WORDS: [&str; 32] = [
    "amber", "anchor", "birch", "canyon", "cedar", "comet", "delta", "ember", "falcon", "fern",
    "glacier", "harbor", "island", "juniper", "kettle", "lantern", "meadow", "nectar", "orbit",
    "pebble", "quartz", "raven", "saddle", "spruce", "thistle", "tundra", "umber", "valley",
    "willow", "yarrow", "zephyr", "lumen",
];

/// Ordered recovery words.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecoveryPhrase {
    words: Vec<String>,
}

impl RecoveryPhrase {
    /// Wrap an ordered word list.
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Split a space-separated phrase, ignoring repeated whitespace.
    #[must_use]
    pub fn parse(phrase: &str) -> Self {
        Self {
            words: phrase.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Words in display order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the phrase has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Space-joined secret handed to sign-in and the clipboard.
    #[must_use]
    pub fn secret(&self) -> String {
        self.words.join(" ")
    }
}

/// Source of fresh recovery phrases.
pub trait PhraseGenerator {
    /// Produce a phrase of `length` words.
    fn generate(&self, length: usize) -> RecoveryPhrase;
}

/// Deterministic placeholder generator; the host picks the seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoPhraseGenerator {
    seed: u64,
}

impl DemoPhraseGenerator {
    /// Create a generator from `seed`.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl PhraseGenerator for DemoPhraseGenerator {
    fn generate(&self, length: usize) -> RecoveryPhrase {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let words = (0..length)
            .filter_map(|_| DEMO_WORDS.choose(&mut rng))
            .map(|word| (*word).to_string())
            .collect();
        RecoveryPhrase::new(words)
    }
}

/// Local sub-step of the generation panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// Words are shown; the user has not acknowledged the warning yet.
    Idle,
    /// The warning was acknowledged; sign-in is offered.
    Revealed,
}

/// Phrase shown by the generation panel plus its reveal step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseReveal {
    phrase: RecoveryPhrase,
    step: RevealStep,
}

impl PhraseReveal {
    /// Start in [`RevealStep::Idle`] with `phrase`.
    #[must_use]
    pub const fn new(phrase: RecoveryPhrase) -> Self {
        Self {
            phrase,
            step: RevealStep::Idle,
        }
    }

    /// Phrase being shown.
    #[must_use]
    pub const fn phrase(&self) -> &RecoveryPhrase {
        &self.phrase
    }

    /// Current sub-step.
    #[must_use]
    pub const fn step(&self) -> RevealStep {
        self.step
    }

    /// Handle the "Continue" click. Idempotent.
    pub fn continue_to_reveal(&mut self) {
        self.step = RevealStep::Revealed;
    }

    /// Whether the sign-in button is offered.
    #[must_use]
    pub const fn can_sign_in(&self) -> bool {
        matches!(self.step, RevealStep::Revealed)
    }

    /// Hand out the secret for sign-in.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::PhraseNotRevealed`] while still idle.
    pub fn confirm(&self) -> Result<String, WizardError> {
        if self.can_sign_in() {
            Ok(self.phrase.secret())
        } else {
            Err(WizardError::PhraseNotRevealed)
        }
    }
}

//! Class names and labels derived from wizard flags, copy state and network status.

use lume_identity::error::{SessionError, WizardError};
use lume_identity::feedback::CopyState;
use lume_identity::phrase::RecoveryPhrase;
use lume_identity::wizard::ViewFlags;
use lume_status::SyncState;

/// Colour of the "or" divider.
#[must_use]
pub const fn divider_class(flags: &ViewFlags) -> &'static str {
    if flags.accent_footer() {
        "lume-divider text-primary"
    } else {
        "lume-divider text-border"
    }
}

/// Variant of the footer button.
#[must_use]
pub const fn footer_button_class(flags: &ViewFlags) -> &'static str {
    if flags.accent_footer() {
        "btn btn-primary lume-footer"
    } else {
        "btn btn-outline lume-footer"
    }
}

/// Copy button classes; highlighted while the acknowledgement shows.
#[must_use]
pub const fn copy_button_class(state: CopyState) -> &'static str {
    match state {
        CopyState::Idle => "btn btn-outline lume-copy",
        CopyState::Clicked => "btn btn-outline lume-copy text-primary border-primary",
    }
}

/// Icon name next to the copy label.
#[must_use]
pub const fn copy_icon(state: CopyState) -> &'static str {
    match state {
        CopyState::Idle => "clipboard-copy",
        CopyState::Clicked => "check",
    }
}

/// One numbered word cell of the phrase grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseCell {
    /// 1-based position.
    pub position: usize,
    /// The word.
    pub word: String,
}

/// Numbered cells for `phrase`.
#[must_use]
pub fn phrase_cells(phrase: &RecoveryPhrase) -> Vec<PhraseCell> {
    phrase
        .words()
        .iter()
        .enumerate()
        .map(|(index, word)| PhraseCell {
            position: index + 1,
            word: word.clone(),
        })
        .collect()
}

/// Dashboard drawer title.
#[must_use]
pub fn connection_title(state: SyncState) -> String {
    let label = match state {
        SyncState::Done => "Connected",
        SyncState::Syncing => "Syncing",
        SyncState::Error => "Degraded",
    };
    format!("Syncing State: {label}")
}

/// User-facing message for a failed wizard action.
#[must_use]
pub const fn wizard_error_message(err: &WizardError) -> &'static str {
    match err {
        WizardError::SignIn(SessionError::EmptySecret) => "Enter your account key to sign in.",
        WizardError::SignIn(SessionError::Rejected { .. }) => {
            "That account key was not recognised."
        }
        WizardError::SignIn(SessionError::Storage(_)) => {
            "Your session could not be saved. Check your browser storage settings."
        }
        WizardError::PhraseNotRevealed => "Continue to reveal your account key first.",
        _ => "Something went wrong. Please reload and try again.",
    }
}

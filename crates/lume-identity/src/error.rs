//! Error types for the identity wizard and session store.

use thiserror::Error;

use crate::panel::PanelId;
use crate::wizard::Panel;

/// Failures raised by the panel registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// No panel was registered under the requested logical name.
    #[error("panel not registered")]
    NotFound {
        /// Logical name that was looked up.
        name: String,
    },
}

/// Failures raised by the switchable-component store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store was read or written outside of a mounted wizard scope.
    #[error("switchable store used outside of a mounted wizard")]
    NotInitialized,
}

/// Failures raised by a durable key-value backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend refused or failed the requested operation.
    #[error("storage operation failed")]
    Backend {
        /// Operation that failed (`get`, `set`, `remove`).
        operation: &'static str,
        /// Key the operation targeted.
        key: String,
        /// Backend-provided detail.
        detail: String,
    },
}

/// Failures raised by the session store and session issuers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The supplied secret was empty or whitespace.
    #[error("sign-in secret is empty")]
    EmptySecret,
    /// The issuer rejected the supplied secret.
    #[error("sign-in secret rejected")]
    Rejected {
        /// Machine-readable reason for the rejection.
        reason: &'static str,
    },
    /// Persisting or restoring the session failed.
    #[error("session storage failed")]
    Storage(#[from] StorageError),
}

/// Failures raised by the wizard controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// The underlying switchable store is not mounted.
    #[error("wizard store unavailable")]
    Store(#[from] StoreError),
    /// A registry lookup failed.
    #[error("wizard panel missing")]
    Panel(#[from] PanelError),
    /// The store holds an id that does not belong to the lume panel set.
    #[error("unknown panel id")]
    UnknownPanel {
        /// Identifier found in the store.
        id: PanelId,
    },
    /// The requested action is not legal from the current panel.
    #[error("illegal wizard transition")]
    IllegalTransition {
        /// Panel active when the action was dispatched.
        from: Panel,
        /// Name of the rejected action.
        action: &'static str,
    },
    /// The generated phrase was confirmed before it was revealed.
    #[error("recovery phrase not revealed yet")]
    PhraseNotRevealed,
    /// Sign-in was attempted and rejected.
    #[error("sign-in failed")]
    SignIn(#[from] SessionError),
}

/// Failures raised while loading or validating configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Field contained an invalid value.
    #[error("invalid configuration field")]
    InvalidField {
        /// Field that failed validation.
        field: &'static str,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// The configuration document could not be parsed.
    #[error("configuration document malformed")]
    Malformed {
        /// Parser detail.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_convert_into_session_errors() {
        let err = StorageError::Backend {
            operation: "set",
            key: "lume-session".into(),
            detail: "quota".into(),
        };
        let session: SessionError = err.clone().into();
        assert_eq!(session, SessionError::Storage(err));
    }

    #[test]
    fn wizard_errors_wrap_lower_layers() {
        let store: WizardError = StoreError::NotInitialized.into();
        assert!(matches!(store, WizardError::Store(StoreError::NotInitialized)));
        let sign_in: WizardError = SessionError::EmptySecret.into();
        assert_eq!(sign_in.to_string(), "sign-in failed");
    }
}

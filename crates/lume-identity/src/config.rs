//! Widget configuration with defaults and validation.
//!
//! # Design
//! - Every field has a default so an empty document is a valid configuration.
//! - Validation reports the first offending field with a machine-readable reason.

use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::wizard::Panel;

/// Storage key the session token is mirrored under.
pub const SESSION_STORAGE_KEY: &str = "lume-session";
/// Default number of words in a generated recovery phrase.
pub const DEFAULT_PHRASE_LENGTH: usize = 12;
/// Default lifetime of the "Copied!" acknowledgement in milliseconds.
pub const COPY_FEEDBACK_MS: u64 = 1_000;
/// Phrase lengths accepted by [`IdentityConfig::validate`].
pub const SUPPORTED_PHRASE_LENGTHS: [usize; 5] = [12, 15, 18, 21, 24];

/// Configuration for one identity widget.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    /// Key used in the durable store.
    pub session_key: String,
    /// Words per generated recovery phrase.
    pub phrase_length: usize,
    /// "Copied!" acknowledgement window in milliseconds.
    pub copy_feedback_ms: u64,
    /// Panel shown when the wizard mounts.
    pub initial_panel: Panel,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            session_key: SESSION_STORAGE_KEY.to_string(),
            phrase_length: DEFAULT_PHRASE_LENGTH,
            copy_feedback_ms: COPY_FEEDBACK_MS,
            initial_panel: Panel::SubmitButton,
        }
    }
}

impl IdentityConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] for unparsable documents and
    /// [`ConfigError::InvalidField`] for values that fail validation.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(document).map_err(|err| ConfigError::Malformed {
                detail: err.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.session_key.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                field: "session_key",
                value: Some(self.session_key.clone()),
                reason: "must not be empty",
            });
        }
        if !SUPPORTED_PHRASE_LENGTHS.contains(&self.phrase_length) {
            return Err(ConfigError::InvalidField {
                field: "phrase_length",
                value: Some(self.phrase_length.to_string()),
                reason: "unsupported phrase length",
            });
        }
        if self.copy_feedback_ms == 0 {
            return Err(ConfigError::InvalidField {
                field: "copy_feedback_ms",
                value: Some("0".to_string()),
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Acknowledgement window as a [`Duration`].
    #[must_use]
    pub const fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = IdentityConfig::default();
        assert_eq!(config.session_key, "lume-session");
        assert_eq!(config.phrase_length, 12);
        assert_eq!(config.copy_feedback(), Duration::from_secs(1));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn empty_document_yields_defaults() {
        assert_eq!(IdentityConfig::from_json("{}"), Ok(IdentityConfig::default()));
    }

    #[test]
    fn overrides_are_applied() {
        let config = IdentityConfig::from_json(
            r#"{"phrase_length": 24, "initial_panel": "setup_account_key"}"#,
        );
        let config = config.unwrap_or_default();
        assert_eq!(config.phrase_length, 24);
        assert_eq!(config.initial_panel, Panel::SetupAccountKey);
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = IdentityConfig::from_json(r#"{"phrase_length": 13}"#).err();
        assert!(matches!(
            err,
            Some(ConfigError::InvalidField {
                field: "phrase_length",
                ..
            })
        ));
        let err = IdentityConfig::from_json(r#"{"copy_feedback_ms": 0}"#).err();
        assert!(matches!(
            err,
            Some(ConfigError::InvalidField {
                field: "copy_feedback_ms",
                ..
            })
        ));
        let err = IdentityConfig::from_json(r#"{"session_key": " "}"#).err();
        assert!(matches!(
            err,
            Some(ConfigError::InvalidField {
                field: "session_key",
                ..
            })
        ));
    }

    #[test]
    fn unknown_fields_are_malformed() {
        assert!(matches!(
            IdentityConfig::from_json(r#"{"theme": "dark"}"#),
            Err(ConfigError::Malformed { .. })
        ));
    }
}

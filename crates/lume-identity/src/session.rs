//! Session state with write-through persistence to a key-value store.
//!
//! # Design
//! - The in-memory session and the persisted value never diverge: storage is written
//!   first and memory is only updated once the write succeeded.
//! - Token derivation is delegated to a [`SessionIssuer`]; this module never inspects
//!   the secret beyond handing it over.
//! - Secrets and tokens are never logged.

use std::fmt;

use uuid::Uuid;

use crate::error::SessionError;
use crate::storage::KeyValueStore;

/// Authenticated session token.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// Wrap an issued token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Opaque token value.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").finish()
    }
}

/// Turns a recovery secret into a session.
pub trait SessionIssuer {
    /// Validate `secret` and issue a session for it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the secret is rejected.
    fn issue(&self, secret: &str) -> Result<Session, SessionError>;
}

/// Issues random opaque tokens for any non-blank secret.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpaqueTokenIssuer;

impl SessionIssuer for OpaqueTokenIssuer {
    fn issue(&self, secret: &str) -> Result<Session, SessionError> {
        if secret.trim().is_empty() {
            return Err(SessionError::EmptySecret);
        }
        Ok(Session::new(Uuid::new_v4().to_string()))
    }
}

/// Narrow sign-in capability handed to the wizard.
pub trait SignIn {
    /// Sign in with a space-joined recovery phrase.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the secret is rejected or cannot be persisted.
    fn sign_in(&mut self, secret: &str) -> Result<Session, SessionError>;
}

/// Owns the session and mirrors it into a durable store under a fixed key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionStore<S, I = OpaqueTokenIssuer> {
    storage: S,
    issuer: I,
    key: String,
    session: Option<Session>,
}

impl<S: KeyValueStore, I: SessionIssuer> SessionStore<S, I> {
    /// Build the store and restore any session persisted under `key`.
    ///
    /// Unreadable or empty values start the store signed out. A blank value is also
    /// removed so the key is absent whenever no session is active.
    pub fn restore(mut storage: S, issuer: I, key: impl Into<String>) -> Self {
        let key = key.into();
        let session = match storage.get(&key) {
            Ok(Some(token)) if !token.trim().is_empty() => Some(Session::new(token)),
            Ok(Some(_)) => {
                if let Err(err) = storage.remove(&key) {
                    tracing::warn!(key = %key, error = %err, "blank session removal failed");
                }
                None
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "session restore failed");
                None
            }
        };
        tracing::debug!(key = %key, restored = session.is_some(), "session store initialised");
        Self {
            storage,
            issuer,
            key,
            session,
        }
    }

    /// Derive a session from `secret`, persist it, then make it current.
    ///
    /// Signing in while signed in replaces the previous session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the issuer rejects the secret or the write fails;
    /// the previous session is kept in both cases.
    pub fn sign_in(&mut self, secret: &str) -> Result<&Session, SessionError> {
        let session = self.issuer.issue(secret)?;
        if let Err(err) = self.storage.set(&self.key, session.token()) {
            tracing::warn!(key = %self.key, error = %err, "session persist failed");
            return Err(err.into());
        }
        tracing::info!(key = %self.key, replaced = self.session.is_some(), "signed in");
        Ok(&*self.session.insert(session))
    }

    /// Clear the session and its persisted copy. Signing out twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Storage`] when the persisted copy cannot be removed;
    /// the session stays active in that case.
    pub fn sign_out(&mut self) -> Result<(), SessionError> {
        if self.session.is_none() {
            return Ok(());
        }
        if let Err(err) = self.storage.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %err, "session removal failed");
            return Err(err.into());
        }
        self.session = None;
        tracing::info!(key = %self.key, "signed out");
        Ok(())
    }
}

impl<S, I> SessionStore<S, I> {
    /// Whether a session is active.
    #[must_use]
    pub const fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Backing store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Release the backing store, e.g. to re-open it as after a reload.
    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }
}

impl<S: KeyValueStore, I: SessionIssuer> SignIn for SessionStore<S, I> {
    fn sign_in(&mut self, secret: &str) -> Result<Session, SessionError> {
        Self::sign_in(self, secret).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const KEY: &str = "lume-session";

    fn phrase() -> String {
        (1..=12).map(|n| format!("w{n}")).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn sign_in_persists_token_under_key() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = SessionStore::restore(MemoryStore::new(), OpaqueTokenIssuer, KEY);
        assert!(!store.is_signed_in());
        let token = store.sign_in(&phrase())?.token().to_string();
        assert!(store.is_signed_in());
        assert_eq!(store.storage().get(KEY)?.as_deref(), Some(token.as_str()));
        Ok(())
    }

    #[test]
    fn reload_restores_session_state() -> Result<(), Box<dyn std::error::Error>> {
        let mut store = SessionStore::restore(MemoryStore::new(), OpaqueTokenIssuer, KEY);
        store.sign_in(&phrase())?;
        let mut reloaded = SessionStore::restore(store.into_storage(), OpaqueTokenIssuer, KEY);
        assert!(reloaded.is_signed_in());

        reloaded.sign_out()?;
        let reloaded = SessionStore::restore(reloaded.into_storage(), OpaqueTokenIssuer, KEY);
        assert!(!reloaded.is_signed_in());
        assert_eq!(reloaded.storage().get(KEY)?, None);
        Ok(())
    }

    #[test]
    fn blank_secret_is_rejected_without_side_effects() {
        let mut store = SessionStore::restore(MemoryStore::new(), OpaqueTokenIssuer, KEY);
        assert_eq!(store.sign_in("   ").err(), Some(SessionError::EmptySecret));
        assert!(!store.is_signed_in());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn double_sign_in_overwrites_and_double_sign_out_is_noop()
    -> Result<(), Box<dyn std::error::Error>> {
        let mut store = SessionStore::restore(MemoryStore::new(), OpaqueTokenIssuer, KEY);
        let first = store.sign_in(&phrase())?.clone();
        let second = store.sign_in(&phrase())?.clone();
        assert_ne!(first, second);
        assert_eq!(store.storage().get(KEY)?.as_deref(), Some(second.token()));

        store.sign_out()?;
        store.sign_out()?;
        assert!(!store.is_signed_in());
        Ok(())
    }

    #[test]
    fn empty_persisted_value_means_signed_out() {
        let storage: MemoryStore = [(KEY, "  ")].into_iter().collect();
        let store = SessionStore::restore(storage, OpaqueTokenIssuer, KEY);
        assert!(!store.is_signed_in());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn debug_output_redacts_token() {
        let rendered = format!("{:?}", Session::new("secret-token"));
        assert!(!rendered.contains("secret-token"));
    }
}

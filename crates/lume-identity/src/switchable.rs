//! Per-wizard store tracking which panel is visible.
//!
//! # Design
//! - One store per mounted wizard; nothing here is process-global.
//! - The store performs no legality checks; the controller owns the transition table.
//! - The initial panel is applied once at mount. Re-mounting an active store keeps
//!   the user's progress.

use crate::error::StoreError;
use crate::panel::{PanelEntry, PanelId};

/// State owned by a mounted store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WizardState {
    /// Identity of the visible panel.
    pub current_panel: PanelId,
}

/// Holds the visible panel for exactly one wizard instance.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SwitchableStore {
    state: Option<WizardState>,
}

impl SwitchableStore {
    /// Create a store with no active scope.
    #[must_use]
    pub const fn new() -> Self {
        Self { state: None }
    }

    /// Create a store already mounted on `initial`.
    #[must_use]
    pub const fn mounted(initial: PanelId) -> Self {
        Self {
            state: Some(WizardState {
                current_panel: initial,
            }),
        }
    }

    /// Open the scope with `initial` as the visible panel.
    ///
    /// Returns `false` and leaves the current panel untouched when already mounted.
    pub fn mount(&mut self, initial: PanelId) -> bool {
        if let Some(state) = &self.state {
            tracing::warn!(
                current = %state.current_panel,
                ignored = %initial,
                "initial panel already applied"
            );
            return false;
        }
        self.state = Some(WizardState {
            current_panel: initial,
        });
        true
    }

    /// Close the scope and discard the wizard state.
    pub fn unmount(&mut self) {
        self.state = None;
    }

    /// Whether a wizard scope is active.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.state.is_some()
    }

    /// Identity of the visible panel.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotInitialized`] outside of a mounted scope.
    pub fn current(&self) -> Result<&PanelId, StoreError> {
        self.state
            .as_ref()
            .map(|state| &state.current_panel)
            .ok_or(StoreError::NotInitialized)
    }

    /// Make `panel` the visible panel. Any entry is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotInitialized`] outside of a mounted scope.
    pub fn transition_to<R>(&mut self, panel: &PanelEntry<R>) -> Result<(), StoreError> {
        let state = self.state.as_mut().ok_or(StoreError::NotInitialized)?;
        tracing::debug!(from = %state.current_panel, to = %panel.id(), "panel transition");
        state.current_panel = panel.id().clone();
        Ok(())
    }
}

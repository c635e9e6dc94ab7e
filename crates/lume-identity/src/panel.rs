//! Panel identities and the registry that maps logical names to renderable panels.
//!
//! # Design
//! - Identity is a value, never the render function: two entries are the same panel
//!   only when their [`PanelId`]s compare equal.
//! - Generated ids live in their own namespace (label + process-wide sequence), so they
//!   cannot collide with explicit ids or with each other.
//! - The registry is generic over the host's render type so the core stays DOM-free.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::PanelError;

static NEXT_GENERATED_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity token for one panel variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(Repr);

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
enum Repr {
    Explicit(Cow<'static, str>),
    Generated { label: String, seq: u64 },
}

impl PanelId {
    /// Build an explicit id from a caller-chosen token.
    #[must_use]
    pub fn new(token: impl Into<Cow<'static, str>>) -> Self {
        Self(Repr::Explicit(token.into()))
    }

    /// Build an explicit id from a static token, usable in `const` contexts.
    #[must_use]
    pub const fn from_static(token: &'static str) -> Self {
        Self(Repr::Explicit(Cow::Borrowed(token)))
    }

    /// Mint a fresh id derived from `label`. Never equal to any other id.
    #[must_use]
    pub fn generate(label: &str) -> Self {
        let seq = NEXT_GENERATED_ID.fetch_add(1, Ordering::Relaxed);
        Self(Repr::Generated {
            label: label.to_string(),
            seq,
        })
    }

    /// Whether this id was minted by [`PanelId::generate`].
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self.0, Repr::Generated { .. })
    }

    /// The explicit token, when this id was supplied by the caller.
    #[must_use]
    pub fn explicit(&self) -> Option<&str> {
        match &self.0 {
            Repr::Explicit(token) => Some(token),
            Repr::Generated { .. } => None,
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Explicit(token) => f.write_str(token),
            Repr::Generated { label, seq } => write!(f, "@{label}#{seq}"),
        }
    }
}

/// A registered panel: its logical name, identity and render function.
#[derive(Clone, Debug)]
pub struct PanelEntry<R> {
    name: String,
    id: PanelId,
    render: R,
}

impl<R> PanelEntry<R> {
    /// Logical name the entry was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identity token of the entry.
    #[must_use]
    pub const fn id(&self) -> &PanelId {
        &self.id
    }

    /// Render function supplied by the host UI.
    #[must_use]
    pub const fn render(&self) -> &R {
        &self.render
    }
}

/// Mapping from logical panel name to [`PanelEntry`].
#[derive(Clone, Debug)]
pub struct PanelRegistry<R> {
    entries: BTreeMap<String, PanelEntry<R>>,
}

impl<R> Default for PanelRegistry<R> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<R> PanelRegistry<R> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `render` under `name`, minting an id from the name when `id` is `None`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        render: R,
        id: Option<PanelId>,
    ) -> &PanelEntry<R> {
        let name = name.into();
        let id = id.unwrap_or_else(|| PanelId::generate(&name));
        let entry = PanelEntry {
            name: name.clone(),
            id,
            render,
        };
        if let Some(previous) = self.entries.insert(name.clone(), entry) {
            tracing::warn!(panel = %name, replaced = %previous.id, "panel re-registered");
        }
        &self.entries[&name]
    }

    /// Look up an entry by logical name.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::NotFound`] when nothing was registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&PanelEntry<R>, PanelError> {
        self.entries.get(name).ok_or_else(|| PanelError::NotFound {
            name: name.to_string(),
        })
    }

    /// Find the entry carrying `id`, if any.
    #[must_use]
    pub fn find_by_id(&self, id: &PanelId) -> Option<&PanelEntry<R>> {
        self.entries.values().find(|entry| entry.id == *id)
    }

    /// Number of registered panels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries ordered by logical name.
    pub fn iter(&self) -> impl Iterator<Item = &PanelEntry<R>> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_pairwise_distinct() {
        let mut registry = PanelRegistry::new();
        registry.register("Alpha", (), None);
        registry.register("Beta", (), None);
        registry.register("Alpha2", (), None);
        let ids: Vec<_> = registry.iter().map(|entry| entry.id().clone()).collect();
        for (i, left) in ids.iter().enumerate() {
            for right in &ids[i + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn generated_ids_never_match_explicit_tokens() {
        let generated = PanelId::generate("submit-button");
        assert_ne!(generated, PanelId::new("submit-button"));
        assert_ne!(PanelId::new(generated.to_string()), generated);
        assert!(generated.is_generated());
        assert_eq!(generated.explicit(), None);
    }

    #[test]
    fn same_label_generates_different_ids() {
        assert_ne!(PanelId::generate("Panel"), PanelId::generate("Panel"));
    }

    #[test]
    fn lookup_reports_missing_names() {
        let registry: PanelRegistry<()> = PanelRegistry::new();
        assert_eq!(
            registry.lookup("SubmitButton").err(),
            Some(PanelError::NotFound {
                name: "SubmitButton".into()
            })
        );
    }

    #[test]
    fn explicit_ids_are_kept_and_findable() {
        let mut registry = PanelRegistry::new();
        let id = registry
            .register("SubmitButton", 7_u8, Some(PanelId::from_static("submit-button")))
            .id()
            .clone();
        assert_eq!(id.explicit(), Some("submit-button"));
        let entry = registry.find_by_id(&id).map(PanelEntry::name);
        assert_eq!(entry, Some("SubmitButton"));
        assert_eq!(registry.lookup("SubmitButton").map(|e| *e.render()), Ok(7));
    }

    #[test]
    fn re_registration_replaces_entry() {
        let mut registry = PanelRegistry::new();
        registry.register("Panel", 1_u8, None);
        registry.register("Panel", 2_u8, None);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.lookup("Panel").map(|e| *e.render()), Ok(2));
    }
}

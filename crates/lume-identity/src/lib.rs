#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! DOM-free core of the Lume identity widget.
//!
//! Layout: panel.rs (ids + registry), switchable.rs (visible-panel store),
//! wizard.rs (transition table + view flags), session.rs (write-through session),
//! storage.rs (key-value seam), phrase.rs (recovery phrase + reveal step),
//! feedback.rs (copy acknowledgement), config.rs (widget configuration).

pub mod config;
pub mod error;
pub mod feedback;
pub mod panel;
pub mod phrase;
pub mod session;
pub mod storage;
pub mod switchable;
pub mod wizard;

pub use config::IdentityConfig;
pub use error::{
    ConfigError, PanelError, SessionError, StorageError, StoreError, WizardError,
};
pub use panel::{PanelEntry, PanelId, PanelRegistry};
pub use session::{OpaqueTokenIssuer, Session, SessionIssuer, SessionStore, SignIn};
pub use storage::{KeyValueStore, MemoryStore};
pub use switchable::{SwitchableStore, WizardState};
pub use wizard::{
    Panel, PanelProps, Transition, ViewFlags, WizardAction, WizardController, lume_registry,
};

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
//! Network status model behind the Lume dashboard drawer.

pub mod network;
pub mod progress;

pub use network::{
    ChainKind, ChainStatus, NetworkStatus, ResolverMode, StaticStatusSource, StatusSource,
    SyncState,
};
pub use progress::{ProgressRing, RING_CIRCUMFERENCE, Tone};

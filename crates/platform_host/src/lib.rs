//! Typed host-domain contracts and shared models used by the site runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the session-history
//! contract, location snapshots, an in-memory history host for native builds and tests, base-path
//! normalization and time helpers, while the concrete browser adapter lives in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod base_path;
pub mod history;
pub mod host;
pub mod time;

pub use base_path::{normalize_base_path, BasePathError};
pub use history::location::LocationSnapshot;
pub use history::memory::MemoryHistory;
pub use history::service::{HistoryHost, ListenerId, NavigationListener};
pub use host::{HostServices, HostStrategy};
pub use time::{current_year, NATIVE_FALLBACK_YEAR};

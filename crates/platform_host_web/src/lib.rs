//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for session history. Bridge
//! bindings live under `bridge/`, with `bridge::interop` holding the shared wasm/non-wasm
//! transport glue.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod history;

pub use adapters::{
    build_host_services, history_host, host_strategy_name, selected_host_strategy,
    HistoryHostAdapter,
};
pub use history::WebHistory;

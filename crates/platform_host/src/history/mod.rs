//! Session-history contracts shared by the browser adapter and the in-memory host.

pub mod location;
pub mod memory;
pub mod service;

//! Shared host-bundle model for browser and native runtime composition.

use std::rc::Rc;

use crate::HistoryHost;

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`window.history`).
    Browser,
    /// In-memory composition used by native builds and tests.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
        }
    }
}

/// Runtime-selected host service bundle injected into the site runtime.
///
/// Environment-specific selection happens before this bundle crosses into `site_runtime`, which
/// keeps navigation logic decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Address bar and session-history collaborator.
    pub history: Rc<dyn HistoryHost>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundles a history host with its strategy tag.
    pub fn new(history: Rc<dyn HistoryHost>, host_strategy: HostStrategy) -> Self {
        Self {
            history,
            host_strategy,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

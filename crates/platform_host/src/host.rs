//! Shared host-bundle model for runtime composition.

use std::rc::Rc;

use crate::{DownloadService, HostConfig, ListingService};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Native build with inert adapters (tests, tooling).
    Native,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Native => "native",
        }
    }
}

/// Runtime-selected host service bundle injected into the file-manager runtime.
///
/// All environment-specific selection happens before this bundle crosses into
/// `file_manager_runtime`, which keeps the runtime decoupled from browser adapter details.
#[derive(Clone)]
pub struct HostServices {
    /// Resolved startup configuration.
    pub config: HostConfig,
    /// Remote listing service.
    pub listing: Rc<dyn ListingService>,
    /// Browser download service.
    pub downloads: Rc<dyn DownloadService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Assembles a bundle from explicit services.
    pub fn new(
        config: HostConfig,
        listing: Rc<dyn ListingService>,
        downloads: Rc<dyn DownloadService>,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            config,
            listing,
            downloads,
            host_strategy,
        }
    }
}

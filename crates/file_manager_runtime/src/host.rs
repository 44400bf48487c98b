//! Host-side execution of reducer effects.
//!
//! The reducer stays pure; everything that touches the network, the browser, the router, or the
//! notice center happens here against the injected [`HostServices`] bundle.

use std::{cell::Cell, rc::Rc};

use leptos::{logging, spawn_local};
use platform_host::HostServices;

use crate::{
    listing::load_listing,
    notices::NoticeCenter,
    reducer::{DashboardAction, DashboardEffect},
    runtime_context::DashboardRuntimeContext,
};

/// Client-side navigation hook captured from the router when the provider mounts.
pub type Navigator = Rc<dyn Fn(&str)>;

#[derive(Clone)]
/// Host service bundle plus mount-scoped handles for dashboard side effects.
pub struct DashboardHostContext {
    services: HostServices,
    notices: NoticeCenter,
    navigator: Navigator,
    mounted: Rc<Cell<bool>>,
}

impl DashboardHostContext {
    /// Creates a host context for one mounted dashboard.
    pub fn new(services: HostServices, notices: NoticeCenter, navigator: Navigator) -> Self {
        Self {
            services,
            notices,
            navigator,
            mounted: Rc::new(Cell::new(true)),
        }
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.services.host_strategy.as_str()
    }

    /// Marks the dashboard as unmounted so late async completions are dropped.
    pub fn unmount_guard(&self) -> impl FnOnce() + 'static {
        let mounted = self.mounted.clone();
        move || mounted.set(false)
    }

    /// Executes a single [`DashboardEffect`] emitted by the reducer.
    pub fn run_effect(&self, runtime: DashboardRuntimeContext, effect: DashboardEffect) {
        match effect {
            DashboardEffect::FetchListing { generation } => self.fetch_listing(runtime, generation),
            DashboardEffect::Notify(notice) => self.notices.notify(notice),
            DashboardEffect::TriggerDownload { url, file_name } => {
                self.trigger_download(url, file_name)
            }
            DashboardEffect::Navigate(path) => (self.navigator)(&path),
        }
    }

    fn fetch_listing(&self, runtime: DashboardRuntimeContext, generation: u64) {
        let listing = self.services.listing.clone();
        let config = self.services.config.clone();
        let mounted = self.mounted.clone();
        spawn_local(async move {
            let result = load_listing(listing.as_ref(), &config).await;
            if !mounted.get() {
                logging::log!("dropping listing generation {generation}: dashboard unmounted");
                return;
            }
            if let Err(err) = &result {
                logging::warn!("listing fetch from {} failed: {err}", config.listing_url());
            }
            runtime.dispatch_action(DashboardAction::ListingFetched { generation, result });
        });
    }

    fn trigger_download(&self, url: String, file_name: String) {
        let downloads = self.services.downloads.clone();
        spawn_local(async move {
            if let Err(err) = downloads.trigger_download(&url, &file_name).await {
                logging::warn!("download of {file_name} failed: {err}");
            }
        });
    }
}

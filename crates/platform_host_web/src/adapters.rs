use std::rc::Rc;

use platform_host::{
    DownloadFuture, DownloadService, HostConfig, HostServices, HostStrategy, ListingError,
    ListingFuture, ListingResponse, ListingService, NoopDownloadService, NoopListingService,
};

use crate::{WebDownloadService, WebListingService};

/// Returns the host strategy selected for the active compilation target.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Native
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete listing backend behind [`ListingService`].
#[derive(Debug, Clone, Copy)]
pub enum ListingServiceAdapter {
    /// Browser `fetch`-backed listing.
    Browser(WebListingService),
    /// Inert listing used off-browser.
    Native(NoopListingService),
}

impl ListingService for ListingServiceAdapter {
    fn fetch_listing<'a>(
        &'a self,
        url: &'a str,
    ) -> ListingFuture<'a, Result<ListingResponse, ListingError>> {
        match self {
            Self::Browser(service) => service.fetch_listing(url),
            Self::Native(service) => service.fetch_listing(url),
        }
    }
}

/// Adapter enum that erases the concrete download backend behind [`DownloadService`].
#[derive(Debug, Clone, Copy)]
pub enum DownloadServiceAdapter {
    /// Anchor-element download.
    Browser(WebDownloadService),
    /// Inert download used off-browser.
    Native(NoopDownloadService),
}

impl DownloadService for DownloadServiceAdapter {
    fn trigger_download<'a>(
        &'a self,
        url: &'a str,
        file_name: &'a str,
    ) -> DownloadFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.trigger_download(url, file_name),
            Self::Native(service) => service.trigger_download(url, file_name),
        }
    }
}

/// Builds the listing service for the selected host strategy.
pub fn listing_service() -> ListingServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => ListingServiceAdapter::Browser(WebListingService),
        HostStrategy::Native => ListingServiceAdapter::Native(NoopListingService),
    }
}

/// Builds the download service for the selected host strategy.
pub fn download_service() -> DownloadServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => DownloadServiceAdapter::Browser(WebDownloadService),
        HostStrategy::Native => DownloadServiceAdapter::Native(NoopDownloadService),
    }
}

/// Assembles the full host bundle for the entry layer.
pub fn build_host_services(config: HostConfig) -> HostServices {
    HostServices::new(
        config,
        Rc::new(listing_service()),
        Rc::new(download_service()),
        selected_host_strategy(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn native_builds_select_inert_adapters() {
        assert_eq!(selected_host_strategy(), HostStrategy::Native);
        assert_eq!(host_strategy_name(), "native");
        assert!(matches!(listing_service(), ListingServiceAdapter::Native(_)));
        assert!(matches!(download_service(), DownloadServiceAdapter::Native(_)));
    }

    #[test]
    fn build_host_services_carries_config() {
        let config = HostConfig::new("https://files.example.test").expect("config");
        let services = build_host_services(config.clone());
        assert_eq!(services.config, config);
        assert_eq!(services.host_strategy, HostStrategy::Native);
    }
}

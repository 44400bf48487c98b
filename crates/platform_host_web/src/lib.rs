//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the remote listing, browser
//! downloads, and startup configuration. Bridge bindings keep the wasm/non-wasm split under
//! `bridge::interop` so native builds and tests compile against inert fallbacks.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
mod bridge;
pub mod config;
pub mod download;
pub mod listing;

pub use adapters::{
    build_host_services, download_service, host_strategy_name, listing_service,
    selected_host_strategy, DownloadServiceAdapter, ListingServiceAdapter,
};
pub use config::{load_host_config, API_BASE_META_NAME};
pub use download::WebDownloadService;
pub use listing::WebListingService;

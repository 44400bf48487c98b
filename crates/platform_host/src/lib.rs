//! Typed host-domain contracts and shared models used across the file-manager runtime and browser
//! adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the listing wire models,
//! startup configuration, and object-safe service traits while concrete browser adapters live in
//! `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod download;
pub mod host;
pub mod listing;

pub use config::{ConfigError, HostConfig, DEFAULT_API_BASE_URL, UPLOADS_SEGMENT};
pub use download::{DownloadFuture, DownloadService, MemoryDownloadService, NoopDownloadService};
pub use host::{HostServices, HostStrategy};
pub use listing::service::{ListingFuture, ListingService, MemoryListingService, NoopListingService};
pub use listing::types::{
    ListingError, ListingItem, ListingKind, ListingRecord, ListingResponse,
    DEFAULT_LISTING_FAILURE_MESSAGE,
};

//! Remote listing wire models and service contracts.

pub mod service;
pub mod types;

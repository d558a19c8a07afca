//! `shopfront-loader`
//!
//! **Responsibility:** getting the catalog into the storefront.
//!
//! This crate provides:
//! - Catalog sources (HTTP in the browser and natively, local files natively)
//! - A mount-generation guard so loads finishing after teardown are ignored
//! - The fetch-on-mount flow with a single failure notification
//! - Settings loading (catalog location, filter tags)

pub mod config;
pub mod error;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
pub mod http;
pub mod lifecycle;
pub mod loader;
pub mod source;

pub use config::Settings;
pub use error::{ConfigError, LoadError};
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileCatalogSource;
pub use http::HttpCatalogSource;
pub use lifecycle::{LoadTicket, MountGeneration};
pub use loader::{CatalogLoader, FailureNotifier, LoadCompletion};
pub use source::{CatalogLocation, CatalogSource, ResolvedSource, resolve_source};

/// URL type used for catalog locations.
pub use reqwest::Url;

//! Where the catalog comes from.

use std::future::Future;
use std::path::PathBuf;

use reqwest::Url;
use shopfront_catalog::Product;

use crate::error::LoadError;
#[cfg(not(target_arch = "wasm32"))]
use crate::file::FileCatalogSource;
use crate::http::HttpCatalogSource;

/// A one-shot provider of the product list.
pub trait CatalogSource {
    /// Human-readable location, used in logs.
    fn describe(&self) -> String;

    /// Read and decode the full catalog.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Product>, LoadError>>;
}

/// A resolved catalog location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogLocation {
    Url(Url),
    File(PathBuf),
}

/// Resolve a configured source string.
///
/// Absolute `http(s)` URLs are used as they are. Anything else is a relative
/// reference: joined onto `base` when there is one (the page URL in the
/// browser), otherwise treated as a local file path.
pub fn resolve_source(raw: &str, base: Option<&Url>) -> Result<CatalogLocation, LoadError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LoadError::InvalidSource {
            source_ref: raw.to_string(),
            message: "catalog source is empty".to_string(),
        });
    }

    if let Ok(url) = Url::parse(raw) {
        return match url.scheme() {
            "http" | "https" => Ok(CatalogLocation::Url(url)),
            other => Err(LoadError::InvalidSource {
                source_ref: raw.to_string(),
                message: format!("unsupported scheme {other:?}"),
            }),
        };
    }

    match base {
        Some(base) => base
            .join(raw)
            .map(CatalogLocation::Url)
            .map_err(|e| LoadError::InvalidSource {
                source_ref: raw.to_string(),
                message: e.to_string(),
            }),
        None => Ok(CatalogLocation::File(PathBuf::from(raw))),
    }
}

/// Source chosen at runtime from a [`CatalogLocation`].
#[derive(Debug, Clone)]
pub enum ResolvedSource {
    Http(HttpCatalogSource),
    #[cfg(not(target_arch = "wasm32"))]
    File(FileCatalogSource),
}

impl ResolvedSource {
    pub fn from_location(location: CatalogLocation) -> Result<Self, LoadError> {
        match location {
            CatalogLocation::Url(url) => Ok(Self::Http(HttpCatalogSource::new(url))),
            #[cfg(not(target_arch = "wasm32"))]
            CatalogLocation::File(path) => Ok(Self::File(FileCatalogSource::new(path))),
            #[cfg(target_arch = "wasm32")]
            CatalogLocation::File(path) => Err(LoadError::InvalidSource {
                source_ref: path.display().to_string(),
                message: "file sources are not available in the browser".to_string(),
            }),
        }
    }
}

impl CatalogSource for ResolvedSource {
    fn describe(&self) -> String {
        match self {
            Self::Http(source) => source.describe(),
            #[cfg(not(target_arch = "wasm32"))]
            Self::File(source) => source.describe(),
        }
    }

    async fn fetch(&self) -> Result<Vec<Product>, LoadError> {
        match self {
            Self::Http(source) => source.fetch().await,
            #[cfg(not(target_arch = "wasm32"))]
            Self::File(source) => source.fetch().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_http_url_is_kept() {
        let location = resolve_source("https://shop.example/products.json", None).unwrap();
        assert_eq!(
            location,
            CatalogLocation::Url(Url::parse("https://shop.example/products.json").unwrap())
        );
    }

    #[test]
    fn relative_path_joins_page_url() {
        let base = Url::parse("https://shop.example/store/index.html").unwrap();
        let location = resolve_source("products.json", Some(&base)).unwrap();
        assert_eq!(
            location,
            CatalogLocation::Url(Url::parse("https://shop.example/store/products.json").unwrap())
        );
    }

    #[test]
    fn relative_path_without_base_is_a_file() {
        let location = resolve_source("fixtures/products.json", None).unwrap();
        assert_eq!(
            location,
            CatalogLocation::File(PathBuf::from("fixtures/products.json"))
        );
    }

    #[test]
    fn rejects_empty_and_foreign_schemes() {
        assert!(matches!(
            resolve_source("  ", None),
            Err(LoadError::InvalidSource { .. })
        ));
        assert!(matches!(
            resolve_source("ftp://shop.example/products.json", None),
            Err(LoadError::InvalidSource { .. })
        ));
    }
}

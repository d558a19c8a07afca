//! Catalog from a local JSON file (native only).

use std::path::PathBuf;

use shopfront_catalog::{Product, parse_catalog};

use crate::error::LoadError;
use crate::source::CatalogSource;

#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Product>, LoadError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| LoadError::Io {
                path: self.describe(),
                message: e.to_string(),
            })?;

        parse_catalog(&body).map_err(|e| LoadError::Parse(e.to_string()))
    }
}

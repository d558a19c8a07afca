//! Catalog over HTTP (works natively and in the browser).

use reqwest::Url;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use shopfront_catalog::{Product, parse_catalog};

use crate::error::LoadError;
use crate::source::CatalogSource;

/// GETs a JSON product array from a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: Url,
}

impl HttpCatalogSource {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub fn with_client(client: reqwest::Client, url: Url) -> Self {
        Self { client, url }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl CatalogSource for HttpCatalogSource {
    fn describe(&self) -> String {
        self.url.to_string()
    }

    async fn fetch(&self) -> Result<Vec<Product>, LoadError> {
        let resp = self
            .client
            .get(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(LoadError::Status {
                status: resp.status().as_u16(),
            });
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        parse_catalog(&body).map_err(|e| LoadError::Parse(e.to_string()))
    }
}

//! The fetch-on-mount flow: load once, guard against teardown, notify on failure.

use shopfront_catalog::{Product, StorefrontCommand};

use crate::error::LoadError;
use crate::lifecycle::MountGeneration;
use crate::source::CatalogSource;

/// Blocking, user-facing failure notification (an alert in the browser).
pub trait FailureNotifier {
    fn notify(&self, message: &str);
}

/// How a load ended.
#[derive(Debug)]
pub enum LoadCompletion {
    Loaded(Vec<Product>),
    Failed(LoadError),
    /// The component was torn down while the fetch was in flight.
    Stale,
}

/// Runs the single catalog load of a component lifetime.
///
/// A source that could not be resolved is kept as its error, so it fails
/// through the same notify-once, ignore-when-stale path as a failed fetch.
#[derive(Debug, Clone)]
pub struct CatalogLoader<S> {
    source: Result<S, LoadError>,
    mount: MountGeneration,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S, mount: MountGeneration) -> Self {
        Self::resolving(Ok(source), mount)
    }

    /// Loader over the outcome of source resolution.
    pub fn resolving(source: Result<S, LoadError>, mount: MountGeneration) -> Self {
        Self { source, mount }
    }

    pub fn mount(&self) -> &MountGeneration {
        &self.mount
    }

    /// Fetch the catalog and classify the outcome.
    pub async fn load(&self) -> LoadCompletion {
        let ticket = self.mount.ticket();
        let (source, result) = match &self.source {
            Ok(catalog) => {
                let source = catalog.describe();
                tracing::debug!(%source, generation = ticket.generation(), "loading catalog");
                (source, catalog.fetch().await)
            }
            Err(error) => ("<unresolved>".to_string(), Err(error.clone())),
        };

        if !ticket.is_current() {
            tracing::debug!(%source, generation = ticket.generation(), "discarding stale catalog load");
            return LoadCompletion::Stale;
        }

        match result {
            Ok(products) => {
                tracing::info!(%source, count = products.len(), "catalog loaded");
                LoadCompletion::Loaded(products)
            }
            Err(error) => {
                tracing::warn!(%source, %error, "catalog load failed");
                LoadCompletion::Failed(error)
            }
        }
    }

    /// Load, notify once on failure, and return the command to dispatch.
    ///
    /// Returns `None` for a stale completion: nothing to apply, nobody to tell.
    pub async fn run(&self, notifier: &impl FailureNotifier) -> Option<StorefrontCommand> {
        match self.load().await {
            LoadCompletion::Loaded(products) => Some(StorefrontCommand::ReplaceCatalog(products)),
            LoadCompletion::Failed(error) => {
                notifier.notify(&error.alert_message());
                Some(StorefrontCommand::RecordLoadFailure(error.to_string()))
            }
            LoadCompletion::Stale => None,
        }
    }
}

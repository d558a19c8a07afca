//! `shopfront` binary.
//!
//! Natively: load a catalog, replay clicks, print the storefront as text.
//! On wasm32: mount the browser component.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
use anyhow::Context;
#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;
#[cfg(not(target_arch = "wasm32"))]
use shopfront_catalog::{DomainError, LoadStatus, ProductId, SortOrder, Storefront, StorefrontView};
#[cfg(not(target_arch = "wasm32"))]
use shopfront_loader::config::SETTINGS_FILE;
#[cfg(not(target_arch = "wasm32"))]
use shopfront_loader::{CatalogLoader, MountGeneration, ResolvedSource, Settings, resolve_source};
#[cfg(not(target_arch = "wasm32"))]
use shopfront_web::preview::{PreviewAction, StderrNotifier, render, replay};

/// Actions are applied as: sort, then tag clicks, then add-to-cart clicks.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Parser)]
#[command(name = "shopfront", about = "Render the product list in the terminal")]
struct Args {
    /// Catalog URL or file path (overrides settings).
    #[arg(long)]
    source: Option<String>,

    /// Settings file.
    #[arg(long, default_value = SETTINGS_FILE)]
    config: PathBuf,

    /// Price order: `asc` or `desc`.
    #[arg(long, value_parser = parse_sort)]
    sort: Option<SortOrder>,

    /// Click a filter button; repeat to click several times (`All` clears).
    #[arg(long = "tag")]
    tags: Vec<String>,

    /// Click add-to-cart on the product with this id; repeatable.
    #[arg(long = "add")]
    add: Vec<String>,
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_sort(value: &str) -> Result<SortOrder, DomainError> {
    value.parse()
}

#[cfg(not(target_arch = "wasm32"))]
impl Args {
    fn actions(&self) -> Vec<PreviewAction> {
        self.sort
            .map(PreviewAction::Sort)
            .into_iter()
            .chain(self.tags.iter().cloned().map(PreviewAction::Tag))
            .chain(
                self.add
                    .iter()
                    .map(|id| PreviewAction::Add(ProductId::new(id.as_str()))),
            )
            .collect()
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    shopfront_observability::init();

    let args = Args::parse();

    let mut settings = Settings::load_from(&args.config)
        .with_context(|| format!("failed to load settings from {}", args.config.display()))?;
    if let Some(source) = &args.source {
        settings.catalog_source = source.clone();
    }

    let source =
        resolve_source(&settings.catalog_source, None).and_then(ResolvedSource::from_location);
    let loader = CatalogLoader::resolving(source, MountGeneration::new());

    let mut state = Storefront::new();
    if let Some(command) = loader.run(&StderrNotifier).await {
        state.dispatch(&command);
    }

    replay(&mut state, &args.actions())?;

    print!("{}", render(&StorefrontView::build(&state, &settings.filter_tags)));

    // Already reported by the notifier.
    if let LoadStatus::Failed(_) = state.load_status() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    shopfront_web::frontend::mount();
}

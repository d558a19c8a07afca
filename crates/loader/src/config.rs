//! Storefront settings: catalog location and the filter tag list.
//!
//! Layering: defaults, then `shopfront.toml`, then environment variables.

use std::path::Path;

use serde::Deserialize;
use shopfront_catalog::FilterTags;

use crate::error::ConfigError;

pub const DEFAULT_CATALOG_SOURCE: &str = "products.json";
pub const SETTINGS_FILE: &str = "shopfront.toml";
pub const ENV_CATALOG_SOURCE: &str = "SHOPFRONT_CATALOG_SOURCE";
pub const ENV_FILTER_TAGS: &str = "SHOPFRONT_FILTER_TAGS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// URL or relative path of the catalog resource.
    pub catalog_source: String,
    pub filter_tags: FilterTags,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_source: DEFAULT_CATALOG_SOURCE.to_string(),
            filter_tags: FilterTags::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    catalog_source: Option<String>,
    filter_tags: Option<Vec<String>>,
}

impl Settings {
    /// Apply a settings file body and an environment lookup over the defaults.
    pub fn layered(
        file: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Some(raw) = file {
            let file_cfg: FileSettings =
                toml::from_str(raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
            if let Some(v) = file_cfg.catalog_source {
                settings.catalog_source = v;
            }
            if let Some(v) = file_cfg.filter_tags {
                settings.filter_tags = FilterTags::new(v)?;
            }
        }

        if let Some(v) = env(ENV_CATALOG_SOURCE) {
            settings.catalog_source = v;
        }
        if let Some(v) = env(ENV_FILTER_TAGS) {
            settings.filter_tags = FilterTags::new(v.split(','))?;
        }

        Ok(settings)
    }

    /// Load from `path` (if it exists) and the process environment.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = match std::fs::read_to_string(path) {
            Ok(raw) => Some(raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };

        Self::layered(raw.as_deref(), |key| std::env::var(key).ok())
    }

    /// Load from `shopfront.toml` in the working directory and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(SETTINGS_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_file_or_env() {
        let settings = Settings::layered(None, no_env).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.catalog_source, "products.json");
        assert_eq!(settings.filter_tags.len(), 7);
    }

    #[test]
    fn file_overrides_defaults() {
        let file = r#"
            catalog_source = "https://shop.example/catalog.json"
            filter_tags = ["gel", "book"]
        "#;
        let settings = Settings::layered(Some(file), no_env).unwrap();
        assert_eq!(settings.catalog_source, "https://shop.example/catalog.json");
        assert_eq!(settings.filter_tags.as_slice(), ["gel", "book"]);
    }

    #[test]
    fn env_overrides_file() {
        let file = r#"catalog_source = "from-file.json""#;
        let env = |key: &str| match key {
            ENV_CATALOG_SOURCE => Some("from-env.json".to_string()),
            ENV_FILTER_TAGS => Some("comics, creme".to_string()),
            _ => None,
        };

        let settings = Settings::layered(Some(file), env).unwrap();
        assert_eq!(settings.catalog_source, "from-env.json");
        assert_eq!(settings.filter_tags.as_slice(), ["comics", "creme"]);
    }

    #[test]
    fn duplicate_tags_are_rejected() {
        let file = r#"filter_tags = ["gel", "gel"]"#;
        assert!(matches!(
            Settings::layered(Some(file), no_env),
            Err(ConfigError::Tags(_))
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            Settings::layered(Some("bind_addr = \"0.0.0.0\""), no_env),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from(Path::new("does/not/exist/shopfront.toml")).unwrap();
        assert_eq!(settings.filter_tags, FilterTags::default());
    }
}

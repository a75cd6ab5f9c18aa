//! Configuration loading for docsite.
//!
//! Parses `docsite.toml` with serde and provides auto-discovery of the config
//! file in parent directories. CLI settings are applied during load via
//! [`CliSettings`]; [`Config::into_site`] then validates everything and
//! produces a [`SiteConfig`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `version`
//! - `site.base`
//! - `search.app_id`, `search.api_key`, `search.index_name`
//!
//! When no version is configured, `DOCSITE_VERSION` is used.

mod expand;
mod theme;

use std::path::{Path, PathBuf};

use docsite_nav::{NavItem, SearchConfig, SidebarTree, SiteMetadata};
use docsite_site::{ConfigDiagnostics, SiteConfig};
use serde::Deserialize;
use tracing::info;

pub use theme::{ComponentConfig, SlotConfig, ThemeConfig};

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "docsite.toml";

/// Environment variable consulted when no version is configured.
pub const VERSION_ENV: &str = "DOCSITE_VERSION";

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the site version.
    pub version: Option<String>,
    /// Override the base path.
    pub base: Option<String>,
}

/// Parsed `docsite.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Application version shown in computed labels.
    pub version: Option<String>,
    /// Site metadata.
    pub site: SiteMetadata,
    /// Top navigation.
    pub nav: Vec<NavItem>,
    /// Sidebar sections keyed by path prefix.
    pub sidebar: SidebarTree,
    /// Search configuration. `provider` is required when the section is present.
    pub search: SearchConfig,
    /// Theme components and slot bindings.
    pub theme: ThemeConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`search.api_key`").
        field: String,
        /// Error message (e.g., "${`ALGOLIA_KEY`} not set").
        message: String,
    },
    /// Structural errors in the site declarations.
    #[error(transparent)]
    Invalid(#[from] ConfigDiagnostics),
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise, searches
    /// for `docsite.toml` in the current directory and its parents, falling
    /// back to an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// an environment variable reference cannot be expanded.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = std::env::current_dir()
            .ok()
            .and_then(|cwd| discover_config(&cwd))
        {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if config.version.as_deref().is_none_or(str::is_empty) {
            config.version = std::env::var(VERSION_ENV).ok();
        }

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Parse configuration from a TOML string and expand variables.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or expansion fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env_vars()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml(&content)?;
        config.config_path = Some(path.to_path_buf());
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(version) = &settings.version {
            self.version = Some(version.clone());
        }
        if let Some(base) = &settings.base {
            self.site.base.clone_from(base);
        }
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(version) = &mut self.version {
            expand::expand_in_place(version, "version")?;
        }
        expand::expand_in_place(&mut self.site.base, "site.base")?;

        if let SearchConfig::External(search) = &mut self.search {
            expand::expand_in_place(&mut search.app_id, "search.app_id")?;
            expand::expand_in_place(&mut search.api_key, "search.api_key")?;
            expand::expand_in_place(&mut search.index_name, "search.index_name")?;
        }

        Ok(())
    }

    /// Validate the declarations and build the site configuration.
    ///
    /// Theme entry errors and site errors are reported together.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] listing every structural error.
    pub fn into_site(self) -> Result<SiteConfig, ConfigError> {
        let mut diags = ConfigDiagnostics::new();
        let theme = self.theme.composer(&mut diags);

        let built = SiteConfig::builder()
            .metadata(self.site)
            .nav_items(self.nav)
            .sidebar_tree(self.sidebar)
            .search(self.search)
            .theme(theme)
            .version(self.version)
            .build();

        match built {
            Ok(site) if diags.is_empty() => Ok(site),
            Ok(_) => Err(diags.into()),
            Err(errors) => {
                diags.merge(errors);
                Err(diags.into())
            }
        }
    }
}

/// Search for the config file in `start` and its parents.
#[must_use]
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsite_nav::{Label, SearchProvider};
    use docsite_site::PageRequest;
    use pretty_assertions::assert_eq;

    const SILENTCAST: &str = r#"
version = "v0.1.0"

[site]
title = "SilentCast"
description = "Hotkey-driven task runner"
base = "/silentcast/"
last_updated = true

[[site.head]]
tag = "link"
attrs = { rel = "icon", href = "/silentcast/favicon.ico" }

[site.footer]
message = "Released under the MIT License."

[[site.social_links]]
icon = "github"
link = "https://github.com/org/silentcast"

[site.edit_link]
pattern = "https://github.com/org/silentcast/edit/main/docs/:path"

[[nav]]
label = "Guide"
link = "/guide/"

[[nav]]
label = "Config"
link = "/config/"

[[nav]]
label = { computed = "version" }
items = [
  { label = "Changelog", link = "https://github.com/org/silentcast/blob/main/CHANGELOG.md" },
  { label = "Contributing", link = "/contributing" },
]

[[sidebar."/guide/"]]
title = "Getting Started"
items = [
  { label = "Installation", link = "/guide/installation" },
  { label = "Quick Start", link = "/guide/quick-start" },
]

[[sidebar."/guide/advanced/"]]
title = "Advanced"
collapsed = true
items = [{ label = "Logging", link = "/guide/advanced/logging" }]

[search]
provider = "local"

[search.translations.button]
buttonText = "Search docs"
"#;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::from_toml("").unwrap();
        assert!(config.version.is_none());
        assert!(config.nav.is_empty());
        assert_eq!(config.site.base, "/");
        assert_eq!(config.search.provider(), SearchProvider::Local);
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_toml(SILENTCAST).unwrap();

        assert_eq!(config.version.as_deref(), Some("v0.1.0"));
        assert_eq!(config.site.title, "SilentCast");
        assert_eq!(config.site.head.len(), 1);
        assert_eq!(config.nav.len(), 3);
        assert_eq!(config.nav[2].label(), &Label::Version);
        assert_eq!(config.sidebar.len(), 2);
        assert_eq!(config.search.text("button.buttonText"), "Search docs");
    }

    #[test]
    fn test_unknown_top_level_key_is_parse_error() {
        let err = Config::from_toml("[server]\nport = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "got {err:?}");
    }

    #[test]
    fn test_into_site_resolves_everything() {
        let site = Config::from_toml(SILENTCAST).unwrap().into_site().unwrap();

        assert_eq!(site.nav()[2].label().text(), "v0.1.0");
        assert_eq!(site.sidebar_for("/guide/advanced/logging")[0].title, "Advanced");
        assert_eq!(site.sidebar_for("/guide/installation")[0].title, "Getting Started");
        assert!(site.sidebar_for("/config/").is_empty());

        let html = site.render(
            &PageRequest::new("/guide/installation")
                .title("Installation")
                .source_path("guide/installation.md"),
        );
        assert!(html.contains("https://github.com/org/silentcast/edit/main/docs/guide/installation.md"));
        assert!(html.contains("href=\"/silentcast/guide/\""));
    }

    #[test]
    fn test_into_site_reports_theme_and_site_errors_together() {
        let toml = r#"
[site]
title = ""

[[theme.slots]]
name = "doc-before"
"#;
        let err = Config::from_toml(toml).unwrap().into_site().unwrap_err();

        let ConfigError::Invalid(diags) = err else {
            panic!("expected Invalid, got {err:?}");
        };
        let fields: Vec<&str> = diags.errors().iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, vec!["theme.slots[0]", "site.title"]);
    }

    #[test]
    fn test_theme_errors_alone_fail_build() {
        let toml = r#"
[site]
title = "Docs"

[[theme.slots]]
name = "doc-before"
html = "a"
component = "b"
"#;
        let err = Config::from_toml(toml).unwrap().into_site().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref d) if d.len() == 1));
    }

    #[test]
    fn test_external_search_requires_provider_fields() {
        let toml = r#"
[site]
title = "Docs"

[search]
provider = "external"
app_id = "APP"
api_key = ""
index_name = "docs"
"#;
        let err = Config::from_toml(toml).unwrap().into_site().unwrap_err();
        assert!(err.to_string().contains("[search.api_key]"));
    }

    #[test]
    fn test_external_search_reports_all_missing_fields() {
        let toml = r#"
[site]
title = "Docs"

[search]
provider = "external"
"#;
        let Err(ConfigError::Invalid(diags)) = Config::from_toml(toml).unwrap().into_site() else {
            panic!("expected validation errors");
        };

        let fields: Vec<&str> = diags.errors().iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, vec!["search.app_id", "search.api_key", "search.index_name"]);
    }

    #[test]
    fn test_expand_search_key() {
        // SAFETY: variable is unique to this test
        unsafe {
            std::env::set_var("DOCSITE_TEST_SEARCH_KEY", "secret");
        }
        let toml = r#"
[search]
provider = "external"
app_id = "APP"
api_key = "${DOCSITE_TEST_SEARCH_KEY}"
index_name = "docs"
"#;
        let config = Config::from_toml(toml).unwrap();
        unsafe {
            std::env::remove_var("DOCSITE_TEST_SEARCH_KEY");
        }

        let SearchConfig::External(search) = config.search else {
            panic!("expected external search");
        };
        assert_eq!(search.api_key, "secret");
    }

    #[test]
    fn test_expand_missing_version_var() {
        // SAFETY: variable is unique to this test
        unsafe {
            std::env::remove_var("DOCSITE_TEST_MISSING_VERSION");
        }
        let err = Config::from_toml("version = \"${DOCSITE_TEST_MISSING_VERSION}\"").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { ref field, .. } if field == "version"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::from_toml(SILENTCAST).unwrap();
        config.apply_cli_settings(&CliSettings {
            version: Some("v9.9.9".to_owned()),
            ..Default::default()
        });

        assert_eq!(config.version.as_deref(), Some("v9.9.9"));
        assert_eq!(config.site.base, "/silentcast/");
    }

    #[test]
    fn test_apply_cli_settings_base() {
        let mut config = Config::default();
        config.apply_cli_settings(&CliSettings {
            base: Some("/docs/".to_owned()),
            ..Default::default()
        });

        assert_eq!(config.site.base, "/docs/");
        assert!(config.version.is_none());
    }

    #[test]
    fn test_load_explicit_missing_path() {
        let err = Config::load(Some(Path::new("/nonexistent/docsite.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, SILENTCAST).unwrap();

        let config = Config::load(
            Some(&path),
            Some(&CliSettings {
                base: Some("/preview/".to_owned()),
                ..Default::default()
            }),
        )
        .unwrap();

        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.version.as_deref(), Some("v0.1.0"));
        assert_eq!(config.site.base, "/preview/");
    }

    #[test]
    fn test_load_version_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let unversioned = dir.path().join("unversioned.toml");
        let versioned = dir.path().join("versioned.toml");
        std::fs::write(&unversioned, "[site]\ntitle = \"SilentCast\"\n").unwrap();
        std::fs::write(&versioned, "version = \"v0.1.0\"\n").unwrap();
        let cli = CliSettings {
            version: Some("v9.9.9".to_owned()),
            ..Default::default()
        };

        // SAFETY: only this test touches DOCSITE_VERSION
        unsafe {
            std::env::set_var(VERSION_ENV, "v0.2.0-env");
        }
        let from_env = Config::load(Some(&unversioned), None);
        let from_file = Config::load(Some(&versioned), None);
        let from_cli = Config::load(Some(&versioned), Some(&cli));
        unsafe {
            std::env::remove_var(VERSION_ENV);
        }

        assert_eq!(from_env.unwrap().version.as_deref(), Some("v0.2.0-env"));
        assert_eq!(from_file.unwrap().version.as_deref(), Some("v0.1.0"));
        assert_eq!(from_cli.unwrap().version.as_deref(), Some("v9.9.9"));

        let site = Config::load(Some(&unversioned), None).unwrap().into_site().unwrap();
        assert_eq!(site.version(), "dev");
    }

    #[test]
    fn test_discover_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("docs").join("guide");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILENAME), "").unwrap();

        let found = discover_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILENAME));
    }

    #[test]
    fn test_discover_ignores_directory_named_like_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(CONFIG_FILENAME)).unwrap();

        let found = discover_config(dir.path());
        assert_ne!(found, Some(dir.path().join(CONFIG_FILENAME)));
    }
}

//! Configuration types for resolving location paths.
//!
//! [`AppConfig`] implements [`serde::Deserialize`] so it can be loaded from
//! external sources such as a TOML file.
//!
//! # Example
//!
//! ```
//! # use pathstate::config::AppConfig;
//! let config: AppConfig = toml::from_str(r#"
//!     base_url = "http://abc.com:123"
//!     series_list = ["xenial", "bionic"]
//! "#).unwrap();
//!
//! assert_eq!(config.base_url(), "http://abc.com:123");
//! ```

use serde::Deserialize;

use pathstate_parser::{ConfigError, ParserConfig};

/// Top-level application configuration.
///
/// `base_url` is required when deserializing; `series_list` falls back to
/// the built-in series when omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Prefix stripped from every path before parsing.
    base_url: String,

    /// Series a store reference may be qualified with.
    #[serde(default)]
    series_list: Option<Vec<String>>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] using the built-in series list.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            series_list: None,
        }
    }

    /// Replaces the series list.
    pub fn with_series_list<I, S>(mut self, series: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.series_list = Some(series.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the explicit series list, if one is configured.
    pub fn series_list(&self) -> Option<&[String]> {
        self.series_list.as_deref()
    }

    /// Builds the validated parser configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the base URL or a series name is invalid.
    pub fn parser_config(&self) -> Result<ParserConfig, ConfigError> {
        let config = ParserConfig::new(self.base_url.clone())?;
        match &self.series_list {
            Some(series) => config.with_series_list(series.iter().cloned()),
            None => Ok(config),
        }
    }
}

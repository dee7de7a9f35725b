//! Parser configuration.
//!
//! [`ParserConfig`] carries the base URL stripped from every path and the
//! list of series names a store reference may be qualified with. It is fixed
//! at construction and read-only afterwards.

use thiserror::Error;

/// Marker accepted as a series in every configuration.
pub const BUNDLE_SERIES: &str = "bundle";

/// Series accepted when no explicit list is configured.
pub const DEFAULT_SERIES: &[&str] = &[
    "precise",
    "trusty",
    "xenial",
    "yakkety",
    "zesty",
    "artful",
    "bionic",
    "centos7",
    "genericlinux",
    "win2012hvr2",
    "win2012hv",
    "win2012r2",
    "win2012",
    "win7",
    "win8",
    "win81",
    "win10",
    "win2016",
    "win2016hv",
    "win2016nano",
];

/// Errors raised while building a [`ParserConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL must not contain whitespace: {0:?}")]
    InvalidBaseUrl(String),

    #[error("series names must not be empty")]
    EmptySeries,

    #[error("series name must be a single path segment: {0:?}")]
    InvalidSeries(String),
}

/// Configuration for [`build_state`](crate::build_state).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    base_url: String,
    series: Vec<String>,
}

impl ParserConfig {
    /// Creates a configuration with the default series list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `base_url` contains
    /// whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// # use pathstate_parser::ParserConfig;
    /// let config = ParserConfig::new("http://abc.com:123").unwrap();
    /// assert!(config.is_series("xenial"));
    /// assert!(config.is_series("bundle"));
    /// ```
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        if base_url.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        let series = DEFAULT_SERIES.iter().map(|s| s.to_string()).collect();
        Ok(Self {
            base_url,
            series: with_bundle(series),
        })
    }

    /// Replaces the series list.
    ///
    /// Order is preserved and [`BUNDLE_SERIES`] is appended when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a series is empty or contains a path separator,
    /// since it could never match a path segment.
    pub fn with_series_list<I, S>(mut self, series: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let series = series
            .into_iter()
            .map(|s| {
                let s = s.into();
                if s.is_empty() {
                    Err(ConfigError::EmptySeries)
                } else if s.contains('/') {
                    Err(ConfigError::InvalidSeries(s))
                } else {
                    Ok(s)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.series = with_bundle(series);
        Ok(self)
    }

    /// Returns the base URL stripped from every path.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the configured series list, ending in or containing `bundle`.
    pub fn series(&self) -> &[String] {
        &self.series
    }

    /// Returns `true` if `candidate` is a configured series.
    pub fn is_series(&self, candidate: &str) -> bool {
        self.series.iter().any(|s| s == candidate)
    }
}

fn with_bundle(mut series: Vec<String>) -> Vec<String> {
    if !series.iter().any(|s| s == BUNDLE_SERIES) {
        series.push(BUNDLE_SERIES.to_string());
    }
    series
}

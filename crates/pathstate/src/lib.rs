//! Pathstate - resolve application location paths into navigation states.
//!
//! A location path such as `/u/hatch/staging/haproxy/i/inspector` is turned
//! into a [`NavigationState`] describing what an application should display:
//! a reserved view, a search, a profile, a model, a store reference, and the
//! open GUI panels.

pub mod config;

mod error;

pub use pathstate_core::{gui, state, view};
pub use pathstate_parser::StateOutcome;

pub use error::PathstateError;

use log::{debug, info};

use pathstate_parser::ParserConfig;

use config::AppConfig;
use state::NavigationState;

/// Router resolving location paths against a fixed configuration.
///
/// The router holds no mutable state; one instance can serve any number of
/// calls, from any number of threads.
///
/// # Examples
///
/// ```rust
/// use pathstate::{StateRouter, config::AppConfig};
///
/// let router = StateRouter::new(AppConfig::new("http://abc.com:123"))
///     .expect("valid configuration");
///
/// let outcome = router.build_state("http://abc.com:123/u/hatch/mongodb/xenial");
/// assert_eq!(outcome.state().store(), Some("hatch/mongodb/xenial"));
/// assert!(outcome.error().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StateRouter {
    config: ParserConfig,
}

impl StateRouter {
    /// Create a new router with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `PathstateError::Config` if the base URL or series list is
    /// invalid.
    pub fn new(config: AppConfig) -> Result<Self, PathstateError> {
        let config = config.parser_config()?;
        info!(
            base_url = config.base_url(),
            series_count = config.series().len();
            "Router configured"
        );
        Ok(Self { config })
    }

    /// Returns the validated parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Resolve a path into a navigation state.
    ///
    /// Never fails: a structural error is reported in the outcome together
    /// with every field committed before it.
    pub fn build_state(&self, url: &str) -> StateOutcome {
        pathstate_parser::build_state(url, &self.config)
    }

    /// Resolve a path, treating any structural error as a failure.
    ///
    /// # Errors
    ///
    /// Returns `PathstateError::Parse` with the offending path when the path
    /// is structurally invalid.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pathstate::{PathstateError, StateRouter, config::AppConfig};
    ///
    /// let router = StateRouter::new(AppConfig::new("")).unwrap();
    ///
    /// let err = router.resolve("/u").unwrap_err();
    /// assert_eq!(err.to_string(), "invalid user path.");
    /// ```
    pub fn resolve(&self, url: &str) -> Result<NavigationState, PathstateError> {
        let state = self
            .build_state(url)
            .into_result()
            .map_err(|err| PathstateError::new_parse_error(err, url))?;

        debug!(url; "Path resolved");
        Ok(state)
    }
}

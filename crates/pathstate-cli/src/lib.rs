//! CLI logic for the Pathstate path resolver.
//!
//! Each path given on the command line is resolved independently. The
//! results are printed as a single TOML document.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::{info, warn};
use serde::Serialize;

use pathstate::{PathstateError, StateOutcome, StateRouter, state::NavigationState};

use error_adapter::{DiagnosticAdapter, Reportable};

/// The resolution of one command-line path.
#[derive(Debug, Clone)]
pub struct Report {
    path: String,
    outcome: StateOutcome,
}

impl Report {
    /// Returns the path as given on the command line.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the resolution outcome.
    pub fn outcome(&self) -> &StateOutcome {
        &self.outcome
    }

    /// Returns the structural error as a reportable diagnostic, if any.
    pub fn reportable(&self) -> Option<Reportable<'_>> {
        self.outcome
            .error()
            .map(|diag| Reportable::Diagnostic(DiagnosticAdapter::new(diag, &self.path)))
    }
}

/// Run the Pathstate CLI application
///
/// Loads the configuration, applies the `--base-url` override and resolves
/// every path. Structural errors in a path do not fail the run; they are
/// carried in the returned reports.
///
/// # Errors
///
/// Returns `PathstateError` for:
/// - Configuration file errors
/// - Invalid base URL or series list
pub fn run(args: &Args) -> Result<Vec<Report>, PathstateError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(base_url) = &args.base_url {
        app_config = app_config.with_base_url(base_url.clone());
    }

    let router = StateRouter::new(app_config)?;

    let reports: Vec<_> = args
        .paths
        .iter()
        .map(|path| Report {
            path: path.clone(),
            outcome: router.build_state(path),
        })
        .collect();

    let failed = reports.iter().filter(|r| !r.outcome.is_ok()).count();
    if failed > 0 {
        warn!(failed, total = reports.len(); "Some paths did not resolve cleanly");
    }
    info!(total = reports.len(); "Paths resolved");

    Ok(reports)
}

#[derive(Serialize)]
struct Document<'a> {
    resolved: Vec<Entry<'a>>,
}

#[derive(Serialize)]
struct Entry<'a> {
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    state: &'a NavigationState,
}

/// Render reports as a TOML document.
///
/// Every report becomes one `[[resolved]]` table holding the path, the error
/// message when resolution failed, and the (possibly partial) state.
///
/// # Errors
///
/// Returns `PathstateError::Settings` if serialization fails.
pub fn render_toml(reports: &[Report]) -> Result<String, PathstateError> {
    let document = Document {
        resolved: reports
            .iter()
            .map(|report| Entry {
                path: &report.path,
                error: report.outcome.error_message(),
                state: report.outcome.state(),
            })
            .collect(),
    };

    toml::to_string(&document).map_err(|e| PathstateError::Settings(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(paths: &[&str], base_url: &str) -> Args {
        Args {
            paths: paths.iter().map(|p| p.to_string()).collect(),
            config: None,
            base_url: Some(base_url.to_string()),
            log_level: "off".to_string(),
        }
    }

    #[test]
    fn test_run_resolves_each_path() {
        let reports = run(&args(&["/u/ant", "/q/haproxy", "/u"], "")).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].outcome().state().profile(), Some("ant"));
        assert_eq!(reports[1].outcome().state().search(), Some("haproxy"));
        assert_eq!(
            reports[2].outcome().error_message(),
            Some("invalid user path.")
        );
        assert!(reports[0].reportable().is_none());
        assert!(reports[2].reportable().is_some());
    }

    #[test]
    fn test_invalid_base_url() {
        let err = run(&args(&["/u/ant"], "http://abc .com")).unwrap_err();
        assert!(matches!(err, PathstateError::Config(_)));
    }

    #[test]
    fn test_render_toml() {
        let reports = run(&args(
            &[
                "http://abc.com:123/u/hatch/mongodb/xenial",
                "http://abc.com:123/u/ant/settings/foo",
            ],
            "http://abc.com:123",
        ))
        .unwrap();

        let rendered = render_toml(&reports).unwrap();
        let parsed: toml::Value = toml::from_str(&rendered).unwrap();
        let resolved = parsed["resolved"].as_array().unwrap();

        assert_eq!(resolved.len(), 2);
        assert_eq!(
            resolved[0]["state"]["store"].as_str(),
            Some("hatch/mongodb/xenial")
        );
        assert!(resolved[0].get("error").is_none());
        assert_eq!(resolved[1]["error"].as_str(), Some("invalid user path."));
        assert_eq!(
            resolved[1]["state"]["profile"].as_str(),
            Some("ant/settings")
        );
    }
}

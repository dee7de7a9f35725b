//! Integration tests for the StateRouter API
//!
//! These tests verify that the public API works and is usable.

use pathstate::{
    PathstateError, StateRouter,
    config::AppConfig,
    gui::Panel,
    state::NavigationState,
    view::RootView,
};

const BASE: &str = "http://abc.com:123";

fn router() -> StateRouter {
    StateRouter::new(AppConfig::new(BASE)).expect("Failed to build router")
}

#[test]
fn test_root_view() {
    let outcome = router().build_state("http://abc.com:123/new");
    assert_eq!(
        outcome.state(),
        &NavigationState::default().with_root(RootView::New)
    );
    assert!(outcome.is_ok());
}

#[test]
fn test_environment_and_store() {
    let outcome = router().build_state("http://abc.com:123/u/hatch/staging/haproxy");
    assert_eq!(outcome.state().user(), Some("hatch/staging"));
    assert_eq!(outcome.state().store(), Some("haproxy"));
    assert_eq!(outcome.error_message(), None);
}

#[test]
fn test_partial_state_with_error() {
    let outcome = router().build_state("http://abc.com:123/u/frankban/u");
    assert_eq!(
        outcome.state(),
        &NavigationState::default().with_profile("frankban")
    );
    assert_eq!(outcome.error_message(), Some("invalid user store path."));
}

#[test]
fn test_resolve_reports_parse_error_with_source() {
    let err = router()
        .resolve("http://abc.com:123/i/status")
        .expect_err("Should reject unknown panel");

    match err {
        PathstateError::Parse { err, src } => {
            assert_eq!(err.message(), "invalid GUI path.");
            assert_eq!(src, "http://abc.com:123/i/status");
        }
        other => panic!("Expected Parse error, got {other:?}"),
    }
}

#[test]
fn test_resolve_success() {
    let state = router()
        .resolve("http://abc.com:123/django/i/inspector/django")
        .expect("Failed to resolve");

    assert_eq!(state.store(), Some("django"));
    assert_eq!(
        state.gui().and_then(|gui| gui.get(Panel::Inspector)),
        Some("django")
    );
}

#[test]
fn test_invalid_configuration() {
    let result = StateRouter::new(AppConfig::new(BASE).with_series_list(["xenial", ""]));
    assert!(matches!(result, Err(PathstateError::Config(_))));
}

#[test]
fn test_router_reusability() {
    let router = router();

    let first = router.build_state("http://abc.com:123/u/ant");
    let second = router.build_state("http://abc.com:123/q/haproxy");

    assert_eq!(first.state().profile(), Some("ant"));
    assert_eq!(second.state().search(), Some("haproxy"));
    assert!(first.state().search().is_none());
}

#[test]
fn test_router_shared_across_threads() {
    let router = router();

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["/u/ant", "/u/hatch/mongodb/xenial", "/docs"]
            .into_iter()
            .map(|path| {
                let router = &router;
                scope.spawn(move || router.build_state(&format!("{BASE}{path}")))
            })
            .collect();

        for handle in handles {
            let outcome = handle.join().expect("Thread panicked");
            assert!(outcome.is_ok());
        }
    });
}

//! Store references: `name`, `name/series`, `name/revision`,
//! `name/series/revision`.
//!
//! The same shape rules apply to a top-level store path (`/django/xenial/42`),
//! to the part after an owner (`/u/hatch/django/42`), and to the leftover after
//! an environment (`/u/hatch/staging/django`).

use log::trace;

use pathstate_core::state::NavigationState;

use crate::{
    config::ParserConfig,
    error::{Diagnostic, ErrorCode},
    sections::SectionResult,
    segment::{self, Segment},
};

/// Returns `true` if `segments` form exactly one store reference.
///
/// A name is any segment other than a reserved marker. A single qualifier
/// may be a configured series or a revision; with two qualifiers the series
/// comes first and the revision last.
pub fn is_store_shape(segments: &[Segment<'_>], config: &ParserConfig) -> bool {
    let is_series = |segment: &Segment<'_>| config.is_series(segment.text());

    match segments {
        [name] => !name.is_marker(),
        [name, qualifier] => {
            !name.is_marker() && (is_series(qualifier) || qualifier.is_numeric())
        }
        [name, series, revision] => {
            !name.is_marker() && is_series(series) && revision.is_numeric()
        }
        _ => false,
    }
}

/// Parse an ownerless store reference consuming every segment.
///
/// Declines on an empty slice. Segments that do not form a store reference
/// fail with `invalid store path.`.
pub fn parse_store<'a>(segments: &'a [Segment<'a>], config: &ParserConfig) -> SectionResult<'a> {
    let Some(span) = segment::span_of(segments) else {
        return SectionResult::Declined;
    };

    if is_store_shape(segments, config) {
        let store = segment::join(segments);
        trace!(store; "Resolved store reference");
        return SectionResult::complete(NavigationState::default().with_store(store));
    }

    trace!(segments = segments.len(); "Segments do not form a store reference");
    SectionResult::failed(
        Diagnostic::new(ErrorCode::E200)
            .with_label(span, "not a store reference")
            .with_help("a store reference is `name`, `name/series`, `name/revision` or `name/series/revision`"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::normalize;

    fn config() -> ParserConfig {
        ParserConfig::new("").unwrap()
    }

    fn shape(path: &str) -> bool {
        is_store_shape(&normalize(path, ""), &config())
    }

    fn store(path: &'static str) -> SectionResult<'static> {
        parse_store(normalize(path, "").leak(), &config())
    }

    #[test]
    fn test_valid_shapes() {
        assert!(shape("/django"));
        assert!(shape("/django/xenial"));
        assert!(shape("/django/42"));
        assert!(shape("/django/xenial/42"));
        assert!(shape("/kubernetes-core/bundle"));
        assert!(shape("/kubernetes-core/bundle/7"));
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(!shape("/"));
        assert!(!shape("/django/haproxy"));
        assert!(!shape("/django/42/xenial"));
        assert!(!shape("/django/xenial/latest"));
        assert!(!shape("/django/xenial/42/extra"));
        assert!(!shape("/u"));
        assert!(!shape("/q/xenial"));
    }

    #[test]
    fn test_custom_series() {
        let config = config().with_series_list(["focal"]).unwrap();
        assert!(is_store_shape(&normalize("/django/focal", ""), &config));
        assert!(!is_store_shape(&normalize("/django/xenial", ""), &config));
        assert!(is_store_shape(&normalize("/django/bundle", ""), &config));
    }

    #[test]
    fn test_parse_store() {
        assert_eq!(
            store("/django/xenial/42"),
            SectionResult::complete(NavigationState::default().with_store("django/xenial/42"))
        );
        assert_eq!(store("/"), SectionResult::Declined);
    }

    #[test]
    fn test_parse_store_failure() {
        let result = store("/django/haproxy");
        let diag = result.diagnostic().expect("expected failure");
        assert_eq!(diag.message(), "invalid store path.");
        assert_eq!(diag.labels()[0].span().start(), 1);
    }
}

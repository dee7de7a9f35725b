//! Path normalization.
//!
//! The lexer strips the configured base URL from a raw location path and
//! splits what remains into [`Segment`]s. Runs of separators collapse into
//! one and leading or trailing separators are dropped, so `/a//b/` and `a/b`
//! produce the same segments. Spans always refer to the raw path, including
//! the stripped base URL, so diagnostics can point into the original input.
//!
//! The public entry point is [`normalize`]. It never fails; an empty result
//! is the application root.

use std::ops::Range;

use log::{trace, warn};
use winnow::{
    Parser as _,
    combinator::{opt, preceded, repeat, terminated},
    error::{ContextError, ModalResult},
    stream::LocatingSlice,
    token::{take_till, take_while},
};

use crate::{
    segment::{SEPARATOR, Segment},
    span::Span,
};

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError>;

/// One or more consecutive separators.
fn separators(input: &mut Input<'_>) -> IResult<()> {
    take_while(1.., SEPARATOR).void().parse_next(input)
}

/// A maximal run of non-separator characters, with its byte range.
fn segment<'a>(input: &mut Input<'a>) -> IResult<(&'a str, Range<usize>)> {
    take_till(1.., SEPARATOR).with_span().parse_next(input)
}

/// `/*(segment /*)*`
fn segments<'a>(input: &mut Input<'a>) -> IResult<Vec<(&'a str, Range<usize>)>> {
    preceded(
        opt(separators),
        repeat(0.., terminated(segment, opt(separators))),
    )
    .parse_next(input)
}

/// Split `path` into non-empty segments after removing `base_url`.
///
/// The base URL is matched exactly and case-sensitively at the start of the
/// path; a path that does not start with it is split as-is.
///
/// # Example
///
/// ```
/// # use pathstate_parser::normalize;
/// let segments = normalize("http://abc.com:123//u/hatch//staging/", "http://abc.com:123");
/// let texts: Vec<_> = segments.iter().map(|s| s.text()).collect();
/// assert_eq!(texts, ["u", "hatch", "staging"]);
/// ```
pub fn normalize<'a>(path: &'a str, base_url: &str) -> Vec<Segment<'a>> {
    let (offset, rest) = match path.strip_prefix(base_url) {
        Some(rest) => (base_url.len(), rest),
        None => {
            trace!(base_url; "Path does not start with base URL");
            (0, path)
        }
    };

    let mut input = LocatingSlice::new(rest);
    match segments.parse_next(&mut input) {
        Ok(raw) => raw
            .into_iter()
            .map(|(text, range)| Segment::new(text, Span::new(range).offset_by(offset)))
            .collect(),
        Err(err) => {
            // Every input is either a separator or part of a segment
            warn!(err:?; "Path segmentation stopped unexpectedly");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://abc.com:123";

    fn texts(path: &str) -> Vec<&str> {
        normalize(path, BASE).iter().map(|s| s.text()).collect()
    }

    #[test]
    fn test_strips_base_and_trailing_separators() {
        assert_eq!(texts("http://abc.com:123/a/b/c/d/"), ["a", "b", "c", "d"]);
        assert_eq!(texts("http://abc.com:123/a/b/c/d///"), ["a", "b", "c", "d"]);
        assert_eq!(texts("http://abc.com:123//a/b//c/d/"), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_paths() {
        assert!(texts("http://abc.com:123").is_empty());
        assert!(texts("http://abc.com:123/").is_empty());
        assert!(texts("http://abc.com:123////").is_empty());
        assert!(texts("").is_empty());
    }

    #[test]
    fn test_base_url_is_case_sensitive() {
        let segments = texts("HTTP://abc.com:123/new");
        assert_eq!(segments, ["HTTP:", "abc.com:123", "new"]);
    }

    #[test]
    fn test_without_base_url() {
        fn texts_of(path: &str) -> Vec<&str> {
            normalize(path, "").iter().map(Segment::text).collect()
        }

        assert_eq!(texts_of("/u/ant"), texts_of("u/ant/"));
        assert_eq!(texts_of("/u/ant"), ["u", "ant"]);
    }

    #[test]
    fn test_spans_point_into_raw_path() {
        let path = "http://abc.com:123//u/hatch";
        let segments = normalize(path, BASE);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].span(), Span::new(20..21));
        assert_eq!(&path[20..21], "u");
        assert_eq!(segments[1].span(), Span::new(22..27));
        assert_eq!(&path[22..27], "hatch");
    }

    #[test]
    fn test_non_ascii_segments() {
        let path = "/q/café/ü";
        let segments = normalize(path, "");
        let texts: Vec<_> = segments.iter().map(|s| s.text()).collect();

        assert_eq!(texts, ["q", "café", "ü"]);
        let last = segments[2].span();
        assert_eq!(&path[last.start()..last.end()], "ü");
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    /// Strategy for a list of segment texts without separators.
    fn segment_texts_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z0-9.:-]{1,8}", 0..8)
    }

    /// Strategy for a separator run of one to four slashes.
    fn separator_strategy() -> impl Strategy<Value = String> {
        (1usize..=4).prop_map(|n| "/".repeat(n))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Any mix of separator runs between the same segments normalizes identically.
    fn check_separators_collapse(
        parts: &[String],
        separators: &[String],
        leading: &str,
        trailing: &str,
    ) -> Result<(), TestCaseError> {
        let mut path = String::from(leading);
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                path.push_str(&separators[i % separators.len()]);
            }
            path.push_str(part);
        }
        path.push_str(trailing);

        let texts: Vec<&str> = normalize(&path, "").iter().map(|s| s.text()).collect();
        let expected: Vec<&str> = parts.iter().map(String::as_str).collect();
        prop_assert_eq!(texts, expected);
        Ok(())
    }

    /// Normalizing an already normalized path gives back the same segments.
    fn check_idempotent(parts: &[String]) -> Result<(), TestCaseError> {
        let path = format!("/{}", parts.join("/"));
        let first: Vec<&str> = normalize(&path, "").iter().map(|s| s.text()).collect();
        let rejoined = format!("/{}", first.join("/"));
        let second: Vec<&str> = normalize(&rejoined, "").iter().map(|s| s.text()).collect();
        prop_assert_eq!(first, second);
        Ok(())
    }

    /// Segment spans always slice back to the segment text.
    fn check_spans_slice_text(path: &str) -> Result<(), TestCaseError> {
        for segment in normalize(path, "") {
            let span = segment.span();
            prop_assert_eq!(&path[span.start()..span.end()], segment.text());
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn separators_collapse(
            parts in segment_texts_strategy(),
            separators in prop::collection::vec(separator_strategy(), 1..4),
            leading in "/{0,3}",
            trailing in "/{0,3}",
        ) {
            check_separators_collapse(&parts, &separators, &leading, &trailing)?;
        }

        #[test]
        fn normalization_is_idempotent(parts in segment_texts_strategy()) {
            check_idempotent(&parts)?;
        }

        #[test]
        fn spans_slice_text(path in "[a-z/]{0,24}") {
            check_spans_slice_text(&path)?;
        }
    }
}

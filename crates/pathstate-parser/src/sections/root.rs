//! Reserved top-level views: `/new`, `/store`, `/about`, ...

use log::trace;

use pathstate_core::{state::NavigationState, view::RootView};

use crate::{
    error::{Diagnostic, ErrorCode},
    sections::SectionResult,
    segment::{self, Segment},
};

/// Parse a root view claiming the whole path.
///
/// Declines unless the first segment is a root keyword. Any segment after
/// the keyword fails with `invalid root path.` and commits nothing.
pub fn parse_root<'a>(segments: &'a [Segment<'a>]) -> SectionResult<'a> {
    let Some((first, rest)) = segments.split_first() else {
        return SectionResult::Declined;
    };
    let Some(view) = RootView::from_keyword(first.text()) else {
        return SectionResult::Declined;
    };

    if let Some(extra) = segment::span_of(rest) {
        trace!(view = view.as_str(), extra = rest.len(); "Root view followed by segments");
        return SectionResult::failed(
            Diagnostic::new(ErrorCode::E100)
                .with_label(extra, "unexpected segments after root view")
                .with_secondary_label(first.span(), "root view claims the whole path")
                .with_help(format!("use `/{view}` on its own")),
        );
    }

    SectionResult::complete(NavigationState::default().with_root(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::normalize;

    #[test]
    fn test_root_views() {
        for view in RootView::ALL {
            let path = format!("/{view}");
            let segments = normalize(&path, "");
            assert_eq!(
                parse_root(&segments),
                SectionResult::complete(NavigationState::default().with_root(view))
            );
        }
    }

    #[test]
    fn test_declines_other_segments() {
        let segments = normalize("/u/ant", "");
        assert_eq!(parse_root(&segments), SectionResult::Declined);
        assert_eq!(parse_root(&[]), SectionResult::Declined);
    }

    #[test]
    fn test_trailing_segments_fail() {
        let path = "/new/foo/bar";
        let segments = normalize(path, "");
        let result = parse_root(&segments);

        let diag = result.diagnostic().expect("expected failure");
        assert_eq!(diag.message(), "invalid root path.");
        let span = diag.labels()[0].span();
        assert_eq!(&path[span.start()..span.end()], "foo/bar");
    }
}

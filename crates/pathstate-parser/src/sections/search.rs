//! Search queries: `/q/<query...>`.

use pathstate_core::state::NavigationState;

use crate::{
    sections::SectionResult,
    segment::{self, SEARCH_MARKER, Segment},
};

/// Parse a search query claiming the whole path.
///
/// The segments after the marker are rejoined with `/`. A marker with
/// nothing after it is not a search and declines.
pub fn parse_search<'a>(segments: &'a [Segment<'a>]) -> SectionResult<'a> {
    match segments {
        [marker, query @ ..] if marker.is(SEARCH_MARKER) && !query.is_empty() => {
            SectionResult::complete(NavigationState::default().with_search(segment::join(query)))
        }
        _ => SectionResult::Declined,
    }
}

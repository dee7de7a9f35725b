//! Path segments produced by the [`lexer`](super::lexer).

use std::fmt;

use crate::span::Span;

/// Owner-prefix marker: `/u/<owner>/...`.
pub const OWNER_MARKER: &str = "u";

/// Search-prefix marker: `/q/<query>...`.
pub const SEARCH_MARKER: &str = "q";

/// Panel-prefix marker: `/i/<panel>/...`.
pub const PANEL_MARKER: &str = "i";

/// Path separator.
pub const SEPARATOR: char = '/';

/// A single non-empty path segment together with its location in the raw path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'src> {
    text: &'src str,
    span: Span,
}

impl<'src> Segment<'src> {
    pub fn new(text: &'src str, span: Span) -> Self {
        Self { text, span }
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns `true` if the segment is exactly `literal`.
    pub fn is(&self, literal: &str) -> bool {
        self.text == literal
    }

    /// Returns `true` for the reserved owner, search and panel markers.
    pub fn is_marker(&self) -> bool {
        matches!(self.text, OWNER_MARKER | SEARCH_MARKER | PANEL_MARKER)
    }

    /// Returns `true` for a non-empty, all-digit segment.
    pub fn is_numeric(&self) -> bool {
        !self.text.is_empty() && self.text.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for Segment<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Joins segment texts back together with the path separator.
pub fn join(segments: &[Segment<'_>]) -> String {
    segments
        .iter()
        .map(Segment::text)
        .collect::<Vec<_>>()
        .join("/")
}

/// Span covering every segment in `segments`, or `None` when empty.
pub fn span_of(segments: &[Segment<'_>]) -> Option<Span> {
    let first = segments.first()?;
    let last = segments.last()?;
    Some(first.span().union(last.span()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str, start: usize) -> Segment<'_> {
        Segment::new(text, Span::new(start..start + text.len()))
    }

    #[test]
    fn test_join() {
        let segments = [seg("django", 1), seg("xenial", 8), seg("42", 15)];
        assert_eq!(join(&segments), "django/xenial/42");
        assert_eq!(join(&[]), "");
    }

    #[test]
    fn test_span_of() {
        let segments = [seg("a", 1), seg("bc", 3)];
        assert_eq!(span_of(&segments), Some(Span::new(1..5)));
        assert_eq!(span_of(&[]), None);
    }

    #[test]
    fn test_numeric() {
        assert!(seg("42", 0).is_numeric());
        assert!(!seg("4a", 0).is_numeric());
        assert!(!seg("-1", 0).is_numeric());
    }

    #[test]
    fn test_markers() {
        assert!(seg("u", 0).is_marker());
        assert!(seg("q", 0).is_marker());
        assert!(seg("i", 0).is_marker());
        assert!(!seg("user", 0).is_marker());
    }
}

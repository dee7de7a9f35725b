//! Owner sections: `/u/<owner>/...`.
//!
//! An owner section resolves to exactly one of:
//! - a profile: `/u/hatch`, `/u/hatch/settings`
//! - a store reference: `/u/hatch/mongodb/xenial`
//! - an environment, with leftover segments for the orchestrator:
//!   `/u/hatch/staging/haproxy`, `/u/hatch/staging/u/frankban/django`
//!
//! A second owner marker inside the leftover opens a *nested* section, which
//! may only resolve to a store reference.

use log::trace;

use pathstate_core::state::NavigationState;

use crate::{
    config::ParserConfig,
    error::{Diagnostic, ErrorCode},
    sections::{SectionResult, store::is_store_shape},
    segment::{self, OWNER_MARKER, Segment},
};

/// Reserved words that turn `/u/<owner>/<word>` into a profile page.
pub const PROFILE_SUFFIXES: &[&str] = &["charms", "issues", "revenue", "settings"];

/// Longest segment run after an owner that may fall back to an environment.
const MAX_ENVIRONMENT_SEGMENTS: usize = 3;

/// Where an owner section appears in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// The owner marker opens the path; may resolve to a profile or user.
    Primary,
    /// A second owner marker after an environment; resolves only to a store.
    Nested,
}

impl Invocation {
    fn error_code(self) -> ErrorCode {
        match self {
            Invocation::Primary => ErrorCode::E400,
            Invocation::Nested => ErrorCode::E401,
        }
    }
}

/// Returns `true` if `segment` is a reserved profile suffix.
pub fn is_profile_suffix(segment: &Segment<'_>) -> bool {
    PROFILE_SUFFIXES.contains(&segment.text())
}

/// Parse an owner section.
///
/// Declines unless the first segment is the owner-prefix marker. A missing
/// owner fails with `invalid user path.` for a primary section and
/// `invalid user store path.` for a nested one.
pub fn parse_user<'a>(
    segments: &'a [Segment<'a>],
    config: &ParserConfig,
    invocation: Invocation,
) -> SectionResult<'a> {
    let Some((marker, rest)) = segments.split_first() else {
        return SectionResult::Declined;
    };
    if !marker.is(OWNER_MARKER) {
        return SectionResult::Declined;
    }

    let Some((owner, remaining)) = rest.split_first() else {
        trace!(invocation:?; "Owner marker without owner");
        return SectionResult::failed(
            Diagnostic::new(invocation.error_code())
                .with_label(marker.span(), "expected an owner after this marker")
                .with_help("use `/u/<owner>`"),
        );
    };

    match invocation {
        Invocation::Primary => parse_primary(marker, owner, remaining, config),
        Invocation::Nested => parse_nested(marker, owner, remaining, config),
    }
}

fn parse_primary<'a>(
    marker: &Segment<'a>,
    owner: &Segment<'a>,
    remaining: &'a [Segment<'a>],
    config: &ParserConfig,
) -> SectionResult<'a> {
    let owner_text = owner.text();

    match remaining {
        [] => {
            trace!(owner = owner_text; "Resolved owner profile");
            SectionResult::complete(NavigationState::default().with_profile(owner_text))
        }
        [suffix, leftover @ ..] if is_profile_suffix(suffix) => {
            trace!(owner = owner_text, suffix = suffix.text(); "Resolved owner profile page");
            SectionResult::Matched {
                state: NavigationState::default()
                    .with_profile(format!("{owner_text}/{}", suffix.text())),
                leftover,
            }
        }
        [next, ..] if next.is(OWNER_MARKER) => {
            trace!(owner = owner_text; "Owner marker where an environment was expected");
            SectionResult::Failed {
                diagnostic: Diagnostic::new(ErrorCode::E401)
                    .with_label(next.span(), "expected an environment or store name")
                    .with_secondary_label(marker.span().union(owner.span()), "owner section"),
                partial: NavigationState::default().with_profile(owner_text),
            }
        }
        _ if is_store_shape(remaining, config) => {
            let store = format!("{owner_text}/{}", segment::join(remaining));
            trace!(store; "Resolved owned store reference");
            SectionResult::complete(NavigationState::default().with_store(store))
        }
        [environment, leftover @ ..]
            if !environment.is_marker()
                && (leftover.first().is_some_and(|s| s.is(OWNER_MARKER))
                    || remaining.len() <= MAX_ENVIRONMENT_SEGMENTS) =>
        {
            trace!(
                owner = owner_text,
                environment = environment.text(),
                leftover = leftover.len();
                "Resolved owner environment"
            );
            SectionResult::Matched {
                state: NavigationState::default()
                    .with_user(format!("{owner_text}/{}", environment.text())),
                leftover,
            }
        }
        _ => {
            trace!(owner = owner_text, segments = remaining.len(); "Owner section is malformed");
            SectionResult::failed(malformed_store(remaining))
        }
    }
}

fn parse_nested<'a>(
    marker: &Segment<'a>,
    owner: &Segment<'a>,
    remaining: &'a [Segment<'a>],
    config: &ParserConfig,
) -> SectionResult<'a> {
    if remaining.is_empty() {
        trace!(owner = owner.text(); "Nested owner section without store name");
        return SectionResult::failed(
            Diagnostic::new(ErrorCode::E401)
                .with_label(marker.span().union(owner.span()), "expected a store name after the owner")
                .with_help("use `/u/<owner>/<name>` to reference a store entry"),
        );
    }

    if !is_store_shape(remaining, config) {
        trace!(owner = owner.text(), segments = remaining.len(); "Nested owner section is malformed");
        return SectionResult::failed(malformed_store(remaining));
    }

    let store = format!("{}/{}", owner.text(), segment::join(remaining));
    trace!(store; "Resolved nested store reference");
    SectionResult::complete(NavigationState::default().with_store(store))
}

fn malformed_store(remaining: &[Segment<'_>]) -> Diagnostic {
    let diagnostic = Diagnostic::new(ErrorCode::E401);
    let diagnostic = match segment::span_of(remaining) {
        Some(span) => diagnostic.with_label(span, "not a store reference"),
        None => diagnostic,
    };
    diagnostic.with_help("after an owner use `name[/series][/revision]` or `environment/...`")
}

//! # Pathstate Parser
//!
//! Parser turning a location path into a structured navigation state. This
//! crate provides the pipeline from a raw path (optionally prefixed by a base
//! URL) to a [`pathstate_core::state::NavigationState`].
//!
//! ## Usage
//!
//! ```
//! # use pathstate_parser::{build_state, ParserConfig};
//! let config = ParserConfig::new("http://abc.com:123").unwrap();
//!
//! let outcome = build_state("http://abc.com:123/u/hatch/staging/haproxy", &config);
//! assert!(outcome.is_ok());
//! assert_eq!(outcome.state().user(), Some("hatch/staging"));
//! assert_eq!(outcome.state().store(), Some("haproxy"));
//!
//! let outcome = build_state("http://abc.com:123/u", &config);
//! assert_eq!(outcome.error_message(), Some("invalid user path."));
//! ```

pub mod error;
pub mod sections;

mod builder;
mod config;
mod lexer;
mod outcome;
mod segment;
mod span;

pub use config::{BUNDLE_SERIES, ConfigError, DEFAULT_SERIES, ParserConfig};
pub use lexer::normalize;
pub use outcome::StateOutcome;
pub use segment::{OWNER_MARKER, PANEL_MARKER, SEARCH_MARKER, Segment};
pub use span::Span;

use log::debug;

use builder::StateBuilder;
use error::{Diagnostic, ErrorCode};
use sections::{
    gui, root, search, store,
    user::{self, Invocation},
};

/// Resolve a location path into a navigation state.
///
/// This is the main entry point. It orchestrates the section parsers:
///
/// 1. **Normalize** - Strip the base URL and split into segments
/// 2. **Root** - A reserved view claims the whole path
/// 3. **Search** - A search query claims the whole path
/// 4. **User/Store** - An owner section or a plain store reference, up to the
///    first panel marker
/// 5. **GUI** - The panel section, from the first panel marker on
///
/// Parsing stops at the first structural error. The returned state then holds
/// every field committed before the failing section.
///
/// # Arguments
///
/// * `path` - The raw location path
/// * `config` - Base URL and series list
pub fn build_state(path: &str, config: &ParserConfig) -> StateOutcome {
    let segments = lexer::normalize(path, config.base_url());
    debug!(path, segments = segments.len(); "Normalized path");

    let mut builder = StateBuilder::new();
    let error = resolve(&segments, config, &mut builder).err();
    let outcome = StateOutcome::new(builder.finish(), error);

    debug!(
        path,
        state:? = outcome.state(),
        error:? = outcome.error_message();
        "Resolved path"
    );
    outcome
}

fn resolve<'a>(
    segments: &'a [Segment<'a>],
    config: &ParserConfig,
    builder: &mut StateBuilder,
) -> Result<(), Diagnostic> {
    if segments.is_empty() {
        return Ok(());
    }

    // Root and search views claim the whole path
    if builder.apply("root", root::parse_root(segments))?.is_some() {
        return Ok(());
    }
    if builder.apply("search", search::parse_search(segments))?.is_some() {
        return Ok(());
    }

    let split = segments
        .iter()
        .position(|segment| segment.is(PANEL_MARKER))
        .unwrap_or(segments.len());
    let (head, panels) = segments.split_at(split);

    if head.first().is_some_and(|segment| segment.is(OWNER_MARKER)) {
        resolve_owner(head, config, builder)?;
    } else {
        builder.apply("store", store::parse_store(head, config))?;
    }

    builder.apply("gui", gui::parse_gui(panels))?;
    Ok(())
}

/// Resolve an owner section and whatever it leaves over.
///
/// The leftover is either a nested owner section, which can only produce a
/// store, or an ownerless store reference after an environment.
fn resolve_owner<'a>(
    head: &'a [Segment<'a>],
    config: &ParserConfig,
    builder: &mut StateBuilder,
) -> Result<(), Diagnostic> {
    let primary = user::parse_user(head, config, Invocation::Primary);
    let Some(leftover) = builder.apply("user", primary)? else {
        return Ok(());
    };

    let Some(first) = leftover.first() else {
        return Ok(());
    };

    // A profile is exclusive of user and store
    if builder.has_profile() {
        let span = segment::span_of(leftover).unwrap_or_else(|| first.span());
        return Err(Diagnostic::new(ErrorCode::E400)
            .with_label(span, "unexpected segments after profile")
            .with_help("a profile page takes no further segments"));
    }

    if first.is(OWNER_MARKER) {
        let nested = user::parse_user(leftover, config, Invocation::Nested);
        builder.apply("user store", nested)?;
        return Ok(());
    }

    builder.apply("store", store::parse_store(leftover, config))?;
    Ok(())
}

//! Section parsers.
//!
//! Each section parser looks at the leading segment of a slice and either
//! claims it, declines it, or rejects it. Claimed sections report the state
//! they contribute and any segments they did not consume.
//!
//! | Section | Leading segment | Contributes |
//! |---|---|---|
//! | [`root`] | a root keyword | `root` |
//! | [`search`] | `q` | `search` |
//! | [`user`] | `u` | `profile`, `user`, `store` |
//! | [`store`] | any name | `store` |
//! | [`gui`] | `i` | `gui` |

pub mod gui;
pub mod root;
pub mod search;
pub mod store;
pub mod user;

use pathstate_core::state::NavigationState;

use crate::{error::Diagnostic, segment::Segment};

/// The result of running one section parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionResult<'a> {
    /// The section claimed the leading segments.
    Matched {
        state: NavigationState,
        leftover: &'a [Segment<'a>],
    },

    /// The leading segment does not belong to this section.
    Declined,

    /// The section claimed the leading segments but they are malformed.
    ///
    /// `partial` holds any field the section committed before failing.
    Failed {
        diagnostic: Diagnostic,
        partial: NavigationState,
    },
}

impl<'a> SectionResult<'a> {
    /// A match that consumed every segment.
    pub(crate) fn complete(state: NavigationState) -> Self {
        SectionResult::Matched {
            state,
            leftover: &[],
        }
    }

    /// A failure with nothing committed.
    pub(crate) fn failed(diagnostic: Diagnostic) -> Self {
        SectionResult::Failed {
            diagnostic,
            partial: NavigationState::default(),
        }
    }

    /// Returns the leftover segments of a match.
    pub fn leftover(&self) -> Option<&'a [Segment<'a>]> {
        match self {
            SectionResult::Matched { leftover, .. } => Some(*leftover),
            _ => None,
        }
    }

    /// Returns the diagnostic of a failure.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            SectionResult::Failed { diagnostic, .. } => Some(diagnostic),
            _ => None,
        }
    }
}

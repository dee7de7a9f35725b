//! State accumulation across sections.

use log::trace;

use pathstate_core::state::NavigationState;

use crate::{error::Diagnostic, sections::SectionResult, segment::Segment};

/// Accumulates the fields contributed by each section.
///
/// Sections contribute disjoint fields, so applying a section never
/// overwrites a field committed by an earlier one.
#[derive(Debug, Default)]
pub(crate) struct StateBuilder {
    state: NavigationState,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a section result.
    ///
    /// Returns the leftover segments of a match, `None` when the section
    /// declined, or the diagnostic of a failure after committing its partial
    /// state.
    pub fn apply<'a>(
        &mut self,
        section: &'static str,
        result: SectionResult<'a>,
    ) -> Result<Option<&'a [Segment<'a>]>, Diagnostic> {
        match result {
            SectionResult::Matched { state, leftover } => {
                trace!(section, leftover = leftover.len(); "Section matched");
                self.state.merge(state);
                Ok(Some(leftover))
            }
            SectionResult::Declined => {
                trace!(section; "Section declined");
                Ok(None)
            }
            SectionResult::Failed {
                diagnostic,
                partial,
            } => {
                trace!(section, code = diagnostic.code().as_str(); "Section failed");
                self.state.merge(partial);
                Err(diagnostic)
            }
        }
    }

    pub fn has_profile(&self) -> bool {
        self.state.profile().is_some()
    }

    pub fn finish(self) -> NavigationState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_failure_commits_partial_state() {
        let mut builder = StateBuilder::new();
        builder
            .apply(
                "user",
                SectionResult::complete(NavigationState::default().with_user("hatch/staging")),
            )
            .unwrap();

        let err = builder
            .apply(
                "user",
                SectionResult::Failed {
                    diagnostic: Diagnostic::new(ErrorCode::E401),
                    partial: NavigationState::default(),
                },
            )
            .unwrap_err();

        assert_eq!(err.message(), "invalid user store path.");
        assert_eq!(
            builder.finish(),
            NavigationState::default().with_user("hatch/staging")
        );
    }

    #[test]
    fn test_declined_leaves_state_untouched() {
        let mut builder = StateBuilder::new();
        assert_eq!(builder.apply("root", SectionResult::Declined), Ok(None));
        assert!(builder.finish().is_empty());
    }
}

//! Panel sections: `/i/<panel>[/<sub-path>...][/<panel>...]`.

use log::trace;

use pathstate_core::{
    gui::{GuiState, Panel},
    state::NavigationState,
};

use crate::{
    error::{Diagnostic, ErrorCode},
    sections::SectionResult,
    segment::{PANEL_MARKER, Segment},
    span::Span,
};

/// Parse a panel section consuming every segment.
///
/// Declines unless the first segment is the panel-prefix marker. Each panel
/// marker takes the segments up to the next panel marker as its value, which
/// is `""` when nothing follows it. A repeated panel keeps its last value.
/// The marker must be followed by a panel marker, otherwise the section fails
/// with `invalid GUI path.`.
pub fn parse_gui<'a>(segments: &'a [Segment<'a>]) -> SectionResult<'a> {
    let Some((marker, rest)) = segments.split_first() else {
        return SectionResult::Declined;
    };
    if !marker.is(PANEL_MARKER) {
        return SectionResult::Declined;
    }

    let mut gui = GuiState::default();
    let mut open: Option<Panel> = None;
    let mut values: Vec<&str> = Vec::new();

    for segment in rest {
        if let Some(panel) = Panel::from_marker(segment.text()) {
            if let Some(previous) = open.replace(panel) {
                gui.set(previous, values.join("/"));
                values.clear();
            }
        } else if open.is_some() {
            values.push(segment.text());
        } else {
            trace!(segment = segment.text(); "Panel section does not start with a panel");
            return SectionResult::failed(not_a_panel(marker, segment.span()));
        }
    }

    let Some(last) = open else {
        trace!("Panel section is empty");
        return SectionResult::failed(not_a_panel(marker, marker.span()));
    };
    gui.set(last, values.join("/"));

    SectionResult::complete(NavigationState::default().with_gui(gui))
}

fn not_a_panel(marker: &Segment<'_>, span: Span) -> Diagnostic {
    let panels = Panel::ALL
        .iter()
        .map(Panel::as_str)
        .collect::<Vec<_>>()
        .join("`, `");

    let diagnostic = Diagnostic::new(ErrorCode::E300);
    let diagnostic = if span == marker.span() {
        diagnostic.with_label(span, "expected a panel after this marker")
    } else {
        diagnostic
            .with_label(span, "not a panel")
            .with_secondary_label(marker.span(), "panel section starts here")
    };
    diagnostic.with_help(format!("panels are `{panels}`"))
}

//! The embedded GUI panel sub-state.
//!
//! A path may carry a panel section (`/i/...`) made of panel markers, each
//! followed by the sub-path that belongs to it. [`GuiState`] records one
//! optional value per [`Panel`].

use std::fmt;

use serde::Serialize;

/// A panel marker recognized inside the GUI section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Applications,
    Deploy,
    Inspector,
    Machines,
}

impl Panel {
    /// Every panel, in marker order.
    pub const ALL: [Panel; 4] = [
        Panel::Applications,
        Panel::Deploy,
        Panel::Inspector,
        Panel::Machines,
    ];

    /// Returns the path marker for this panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Applications => "applications",
            Panel::Deploy => "deploy",
            Panel::Inspector => "inspector",
            Panel::Machines => "machines",
        }
    }

    /// Looks up the panel for an exact, case-sensitive marker.
    pub fn from_marker(marker: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|panel| panel.as_str() == marker)
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Panel sub-state keyed by [`Panel`].
///
/// Each value is the slash-joined sub-path that followed the panel marker.
/// An empty string means the panel was opened with nothing after it, which
/// is distinct from the panel being absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GuiState {
    #[serde(skip_serializing_if = "Option::is_none")]
    applications: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    deploy: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    inspector: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    machines: Option<String>,
}

impl GuiState {
    /// Returns the sub-path recorded for `panel`, if the panel is present.
    pub fn get(&self, panel: Panel) -> Option<&str> {
        self.slot(panel).as_deref()
    }

    /// Records `value` for `panel`, replacing any previous value.
    pub fn set(&mut self, panel: Panel, value: impl Into<String>) {
        *self.slot_mut(panel) = Some(value.into());
    }

    /// Builder-style variant of [`GuiState::set`].
    pub fn with(mut self, panel: Panel, value: impl Into<String>) -> Self {
        self.set(panel, value);
        self
    }

    /// Returns `true` when no panel is present.
    pub fn is_empty(&self) -> bool {
        Panel::ALL.iter().all(|panel| self.slot(*panel).is_none())
    }

    /// Iterates over present panels and their values, in marker order.
    pub fn panels(&self) -> impl Iterator<Item = (Panel, &str)> {
        Panel::ALL
            .into_iter()
            .filter_map(|panel| self.get(panel).map(|value| (panel, value)))
    }

    /// Copies every panel present in `other` over this state.
    pub fn merge(&mut self, other: GuiState) {
        for panel in Panel::ALL {
            if let Some(value) = other.slot(panel) {
                self.set(panel, value.clone());
            }
        }
    }

    fn slot(&self, panel: Panel) -> &Option<String> {
        match panel {
            Panel::Applications => &self.applications,
            Panel::Deploy => &self.deploy,
            Panel::Inspector => &self.inspector,
            Panel::Machines => &self.machines,
        }
    }

    fn slot_mut(&mut self, panel: Panel) -> &mut Option<String> {
        match panel {
            Panel::Applications => &mut self.applications,
            Panel::Deploy => &mut self.deploy,
            Panel::Inspector => &mut self.inspector,
            Panel::Machines => &mut self.machines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_present() {
        let gui = GuiState::default().with(Panel::Inspector, "");

        assert_eq!(gui.get(Panel::Inspector), Some(""));
        assert_eq!(gui.get(Panel::Machines), None);
        assert!(!gui.is_empty());
    }

    #[test]
    fn test_set_overwrites() {
        let mut gui = GuiState::default();
        gui.set(Panel::Machines, "0");
        gui.set(Panel::Machines, "1/lxc");

        assert_eq!(gui.get(Panel::Machines), Some("1/lxc"));
    }

    #[test]
    fn test_merge_keeps_existing_panels() {
        let mut gui = GuiState::default().with(Panel::Applications, "");
        gui.merge(GuiState::default().with(Panel::Deploy, "summary"));

        let panels: Vec<_> = gui.panels().collect();
        assert_eq!(
            panels,
            vec![(Panel::Applications, ""), (Panel::Deploy, "summary")]
        );
    }

    #[test]
    fn test_marker_lookup() {
        assert_eq!(Panel::from_marker("inspector"), Some(Panel::Inspector));
        assert_eq!(Panel::from_marker("Inspector"), None);
        assert_eq!(Panel::from_marker("status"), None);
    }
}

//! The navigation state record.
//!
//! [`NavigationState`] describes what an application should display for a
//! location path. Every field is independently optional; presence and
//! absence are both meaningful.
//!
//! # Example
//!
//! ```
//! # use pathstate_core::state::NavigationState;
//! let state = NavigationState::default()
//!     .with_user("hatch/staging")
//!     .with_store("haproxy");
//!
//! assert_eq!(state.user(), Some("hatch/staging"));
//! assert_eq!(state.profile(), None);
//! ```

use serde::Serialize;

use crate::{
    gui::{GuiState, Panel},
    view::RootView,
};

/// Structured description of what a location path selects.
///
/// Field relationships:
/// - `root` and `search` exclude every other field.
/// - `profile` excludes `user` and `store`.
/// - `user` and `store` may coexist (a store entry deployed into a model).
/// - `gui` never coexists with `root` or `search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationState {
    #[serde(skip_serializing_if = "Option::is_none")]
    root: Option<RootView>,

    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    gui: Option<GuiState>,
}

impl NavigationState {
    /// Returns the reserved root view, if any.
    pub fn root(&self) -> Option<RootView> {
        self.root
    }

    /// Returns the search query, if any.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the profile reference (`owner` or `owner/suffix`), if any.
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// Returns the `owner/environment` model reference, if any.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the store reference, if any.
    pub fn store(&self) -> Option<&str> {
        self.store.as_deref()
    }

    /// Returns the GUI panel sub-state, if any.
    pub fn gui(&self) -> Option<&GuiState> {
        self.gui.as_ref()
    }

    /// Returns `true` when no field is present.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
            && self.search.is_none()
            && self.profile.is_none()
            && self.user.is_none()
            && self.store.is_none()
            && self.gui.is_none()
    }

    pub fn with_root(mut self, root: RootView) -> Self {
        self.root = Some(root);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = Some(store.into());
        self
    }

    pub fn with_gui(mut self, gui: GuiState) -> Self {
        self.gui = Some(gui);
        self
    }

    /// Adds a single panel to the GUI sub-state, creating it when absent.
    pub fn with_panel(mut self, panel: Panel, value: impl Into<String>) -> Self {
        self.gui.get_or_insert_with(GuiState::default).set(panel, value);
        self
    }

    /// Copies every field present in `other` over this state.
    ///
    /// GUI sub-states are merged panel by panel.
    pub fn merge(&mut self, other: NavigationState) {
        let NavigationState {
            root,
            search,
            profile,
            user,
            store,
            gui,
        } = other;

        if root.is_some() {
            self.root = root;
        }
        if search.is_some() {
            self.search = search;
        }
        if profile.is_some() {
            self.profile = profile;
        }
        if user.is_some() {
            self.user = user;
        }
        if store.is_some() {
            self.store = store;
        }
        if let Some(gui) = gui {
            self.gui.get_or_insert_with(GuiState::default).merge(gui);
        }
    }
}

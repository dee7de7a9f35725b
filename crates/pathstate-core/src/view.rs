//! Reserved top-level views.

use std::{fmt, str::FromStr};

use serde::Serialize;

/// A reserved top-level view selected by a single keyword segment.
///
/// A root view always claims the whole path; nothing may follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RootView {
    About,
    Bigdata,
    Docs,
    Login,
    Logout,
    New,
    Store,
}

impl RootView {
    /// Every root view, in keyword order.
    pub const ALL: [RootView; 7] = [
        RootView::About,
        RootView::Bigdata,
        RootView::Docs,
        RootView::Login,
        RootView::Logout,
        RootView::New,
        RootView::Store,
    ];

    /// Returns the path keyword selecting this view.
    pub fn as_str(&self) -> &'static str {
        match self {
            RootView::About => "about",
            RootView::Bigdata => "bigdata",
            RootView::Docs => "docs",
            RootView::Login => "login",
            RootView::Logout => "logout",
            RootView::New => "new",
            RootView::Store => "store",
        }
    }

    /// Looks up the view for an exact, case-sensitive keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|view| view.as_str() == keyword)
    }
}

impl fmt::Display for RootView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a root view keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRootView(pub String);

impl fmt::Display for UnknownRootView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown root view `{}`", self.0)
    }
}

impl std::error::Error for UnknownRootView {}

impl FromStr for RootView {
    type Err = UnknownRootView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(s).ok_or_else(|| UnknownRootView(s.to_string()))
    }
}

//! Error codes for the Pathstate diagnostic system.
//!
//! Error codes are organized by the section that rejected the path:
//! - `E1xx` - Root section
//! - `E2xx` - Store section
//! - `E3xx` - GUI section
//! - `E4xx` - User section

use std::fmt;

/// Error codes for categorizing structural path errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Root Errors (E1xx)
    // =========================================================================
    /// Segments after a root view.
    ///
    /// A reserved root keyword claims the whole path; nothing may follow it.
    E100,

    // =========================================================================
    // Store Errors (E2xx)
    // =========================================================================
    /// Malformed store reference.
    ///
    /// The segments do not form `name`, `name/series`, `name/revision` or
    /// `name/series/revision`.
    E200,

    // =========================================================================
    // GUI Errors (E3xx)
    // =========================================================================
    /// Malformed panel section.
    ///
    /// The panel-prefix marker must be followed by a known panel marker.
    E300,

    // =========================================================================
    // User Errors (E4xx)
    // =========================================================================
    /// Malformed owner section.
    ///
    /// The owner-prefix marker was not followed by an owner, or a profile was
    /// followed by segments it cannot take.
    E400,

    /// Malformed store reference inside an owner section.
    ///
    /// The segments after the owner are neither a profile suffix, an
    /// environment, nor a store reference.
    E401,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E200 => "E200",
            ErrorCode::E300 => "E300",
            ErrorCode::E400 => "E400",
            ErrorCode::E401 => "E401",
        }
    }

    /// Returns the contract message reported for this code.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "invalid root path.",
            ErrorCode::E200 => "invalid store path.",
            ErrorCode::E300 => "invalid GUI path.",
            ErrorCode::E400 => "invalid user path.",
            ErrorCode::E401 => "invalid user store path.",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "segments after root view",
            ErrorCode::E200 => "malformed store reference",
            ErrorCode::E300 => "malformed panel section",
            ErrorCode::E400 => "malformed owner section",
            ErrorCode::E401 => "malformed owner store reference",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

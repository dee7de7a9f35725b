//! Error and diagnostic system for the Pathstate parser.
//!
//! Structural problems in a location path are reported as a [`Diagnostic`]:
//! - an [`ErrorCode`] identifying which section rejected the path
//! - the verbatim contract message (e.g. `invalid user path.`)
//! - labeled spans into the raw path
//! - optional help text
//!
//! The message is part of the external contract: consumers match on it
//! verbatim, so [`Diagnostic`]'s `Display` prints exactly the message.
//!
//! # Example
//!
//! ```
//! # use pathstate_parser::error::{Diagnostic, ErrorCode};
//! # use pathstate_parser::Span;
//! let diag = Diagnostic::new(ErrorCode::E400)
//!     .with_label(Span::new(19..20), "expected an owner after `u`")
//!     .with_help("use `/u/<owner>`");
//!
//! assert_eq!(diag.to_string(), "invalid user path.");
//! ```

mod diagnostic;
mod error_code;
mod label;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;

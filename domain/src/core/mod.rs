//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated, bounded customer question
//! - [`error_kind::ErrorKind`]: the closed set of user-facing failure kinds
//! - [`error::HelpdeskError`]: a failure tagged with its [`ErrorKind`](error_kind::ErrorKind)
//! - [`severity::Severity`]: log severity shared by error kinds and validation issues

pub mod error;
pub mod error_kind;
pub mod question;
pub mod severity;
pub mod string;

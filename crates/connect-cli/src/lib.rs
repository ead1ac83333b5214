//! # connect-cli: Command-Line Checks for Connect API Documents
//!
//! Provides the `connect` binary:
//!
//! - `connect check`: decode a JSON/YAML document as a named model and
//!   print its canonical wire form, or the first validation failure.
//! - `connect models`: list the models `check` accepts.
//!
//! Handlers return the process exit code: 0 on success, 1 when a document
//! fails validation. Operational failures (unreadable files, unknown model
//! names, bad configuration) surface as `Err` and exit with 2.

pub mod check;
pub mod config;
pub mod document;
pub mod models;

/// Exit code for operational errors.
pub const EXIT_OPERATIONAL_ERROR: u8 = 2;

//! # scriptman-core
//!
//! Build-time help-text extraction for script-based CLIs.
//!
//! The pipeline has three stages, run strictly in sequence:
//!
//! 1. [`discover::discover_scripts`] scans a directory for files with the
//!    configured extension and derives a script identifier from each.
//! 2. [`extract::extract_help`] runs each script synchronously with `-h`,
//!    captures stdout, substitutes the launcher's self-reference with the
//!    published command name and strips ANSI escapes.
//! 3. [`mapping::generate`] assembles the cleaned texts into an ordered
//!    [`DocumentationMapping`], serialized as a JSON object for the docs
//!    site build to inject as a constant.
//!
//! Everything is synchronous and single-threaded; this is a one-shot
//! build step, not a service. Errors are fail-fast: a bad directory or
//! one unlaunchable script aborts the whole run, because stale or
//! partial docs are worse than a failed build.

pub mod ansi;
pub mod config;
pub mod discover;
mod error;
pub mod extract;
pub mod mapping;

pub use ansi::strip_ansi;
pub use config::Config;
pub use discover::{discover_scripts, ScriptDescriptor};
pub use error::{Error, Result};
pub use extract::{extract_help, HelpText, HELP_FLAG};
pub use mapping::{generate, DocumentationMapping};

//! Regenerate quip's README from the client's current help output.
//!
//! The flow is linear: capture the help text from a subprocess, substitute
//! it into the embedded README template, and atomically replace the
//! destination file with the rendered document.

pub mod error;
pub mod help;
pub mod readme;
pub mod template;

pub use self::error::Error;

/// A `Result` alias where the `Err` case is `quipdoc::Error`.
pub type Result<T> = std::result::Result<T, Error>;

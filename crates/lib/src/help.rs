use std::fmt;
use std::process::Command;
use std::str;

use itertools::Itertools;
use tracing::debug;

use crate::Error;

/// Usage output captured from the client binary, trimmed of surrounding
/// whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpText(String);

impl HelpText {
    /// Create help text from a raw string, trimming surrounding whitespace.
    pub fn new<S: AsRef<str>>(raw: S) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// Run a command and capture its standard output as help text.
    ///
    /// Blocks until the command terminates. Only standard output becomes
    /// part of the text; standard error is excerpted into the error message
    /// when the command fails.
    pub fn capture<I, S>(command: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let argv: Vec<_> = command.into_iter().map(|s| s.as_ref().to_string()).collect();
        let Some((exe, args)) = argv.split_first() else {
            return Err(Error::InvalidValue("empty help command".to_string()));
        };

        debug!("running: {}", argv.iter().join(" "));
        let output = Command::new(exe)
            .args(args)
            .output()
            .map_err(|e| Error::Subprocess(format!("failed running {exe}: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let msg = if stderr.is_empty() {
                format!("{exe} failed ({})", output.status)
            } else {
                format!("{exe} failed ({}): {stderr}", output.status)
            };
            return Err(Error::Subprocess(msg));
        }

        match str::from_utf8(&output.stdout) {
            Ok(s) => Ok(Self::new(s)),
            Err(_) => Err(Error::InvalidValue(format!(
                "{exe} returned non-UTF-8 output"
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HelpText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

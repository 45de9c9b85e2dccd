use std::fmt;

use tracing::warn;

/// Number of newlines the run identification block must contain (three lines).
pub const RUN_IDENTIFICATION_NEWLINES: usize = 2;

/// Pads `text` with trailing newlines until it contains `required` of them.
///
/// Text with more newlines than required is returned unchanged; the extra
/// lines are ignored by the GUI that reads the field, which is logged.
#[must_use]
pub fn ensure_newlines(field: &str, text: &str, required: usize) -> String {
    let newlines = text.matches('\n').count();
    let mut out = text.to_owned();

    if newlines < required {
        let added = required - newlines;
        warn!(field, added, "added lines to reach the required line count");
        out.push_str(&"\n".repeat(added));
    } else if newlines > required {
        warn!(
            field,
            lines = newlines + 1,
            max_lines = required + 1,
            "lines beyond the maximum will be ignored in the GUI"
        );
    }
    out
}

/// Free-text run identification, always holding at least three lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunIdentification(String);

impl RunIdentification {
    /// Creates a run identification, padding it to the required line count.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self(ensure_newlines(
            "run_identification",
            text,
            RUN_IDENTIFICATION_NEWLINES,
        ))
    }

    /// The normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RunIdentification {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Display for RunIdentification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

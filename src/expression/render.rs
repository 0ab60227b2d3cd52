//! Rendering and compilation.
//!
//! ```text
//! Expression ── pattern() ──▶ "<prefix><body><suffix>"            (engine source)
//!            ── get_regex() ─▶ "/<prefix><body><suffix>/<letters>" (display form)
//!            ── compile() ───▶ regex::Regex  (m, i passed as builder flags)
//! ```
//!
//! All three are pure: they read the state and never touch it, so two calls
//! without an intervening verb give the same result.

use super::Expression;
use super::modifiers::Modifiers;
use super::sanitize::DELIMITER;
use crate::error::{Error, Result};
use regex::{Regex, RegexBuilder};
use std::fmt;

impl Expression {
    /// The pattern source handed to the engine, without delimiters or flags.
    pub fn pattern(&self) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.body.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(&self.body);
        out.push_str(&self.suffix);
        out
    }

    /// The delimited form, e.g. `/^(?:a)$/m`.
    pub fn get_regex(&self) -> String {
        format!("{DELIMITER}{}{DELIMITER}{}", self.pattern(), self.modifiers.letters())
    }

    /// Compile the current state into an engine regex.
    ///
    /// The global modifier is not an engine flag and is ignored here; see
    /// [`test`](Self::test) and [`replace`](Self::replace).
    pub fn compile(&self) -> Result<Regex> {
        let pattern = self.pattern();
        tracing::debug!(pattern = %pattern, modifiers = %self.modifiers.letters(), "compiling");

        RegexBuilder::new(&pattern)
            .case_insensitive(self.modifiers.contains(Modifiers::CASE_INSENSITIVE))
            .multi_line(self.modifiers.contains(Modifiers::MULTI_LINE))
            .build()
            .map_err(|source| Error::Engine { pattern, source })
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_regex())
    }
}

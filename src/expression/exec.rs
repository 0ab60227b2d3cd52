//! `test` and `replace`.
//!
//! The engine has no "global" flag. Instead of passing one through, the
//! executor branches on [`Modifiers::GLOBAL`] itself:
//!
//! ```text
//!            GLOBAL set                     GLOBAL absent
//! test     ─ count find_iter matches      ─ is_match
//! replace  ─ replace every match          ─ replace the first `replace_limit`
//! ```
//!
//! Both take `&self`, so the expression is identical before and after.

use super::Expression;
use super::modifiers::Modifiers;
use crate::error::Result;

/// Result of [`Expression::test`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    /// Non-global test: whether the pattern matched anywhere.
    Matched(bool),
    /// Global test: number of non-overlapping matches.
    Count(usize),
}

impl TestOutcome {
    /// Truthiness of the outcome: a match, or a non-zero count.
    pub fn is_match(&self) -> bool {
        match *self {
            TestOutcome::Matched(matched) => matched,
            TestOutcome::Count(count) => count > 0,
        }
    }

    /// Number of matches; a non-global match counts as one.
    pub fn count(&self) -> usize {
        match *self {
            TestOutcome::Matched(matched) => usize::from(matched),
            TestOutcome::Count(count) => count,
        }
    }
}

impl From<TestOutcome> for bool {
    fn from(outcome: TestOutcome) -> Self {
        outcome.is_match()
    }
}

impl Expression {
    /// Test `subject` against the current pattern.
    pub fn test(&self, subject: &str) -> Result<TestOutcome> {
        let re = self.compile()?;
        if self.modifiers.contains(Modifiers::GLOBAL) {
            return Ok(TestOutcome::Count(re.find_iter(subject).count()));
        }
        Ok(TestOutcome::Matched(re.is_match(subject)))
    }

    /// Shorthand for `test(subject)?.is_match()`.
    pub fn is_match(&self, subject: &str) -> Result<bool> {
        Ok(self.test(subject)?.is_match())
    }

    /// Replace matches in `subject` with `replacement`.
    ///
    /// `replacement` supports the engine's capture references (`$1`,
    /// `${name}`).
    pub fn replace(&self, subject: &str, replacement: &str) -> Result<String> {
        let re = self.compile()?;
        let out = if self.modifiers.contains(Modifiers::GLOBAL) {
            re.replace_all(subject, replacement)
        } else {
            re.replacen(subject, self.replace_limit, replacement)
        };
        Ok(out.into_owned())
    }
}

//! Matching modifiers.
//!
//! Modifiers are stored as a `bitflags` set, so membership is all that
//! matters: adding a flag twice or removing an absent one is a no-op.
//!
//! Only `MULTI_LINE` and `CASE_INSENSITIVE` are real engine flags. `GLOBAL`
//! ("match everything") has no engine counterpart; it is interpreted by the
//! executor (`exec.rs`) and is never passed to `regex::RegexBuilder`.
//!
//! ## Letter encoding
//!
//! The rendered form uses one letter per flag, always in the order `m`, `i`,
//! `g` so that golden-string comparisons are stable across calls.

use crate::error::{Error, Result};

bitflags::bitflags! {
    /// Active matching modes of an [`Expression`](crate::Expression).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// `^`/`$` match at line boundaries (`m`).
        const MULTI_LINE       = 1 << 0;
        /// Case-insensitive matching (`i`).
        const CASE_INSENSITIVE = 1 << 1;
        /// Test/replace every match instead of the first `replace_limit` (`g`).
        const GLOBAL           = 1 << 2;
    }
}

/// Render order of the modifier letters.
const LETTERS: [(Modifiers, char); 3] =
    [(Modifiers::MULTI_LINE, 'm'), (Modifiers::CASE_INSENSITIVE, 'i'), (Modifiers::GLOBAL, 'g')];

impl Modifiers {
    /// Parse a string of modifier letters such as `"gm"`.
    ///
    /// Whitespace is ignored, repeated letters are harmless. Any other
    /// character fails with [`Error::UnknownModifier`].
    pub fn from_letters(letters: &str) -> Result<Self> {
        let mut out = Modifiers::empty();
        for c in letters.chars().filter(|c| !c.is_whitespace()) {
            out |= Self::from_letter(c).ok_or(Error::UnknownModifier(c))?;
        }
        Ok(out)
    }

    /// Map a single letter to its flag.
    pub fn from_letter(letter: char) -> Option<Self> {
        LETTERS.iter().find(|(_, l)| *l == letter.to_ascii_lowercase()).map(|(m, _)| *m)
    }

    /// Letters of the active flags, in render order.
    pub fn letters(&self) -> String {
        LETTERS.iter().filter(|(m, _)| self.contains(*m)).map(|(_, l)| *l).collect()
    }
}

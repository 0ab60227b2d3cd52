//! Baseline configuration for [`Expression::clean`](crate::Expression::clean)
//! and [`Expression::with_options`](crate::Expression::with_options).

use super::modifiers::Modifiers;

/// The state an expression is reset to.
///
/// Every field has a default, and `clean` overwrites all of them: options
/// left at their default do *not* keep the previous value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOptions {
    pub prefixes: String,
    pub source: String,
    pub suffixes: String,
    pub modifiers: Modifiers,
    pub replace_limit: usize,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            prefixes: String::new(),
            source: String::new(),
            suffixes: String::new(),
            modifiers: Modifiers::MULTI_LINE | Modifiers::GLOBAL,
            replace_limit: 1,
        }
    }
}

impl CleanOptions {
    pub fn prefixes(mut self, prefixes: impl Into<String>) -> Self {
        self.prefixes = prefixes.into();
        self
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn suffixes(mut self, suffixes: impl Into<String>) -> Self {
        self.suffixes = suffixes.into();
        self
    }

    pub fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Substitutions performed by `replace` without the global modifier.
    /// Clamped to at least one when applied.
    pub fn replace_limit(mut self, limit: usize) -> Self {
        self.replace_limit = limit;
        self
    }
}

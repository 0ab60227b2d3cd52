//! Phrase resolution.
//!
//! A scenario phrase ("something but", "Start of line", "stopAtFirst") is
//! mapped to a [`Verb`] by scanning an ordered table of key phrases and
//! taking the first key that occurs in the lowercased input.
//!
//! ## Ordering is load-bearing
//!
//! Matching is a plain substring search, so a key that is contained in a
//! longer key shadows it if declared first. The built-in table therefore
//! lists `something but` before `something`, `any of` and `any case` before
//! `any`, `add modifier` before `add`, and so on. Scripts rely on this exact
//! resolution order; reordering the table changes behavior.
//!
//! ```text
//! "Anything But"  ──lowercase──▶ "anything but"
//!   anythingbut     ✗
//!   somethingbut    ✗
//!   something but   ✗
//!   something       ✗
//!   anything but    ✓  ──▶ Verb::AnythingBut
//! ```

use super::verb::Verb;
use once_cell::sync::Lazy;

/// Maps a free-text phrase to a verb.
pub trait PhraseResolver {
    /// Resolve `phrase`, or `None` when no verb matches.
    fn resolve(&self, phrase: &str) -> Option<Verb>;
}

/// Built-in phrase keys, in resolution order.
const BUILTIN_PHRASES: &[(&str, Verb)] = &[
    ("anythingbut", Verb::AnythingBut),
    ("somethingbut", Verb::SomethingBut),
    ("something but", Verb::SomethingBut),
    ("something", Verb::Something),
    ("anything but", Verb::AnythingBut),
    ("anything", Verb::Anything),
    ("end", Verb::EndOfLine),
    ("end of line", Verb::EndOfLine),
    ("endofline", Verb::EndOfLine),
    ("find", Verb::Find),
    ("maybe", Verb::Maybe),
    ("start", Verb::StartOfLine),
    ("startofline", Verb::StartOfLine),
    ("start of line", Verb::StartOfLine),
    ("then", Verb::Then),
    ("anyof", Verb::AnyOf),
    ("any of", Verb::AnyOf),
    ("linebreak", Verb::LineBreak),
    ("line break", Verb::LineBreak),
    ("br", Verb::Br),
    ("range", Verb::Range),
    ("tab", Verb::Tab),
    ("word", Verb::Word),
    ("withanycase", Verb::WithAnyCase),
    ("with any case", Verb::WithAnyCase),
    ("any case", Verb::WithAnyCase),
    ("any", Verb::Any),
    ("stopatfirst", Verb::StopAtFirst),
    ("stop at first", Verb::StopAtFirst),
    ("stop first", Verb::StopAtFirst),
    ("searchoneline", Verb::SearchOneLine),
    ("search one line", Verb::SearchOneLine),
    ("replace", Verb::Replace),
    ("add modifier", Verb::AddModifier),
    ("addmodifier", Verb::AddModifier),
    ("add", Verb::Add),
    ("remove modifier", Verb::RemoveModifier),
    ("removemodifier", Verb::RemoveModifier),
    ("limit", Verb::Limit),
    ("multiple", Verb::Multiple),
    ("or", Verb::Or),
];

static BUILTIN: Lazy<PhraseTable> = Lazy::new(|| PhraseTable::new(BUILTIN_PHRASES.iter().copied()));

/// Ordered `(key phrase, verb)` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseTable {
    entries: Vec<(String, Verb)>,
}

impl PhraseTable {
    /// Build a table from `entries`, keeping their order. Keys are lowercased.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Verb)>,
        S: AsRef<str>,
    {
        let entries = entries.into_iter().map(|(key, verb)| (key.as_ref().to_lowercase(), verb)).collect();
        PhraseTable { entries }
    }

    /// The shared built-in table.
    pub fn builtin() -> &'static PhraseTable {
        &BUILTIN
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, Verb)> + '_ {
        self.entries.iter().map(|(key, verb)| (key.as_str(), *verb))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PhraseTable {
    fn default() -> Self {
        PhraseTable::builtin().clone()
    }
}

impl PhraseResolver for PhraseTable {
    fn resolve(&self, phrase: &str) -> Option<Verb> {
        let lower = phrase.to_lowercase();
        self.entries.iter().find(|(key, _)| lower.contains(key.as_str())).map(|(_, verb)| *verb)
    }
}

impl<R: PhraseResolver + ?Sized> PhraseResolver for &R {
    fn resolve(&self, phrase: &str) -> Option<Verb> {
        (**self).resolve(phrase)
    }
}

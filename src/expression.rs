//! Expression assembly.
//!
//! An [`Expression`] accumulates three strings and a modifier set:
//!
//! ```text
//!  prefix        body                                   suffix   modifiers
//! ┌──────┐┌───────────────────────────────────────────┐┌──────┐ ┌───────┐
//! │  ^   ││(?:http)(?:s)?(?::\/\/)(?:www\.)?(?:[^ ]*) ││  $   │ │ m i g │
//! └──────┘└───────────────────────────────────────────┘└──────┘ └───────┘
//!    │                     ▲                              │
//!    │          verbs append fragments here               │
//!    └── anchors / alternation group markers ─────────────┘
//! ```
//!
//! Each verb appends one fragment to the body (or edits prefix, suffix or
//! modifiers) and hands back `&mut Self`, so calls chain:
//!
//! ```
//! use verbex::Expression;
//!
//! let mut url = Expression::new();
//! url.start_of_line().then("http").maybe("s").then("://").maybe("www.").anything_but(" ").end_of_line();
//!
//! assert!(url.is_match("https://www.github.com").unwrap());
//! assert!(!url.is_match("htps://github.com").unwrap());
//! ```
//!
//! ## Responsibilities by module
//!
//! - `sanitize.rs`: literal escaping, quantifier detection.
//! - `modifiers.rs`: the `Modifiers` bitflag set and its letter encoding.
//! - `options.rs`: `CleanOptions`, the baseline used by `clean`.
//! - `render.rs`: `/prefix body suffix/letters` rendering and compilation.
//! - `exec.rs`: `test` and `replace`, including the emulated global flag.
//!
//! ## Invariants
//!
//! - Literal verbs (`then`, `maybe`, `anything_but`, `something_but`,
//!   `range`, `multiple`, `or`) sanitize caller text. `add` and `any_of`
//!   don't: they are the raw escape hatches.
//! - `last_fragment` always holds the fragment appended by the most recent
//!   body-appending verb. Only `limit` reads it.

#[path = "expression/exec.rs"]
mod exec;
#[path = "expression/modifiers.rs"]
mod modifiers;
#[path = "expression/options.rs"]
mod options;
#[path = "expression/render.rs"]
mod render;
#[path = "expression/sanitize.rs"]
mod sanitize;
#[cfg(test)]
#[path = "expression/tests.rs"]
mod tests;

pub use exec::TestOutcome;
pub use modifiers::Modifiers;
pub use options::CleanOptions;
pub use sanitize::sanitize;

use crate::error::{Error, Result};
use sanitize::ends_with_unbounded_quantifier;

/// Start-of-line anchor placed in the prefix.
const START_ANCHOR: &str = "^";
/// End-of-line anchor placed in the suffix.
const END_ANCHOR: &str = "$";

/// A regular expression under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    prefix: String,
    body: String,
    suffix: String,
    modifiers: Modifiers,
    replace_limit: usize,
    last_fragment: Option<String>,
}

impl Default for Expression {
    fn default() -> Self {
        Self::new()
    }
}

impl Expression {
    /// An empty expression with multi-line matching and a replace limit of one.
    pub fn new() -> Self {
        Expression {
            prefix: String::new(),
            body: String::new(),
            suffix: String::new(),
            modifiers: Modifiers::MULTI_LINE,
            replace_limit: 1,
            last_fragment: None,
        }
    }

    /// An expression initialised from `options`, exactly as `clean(options)`
    /// would leave it.
    pub fn with_options(options: CleanOptions) -> Self {
        let mut expr = Self::new();
        expr.clean(options);
        expr
    }

    /// Escape `value` for literal use. See [`sanitize()`].
    pub fn sanitize(value: &str) -> std::borrow::Cow<'_, str> {
        sanitize(value)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn replace_limit(&self) -> usize {
        self.replace_limit
    }

    // --- Raw fragments -------------------------------------------------------

    /// Append `value` to the body verbatim. Nothing is escaped.
    pub fn add(&mut self, value: &str) -> &mut Self {
        tracing::trace!(fragment = value, "append");
        self.body.push_str(value);
        self.last_fragment = Some(value.to_string());
        self
    }

    // --- Anchors -------------------------------------------------------------

    /// Anchor (or stop anchoring) the match at the start of a line.
    pub fn start_of_line(&mut self) -> &mut Self {
        self.set_start_of_line(true)
    }

    pub fn set_start_of_line(&mut self, enable: bool) -> &mut Self {
        self.prefix = if enable { START_ANCHOR.to_string() } else { String::new() };
        self
    }

    /// Anchor (or stop anchoring) the match at the end of a line.
    pub fn end_of_line(&mut self) -> &mut Self {
        self.set_end_of_line(true)
    }

    pub fn set_end_of_line(&mut self, enable: bool) -> &mut Self {
        self.suffix = if enable { END_ANCHOR.to_string() } else { String::new() };
        self
    }

    // --- Literals ------------------------------------------------------------

    /// Match `value` literally.
    pub fn then(&mut self, value: &str) -> &mut Self {
        let fragment = format!("(?:{})", sanitize(value));
        self.add(&fragment)
    }

    /// Alias of [`then`](Self::then).
    pub fn find(&mut self, value: &str) -> &mut Self {
        self.then(value)
    }

    /// Match `value` literally, zero or one time.
    pub fn maybe(&mut self, value: &str) -> &mut Self {
        let fragment = format!("(?:{})?", sanitize(value));
        self.add(&fragment)
    }

    /// Any run of characters, possibly empty.
    pub fn anything(&mut self) -> &mut Self {
        self.add("(?:.*)")
    }

    /// Any run of characters not in `chars`, possibly empty.
    ///
    /// An empty `chars` renders the empty class `[^]`, which the engine
    /// rejects: `compile`, `test` and `replace` then fail with
    /// [`Error::Engine`].
    pub fn anything_but(&mut self, chars: &str) -> &mut Self {
        let fragment = format!("(?:[^{}]*)", sanitize(chars));
        self.add(&fragment)
    }

    /// Any non-empty run of characters.
    pub fn something(&mut self) -> &mut Self {
        self.add("(?:.+)")
    }

    /// Any non-empty run of characters not in `chars`.
    ///
    /// Like [`anything_but`](Self::anything_but), an empty `chars` only
    /// fails once the pattern is compiled.
    pub fn something_but(&mut self, chars: &str) -> &mut Self {
        let fragment = format!("(?:[^{}]+)", sanitize(chars));
        self.add(&fragment)
    }

    // --- Structural helpers --------------------------------------------------

    /// `\n` or `\r\n`.
    pub fn line_break(&mut self) -> &mut Self {
        self.add(r"(?:\n|(\r\n))")
    }

    /// Alias of [`line_break`](Self::line_break).
    pub fn br(&mut self) -> &mut Self {
        self.line_break()
    }

    pub fn tab(&mut self) -> &mut Self {
        self.add(r"\t")
    }

    /// One or more word characters.
    pub fn word(&mut self) -> &mut Self {
        self.add(r"\w+")
    }

    /// A character class holding exactly `chars`.
    ///
    /// `chars` is inserted as-is so callers can write ranges (`a-z`) or
    /// escapes directly. Malformed class syntax only surfaces when the
    /// pattern is compiled.
    pub fn any_of(&mut self, chars: &str) -> &mut Self {
        let fragment = format!("[{chars}]");
        self.add(&fragment)
    }

    /// Alias of [`any_of`](Self::any_of).
    pub fn any(&mut self, chars: &str) -> &mut Self {
        self.any_of(chars)
    }

    /// A character class built from `(from, to)` pairs.
    ///
    /// ```
    /// let mut hex = verbex::Expression::new();
    /// hex.range([0, 9]).unwrap().range(['a', 'f']).unwrap();
    /// assert_eq!(hex.body(), "[0-9][a-f]");
    ///
    /// let mut both = verbex::Expression::new();
    /// both.range(["0", "9", "a", "f"]).unwrap();
    /// assert_eq!(both.body(), "[0-9a-f]");
    /// ```
    ///
    /// Fails with [`Error::ArgumentCount`] on an odd number of bounds; the
    /// expression is left untouched in that case.
    pub fn range<I>(&mut self, bounds: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: ToString,
    {
        let bounds: Vec<String> = bounds.into_iter().map(|b| b.to_string()).collect();
        if bounds.len() % 2 != 0 {
            return Err(Error::ArgumentCount { count: bounds.len() });
        }

        let mut class = String::from("[");
        for pair in bounds.chunks_exact(2) {
            class.push_str(&sanitize(&pair[0]));
            class.push('-');
            class.push_str(&sanitize(&pair[1]));
        }
        class.push(']');

        Ok(self.add(&class))
    }

    // --- Quantifiers ---------------------------------------------------------

    /// Bound the repetitions of the last fragment.
    ///
    /// ```text
    /// max == 0      -> {min}
    /// max <  min    -> {min,}
    /// otherwise     -> {min,max}
    /// ```
    ///
    /// When the last fragment already ends in `+` or `*` the bound replaces
    /// that quantifier instead of stacking a second one, so
    /// `multiple("d").limit(5, 6)` renders `d{5,6}`.
    pub fn limit(&mut self, min: usize, max: usize) -> &mut Self {
        let bound = if max == 0 {
            format!("{{{min}}}")
        } else if max < min {
            format!("{{{min},}}")
        } else {
            format!("{{{min},{max}}}")
        };

        let rewrites_quantifier = self.last_fragment.as_deref().is_some_and(ends_with_unbounded_quantifier);
        if rewrites_quantifier {
            // The last fragment is a suffix of the body, so its trailing
            // quantifier is the body's last character.
            tracing::debug!(bound = %bound, "rewriting trailing quantifier");
            self.body.pop();
            self.body.push_str(&bound);
            if let Some(last) = self.last_fragment.as_mut() {
                last.pop();
                last.push_str(&bound);
            }
            return self;
        }

        self.add(&bound)
    }

    /// Exactly `count` repetitions of the last fragment.
    pub fn limit_exact(&mut self, count: usize) -> &mut Self {
        self.limit(count, 0)
    }

    /// `value`, quantified with `+` unless it already ends in `+` or `*`.
    pub fn multiple(&mut self, value: &str) -> &mut Self {
        let mut fragment = sanitize(value).into_owned();
        if !ends_with_unbounded_quantifier(&fragment) {
            fragment.push('+');
        }
        self.add(&fragment)
    }

    // --- Alternation ---------------------------------------------------------

    /// Close the current alternative and open a new one starting with `value`.
    ///
    /// ```
    /// let mut foo_or_bar = verbex::Expression::new();
    /// foo_or_bar.find("foo").or("bar");
    /// assert_eq!(foo_or_bar.get_regex(), "/(?:(?:foo))|(?:bar)/m");
    /// ```
    pub fn or(&mut self, value: &str) -> &mut Self {
        if !self.prefix.contains('(') {
            self.prefix.push_str("(?:");
        }
        if !self.suffix.contains(')') {
            self.suffix.push(')');
        }

        self.add(")|(?:");
        if !value.is_empty() {
            let fragment = sanitize(value).into_owned();
            self.add(&fragment);
        }
        self
    }

    // --- Modifiers -----------------------------------------------------------

    /// Set `modifier`. Already-present flags are left alone.
    pub fn add_modifier(&mut self, modifier: Modifiers) -> &mut Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Clear `modifier`. Absent flags are left alone.
    pub fn remove_modifier(&mut self, modifier: Modifiers) -> &mut Self {
        self.modifiers.remove(modifier);
        self
    }

    fn toggle_modifier(&mut self, modifier: Modifiers, enable: bool) -> &mut Self {
        if enable { self.add_modifier(modifier) } else { self.remove_modifier(modifier) }
    }

    /// Match regardless of case.
    pub fn with_any_case(&mut self) -> &mut Self {
        self.set_any_case(true)
    }

    pub fn set_any_case(&mut self, enable: bool) -> &mut Self {
        self.toggle_modifier(Modifiers::CASE_INSENSITIVE, enable)
    }

    /// Toggle the global modifier.
    ///
    /// The name is historical: *enabling* it makes `test` count every match
    /// and `replace` substitute every match; disabling it limits `replace`
    /// to [`replace_limit`](Self::replace_limit) substitutions.
    pub fn stop_at_first(&mut self) -> &mut Self {
        self.set_stop_at_first(true)
    }

    pub fn set_stop_at_first(&mut self, enable: bool) -> &mut Self {
        self.toggle_modifier(Modifiers::GLOBAL, enable)
    }

    /// Toggle multi-line matching (`^`/`$` match at every line).
    pub fn search_one_line(&mut self) -> &mut Self {
        self.set_search_one_line(true)
    }

    pub fn set_search_one_line(&mut self, enable: bool) -> &mut Self {
        self.toggle_modifier(Modifiers::MULTI_LINE, enable)
    }

    // --- Reset ---------------------------------------------------------------

    /// Overwrite the whole state from `options`.
    pub fn clean(&mut self, options: CleanOptions) -> &mut Self {
        if options.replace_limit == 0 {
            tracing::warn!("replace limit of 0 clamped to 1");
        }

        self.prefix = options.prefixes;
        self.body = options.source;
        self.suffix = options.suffixes;
        self.modifiers = options.modifiers;
        self.replace_limit = options.replace_limit.max(1);
        self.last_fragment = None;
        self
    }
}

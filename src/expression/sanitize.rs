//! Literal escaping.
//!
//! Every piece of caller text that a verb treats as a *literal* goes through
//! [`sanitize`] before it reaches the body. Structural text (anchors, group
//! markers, `add` fragments, `any_of` classes) never does.

use std::borrow::Cow;

/// Delimiter used by the rendered `/…/flags` form.
pub(crate) const DELIMITER: char = '/';

/// Escape `value` so that it matches itself verbatim inside a pattern.
///
/// Metacharacters are escaped with [`regex::escape`]; the render delimiter is
/// escaped as well so the `/…/` form stays unambiguous. Empty input is
/// returned unchanged.
///
/// ```
/// assert_eq!(verbex::sanitize("a.b"), r"a\.b");
/// assert_eq!(verbex::sanitize("://"), r":\/\/");
/// assert_eq!(verbex::sanitize(""), "");
/// ```
pub fn sanitize(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        return Cow::Borrowed(value);
    }

    let escaped = regex::escape(value);
    if escaped.contains(DELIMITER) {
        Cow::Owned(escaped.replace(DELIMITER, r"\/"))
    } else if escaped == value {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(escaped)
    }
}

/// True when `fragment` ends in an unbounded quantifier (`+` or `*`) that is
/// not itself escaped.
pub(crate) fn ends_with_unbounded_quantifier(fragment: &str) -> bool {
    let Some(stripped) = fragment.strip_suffix(['+', '*']) else {
        return false;
    };
    let backslashes = stripped.chars().rev().take_while(|&c| c == '\\').count();
    backslashes % 2 == 0
}

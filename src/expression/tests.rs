use crate::error::Error;
use crate::{CleanOptions, Expression, Modifiers, TestOutcome};

const MD5_EMPTY: &str = "d41d8cd98f00b204e9800998ecf8427e";
const SHA1_EMPTY: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

fn url_pattern() -> Expression {
    let mut regex = Expression::new();
    regex.start_of_line().then("http").maybe("s").then("://").maybe("www.").anything_but(" ").end_of_line();
    regex
}

fn url_pattern_aliased() -> Expression {
    let mut regex = Expression::new();
    regex.start_of_line().find("http").maybe("s").find("://").maybe("www.").anything_but(" ").end_of_line();
    regex
}

/// Assert `(subject, expected)` pairs against `regex.is_match`.
fn assert_cases(regex: &Expression, cases: &[(&str, bool)]) {
    for (subject, expected) in cases {
        assert_eq!(
            regex.is_match(subject).unwrap(),
            *expected,
            "{} on {:?} should be {}",
            regex.get_regex(),
            subject,
            expected
        );
    }
}

#[test]
fn url_examples_matching() {
    let valid = [
        "http://github.com",
        "http://www.github.com",
        "https://github.com",
        "https://www.github.com",
        "https://github.com/blog",
        "https://foobar.github.com",
    ];
    let invalid = [" http://github.com", "foo", "htps://github.com", "http:/github.com", "https://github.com /blog"];

    for regex in [url_pattern(), url_pattern_aliased()] {
        for url in valid {
            assert!(regex.is_match(url).unwrap(), "{} should match {url:?}", regex.get_regex());
        }
        for url in invalid {
            assert!(!regex.is_match(url).unwrap(), "{} should not match {url:?}", regex.get_regex());
        }
    }
}

#[test]
fn test_returns_bool_or_count() {
    let mut regex = Expression::new();
    regex.find("regex");

    assert_eq!(regex.test("testing regex string").unwrap(), TestOutcome::Matched(true));
    assert_eq!(regex.test("testing string").unwrap(), TestOutcome::Matched(false));

    regex.stop_at_first();

    assert_eq!(regex.test("testing regex string").unwrap(), TestOutcome::Count(1));
    assert!(!regex.test("testing string").unwrap().is_match());
    assert!(regex.test("regex and regex").unwrap().count() >= 2);
}

#[test]
fn literal_text_is_escaped() {
    let mut regex = Expression::new();
    regex.then("a.b");

    assert_eq!(regex.body(), r"(?:a\.b)");
    assert_cases(&regex, &[("a.b", true), ("axb", false)]);
}

#[test]
fn then_after_start_of_line() {
    let mut regex = Expression::new();
    regex.start_of_line().then("a").end_of_line();

    assert_cases(&regex, &[("a", true), ("ba", false), ("ab", false)]);
}

#[test]
fn then_somewhere() {
    let mut regex = Expression::new();
    regex.set_start_of_line(false).then("a").set_end_of_line(false);

    assert_cases(&regex, &[("a", true), ("ba", true)]);
}

#[test]
fn anything_matches_any_line() {
    let mut regex = Expression::new();
    regex.start_of_line().anything().end_of_line();

    for needle in ["a", "foo", "bar", "!", " dfs fdslf sdlfk ", "t ( - _ - t )"] {
        assert!(regex.is_match(needle).unwrap(), "anything should match {needle:?}");
    }
}

#[test]
fn anything_but() {
    let mut regex = Expression::new();
    regex.start_of_line().anything_but("a").end_of_line();
    assert_cases(&regex, &[("bcdefg h I A", true), ("a", false), ("fooa", false)]);

    let mut regex = Expression::new();
    regex.start_of_line().anything_but("[").end_of_line();
    assert_cases(&regex, &[("abcd", true), (r"ab\cd", true), ("ab[cd", false), ("[", false), (r"\[", false)]);
}

#[test]
fn empty_negated_class_fails_at_compile_time() {
    let mut anything = Expression::new();
    anything.anything_but("");
    let mut something = Expression::new();
    something.something_but("");

    for (regex, pattern) in [(anything, "(?:[^]*)"), (something, "(?:[^]+)")] {
        assert_eq!(regex.body(), pattern);
        match regex.compile() {
            Err(Error::Engine { pattern: rejected, .. }) => assert_eq!(rejected, pattern),
            other => panic!("{pattern} should not compile, got {other:?}"),
        }
        assert!(matches!(regex.is_match("x"), Err(Error::Engine { .. })), "{pattern}");
    }
}

#[test]
fn something() {
    let mut regex = Expression::new();
    regex.start_of_line().something().end_of_line();
    assert_cases(&regex, &[("foobar", true), ("foobar!", true), ("foo bar", true), ("", false)]);
}

#[test]
fn something_but() {
    let mut regex = Expression::new();
    regex.start_of_line().something_but("a").end_of_line();
    assert_cases(
        &regex,
        &[
            ("foobr", true),
            ("foobr!", true),
            ("foo br", true),
            ("a", false),
            ("bar", false),
            ("foo bar", false),
            ("", false),
        ],
    );
}

#[test]
fn line_break_and_br() {
    let mut br = Expression::new();
    br.start_of_line().something().br().something().end_of_line();

    let mut line_break = Expression::new();
    line_break.start_of_line().something().line_break().something().end_of_line();

    for regex in [br, line_break] {
        assert_cases(&regex, &[("foo\nbar", true), ("foo\r\nbar", true), ("foo bar", false)]);
    }
}

#[test]
fn tab() {
    let mut regex = Expression::new();
    regex.start_of_line().something().tab().something().end_of_line();
    assert_cases(&regex, &[("foo\tbar", true), ("foo bar", false)]);
}

#[test]
fn word() {
    let mut regex = Expression::new();
    regex.start_of_line().word().end_of_line();
    assert_cases(
        &regex,
        &[
            ("abcdefghijklmnopqrstuvwxyz0123456789_", true),
            ("ABCDEFGHIJKLMNOPQRSTUVWXYZ", true),
            ("a_c", true),
            ("a-b", false),
            ("a b", false),
            ("a!b", false),
        ],
    );
}

#[test]
fn any_and_any_of() {
    let mut any = Expression::new();
    any.start_of_line().any("a1M").end_of_line();

    let mut any_of = Expression::new();
    any_of.start_of_line().any_of("a1M").end_of_line();

    for regex in [any, any_of] {
        assert_cases(&regex, &[("a", true), ("1", true), ("M", true), ("b", false), ("", false), (" ", false)]);
    }
}

#[test]
fn any_of_is_not_sanitized() {
    let mut regex = Expression::new();
    regex.any_of("a-c");

    assert_eq!(regex.body(), "[a-c]");
    assert_cases(&regex, &[("b", true), ("-", false)]);
}

#[test]
fn get_regex_golden_strings() {
    let mut regex = Expression::new();
    regex.start_of_line().range([0, 9]).unwrap();
    regex.range(["a", "z", "A", "Z"]).unwrap();
    assert_eq!(regex.get_regex(), "/^[0-9][a-zA-Z]/m");

    let mut regex = Expression::new();
    regex.start_of_line().range(["0", "9", "a", "z", "A", "Z"]).unwrap().multiple("");
    assert_eq!(regex.get_regex(), "/^[0-9a-zA-Z]+/m");
    assert_eq!(regex.to_string(), "/^[0-9a-zA-Z]+/m");

    let mut regex = Expression::new();
    regex.start_of_line().multiple("regex");
    assert_eq!(regex.get_regex(), "/^regex+/m");
}

#[test]
fn range_rejects_odd_arguments_without_mutating() {
    let mut regex = Expression::new();
    regex.then("x");
    let before = regex.clone();

    match regex.range([1, 2, 3]) {
        Err(Error::ArgumentCount { count: 3 }) => {}
        other => panic!("expected ArgumentCount, got {other:?}"),
    }
    assert_eq!(regex, before);
}

#[test]
fn range_letters_and_digits() {
    let mut lower = Expression::new();
    lower.range(['a', 'z']).unwrap().multiple("");
    let mut lower_all = Expression::new();
    lower_all.start_of_line().range(['a', 'z']).unwrap().multiple("").end_of_line();

    assert_eq!(lower.get_regex(), "/[a-z]+/m");
    assert_eq!(lower_all.get_regex(), "/^[a-z]+$/m");
    assert_cases(&lower, &[("a", true), ("A", false), ("alphabet", true), ("Alphabet", true)]);
    assert_cases(&lower_all, &[("Alphabet", false)]);

    let mut upper = Expression::new();
    upper.range(['A', 'Z']).unwrap().multiple("");
    let mut upper_all = Expression::new();
    upper_all.start_of_line().range(['A', 'Z']).unwrap().multiple("").end_of_line();

    assert_eq!(upper.get_regex(), "/[A-Z]+/m");
    assert_eq!(upper_all.get_regex(), "/^[A-Z]+$/m");
    assert_cases(&upper, &[("A", true), ("a", false), ("alphabet", false), ("Alphabet", true), ("ALPHABET", true)]);
    assert_cases(&upper_all, &[("Alphabet", false), ("ALPHABET", true)]);

    let mut digits = Expression::new();
    digits.range([0, 9]).unwrap().multiple("");
    let mut digits_all = Expression::new();
    digits_all.start_of_line().range([0, 9]).unwrap().multiple("").end_of_line();

    assert_eq!(digits.get_regex(), "/[0-9]+/m");
    assert_eq!(digits_all.get_regex(), "/^[0-9]+$/m");
    assert_cases(&digits, &[("alphabet", false), ("0", true), ("123", true), ("1.23", true), ("£123", true)]);
    assert_cases(&digits_all, &[("123", true), ("1.23", false), ("£123", false)]);
}

#[test]
fn range_hexadecimal_digests() {
    let mut hex = Expression::new();
    hex.start_of_line().range(["0", "9", "a", "f"]).unwrap().multiple("").end_of_line();
    assert_eq!(hex.get_regex(), "/^[0-9a-f]+$/m");
    assert_cases(&hex, &[("alphabet", false), ("deadbeef", true), (MD5_EMPTY, true), (SHA1_EMPTY, true)]);

    let mut md5 = Expression::new();
    md5.start_of_line().range(["0", "9", "a", "f"]).unwrap().limit_exact(32).end_of_line();
    assert_eq!(md5.get_regex(), "/^[0-9a-f]{32}$/m");
    assert_cases(&md5, &[("alphabet", false), ("deadbeef", false), (MD5_EMPTY, true), (SHA1_EMPTY, false)]);

    let mut sha1 = Expression::new();
    sha1.start_of_line().range(["0", "9", "a", "f"]).unwrap().limit(40, 0).end_of_line();
    assert_eq!(sha1.get_regex(), "/^[0-9a-f]{40}$/m");
    assert_cases(&sha1, &[("alphabet", false), ("deadbeef", false), (MD5_EMPTY, false), (SHA1_EMPTY, true)]);
}

#[test]
fn remove_modifier() {
    let mut regex = Expression::new();
    regex.range(['a', 'z']).unwrap();
    assert_eq!(regex.get_regex(), "/[a-z]/m");

    regex.remove_modifier(Modifiers::MULTI_LINE);
    assert_eq!(regex.get_regex(), "/[a-z]/");

    // Removing an absent flag, or adding a present one, changes nothing.
    regex.remove_modifier(Modifiers::MULTI_LINE).add_modifier(Modifiers::GLOBAL).add_modifier(Modifiers::GLOBAL);
    assert_eq!(regex.get_regex(), "/[a-z]/g");
}

#[test]
fn remove_modifier_keeps_other_flags() {
    let mut regex = Expression::new();
    regex.with_any_case().stop_at_first();
    assert_eq!(regex.modifiers().letters(), "mig");

    regex.remove_modifier(Modifiers::CASE_INSENSITIVE);
    assert_eq!(regex.modifiers().letters(), "mg");
}

#[test]
fn with_any_case() {
    let mut regex = Expression::new();
    regex.range(['a', 'z']).unwrap().set_search_one_line(false).with_any_case();
    assert_eq!(regex.get_regex(), "/[a-z]/i");
    assert!(regex.is_match("Q").unwrap());

    regex.set_any_case(false);
    assert_eq!(regex.get_regex(), "/[a-z]/");
    assert!(!regex.is_match("Q").unwrap());
}

#[test]
fn or_wraps_alternatives() {
    let mut regex = Expression::new();
    regex.find("foo").or("bar");

    assert_cases(&regex, &[("foo", true), ("bar", true), ("baz", false), ("food", true)]);
    assert_eq!(regex.get_regex(), "/(?:(?:foo))|(?:bar)/m");
}

#[test]
fn or_chains_and_inserts_group_markers_once() {
    let mut regex = Expression::new();
    regex.start_of_line().find("a").or("b").or("c");
    assert_eq!(regex.prefix(), "^(?:");
    assert_eq!(regex.suffix(), ")");
    assert_eq!(regex.body(), "(?:a))|(?:b)|(?:c");

    let mut regex = Expression::new();
    regex.find("a").or("b").or("c.d");
    assert_eq!(regex.get_regex(), r"/(?:(?:a))|(?:b)|(?:c\.d)/m");
    assert_cases(&regex, &[("a", true), ("b", true), ("c.d", true), ("cxd", false)]);
}

#[test]
fn clean_restores_baseline() {
    let mut regex = Expression::new();
    regex.remove_modifier(Modifiers::MULTI_LINE).stop_at_first().search_one_line();

    let at_start = regex.get_regex();
    regex.find("something").add("else").or("another");
    assert_ne!(at_start, regex.get_regex());

    regex.clean(CleanOptions::default());
    assert_eq!(regex.get_regex(), at_start);
}

#[test]
fn clean_matches_fresh_instance_with_same_options() {
    let options = CleanOptions::default()
        .prefixes("^")
        .source("(?:x)")
        .modifiers(Modifiers::CASE_INSENSITIVE)
        .replace_limit(2);

    let mut mutated = Expression::new();
    mutated.then("junk").multiple("y").stop_at_first().end_of_line();
    mutated.clean(options.clone());

    let fresh = Expression::with_options(options);
    assert_eq!(mutated.get_regex(), fresh.get_regex());
    assert_eq!(mutated, fresh);
    assert_eq!(fresh.replace_limit(), 2);
}

#[test]
fn clean_clamps_zero_replace_limit() {
    let regex = Expression::with_options(CleanOptions::default().replace_limit(0));
    assert_eq!(regex.replace_limit(), 1);
}

#[test]
fn limit_binds_to_previous_fragment() {
    let mut regex = Expression::new();

    regex.add("a").limit(1, 0);
    assert_eq!(regex.get_regex(), "/a{1}/m");

    regex.add("b").limit(2, 1);
    assert_eq!(regex.get_regex(), "/a{1}b{2,}/m");

    regex.add("c").limit(3, 4);
    assert_eq!(regex.get_regex(), "/a{1}b{2,}c{3,4}/m");

    regex.multiple("d");
    assert_eq!(regex.get_regex(), "/a{1}b{2,}c{3,4}d+/m");

    regex.limit(5, 6);
    assert_eq!(regex.get_regex(), "/a{1}b{2,}c{3,4}d{5,6}/m");
}

#[test]
fn limit_after_rewrite_appends() {
    let mut regex = Expression::new();
    regex.multiple("x").limit(5, 6);
    assert_eq!(regex.body(), "x{5,6}");

    // The rewritten fragment no longer ends in `+`, so a second limit stacks.
    regex.limit(2, 0);
    assert_eq!(regex.body(), "x{5,6}{2}");
}

#[test]
fn limit_ignores_escaped_quantifiers() {
    let mut regex = Expression::new();
    regex.then("a+").limit(2, 0);
    assert_eq!(regex.body(), r"(?:a\+){2}");
    assert_cases(&regex, &[("a+a+", true), ("aa", false)]);
}

#[test]
fn replace_respects_global_and_limit() {
    let mut regex = Expression::new();
    regex.add("foo");

    assert_eq!(regex.get_regex(), "/foo/m");
    assert_eq!(regex.replace("foobarfoo", "baz").unwrap(), "bazbarfoo");

    regex.stop_at_first();
    assert_eq!(regex.get_regex(), "/foo/mg");
    assert_eq!(regex.replace("foobarfoo", "baz").unwrap(), "bazbarbaz");
    assert_eq!(regex.get_regex(), "/foo/mg");
}

#[test]
fn replace_with_limited_spaces() {
    let mut regex = Expression::new();
    regex.clean(CleanOptions::default().modifiers(Modifiers::MULTI_LINE).replace_limit(4)).find(" ");

    assert_eq!(
        regex.replace("This is a small test http://somesite.com and some more text.", "-").unwrap(),
        "This-is-a-small-test http://somesite.com and some more text."
    );
}

#[test]
fn replace_bounded_words() {
    let mut regex = Expression::new();
    regex.clean(CleanOptions::default()).add(r"\b").word().limit(2, 3).add(r"\b");

    assert_eq!(regex.get_regex(), r"/\b\w{2,3}\b/mg");
    assert_eq!(regex.replace("test abc ab abcd", "*").unwrap(), "test * * abcd");
}

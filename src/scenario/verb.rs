//! Verbs and typed dispatch.
//!
//! A [`Verb`] names one builder operation. Scenario text is never dispatched
//! by name at runtime; instead each step is converted into an [`Invocation`],
//! a closed enum whose variants carry the already-parsed arguments the
//! builder method needs:
//!
//! ```text
//! ScenarioStep { verb: Limit, arguments: ["2,3"] }
//!        │  Invocation::from_step      (argument shape checked here)
//!        ▼
//! Invocation::Limit { min: 2, max: 3 }
//!        │  Invocation::apply
//!        ▼
//! expression.limit(2, 3)
//! ```
//!
//! Aliases (`find`/`then`, `br`/`lineBreak`, `any`/`anyOf`) keep their own
//! `Verb` so the resolver output stays faithful to the phrase, but they
//! dispatch to the same builder method.

use super::runner::ScenarioStep;
use crate::error::{Error, Result};
use crate::{Expression, Modifiers};

/// Argument shape expected by a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgShape {
    /// No argument; anything supplied is ignored.
    None,
    /// One literal or raw string. Missing means empty.
    Text,
    /// Optional on/off switch. Missing means on.
    Flag,
    /// `min` or `min,max`.
    Limit,
    /// Comma-joined range bounds.
    Range,
    /// Modifier letters.
    Modifier,
    /// `(subject, replacement)`.
    Replace,
}

/// Every builder operation reachable from a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    StartOfLine,
    EndOfLine,
    Then,
    Find,
    Maybe,
    Anything,
    AnythingBut,
    Something,
    SomethingBut,
    Add,
    LineBreak,
    Br,
    Tab,
    Word,
    AnyOf,
    Any,
    Range,
    Limit,
    Multiple,
    WithAnyCase,
    StopAtFirst,
    SearchOneLine,
    AddModifier,
    RemoveModifier,
    Or,
    Replace,
}

impl Verb {
    /// Canonical identifier, as used in traces and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Verb::StartOfLine => "startOfLine",
            Verb::EndOfLine => "endOfLine",
            Verb::Then => "then",
            Verb::Find => "find",
            Verb::Maybe => "maybe",
            Verb::Anything => "anything",
            Verb::AnythingBut => "anythingBut",
            Verb::Something => "something",
            Verb::SomethingBut => "somethingBut",
            Verb::Add => "add",
            Verb::LineBreak => "lineBreak",
            Verb::Br => "br",
            Verb::Tab => "tab",
            Verb::Word => "word",
            Verb::AnyOf => "anyOf",
            Verb::Any => "any",
            Verb::Range => "range",
            Verb::Limit => "limit",
            Verb::Multiple => "multiple",
            Verb::WithAnyCase => "withAnyCase",
            Verb::StopAtFirst => "stopAtFirst",
            Verb::SearchOneLine => "searchOneLine",
            Verb::AddModifier => "addModifier",
            Verb::RemoveModifier => "removeModifier",
            Verb::Or => "or",
            Verb::Replace => "replace",
        }
    }

    pub fn shape(&self) -> ArgShape {
        match self {
            Verb::Anything | Verb::Something | Verb::LineBreak | Verb::Br | Verb::Tab | Verb::Word => ArgShape::None,
            Verb::Then
            | Verb::Find
            | Verb::Maybe
            | Verb::AnythingBut
            | Verb::SomethingBut
            | Verb::Add
            | Verb::AnyOf
            | Verb::Any
            | Verb::Multiple
            | Verb::Or => ArgShape::Text,
            Verb::StartOfLine | Verb::EndOfLine | Verb::WithAnyCase | Verb::StopAtFirst | Verb::SearchOneLine => {
                ArgShape::Flag
            }
            Verb::Limit => ArgShape::Limit,
            Verb::Range => ArgShape::Range,
            Verb::AddModifier | Verb::RemoveModifier => ArgShape::Modifier,
            Verb::Replace => ArgShape::Replace,
        }
    }

    /// Number of arguments the verb reads: 2 for `replace`, 0 for verbs
    /// without an argument, 1 otherwise. A dangling argument token attaches
    /// to the previous step while that step holds fewer than this.
    pub fn arity(&self) -> usize {
        match self.shape() {
            ArgShape::None => 0,
            ArgShape::Replace => 2,
            _ => 1,
        }
    }
}

/// A verb with its arguments parsed into the builder's types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    StartOfLine(bool),
    EndOfLine(bool),
    Then(String),
    Maybe(String),
    Anything,
    AnythingBut(String),
    Something,
    SomethingBut(String),
    Add(String),
    LineBreak,
    Tab,
    Word,
    AnyOf(String),
    Range(Vec<String>),
    Limit { min: usize, max: usize },
    Multiple(String),
    WithAnyCase(bool),
    StopAtFirst(bool),
    SearchOneLine(bool),
    AddModifier(Modifiers),
    RemoveModifier(Modifiers),
    Or(String),
    Replace { subject: String, replacement: String },
}

impl Invocation {
    /// Convert a resolved step into a typed call.
    pub fn from_step(step: &ScenarioStep) -> Result<Self> {
        let verb = step.verb;
        let text = || step.raw_argument().unwrap_or_default().to_string();

        let invocation = match verb {
            Verb::StartOfLine => Invocation::StartOfLine(parse_flag(verb, step.raw_argument())?),
            Verb::EndOfLine => Invocation::EndOfLine(parse_flag(verb, step.raw_argument())?),
            Verb::WithAnyCase => Invocation::WithAnyCase(parse_flag(verb, step.raw_argument())?),
            Verb::StopAtFirst => Invocation::StopAtFirst(parse_flag(verb, step.raw_argument())?),
            Verb::SearchOneLine => Invocation::SearchOneLine(parse_flag(verb, step.raw_argument())?),
            Verb::Then | Verb::Find => Invocation::Then(text()),
            Verb::Maybe => Invocation::Maybe(text()),
            Verb::Anything => Invocation::Anything,
            Verb::AnythingBut => Invocation::AnythingBut(text()),
            Verb::Something => Invocation::Something,
            Verb::SomethingBut => Invocation::SomethingBut(text()),
            Verb::Add => Invocation::Add(text()),
            Verb::LineBreak | Verb::Br => Invocation::LineBreak,
            Verb::Tab => Invocation::Tab,
            Verb::Word => Invocation::Word,
            Verb::AnyOf | Verb::Any => Invocation::AnyOf(text()),
            Verb::Multiple => Invocation::Multiple(text()),
            Verb::Or => Invocation::Or(text()),
            Verb::Range => Invocation::Range(split_range(&text())),
            Verb::Limit => {
                let (min, max) = parse_limit(verb, step.raw_argument())?;
                Invocation::Limit { min, max }
            }
            Verb::AddModifier => Invocation::AddModifier(parse_modifiers(verb, step.raw_argument())?),
            Verb::RemoveModifier => Invocation::RemoveModifier(parse_modifiers(verb, step.raw_argument())?),
            Verb::Replace => match step.arguments.as_slice() {
                [subject, replacement, ..] => {
                    Invocation::Replace { subject: subject.clone(), replacement: replacement.clone() }
                }
                _ => {
                    return Err(Error::InvalidArgument {
                        verb: verb.name(),
                        reason: format!("expected (subject, replacement), got {} argument(s)", step.arguments.len()),
                    });
                }
            },
        };

        if matches!(verb.shape(), ArgShape::None) && !step.arguments.is_empty() {
            tracing::debug!(verb = verb.name(), ignored = ?step.arguments, "verb takes no argument");
        }

        Ok(invocation)
    }

    /// Run the call against `expr`. Returns the output of `replace`, which is
    /// the only verb that produces a value instead of mutating.
    pub fn apply(&self, expr: &mut Expression) -> Result<Option<String>> {
        match self {
            Invocation::StartOfLine(enable) => {
                expr.set_start_of_line(*enable);
            }
            Invocation::EndOfLine(enable) => {
                expr.set_end_of_line(*enable);
            }
            Invocation::Then(value) => {
                expr.then(value);
            }
            Invocation::Maybe(value) => {
                expr.maybe(value);
            }
            Invocation::Anything => {
                expr.anything();
            }
            Invocation::AnythingBut(chars) => {
                expr.anything_but(chars);
            }
            Invocation::Something => {
                expr.something();
            }
            Invocation::SomethingBut(chars) => {
                expr.something_but(chars);
            }
            Invocation::Add(raw) => {
                expr.add(raw);
            }
            Invocation::LineBreak => {
                expr.line_break();
            }
            Invocation::Tab => {
                expr.tab();
            }
            Invocation::Word => {
                expr.word();
            }
            Invocation::AnyOf(chars) => {
                expr.any_of(chars);
            }
            Invocation::Range(bounds) => {
                expr.range(bounds)?;
            }
            Invocation::Limit { min, max } => {
                expr.limit(*min, *max);
            }
            Invocation::Multiple(value) => {
                expr.multiple(value);
            }
            Invocation::WithAnyCase(enable) => {
                expr.set_any_case(*enable);
            }
            Invocation::StopAtFirst(enable) => {
                expr.set_stop_at_first(*enable);
            }
            Invocation::SearchOneLine(enable) => {
                expr.set_search_one_line(*enable);
            }
            Invocation::AddModifier(modifiers) => {
                expr.add_modifier(*modifiers);
            }
            Invocation::RemoveModifier(modifiers) => {
                expr.remove_modifier(*modifiers);
            }
            Invocation::Or(value) => {
                expr.or(value);
            }
            Invocation::Replace { subject, replacement } => {
                return expr.replace(subject, replacement).map(Some);
            }
        }
        Ok(None)
    }
}

/// Missing means "enable", matching the builder's no-argument forms.
fn parse_flag(verb: Verb, raw: Option<&str>) -> Result<bool> {
    let Some(raw) = raw else {
        return Ok(true);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "yes" | "on" | "1" | "enable" => Ok(true),
        "false" | "no" | "off" | "0" | "disable" => Ok(false),
        other => Err(Error::InvalidArgument { verb: verb.name(), reason: format!("expected a switch, got \"{other}\"") }),
    }
}

fn parse_limit(verb: Verb, raw: Option<&str>) -> Result<(usize, usize)> {
    let invalid = || Error::InvalidArgument {
        verb: verb.name(),
        reason: format!("expected `min` or `min,max`, got \"{}\"", raw.unwrap_or_default()),
    };

    let caps = regex!(r"^\s*(\d+)\s*(?:,\s*(\d+)\s*)?$").captures(raw.unwrap_or_default()).ok_or_else(invalid)?;
    let min = caps[1].parse().map_err(|_| invalid())?;
    let max = match caps.get(2) {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };
    Ok((min, max))
}

fn parse_modifiers(verb: Verb, raw: Option<&str>) -> Result<Modifiers> {
    match raw.map(str::trim) {
        Some(letters) if !letters.is_empty() => Modifiers::from_letters(letters),
        _ => Err(Error::InvalidArgument { verb: verb.name(), reason: "expected modifier letters".to_string() }),
    }
}

/// Re-split a comma-joined range argument into the variadic bounds.
fn split_range(raw: &str) -> Vec<String> {
    raw.split(',').map(|bound| bound.trim().to_string()).collect()
}

//! Script tokenizing and in-order dispatch.
//!
//! ```text
//! start of line, then "http", maybe "s", end of line
//! └────┬──────┘  └────┬────┘  └───┬───┘  └───┬────┘     split on method delimiter
//!      │         "then " │ "http" │ ""        │           split on argument delimiter
//!      ▼              ▼               ▼        ▼
//!  StartOfLine    Then["http"]   Maybe["s"]  EndOfLine   resolve phrase (segment 0)
//! ```
//!
//! Arguments are the segments between a pair of argument delimiters (the odd
//! segments). A token that is nothing but an argument (`then, "http"`) is
//! attached to the step right before it while that step still holds fewer
//! arguments than its verb reads, so `replace, "a b", "-"` fills both.

use super::phrases::PhraseResolver;
use super::report::{ScenarioReport, ScenarioRun, SkipReason, SkippedToken};
use super::verb::{Invocation, Verb};
use crate::Expression;
use crate::api::Options;
use crate::error::{Error, Result};
use std::time::Instant;

/// One resolved builder call, before its arguments are typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioStep {
    pub verb: Verb,
    pub arguments: Vec<String>,
}

impl ScenarioStep {
    /// The first argument, if any. Every verb except `replace` reads only this.
    pub fn raw_argument(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }
}

/// Tokenized script: the steps in order, plus what was dropped.
#[derive(Debug, Clone, Default)]
pub(crate) struct ParsedScript {
    pub steps: Vec<ScenarioStep>,
    pub skipped: Vec<SkippedToken>,
}

/// Runs scenario scripts against an [`Expression`].
pub struct ScenarioRunner<'a> {
    method_delimiter: &'a str,
    argument_delimiter: &'a str,
    strict: bool,
    resolver: &'a dyn PhraseResolver,
}

impl<'a> ScenarioRunner<'a> {
    pub fn new(options: &'a Options, resolver: &'a dyn PhraseResolver) -> Self {
        ScenarioRunner {
            method_delimiter: &options.method_delimiter,
            argument_delimiter: &options.argument_delimiter,
            strict: options.strict,
            resolver,
        }
    }

    /// Run `script` on a fresh expression.
    pub fn run(&self, script: &str) -> Result<ScenarioRun> {
        let mut expression = Expression::new();
        let report = self.run_on(script, &mut expression)?;
        Ok(ScenarioRun { expression, report })
    }

    /// Run `script` on `expr`, appending to whatever it already holds.
    ///
    /// Every step is converted to an [`Invocation`] before the first one is
    /// applied, so argument errors leave `expr` untouched. Errors raised by
    /// the builder itself (`range` parity, a failing `replace`) stop the run
    /// at that step.
    pub fn run_on(&self, script: &str, expr: &mut Expression) -> Result<ScenarioReport> {
        let start = Instant::now();
        let ParsedScript { steps, skipped } = self.parse(script)?;

        let calls = steps.iter().map(Invocation::from_step).collect::<Result<Vec<_>>>()?;

        let mut replacements = Vec::new();
        for (step, call) in steps.iter().zip(&calls) {
            tracing::debug!(verb = step.verb.name(), arguments = ?step.arguments, "dispatch");
            if let Some(output) = call.apply(expr)? {
                replacements.push(output);
            }
        }

        Ok(ScenarioReport { steps, skipped, replacements, elapsed: start.elapsed() })
    }

    /// Tokenize and resolve `script` without touching any expression.
    pub(crate) fn parse(&self, script: &str) -> Result<ParsedScript> {
        let mut parsed = ParsedScript::default();
        // Index into `parsed.steps` of the step produced by the previous token.
        let mut previous: Option<usize> = None;

        for (index, token) in split_nonempty(script, self.method_delimiter).into_iter().enumerate() {
            let (phrase, arguments) = self.split_token(token);

            if phrase.is_empty() {
                let has_arguments = !arguments.is_empty();
                let attached = match previous.and_then(|i| parsed.steps.get_mut(i)) {
                    Some(step) if has_arguments && step.arguments.len() < step.verb.arity() => {
                        tracing::debug!(index, verb = step.verb.name(), "attaching dangling argument");
                        step.arguments.extend(arguments);
                        true
                    }
                    _ => false,
                };
                if !attached {
                    let reason = if has_arguments { SkipReason::DanglingArgument } else { SkipReason::Blank };
                    self.skip(&mut parsed, index, token, reason);
                    previous = None;
                }
                continue;
            }

            match self.resolver.resolve(phrase) {
                Some(verb) => {
                    previous = Some(parsed.steps.len());
                    parsed.steps.push(ScenarioStep { verb, arguments });
                }
                None if self.strict => {
                    return Err(Error::UnresolvedPhrase { phrase: phrase.to_string() });
                }
                None => {
                    self.skip(&mut parsed, index, token, SkipReason::UnresolvedPhrase);
                    previous = None;
                }
            }
        }

        Ok(parsed)
    }

    /// Segment 0 is the phrase; segments 1, 3, 5 ... are the arguments.
    fn split_token<'t>(&self, token: &'t str) -> (&'t str, Vec<String>) {
        if self.argument_delimiter.is_empty() {
            return (token.trim(), Vec::new());
        }

        let mut segments = token.split(self.argument_delimiter);
        let phrase = segments.next().unwrap_or_default().trim();
        let arguments = segments.step_by(2).map(str::to_string).collect();
        (phrase, arguments)
    }

    fn skip(&self, parsed: &mut ParsedScript, index: usize, token: &str, reason: SkipReason) {
        tracing::debug!(index, token, ?reason, "skipping scenario token");
        parsed.skipped.push(SkippedToken { index, token: token.to_string(), reason });
    }
}

/// `str::split` that treats an empty delimiter as "no delimiter".
fn split_nonempty<'t>(text: &'t str, delimiter: &str) -> Vec<&'t str> {
    if delimiter.is_empty() { vec![text] } else { text.split(delimiter).collect() }
}

//! Scenario run report.
//!
//! Skipping unresolved tokens is the documented default, but it is never
//! silent: every dropped token lands in [`ScenarioReport::skipped`] with the
//! reason it was dropped.

use super::runner::ScenarioStep;
use crate::Expression;
use std::time::Duration;

/// Why a script token did not produce a builder call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The phrase matched no entry of the phrase table.
    UnresolvedPhrase,
    /// Only an argument, with no argument-less step before it to attach to.
    DanglingArgument,
    /// Nothing but whitespace.
    Blank,
}

/// A token that was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    /// Position of the token in the script (0-based).
    pub index: usize,
    /// The token text as written.
    pub token: String,
    pub reason: SkipReason,
}

/// What a scenario run did.
#[derive(Debug, Clone, Default)]
pub struct ScenarioReport {
    /// Steps executed, in order.
    pub steps: Vec<ScenarioStep>,
    /// Tokens dropped before dispatch.
    pub skipped: Vec<SkippedToken>,
    /// Output of each `replace` step, in order.
    pub replacements: Vec<String>,
    /// Time spent parsing and dispatching.
    pub elapsed: Duration,
}

impl ScenarioReport {
    /// True when every token of the script produced a builder call.
    pub fn is_complete(&self) -> bool {
        self.skipped.iter().all(|s| s.reason == SkipReason::Blank)
    }
}

/// The expression produced by a scenario together with its report.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    pub expression: Expression,
    pub report: ScenarioReport,
}

impl ScenarioRun {
    /// Shorthand for `self.expression.get_regex()`.
    pub fn get_regex(&self) -> String {
        self.expression.get_regex()
    }
}

//! Verbal regular expressions.
//!
//! Build a regular expression from readable verbs instead of raw syntax:
//!
//! ```
//! use verbex::Expression;
//!
//! let mut hash = Expression::new();
//! hash.start_of_line().range(["0", "9", "a", "f"]).unwrap().limit_exact(32).end_of_line();
//!
//! assert_eq!(hash.get_regex(), "/^[0-9a-f]{32}$/m");
//! assert!(hash.is_match("d41d8cd98f00b204e9800998ecf8427e").unwrap());
//! ```
//!
//! or drive the same builder from a plain-text scenario:
//!
//! ```
//! let hash = verbex::scenario(r#"start of line, range "0,9,a,f", limit "32", end of line"#).unwrap();
//! assert_eq!(hash.get_regex(), "/^[0-9a-f]{32}$/m");
//! ```

#[macro_use]
mod macros;
mod api;
mod error;
mod expression;
mod scenario;

pub use api::{Options, scenario, scenario_verbose_with, scenario_with, scenario_with_resolver};
pub use error::{Error, Result};
pub use expression::{CleanOptions, Expression, Modifiers, TestOutcome, sanitize};
pub use scenario::{
    ArgShape, Invocation, PhraseResolver, PhraseTable, ScenarioReport, ScenarioRun, ScenarioRunner, ScenarioStep,
    SkipReason, SkippedToken, Verb,
};

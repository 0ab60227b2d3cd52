//! Scenario scripts.
//!
//! A scenario is a plain-text recipe for an [`Expression`](crate::Expression):
//! comma-separated phrases, each optionally followed by quoted arguments.
//!
//! ## How the parts work together
//!
//! ```text
//! script ── split (runner.rs) ──▶ (phrase, [args]) tokens
//!                                        │
//!                                        │  PhraseResolver::resolve   (phrases.rs)
//!                                        ▼
//!                                  ScenarioStep { verb, arguments }
//!                                        │
//!                                        │  Invocation::from_step     (verb.rs)
//!                                        ▼
//!                                  Invocation (typed arguments)
//!                                        │
//!                                        │  Invocation::apply
//!                                        ▼
//!                                  Expression + ScenarioReport (report.rs)
//! ```
//!
//! ## Responsibilities by module
//!
//! - `phrases.rs`: the `PhraseResolver` seam and the ordered built-in table.
//! - `verb.rs`: the closed `Verb` set, argument shapes, typed dispatch.
//! - `runner.rs`: tokenizing, dangling-argument attachment, strict mode.
//! - `report.rs`: executed steps, skipped tokens, `replace` outputs, timing.
//!
//! ## Debugging
//!
//! Dispatch and skipped tokens are emitted as `tracing` debug events under
//! the `verbex::scenario` target.

#[path = "scenario/phrases.rs"]
mod phrases;
#[path = "scenario/report.rs"]
mod report;
#[path = "scenario/runner.rs"]
mod runner;
#[path = "scenario/verb.rs"]
mod verb;

pub use phrases::{PhraseResolver, PhraseTable};
pub use report::{ScenarioReport, ScenarioRun, SkipReason, SkippedToken};
pub use runner::{ScenarioRunner, ScenarioStep};
pub use verb::{ArgShape, Invocation, Verb};

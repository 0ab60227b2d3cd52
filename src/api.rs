use crate::Expression;
use crate::error::Result;
use crate::scenario::{PhraseResolver, PhraseTable, ScenarioRun, ScenarioRunner};

/// Scenario options.
///
/// The defaults are the reference script format: `then "http", maybe "s"`.
#[derive(Debug, Clone)]
pub struct Options {
    /// Separates one step from the next.
    pub method_delimiter: String,
    /// Surrounds each argument of a step.
    pub argument_delimiter: String,
    /// Fail on phrases that resolve to no verb instead of skipping them.
    pub strict: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { method_delimiter: ", ".to_string(), argument_delimiter: "\"".to_string(), strict: false }
    }
}

/// Build an expression from `script` using the built-in phrase table and
/// default [`Options`].
///
/// # Example
/// ```
/// use verbex::scenario;
///
/// let expr = scenario(r#"start of line, then "http", maybe "s", then "://""#).unwrap();
/// assert_eq!(expr.get_regex(), r"/^(?:http)(?:s)?(?::\/\/)/m");
/// ```
pub fn scenario(script: &str) -> Result<Expression> {
    scenario_with(script, &Options::default())
}

/// Build an expression from `script` with the provided `options`.
pub fn scenario_with(script: &str, options: &Options) -> Result<Expression> {
    Ok(scenario_verbose_with(script, options)?.expression)
}

/// Like [`scenario_with`], but also return the run report (executed steps,
/// skipped tokens, `replace` outputs, timing).
pub fn scenario_verbose_with(script: &str, options: &Options) -> Result<ScenarioRun> {
    scenario_with_resolver(script, options, PhraseTable::builtin())
}

/// Run `script` with a caller-supplied phrase resolver.
pub fn scenario_with_resolver(script: &str, options: &Options, resolver: &dyn PhraseResolver) -> Result<ScenarioRun> {
    let run = ScenarioRunner::new(options, resolver).run(script)?;
    tracing::debug!(
        pattern = %run.expression.get_regex(),
        steps = run.report.steps.len(),
        skipped = run.report.skipped.len(),
        elapsed = ?run.report.elapsed,
        "scenario finished"
    );
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Verb;
    use std::time::Duration;

    #[test]
    fn default_options_use_the_reference_delimiters() {
        let opts = Options::default();
        assert_eq!(opts.method_delimiter, ", ");
        assert_eq!(opts.argument_delimiter, "\"");
        assert!(!opts.strict);
    }

    #[test]
    fn scenario_returns_the_built_expression() {
        let expr = scenario(r#"then "a", maybe "b""#).unwrap();
        assert_eq!(expr.body(), "(?:a)(?:b)?");
        assert!(expr.is_match("ab").unwrap());
    }

    #[test]
    fn verbose_run_includes_report() {
        let run = scenario_verbose_with(r#"then "a", nonsense, maybe "b""#, &Options::default()).unwrap();

        assert_eq!(run.get_regex(), "/(?:a)(?:b)?/m");
        assert_eq!(run.report.steps.iter().map(|s| s.verb).collect::<Vec<_>>(), vec![Verb::Then, Verb::Maybe]);
        assert_eq!(run.report.skipped.len(), 1);
        assert!(run.report.elapsed >= Duration::ZERO);
    }
}

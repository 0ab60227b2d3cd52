use verbex::{ScenarioRun, SkipReason, TestOutcome};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    /// Wraps text in ANSI codes, or passes it through when color is off.
    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, code: &str, s: &str) -> String {
            if self.enabled { format!("{code}{s}{RESET}") } else { s.to_string() }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(color, s.as_ref())
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(BOLD, s.as_ref())
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(DIM, s.as_ref())
        }

        /// Green when `ok`, red otherwise.
        pub fn verdict(&self, s: impl AsRef<str>, ok: bool) -> String {
            self.wrap(if ok { GREEN } else { RED }, s.as_ref())
        }
    }
}

/// One `--test` subject and what the pattern made of it.
pub struct Check {
    pub subject: String,
    pub outcome: TestOutcome,
}

pub fn print_run(script: &str, run: &ScenarioRun, checks: &[Check], replaced: Option<&(String, String)>, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Scenario: \"{}\"", script), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Steps ━━━", ansi::GRAY));
    print_steps(run, &palette);

    if !run.report.skipped.is_empty() {
        println!("\n{}", palette.paint("━━━ Skipped ━━━", ansi::GRAY));
        print_skipped(run, &palette);
    }

    println!("\n{}", palette.paint("━━━ Pattern ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(run.expression.get_regex(), ansi::GREEN)));
    println!(
        "  {} {}  {} {}  {} {}",
        palette.dim("prefix:"),
        palette.paint(format!("{:?}", run.expression.prefix()), ansi::YELLOW),
        palette.dim("suffix:"),
        palette.paint(format!("{:?}", run.expression.suffix()), ansi::YELLOW),
        palette.dim("replace limit:"),
        palette.paint(run.expression.replace_limit().to_string(), ansi::YELLOW),
    );

    if !checks.is_empty() {
        println!("\n{}", palette.paint("━━━ Tests ━━━", ansi::GRAY));
        print_checks(checks, &palette);
    }

    if !run.report.replacements.is_empty() || replaced.is_some() {
        println!("\n{}", palette.paint("━━━ Replacements ━━━", ansi::GRAY));
        for (idx, out) in run.report.replacements.iter().enumerate() {
            println!("  {} {}", palette.paint(format!("[{}]", idx), ansi::GRAY), palette.paint(out, ansi::GREEN));
        }
        if let Some((subject, out)) = replaced {
            println!(
                "  {} {} {} {}",
                palette.paint("--replace", ansi::GRAY),
                palette.dim(format!("{:?}", subject)),
                palette.dim("→"),
                palette.paint(out, ansi::GREEN)
            );
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", run.report.elapsed), ansi::GREEN));
    println!();
}

fn print_steps(run: &ScenarioRun, palette: &ansi::Palette) {
    if run.report.steps.is_empty() {
        println!("{}", palette.dim("  No steps resolved"));
        println!("\n{}", palette.dim("  Tip: Set VERBEX_LOG=debug to see how each token was handled"));
        return;
    }

    for (idx, step) in run.report.steps.iter().enumerate() {
        let args = if step.arguments.is_empty() {
            palette.dim("()")
        } else {
            palette.paint(format!("{:?}", step.arguments), ansi::YELLOW)
        };
        println!(
            "  {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.paint(step.verb.name(), ansi::BLUE),
            args
        );
    }
}

fn print_skipped(run: &ScenarioRun, palette: &ansi::Palette) {
    for skipped in &run.report.skipped {
        let reason = match skipped.reason {
            SkipReason::UnresolvedPhrase => "unresolved phrase",
            SkipReason::DanglingArgument => "dangling argument",
            SkipReason::Blank => "blank",
        };
        println!(
            "  {} {} {} {}",
            palette.paint(format!("#{}", skipped.index), ansi::GRAY),
            palette.paint(format!("{:?}", skipped.token), ansi::YELLOW),
            palette.dim("│"),
            palette.dim(reason)
        );
    }
}

fn print_checks(checks: &[Check], palette: &ansi::Palette) {
    for check in checks {
        let label = match check.outcome {
            TestOutcome::Matched(true) => "✓ match".to_string(),
            TestOutcome::Matched(false) => "✗ no match".to_string(),
            TestOutcome::Count(0) => "✗ 0 matches".to_string(),
            TestOutcome::Count(n) => format!("✓ {n} matches"),
        };
        let verdict = palette.verdict(label, check.outcome.is_match());
        println!("  {} {}", verdict, palette.dim(format!("{:?}", check.subject)));
    }
}

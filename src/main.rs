mod debug_report;

use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;
use verbex::{Options, scenario_verbose_with};

const LOG_ENV: &str = "VERBEX_LOG";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_tracing();

    let run = match scenario_verbose_with(&config.script, &config.options) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    let mut checks = Vec::with_capacity(config.tests.len());
    for subject in &config.tests {
        match run.expression.test(subject) {
            Ok(outcome) => checks.push(debug_report::Check { subject: subject.clone(), outcome }),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }

    let replaced = match &config.replace {
        Some((subject, replacement)) => match run.expression.replace(subject, replacement) {
            Ok(out) => Some((subject.clone(), out)),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    debug_report::print_run(&config.script, &run, &checks, replaced.as_ref(), config.color);
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

struct CliConfig {
    script: String,
    options: Options,
    tests: Vec<String>,
    replace: Option<(String, String)>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut script: Option<String> = None;
    let mut options = Options::default();
    let mut tests = Vec::new();
    let mut replace_subject: Option<String> = None;
    let mut replacement: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("verbex {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--strict" => options.strict = true,
            "--method-delimiter" => {
                options.method_delimiter = expect_value(&mut args, "--method-delimiter")?;
            }
            "--argument-delimiter" => {
                options.argument_delimiter = expect_value(&mut args, "--argument-delimiter")?;
            }
            "-t" | "--test" => tests.push(expect_value(&mut args, "--test")?),
            "--replace" => replace_subject = Some(expect_value(&mut args, "--replace")?),
            "--with" => replacement = Some(expect_value(&mut args, "--with")?),
            "-s" | "--script" => {
                let value = expect_value(&mut args, "--script")?;
                set_script(&mut script, value)?;
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_script(&mut script, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--method-delimiter=") => {
                options.method_delimiter = arg.trim_start_matches("--method-delimiter=").to_string();
            }
            _ if arg.starts_with("--argument-delimiter=") => {
                options.argument_delimiter = arg.trim_start_matches("--argument-delimiter=").to_string();
            }
            _ if arg.starts_with("--test=") => tests.push(arg.trim_start_matches("--test=").to_string()),
            _ if arg.starts_with("--script=") => {
                set_script(&mut script, arg.trim_start_matches("--script=").to_string())?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_script(&mut script, rest)?;
                break;
            }
        }
    }

    let replace = match (replace_subject, replacement) {
        (Some(subject), Some(with)) => Some((subject, with)),
        (None, None) => None,
        (Some(_), None) => return Err("error: --replace needs --with <replacement>".to_string()),
        (None, Some(_)) => return Err("error: --with needs --replace <subject>".to_string()),
    };

    let script = match script {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if script.trim().is_empty() {
        return Err(format!("error: no script provided\n\n{}", help_text()));
    }

    Ok(CliConfig { script, options, tests, replace, color })
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    args.next().ok_or_else(|| format!("error: {flag} expects a value"))
}

fn set_script(script: &mut Option<String>, value: String) -> Result<(), String> {
    if script.is_some() {
        return Err("error: script provided multiple times".to_string());
    }
    *script = Some(value);
    Ok(())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.trim_end_matches(['\r', '\n']).to_string())
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "verbex {version}

Build regular expressions from verbal scenarios.

Usage:
  verbex [OPTIONS] [--] <script...>
  verbex [OPTIONS] --script <text>

Example:
  verbex -t https://github.com 'start of line, then \"http\", maybe \"s\", then \"://\", anything but \" \"'

Options:
  -s, --script <text>             Scenario to run. If omitted, reads remaining args
                                  or stdin when no args are provided.
  --method-delimiter <text>       Separator between steps. Default: \"{method}\"
  --argument-delimiter <text>     Quote around step arguments. Default: {argument}
  --strict                        Fail on phrases that name no verb instead of
                                  skipping them.
  -t, --test <subject>            Test the built pattern against <subject>.
                                  May be repeated.
  --replace <subject>             Run a replacement on <subject> (needs --with).
  --with <replacement>            Replacement text for --replace.
  --color                         Force ANSI color output.
  --no-color                      Disable ANSI color output.
  -h, --help                      Show this help message.
  -V, --version                   Print version information.

Environment:
  {log_env}=<filter>              Log filter for diagnostics on stderr
                                  (e.g. {log_env}=debug).

Exit codes:
  0  Success.
  1  The scenario or the built pattern failed.
  2  Invalid arguments or missing script.
",
        version = env!("CARGO_PKG_VERSION"),
        method = Options::default().method_delimiter,
        argument = Options::default().argument_delimiter,
        log_env = LOG_ENV,
    )
}

//! Command-line interface for gatecheck.
//!
//! Uses lexopt for minimal binary size overhead.

use std::ffi::OsString;

/// Command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Commands to execute, in the order given.
    pub commands: Vec<String>,
    /// Execute commands in parallel.
    pub parallel: bool,
    /// Custom message for the error report.
    pub message: Option<String>,
    /// Include captured stdout in the error report.
    pub stdout: bool,
    /// Filter command applied to captured stdout.
    pub stdout_filter: Option<String>,
    /// Filter command applied to captured stderr.
    pub stderr_filter: Option<String>,
    /// Exclude stderr from the error report.
    pub no_stderr: bool,
    /// Generate a hook settings file instead of running commands.
    pub init: bool,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
    /// Show version and exit.
    pub version: bool,
    /// Show help and exit.
    pub help: bool,
}

/// Parse command-line arguments.
pub fn parse_args() -> Result<Args, lexopt::Error> {
    parse_args_from(std::env::args_os())
}

/// Parse arguments from an iterator (for testing).
pub fn parse_args_from<I>(args: I) -> Result<Args, lexopt::Error>
where
    I: IntoIterator<Item = OsString>,
{
    use lexopt::prelude::*;

    let mut result = Args::default();
    let mut parser = lexopt::Parser::from_iter(args);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('h') | Long("help") => {
                result.help = true;
            }
            Short('V') | Long("version") => {
                result.version = true;
            }
            Short('p') | Long("parallel") => {
                result.parallel = true;
            }
            Short('m') | Long("message") => {
                result.message = Some(parser.value()?.string()?);
            }
            Long("stdout") => {
                result.stdout = true;
            }
            Long("stdout-filter") => {
                result.stdout_filter = Some(parser.value()?.string()?);
            }
            Long("stderr-filter") => {
                result.stderr_filter = Some(parser.value()?.string()?);
            }
            Long("no-stderr") => {
                result.no_stderr = true;
            }
            Long("init") => {
                result.init = true;
            }
            Short('l') | Long("log-level") => {
                result.log_level = Some(parser.value()?.string()?);
            }
            Value(val) => {
                result.commands.push(val.string()?);
            }
            _ => return Err(arg.unexpected()),
        }
    }

    Ok(result)
}

/// Print help message.
pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        r#"gatecheck {version}
Run check commands and report failures as JSON for editor hooks

USAGE:
    gatecheck [OPTIONS] [COMMANDS]...

ARGS:
    <COMMANDS>...              Commands to execute (quote each command)

OPTIONS:
    -p, --parallel             Execute commands in parallel
    -m, --message <TEXT>       Custom message for the error report
        --stdout               Include captured stdout in the error report
        --stdout-filter <CMD>  Filter command applied to captured stdout
        --stderr-filter <CMD>  Filter command applied to captured stderr
        --no-stderr            Exclude stderr from the error report
        --init                 Write a .claude/settings.local.json hook file and exit
    -l, --log-level <LVL>      Log level (error, warn, info, debug, trace)
    -h, --help                 Print help
    -V, --version              Print version

EXIT CODES:
    0    all commands succeeded
    2    one or more commands failed (JSON report on stderr)
    1    internal error (bad usage, report or settings write failure)

EXAMPLES:
    # Run two checks in order; a command exiting 2 stops the rest
    gatecheck 'cargo fmt --check' 'cargo clippy'

    # Run in parallel, include stdout, trim noise from stderr
    gatecheck -p --stdout --stderr-filter 'grep -v warning' 'npm test' 'npm run lint'

    # Generate a Stop-hook settings file interactively
    gatecheck --init
"#
    );
}

/// Print version.
pub fn print_version() {
    println!("gatecheck {}", env!("CARGO_PKG_VERSION"));
}

//! gatecheck binary entry point.

use std::process::ExitCode;

use gatecheck::cli;
use gatecheck::config::ExecutionConfig;
use gatecheck::execution::{CommandSpec, Executor};
use gatecheck::init::{self, InitOptions};
use gatecheck::logging;
use gatecheck::report::ErrorReport;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::from(1);
        }
    };

    if args.help {
        cli::print_help();
        return ExitCode::SUCCESS;
    }
    if args.version {
        cli::print_version();
        return ExitCode::SUCCESS;
    }

    logging::init(args.log_level.as_deref());

    if args.init {
        return match init::init_settings(InitOptions::from_args(&args)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::from(1)
            }
        };
    }

    if args.commands.is_empty() {
        eprintln!("Error: no commands provided");
        return ExitCode::from(1);
    }

    let specs: Vec<CommandSpec> = args
        .commands
        .iter()
        .map(|command| CommandSpec::new(command.as_str()))
        .collect();
    let executor = Executor::new(ExecutionConfig::from_args(&args));

    debug!(
        count = specs.len(),
        parallel = args.parallel,
        "running commands"
    );

    let failures = if args.parallel {
        executor.run_concurrent(&specs).await
    } else {
        executor.run_sequential(&specs).await
    };

    if failures.is_empty() {
        return ExitCode::SUCCESS;
    }

    let report = ErrorReport::new(args.message, failures);
    match report.emit() {
        Ok(()) => ExitCode::from(2),
        Err(err) => {
            eprintln!("Failed to write error report: {err}");
            ExitCode::from(1)
        }
    }
}

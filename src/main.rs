use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use arith_arranger::error;
use arith_arranger::logging::Logger;
use arith_arranger::options::{read_problems, CliOptions, RunMode, EXIT_USAGE_ERROR, USAGE};
use arith_arranger::Report;

fn main() -> Result<ExitCode> {
    error::setup_panic_handler();

    let options = match CliOptions::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("{}", err);
            eprint!("{}", USAGE);
            return Ok(ExitCode::from(EXIT_USAGE_ERROR));
        }
    };

    match options.mode {
        RunMode::Help => {
            print!("{}", USAGE);
            Ok(ExitCode::SUCCESS)
        }
        RunMode::Version => {
            println!("arith-arranger {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        RunMode::Arrange => run_arrange(options),
    }
}

fn run_arrange(options: CliOptions) -> Result<ExitCode> {
    let mut logger = Logger::new(options.log_level);
    if let Some(path) = &options.debug_log {
        logger = logger.with_file_output(path);
    }
    logger.init().context("failed to install logger")?;

    let problems = if options.problems.is_empty() {
        read_problems(io::stdin().lock()).context("failed to read problems from stdin")?
    } else {
        options.problems
    };

    let report = Report::build(&problems, options.show_solutions);
    let output = report
        .render(options.json)
        .context("failed to serialize report")?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(ExitCode::from(report.exit_status()))
}

//! GEDCOM checker CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use ged_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use ged_cli::commands::{check_exit_code, run_check, run_lines, run_rules, write_check};
use ged_cli::logging::{LogConfig, LogFormat, init_logging};
use ged_cli::summary::Styling;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let styling = styling_from_cli(&cli);
    let exit_code = match cli.command {
        Command::Check(args) => match run_check(&args)
            .and_then(|outcome| write_check(&outcome, &args, styling).map(|()| outcome))
        {
            Ok(outcome) => check_exit_code(&outcome, args.deny_findings),
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Lines(args) => match run_lines(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Rules => {
            run_rules(styling);
            0
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}

fn styling_from_cli(cli: &Cli) -> Styling {
    match cli.color.color {
        ColorChoice::Always => Styling::Always,
        ColorChoice::Never => Styling::Never,
        ColorChoice::Auto => Styling::Auto,
    }
}

#![deny(unsafe_code)]

//! Command-line driver for the `tinylog` logger.
//!
//! ```text
//! tinylog [--level LEVEL] emit <SEVERITY> <WORDS>...
//! tinylog [--level LEVEL] progress <TOTAL>
//! tinylog [--level LEVEL] time <NAME> <MILLIS>
//! ```

use std::ffi::OsString;
use std::process::ExitCode;
use std::thread;
use std::time::Duration;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use tinylog::{Logger, LoggerConfig, Severity, global};

fn parse_severity(value: &str) -> Result<Severity, tinylog::ParseSeverityError> {
    value.parse()
}

fn command() -> Command {
    Command::new("tinylog")
        .about("Emit log lines, draw a progress bar or time a flag")
        .subcommand_required(true)
        .arg(
            Arg::new("level")
                .long("level")
                .short('l')
                .value_name("LEVEL")
                .help("Threshold: off, critical, error, warning, info, verbose, debug, trace or 0-7.")
                .global(true)
                .value_parser(parse_severity),
        )
        .subcommand(
            Command::new("emit")
                .about("Log the words at the given severity")
                .arg(
                    Arg::new("severity")
                        .required(true)
                        .value_parser(parse_severity),
                )
                .arg(
                    Arg::new("words")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("progress")
                .about("Drive the progress bar through TOTAL iterations")
                .arg(
                    Arg::new("total")
                        .required(true)
                        .value_parser(value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("time")
                .about("Arm a flag, sleep MILLIS milliseconds, then release it")
                .arg(Arg::new("name").required(true))
                .arg(
                    Arg::new("millis")
                        .required(true)
                        .value_parser(value_parser!(u64)),
                ),
        )
}

fn config_from(matches: &ArgMatches) -> LoggerConfig {
    let mut config = LoggerConfig::from_env();
    if let Some(level) = matches.get_one::<Severity>("level") {
        config.level = *level;
    }
    config
}

fn emit(logger: &Logger, matches: &ArgMatches) {
    let Some(severity) = matches.get_one::<Severity>("severity").copied() else {
        return;
    };
    let words: Vec<&str> = matches
        .get_many::<String>("words")
        .map(|values| values.map(String::as_str).collect())
        .unwrap_or_default();
    logger.log(severity, &[&words.join(" ")]);
}

fn progress(logger: &Logger, matches: &ArgMatches) {
    let total = matches.get_one::<usize>("total").copied().unwrap_or_default();
    for current in 0..total {
        logger.display_progress(current, total);
    }
    logger.finish_progress();
}

fn time(logger: &Logger, matches: &ArgMatches) -> ExitCode {
    let Some(name) = matches.get_one::<String>("name") else {
        return ExitCode::FAILURE;
    };
    let millis = matches.get_one::<u64>("millis").copied().unwrap_or_default();

    logger.add_flag(name);
    thread::sleep(Duration::from_millis(millis));
    match logger.release_flag(name) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn run_with<I, S>(arguments: I) -> ExitCode
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let matches = match command().try_get_matches_from(arguments) {
        Ok(matches) => matches,
        Err(error) => {
            let _ = error.print();
            return if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let logger = global::init(config_from(&matches)).unwrap_or_else(|_| global::logger());

    match matches.subcommand() {
        Some(("emit", sub)) => {
            emit(logger, sub);
            ExitCode::SUCCESS
        }
        Some(("progress", sub)) => {
            progress(logger, sub);
            ExitCode::SUCCESS
        }
        Some(("time", sub)) => time(logger, sub),
        _ => ExitCode::FAILURE,
    }
}

fn main() -> ExitCode {
    run_with(std::env::args_os())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        command().debug_assert();
    }

    #[test]
    fn level_accepts_names_and_numbers() {
        let matches = command()
            .try_get_matches_from(["tinylog", "--level", "warn", "progress", "3"])
            .expect("valid arguments");
        assert_eq!(matches.get_one::<Severity>("level"), Some(&Severity::Warning));

        let matches = command()
            .try_get_matches_from(["tinylog", "--level", "6", "emit", "info", "hello"])
            .expect("valid arguments");
        assert_eq!(config_from(&matches).level, Severity::Debug);
    }

    #[test]
    fn emit_collects_every_word() {
        let matches = command()
            .try_get_matches_from(["tinylog", "emit", "error", "disk", "is", "full"])
            .expect("valid arguments");
        let (_, sub) = matches.subcommand().expect("subcommand");
        assert_eq!(sub.get_one::<Severity>("severity"), Some(&Severity::Error));
        let words: Vec<&String> = sub.get_many::<String>("words").expect("words").collect();
        assert_eq!(words, ["disk", "is", "full"]);
    }

    #[test]
    fn unknown_severity_is_a_usage_error() {
        assert!(command()
            .try_get_matches_from(["tinylog", "emit", "shout", "x"])
            .is_err());
    }

    #[test]
    fn subcommand_is_required() {
        assert!(command().try_get_matches_from(["tinylog"]).is_err());
    }
}

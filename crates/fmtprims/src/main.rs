mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "fmtprims", version, about = "JSON Schema string format checker CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_subcommand() {
        let cli = Cli::try_parse_from(["fmtprims", "check", "email", "a@b.com", "--strict"])
            .expect("check args should parse");

        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.name, "email");
                assert_eq!(args.value, "a@b.com");
                assert!(args.strict);
                assert!(!args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn check_requires_a_value() {
        let err = Cli::try_parse_from(["fmtprims", "check", "email"])
            .expect_err("missing value should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn parses_message_with_variadic_args() {
        let cli = Cli::try_parse_from([
            "fmtprims",
            "--format",
            "raw",
            "message",
            "X_MUST_BE_OF_TYPE_Y",
            "age",
            "integer",
        ])
        .expect("message args should parse");

        match cli.command {
            Command::Message(args) => assert_eq!(args.args, vec!["age", "integer"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn validate_requires_schema_and_instance() {
        let err = Cli::try_parse_from(["fmtprims", "validate", "--schema", "s.json"])
            .expect_err("missing instance should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod check;
pub mod list;
pub mod message;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a value against a named format.
    Check(CheckArgs),
    /// List registered formats and their checkers.
    List(ListArgs),
    /// Render an error message from its code.
    Message(MessageArgs),
    /// Validate a JSON instance against a schema, enforcing formats.
    Validate(ValidateArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::List(args) => list::run(args, format),
        Command::Message(args) => message::run(args, format),
        Command::Validate(args) => validate::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Format name (e.g. email, uuid, date-time).
    #[arg(value_name = "NAME")]
    pub name: String,
    /// Value to check. Treated as a string unless --json is set.
    pub value: String,
    /// Parse the value as a JSON document instead of a plain string.
    #[arg(long)]
    pub json: bool,
    /// Fail when the format name is not registered.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only list the canonical built-in names, without aliases.
    #[arg(long)]
    pub canonical: bool,
}

#[derive(Args, Debug)]
pub struct MessageArgs {
    /// Error code (e.g. DOES_NOT_MATCH_FORMAT).
    pub code: String,
    /// Positional template arguments.
    pub args: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Schema document (JSON).
    #[arg(long, value_name = "FILE")]
    pub schema: PathBuf,
    /// Instance document (JSON).
    #[arg(long, value_name = "FILE")]
    pub instance: PathBuf,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

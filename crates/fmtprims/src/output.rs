use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use fmtprims_message::Message;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckReport<'a> {
    pub schema_id: &'static str,
    pub format: &'a str,
    pub value: &'a serde_json::Value,
    pub outcome: &'static str,
    pub conforms: bool,
    pub message: Option<Message>,
}

#[derive(Debug, Serialize)]
pub struct FormatEntry {
    pub name: String,
    pub checker: &'static str,
}

#[derive(Debug, Serialize)]
struct ListOutput<'a> {
    schema_id: &'static str,
    formats: &'a [FormatEntry],
}

#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub schema_id: &'static str,
    pub valid: bool,
    pub errors: Vec<String>,
}

pub fn print_check(report: &CheckReport<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FORMAT", "VALUE", "OUTCOME", "MESSAGE"])
                .add_row(vec![
                    report.format.to_string(),
                    report.value.to_string(),
                    report.outcome.to_string(),
                    message_text(report.message.as_ref()),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "format={} outcome={} conforms={} value={}",
                report.format, report.outcome, report.conforms, report.value
            );
            if let Some(message) = &report.message {
                println!("  [{}] {}", message.code(), message.description());
            }
        }
        OutputFormat::Raw => println!("{}", report.outcome),
    }
}

pub fn print_formats(formats: &[FormatEntry], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&ListOutput {
            schema_id: "https://schemas.3leaps.dev/fmtprims/cli/v1/format-list.schema.json",
            formats,
        }),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FORMAT", "CHECKER"]);
            for entry in formats {
                table.add_row(vec![entry.name.clone(), entry.checker.to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for entry in formats {
                println!("  {:<24} {}", entry.name, entry.checker);
            }
        }
        OutputFormat::Raw => {
            for entry in formats {
                println!("{}", entry.name);
            }
        }
    }
}

pub fn print_message(message: &Message, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(message),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CODE", "DESCRIPTION"])
                .add_row(vec![
                    message.code().to_string(),
                    message.description().to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("[{}] {}", message.code(), message.description()),
        OutputFormat::Raw => println!("{}", message.description()),
    }
}

pub fn print_validation(report: &ValidationReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table | OutputFormat::Pretty => {
            if report.valid {
                println!("instance is valid");
            } else {
                println!("instance is invalid");
                for err in &report.errors {
                    println!("  - {err}");
                }
            }
        }
        OutputFormat::Raw => println!("{}", if report.valid { "valid" } else { "invalid" }),
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn message_text(message: Option<&Message>) -> String {
    message
        .map(|m| m.description().to_string())
        .unwrap_or_default()
}

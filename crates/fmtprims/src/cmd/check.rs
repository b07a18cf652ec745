use fmtprims_format::{FormatRegistry, RegistryConfig};
use fmtprims_message::Message;
use serde_json::Value;

use crate::cmd::CheckArgs;
use crate::exit::{CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_check, CheckReport, OutputFormat};

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let value = parse_value(&args)?;
    let registry = FormatRegistry::with_config(RegistryConfig {
        fail_on_unknown_format: args.strict,
        ..RegistryConfig::default()
    });

    let outcome = registry.check(&args.name, &value);
    let conforms = registry.is_format(&args.name, &value);
    tracing::debug!(format = %args.name, %outcome, conforms, "format checked");

    let report = CheckReport {
        schema_id: "https://schemas.3leaps.dev/fmtprims/cli/v1/check-result.schema.json",
        format: &args.name,
        value: &value,
        outcome: outcome.as_str(),
        conforms,
        message: (!conforms).then(|| Message::does_not_match_format(&args.name)),
    };
    print_check(&report, format);

    Ok(if conforms { SUCCESS } else { DATA_INVALID })
}

fn parse_value(args: &CheckArgs) -> CliResult<Value> {
    if !args.json {
        return Ok(Value::String(args.value.clone()));
    }
    serde_json::from_str(&args.value)
        .map_err(|err| CliError::new(USAGE, format!("--json value is not valid JSON: {err}")))
}

use std::path::Path;

use fmtprims_format::JsonSchemaBridge;

use crate::cmd::ValidateArgs;
use crate::exit::{format_error, io_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_validation, OutputFormat, ValidationReport};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let schema = read_document(&args.schema)?;
    let instance = read_document(&args.instance)?;

    let bridge = JsonSchemaBridge::with_default_registry();
    let errors = bridge
        .errors_json(&schema, &instance)
        .map_err(|err| format_error("validate", err))?;
    let valid = errors.is_empty();
    tracing::info!(
        schema = %args.schema.display(),
        instance = %args.instance.display(),
        valid,
        errors = errors.len(),
        "instance validated"
    );

    let report = ValidationReport {
        schema_id: "https://schemas.3leaps.dev/fmtprims/cli/v1/validation-result.schema.json",
        valid,
        errors,
    };
    print_validation(&report, format);

    Ok(if valid { SUCCESS } else { DATA_INVALID })
}

fn read_document(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|err| io_error(&format!("{}", path.display()), err))
}

use fmtprims_format::{default_registry, BuiltinFormat};

use crate::cmd::ListArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_formats, FormatEntry, OutputFormat};

pub fn run(args: ListArgs, format: OutputFormat) -> CliResult<i32> {
    let entries: Vec<FormatEntry> = if args.canonical {
        BuiltinFormat::ALL
            .into_iter()
            .map(|builtin| FormatEntry {
                name: builtin.name().to_string(),
                checker: builtin.name(),
            })
            .collect()
    } else {
        default_registry()
            .entries()
            .into_iter()
            .map(|(name, checker)| FormatEntry { name, checker })
            .collect()
    };

    print_formats(&entries, format);
    Ok(SUCCESS)
}

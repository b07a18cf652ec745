use std::fmt::Display;

use fmtprims_message::{ErrorCode, Message};

use crate::cmd::MessageArgs;
use crate::exit::{message_error, CliResult, SUCCESS};
use crate::output::{print_message, OutputFormat};

pub fn run(args: MessageArgs, format: OutputFormat) -> CliResult<i32> {
    let code: ErrorCode = args
        .code
        .parse()
        .map_err(|err| message_error("message", err))?;
    let positional: Vec<&dyn Display> = args.args.iter().map(|arg| arg as &dyn Display).collect();
    let message = Message::render(code, &positional).map_err(|err| message_error("message", err))?;

    print_message(&message, format);
    Ok(SUCCESS)
}

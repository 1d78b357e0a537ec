//! `twinlog log <level> <tag> <message...>`

use crate::level::Level;
use crate::logger::Logger;
use std::process::ExitCode;

/// The gate applies as it would inside an application; a filtered message is not an error.
#[must_use]
pub fn cmd_log(logger: &Logger, level: Level, tag: &str, message: &[String]) -> ExitCode {
    logger.log(level, tag, &message.join(" "));
    ExitCode::SUCCESS
}

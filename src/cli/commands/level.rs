//! `twinlog level [<level>]`

use crate::level::Level;
use crate::logger::Logger;
use std::process::ExitCode;

/// Prints the threshold, or sets it and fails if the new value did not persist.
#[must_use]
pub fn cmd_level(logger: &Logger, level: Option<Level>) -> ExitCode {
    let Some(level) = level else {
        println!("{}", logger.threshold());
        return ExitCode::SUCCESS;
    };

    logger.set_threshold(level);
    if logger.threshold() == level {
        println!("{level}");
        ExitCode::SUCCESS
    } else {
        eprintln!("threshold {level} could not be persisted");
        ExitCode::FAILURE
    }
}

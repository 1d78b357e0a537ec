//! `twinlog status`

use crate::logger::Logger;
use crate::size::format_size;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

/// Reads file sizes only; the sink is never opened.
#[must_use]
pub fn cmd_status(logger: &Logger) -> ExitCode {
    println!("status:    {:?}", logger.status());
    println!("threshold: {}", logger.threshold());
    println!("max size:  {}", format_size(logger.max_bytes()));

    let Some(paths) = logger.resolved_paths() else {
        println!("directory: (none)");
        return ExitCode::SUCCESS;
    };
    println!("directory: {}", paths.directory.display());
    println!("active:    {}", describe(&paths.active));
    println!("backup:    {}", describe(&paths.backup));
    ExitCode::SUCCESS
}

fn describe(path: &Path) -> String {
    fs::metadata(path).map_or_else(
        |_| format!("{} (absent)", path.display()),
        |m| format!("{} ({})", path.display(), format_size(m.len())),
    )
}

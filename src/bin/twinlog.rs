//! `twinlog` binary.
//!
//! Usage:
//!   twinlog log <level> <tag> <message...>   Append a message
//!   twinlog level [<level>]                  Print or set the threshold
//!   twinlog status                           Show directory and file sizes

use clap::Parser;
use std::process::ExitCode;
use twinlog::cli::{Cli, run};

fn main() -> ExitCode {
    run(Cli::parse())
}

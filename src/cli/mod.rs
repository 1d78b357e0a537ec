//! Command-line interface, built on clap.
//!
//! One logger is built from config per invocation, so the tool writes to and
//! reports on exactly the directory an application using the same config would.
//! Only `log` initializes it; `level` and `status` leave the log files alone.

pub mod commands;

use crate::config::Config;
use crate::level::Level;
use crate::logger::LoggerBuilder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Verbose,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Verbose => Self::Verbose,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// twinlog - write to and inspect a rotating log directory.
#[derive(Parser)]
#[command(
    name = "twinlog",
    version,
    about = "Write to and inspect a rotating log directory"
)]
pub struct Cli {
    /// Config file (defaults to <config_dir>/twinlog/twinlog.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Log directory, overriding config
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Append one message to the log.
    Log {
        #[arg(value_enum)]
        level: LogLevel,
        /// Tag column
        tag: String,
        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Print the persisted threshold, or set it.
    Level {
        #[arg(value_enum)]
        level: Option<LogLevel>,
    },
    /// Show log directory, file sizes, and threshold.
    Status,
}

/// Loads config, builds the logger, and runs the chosen command.
#[must_use]
pub fn run(cli: Cli) -> ExitCode {
    let loaded = cli
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from);
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut builder = LoggerBuilder::from_config(&config);
    if let Some(dir) = cli.dir {
        builder = builder.directory(dir);
    }

    // Only `log` opens the sink; inspecting must not create or rotate files
    match cli.command {
        Command::Log {
            level,
            tag,
            message,
        } => commands::cmd_log(&builder.init(), level.into(), &tag, &message),
        Command::Level { level } => commands::cmd_level(&builder.build(), level.map(Into::into)),
        Command::Status => commands::cmd_status(&builder.build()),
    }
}

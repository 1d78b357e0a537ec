//! Default console sink: one line per message on stdout, Warn and Error on stderr.

use super::ConsoleSink;
use crate::level::Level;
use std::io::{self, Write};

const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[2m";

/// Terminal rendering state.
#[derive(Debug, Clone)]
pub struct TerminalConsole {
    /// Piped output and CI environments can't render ANSI escape codes.
    colors_enabled: bool,
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalConsole {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            colors_enabled: true,
        }
    }

    #[must_use]
    pub const fn colors(mut self, enabled: bool) -> Self {
        self.colors_enabled = enabled;
        self
    }

    const fn level_color(level: Level) -> &'static str {
        match level {
            Level::Verbose | Level::Debug => "\x1b[35m",
            Level::Info => "\x1b[36m",
            Level::Warn => "\x1b[33m",
            Level::Error => "\x1b[31m",
        }
    }

    /// `[INFO ] TAG  message`, with the tag column padded so messages line up.
    fn format_line(&self, level: Level, tag: &str, message: &str) -> String {
        let label = format!("[{:<5}]", level.as_str().to_uppercase());
        if self.colors_enabled {
            let color = Self::level_color(level);
            format!("{color}{label}{RESET} {DIM}{tag}{RESET}  {message}")
        } else {
            format!("{label} {tag}  {message}")
        }
    }
}

impl ConsoleSink for TerminalConsole {
    fn write(&self, level: Level, tag: &str, message: &str) -> Result<(), crate::Error> {
        let line = self.format_line(level, tag, message);

        if level >= Level::Warn {
            writeln!(io::stderr().lock(), "{line}")?;
        } else {
            writeln!(io::stdout().lock(), "{line}")?;
        }

        Ok(())
    }
}

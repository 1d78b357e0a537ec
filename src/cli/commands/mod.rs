//! Each subcommand lives in its own file so the dispatch in `run` stays thin.

mod level;
mod log;
mod status;

pub use level::cmd_level;
pub use log::cmd_log;
pub use status::cmd_status;

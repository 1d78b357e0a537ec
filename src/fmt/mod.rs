//! Everything that turns a log call into text: the file line layout, runtime
//! message templates, and error traces for error-attached calls.

mod line;
mod template;
mod trace;

pub use line::{LineSegment, LineTemplate, LineValues, Placeholder};
pub use template::{FormatError, render, render_args};
pub use trace::{error_trace, with_trace};

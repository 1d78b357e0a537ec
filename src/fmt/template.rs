//! Message rendering for the dispatch path.
//!
//! Compile-time formats arrive as [`fmt::Arguments`] from the level macros.
//! Runtime templates (`"{} joined {0}"`) come from config or user input and
//! can be malformed, so they are checked here and rejected with a
//! [`FormatError`] instead of being written half-rendered.

use std::fmt::{self, Display, Write};
use std::panic::{self, AssertUnwindSafe};

/// Why a message could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// `{` without a matching `}`.
    UnclosedBrace { at: usize },
    /// `}` that is neither escaped nor closing a placeholder.
    UnmatchedClose { at: usize },
    /// Placeholder body is not empty and not an argument index.
    InvalidIndex { at: usize, spec: String },
    /// Placeholder refers past the end of the argument list.
    MissingArgument { index: usize, provided: usize },
    /// An argument's `Display` impl returned an error.
    Render,
    /// An argument's `Display` impl panicked.
    Panicked,
}

impl Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedBrace { at } => write!(f, "unclosed '{{' at byte {at}"),
            Self::UnmatchedClose { at } => write!(f, "unmatched '}}' at byte {at}"),
            Self::InvalidIndex { at, spec } => {
                write!(f, "invalid placeholder '{{{spec}}}' at byte {at}")
            }
            Self::MissingArgument { index, provided } => write!(
                f,
                "placeholder refers to argument {index} but only {provided} given"
            ),
            Self::Render => write!(f, "an argument failed to render"),
            Self::Panicked => write!(f, "an argument panicked while rendering"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders pre-checked format arguments, converting `Display` failures into errors.
///
/// # Errors
/// [`FormatError::Render`] or [`FormatError::Panicked`] when an argument misbehaves.
pub fn render_args(args: fmt::Arguments<'_>) -> Result<String, FormatError> {
    guarded(|| {
        let mut out = String::new();
        out.write_fmt(args).map_err(|_| FormatError::Render)?;
        Ok(out)
    })
}

/// Renders a runtime template: `{}` takes the next argument, `{N}` takes argument N,
/// `{{` and `}}` are literal braces. Surplus arguments are ignored.
///
/// # Errors
/// Any malformed placeholder, a missing argument, or a misbehaving argument.
pub fn render(template: &str, args: &[&dyn Display]) -> Result<String, FormatError> {
    guarded(|| {
        let mut out = String::with_capacity(template.len());
        let mut next_auto = 0;
        let mut chars = template.char_indices().peekable();

        while let Some((at, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, n)| n == '{') => {
                    chars.next();
                    out.push('{');
                }
                '{' => {
                    let body_start = at + 1;
                    let Some(len) = template[body_start..].find('}') else {
                        return Err(FormatError::UnclosedBrace { at });
                    };
                    let spec = &template[body_start..body_start + len];
                    let index = if spec.is_empty() {
                        next_auto += 1;
                        next_auto - 1
                    } else {
                        spec.trim()
                            .parse::<usize>()
                            .map_err(|_| FormatError::InvalidIndex {
                                at,
                                spec: spec.to_string(),
                            })?
                    };
                    let arg = args.get(index).ok_or(FormatError::MissingArgument {
                        index,
                        provided: args.len(),
                    })?;
                    write!(out, "{arg}").map_err(|_| FormatError::Render)?;

                    // Skip the placeholder body and its closing brace
                    for (i, _) in chars.by_ref() {
                        if i == body_start + len {
                            break;
                        }
                    }
                }
                '}' if chars.peek().is_some_and(|&(_, n)| n == '}') => {
                    chars.next();
                    out.push('}');
                }
                '}' => return Err(FormatError::UnmatchedClose { at }),
                _ => out.push(c),
            }
        }

        Ok(out)
    })
}

fn guarded<F>(render: F) -> Result<String, FormatError>
where
    F: FnOnce() -> Result<String, FormatError>,
{
    panic::catch_unwind(AssertUnwindSafe(render)).unwrap_or(Err(FormatError::Panicked))
}

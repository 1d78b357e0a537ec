//! Layout of one line in the log file. The default `{timestamp} {tag} {msg}`
//! is what log viewers parse; tests and embedders can pick another layout.

/// Closed set of known substitution tokens. Unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Timestamp,
    Tag,
    Msg,
    Level,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Tag => "tag",
            Self::Msg => "msg",
            Self::Level => "level",
        }
    }

    pub const ALL: &'static [Self] = &[Self::Timestamp, Self::Tag, Self::Msg, Self::Level];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }
}

/// A parsed piece of a line template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineSegment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Parsed once at build time so the write path only concatenates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTemplate {
    segments: Vec<LineSegment>,
}

/// Values substituted into a [`LineTemplate`] for one record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineValues<'a> {
    pub timestamp: &'a str,
    pub tag: &'a str,
    pub msg: &'a str,
    pub level: &'a str,
}

impl LineTemplate {
    /// Layout used when nothing else is configured.
    pub const DEFAULT: &'static str = "{timestamp} {tag} {msg}";

    /// Turns `"{timestamp} {tag} {msg}"` into a segment list.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            literal.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                // Unterminated brace stays literal
                literal.push_str(&rest[open..]);
                rest = "";
                break;
            };

            let name = &after[..close];
            if let Some(ph) = Placeholder::from_name(name) {
                if !literal.is_empty() {
                    segments.push(LineSegment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(LineSegment::Placeholder(ph));
            } else {
                literal.push('{');
                literal.push_str(name);
                literal.push('}');
            }
            rest = &after[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(LineSegment::Literal(literal));
        }

        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Renders one line without the trailing newline.
    #[must_use]
    pub fn render(&self, values: &LineValues<'_>) -> String {
        let mut line =
            String::with_capacity(values.timestamp.len() + values.tag.len() + values.msg.len() + 8);

        for segment in &self.segments {
            match segment {
                LineSegment::Literal(s) => line.push_str(s),
                LineSegment::Placeholder(ph) => line.push_str(match ph {
                    Placeholder::Timestamp => values.timestamp,
                    Placeholder::Tag => values.tag,
                    Placeholder::Msg => values.msg,
                    Placeholder::Level => values.level,
                }),
            }
        }

        line
    }
}

impl Default for LineTemplate {
    fn default() -> Self {
        Self::parse(Self::DEFAULT)
    }
}

//! Builder options configuration.

/// Line terminator used for headers, line breaks, and table lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// Unix-style `\n`
    #[default]
    Lf,
    /// Windows-style `\r\n`
    CrLf,
}

impl LineEnding {
    /// The terminator as text.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Options shared by a builder and every child builder it creates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuilderOptions {
    /// Line terminator for emitted lines
    pub line_ending: LineEnding,

    /// Turn recorded violations into errors on `finish()`
    pub strict: bool,
}

impl BuilderOptions {
    /// Create new builder options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line terminator.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Enable or disable strict mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

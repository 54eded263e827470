use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Line number and offset within that line, for human-readable reporting
#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub offset: usize,
}

/// A location in the source text, kept as a borrowed slice plus an index
///
/// Line and offset are computed on demand rather than stored, so building
/// an error stays cheap on the failure paths combinators roll back from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SourceLoc<'src> {
    source: &'src str,
    index: usize,
}

impl<'src> SourceLoc<'src> {
    pub fn new(source: &'src str, index: usize) -> Self {
        SourceLoc { source, index }
    }

    /// The absolute byte index where the failure occurred
    pub fn position(&self) -> usize {
        self.index
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Offset is a byte offset, not a column: columns depend on encoding,
    /// tab rendering, and terminal behavior, while the byte offset within
    /// the line is unambiguous.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, byte) in self.source.bytes().enumerate() {
            if i >= self.index {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            offset: self.index - line_start,
        }
    }

    /// Lines of context around the failure, up to two on each side, with a
    /// pointer under the failing position
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let mut lines = Vec::new();

        for (number, content) in self.source.lines().enumerate().map(|(i, l)| (i + 1, l)) {
            if number + 2 < pos.line || number > pos.line + 2 {
                continue;
            }
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for SourceLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        write!(
            f,
            "line {}, offset {} (index {})",
            pos.line, pos.offset, self.index
        )
    }
}

/// Error produced by a failed parse
///
/// Failures are ordinary values threaded back through `Result`, never
/// panics: every variant carries the location it occurred at, and `run`
/// hands the error to the caller for inspection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError<'src> {
    /// A primitive was asked to match against an empty remaining slice
    #[error("unexpected end of input at {0}")]
    UnexpectedEndOfInput(SourceLoc<'src>),

    /// Remaining input does not start with the expected literal
    #[error("tried to match {expected:?}, got {found:?} at {loc}")]
    LiteralMismatch {
        expected: Cow<'static, str>,
        found: String,
        loc: SourceLoc<'src>,
    },

    /// No characters at the cursor satisfy the required character class
    #[error("expected {class} at {loc}")]
    ClassMismatch {
        class: &'static str,
        loc: SourceLoc<'src>,
    },

    /// Every branch of a choice failed
    #[error("no alternative matched at {0}")]
    ExhaustedAlternatives(SourceLoc<'src>),

    /// A required separated list captured zero values
    #[error("expected at least one value at {0}")]
    EmptyList(SourceLoc<'src>),

    /// Anything else: end-of-input assertions, recursion limits, and
    /// messages rewritten by `map_err`
    #[error("{message} at {loc}")]
    Syntax {
        message: Cow<'static, str>,
        loc: SourceLoc<'src>,
    },
}

impl<'src> ParseError<'src> {
    /// Build a general syntax error at the given location
    pub fn syntax(message: impl Into<Cow<'static, str>>, loc: SourceLoc<'src>) -> Self {
        ParseError::Syntax {
            message: message.into(),
            loc,
        }
    }

    /// The location this error occurred at
    pub fn loc(&self) -> SourceLoc<'src> {
        match self {
            ParseError::UnexpectedEndOfInput(loc) => *loc,
            ParseError::LiteralMismatch { loc, .. } => *loc,
            ParseError::ClassMismatch { loc, .. } => *loc,
            ParseError::ExhaustedAlternatives(loc) => *loc,
            ParseError::EmptyList(loc) => *loc,
            ParseError::Syntax { loc, .. } => *loc,
        }
    }

    /// The absolute index this error occurred at
    pub fn position(&self) -> usize {
        self.loc().position()
    }

    /// Render the error with surrounding source context and a pointer to
    /// the failing position
    pub fn report(&self) -> String {
        let mut out = self.to_string();
        for line in self.loc().context_lines() {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}

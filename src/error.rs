//! The `FeedError` type, returned by every fallible operation in the crate.
use std::fmt;
use std::path::PathBuf;

/// Shorthand for results whose error is a `FeedError`
pub type Result<T> = std::result::Result<T, FeedError>;

/// Which of the two input files an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// The file of `<name> follows <names>` lines
    Users,
    /// The file of `<name>> <message>` lines
    Tweets,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileKind::Users => f.write_str("users"),
            FileKind::Tweets => f.write_str("tweets"),
        }
    }
}

/// Why a line was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatReason {
    /// A users line has no `follows`
    MissingFollows,
    /// A tweets line has no `> `
    MissingDelimiter,
    /// A tweet's message is longer than 280 characters
    MessageTooLong,
    /// The name segment doesn't hold exactly one word
    UnparsableName,
}

impl fmt::Display for FormatReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            FormatReason::MissingFollows => "couldn't find follows keyword",
            FormatReason::MissingDelimiter => "couldn't find > pattern",
            FormatReason::MessageTooLong => "message over 280 characters",
            FormatReason::UnparsableName => "couldn't parse name",
        };
        f.write_str(reason)
    }
}

/// Everything that can go wrong between the command line and the first byte
/// of output. None of these are recoverable.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// An input path doesn't exist
    #[error("Path to {kind} file doesn't exist, please provide a valid path: {}", .path.display())]
    PathNotFound {
        /// Which input
        kind: FileKind,
        /// The path as given
        path: PathBuf,
    },

    /// A line of an input file is malformed
    #[error("Seems like your {kind} file has incorrect format at line {line} ({reason})")]
    Format {
        /// Which input
        kind: FileKind,
        /// What was wrong with the line
        reason: FormatReason,
        /// 0-based index among the non-empty lines of the file
        line: usize,
    },

    /// The command line didn't name exactly two files
    #[error("Please provide two inputs (path to users file and tweets file), got {given}")]
    ArgumentCount {
        /// How many file arguments were given
        given: usize,
    },

    /// An input path exists but couldn't be read
    #[error("Can't read {kind} file: {}", .path.display())]
    Read {
        /// Which input
        kind: FileKind,
        /// The path as given
        path: PathBuf,
        /// The underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

impl FeedError {
    pub(crate) fn format(kind: FileKind, reason: FormatReason, line: usize) -> Self {
        FeedError::Format { kind, reason, line }
    }
}

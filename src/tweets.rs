//! Parsing the tweets file
use log::debug;

use crate::error::{FeedError, FileKind, FormatReason, Result};
use crate::lines::lines_of;
use crate::words::single_word;

/// The longest message we accept, in characters
pub const MAX_MESSAGE_CHARS: usize = 280;
const DELIMITER: &str = "> ";

/// One tweet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetRecord {
    /// The single word before the delimiter
    pub author: String,
    /// Everything after the delimiter, as is
    pub message: String,
}

/// Parses one line of the tweets file. The line is split at the *first* `> `,
/// so a message may itself contain `> `.
pub fn parse_tweets_line(line: &str, index: usize) -> Result<TweetRecord> {
    let format_error = |reason| FeedError::format(FileKind::Tweets, reason, index);

    let at = line.find(DELIMITER).ok_or_else(|| format_error(FormatReason::MissingDelimiter))?;
    let (name_segment, rest) = line.split_at(at);
    let message = &rest[DELIMITER.len()..];
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(format_error(FormatReason::MessageTooLong));
    }
    let author = single_word(name_segment).ok_or_else(|| format_error(FormatReason::UnparsableName))?;

    Ok(TweetRecord { author: author.to_owned(), message: message.to_owned() })
}

/// Parses the whole tweets file, keeping file order. Fails on the first
/// malformed line, returning nothing else.
pub fn parse_tweets(text: &str) -> Result<Vec<TweetRecord>> {
    let tweets = lines_of(text)
        .enumerate()
        .map(|(index, line)| parse_tweets_line(line, index))
        .collect::<Result<Vec<_>>>()?;
    debug!("parsed {} tweets", tweets.len());
    Ok(tweets)
}

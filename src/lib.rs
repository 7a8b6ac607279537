//! `tweetfeed` reads a users file (`<name> follows <name>, <name>, ...`) and
//! a tweets file (`<name>> <message>`), and prints, for each user, the tweets
//! written by that user or anyone they follow.
//!
//! The pipeline is `io` (does the file exist? what text is in it?), `lines`
//! (non-empty lines, whatever the line terminator), the `users` and `tweets`
//! parsers, and finally `feed`. Both files are parsed completely before any
//! output is written, so a malformed line means no output at all.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![warn(missing_docs)]

use log::info;
use std::path::Path;

pub mod args;
pub mod error;
pub mod feed;
pub mod io;
pub mod lines;
pub mod style;
pub mod tweets;
pub mod users;
mod words;

pub use crate::error::{FeedError, FileKind, FormatReason, Result};
use crate::tweets::{parse_tweets, TweetRecord};
use crate::users::{parse_users, UserRecord};

/// Checks that both paths exist, then reads and parses both files. Returns
/// the sorted user records and the tweets in file order, or the first error
/// found.
pub fn load(users_path: &Path, tweets_path: &Path) -> Result<(Vec<UserRecord>, Vec<TweetRecord>)> {
    io::ensure_exists(users_path, tweets_path)?;
    let users = parse_users(&io::read_text(FileKind::Users, users_path)?)?;
    let tweets = parse_tweets(&io::read_text(FileKind::Tweets, tweets_path)?)?;
    info!("loaded {} users and {} tweets", users.len(), tweets.len());
    Ok((users, tweets))
}

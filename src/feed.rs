//! Rendering feeds: for each user, the tweets written by that user or by
//! anyone they follow.
use anyhow::Result;
use std::io;

use crate::style::StyleSheet;
use crate::tweets::TweetRecord;
use crate::users::{same_person, UserRecord};

/// The tweets in `user`'s feed, in the order they appear in `tweets`
pub fn feed_of<'a>(
    user: &'a UserRecord,
    tweets: &'a [TweetRecord],
) -> impl Iterator<Item = &'a TweetRecord> + 'a {
    let wanted = move |author: &str| {
        same_person(author, &user.name)
            || user.following.iter().any(|followed| same_person(author, followed))
    };
    tweets.iter().filter(move |tweet| wanted(tweet.author.as_str()))
}

/// Writes every user's feed to `out`: the user's name, a tab-indented
/// `@author: message` line per tweet, then an empty line.
pub fn write_feeds(
    users: &[UserRecord],
    tweets: &[TweetRecord],
    styles: &StyleSheet,
    mut out: impl io::Write,
) -> Result<()> {
    for user in users {
        writeln!(out, "{}", styles.user(&user.name))?;
        for tweet in feed_of(user, tweets) {
            let author = styles.author(&format!("@{}", tweet.author));
            writeln!(out, "\t{author}: {}", tweet.message)?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

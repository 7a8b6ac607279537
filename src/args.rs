//! Code to parse the command line using `clap`, and definitions of the parsed
//! result

use clap::Parser;
use std::path::PathBuf;

use crate::error::{FeedError, Result};
use crate::style::ColorChoice;

/// Returns the parsed command line. `clap` handles `--help`, `--version`,
/// and unknown options itself; a file count other than two is an
/// `ArgumentCount` error.
pub fn parsed() -> Result<Args> {
    checked(CliArgs::parse())
}

/// The parsed command line
#[derive(Debug)]
pub struct Args {
    /// `users` is the file of `<name> follows <names>` lines
    pub users: PathBuf,
    /// `tweets` is the file of `<name>> <message>` lines
    pub tweets: PathBuf,
    /// `color` says whether to color the feeds
    pub color: ColorChoice,
}

#[derive(Debug, Parser)]
#[command(name = "tweetfeed", version)]
/// Prints each user's feed: the tweets written by that user or anyone they follow
struct CliArgs {
    #[arg(value_name = "FILE")]
    /// The users file, then the tweets file
    files: Vec<PathBuf>,
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorChoice::Auto)]
    /// Whether to color the output
    color: ColorChoice,
}

fn checked(parsed: CliArgs) -> Result<Args> {
    let CliArgs { files, color } = parsed;
    let given = files.len();
    match <[PathBuf; 2]>::try_from(files) {
        Ok([users, tweets]) => Ok(Args { users, tweets, color }),
        Err(_) => Err(FeedError::ArgumentCount { given }),
    }
}

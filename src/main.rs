use anyhow::Result;
use is_terminal::IsTerminal;
use std::io;
use tweetfeed::feed::write_feeds;
use tweetfeed::style;

fn main() -> Result<()> {
    env_logger::init();
    let args = tweetfeed::args::parsed()?;
    style::init();
    let styles = style::colored(args.color);

    let (users, tweets) = tweetfeed::load(&args.users, &args.tweets)?;

    let stdout = io::stdout();
    if stdout.is_terminal() {
        write_feeds(&users, &tweets, styles, stdout.lock())?;
    } else {
        write_feeds(&users, &tweets, styles, io::BufWriter::new(stdout.lock()))?;
    }
    Ok(())
}

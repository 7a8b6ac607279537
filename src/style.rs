//! Terminal colors for the feed. With colors off every style is empty, and
//! the output is plain text.
use clap::ValueEnum;
use once_cell::sync::Lazy;

/// When to color the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color if stdout supports it
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

/// The escape sequences wrapped around each styled part of the feed
#[derive(Debug, Clone, Copy)]
pub struct StyleSheet {
    user_start: &'static str,
    author_start: &'static str,
    end: &'static str,
}

impl StyleSheet {
    /// Style for the user name heading each feed
    #[must_use]
    pub fn user(&self, s: &str) -> String {
        format!("{}{}{}", self.user_start, s, self.end)
    }
    /// Style for the `@author` of a feed line
    #[must_use]
    pub fn author(&self, s: &str) -> String {
        format!("{}{}{}", self.author_start, s, self.end)
    }
}

const BOLD_GREEN: &str = "\x1B[32;1m";
const YELLOW: &str = "\x1B[33m";
const RESET: &str = "\x1B[m";
/// Colored output
pub const ALWAYS: StyleSheet = StyleSheet { user_start: BOLD_GREEN, author_start: YELLOW, end: RESET };
/// Plain output
pub const NEVER: StyleSheet = StyleSheet { user_start: "", author_start: "", end: "" };
static AUTO: Lazy<StyleSheet> = Lazy::new(|| {
    use enable_ansi_support::enable_ansi_support;
    use supports_color::Stream;
    let use_color = enable_ansi_support().is_ok() && supports_color::on(Stream::Stdout).is_some();
    if use_color {
        ALWAYS
    } else {
        NEVER
    }
});

/// Decides what `ColorChoice::Auto` means for this run
pub fn init() {
    Lazy::force(&AUTO);
}

/// The style sheet for `cc`. `ColorChoice::Auto` means no color unless
/// `init` has been called.
#[must_use]
pub fn colored(cc: ColorChoice) -> &'static StyleSheet {
    match cc {
        ColorChoice::Always => &ALWAYS,
        ColorChoice::Never => &NEVER,
        ColorChoice::Auto => Lazy::<StyleSheet>::get(&AUTO).unwrap_or(&NEVER),
    }
}

//! Splits file contents into the non-empty lines the parsers look at.
//!
//! A line ends at `\n`, at `\r\n`, or at a lone `\r`, whatever platform we're
//! running on, so a file written on Windows parses the same way everywhere.
use memchr::memchr2;

/// Returns an iterator over the non-empty lines of `text`, without their line
/// terminators.
#[must_use]
pub fn lines_of(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

/// The iterator returned by `lines_of`
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.rest.is_empty() {
            let bytes = self.rest.as_bytes();
            let Some(end) = memchr2(b'\n', b'\r', bytes) else {
                let line = self.rest;
                self.rest = "";
                return Some(line);
            };
            // `\r` and `\n` are ASCII, so `end` and `end + 1` are char boundaries
            let terminator_len = if bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n') {
                2
            } else {
                1
            };
            let line = &self.rest[..end];
            self.rest = &self.rest[end + terminator_len..];
            if !line.is_empty() {
                return Some(line);
            }
        }
        None
    }
}

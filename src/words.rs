//! Word tokens: maximal runs of ASCII letters. Everything else (spaces,
//! punctuation, digits) just separates words.

pub(crate) fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphabetic()).filter(|word| !word.is_empty())
}

/// The only word in `text`, or `None` if there are zero or several
pub(crate) fn single_word(text: &str) -> Option<&str> {
    let mut words = words(text);
    match (words.next(), words.next()) {
        (Some(word), None) => Some(word),
        _ => None,
    }
}

//! Parsing the users file, and merging its lines into one `UserRecord` per
//! user.
//!
//! Names are compared two different ways, and the difference matters:
//! * `same_name` is exact. Lines are merged only when their names are
//!   spelled identically.
//! * `same_person` ignores ASCII case. It's used to drop self-follows, to
//!   dedup following lists, to decide whether a followed name already has a
//!   record, and to match tweets to feeds. `cmp_names` orders by the same
//!   case-folded form.
use fxhash::{FxBuildHasher, FxHashSet};
use indexmap::IndexMap;
use log::debug;
use std::cmp::Ordering;

use crate::error::{FeedError, FileKind, FormatReason, Result};
use crate::lines::lines_of;
use crate::words::{single_word, words};

const FOLLOWS: &str = "follows";
const FOLLOWING_SEPARATOR: &str = ", ";

/// A user and the people they follow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// The first spelling seen for this user
    pub name: String,
    /// Unique under `same_person`, never `same_person` as `name`, in
    /// first-seen order
    pub following: Vec<String>,
}

impl UserRecord {
    /// A user who follows nobody
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        UserRecord { name: name.into(), following: Vec::new() }
    }
}

/// Exact comparison. This is the key equality of the map `merge_users`
/// folds into.
#[must_use]
pub fn same_name(a: &str, b: &str) -> bool {
    a == b
}

/// ASCII case-insensitive comparison
#[must_use]
pub fn same_person(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Orders names by their ASCII-lowercased bytes
#[must_use]
pub fn cmp_names(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.bytes().map(|b| b.to_ascii_lowercase()).collect::<Vec<u8>>();
    folded(a).cmp(&folded(b))
}

/// Parses one line of the users file. `index` is the line's position among
/// the file's non-empty lines, for error messages.
///
/// The line is split at the *first* `follows`, so `Ward follows follows`
/// means Ward follows a user named `follows`. (And `follows follows Ward`
/// is an error, since the name segment is empty.)
pub fn parse_users_line(line: &str, index: usize) -> Result<UserRecord> {
    let format_error = |reason| FeedError::format(FileKind::Users, reason, index);

    let at = line.find(FOLLOWS).ok_or_else(|| format_error(FormatReason::MissingFollows))?;
    let (name_segment, rest) = line.split_at(at);
    let following_segment = &rest[FOLLOWS.len()..];

    let name = single_word(name_segment).ok_or_else(|| format_error(FormatReason::UnparsableName))?;
    let following = following_segment
        .split(FOLLOWING_SEPARATOR)
        .filter_map(|piece| words(piece).next())
        .filter(|followed| !same_person(followed, name))
        .map(str::to_owned)
        .collect();

    Ok(UserRecord { name: name.to_owned(), following })
}

/// Parses the whole users file and returns the merged, sorted records.
/// Fails on the first malformed line, returning nothing else.
pub fn parse_users(text: &str) -> Result<Vec<UserRecord>> {
    let parsed = lines_of(text)
        .enumerate()
        .map(|(index, line)| parse_users_line(line, index))
        .collect::<Result<Vec<_>>>()?;
    debug!("parsed {} users lines", parsed.len());
    Ok(merge_users(parsed))
}

// Keyed by exact name (`same_name`); an `IndexMap` keeps the first-seen order
type ByExactName = IndexMap<String, Vec<String>, FxBuildHasher>;

/// Merges records with the same name (under `same_name`), adds an empty
/// record for every followed name that has none (under `same_person`), and
/// sorts by `cmp_names`. Records that compare equal keep their relative
/// order.
///
/// Merging already merged records gives back the same list.
#[must_use]
pub fn merge_users(parsed: impl IntoIterator<Item = UserRecord>) -> Vec<UserRecord> {
    let mut merged = ByExactName::default();
    for UserRecord { name, following } in parsed {
        let so_far = merged.entry(name).or_default();
        for followed in following {
            add_unique(so_far, followed);
        }
    }
    debug!("merged users file into {} users", merged.len());

    let mut records: Vec<UserRecord> =
        merged.into_iter().map(|(name, following)| UserRecord { name, following }).collect();

    let mut known: FxHashSet<String> =
        records.iter().map(|record| record.name.to_ascii_lowercase()).collect();
    let followed: Vec<String> =
        records.iter().flat_map(|record| record.following.iter().cloned()).collect();
    for name in followed {
        if known.insert(name.to_ascii_lowercase()) {
            debug!("adding {name}, who is followed but follows nobody");
            records.push(UserRecord::new(name));
        }
    }

    // `sort_by` is stable
    records.sort_by(|a, b| cmp_names(&a.name, &b.name));
    records
}

fn add_unique(following: &mut Vec<String>, followed: String) {
    if !following.iter().any(|already| same_person(already, &followed)) {
        following.push(followed);
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn user(name: &str, following: &[&str]) -> UserRecord {
        UserRecord { name: name.to_string(), following: following.iter().map(|s| s.to_string()).collect() }
    }

    fn format_reason(result: Result<impl std::fmt::Debug>) -> (FormatReason, usize) {
        match result {
            Err(FeedError::Format { kind: FileKind::Users, reason, line }) => (reason, line),
            other => panic!("expected a users format error, got {other:?}"),
        }
    }

    #[test]
    fn parses_a_plain_line() {
        assert_eq!(
            parse_users_line("Ward follows Alan, Martin", 0).unwrap(),
            user("Ward", &["Alan", "Martin"])
        );
    }

    #[test]
    fn tolerates_stray_whitespace_and_symbols() {
        assert_eq!(
            parse_users_line("  *Ward*   follows   Alan ,  Martin!, , 42", 0).unwrap(),
            user("Ward", &["Alan", "Martin"])
        );
    }

    #[test]
    fn only_the_first_word_of_each_followed_piece_counts() {
        assert_eq!(
            parse_users_line("Ward follows Alan Turing, Martin Fowler", 0).unwrap(),
            user("Ward", &["Alan", "Martin"])
        );
    }

    #[test]
    fn a_line_without_follows_is_an_error() {
        assert_eq!(format_reason(parse_users_line("Ward likes Alan", 4)), (FormatReason::MissingFollows, 4));
        // `follows` must appear literally; case matters here
        assert_eq!(format_reason(parse_users_line("Ward Follows Alan", 0)).0, FormatReason::MissingFollows);
    }

    #[test]
    fn the_name_segment_must_hold_exactly_one_word() {
        assert_eq!(format_reason(parse_users_line("Ward Cunningham follows Alan", 2)), (FormatReason::UnparsableName, 2));
        assert_eq!(format_reason(parse_users_line("  follows Alan", 0)).0, FormatReason::UnparsableName);
        assert_eq!(format_reason(parse_users_line("123 follows Alan", 0)).0, FormatReason::UnparsableName);
    }

    #[test]
    fn follows_can_be_a_user_name_after_the_keyword() {
        assert_eq!(parse_users_line("Ward follows follows", 0).unwrap(), user("Ward", &["follows"]));
        // The first `follows` is the keyword, so the name segment is empty
        assert_eq!(format_reason(parse_users_line("follows follows Ward", 0)).0, FormatReason::UnparsableName);
    }

    #[test]
    fn nobody_follows_themselves() {
        assert_eq!(
            parse_users_line("Ward follows ward, Alan, WARD", 0).unwrap(),
            user("Ward", &["Alan"])
        );
    }

    #[test]
    fn following_nobody_is_fine() {
        assert_eq!(parse_users_line("Ward follows", 0).unwrap(), user("Ward", &[]));
    }

    #[test]
    fn example_users_file() {
        let records = parse_users("Alice follows Bob, Carol\nBob follows Alice\n").unwrap();
        assert_eq!(
            records,
            vec![user("Alice", &["Bob", "Carol"]), user("Bob", &["Alice"]), user("Carol", &[])]
        );
    }

    #[test]
    fn lines_with_the_same_name_are_merged_without_duplicates() {
        let records = parse_users("Ward follows Alan\nAlan follows Martin\nWard follows Martin, Alan\n").unwrap();
        assert_eq!(
            records,
            vec![user("Alan", &["Martin"]), user("Martin", &[]), user("Ward", &["Alan", "Martin"])]
        );
    }

    #[test]
    fn following_lists_are_deduplicated_ignoring_case() {
        let records = parse_users("Ward follows Alan, alan\nWard follows ALAN, Martin\n").unwrap();
        assert_eq!(records[2], user("Ward", &["Alan", "Martin"]));
    }

    #[test]
    fn merging_uses_the_exact_name_but_sorting_ignores_case() {
        let records = parse_users("ward follows Alan\nWard follows Martin\n").unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        // `ward` and `Ward` stay separate records, in their original relative order
        assert_eq!(names, vec!["Alan", "Martin", "ward", "Ward"]);
    }

    #[test]
    fn followed_names_with_a_record_in_another_case_are_not_added() {
        let records = parse_users("Ward follows alan\nAlan follows Ward\n").unwrap();
        assert_eq!(records, vec![user("Alan", &["Ward"]), user("Ward", &["alan"])]);
    }

    #[test]
    fn a_followed_only_name_is_added_once_whatever_its_case() {
        let records = parse_users("Ward follows Martin\nAlan follows martin\n").unwrap();
        assert_eq!(records, vec![user("Alan", &["martin"]), user("Martin", &[]), user("Ward", &["Martin"])]);
    }

    #[test]
    fn the_first_bad_line_fails_the_whole_file() {
        let text = "Ward follows Alan\n\nAlan follows Martin\nMartin\nWard follows\n";
        // Blank lines don't count: `Martin` is non-empty line 2
        assert_eq!(format_reason(parse_users(text)), (FormatReason::MissingFollows, 2));
    }

    #[test]
    fn windows_line_endings_parse_cleanly() {
        let records = parse_users("Ward follows Alan, Martin\r\nAlan follows Ward\r\n").unwrap();
        assert_eq!(records, vec![user("Alan", &["Ward"]), user("Martin", &[]), user("Ward", &["Alan", "Martin"])]);
    }

    #[test]
    fn names_are_unique_sorted_and_never_self_followed() {
        let text = "Zed follows amy, Bob, zed\nbob follows Amy, Carl\nAmy follows Zed, bob\nZed follows Dan, carl\n";
        let records = parse_users(text).unwrap();
        let folded: Vec<String> = records.iter().map(|r| r.name.to_ascii_lowercase()).collect();
        assert!(folded.iter().tuple_windows().all(|(a, b)| a < b), "{folded:?}");
        for record in &records {
            assert!(record.following.iter().all(|f| !same_person(f, &record.name)), "{record:?}");
            assert!(record.following.iter().combinations(2).all(|pair| !same_person(pair[0], pair[1])));
        }
    }

    #[test]
    fn merging_merged_records_changes_nothing() {
        let text = "Zed follows amy, Bob\nbob follows Amy, Carl\nAmy follows Zed\nZed follows Dan, carl, bob\n";
        let once = parse_users(text).unwrap();
        let twice = merge_users(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn cmp_names_ignores_case() {
        assert_eq!(cmp_names("alan", "Alan"), Ordering::Equal);
        assert_eq!(cmp_names("alan", "Bob"), Ordering::Less);
        assert_eq!(cmp_names("Zed", "amy"), Ordering::Greater);
        assert!(same_person("WARD", "ward"));
        assert!(!same_name("WARD", "ward"));
    }
}

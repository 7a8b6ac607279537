//! Input functions: checking that the operands exist, and reading a file into
//! text the parsers can work on.
use bstr::ByteSlice;
use log::debug;
use std::{fs, path::Path};

use crate::error::{FeedError, FileKind, Result};

/// Fails with `PathNotFound` if either path is missing. The users path is
/// checked first.
pub fn ensure_exists(users_path: &Path, tweets_path: &Path) -> Result<()> {
    for (kind, path) in [(FileKind::Users, users_path), (FileKind::Tweets, tweets_path)] {
        if !path.exists() {
            return Err(FeedError::PathNotFound { kind, path: path.to_owned() });
        }
    }
    Ok(())
}

/// Reads the file at `path` and returns its contents as a `String`. UTF-16
/// files (recognized by their Byte Order Mark) are translated to UTF-8, a
/// UTF-8 Byte Order Mark is dropped, and invalid UTF-8 becomes the Unicode
/// REPLACEMENT CHARACTER.
pub fn read_text(kind: FileKind, path: &Path) -> Result<String> {
    let contents = fs::read(path)
        .map_err(|source| FeedError::Read { kind, path: path.to_owned(), source })?;
    debug!("read {} bytes from {kind} file {}", contents.len(), path.display());
    Ok(text_of(contents))
}

fn text_of(contents: Vec<u8>) -> String {
    let contents = decode_if_utf16(contents);
    let without_bom = contents.strip_prefix(BOM_BYTES).unwrap_or(&contents[..]);
    without_bom.to_str_lossy().into_owned()
}

/// Decode UTF-16 to UTF-8 if we see a UTF-16 Byte Order Mark at the beginning of `candidate`.
/// Otherwise return `candidate` unchanged
fn decode_if_utf16(candidate: Vec<u8>) -> Vec<u8> {
    // "without BOM handling" means that the UTF-16 BOM is translated to a UTF-8 BOM,
    // which `text_of` then strips
    if let Some((enc, _)) = encoding_rs::Encoding::for_bom(&candidate) {
        if [encoding_rs::UTF_16LE, encoding_rs::UTF_16BE].contains(&enc) {
            let (translated, _had_malformed_sequences) =
                enc.decode_without_bom_handling(&candidate);
            return translated.into_owned().into_bytes();
        }
    }
    candidate
}

const BOM_BYTES: &[u8] = b"\xEF\xBB\xBF";

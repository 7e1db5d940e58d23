//! Text Normalization
//!
//! Cleans fetched web page text before prompt assembly.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// HTML/XML tags, angle brackets included
    static ref TAG_RE: Regex = Regex::new(r"<[^>]*?>").expect("tag pattern");
    /// Well-formed http/https URLs, including percent-escapes
    static ref URL_RE: Regex = Regex::new(
        r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\(\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+"
    )
    .expect("url pattern");
    /// Anything that is not a word character or whitespace
    static ref NON_WORD_RE: Regex = Regex::new(r"[^\w\s]").expect("non-word pattern");
    /// Runs of whitespace
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").expect("whitespace pattern");
}

/// Normalize raw page text into clean prompt input.
///
/// The stages run in a fixed order: tags, then URLs, then stray punctuation,
/// then whitespace collapsing, then a final trim. URL stripping must run
/// before punctuation stripping, while the `://` scheme markers are still
/// intact. The result contains only word characters separated by single
/// spaces, with no leading or trailing whitespace; it may be empty.
///
/// Total over any input. Unmatched angle brackets and malformed
/// percent-escapes degrade to partial removal, never an error.
pub fn normalize(raw: &str) -> String {
    let text = TAG_RE.replace_all(raw, "");
    let text = URL_RE.replace_all(&text, "");
    let text = NON_WORD_RE.replace_all(&text, "");
    let text = WHITESPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

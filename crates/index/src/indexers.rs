//! N-gram indexers
//!
//! Pure functions turning a string into a set of index tokens under a
//! chosen strategy:
//! - `startswith`: all prefixes of each word and of the whole compacted
//!   string
//! - `contains`: every contiguous substring of each word and of the whole
//!   compacted string
//! - `firstletter`: the first character of each non-stopword word
//!
//! Words carrying diacritics contribute both their original and folded
//! forms, so accented text is findable with a plain-ASCII query. Token
//! lengths and offsets are character-based (grapheme clusters), never
//! bytes.
//!
//! Size bounds are preconditions: `min_size` must be at least 1 and no
//! greater than `max_size`. Violations panic.

use crate::clean::{fold, words};
use std::collections::BTreeSet;
use unicode_segmentation::UnicodeSegmentation;

/// Emit all prefixes of each word and of the word concatenation
///
/// A word shorter than `min_size` contributes no tokens. `max_size` caps
/// the length of each emitted token, not the token count.
///
/// # Example
///
/// ```
/// use bridgewalk_index::indexers::startswith;
///
/// let tokens = startswith("hello", 1, None);
/// let expected: Vec<&str> = vec!["h", "he", "hel", "hell", "hello"];
/// assert_eq!(tokens.into_iter().collect::<Vec<_>>(), expected);
/// ```
pub fn startswith(text: &str, min_size: usize, max_size: Option<usize>) -> BTreeSet<String> {
    check_bounds(min_size, max_size);
    let mut tokens = BTreeSet::new();
    for unit in token_units(text) {
        let graphemes: Vec<&str> = unit.graphemes(true).collect();
        let longest = cap(graphemes.len(), max_size);
        for end in min_size..=longest {
            tokens.insert(graphemes[..end].concat());
        }
    }
    tokens
}

/// Emit every contiguous substring of each word and of the word
/// concatenation
///
/// The prefix set produced by [`startswith`] is always a subset of this
/// set for the same input and bounds.
pub fn contains(text: &str, min_size: usize, max_size: Option<usize>) -> BTreeSet<String> {
    check_bounds(min_size, max_size);
    let mut tokens = BTreeSet::new();
    for unit in token_units(text) {
        let graphemes: Vec<&str> = unit.graphemes(true).collect();
        for start in 0..graphemes.len() {
            let longest = cap(graphemes.len() - start, max_size);
            for len in min_size..=longest {
                tokens.insert(graphemes[start..start + len].concat());
            }
        }
    }
    tokens
}

/// Emit the first character of each word not present in `ignore`
///
/// The stopword comparison is on the folded-lowercase form of both
/// sides, so an accented or differently-cased variant of a stopword is
/// still skipped. The emitted character keeps its original case.
///
/// # Example
///
/// ```
/// use bridgewalk_index::indexers::firstletter;
///
/// let tokens = firstletter("the words", &["the"]);
/// assert_eq!(tokens.into_iter().collect::<Vec<_>>(), vec!["w"]);
/// ```
pub fn firstletter(text: &str, ignore: &[&str]) -> BTreeSet<String> {
    let mut tokens = BTreeSet::new();
    for word in words(text) {
        let folded = fold(&word).to_lowercase();
        if ignore.iter().any(|stop| fold(stop).to_lowercase() == folded) {
            continue;
        }
        if let Some(first) = word.graphemes(true).next() {
            tokens.insert(first.to_string());
        }
    }
    tokens
}

/// The strings tokens are generated from: each word, each word's folded
/// form when it differs, the concatenation of all words, and the folded
/// concatenation when it differs.
fn token_units(text: &str) -> Vec<String> {
    let word_list = words(text);
    let mut units = Vec::new();
    for word in &word_list {
        let folded = fold(word);
        if &folded != word {
            units.push(folded);
        }
        units.push(word.clone());
    }
    if word_list.len() > 1 {
        let joined = word_list.concat();
        let folded = fold(&joined);
        if folded != joined {
            units.push(folded);
        }
        units.push(joined);
    }
    units
}

fn check_bounds(min_size: usize, max_size: Option<usize>) {
    assert!(min_size >= 1, "min_size must be at least 1");
    if let Some(max) = max_size {
        assert!(min_size <= max, "min_size must not exceed max_size");
    }
}

fn cap(len: usize, max_size: Option<usize>) -> usize {
    match max_size {
        Some(max) => max.min(len),
        None => len,
    }
}

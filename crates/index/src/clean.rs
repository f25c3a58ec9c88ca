//! Text normalization shared by index-time tokenization and query-time
//! cleaning
//!
//! The external index's query parser chokes on most punctuation whether or
//! not it is escaped, so everything outside a small allowlist is removed
//! outright before text reaches either the indexers or a query string.

/// Punctuation that survives cleaning
pub const ALLOWED_PUNCTUATION: &[char] = &['_', '-'];

/// Remove disallowed punctuation, collapse whitespace runs and trim
///
/// Token boundaries downstream are character-based, so non-ASCII letters
/// pass through untouched.
///
/// # Example
///
/// ```
/// use bridgewalk_index::clean::clean;
///
/// assert_eq!(clean("hello,   world!"), "hello world");
/// assert_eq!(clean("with-punctuation"), "with-punctuation");
/// ```
pub fn clean(text: &str) -> String {
    let stripped: String = text
        .chars()
        .filter(|c| !c.is_ascii_punctuation() || ALLOWED_PUNCTUATION.contains(c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split cleaned text into words
///
/// Allowed punctuation is kept by [`clean`] but still separates words for
/// tokenization: `with-punctuation` yields `with` and `punctuation`.
pub fn words(text: &str) -> Vec<String> {
    clean(text)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

/// Fold common Latin diacritics to their base letter
///
/// Indexers emit tokens for both the original and the folded form of each
/// word, so `días` is findable as both `día…` and `dia…`. Combining marks
/// are dropped.
pub fn fold(word: &str) -> String {
    word.chars().filter_map(fold_char).collect()
}

fn fold_char(c: char) -> Option<char> {
    let folded = match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ĕ' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ĩ' | 'ī' | 'į' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ō' | 'ő' => 'o',
        'ù' | 'ú' | 'û' | 'ü' | 'ũ' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ñ' | 'ń' | 'ň' => 'n',
        'ç' | 'ć' | 'č' => 'c',
        'ś' | 'š' => 's',
        'ź' | 'ż' | 'ž' => 'z',
        'ğ' => 'g',
        'ř' => 'r',
        'ť' => 't',
        'ď' => 'd',
        'ł' => 'l',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' | 'Ā' | 'Ă' | 'Ą' => 'A',
        'È' | 'É' | 'Ê' | 'Ë' | 'Ē' | 'Ĕ' | 'Ė' | 'Ę' | 'Ě' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' | 'Ĩ' | 'Ī' | 'Į' => 'I',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ō' | 'Ő' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' | 'Ũ' | 'Ū' | 'Ů' | 'Ű' => 'U',
        'Ý' => 'Y',
        'Ñ' | 'Ń' | 'Ň' => 'N',
        'Ç' | 'Ć' | 'Č' => 'C',
        'Ś' | 'Š' => 'S',
        'Ź' | 'Ż' | 'Ž' => 'Z',
        // Combining diacritical marks disappear entirely
        '\u{0300}'..='\u{036F}' => return None,
        other => other,
    };
    Some(folded)
}

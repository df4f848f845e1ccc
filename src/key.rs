//! Canonical keys for anagram classes

/// Return the anagram key for a word : its characters sorted by code point.
///
/// Two words are anagrams of each other exactly when their keys are equal.
/// Comparison is case sensitive, and no normalization is done, so `"Tea"`
/// and `"eat"` have different keys.
/// ```
/// use anagrams::key::anagram_key;
/// assert_eq!(anagram_key("listen"), "eilnst");
/// assert_eq!(anagram_key("listen"), anagram_key("silent"));
/// assert_eq!(anagram_key(""), "");
/// ```
#[must_use]
pub fn anagram_key(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// length of a key, in characters
#[must_use]
pub fn key_len(key: &str) -> usize {
    key.chars().count()
}

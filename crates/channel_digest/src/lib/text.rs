use std::borrow::Cow;

use itertools::Itertools;

/// Bounds `text` to at most `word_limit` whitespace-separated words.
///
/// Text already within the limit is returned as-is, whitespace included.
/// Truncated text has its words rejoined with single spaces.
pub fn truncate_words(text: &str, word_limit: usize) -> Cow<'_, str> {
    let mut words = text.split_whitespace();

    if words.clone().nth(word_limit).is_none() {
        return Cow::Borrowed(text);
    }

    Cow::Owned(words.by_ref().take(word_limit).join(" "))
}

use std::borrow::Borrow;

use radix_trie::{SubTrie, Trie, TrieCommon, TrieKey};
use unicode_segmentation::UnicodeSegmentation;

#[allow(unused_macros)]
macro_rules! strs {
    ( $( $ss: expr ),* ) => {
        vec![ $( String::from($ss), )* ]
    };
}

/// Internal upper limit on number of completions to return.
pub(crate) const MAX_COMPLETIONS: usize = 500;

#[inline]
pub(crate) fn subtrie_keys<K, V>(subtrie: SubTrie<K, V>) -> Vec<K>
where
    K: Clone + TrieKey,
{
    subtrie.keys().take(MAX_COMPLETIONS).cloned().collect()
}

#[inline]
pub(crate) fn completion_keys<K, V>(trie: &Trie<K, V>, prefix: &str) -> Vec<K>
where
    K: Borrow<str> + Clone + TrieKey,
{
    trie.get_raw_descendant(prefix).map(subtrie_keys).unwrap_or_default()
}

/// Compare two strings for equality, optionally ignoring case.
pub(crate) fn fold_eq(a: &str, b: &str, fold: bool) -> bool {
    if a == b {
        return true;
    }

    fold && a.chars().flat_map(char::to_lowercase).eq(b.chars().flat_map(char::to_lowercase))
}

/// Determine the longest common prefix of `a` and `b`, as a slice of `a`.
///
/// Comparison is done grapheme by grapheme, so that multi-byte sequences never
/// get split in the middle.
pub(crate) fn common_prefix<'a>(a: &'a str, b: &str, fold: bool) -> &'a str {
    if a == b {
        return a;
    }

    let mut end = 0;
    let itera = UnicodeSegmentation::grapheme_indices(a, false);
    let iterb = UnicodeSegmentation::graphemes(b, false);

    for ((i, ga), gb) in itera.zip(iterb) {
        if !fold_eq(ga, gb, fold) {
            break;
        }

        end = i + ga.len();
    }

    return &a[..end];
}

/// Clamp an index to the nearest character boundary at or before it.
pub(crate) fn clamp_cursor(s: &str, cursor: usize) -> usize {
    let mut idx = cursor.min(s.len());

    while !s.is_char_boundary(idx) {
        idx -= 1;
    }

    return idx;
}

//! # yomi-romaji
//!
//! ## Overview
//!
//! This crate provides [RomajiGenerator], a [PatternGenerator] that expands romanized
//! Japanese readings into their hiragana and katakana spellings, so that typing
//! `"haru"` can complete to `"はるかぜ"` or `"ハルカゼ"`.
//!
//! Both Hepburn (`shi`, `chi`, `tsu`, `fu`, `ji`) and wapuro (`si`, `ti`, `tu`, `hu`,
//! `zi`) romanizations are accepted, along with doubled consonants for the sokuon
//! (`tt` becomes `っ`), `nn` for `ん`, `-` for the long-vowel mark, and fullwidth
//! digits. A trailing partial syllable is expanded into every syllable it could still
//! become, so `"hat"` already matches `"はと"` while the next keystroke is in flight.
//! The token itself always stays one of the alternatives, keeping plain ASCII
//! candidates matchable.
//!
//! ## Example
//!
//! ```
//! use yomi::{CollectionSource, Completion, ReadingCompleter};
//! use yomi_romaji::RomajiGenerator;
//!
//! let completer = ReadingCompleter::new(RomajiGenerator::default());
//! let source = CollectionSource::new(["はるかぜ", "はるさめ"]);
//!
//! let res = completer.try_complete("haru", 4, &source, None).unwrap();
//! assert_eq!(res, Completion::Extended { text: "はる".into(), cursor: 6 });
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::needless_return)]

use yomi::{PatternError, PatternGenerator, PatternResult};

mod table;

use self::table::Syllable;

/// A [PatternGenerator] that maps romanized readings onto kana spellings.
///
/// Tokens are limited to ASCII letters, digits and `-`. Anything else makes the
/// token unusable, since it can no longer be a romanization.
#[derive(Clone, Copy, Debug, Default)]
pub struct RomajiGenerator;

impl PatternGenerator for RomajiGenerator {
    fn generate(&self, token: &str) -> PatternResult<String> {
        if !token.chars().all(is_romaji_char) {
            return Err(PatternError::UnusableToken(token.into()));
        }

        let lower = token.to_ascii_lowercase();
        let (hira, kata, tail) = kana_reading(&lower);
        let mut alternatives = vec![regex::escape(token)];

        let spellings = [
            kana_alternative(&hira, tail, |row| row.hira, "っ"),
            kana_alternative(&kata, tail, |row| row.kata, "ッ"),
        ];

        for alt in spellings.into_iter().flatten() {
            if alternatives.iter().all(|prev| prev != &alt) {
                alternatives.push(alt);
            }
        }

        return Ok(alternation(&alternatives));
    }
}

fn is_romaji_char(chr: char) -> bool {
    chr.is_ascii_alphanumeric() || chr == '-'
}

fn is_vowel(chr: u8) -> bool {
    matches!(chr, b'a' | b'i' | b'u' | b'e' | b'o')
}

/// Convert a lowercased token into its hiragana and katakana readings, along with
/// any trailing letters that don't form a full syllable yet.
fn kana_reading(lower: &str) -> (String, String, &str) {
    let bytes = lower.as_bytes();
    let mut hira = String::new();
    let mut kata = String::new();
    let mut i = 0;

    while i < lower.len() {
        let rest = &lower[i..];
        let chr = bytes[i];
        let doubled = bytes.get(i + 1) == Some(&chr);

        // A doubled consonant spells the sokuon.
        if doubled && chr != b'n' && chr.is_ascii_alphabetic() && !is_vowel(chr) {
            hira.push('っ');
            kata.push('ッ');
            i += 1;
            continue;
        }

        if let Some(row) = table::lookup(rest) {
            hira.push_str(row.hira);
            kata.push_str(row.kata);
            i += row.romaji.len();
            continue;
        }

        // A bare n closes into ん when anything but a vowel or y follows.
        if chr == b'n' && bytes.get(i + 1).is_some_and(|next| !is_vowel(*next) && *next != b'y') {
            hira.push('ん');
            kata.push('ン');
            i += 1;
            continue;
        }

        // Whatever remains is an incomplete final syllable.
        return (hira, kata, rest);
    }

    return (hira, kata, "");
}

/// Build one kana alternative from a converted reading and its unconverted tail.
///
/// The tail is replaced by an alternation over every syllable it could still begin.
/// If it can't begin any, there is no spelling in this script and `None` is
/// returned.
fn kana_alternative(
    kana: &str,
    tail: &str,
    pick: fn(&'static Syllable) -> &'static str,
    sokuon: &'static str,
) -> Option<String> {
    if tail.is_empty() {
        return Some(kana.to_string());
    }

    let mut options: Vec<String> = Vec::new();

    // A lone consonant may also be the first half of a sokuon pair.
    if let [chr] = tail.as_bytes() {
        if *chr != b'n' && chr.is_ascii_alphabetic() && !is_vowel(*chr) {
            options.push(sokuon.to_string());
        }
    }

    for row in table::completions(tail) {
        let spelled = pick(row);

        if options.iter().all(|prev| prev != spelled) {
            options.push(spelled.to_string());
        }
    }

    if options.is_empty() {
        return None;
    }

    return Some(format!("{kana}{}", alternation(&options)));
}

fn alternation(options: &[String]) -> String {
    match options {
        [] => String::new(),
        [single] => single.clone(),
        _ => format!("(?:{})", options.join("|")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yomi::{CollectionSource, Completion, ReadingCompleter, TokenPattern};

    fn expr(token: &str) -> String {
        RomajiGenerator.generate(token).unwrap()
    }

    fn pat(token: &str) -> TokenPattern {
        TokenPattern::compile(token, &RomajiGenerator, false).unwrap()
    }

    #[test]
    fn test_generate_simple() {
        assert_eq!(expr("a"), "(?:a|あ|ア)");
        assert_eq!(expr("haru"), "(?:haru|はる|ハル)");
        assert_eq!(expr("tsunami"), "(?:tsunami|つなみ|ツナミ)");
    }

    #[test]
    fn test_generate_hepburn_and_wapuro() {
        assert_eq!(expr("shi"), "(?:shi|し|シ)");
        assert_eq!(expr("si"), "(?:si|し|シ)");
        assert_eq!(expr("fuji"), "(?:fuji|ふじ|フジ)");
        assert_eq!(expr("huzi"), "(?:huzi|ふじ|フジ)");
    }

    #[test]
    fn test_generate_youon() {
        assert_eq!(expr("kyoto"), "(?:kyoto|きょと|キョト)");
        assert!(pat("sha").matches("しゃしん"));
        assert!(pat("jagaimo").matches("じゃがいも"));
    }

    #[test]
    fn test_generate_sokuon() {
        assert_eq!(expr("hatto"), "(?:hatto|はっと|ハット)");
        assert_eq!(expr("kitte"), "(?:kitte|きって|キッテ)");
    }

    #[test]
    fn test_generate_syllabic_n() {
        assert_eq!(expr("kanji"), "(?:kanji|かんじ|カンジ)");
        assert_eq!(expr("nn"), "(?:nn|ん|ン)");
        assert!(pat("ra-men").matches("らーめん"));
        assert!(pat("hon").matches("ほんや"));
    }

    #[test]
    fn test_generate_digits() {
        assert_eq!(expr("12"), "(?:12|１２)");
        assert!(pat("heisei30").matches("へいせい３０ねん"));
    }

    #[test]
    fn test_generate_trailing_partial() {
        let p = pat("hat");

        assert!(p.matches("はた"));
        assert!(p.matches("はと"));
        assert!(p.matches("はっとする"));
        assert!(p.matches("ハット"));
        assert!(p.matches("hat trick"));
        assert!(!p.matches("はる"));

        // A partial youon spelling still narrows to the right column.
        let p = pat("ky");

        assert!(p.matches("きょう"));
        assert!(!p.matches("かう"));
    }

    #[test]
    fn test_generate_uppercase() {
        assert_eq!(expr("Haru"), "(?:Haru|はる|ハル)");
    }

    #[test]
    fn test_generate_empty() {
        assert_eq!(expr(""), "");
    }

    #[test]
    fn test_generate_unusable() {
        assert!(matches!(
            RomajiGenerator.generate("はる"),
            Err(PatternError::UnusableToken(_))
        ));
        assert!(matches!(
            RomajiGenerator.generate("ha ru"),
            Err(PatternError::UnusableToken(_))
        ));
    }

    #[test]
    fn test_complete_with_collection() {
        let completer = ReadingCompleter::new(RomajiGenerator);
        let source = CollectionSource::new(["はるかぜ", "はるさめ", "ハルカス", "fuyu"]);

        let res = completer.list_completions("haru", 4, &source, None).unwrap();
        assert_eq!(res.candidates, ["はるかぜ", "はるさめ", "ハルカス"].map(String::from));
        assert_eq!(res.prefix_len, 0);

        // The scripts diverge immediately, so there is nothing to extend by.
        let res = completer.try_complete("haru", 4, &source, None).unwrap();
        assert_eq!(res, Completion::NoChange);

        let source = CollectionSource::new(["はるかぜ", "はるさめ"]);
        let res = completer.try_complete("haru", 4, &source, None).unwrap();
        assert_eq!(res, Completion::Extended { text: "はる".into(), cursor: 6 });

        // Completed text has no romanized core left, so the kana match literally
        // and the input already covers the shared run.
        let res = completer.try_complete("はる", 6, &source, None).unwrap();
        assert_eq!(res, Completion::NoChange);
    }
}

//! # Completion Sources
//!
//! ## Overview
//!
//! This module contains the [CompletionSource] trait and the sources shipped with this
//! crate. A source owns two things the engine does not: the boundary rule that splits
//! an input into its fixed prefix and completable suffix, and the enumeration of the
//! candidates that extend that prefix.
use std::fs::DirEntry;
use std::io::ErrorKind;
use std::path::{Path, MAIN_SEPARATOR};

use radix_trie::{Trie, TrieCommon};

use crate::errors::SourceResult;
use crate::pattern::TokenPattern;
use crate::util::{completion_keys, MAX_COMPLETIONS};

/// Candidate filter supplied by the caller of an entry point.
pub type CandidatePredicate = dyn Fn(&str) -> bool;

type EnumerateFn =
    dyn Fn(&str, Option<&CandidatePredicate>, Option<&TokenPattern>) -> SourceResult<Vec<String>>;
type BoundaryFn = dyn Fn(&str) -> usize;

/// The matching style name that reading-aware sources declare support for.
pub const READING_STYLE: &str = "reading";

/// What kind of values a completion source yields.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum SourceCategory {
    /// Words or other plain text values.
    Text,

    /// Filenames.
    File,

    /// Command names.
    Command,

    /// Some other application-specific kind of value.
    Custom,
}

/// Description of a completion source, for host-side routing.
#[derive(Clone, Debug)]
pub struct SourceMetadata {
    /// What kind of values the source yields.
    pub category: SourceCategory,

    /// Names of the matching styles this source supports.
    pub styles: Vec<String>,

    /// Whether enumeration already guarantees any restriction it was given.
    ///
    /// When this is false, the engine checks returned candidates against the
    /// restriction itself before using them.
    pub applies_restriction: bool,
}

impl SourceMetadata {
    /// Describe a source that yields `category` values.
    ///
    /// The source starts out declaring the reading style, with restrictions
    /// rechecked by the engine.
    pub fn new(category: SourceCategory) -> Self {
        SourceMetadata {
            category,
            styles: vec![READING_STYLE.into()],
            applies_restriction: false,
        }
    }

    /// Whether the source declares support for the matching style `style`.
    pub fn supports_style(&self, style: &str) -> bool {
        self.styles.iter().any(|s| s == style)
    }
}

/// Trait for providing completion candidates.
pub trait CompletionSource {
    /// Locate where the completable suffix begins inside `input`.
    ///
    /// The default covers collection-style sources, where the whole input is
    /// completable.
    fn boundary(&self, input: &str, predicate: Option<&CandidatePredicate>) -> usize {
        let _ = (input, predicate);

        return 0;
    }

    /// Enumerate candidates that extend `prefix`, returned without it.
    ///
    /// Candidates for which `predicate` returns false are skipped. `restriction` is
    /// an extra acceptance pattern that implementations may consume internally, for
    /// example to prune a trie walk or a directory read; implementations whose
    /// output is guaranteed to satisfy it should say so via
    /// [SourceMetadata::applies_restriction].
    fn enumerate(
        &self,
        prefix: &str,
        predicate: Option<&CandidatePredicate>,
        restriction: Option<&TokenPattern>,
    ) -> SourceResult<Vec<String>>;

    /// Describe this source.
    fn metadata(&self) -> SourceMetadata;

    /// Post-filter enumerated candidates using source-specific rules.
    ///
    /// The default keeps everything.
    fn refine(&self, candidates: Vec<String>) -> Vec<String> {
        candidates
    }
}

/// A [CompletionSource] over a fixed collection of candidate strings.
///
/// Candidates keep their collection order when enumerated.
#[derive(Clone, Debug, Default)]
pub struct CollectionSource {
    candidates: Vec<String>,
}

impl CollectionSource {
    /// Create a source completing the given candidates.
    pub fn new<I, T>(candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        CollectionSource {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }
}

impl<T: Into<String>> FromIterator<T> for CollectionSource {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        CollectionSource::new(iter)
    }
}

impl CompletionSource for CollectionSource {
    fn enumerate(
        &self,
        prefix: &str,
        predicate: Option<&CandidatePredicate>,
        restriction: Option<&TokenPattern>,
    ) -> SourceResult<Vec<String>> {
        let mut res = Vec::new();

        for candidate in self.candidates.iter() {
            let suffix = match candidate.strip_prefix(prefix) {
                Some(suffix) => suffix,
                None => continue,
            };

            if let Some(f) = predicate {
                if !f(suffix) {
                    continue;
                }
            }

            if let Some(pat) = restriction {
                if !pat.matches(suffix) {
                    continue;
                }
            }

            res.push(suffix.to_string());
        }

        return Ok(res);
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            applies_restriction: true,
            ..SourceMetadata::new(SourceCategory::Text)
        }
    }
}

/// A [CompletionSource] over a reference-counted lexicon of words.
///
/// Words are reference-counted to make it easy to forget them once every occurrence
/// has been removed from whatever text they were collected from. Storage is
/// prefix-ordered, so enumeration yields words in lexicographic order and can narrow
/// its walk by the restriction's leading literal run.
#[derive(Default)]
pub struct LexiconSource {
    trie: Trie<String, usize>,
}

impl LexiconSource {
    /// Whether this lexicon contains zero words.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Increment the reference count for a `word`.
    pub fn word_incr(&mut self, word: &str) {
        if let Some(count) = self.trie.get_mut(word) {
            *count += 1;
        } else {
            self.trie.insert(word.to_string(), 1);
        }
    }

    /// Decrement the reference count for a `word`.
    pub fn word_decr(&mut self, word: &str) {
        if let Some(count) = self.trie.get_mut(word) {
            *count -= 1;

            if *count == 0 {
                self.trie.remove(word);
            }
        }
    }
}

impl<T: AsRef<str>> FromIterator<T> for LexiconSource {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lexicon = LexiconSource::default();

        for word in iter {
            lexicon.word_incr(word.as_ref());
        }

        return lexicon;
    }
}

impl CompletionSource for LexiconSource {
    fn enumerate(
        &self,
        prefix: &str,
        predicate: Option<&CandidatePredicate>,
        restriction: Option<&TokenPattern>,
    ) -> SourceResult<Vec<String>> {
        // Case folding can change letters inside the lead, so only exact
        // comparisons narrow the walk.
        let walk = match restriction {
            Some(pat) if !pat.folds_case() => format!("{prefix}{}", pat.literal_lead()),
            _ => prefix.to_string(),
        };

        let mut res = Vec::new();

        for word in completion_keys(&self.trie, &walk) {
            let suffix = match word.strip_prefix(prefix) {
                Some(suffix) => suffix,
                None => continue,
            };

            if let Some(f) = predicate {
                if !f(suffix) {
                    continue;
                }
            }

            if let Some(pat) = restriction {
                if !pat.matches(suffix) {
                    continue;
                }
            }

            res.push(suffix.to_string());
        }

        return Ok(res);
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            applies_restriction: true,
            ..SourceMetadata::new(SourceCategory::Text)
        }
    }
}

/// Filename suffixes dropped by the default [FileSource] refine pass.
const IGNORED_SUFFIXES: &[&str] = &["~", ".bak", ".o", ".obj", ".swp"];

/// A [CompletionSource] completing filenames within the directory named by the
/// input's path prefix.
///
/// The boundary falls just after the last path separator, so the directory part of
/// the input stays fixed and the final component is the completable token. Dotfiles
/// stay hidden unless the token itself starts with a dot. Refining drops names that
/// carry backup- and object-file style suffixes, unless that would empty the set.
pub struct FileSource {
    ignored: Vec<String>,
}

impl FileSource {
    /// Create a source whose refine pass drops the given filename suffixes.
    pub fn with_ignored<I, T>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        FileSource {
            ignored: suffixes.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for FileSource {
    fn default() -> Self {
        FileSource::with_ignored(IGNORED_SUFFIXES.iter().copied())
    }
}

impl CompletionSource for FileSource {
    fn boundary(&self, input: &str, _: Option<&CandidatePredicate>) -> usize {
        match input.rfind(MAIN_SEPARATOR) {
            Some(idx) => idx + MAIN_SEPARATOR.len_utf8(),
            None => 0,
        }
    }

    fn enumerate(
        &self,
        prefix: &str,
        predicate: Option<&CandidatePredicate>,
        restriction: Option<&TokenPattern>,
    ) -> SourceResult<Vec<String>> {
        let path = if prefix.is_empty() {
            Path::new(".")
        } else {
            Path::new(prefix)
        };

        let dir = match path.read_dir() {
            Ok(dir) => dir,

            // Partially typed paths usually name directories that don't exist
            // yet, which isn't a failure worth surfacing.
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                return Ok(vec![]);
            },
            Err(e) => return Err(e.into()),
        };

        let hidden = restriction.is_some_and(|pat| pat.literal_lead().starts_with('.'));

        let filter = |entry: DirEntry| {
            let name = entry.file_name();
            let name = name.to_string_lossy();

            if name.starts_with('.') && !hidden {
                return None;
            }

            if let Some(f) = predicate {
                if !f(name.as_ref()) {
                    return None;
                }
            }

            if let Some(pat) = restriction {
                if !pat.matches(name.as_ref()) {
                    return None;
                }
            }

            return Some(name.to_string());
        };

        let mut res: Vec<String> = dir.flatten().flat_map(filter).take(MAX_COMPLETIONS).collect();
        res.sort();

        return Ok(res);
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            applies_restriction: true,
            ..SourceMetadata::new(SourceCategory::File)
        }
    }

    fn refine(&self, candidates: Vec<String>) -> Vec<String> {
        let ignorable = |name: &String| self.ignored.iter().any(|sfx| name.ends_with(sfx.as_str()));
        let (dropped, kept): (Vec<String>, Vec<String>) =
            candidates.into_iter().partition(ignorable);

        if kept.is_empty() {
            // Everything was ignorable, so nothing gets dropped.
            return dropped;
        }

        return kept;
    }
}

/// A [CompletionSource] built from closures.
///
/// This covers sources living outside this crate. Enumeration output is not assumed
/// to satisfy the restriction it was handed; callers whose closures do apply it can
/// declare that through [FnSource::with_metadata].
pub struct FnSource {
    enumerate: Box<EnumerateFn>,
    boundary: Box<BoundaryFn>,
    metadata: SourceMetadata,
}

impl FnSource {
    /// Create a source whose candidates come from `enumerate`.
    ///
    /// The boundary starts out at zero, and the metadata as
    /// [SourceCategory::Custom].
    pub fn new<F>(enumerate: F) -> Self
    where
        F: Fn(&str, Option<&CandidatePredicate>, Option<&TokenPattern>) -> SourceResult<Vec<String>>
            + 'static,
    {
        FnSource {
            enumerate: Box::new(enumerate),
            boundary: Box::new(|_| 0),
            metadata: SourceMetadata::new(SourceCategory::Custom),
        }
    }

    /// Use `boundary` to locate the completable suffix.
    pub fn with_boundary<F>(mut self, boundary: F) -> Self
    where
        F: Fn(&str) -> usize + 'static,
    {
        self.boundary = Box::new(boundary);

        return self;
    }

    /// Describe this source with `metadata` instead of the defaults.
    pub fn with_metadata(mut self, metadata: SourceMetadata) -> Self {
        self.metadata = metadata;

        return self;
    }
}

impl CompletionSource for FnSource {
    fn boundary(&self, input: &str, _: Option<&CandidatePredicate>) -> usize {
        (self.boundary)(input)
    }

    fn enumerate(
        &self,
        prefix: &str,
        predicate: Option<&CandidatePredicate>,
        restriction: Option<&TokenPattern>,
    ) -> SourceResult<Vec<String>> {
        (self.enumerate)(prefix, predicate, restriction)
    }

    fn metadata(&self) -> SourceMetadata {
        self.metadata.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::LiteralGenerator;

    use std::fs::File;
    use temp_dir::TempDir;

    fn pat(token: &str, fold: bool) -> TokenPattern {
        TokenPattern::compile(token, &LiteralGenerator, fold).unwrap()
    }

    fn mklexicon() -> LexiconSource {
        ["press", "pressed", "presses", "pressing", "pressman", "pressure"]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_collection_enumerate() {
        let source = CollectionSource::new(["haru", "はるかぜ", "春一番", "fuyu"]);
        let pat = pat("ha", false);

        let res = source.enumerate("", None, Some(&pat)).unwrap();
        assert_eq!(res, strs!["haru"]);

        let res = source.enumerate("", None, None).unwrap();
        assert_eq!(res, strs!["haru", "はるかぜ", "春一番", "fuyu"]);

        assert_eq!(source.boundary("haru", None), 0);
        assert!(source.metadata().applies_restriction);
        assert!(source.metadata().supports_style(READING_STYLE));
    }

    #[test]
    fn test_collection_predicate() {
        let source: CollectionSource =
            ["haru", "haruka", "hachi"].into_iter().collect();
        let longish = |s: &str| s.len() > 4;

        let res = source.enumerate("", Some(&longish), Some(&pat("ha", false))).unwrap();
        assert_eq!(res, strs!["haruka", "hachi"]);
    }

    #[test]
    fn test_lexicon_enumerate() {
        let lexicon = mklexicon();

        let res = lexicon.enumerate("", None, Some(&pat("presse", false))).unwrap();
        assert_eq!(res, strs!["pressed", "presses"]);

        let res = lexicon.enumerate("", None, Some(&pat("press", false))).unwrap();
        assert_eq!(res, strs![
            "press",
            "pressed",
            "presses",
            "pressing",
            "pressman",
            "pressure"
        ]);

        let res = lexicon.enumerate("", None, Some(&pat("dress", false))).unwrap();
        assert_eq!(res, Vec::<String>::new());
    }

    #[test]
    fn test_lexicon_incr_decr() {
        let mut lexicon = LexiconSource::default();
        assert!(lexicon.is_empty());

        lexicon.word_incr("haru");
        lexicon.word_incr("haru");
        lexicon.word_incr("haruka");
        lexicon.word_decr("haru");
        lexicon.word_decr("haruka");

        let res = lexicon.enumerate("", None, Some(&pat("haru", false))).unwrap();
        assert_eq!(res, strs!["haru"]);

        lexicon.word_decr("haru");
        assert!(lexicon.is_empty());
    }

    #[test]
    fn test_lexicon_lead_narrowing() {
        let lexicon: LexiconSource = ["(foo)", "(food)", "bar"].into_iter().collect();

        let res = lexicon.enumerate("", None, Some(&pat("(fo", false))).unwrap();
        assert_eq!(res, strs!["(foo)", "(food)"]);

        // Folded matching cannot narrow, but still finds differently cased words.
        let lexicon: LexiconSource = ["Press", "press"].into_iter().collect();

        let res = lexicon.enumerate("", None, Some(&pat("press", true))).unwrap();
        assert_eq!(res, strs!["Press", "press"]);

        let res = lexicon.enumerate("", None, Some(&pat("press", false))).unwrap();
        assert_eq!(res, strs!["press"]);
    }

    #[test]
    fn test_file_boundary() {
        let source = FileSource::default();
        let input = format!("src{MAIN_SEPARATOR}ma");

        assert_eq!(source.boundary(&input, None), 4);
        assert_eq!(source.boundary("ma", None), 0);
        assert_eq!(source.boundary("", None), 0);

        let input = format!("a{MAIN_SEPARATOR}b{MAIN_SEPARATOR}");
        assert_eq!(source.boundary(&input, None), 4);
    }

    #[test]
    fn test_file_enumerate() {
        let tmp = TempDir::new().unwrap();
        let _ = File::create(tmp.child("file1").as_path()).unwrap();
        let _ = File::create(tmp.child("file2").as_path()).unwrap();
        let _ = File::create(tmp.child("other").as_path()).unwrap();
        let _ = File::create(tmp.child(".hidden").as_path()).unwrap();

        let source = FileSource::default();
        let prefix = format!("{}{MAIN_SEPARATOR}", tmp.path().to_string_lossy());

        let res = source.enumerate(&prefix, None, Some(&pat("fi", false))).unwrap();
        assert_eq!(res, strs!["file1", "file2"]);

        // Dotfiles stay hidden without a leading dot in the token.
        let res = source.enumerate(&prefix, None, Some(&pat("", false))).unwrap();
        assert_eq!(res, strs!["file1", "file2", "other"]);

        let res = source.enumerate(&prefix, None, Some(&pat(".", false))).unwrap();
        assert_eq!(res, strs![".hidden"]);

        let numbered = |s: &str| s.ends_with(|c: char| c.is_ascii_digit());
        let res = source
            .enumerate(&prefix, Some(&numbered), Some(&pat("", false)))
            .unwrap();
        assert_eq!(res, strs!["file1", "file2"]);
    }

    #[test]
    fn test_file_enumerate_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let prefix = format!(
            "{}{MAIN_SEPARATOR}nonexistent{MAIN_SEPARATOR}",
            tmp.path().to_string_lossy()
        );

        let source = FileSource::default();
        let res = source.enumerate(&prefix, None, None).unwrap();
        assert_eq!(res, Vec::<String>::new());
    }

    #[test]
    fn test_file_refine() {
        let source = FileSource::default();

        let res = source.refine(strs!["main.rs", "main.rs~", "main.o", "lib.rs"]);
        assert_eq!(res, strs!["main.rs", "lib.rs"]);

        // When every name is ignorable, they all survive.
        let res = source.refine(strs!["a.o", "b.o"]);
        assert_eq!(res, strs!["a.o", "b.o"]);

        let source = FileSource::with_ignored([".tmp"]);
        let res = source.refine(strs!["main.rs", "scratch.tmp"]);
        assert_eq!(res, strs!["main.rs"]);
    }

    #[test]
    fn test_fn_source() {
        let source = FnSource::new(|prefix, _, _| {
            let words = ["haru", "fuyu"];

            return Ok(words
                .into_iter()
                .filter(|w| w.starts_with(prefix))
                .map(String::from)
                .collect());
        })
        .with_boundary(|input| input.rfind(' ').map(|i| i + 1).unwrap_or(0));

        assert_eq!(source.boundary("say ha", None), 4);
        assert!(!source.metadata().applies_restriction);

        // The restriction argument is ignored by this source.
        let res = source.enumerate("", None, Some(&pat("ha", false))).unwrap();
        assert_eq!(res, strs!["haru", "fuyu"]);

        let meta = SourceMetadata {
            applies_restriction: true,
            ..SourceMetadata::new(SourceCategory::Command)
        };
        let source = FnSource::new(|_, _, _| Ok(vec![])).with_metadata(meta);
        assert_eq!(source.metadata().category, SourceCategory::Command);
        assert!(source.metadata().applies_restriction);
    }
}

//! # yomi
//!
//! ## Overview
//!
//! This crate completes partially typed text against candidates whose spellings may
//! be in another script than what was typed: a romanized reading like `"ha"` can
//! complete to `"はるかぜ"` or `"春一番"` just as well as to `"haru"`.
//!
//! A [ReadingCompleter] splits the input at its [CompletionSource]'s boundary into a
//! fixed prefix and a completable token, expands the token's alphanumeric core
//! through a [PatternGenerator] into the spellings it can stand for, and filters the
//! source's candidates through the assembled pattern. The candidates then either
//! extend the input by their shared run ([ReadingCompleter::try_complete]) or get
//! returned for showing to the user ([ReadingCompleter::list_completions]).
//!
//! ## Example
//!
//! ```
//! use yomi::{CollectionSource, Completion, LiteralGenerator, ReadingCompleter};
//!
//! let completer = ReadingCompleter::new(LiteralGenerator);
//! let source = CollectionSource::new(["press", "pressed", "presses"]);
//!
//! // "pres" extends to the run shared by all three candidates.
//! let res = completer.try_complete("pres", 4, &source, None).unwrap();
//! assert_eq!(res, Completion::Extended { text: "press".into(), cursor: 5 });
//!
//! // Completing again changes nothing.
//! let res = completer.try_complete("press", 5, &source, None).unwrap();
//! assert_eq!(res, Completion::NoChange);
//! ```
//!
//! Transliteration-aware generators live in their own crates, so that the engine
//! stays script-agnostic; see [yomi-romaji] for romaji input.
//!
//! [yomi-romaji]: https://docs.rs/yomi-romaji/latest/yomi_romaji/

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::needless_return)]
#![allow(clippy::too_many_arguments)]

#[macro_use]
mod util;

pub mod complete;
pub mod errors;
pub mod pattern;
pub mod source;

pub use self::complete::{CompleteOptions, Completion, CompletionSet, ReadingCompleter};
pub use self::errors::{
    CompleteError, CompleteResult, PatternError, PatternResult, SourceError, SourceResult,
};
pub use self::pattern::{LiteralGenerator, PatternGenerator, TokenPattern};
pub use self::source::{
    CandidatePredicate,
    CollectionSource,
    CompletionSource,
    FileSource,
    FnSource,
    LexiconSource,
    SourceCategory,
    SourceMetadata,
    READING_STYLE,
};

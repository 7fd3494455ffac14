//! # Completion Requests
//!
//! ## Overview
//!
//! This module contains the engine that turns one keystroke's worth of input into a
//! completion outcome: split the input at the source's boundary, compile the
//! completable token into a pattern, filter the source's candidates through it, and
//! either extend the input by the candidates' common run or report why not.
use crate::errors::{CompleteError, CompleteResult, SourceError};
use crate::pattern::{PatternGenerator, TokenPattern};
use crate::source::{CandidatePredicate, CompletionSource};
use crate::util::{clamp_cursor, common_prefix, fold_eq};

/// Options controlling completion requests.
#[derive(Clone, Debug)]
pub struct CompleteOptions {
    /// Whether reading-aware completion is enabled.
    ///
    /// While disabled, both entry points report that nothing matched, no matter the
    /// input or the source contents.
    pub enabled: bool,

    /// Whether candidates are matched and compared case-insensitively.
    pub fold_case: bool,

    /// Indicator string for a host to display while enabled.
    pub on_indicator: String,

    /// Indicator string for a host to display while disabled.
    pub off_indicator: String,
}

impl CompleteOptions {
    /// Flip the enabled state, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;

        return self.enabled;
    }

    /// The indicator string for the current enabled state.
    pub fn status(&self) -> &str {
        if self.enabled {
            self.on_indicator.as_str()
        } else {
            self.off_indicator.as_str()
        }
    }
}

impl Default for CompleteOptions {
    fn default() -> Self {
        CompleteOptions {
            enabled: true,
            fold_case: false,
            on_indicator: "[yomi]".into(),
            off_indicator: "[yomi:off]".into(),
        }
    }
}

/// The outcome of a completion attempt.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Completion {
    /// Nothing matched the token.
    NoMatch,

    /// The token is already the sole matching candidate.
    SoleMatch,

    /// Candidates matched, but they share nothing beyond what is already typed.
    ///
    /// The caller keeps its input and cursor as they are.
    NoChange,

    /// The input can be extended by the run shared between all candidates.
    Extended {
        /// The input with the shared run spliced in at the cursor.
        text: String,

        /// The position just after the spliced-in run.
        cursor: usize,
    },
}

/// The matching candidates for one completion request.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompletionSet {
    /// Candidates completing the token, in the source's order.
    pub candidates: Vec<String>,

    /// Length in bytes of the fixed prefix of the completed input.
    ///
    /// Every candidate completes the input after this point, so a host can rebuild
    /// full lines with [CompletionSet::expansions] and knows which region of each
    /// one was matched.
    pub prefix_len: usize,
}

impl CompletionSet {
    /// Whether there's anything to show.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Rebuild each candidate as a full replacement for `input`.
    pub fn expansions(&self, input: &str) -> Vec<String> {
        let prefix = &input[..clamp_cursor(input, self.prefix_len)];

        self.candidates.iter().map(|c| format!("{prefix}{c}")).collect()
    }
}

fn split_at_point<'a>(
    input: &'a str,
    cursor: usize,
    source: &dyn CompletionSource,
    predicate: Option<&CandidatePredicate>,
) -> (&'a str, &'a str, &'a str) {
    let point = clamp_cursor(input, cursor);
    let (completable, rest) = input.split_at(point);
    let split = clamp_cursor(completable, source.boundary(completable, predicate));
    let (prefix, token) = completable.split_at(split);

    return (prefix, token, rest);
}

/// Performs reading-aware completion against a [CompletionSource].
///
/// The completer carries the [PatternGenerator] that expands each token's
/// alphanumeric core into the spellings it can stand for, and the options gating
/// every request. Everything else is per-request: nothing is cached between calls,
/// and a later call's result simply supersedes an earlier one.
#[derive(Default)]
pub struct ReadingCompleter<G: PatternGenerator> {
    /// Expands each token's core into its possible spellings.
    pub generator: G,

    /// Options applied to every request.
    pub options: CompleteOptions,
}

impl<G: PatternGenerator> ReadingCompleter<G> {
    /// Create a completer with default options.
    pub fn new(generator: G) -> Self {
        ReadingCompleter { generator, options: CompleteOptions::default() }
    }

    fn candidates(
        &self,
        prefix: &str,
        token: &str,
        source: &dyn CompletionSource,
        predicate: Option<&CandidatePredicate>,
    ) -> CompleteResult<Vec<String>> {
        let pattern = TokenPattern::compile(token, &self.generator, self.options.fold_case)?;
        let mut candidates = source.enumerate(prefix, predicate, Some(&pattern))?;

        if !source.metadata().applies_restriction {
            candidates.retain(|candidate| pattern.matches(candidate));
        }

        return Ok(source.refine(candidates));
    }

    /// Try to complete the text before `cursor` in `input`.
    ///
    /// The token between the source's boundary and the cursor is matched against the
    /// source's candidates. When the candidates share a run longer than the token,
    /// the result carries the input with that run spliced in and the cursor moved
    /// after it; the other outcomes leave the input alone.
    ///
    /// A token the generator can't build a pattern for is reported as
    /// [Completion::NoMatch]; failures inside the source itself are returned as-is.
    pub fn try_complete(
        &self,
        input: &str,
        cursor: usize,
        source: &dyn CompletionSource,
        predicate: Option<&CandidatePredicate>,
    ) -> Result<Completion, SourceError> {
        if !self.options.enabled {
            return Ok(Completion::NoMatch);
        }

        let (prefix, token, rest) = split_at_point(input, cursor, source, predicate);

        let candidates = match self.candidates(prefix, token, source, predicate) {
            Ok(candidates) => candidates,
            Err(CompleteError::Pattern(_)) => return Ok(Completion::NoMatch),
            Err(CompleteError::Source(e)) => return Err(e),
        };

        let fold = self.options.fold_case;

        if candidates.is_empty() {
            return Ok(Completion::NoMatch);
        }

        if let [sole] = candidates.as_slice() {
            if fold_eq(sole, token, fold) {
                return Ok(Completion::SoleMatch);
            }
        }

        let mut common = candidates[0].as_str();

        for candidate in candidates[1..].iter() {
            common = common_prefix(common, candidate, fold);

            if common.is_empty() {
                break;
            }
        }

        if common_prefix(common, token, fold).len() == common.len() {
            // The token already covers everything the candidates share.
            return Ok(Completion::NoChange);
        }

        let text = format!("{prefix}{common}{rest}");
        let cursor = prefix.len() + common.len();

        return Ok(Completion::Extended { text, cursor });
    }

    /// List every candidate matching the text before `cursor` in `input`.
    ///
    /// Unlike [ReadingCompleter::try_complete], nothing is collapsed to a common
    /// run: the whole filtered candidate set is returned, along with the length of
    /// the input's fixed prefix. An empty set means nothing matched; a token the
    /// generator can't build a pattern for yields an empty set, while failures
    /// inside the source itself are returned as-is.
    pub fn list_completions(
        &self,
        input: &str,
        cursor: usize,
        source: &dyn CompletionSource,
        predicate: Option<&CandidatePredicate>,
    ) -> Result<CompletionSet, SourceError> {
        if !self.options.enabled {
            return Ok(CompletionSet { candidates: vec![], prefix_len: 0 });
        }

        let (prefix, token, _) = split_at_point(input, cursor, source, predicate);

        let candidates = match self.candidates(prefix, token, source, predicate) {
            Ok(candidates) => candidates,
            Err(CompleteError::Pattern(_)) => vec![],
            Err(CompleteError::Source(e)) => return Err(e),
        };

        return Ok(CompletionSet { candidates, prefix_len: prefix.len() });
    }
}

//! # Token Patterns
//!
//! ## Overview
//!
//! This module turns the completable token into an anchored matching expression. The
//! token is decomposed into a leading literal run, an alphanumeric core, and a trailing
//! literal run; a [PatternGenerator] expands the core into the spellings it can stand
//! for, while the literal runs must match exactly.
use nom::{
    bytes::complete::{take_till, take_while},
    IResult,
};
use regex::{Regex, RegexBuilder};

use crate::errors::{PatternError, PatternResult};

fn is_core_char(chr: char) -> bool {
    chr.is_ascii_alphanumeric() || chr == '-'
}

fn token_parts(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, lead) = take_till(is_core_char)(input)?;
    let (tail, core) = take_while(is_core_char)(input)?;

    return Ok((tail, (lead, core)));
}

/// Trait for expanding a token into an expression matching its possible spellings.
///
/// The expression is a regular-expression fragment: implementations return the
/// alternatives for the token (for example, the kana spellings of a romanized
/// reading), and the compiler anchors it and attaches the literal runs around it.
/// Since the fragment is concatenated into a larger expression, alternatives must
/// be grouped (`(?:a|b)`, not `a|b`). A token that no expression can be built from
/// is a [PatternError::UnusableToken].
pub trait PatternGenerator {
    /// Build a matching expression for the spellings of `token`.
    fn generate(&self, token: &str) -> PatternResult<String>;
}

/// A [PatternGenerator] that matches the token exactly as typed.
#[derive(Clone, Copy, Debug, Default)]
pub struct LiteralGenerator;

impl PatternGenerator for LiteralGenerator {
    fn generate(&self, token: &str) -> PatternResult<String> {
        return Ok(regex::escape(token));
    }
}

/// An anchored matching expression compiled from one completable token.
///
/// The token is decomposed as `lead + core + tail`, where `core` is the maximal run
/// of ASCII letters, digits and hyphens following `lead`, the maximal run of
/// characters outside that class at the start. Only the core is phonetically
/// ambiguous, so only the core goes through the generator; `lead` and `tail` are
/// escaped verbatim, and the whole expression is anchored at the start of the
/// candidate.
#[derive(Debug)]
pub struct TokenPattern {
    expr: String,
    lead: String,
    fold: bool,
    regex: Regex,
}

impl TokenPattern {
    /// Compile the pattern for `token`, expanding its core through `generator`.
    ///
    /// When `fold` is set, candidates are matched case-insensitively.
    pub fn compile<G>(token: &str, generator: &G, fold: bool) -> PatternResult<Self>
    where
        G: PatternGenerator,
    {
        let (tail, (lead, core)) =
            token_parts(token).map_err(|_| PatternError::UnusableToken(token.into()))?;

        let mut expr = String::from("^");
        expr.push_str(&regex::escape(lead));

        if !core.is_empty() {
            expr.push_str(&generator.generate(core)?);
        }

        expr.push_str(&regex::escape(tail));

        let regex = RegexBuilder::new(&expr).case_insensitive(fold).build()?;
        let lead = lead.to_string();

        return Ok(TokenPattern { expr, lead, fold, regex });
    }

    /// Whether `candidate` is matched by this pattern.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// The assembled expression text.
    pub fn as_str(&self) -> &str {
        self.expr.as_str()
    }

    /// The leading literal run of the token.
    ///
    /// When case folding is off, every matching candidate starts with this run
    /// exactly, which lets prefix-ordered sources narrow their walk.
    pub fn literal_lead(&self) -> &str {
        self.lead.as_str()
    }

    /// Whether this pattern matches case-insensitively.
    pub fn folds_case(&self) -> bool {
        self.fold
    }
}

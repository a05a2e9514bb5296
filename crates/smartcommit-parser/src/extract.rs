//! Field extractors.

use std::ops::Range;

use regex::Regex;
use smartcommit_commit::{IssueKey, TimeSpent, Transition};
use tracing::debug;

use crate::{ParseError, ParseResult, ScannedMessage, TokenKind};

/// An issue key found in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    /// The canonical key.
    pub key: IssueKey,
    /// Byte span of the key in the message.
    pub span: Range<usize>,
}

/// Finds the first `<PROJECT>-<digits>` occurrence, case-insensitively.
#[derive(Debug, Clone)]
pub struct IssueKeyExtractor {
    regex: Regex,
}

impl IssueKeyExtractor {
    /// Creates an extractor for the given project key literal.
    ///
    /// # Errors
    ///
    /// Returns an error if the search pattern cannot be compiled.
    pub fn new(project_key: &str) -> ParseResult<Self> {
        let pattern = format!(r"(?i){}-[0-9]+", regex::escape(project_key));
        let regex = Regex::new(&pattern)?;
        Ok(Self { regex })
    }

    /// Returns the first issue key in the message, upper-cased.
    ///
    /// The key is not checked against the tracker.
    pub fn extract(&self, message: &ScannedMessage<'_>) -> Option<KeyMatch> {
        let found = self.regex.find_iter(message.text()).find_map(|m| {
            IssueKey::parse(m.as_str()).ok().map(|key| KeyMatch {
                key,
                span: m.range(),
            })
        });
        debug!(key = ?found.as_ref().map(|m| m.key.as_str()), "issue key extraction");
        found
    }
}

/// A `#time` command found in a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeMatch {
    /// The validated duration.
    pub time: TimeSpent,
    /// Byte span from the `#time` marker to the end of its value.
    pub span: Range<usize>,
}

/// Extracts the `#time <duration>` value.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeExtractor;

impl TimeExtractor {
    /// Creates a new time extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extracts the value of the first `#time` token.
    ///
    /// The first word after the marker is always claimed; following words
    /// on the same line are claimed while they are duration components.
    /// Returns `Ok(None)` when the message has no `#time` token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTimeFormat`] with the claimed text when
    /// it is not a valid duration.
    pub fn extract(&self, message: &ScannedMessage<'_>) -> ParseResult<Option<TimeMatch>> {
        let Some(token) = message.first(|kind| kind == TokenKind::Time) else {
            debug!("no #time token");
            return Ok(None);
        };

        let text = message.text();
        let value_start = skip_while(text, token.span.end, char::is_whitespace);
        let mut value_end = skip_while(text, value_start, |c| !c.is_whitespace());

        loop {
            let gap_end = skip_while(text, value_end, |c| c == ' ' || c == '\t');
            if gap_end == value_end {
                break;
            }
            let word_end = skip_while(text, gap_end, |c| !c.is_whitespace());
            if word_end == gap_end || !TimeSpent::is_component(&text[gap_end..word_end]) {
                break;
            }
            value_end = word_end;
        }

        let value = &text[value_start..value_end];
        let time = TimeSpent::parse(value)
            .map_err(|_| ParseError::InvalidTimeFormat(value.to_string()))?;
        debug!(time = %time, "time extraction");

        Ok(Some(TimeMatch {
            time,
            span: token.span.start..value_end,
        }))
    }
}

/// Returns the byte offset of the first char at or after `from` that does
/// not satisfy `predicate`.
fn skip_while(text: &str, from: usize, predicate: impl Fn(char) -> bool) -> usize {
    text[from..]
        .find(|c: char| !predicate(c))
        .map_or(text.len(), |offset| from + offset)
}

/// Extracts the first `#<transition>` in the allowed set.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionExtractor;

impl TransitionExtractor {
    /// Creates a new transition extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the first allowed transition. Other `#words` are skipped.
    pub fn extract(&self, message: &ScannedMessage<'_>) -> Option<Transition> {
        let transition = message.tokens().iter().find_map(|token| match token.kind {
            TokenKind::Transition(transition) => Some(transition),
            _ => None,
        });
        debug!(transition = ?transition, "transition extraction");
        transition
    }
}

/// Extracts the comment.
///
/// With an explicit `#comment`, the comment is the text after it to the end
/// of the message. Without one, it is whatever text is left once the other
/// fields and every `#word` are removed. Either way, text claimed by another
/// field is excluded and whitespace is collapsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentExtractor;

impl CommentExtractor {
    /// Creates a new comment extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Extracts the comment, excluding the `claimed` spans of other fields.
    pub fn extract(&self, message: &ScannedMessage<'_>, claimed: &[Range<usize>]) -> Option<String> {
        let explicit = message.first(|kind| kind == TokenKind::Comment);
        let start = explicit.map_or(0, |token| token.span.end);

        let mut spans = claimed.to_vec();
        spans.extend(
            message
                .tokens()
                .iter()
                .filter(|token| explicit.is_none() || token.kind.is_command())
                .map(|token| token.span.clone()),
        );

        let residual = residual_text(message.text(), start, spans);
        let comment = residual.split_whitespace().collect::<Vec<_>>().join(" ");
        debug!(explicit = explicit.is_some(), comment = %comment, "comment extraction");

        (!comment.is_empty()).then_some(comment)
    }
}

/// Returns `text[start..]` with every span replaced by a single space.
fn residual_text(text: &str, start: usize, mut spans: Vec<Range<usize>>) -> String {
    spans.sort_by_key(|span| span.start);

    let mut out = String::with_capacity(text.len().saturating_sub(start));
    let mut cursor = start;
    for span in spans {
        if span.end <= cursor {
            continue;
        }
        if span.start > cursor {
            out.push_str(&text[cursor..span.start]);
        }
        out.push(' ');
        cursor = span.end;
    }
    if cursor < text.len() {
        out.push_str(&text[cursor..]);
    }
    out
}

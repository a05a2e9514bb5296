//! Tagged `#word` token scanner.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use smartcommit_commit::{Transition, normalize_transition};

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("invalid token regex"));

/// Classification of a `#word` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `#time`
    Time,
    /// `#comment`
    Comment,
    /// A member of the allowed transition set.
    Transition(Transition),
    /// Any other `#word`.
    Unknown,
}

impl TokenKind {
    /// Classifies the word following a `#`.
    #[must_use]
    pub fn classify(word: &str) -> Self {
        match normalize_transition(word).as_str() {
            "time" => Self::Time,
            "comment" => Self::Comment,
            other => Transition::resolve(other).map_or(Self::Unknown, Self::Transition),
        }
    }

    /// Returns true for tokens that carry a command.
    #[must_use]
    pub fn is_command(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// A classified `#word` occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classification.
    pub kind: TokenKind,
    /// Byte span of `#word` in the message.
    pub span: Range<usize>,
}

/// A message together with its classified tokens.
#[derive(Debug, Clone)]
pub struct ScannedMessage<'a> {
    text: &'a str,
    tokens: Vec<Token>,
}

impl<'a> ScannedMessage<'a> {
    /// Returns the scanned text.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Returns all tokens in message order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the first token matching the predicate.
    pub fn first(&self, predicate: impl Fn(TokenKind) -> bool) -> Option<&Token> {
        self.tokens.iter().find(|token| predicate(token.kind))
    }
}

/// Scans a message and classifies every `#word` up front.
#[must_use]
pub fn scan(text: &str) -> ScannedMessage<'_> {
    let tokens = TOKEN_REGEX
        .captures_iter(text)
        .filter_map(|captures| {
            let whole = captures.get(0)?;
            let word = captures.get(1)?;
            Some(Token {
                kind: TokenKind::classify(word.as_str()),
                span: whole.range(),
            })
        })
        .collect();

    ScannedMessage { text, tokens }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        scan(text).tokens().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_classify() {
        assert_eq!(TokenKind::classify("time"), TokenKind::Time);
        assert_eq!(TokenKind::classify("TIME"), TokenKind::Time);
        assert_eq!(TokenKind::classify("Comment"), TokenKind::Comment);
        assert_eq!(
            TokenKind::classify("Done"),
            TokenKind::Transition(Transition::Done)
        );
        assert_eq!(TokenKind::classify("wip"), TokenKind::Unknown);
    }

    #[test]
    fn test_scan_all_kinds() {
        assert_eq!(
            kinds("PROJ-1 #time 1h #comment text #wip #in_progress"),
            vec![
                TokenKind::Time,
                TokenKind::Comment,
                TokenKind::Unknown,
                TokenKind::Transition(Transition::InProgress),
            ]
        );
    }

    #[test]
    fn test_scan_spans() {
        let scanned = scan("a #done.");
        assert_eq!(scanned.tokens().len(), 1);
        assert_eq!(scanned.tokens()[0].span, 2..7);
        assert_eq!(&scanned.text()[2..7], "#done");
    }

    #[test]
    fn test_scan_hyphen_splits_word() {
        assert_eq!(kinds("#in-progress"), vec![TokenKind::Unknown]);
    }

    #[test]
    fn test_scan_bare_hash_ignored() {
        assert!(kinds("# heading and #").is_empty());
    }

    #[test]
    fn test_first() {
        let scanned = scan("#wip #review #done");
        let first = scanned
            .first(|kind| matches!(kind, TokenKind::Transition(_)))
            .unwrap();
        assert_eq!(first.kind, TokenKind::Transition(Transition::Review));
    }

    #[test]
    fn test_is_command() {
        assert!(TokenKind::Time.is_command());
        assert!(TokenKind::Transition(Transition::Done).is_command());
        assert!(!TokenKind::Unknown.is_command());
    }
}

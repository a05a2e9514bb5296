//! Smart commit field extraction for Smartcommit.
//!
//! A message is first cleaned of git comment lines, then scanned once into
//! classified `#word` tokens. Each extractor reads one field from the
//! scanned message:
//! - [`IssueKeyExtractor`]: first `<KEY>-<digits>` occurrence
//! - [`TimeExtractor`]: the `#time <duration>` value
//! - [`TransitionExtractor`]: first `#<transition>` in the allowed set
//! - [`CommentExtractor`]: explicit `#comment` text, or the residual text

mod cleanup;
mod error;
mod extract;
mod token;

pub use cleanup::strip_git_comments;
pub use error::{ParseError, ParseResult};
pub use extract::{
    CommentExtractor, IssueKeyExtractor, KeyMatch, TimeExtractor, TimeMatch, TransitionExtractor,
};
pub use token::{ScannedMessage, Token, TokenKind, scan};

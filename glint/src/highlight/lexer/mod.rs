//! A language-agnostic lexer, which splits any input string into classified tokens for
//! highlighting.
//!
//! The lexer makes a single forward pass and never fails: unterminated strings, comments, and
//! template literals run to the end of the input, and unrecognized characters become
//! [TokenKind::Other] tokens. It builds no syntax tree and reports no syntax errors. Because
//! every character lands in exactly one [Token], concatenating the token strings in order gives
//! back the input.
//!
//! Keywords and operators come from fixed tables that union several common languages, so the
//! classification is a plausible-looking heuristic rather than an exact grammar.
//!
//! The rustc lexer inspired this design.
//!

pub mod tables;
pub mod token;
pub mod tokenized_buffer;

mod cursor;


pub use token::{CommentKind, Token, TokenKind};
pub use tokenized_buffer::{TokenIndex, TokenizedBuffer};

/// Returns a [Token] iterator over the `input` string.
pub fn tokens(input: &str) -> impl Iterator<Item = Token<'_>> + '_ {
    cursor::Cursor::new(input)
}

/// Splits `input` into its complete, ordered [Token] sequence.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let tokens: Vec<Token> = tokens(input).collect();
    tracing::trace!(bytes = input.len(), tokens = tokens.len(), "tokenized input");
    tokens
}

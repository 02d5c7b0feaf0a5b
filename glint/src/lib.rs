//! Heuristic syntax highlighting for code snippets.
//!
//! glint splits arbitrary source text into classified tokens with a single, language-agnostic
//! lexer, renders those tokens to escaped HTML markup, and wraps the markup in a themed snippet
//! document. It also derives perceptually uniform color palettes from a vividness and a hue.
//!

#[macro_use]
extern crate static_assertions;

#[doc(hidden)]
pub use const_format;

pub mod error;
pub mod highlight;
pub mod palette;
pub mod snippet;

pub use error::{Error, Result};
pub use highlight::lexer::{tokenize, Token, TokenKind};
pub use highlight::render::{highlight, render};
pub use palette::{generate_palette, Oklch, Palette};

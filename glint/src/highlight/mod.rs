//! Turns source text into highlighted markup.
//!
//! The [lexer] produces a lossless sequence of [lexer::Token]s from any input, and [render]
//! maps those tokens to HTML. Neither stage can fail.
//!

pub mod lexer;
pub mod render;
pub mod source;

//! Renders a [Token] sequence as HTML markup.
//!
//! Each token with a style becomes a `<span class="token-...">` around its escaped text; the
//! remaining tokens are emitted as escaped text only. Rendering is total and stateless.
//!

pub mod markup;

#[cfg(test)]
mod render_unittests;

use crate::highlight::lexer::{tokenize, Token, TokenKind};

/// The CSS class for tokens of `kind`, or [None] for tokens rendered as plain text.
pub fn style_class(kind: TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Comment { kind: _ } => Some("token-comment"),
        TokenKind::Function => Some("token-function"),
        TokenKind::Keyword => Some("token-keyword"),
        TokenKind::Number => Some("token-number"),
        TokenKind::Operator => Some("token-operator"),
        TokenKind::String { has_escapes: _ } => Some("token-string"),
        TokenKind::TemplateExpression => Some("token-template-expression"),
        TokenKind::TemplateLiteral => Some("token-template-literal"),
        TokenKind::Identifier | TokenKind::Other | TokenKind::Whitespace => None,
    }
}

/// Concatenates the markup for every token of `tokens`, in order.
pub fn render(tokens: &[Token]) -> String {
    let mut html = String::with_capacity(tokens.iter().map(|t| t.string.len()).sum::<usize>() * 2);
    for token in tokens {
        match style_class(token.kind) {
            Some(class) => markup::push_span(&mut html, class, token.string),
            None => markup::push_escaped(&mut html, token.string),
        }
    }
    html
}

/// Tokenizes and renders `code` in one step.
pub fn highlight(code: &str) -> String {
    render(&tokenize(code))
}

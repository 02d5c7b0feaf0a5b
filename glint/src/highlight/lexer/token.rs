use std::fmt::Display;

use serde::{Serialize, Serializer};

/// Represents a single lexical token of the highlighted text.
///
/// Because the lexer considers blank space as a [TokenKind::Whitespace] token, and unrecognized
/// characters as [TokenKind::Other] tokens, every character in the input string is covered by
/// a [Token]. Concatenating the `string` of every token in order reproduces the input exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    /// The kind of Token.
    #[serde(rename = "type")]
    pub kind: TokenKind,

    // The substring representing the Token.
    #[serde(rename = "value")]
    pub string: &'a str,

    // The 1-based line position in the input string.
    pub line: u32,

    // The 1-based character column on the line.
    pub column: u32,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, string: &'a str, line: u32, column: u32) -> Token<'a> {
        Token { kind, string, line, column }
    }
}

// Token sequences are handed between threads freely; they only borrow the input.
assert_impl_all!(Token<'static>: Copy, Send, Sync);

/// An enumeration of all possible Token types.
///
/// The set is closed and language-agnostic: the same classification applies whether the input
/// looks like JavaScript, TypeScript, Python, or a mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of white space, including line breaks. See `is_blank_space()` for details.
    Whitespace,

    /// A `//` line comment, a `/* */` block comment, or a `#` hash comment.
    Comment { kind: CommentKind },

    /// A single- or double-quoted string literal. If it has backslash (`\`) escapes in it
    /// `has_escapes` is true.
    String { has_escapes: bool },

    /// A backtick-delimited segment of a template literal, including the delimiters that bound
    /// it: the opening backtick or the `}` that closed the previous interpolation, and the
    /// closing backtick or the `${` that opens the next one.
    TemplateLiteral,

    /// The unparsed text inside a `${ }` interpolation, without its delimiters.
    TemplateExpression,

    /// A numeric literal. The lexer accepts any run of digits, dots, underscores, and exponents
    /// without checking that it is well formed.
    Number,

    /// Any entry of the operator table, matched longest first.
    Operator,

    /// An identifier found in the keyword table.
    Keyword,

    /// An identifier followed, after optional white space, by an opening parenthesis.
    Function,

    /// Any other name.
    Identifier,

    /// A single character the lexer didn't recognize.
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// A `/* */` comment, which may span lines. Unterminated block comments run to the end of
    /// input.
    Block,

    /// A `#` comment terminated by the end of the line or input.
    Hash,

    /// A double-slash comment terminated by the end of the line or input.
    Line,
}

impl TokenKind {
    /// The kebab-case type name used when serializing and styling tokens.
    pub fn type_name(&self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment { kind: _ } => "comment",
            TokenKind::String { has_escapes: _ } => "string",
            TokenKind::TemplateLiteral => "template-literal",
            TokenKind::TemplateExpression => "template-expression",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Keyword => "keyword",
            TokenKind::Function => "function",
            TokenKind::Identifier => "identifier",
            TokenKind::Other => "other",
        }
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.type_name())
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            TokenKind::Whitespace => "white space",
            TokenKind::Comment { kind: CommentKind::Block } => "block comment",
            TokenKind::Comment { kind: CommentKind::Hash } => "hash comment",
            TokenKind::Comment { kind: CommentKind::Line } => "line comment",
            TokenKind::String { has_escapes: _ } => "string literal",
            TokenKind::TemplateLiteral => "template literal",
            TokenKind::TemplateExpression => "template expression",
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::Keyword => "keyword",
            TokenKind::Function => "function name",
            TokenKind::Identifier => "identifier",
            TokenKind::Other => "other",
        };
        f.write_str(s)
    }
}

impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            // Blank space and comments can be long or multi-line, so we only print the kind.
            TokenKind::Whitespace | TokenKind::Comment { kind: _ } => {
                f.write_fmt(format_args!("{}:{} {}", self.line, self.column, self.kind))
            }

            _ => f.write_fmt(format_args!(
                "{}:{} {} '{}'",
                self.line, self.column, self.kind, self.string
            )),
        }
    }
}

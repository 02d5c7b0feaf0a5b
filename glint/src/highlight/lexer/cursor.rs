use std::str::Chars;

use super::tables::{is_keyword, match_operator};
use super::token::CommentKind;
use super::token::Token;
use super::token::TokenKind;

/// Where the cursor is relative to a template literal. Interpolations are tracked with an
/// explicit brace depth inside [Cursor::template_expression()] instead of recursion, so nesting
/// never grows the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TemplateState {
    /// Not inside a template literal.
    Outside,

    /// Just consumed a `${`, the interpolated expression comes next.
    Interpolation,

    /// Stopped in front of the `}` closing an interpolation, the template literal continues.
    Resume,
}

/// Token iterator over a string.
///
/// Also tracks input buffer position by line and column.
///
/// Design roughly inspired by the rustc lexer Cursor.
pub struct Cursor<'s> {
    // An iterator over the input character string.
    chars: Chars<'s>,
    // The input remaining from the start of the current token.
    string: &'s str,
    bytes_remaining: usize,
    line: u32,
    column: u32,
    template: TemplateState,
}

impl<'s> Iterator for Cursor<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        if self.is_eof() {
            return None;
        }

        // Collect string position at the start of the token.
        let line = self.line;
        let column = self.column;

        let token_kind = match self.template {
            TemplateState::Interpolation if self.first() != '}' => self.template_expression(),

            // An empty interpolation `${}` yields no expression token, the closing brace
            // starts the next template literal segment directly.
            TemplateState::Interpolation | TemplateState::Resume => {
                self.bump();
                self.template_literal()
            }

            TemplateState::Outside => {
                let first_char = self.bump()?;
                self.classify(first_char)
            }
        };

        // End of token, extract the substring.
        let token_str = self.extract_substring();

        // Fixup identifiers to match against keywords and function calls.
        let token_kind = match token_kind {
            TokenKind::Identifier if is_keyword(token_str) => TokenKind::Keyword,
            TokenKind::Identifier if self.is_followed_by_paren() => TokenKind::Function,
            kind => kind,
        };

        Some(Token::new(token_kind, token_str, line, column))
    }
}

impl<'s> Cursor<'s> {
    pub const EOF: char = '\0';

    pub fn new(input: &'s str) -> Cursor<'s> {
        Cursor {
            chars: input.chars(),
            string: input,
            bytes_remaining: input.len(),
            line: 1,
            column: 1,
            template: TemplateState::Outside,
        }
    }

    // Dispatch on the first character of a token outside of any template literal. The order of
    // the arms sets the priority between overlapping token classes.
    fn classify(&mut self, first_char: char) -> TokenKind {
        match first_char {
            // Blank spaces.
            c if is_blank_space(c) => self.blank_space(),

            // Double slashes mean a line comment, slash star a block comment.
            '/' if self.first() == '/' => self.line_comment(CommentKind::Line),
            '/' if self.first() == '*' => self.block_comment(),

            // Hash comments for shell and Python style languages.
            '#' => self.line_comment(CommentKind::Hash),

            // Literal strings delimited with '"' or '\''.
            '"' | '\'' => self.string(first_char),

            // Template literals delimited with '`'.
            '`' => self.template_literal(),

            // Literal numbers start with a digit, or a dot directly followed by one.
            '0'..='9' => self.number(),
            '.' if self.first().is_ascii_digit() => self.number(),

            c => {
                if let Some(operator) = match_operator(self.string) {
                    // Operators are all ascii, so each byte is one character. One is consumed.
                    for _ in 1..operator.len() {
                        self.bump();
                    }
                    TokenKind::Operator
                } else if is_identifier_start(c) {
                    self.eat_while(is_identifier);
                    TokenKind::Identifier
                } else {
                    TokenKind::Other
                }
            }
        }
    }

    fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(Self::EOF)
    }

    fn second(&self) -> char {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next().unwrap_or(Self::EOF)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    fn extract_substring(&mut self) -> &'s str {
        let new_bytes_remaining = self.chars.as_str().len();
        let (prefix, suffix) = self.string.split_at(self.bytes_remaining - new_bytes_remaining);
        self.string = suffix;
        self.bytes_remaining = new_bytes_remaining;
        prefix
    }

    fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while predicate(self.first()) && !self.is_eof() {
            self.bump();
        }
    }

    // Looks past any blank space after the current position for an opening parenthesis, without
    // consuming anything.
    fn is_followed_by_paren(&self) -> bool {
        self.chars.as_str().trim_start_matches(is_blank_space).starts_with('(')
    }

    fn blank_space(&mut self) -> TokenKind {
        self.eat_while(is_blank_space);
        TokenKind::Whitespace
    }

    // The line end character is left for the following blank space token.
    fn line_comment(&mut self, kind: CommentKind) -> TokenKind {
        self.eat_while(|c| c != '\n');
        TokenKind::Comment { kind }
    }

    fn block_comment(&mut self) -> TokenKind {
        // Consume the star in the block comment opener.
        self.bump();

        while let Some(c) = self.bump() {
            if c == '*' && self.first() == '/' {
                self.bump();
                break;
            }
        }

        TokenKind::Comment { kind: CommentKind::Block }
    }

    fn string(&mut self, delimiter: char) -> TokenKind {
        let mut has_escapes = false;
        while let Some(c) = self.bump() {
            match c {
                c if c == delimiter => break,
                // The escaped character is consumed with the backslash, even a delimiter.
                '\\' => {
                    has_escapes = true;
                    self.bump();
                }
                _ => (),
            }
        }
        TokenKind::String { has_escapes }
    }

    // Consumes one segment of a template literal, up to and including either the closing
    // backtick or the `${` opening an interpolation. The character opening the segment has
    // already been consumed.
    fn template_literal(&mut self) -> TokenKind {
        self.template = TemplateState::Outside;
        while let Some(c) = self.bump() {
            match c {
                '`' => break,
                '\\' => {
                    self.bump();
                }
                '$' if self.first() == '{' => {
                    self.bump();
                    self.template = TemplateState::Interpolation;
                    break;
                }
                _ => (),
            }
        }
        TokenKind::TemplateLiteral
    }

    // Consumes the unparsed body of an interpolation, stopping in front of the brace that
    // returns the depth to zero. Unbalanced braces consume the rest of the input.
    fn template_expression(&mut self) -> TokenKind {
        self.template = TemplateState::Outside;
        let mut depth = 1usize;
        while !self.is_eof() {
            match self.first() {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        self.template = TemplateState::Resume;
                        break;
                    }
                }
                _ => (),
            }
            self.bump();
        }
        TokenKind::TemplateExpression
    }

    fn number(&mut self) -> TokenKind {
        while !self.is_eof() {
            match self.first() {
                '0'..='9' | '.' | '_' => {
                    self.bump();
                }

                // An exponent marker only belongs to the number if a sign or digit follows.
                'e' | 'E' if matches!(self.second(), '+' | '-' | '0'..='9') => {
                    self.bump();
                    if matches!(self.first(), '+' | '-') {
                        self.bump();
                    }
                }

                _ => break,
            }
        }
        TokenKind::Number
    }
}

/// Matches the white space class of common regular expression engines: every Unicode white
/// space character plus the byte order mark.
fn is_blank_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

fn is_identifier(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

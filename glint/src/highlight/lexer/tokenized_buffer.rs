use super::cursor::Cursor;
use super::Token;
use crate::highlight::source;

/// A tokenized [source::SourceBuffer], along with its lines for line-numbered output.
pub struct TokenizedBuffer<'s> {
    tokens: Vec<Token<'s>>,
    lines: Vec<&'s str>,
    source: &'s source::SourceBuffer<'s>,
}

pub type TokenIndex = usize;

impl<'s> TokenizedBuffer<'s> {
    pub fn tokenize(source: &'s source::SourceBuffer) -> TokenizedBuffer<'s> {
        let code = source.code();
        let tokens: Vec<Token<'s>> = Cursor::new(code).collect();
        // Lines split on '\n' only, so an input ending in a newline has an empty last line.
        let lines = code.split('\n').collect();
        tracing::debug!(
            file = source.file_name(),
            tokens = tokens.len(),
            "tokenized source buffer"
        );
        TokenizedBuffer { tokens, lines, source }
    }

    pub fn token_at(&self, i: TokenIndex) -> Option<&Token<'s>> {
        self.tokens.get(i)
    }

    pub fn print_tokens(&self) {
        for token in self.tokens.iter() {
            println!("{}", &token);
        }
    }

    pub fn tokens(&self) -> &Vec<Token<'s>> {
        &self.tokens
    }

    pub fn lines(&self) -> &Vec<&'s str> {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn file_name(&self) -> &str {
        self.source.file_name()
    }
}

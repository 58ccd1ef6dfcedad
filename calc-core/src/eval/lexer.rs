use logos::{Logos, Lexer as LogosLexer};

use crate::error::{CalcError, Result};
use super::Token;

pub struct Lexer<'a> {
    inner: LogosLexer<'a, Token>,
    pub input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: Token::lexer(input),
            input,
        }
    }

    pub fn next_token(&mut self) -> Result<Option<Token>> {
        match self.inner.next() {
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(_)) => {
                let span = self.inner.span();
                Err(CalcError::MalformedExpression(format!(
                    "unexpected '{}' at offset {}",
                    &self.input[span.start..span.end],
                    span.start
                )))
            }
            None => Ok(None),
        }
    }

    /// Byte offset of the most recently read token
    pub fn offset(&self) -> usize {
        self.inner.span().start
    }

    pub fn collect_all(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}

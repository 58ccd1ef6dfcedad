//! Recursive-descent evaluator over the arithmetic token stream
//!
//! Grammar:
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := NUMBER | '(' expr ')'
//! ```
//!
//! Values are folded while parsing, so long operator chains never build a
//! deep tree. Only parentheses and unary signs recurse, and both are bounded
//! by [`MAX_NESTING`].

use crate::error::{CalcError, Result, MAX_NESTING};
use super::{Lexer, Token};

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Option<Token>,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Result<Self> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;

        Ok(Self {
            lexer,
            current,
            depth: 0,
        })
    }

    /// Parse the whole input as one expression and return its value
    ///
    /// The value may be non-finite; classifying that is left to the caller.
    pub fn parse(&mut self) -> Result<f64> {
        if self.current.is_none() {
            return Err(self.malformed("empty expression"));
        }

        let value = self.parse_expr()?;

        if let Some(token) = self.current {
            return Err(self.malformed(&format!("unexpected {:?}", token)));
        }

        Ok(value)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn malformed(&self, message: &str) -> CalcError {
        CalcError::MalformedExpression(format!("{} at offset {}", message, self.lexer.offset()))
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(CalcError::NestingTooDeep(MAX_NESTING));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_expr(&mut self) -> Result<f64> {
        let mut value = self.parse_term()?;

        while let Some(token) = self.current.filter(Token::is_additive) {
            self.advance()?;
            let rhs = self.parse_term()?;
            value = match token {
                Token::Plus => value + rhs,
                _ => value - rhs,
            };
        }

        Ok(value)
    }

    fn parse_term(&mut self) -> Result<f64> {
        let mut value = self.parse_unary()?;

        while let Some(token) = self.current.filter(Token::is_multiplicative) {
            self.advance()?;
            let rhs = self.parse_unary()?;
            value = match token {
                Token::Star => value * rhs,
                _ => value / rhs,
            };
        }

        Ok(value)
    }

    fn parse_unary(&mut self) -> Result<f64> {
        match self.current {
            Some(token @ (Token::Plus | Token::Minus)) => {
                self.advance()?;
                self.enter()?;
                let operand = self.parse_unary();
                self.leave();
                let operand = operand?;
                Ok(if token == Token::Minus { -operand } else { operand })
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<f64> {
        match self.current {
            Some(Token::Number(value)) => {
                self.advance()?;
                Ok(value)
            }
            Some(Token::LParen) => {
                self.advance()?;
                self.enter()?;
                let value = self.parse_expr();
                self.leave();
                let value = value?;

                if self.current != Some(Token::RParen) {
                    return Err(self.malformed("expected ')'"));
                }
                self.advance()?;
                Ok(value)
            }
            Some(token) => Err(self.malformed(&format!("unexpected {:?}", token))),
            None => Err(self.malformed("unexpected end of expression")),
        }
    }
}

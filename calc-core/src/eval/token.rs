use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    // Operators
    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    // Grouping
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // Numerals: "12", "12.", "12.5", ".5"
    #[regex(r"[0-9]+\.?[0-9]*", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),
}

impl Token {
    pub fn is_additive(&self) -> bool {
        matches!(self, Token::Plus | Token::Minus)
    }

    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Token::Star | Token::Slash)
    }
}

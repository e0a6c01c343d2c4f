use crate::utils::string_utils::{format_float, quote};
use std::fmt;
use std::mem;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Ident(String),
    IntCon(i64),
    FloatCon(f64),
    StringLiteral(String),
    If,
    Else,
    Exit,
    Float,
    Int,
    Read,
    Return,
    While,
    Write,
    Plus,
    Minus,
    Multiply,
    Divide,
    Assign,
    Equal,
    NotEqual,
    LessThanEqual,
    LessThan,
    GreaterThanEqual,
    GreaterThan,
    And,
    Or,
    Not,
    LParen,
    RParen,
    LBrack,
    RBrack,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Eof,
}

impl Token {
    /// Compares token kinds while disregarding any literal payload.
    pub fn same_kind(&self, other: &Token) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::If
                | Token::Else
                | Token::Exit
                | Token::Float
                | Token::Int
                | Token::Read
                | Token::Return
                | Token::While
                | Token::Write
        )
    }

    pub fn is_type(&self) -> bool {
        matches!(self, Token::Int | Token::Float)
    }

    /// True for every token that can open a `Statement`.
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            Token::Ident(_)
                | Token::If
                | Token::While
                | Token::Read
                | Token::Write
                | Token::Return
                | Token::Exit
                | Token::LBrace
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::Ident(name) => return f.write_str(name),
            Token::IntCon(value) => return write!(f, "{}", value),
            Token::FloatCon(value) => return f.write_str(&format_float(*value)),
            Token::StringLiteral(value) => return f.write_str(&quote(value)),
            Token::If => "if",
            Token::Else => "else",
            Token::Exit => "exit",
            Token::Float => "float",
            Token::Int => "int",
            Token::Read => "read",
            Token::Return => "return",
            Token::While => "while",
            Token::Write => "write",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Multiply => "*",
            Token::Divide => "/",
            Token::Assign => "=",
            Token::Equal => "==",
            Token::NotEqual => "!=",
            Token::LessThanEqual => "<=",
            Token::LessThan => "<",
            Token::GreaterThanEqual => ">=",
            Token::GreaterThan => ">",
            Token::And => "&&",
            Token::Or => "||",
            Token::Not => "!",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBrack => "[",
            Token::RBrack => "]",
            Token::LBrace => "{",
            Token::RBrace => "}",
            Token::Semicolon => ";",
            Token::Comma => ",",
            Token::Eof => "end of input",
        };
        f.write_str(text)
    }
}

/// A token together with the line it started on.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub line: usize,
}

impl Lexeme {
    pub fn new(token: Token, line: usize) -> Self {
        Self { token, line }
    }
}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}  {:?}", self.line, self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_kind_ignores_payload() {
        assert!(Token::Ident("a".to_string()).same_kind(&Token::Ident("b".to_string())));
        assert!(Token::IntCon(1).same_kind(&Token::IntCon(2)));
        assert!(!Token::IntCon(1).same_kind(&Token::FloatCon(1.0)));
    }

    #[test]
    fn display_uses_source_spelling() {
        assert_eq!(Token::LessThanEqual.to_string(), "<=");
        assert_eq!(Token::FloatCon(2.0).to_string(), "2.0");
        assert_eq!(Token::StringLiteral("hi".to_string()).to_string(), "\"hi\"");
        assert_eq!(Token::Eof.to_string(), "end of input");
    }
}

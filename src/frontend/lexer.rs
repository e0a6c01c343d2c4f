use crate::frontend::token::{Lexeme, Token};
use crate::utils::config::lexer::{
    keyword_or_identifier, COMMENT_END, COMMENT_START, FLOAT_LITERAL, IDENTIFIER, INT_LITERAL,
    STRING_LITERAL,
};
use crate::utils::config::ParseOptions;
use crate::utils::diagnostics::{Diagnostic, Diagnostics};
use regex::Regex;
use std::mem;

/// Pull-based scanner over one source text.
///
/// The lexer never stops on bad input: an unknown character is reported,
/// skipped, and scanning resumes. Diagnostics accumulate until
/// [`Lexer::take_diagnostics`] is called.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: usize,
    options: ParseOptions,
    diagnostics: Diagnostics,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    pub fn with_options(source: &'a str, options: ParseOptions) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            options,
            diagnostics: Diagnostics::new(),
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Diagnostics {
        mem::take(&mut self.diagnostics)
    }

    /// Returns the next token, or `Token::Eof` once the input is exhausted.
    pub fn next_token(&mut self) -> Lexeme {
        loop {
            self.skip_whitespace_and_comments();
            let Some(ch) = self.peek() else {
                return Lexeme::new(Token::Eof, self.line);
            };
            let line = self.line;
            if let Some(token) = self.scan_token(ch) {
                return Lexeme::new(token, line);
            }
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consumes the text matched by an anchored pattern, counting newlines.
    fn take_match(&mut self, pattern: &Regex) -> Option<&'a str> {
        let end = pattern.find(self.rest())?.end();
        let text = &self.source[self.pos..self.pos + end];
        self.pos += end;
        self.line += text.matches('\n').count();
        Some(text)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ' | '\t' | '\r' | '\n') => {
                    self.bump();
                }
                Some('/') if self.rest().starts_with(COMMENT_START) => self.scan_comment(),
                _ => break,
            }
        }
    }

    fn scan_comment(&mut self) {
        let start_line = self.line;
        self.pos += COMMENT_START.len();
        let body = self.rest();
        match body.find(COMMENT_END) {
            Some(end) => {
                self.line += body[..end].matches('\n').count();
                self.pos += end + COMMENT_END.len();
            }
            None => {
                // Runs to end of input.
                self.line += body.matches('\n').count();
                self.pos = self.source.len();
                if self.options.strict_comments {
                    self.diagnostics.push(Diagnostic::lexical(
                        "unterminated block comment",
                        COMMENT_START,
                        start_line,
                    ));
                }
            }
        }
    }

    fn scan_token(&mut self, ch: char) -> Option<Token> {
        if let Some(text) = self.take_match(&IDENTIFIER) {
            return Some(keyword_or_identifier(text));
        }
        if let Some(text) = self.take_match(&FLOAT_LITERAL) {
            return self.float_literal(text);
        }
        if let Some(text) = self.take_match(&INT_LITERAL) {
            return self.int_literal(text);
        }
        let line = self.line;
        if let Some(text) = self.take_match(&STRING_LITERAL) {
            return Some(Token::StringLiteral(text[1..text.len() - 1].to_string()));
        }
        self.scan_operator(ch, line)
    }

    fn int_literal(&mut self, text: &str) -> Option<Token> {
        match text.parse::<i64>() {
            Ok(value) => Some(Token::IntCon(value)),
            Err(_) => {
                self.diagnostics.push(Diagnostic::lexical(
                    format!("integer literal '{}' is out of range", text),
                    text,
                    self.line,
                ));
                None
            }
        }
    }

    fn float_literal(&mut self, text: &str) -> Option<Token> {
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Some(Token::FloatCon(value)),
            _ => {
                self.diagnostics.push(Diagnostic::lexical(
                    format!("float literal '{}' is out of range", text),
                    text,
                    self.line,
                ));
                None
            }
        }
    }

    fn scan_operator(&mut self, ch: char, line: usize) -> Option<Token> {
        self.bump();
        let token = match ch {
            '=' if self.eat('=') => Token::Equal,
            '=' => Token::Assign,
            '!' if self.eat('=') => Token::NotEqual,
            '!' => Token::Not,
            '<' if self.eat('=') => Token::LessThanEqual,
            '<' => Token::LessThan,
            '>' if self.eat('=') => Token::GreaterThanEqual,
            '>' => Token::GreaterThan,
            '&' if self.eat('&') => Token::And,
            '|' if self.eat('|') => Token::Or,
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Multiply,
            '/' => Token::Divide,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBrack,
            ']' => Token::RBrack,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            ';' => Token::Semicolon,
            ',' => Token::Comma,
            '\'' | '"' => {
                self.diagnostics.push(Diagnostic::lexical(
                    "unterminated string literal",
                    ch.to_string(),
                    line,
                ));
                return None;
            }
            _ => {
                self.diagnostics.push(Diagnostic::lexical(
                    format!("unexpected character '{}'", ch),
                    ch.to_string(),
                    line,
                ));
                return None;
            }
        };
        Some(token)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Lexeme;

    fn next(&mut self) -> Option<Lexeme> {
        let lexeme = self.next_token();
        (lexeme.token != Token::Eof).then_some(lexeme)
    }
}

/// Scans the whole source, returning every token (without `Eof`) and the
/// lexical diagnostics.
pub fn scan(source: &str, options: ParseOptions) -> (Vec<Lexeme>, Vec<Diagnostic>) {
    let mut lexer = Lexer::with_options(source, options);
    let tokens: Vec<Lexeme> = lexer.by_ref().collect();
    (tokens, lexer.take_diagnostics().into_sorted())
}

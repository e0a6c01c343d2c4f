// Lexer tables and parse options

pub mod lexer {
    use crate::frontend::token::Token;
    use lazy_static::lazy_static;
    use regex::Regex;
    use std::collections::HashMap;

    lazy_static! {
        pub static ref KEYWORDS: HashMap<&'static str, Token> = [
            ("if", Token::If),
            ("else", Token::Else),
            ("exit", Token::Exit),
            ("float", Token::Float),
            ("int", Token::Int),
            ("read", Token::Read),
            ("return", Token::Return),
            ("while", Token::While),
            ("write", Token::Write),
        ]
        .into_iter()
        .collect();

        // Token patterns, tried in this order. Float must precede integer.
        // `\w` is Unicode-aware, so `café` is one identifier.
        pub static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_]\w*").unwrap();
        pub static ref FLOAT_LITERAL: Regex = Regex::new(r"^[0-9]+\.[0-9]+").unwrap();
        pub static ref INT_LITERAL: Regex = Regex::new(r"^[0-9]+").unwrap();
        pub static ref STRING_LITERAL: Regex = Regex::new(r#"^(?:'[^']*'|"[^"]*")"#).unwrap();
    }

    pub const COMMENT_START: &str = "/*";
    pub const COMMENT_END: &str = "*/";

    pub fn keyword_or_identifier(text: &str) -> Token {
        KEYWORDS
            .get(text)
            .cloned()
            .unwrap_or_else(|| Token::Ident(text.to_string()))
    }
}

/// Default bound on the height of the tree the parser will build.
pub const MAX_NESTING: usize = 128;

/// Knobs shared by the lexer and the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Report a block comment that runs to end of input instead of
    /// absorbing it silently.
    pub strict_comments: bool,
    /// Maximum nesting of statements, parentheses, array indexes and
    /// operator chains. Deeper input is a syntax error.
    pub max_nesting: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strict_comments: false,
            max_nesting: MAX_NESTING,
        }
    }
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            strict_comments: true,
            ..Self::default()
        }
    }

    pub fn with_max_nesting(self, max_nesting: usize) -> Self {
        Self {
            max_nesting,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::lexer::*;
    use crate::frontend::token::Token;

    #[test]
    fn keywords_are_exact_matches() {
        assert_eq!(keyword_or_identifier("while"), Token::While);
        assert_eq!(keyword_or_identifier("While"), Token::Ident("While".to_string()));
        assert_eq!(keyword_or_identifier("intx"), Token::Ident("intx".to_string()));
    }

    #[test]
    fn identifiers_continue_with_unicode_word_characters() {
        assert_eq!(IDENTIFIER.find("café = 1").map(|m| m.as_str()), Some("café"));
        assert!(IDENTIFIER.find("écu").is_none());
    }

    #[test]
    fn float_pattern_needs_digits_on_both_sides() {
        assert_eq!(FLOAT_LITERAL.find("3.14;").map(|m| m.as_str()), Some("3.14"));
        assert!(FLOAT_LITERAL.find("3.;").is_none());
        assert!(FLOAT_LITERAL.find("x3.1").is_none());
    }
}

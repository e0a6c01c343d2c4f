use crate::frontend::token::Token;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lexical,
    Syntax,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Lexical => f.write_str("Lexical"),
            Category::Syntax => f.write_str("Syntax"),
        }
    }
}

/// A lexical or syntax fault tied to a source line.
///
/// `token` holds the offending text: the rejected character for lexical
/// faults, the spelling of the unexpected token for syntax faults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{category} error at line {line}: {message}")]
pub struct Diagnostic {
    pub category: Category,
    pub message: String,
    pub line: usize,
    pub token: Option<String>,
}

impl Diagnostic {
    /// Create a lexical diagnostic for the offending source text
    pub fn lexical(message: impl Into<String>, token: impl Into<String>, line: usize) -> Self {
        Self {
            category: Category::Lexical,
            message: message.into(),
            line,
            token: Some(token.into()),
        }
    }

    /// Create a syntax diagnostic for a token that cannot extend the parse
    pub fn syntax(expected: impl fmt::Display, found: &Token, line: usize) -> Self {
        let message = match found {
            Token::Eof => format!("unexpected end of input, expected {}", expected),
            other => format!("unexpected token '{}', expected {}", other, expected),
        };
        Self {
            category: Category::Syntax,
            message,
            line,
            token: Some(found.to_string()),
        }
    }

    /// Create a syntax diagnostic for input nested past `limit` levels
    pub fn too_deep(limit: usize, found: &Token, line: usize) -> Self {
        Self {
            category: Category::Syntax,
            message: format!("input nested deeper than {} levels", limit),
            line,
            token: Some(found.to_string()),
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.category == Category::Lexical
    }

    pub fn is_syntax(&self) -> bool {
        self.category == Category::Syntax
    }
}

/// Collects diagnostics in emission order.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Orders by line; diagnostics on the same line keep emission order.
    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.entries.sort_by_key(|diagnostic| diagnostic.line);
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_message_names_found_and_expected() {
        let diagnostic = Diagnostic::syntax("an expression", &Token::Semicolon, 3);
        assert_eq!(
            diagnostic.to_string(),
            "Syntax error at line 3: unexpected token ';', expected an expression"
        );
        assert_eq!(diagnostic.token.as_deref(), Some(";"));
    }

    #[test]
    fn sorting_is_stable_within_a_line() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(Diagnostic::lexical("b", "b", 2));
        diagnostics.push(Diagnostic::lexical("a", "a", 1));
        diagnostics.push(Diagnostic::syntax("';'", &Token::Eof, 2));
        let sorted = diagnostics.into_sorted();
        let lines: Vec<_> = sorted.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 2, 2]);
        assert!(sorted[1].is_lexical());
        assert!(sorted[2].is_syntax());
    }
}

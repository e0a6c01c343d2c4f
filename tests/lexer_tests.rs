use cminus::frontend::lexer::scan;
use cminus::{tokenize, Category, Lexeme, Lexer, ParseOptions, Token};

fn ident(name: &str) -> Token {
    Token::Ident(name.to_string())
}

fn tokens_of(source: &str) -> Vec<Token> {
    let (tokens, diagnostics) = tokenize(source);
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);
    tokens.into_iter().map(|lexeme| lexeme.token).collect()
}

#[test]
fn test_keywords_and_identifiers() {
    let source = "if else exit float int read return while write intx _tmp x1 Int";
    assert_eq!(
        tokens_of(source),
        vec![
            Token::If,
            Token::Else,
            Token::Exit,
            Token::Float,
            Token::Int,
            Token::Read,
            Token::Return,
            Token::While,
            Token::Write,
            ident("intx"),
            ident("_tmp"),
            ident("x1"),
            ident("Int"),
        ]
    );
}

#[test]
fn test_identifiers_may_continue_with_unicode_letters() {
    assert_eq!(
        tokens_of("café = 1;"),
        vec![ident("café"), Token::Assign, Token::IntCon(1), Token::Semicolon]
    );
    assert_eq!(tokens_of("x_ünï2"), vec![ident("x_ünï2")]);
}

#[test]
fn test_keyword_prefix_is_one_identifier() {
    assert_eq!(tokens_of("intx"), vec![ident("intx")]);
    assert_eq!(tokens_of("whilex = 1;")[0], ident("whilex"));
}

#[test]
fn test_two_character_operators_are_greedy() {
    let source = "a <= b == c != d >= e && f || !g = h < i > j";
    assert_eq!(
        tokens_of(source),
        vec![
            ident("a"),
            Token::LessThanEqual,
            ident("b"),
            Token::Equal,
            ident("c"),
            Token::NotEqual,
            ident("d"),
            Token::GreaterThanEqual,
            ident("e"),
            Token::And,
            ident("f"),
            Token::Or,
            Token::Not,
            ident("g"),
            Token::Assign,
            ident("h"),
            Token::LessThan,
            ident("i"),
            Token::GreaterThan,
            ident("j"),
        ]
    );
}

#[test]
fn test_operators_without_spaces() {
    assert_eq!(
        tokens_of("a<=b"),
        vec![ident("a"), Token::LessThanEqual, ident("b")]
    );
    assert_eq!(
        tokens_of("x==-y"),
        vec![ident("x"), Token::Equal, Token::Minus, ident("y")]
    );
}

#[test]
fn test_punctuation() {
    assert_eq!(
        tokens_of("( ) [ ] { } ; , + - * /"),
        vec![
            Token::LParen,
            Token::RParen,
            Token::LBrack,
            Token::RBrack,
            Token::LBrace,
            Token::RBrace,
            Token::Semicolon,
            Token::Comma,
            Token::Plus,
            Token::Minus,
            Token::Multiply,
            Token::Divide,
        ]
    );
}

#[test]
fn test_float_is_tried_before_integer() {
    assert_eq!(
        tokens_of("3.14 42 0.5 10"),
        vec![
            Token::FloatCon(3.14),
            Token::IntCon(42),
            Token::FloatCon(0.5),
            Token::IntCon(10),
        ]
    );
}

#[test]
fn test_trailing_dot_is_not_a_float() {
    let (tokens, diagnostics) = tokenize("7.");
    assert_eq!(tokens, vec![Lexeme::new(Token::IntCon(7), 1)]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "unexpected character '.'");
}

#[test]
fn test_number_then_identifier() {
    assert_eq!(tokens_of("12ab"), vec![Token::IntCon(12), ident("ab")]);
}

#[test]
fn test_integer_out_of_range() {
    let (tokens, diagnostics) = tokenize("x = 99999999999999999999;");
    assert_eq!(
        tokens.into_iter().map(|lexeme| lexeme.token).collect::<Vec<_>>(),
        vec![ident("x"), Token::Assign, Token::Semicolon]
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].category, Category::Lexical);
    assert!(diagnostics[0].message.contains("out of range"));
}

#[test]
fn test_string_literals_strip_quotes() {
    assert_eq!(
        tokens_of(r#"write("Hello, World!"); write('it is "quoted"');"#),
        vec![
            Token::Write,
            Token::LParen,
            Token::StringLiteral("Hello, World!".to_string()),
            Token::RParen,
            Token::Semicolon,
            Token::Write,
            Token::LParen,
            Token::StringLiteral("it is \"quoted\"".to_string()),
            Token::RParen,
            Token::Semicolon,
        ]
    );
}

#[test]
fn test_string_literals_keep_backslashes() {
    assert_eq!(
        tokens_of(r#""a\nb""#),
        vec![Token::StringLiteral("a\\nb".to_string())]
    );
}

#[test]
fn test_string_literal_spanning_lines() {
    let (tokens, _) = tokenize("\"first\nsecond\" x");
    assert_eq!(
        tokens,
        vec![
            Lexeme::new(Token::StringLiteral("first\nsecond".to_string()), 1),
            Lexeme::new(ident("x"), 2),
        ]
    );
}

#[test]
fn test_unterminated_string_literal() {
    let (tokens, diagnostics) = tokenize("write(\"oops);");
    assert_eq!(
        tokens.into_iter().map(|lexeme| lexeme.token).collect::<Vec<_>>(),
        vec![
            Token::Write,
            Token::LParen,
            ident("oops"),
            Token::RParen,
            Token::Semicolon,
        ]
    );
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "unterminated string literal");
    assert_eq!(diagnostics[0].token.as_deref(), Some("\""));
}

#[test]
fn test_line_numbers() {
    let source = "int x;\n\nx = 1;\n\tx = 2;";
    let (tokens, _) = tokenize(source);
    let lines: Vec<usize> = tokens.iter().map(|lexeme| lexeme.line).collect();
    assert_eq!(lines, vec![1, 1, 1, 3, 3, 3, 3, 4, 4, 4, 4]);
}

#[test]
fn test_block_comments_are_discarded() {
    let source = "x /* one */ y /* spans\ntwo\nlines */ z";
    let (tokens, diagnostics) = tokenize(source);
    assert!(diagnostics.is_empty());
    assert_eq!(
        tokens,
        vec![
            Lexeme::new(ident("x"), 1),
            Lexeme::new(ident("y"), 1),
            Lexeme::new(ident("z"), 3),
        ]
    );
}

#[test]
fn test_comment_is_not_nested() {
    assert_eq!(
        tokens_of("/* a /* b */ c"),
        vec![ident("c")]
    );
}

#[test]
fn test_unterminated_comment_is_absorbed() {
    let (tokens, diagnostics) = tokenize("x = 1; /* never closed\ny = 2;");
    assert_eq!(tokens.len(), 4);
    assert!(diagnostics.is_empty());
}

#[test]
fn test_unterminated_comment_in_strict_mode() {
    let (tokens, diagnostics) = scan("x\n/* never closed\ny", ParseOptions::strict());
    assert_eq!(tokens, vec![Lexeme::new(ident("x"), 1)]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].line, 2);
    assert_eq!(diagnostics[0].message, "unterminated block comment");
}

#[test]
fn test_unknown_characters_do_not_stop_the_scan() {
    let source = "int x @ y;\nz # = 1;";
    let (tokens, diagnostics) = tokenize(source);
    assert_eq!(
        tokens,
        vec![
            Lexeme::new(Token::Int, 1),
            Lexeme::new(ident("x"), 1),
            Lexeme::new(ident("y"), 1),
            Lexeme::new(Token::Semicolon, 1),
            Lexeme::new(ident("z"), 2),
            Lexeme::new(Token::Assign, 2),
            Lexeme::new(Token::IntCon(1), 2),
            Lexeme::new(Token::Semicolon, 2),
        ]
    );
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].message, "unexpected character '@'");
    assert_eq!(diagnostics[0].line, 1);
    assert_eq!(diagnostics[1].message, "unexpected character '#'");
    assert_eq!(diagnostics[1].line, 2);
}

#[test]
fn test_non_ascii_character_is_skipped_whole() {
    let (tokens, diagnostics) = tokenize("a é b");
    assert_eq!(tokens.len(), 2);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].token.as_deref(), Some("é"));
}

#[test]
fn test_pull_interface_ends_with_eof() {
    let mut lexer = Lexer::new("exit;\n");
    assert_eq!(lexer.next_token(), Lexeme::new(Token::Exit, 1));
    assert_eq!(lexer.next_token(), Lexeme::new(Token::Semicolon, 1));
    assert_eq!(lexer.line(), 1);
    assert_eq!(lexer.next_token(), Lexeme::new(Token::Eof, 2));
    assert_eq!(lexer.line(), 2);
    assert_eq!(lexer.next_token().token, Token::Eof);
}

#[test]
fn test_empty_and_blank_input() {
    assert!(tokens_of("").is_empty());
    assert!(tokens_of(" \t\r\n\n").is_empty());
}

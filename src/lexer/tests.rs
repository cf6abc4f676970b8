use super::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn test_full_document_tokens() {
    let input = "[Server]\nhost = \"localhost\"\nport = 8080\nready = true\n";

    let expected = vec![
        Token::new(TokenKind::SectionBegin, "["),
        Token::new(TokenKind::Section, "Server"),
        Token::new(TokenKind::SectionEnd, "]"),
        Token::new(TokenKind::Identifier, "host"),
        Token::new(TokenKind::Assign, "="),
        Token::new(TokenKind::Str, "localhost"),
        Token::new(TokenKind::Identifier, "port"),
        Token::new(TokenKind::Assign, "="),
        Token::new(TokenKind::Int, "8080"),
        Token::new(TokenKind::Identifier, "ready"),
        Token::new(TokenKind::Assign, "="),
        Token::new(TokenKind::Identifier, "true"),
    ];

    assert_eq!(tokenize(input), expected);
}

#[test]
fn test_section_name_keeps_inner_spaces() {
    let tokens = tokenize("[Final Section]");
    assert_eq!(tokens[1], Token::new(TokenKind::Section, "Final Section"));
}

#[test]
fn test_empty_brackets_emit_begin_and_end() {
    assert_eq!(kinds("[]"), vec![TokenKind::SectionBegin, TokenKind::SectionEnd]);
}

#[test]
fn test_comment_runs_to_end_of_line() {
    let tokens = tokenize("a = 1 # b = 2\nc = 3");
    let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "=", "1", "c", "=", "3"]);
}

#[test]
fn test_comment_inside_string_is_text() {
    let tokens = tokenize("s = \"not # a comment\"");
    assert_eq!(tokens[2], Token::new(TokenKind::Str, "not # a comment"));
}

#[test]
fn test_digit_runs_merge() {
    let tokens = tokenize("8080");
    assert_eq!(tokens, vec![Token::new(TokenKind::Int, "8080")]);
}

#[test]
fn test_negative_integer_is_one_token() {
    let tokens = tokenize("-42");
    assert_eq!(tokens, vec![Token::new(TokenKind::Int, "-42")]);
}

#[test]
fn test_dot_promotes_integer_to_float() {
    let tokens = tokenize("3.14");
    assert_eq!(tokens, vec![Token::new(TokenKind::Float, "3.14")]);
}

#[test]
fn test_leading_dot_float() {
    let tokens = tokenize(".5");
    assert_eq!(tokens, vec![Token::new(TokenKind::Float, ".5")]);
}

#[test]
fn test_second_dot_keeps_accumulating() {
    // The float merge accepts further dots; the parser decides what the
    // text means.
    let tokens = tokenize("1.2.3");
    assert_eq!(tokens, vec![Token::new(TokenKind::Float, "1.2.3")]);
}

#[test]
fn test_atoms_never_merge() {
    assert_eq!(
        kinds("((=))"),
        vec![
            TokenKind::ListBegin,
            TokenKind::ListBegin,
            TokenKind::Assign,
            TokenKind::ListEnd,
            TokenKind::ListEnd,
        ]
    );
}

#[test]
fn test_quotes_split_adjacent_tokens() {
    let tokens = tokenize("ab\"cd\"ef");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Identifier, "ab"),
            Token::new(TokenKind::Str, "cd"),
            Token::new(TokenKind::Identifier, "ef"),
        ]
    );
}

#[test]
fn test_whitespace_splits_identifiers() {
    let tokens = tokenize("foo bar");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Identifier, "foo"),
            Token::new(TokenKind::Identifier, "bar"),
        ]
    );
}

#[test]
fn test_unclosed_string_accumulates_to_end() {
    let tokens = tokenize("s = \"abc");
    assert_eq!(tokens[2], Token::new(TokenKind::Str, "abc"));
}

#[test]
fn test_empty_string_emits_no_token() {
    let tokens = tokenize("s = \"\"");
    assert_eq!(
        kinds("s = \"\""),
        vec![TokenKind::Identifier, TokenKind::Assign]
    );
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_stray_closing_bracket_is_identifier() {
    let tokens = tokenize("]");
    assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "]")]);
}

#[test]
fn test_tokenize_is_reentrant() {
    // Leave one input mid-string, then tokenize another: the second call
    // starts from a clean mode.
    let _ = tokenize("x = \"never closed");
    let tokens = tokenize("y = 1");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Identifier, "y"),
            Token::new(TokenKind::Assign, "="),
            Token::new(TokenKind::Int, "1"),
        ]
    );
}

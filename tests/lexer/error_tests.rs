use elcl::error::ErrorCategory;
use elcl::lexer::Lexer;
use elcl::source::SourceIdentifier;
use elcl::token::LexerToken;
use elcl::token_type::TokenType;

fn collect_until_error(lexer: &mut Lexer) -> (Vec<LexerToken>, elcl::error::Error) {
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token() {
            Ok(token) => {
                let is_end = token.token_type == TokenType::EndOfData;
                tokens.push(token);
                if is_end {
                    panic!("expected an error before the end of the data");
                }
            }
            Err(error) => return (tokens, error),
        }
    }
}

#[test]
fn invalid_utf8_is_delayed_past_preceding_tokens() {
    let mut source = b"name: \"abc\"\n".to_vec();
    source.extend_from_slice(b"\x80\n");
    let mut lexer = Lexer::new(source, SourceIdentifier::for_text());
    let (tokens, error) = collect_until_error(&mut lexer);
    // The whole first line lexes cleanly before the error surfaces.
    let types: Vec<TokenType> = tokens.iter().map(|token| token.token_type).collect();
    assert_eq!(
        types,
        vec![
            TokenType::RegularName,
            TokenType::NameValueSeparator,
            TokenType::Spacing,
            TokenType::Text,
            TokenType::LineBreak,
        ]
    );
    assert_eq!(error.category(), ErrorCategory::Encoding);
    assert_eq!(error.location().position().line, 2);
    assert_eq!(error.location().position().column, 1);
}

#[test]
fn invalid_utf8_inside_a_token() {
    let mut source = b"name: \"ab".to_vec();
    source.extend_from_slice(b"\xC3\x28\"\n"); // invalid continuation byte
    let mut lexer = Lexer::new(source, SourceIdentifier::for_text());
    let (_, error) = collect_until_error(&mut lexer);
    assert_eq!(error.category(), ErrorCategory::Encoding);
}

#[test]
fn forbidden_control_character() {
    let mut lexer = Lexer::new(b"name: \"a\x01b\"\n".to_vec(), SourceIdentifier::for_text());
    let (_, error) = collect_until_error(&mut lexer);
    assert_eq!(error.category(), ErrorCategory::Character);
}

#[test]
fn name_of_one_hundred_characters_is_accepted() {
    let name = "a".repeat(100);
    let tokens = Lexer::from_text(&format!("{}: 1\n", name)).tokenize().unwrap();
    assert_eq!(tokens[0].token_type, TokenType::RegularName);
}

#[test]
fn name_of_one_hundred_and_one_characters_is_rejected() {
    let name = "a".repeat(101);
    let error = Lexer::from_text(&format!("{}: 1\n", name))
        .tokenize()
        .unwrap_err();
    assert_eq!(error.category(), ErrorCategory::LimitExceeded);
    assert_eq!(error.message(), "A name must not exceed 100 characters.");
}

#[test]
fn name_ending_with_underscore_is_rejected() {
    let error = Lexer::from_text("name_: 1\n").tokenize().unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
    assert!(error.message().contains("underscore"));
}

#[test]
fn double_word_separator_is_rejected() {
    let error = Lexer::from_text("a__b: 1\n").tokenize().unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn error_location_points_at_the_offending_character() {
    let error = Lexer::from_text("value: @@@\n").tokenize().unwrap_err();
    assert_eq!(error.location().position().line, 1);
    assert_eq!(error.location().position().column, 8);
}

#[test]
fn line_too_long_is_a_limit_error() {
    let input = format!("value: \"{}\"\n", "x".repeat(4100));
    let error = Lexer::from_text(&input).tokenize().unwrap_err();
    assert_eq!(error.category(), ErrorCategory::LimitExceeded);
}

#[test]
fn digest_is_preserved_after_an_error() {
    let mut source = b"ok: 1\n".to_vec();
    source.extend_from_slice(b"\x80");
    let mut lexer = Lexer::new(source, SourceIdentifier::for_text());
    let (_, error) = collect_until_error(&mut lexer);
    assert_eq!(error.category(), ErrorCategory::Encoding);
    // The lexer is closed now; reading fails with an internal error.
    assert_eq!(
        lexer.next_token().unwrap_err().category(),
        ErrorCategory::Internal
    );
}

#[test]
fn errors_render_with_a_caret() {
    let input = "value: ???\n";
    let error = Lexer::from_text(input).tokenize().unwrap_err();
    let rendered = elcl::diagnostic::render(&error, Some(input));
    assert!(rendered.contains("value: ???"));
    assert!(rendered.contains('^'));
}

#[test]
fn unexpected_end_replaces_syntax_at_end_of_data() {
    let error = Lexer::from_text("value: \"open").tokenize().unwrap_err();
    assert_eq!(error.category(), ErrorCategory::UnexpectedEnd);
    let error = Lexer::from_text("value: \"open\ntail\"\n")
        .tokenize()
        .unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

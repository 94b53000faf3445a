use elcl::error::ErrorCategory;
use elcl::lexer::Lexer;
use elcl::token::{LexerToken, TokenContent};
use elcl::token_type::TokenType;

fn lex_value(value: &str) -> LexerToken {
    let mut lexer = Lexer::from_text(&format!("value: {}\n", value));
    let tokens = lexer.tokenize().unwrap();
    tokens[3].clone()
}

fn lex_value_error(value: &str) -> elcl::error::Error {
    Lexer::from_text(&format!("value: {}\n", value))
        .tokenize()
        .unwrap_err()
}

#[test]
fn plain_text() {
    let token = lex_value("\"hello world\"");
    assert_eq!(token.token_type, TokenType::Text);
    assert_eq!(token.content, TokenContent::Text("hello world".to_string()));
    assert_eq!(token.raw_text, "\"hello world\"");
}

#[test]
fn simple_escape_sequences() {
    let token = lex_value(r#""a\\b\"c\$d\te\nf\rg""#);
    assert_eq!(
        token.content,
        TokenContent::Text("a\\b\"c$d\te\nf\rg".to_string())
    );
}

#[test]
fn unicode_escapes() {
    assert_eq!(
        lex_value(r#""Aé""#).content,
        TokenContent::Text("A\u{e9}".to_string())
    );
    assert_eq!(
        lex_value(r#""\u{1F600}""#).content,
        TokenContent::Text("\u{1F600}".to_string())
    );
    assert_eq!(
        lex_value(r#""\u{41}""#).content,
        TokenContent::Text("A".to_string())
    );
}

#[test]
fn invalid_unicode_escapes() {
    // Surrogate half.
    assert_eq!(lex_value_error(r#""\ud800""#).category(), ErrorCategory::Syntax);
    // Beyond the Unicode range.
    assert_eq!(
        lex_value_error(r#""\u{110000}""#).category(),
        ErrorCategory::Syntax
    );
    // Too many digits.
    assert_eq!(
        lex_value_error(r#""\u{100000000}""#).category(),
        ErrorCategory::Syntax
    );
    // Too few digits in the fixed form.
    assert_eq!(lex_value_error(r#""\u00""#).category(), ErrorCategory::Syntax);
}

#[test]
fn unknown_escape_is_rejected() {
    assert_eq!(lex_value_error(r#""\q""#).category(), ErrorCategory::Syntax);
}

#[test]
fn line_break_in_text_is_rejected() {
    let error = Lexer::from_text("value: \"broken\ntext\"\n")
        .tokenize()
        .unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn unterminated_text_hits_end_of_data() {
    let error = Lexer::from_text("value: \"open").tokenize().unwrap_err();
    assert_eq!(error.category(), ErrorCategory::UnexpectedEnd);
}

#[test]
fn code_span_has_no_escapes() {
    let token = lex_value(r#"`let x = "\n";`"#);
    assert_eq!(token.token_type, TokenType::Code);
    assert_eq!(
        token.content,
        TokenContent::Text(r#"let x = "\n";"#.to_string())
    );
}

#[test]
fn regex_keeps_backslashes() {
    let token = lex_value(r#"/^a\/b\d+$/"#);
    assert_eq!(token.token_type, TokenType::RegEx);
    assert_eq!(token.content, TokenContent::Text(r#"^a/b\d+$"#.to_string()));
}

#[test]
fn single_line_bytes() {
    let token = lex_value("<c8 14>");
    assert_eq!(token.token_type, TokenType::Bytes);
    assert_eq!(token.content, TokenContent::Bytes(vec![0xc8, 0x14]));
}

#[test]
fn single_line_bytes_with_format() {
    let token = lex_value("<hex: c814 01>");
    assert_eq!(token.content, TokenContent::Bytes(vec![0xc8, 0x14, 0x01]));
}

#[test]
fn unknown_bytes_format_is_unsupported() {
    let error = lex_value_error("<base64: aGVsbG8=>");
    assert_eq!(error.category(), ErrorCategory::Unsupported);
}

#[test]
fn odd_hex_digit_is_rejected() {
    let error = lex_value_error("<c8 1>");
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn boolean_literals() {
    for (text, value) in [
        ("true", true),
        ("Yes", true),
        ("ENABLED", true),
        ("on", true),
        ("false", false),
        ("no", false),
        ("Disabled", false),
        ("off", false),
    ] {
        let token = lex_value(text);
        assert_eq!(token.token_type, TokenType::Boolean, "literal {}", text);
        assert_eq!(token.content, TokenContent::Boolean(value), "literal {}", text);
    }
}

#[test]
fn unknown_literal_is_rejected() {
    let error = lex_value_error("maybe");
    assert_eq!(error.category(), ErrorCategory::Syntax);
    assert_eq!(error.message(), "Unknown value literal.");
}

#[test]
fn over_long_literal_is_rejected() {
    let error = lex_value_error("definitely");
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn floats() {
    assert_eq!(lex_value("2.5").content, TokenContent::Float(2.5));
    assert_eq!(lex_value(".5").content, TokenContent::Float(0.5));
    assert_eq!(lex_value("-0.25").content, TokenContent::Float(-0.25));
    assert_eq!(lex_value("1e3").content, TokenContent::Float(1000.0));
    assert_eq!(lex_value("2.5e-2").content, TokenContent::Float(0.025));
    assert_eq!(lex_value("inf").content, TokenContent::Float(f64::INFINITY));
    assert_eq!(
        lex_value("-INF").content,
        TokenContent::Float(f64::NEG_INFINITY)
    );
    let nan = lex_value("NaN");
    match nan.content {
        TokenContent::Float(value) => assert!(value.is_nan()),
        other => panic!("expected a float, got {:?}", other),
    }
}

#[test]
fn float_limits() {
    // More than 20 mantissa digits.
    assert_eq!(
        lex_value_error("123456789012345678901.5").category(),
        ErrorCategory::LimitExceeded
    );
    // More than 6 exponent digits.
    assert_eq!(
        lex_value_error("1.5e1234567").category(),
        ErrorCategory::LimitExceeded
    );
}

#[test]
fn float_out_of_range_is_a_syntax_error() {
    let error = lex_value_error("1.5e400");
    assert_eq!(error.category(), ErrorCategory::Syntax);
    assert_eq!(error.message(), "The floating point number is out of range.");
}

#[test]
fn leading_zeros_in_floats_are_rejected() {
    assert_eq!(lex_value_error("01.5").category(), ErrorCategory::Syntax);
    assert_eq!(lex_value("0.5").content, TokenContent::Float(0.5));
}

use elcl::datetime::{TimeDelta, TimeUnit};
use elcl::error::ErrorCategory;
use elcl::lexer::Lexer;
use elcl::token::{LexerToken, TokenContent};
use elcl::token_type::TokenType;

/// Lex a single `value: …` line and return the value token.
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
fn decimal_integers() {
    assert_eq!(lex_value("0").content, TokenContent::Integer(0));
    assert_eq!(lex_value("12345").content, TokenContent::Integer(12345));
    assert_eq!(lex_value("-42").content, TokenContent::Integer(-42));
    assert_eq!(lex_value("+42").content, TokenContent::Integer(42));
    assert_eq!(
        lex_value("1'000'000").content,
        TokenContent::Integer(1_000_000)
    );
}

#[test]
fn hex_and_binary_integers() {
    assert_eq!(lex_value("0x1f").content, TokenContent::Integer(31));
    assert_eq!(lex_value("0XFF").content, TokenContent::Integer(255));
    assert_eq!(lex_value("0b1010").content, TokenContent::Integer(10));
    assert_eq!(lex_value("-0x10").content, TokenContent::Integer(-16));
}

#[test]
fn sixty_four_bit_limits() {
    assert_eq!(
        lex_value("9223372036854775807").content,
        TokenContent::Integer(i64::MAX)
    );
    assert_eq!(
        lex_value("-9223372036854775808").content,
        TokenContent::Integer(i64::MIN)
    );
    let error = lex_value_error("9223372036854775808");
    assert_eq!(error.category(), ErrorCategory::LimitExceeded);
    assert_eq!(error.message(), "The number exceeds the 64-bit limit.");
}

#[test]
fn leading_zero_is_rejected() {
    let error = lex_value_error("0123");
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn empty_prefix_numbers_are_rejected() {
    assert_eq!(lex_value_error("0x").category(), ErrorCategory::Syntax);
    assert_eq!(lex_value_error("0b").category(), ErrorCategory::Syntax);
}

#[test]
fn binary_floats_are_rejected() {
    let error = lex_value_error("0x10.5");
    assert_eq!(error.category(), ErrorCategory::Syntax);
    assert!(error.message().contains("not supported"));
}

#[test]
fn si_byte_suffixes() {
    assert_eq!(lex_value("1 kb").content, TokenContent::Integer(1_000));
    assert_eq!(lex_value("2mb").content, TokenContent::Integer(2_000_000));
    assert_eq!(lex_value("3 GB").content, TokenContent::Integer(3_000_000_000));
}

#[test]
fn iec_byte_suffixes() {
    let token = lex_value("0x10 kib");
    assert_eq!(token.token_type, TokenType::Integer);
    assert_eq!(token.content, TokenContent::Integer(16_384));
    assert_eq!(token.raw_text, "0x10 kib");
    assert_eq!(lex_value("4 MiB").content, TokenContent::Integer(4 * 1_048_576));
}

#[test]
fn unrepresentable_suffixes() {
    let error = lex_value_error("1 zb");
    assert_eq!(error.category(), ErrorCategory::LimitExceeded);
    assert_eq!(lex_value_error("1 yib").category(), ErrorCategory::LimitExceeded);
}

#[test]
fn byte_count_overflow() {
    let error = lex_value_error("9223372036854776 kb");
    assert_eq!(error.category(), ErrorCategory::LimitExceeded);
}

#[test]
fn time_delta_suffixes() {
    let token = lex_value("500 ms");
    assert_eq!(token.token_type, TokenType::TimeDelta);
    assert_eq!(
        token.content,
        TokenContent::TimeDelta(TimeDelta::new(TimeUnit::Milliseconds, 500))
    );
    assert_eq!(token.raw_text, "500 ms");
    assert_eq!(
        lex_value("3 days").content,
        TokenContent::TimeDelta(TimeDelta::new(TimeUnit::Days, 3))
    );
    assert_eq!(
        lex_value("2 \u{00B5}s").content,
        TokenContent::TimeDelta(TimeDelta::new(TimeUnit::Microseconds, 2))
    );
    assert_eq!(
        lex_value("-10 minutes").content,
        TokenContent::TimeDelta(TimeDelta::new(TimeUnit::Minutes, -10))
    );
}

#[test]
fn unknown_suffix_is_a_syntax_error() {
    let error = lex_value_error("10 parsecs");
    assert_eq!(error.category(), ErrorCategory::Syntax);
    assert_eq!(error.message(), "Unknown integer suffix.");
}

#[test]
fn bare_space_after_integer_reverts_to_integer() {
    // `10 ,` is an integer followed by a list separator.
    let mut lexer = Lexer::from_text("value: 10 , 20\n");
    let tokens = lexer.tokenize().unwrap();
    let types: Vec<TokenType> = tokens.iter().map(|token| token.token_type).collect();
    assert_eq!(
        types,
        vec![
            TokenType::RegularName,
            TokenType::NameValueSeparator,
            TokenType::Spacing,
            TokenType::Integer,
            TokenType::Spacing,
            TokenType::ValueListSeparator,
            TokenType::Spacing,
            TokenType::Integer,
            TokenType::LineBreak,
            TokenType::EndOfData,
        ]
    );
    assert_eq!(tokens[3].raw_text, "10");
}

#[test]
fn double_separator_is_rejected() {
    assert_eq!(lex_value_error("1''0").category(), ErrorCategory::Syntax);
}

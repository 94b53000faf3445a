use elcl::datetime::{Date, DateTime, Time, TimeOffset};
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

fn date(year: i32, month: u8, day: u8) -> Date {
    Date::new(year, month, day).unwrap()
}

#[test]
fn plain_date() {
    let token = lex_value("2026-01-02");
    assert_eq!(token.token_type, TokenType::Date);
    assert_eq!(token.content, TokenContent::Date(date(2026, 1, 2)));
}

#[test]
fn invalid_dates_are_rejected() {
    assert_eq!(lex_value_error("2026-02-30").category(), ErrorCategory::Syntax);
    assert_eq!(lex_value_error("2025-02-29").category(), ErrorCategory::Syntax);
    assert_eq!(lex_value_error("2026-13-01").category(), ErrorCategory::Syntax);
    assert_eq!(lex_value_error("2026-00-10").category(), ErrorCategory::Syntax);
    assert_eq!(lex_value_error("2026-01-32").category(), ErrorCategory::Syntax);
}

#[test]
fn leap_day_is_accepted() {
    let token = lex_value("2024-02-29");
    assert_eq!(token.content, TokenContent::Date(date(2024, 2, 29)));
}

#[test]
fn local_time() {
    let token = lex_value("10:00:32");
    assert_eq!(token.token_type, TokenType::Time);
    assert_eq!(
        token.content,
        TokenContent::Time(Time::new(10, 0, 32, 0, None).unwrap())
    );
}

#[test]
fn time_without_seconds() {
    let token = lex_value("08:30");
    assert_eq!(
        token.content,
        TokenContent::Time(Time::new(8, 30, 0, 0, None).unwrap())
    );
}

#[test]
fn time_with_utc_suffix() {
    let token = lex_value("23:59:59z");
    assert_eq!(
        token.content,
        TokenContent::Time(Time::new(23, 59, 59, 0, Some(TimeOffset::utc())).unwrap())
    );
}

#[test]
fn t_prefixed_time() {
    let token = lex_value("t10:00");
    assert_eq!(token.token_type, TokenType::Time);
    assert_eq!(
        token.content,
        TokenContent::Time(Time::new(10, 0, 0, 0, None).unwrap())
    );
}

#[test]
fn fraction_is_scaled_to_nanoseconds() {
    let token = lex_value("12:00:00.5");
    assert_eq!(
        token.content,
        TokenContent::Time(Time::new(12, 0, 0, 500_000_000, None).unwrap())
    );
    let token = lex_value("12:00:00.000000001");
    assert_eq!(
        token.content,
        TokenContent::Time(Time::new(12, 0, 0, 1, None).unwrap())
    );
    assert_eq!(
        lex_value_error("12:00:00.0000000001").category(),
        ErrorCategory::Syntax
    );
}

#[test]
fn date_time_with_offset() {
    let token = lex_value("2026-01-02T03:04:05.500+01:30");
    assert_eq!(token.token_type, TokenType::DateTime);
    let offset = TimeOffset {
        negative: false,
        hour: 1,
        minute: 30,
    };
    assert_eq!(
        token.content,
        TokenContent::DateTime(DateTime::new(
            date(2026, 1, 2),
            Time::new(3, 4, 5, 500_000_000, Some(offset)).unwrap(),
        ))
    );
}

#[test]
fn date_time_with_space_separator() {
    let token = lex_value("2026-01-02 03:04");
    assert_eq!(token.token_type, TokenType::DateTime);
}

#[test]
fn date_followed_by_letter_separator_requires_a_time() {
    let error = lex_value_error("2026-01-02T");
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn date_with_space_but_no_time_stays_a_date() {
    // The second value is an integer; the date does not absorb it.
    let mut lexer = Lexer::from_text("value: 2026-01-02 # note\n");
    let tokens = lexer.tokenize().unwrap();
    assert_eq!(tokens[3].token_type, TokenType::Date);
    assert_eq!(tokens[3].raw_text, "2026-01-02");
    assert_eq!(tokens[4].token_type, TokenType::Spacing);
    assert_eq!(tokens[5].token_type, TokenType::Comment);
}

#[test]
fn out_of_range_time_parts() {
    assert_eq!(lex_value_error("24:00").category(), ErrorCategory::Syntax);
    assert_eq!(lex_value_error("12:60").category(), ErrorCategory::Syntax);
    assert_eq!(lex_value_error("12:00:61").category(), ErrorCategory::Syntax);
    assert_eq!(lex_value_error("12:00+24").category(), ErrorCategory::Syntax);
    assert_eq!(lex_value_error("12:00+01:60").category(), ErrorCategory::Syntax);
}

#[test]
fn negative_offset() {
    let token = lex_value("06:15-05");
    let offset = TimeOffset {
        negative: true,
        hour: 5,
        minute: 0,
    };
    assert_eq!(
        token.content,
        TokenContent::Time(Time::new(6, 15, 0, 0, Some(offset)).unwrap())
    );
}

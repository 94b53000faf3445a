use crate::chars::CharClass;
use crate::datetime::{Date, DateTime, Time, TimeOffset};
use crate::decoder::{Decoder, TokenDecoder};
use crate::error::Result;
use crate::lexer::number::{parse_number, NumberBase, NumberSeparators, Sign};
use crate::limits;
use crate::token::{LexerToken, TokenContent};
use crate::token_type::TokenType;

/// Scan a date, optionally followed by a time separated by `T`, `t` or a
/// single space.
pub fn scan_date_or_datetime(decoder: &mut TokenDecoder) -> Result<Option<LexerToken>> {
    if !decoder.character().is_class(CharClass::DecimalDigit) {
        return Ok(None);
    }
    let date_time_transaction = decoder.begin_transaction();
    let Some(date) = scan_date(decoder)? else {
        decoder.rollback(date_time_transaction);
        return Ok(None);
    };
    let separator_transaction = decoder.begin_transaction();
    if decoder.character().is_char(' ') || decoder.character().is_letter_ci('t') {
        let has_letter_separator = decoder.character().is_letter_ci('t');
        decoder.next()?;
        if decoder.character().is_class(CharClass::DecimalDigit) {
            if let Some(time) = scan_time_value(decoder)? {
                decoder.commit(separator_transaction);
                decoder.commit(date_time_transaction);
                return Ok(Some(decoder.create_token(
                    TokenType::DateTime,
                    TokenContent::DateTime(DateTime::new(date, time)),
                )));
            }
        } else if has_letter_separator {
            return Err(
                decoder.syntax_or_unexpected_end("Expected a time value after a time separator.")
            );
        }
    }
    decoder.rollback(separator_transaction); // Only roll back the inner scope.
    decoder.commit(date_time_transaction);
    Ok(Some(
        decoder.create_token(TokenType::Date, TokenContent::Date(date)),
    ))
}

/// Scan a stand-alone time value like `10:00:32z`.
pub fn scan_time(decoder: &mut TokenDecoder) -> Result<Option<LexerToken>> {
    if !decoder.character().is_class(CharClass::TimeStart) {
        return Ok(None);
    }
    let transaction = decoder.begin_transaction();
    let Some(time) = scan_time_value(decoder)? else {
        decoder.rollback(transaction);
        return Ok(None);
    };
    decoder.commit(transaction);
    Ok(Some(
        decoder.create_token(TokenType::Time, TokenContent::Time(time)),
    ))
}

/// Parse a time value.
///
/// Returns `None` when the input does not start with `HH:`; everything
/// after that prefix must be a valid time.
fn scan_time_value(decoder: &mut TokenDecoder) -> Result<Option<Time>> {
    if decoder.character().is_letter_ci('t') {
        decoder.next()?; // Skip an optional T in front of the time.
        if !decoder.character().is_class(CharClass::DecimalDigit) {
            return Ok(None);
        }
    }
    let hour = parse_number(
        decoder,
        NumberBase::Decimal,
        Sign::Positive,
        NumberSeparators::No,
        2,
    )?
    .value;
    if hour < 0 || !decoder.character().is_char(':') {
        return Ok(None);
    }
    // From here on the format must match a time.
    decoder.next()?;
    if hour > 23 {
        return Err(decoder.syntax_error("The hour in a time value must be in the range 00-23."));
    }
    if !decoder.character().is_class(CharClass::DecimalDigit) {
        return Err(decoder
            .syntax_or_unexpected_end("Expected the minute part after the colon for a time value."));
    }
    let minute = parse_number(
        decoder,
        NumberBase::Decimal,
        Sign::Positive,
        NumberSeparators::No,
        2,
    )?
    .value;
    if minute < 0 {
        return Err(decoder.syntax_or_unexpected_end(
            "Expected a two digit minute part after the colon for a time value.",
        ));
    }
    if minute > 59 {
        return Err(decoder.syntax_error("The minute in a time value must be in the range 00-59."));
    }
    let mut second = 0i64;
    let mut fraction = 0i64;
    if decoder.character().is_char(':') {
        decoder.next()?;
        if !decoder.character().is_class(CharClass::DecimalDigit) {
            return Err(decoder.syntax_or_unexpected_end(
                "Expected the second part after the second colon for a time value.",
            ));
        }
        second = parse_number(
            decoder,
            NumberBase::Decimal,
            Sign::Positive,
            NumberSeparators::No,
            2,
        )?
        .value;
        if second < 0 {
            return Err(decoder.syntax_or_unexpected_end(
                "Expected a two digit second part after the second colon for a time value.",
            ));
        }
        if second > 59 {
            return Err(
                decoder.syntax_error("The second in a time value must be in the range 00-59.")
            );
        }
        if decoder.character().is_char('.') {
            decoder.next()?;
            if !decoder.character().is_class(CharClass::DecimalDigit) {
                return Err(decoder.syntax_or_unexpected_end(
                    "Expected the second fraction part after the decimal point.",
                ));
            }
            let result = parse_number(
                decoder,
                NumberBase::Decimal,
                Sign::Positive,
                NumberSeparators::No,
                0,
            )?;
            fraction = result.value;
            if result.digit_count > limits::MAX_TIME_FRACTION_DIGITS {
                return Err(decoder
                    .syntax_error("The fraction part in a time must not exceed nine digits."));
            }
            // Shift the fraction to nanoseconds.
            for _ in 0..limits::MAX_TIME_FRACTION_DIGITS - result.digit_count {
                fraction *= 10;
            }
        }
    }
    // An optional offset follows the time.
    let mut offset = None;
    if decoder.character().is_letter_ci('z') {
        decoder.next()?;
        offset = Some(TimeOffset::utc());
    } else if decoder.character().is_class(CharClass::PlusOrMinus) {
        let negative = decoder.character().is_char('-');
        decoder.next()?;
        if !decoder.character().is_class(CharClass::DecimalDigit) {
            return Err(decoder.syntax_or_unexpected_end("Expected an offset hour."));
        }
        let offset_hour = parse_number(
            decoder,
            NumberBase::Decimal,
            Sign::Positive,
            NumberSeparators::No,
            2,
        )?
        .value;
        if offset_hour < 0 {
            return Err(decoder.syntax_or_unexpected_end("Expected a two digit offset hour."));
        }
        if offset_hour > 23 {
            return Err(decoder.syntax_error("The offset hour must be in the range 00-23."));
        }
        let mut offset_minute = 0i64;
        if decoder.character().is_char(':') {
            decoder.next()?;
            if !decoder.character().is_class(CharClass::DecimalDigit) {
                return Err(decoder.syntax_or_unexpected_end("Expected an offset minute."));
            }
            offset_minute = parse_number(
                decoder,
                NumberBase::Decimal,
                Sign::Positive,
                NumberSeparators::No,
                2,
            )?
            .value;
            if offset_minute < 0 {
                return Err(decoder.syntax_or_unexpected_end("Expected a two digit offset minute."));
            }
            if offset_minute > 59 {
                return Err(decoder.syntax_error("The offset minute must be in the range 00-59."));
            }
        }
        offset = Some(TimeOffset {
            negative,
            hour: offset_hour as u8,
            minute: offset_minute as u8,
        });
    }
    Ok(Some(Time {
        hour: hour as u8,
        minute: minute as u8,
        second: second as u8,
        nanosecond: fraction as u32,
        offset,
    }))
}

/// Parse a date value.
///
/// Returns `None` when the input does not start with `YYYY-`; everything
/// after that prefix must be a valid date.
fn scan_date(decoder: &mut TokenDecoder) -> Result<Option<Date>> {
    let year = parse_number(
        decoder,
        NumberBase::Decimal,
        Sign::Positive,
        NumberSeparators::No,
        4,
    )?
    .value;
    if year < 0 {
        return Ok(None);
    }
    if !decoder.character().is_char('-') {
        return Ok(None);
    }
    decoder.next()?;
    if !decoder.character().is_class(CharClass::DecimalDigit) {
        return Err(
            decoder.syntax_or_unexpected_end("Expected a month part after the date separator.")
        );
    }
    let month = parse_number(
        decoder,
        NumberBase::Decimal,
        Sign::Positive,
        NumberSeparators::No,
        2,
    )?
    .value;
    if month < 0 {
        return Err(decoder.syntax_or_unexpected_end("Expected two digits for the month in a date."));
    }
    if !(1..=12).contains(&month) {
        return Err(decoder.syntax_error("The month in a date value must be in the range 01-12."));
    }
    if !decoder.character().is_char('-') {
        return Err(decoder.syntax_or_unexpected_end("Expected a date separator after the month."));
    }
    decoder.next()?;
    if !decoder.character().is_class(CharClass::DecimalDigit) {
        return Err(decoder.syntax_or_unexpected_end("Expected a day part after the date separator."));
    }
    let day = parse_number(
        decoder,
        NumberBase::Decimal,
        Sign::Positive,
        NumberSeparators::No,
        2,
    )?
    .value;
    if day < 0 {
        return Err(decoder.syntax_or_unexpected_end("Expected two digits for the day in a date."));
    }
    if !(1..=31).contains(&day) {
        return Err(decoder.syntax_error("The day in a date value must be in the range 01-31."));
    }
    match Date::new(year as i32, month as u8, day as u8) {
        Some(date) => Ok(Some(date)),
        None => Err(decoder.syntax_error("This date does not exist.")),
    }
}

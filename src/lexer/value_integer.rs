use crate::chars::CharClass;
use crate::datetime::TimeDelta;
use crate::decoder::{Decoder, TokenDecoder, Transaction};
use crate::error::{ErrorCategory, Result};
use crate::lexer::literal_tables::{integer_suffix, SuffixInfo};
use crate::lexer::number::{parse_number, NumberBase, NumberSeparators, Sign};
use crate::limits;
use crate::token::{LexerToken, TokenContent};
use crate::token_type::TokenType;

/// Scan for a byte-count or time unit that may follow a decimal integer.
fn scan_decimal_suffix(
    decoder: &mut TokenDecoder,
    transaction: Transaction,
    number: i64,
) -> Result<LexerToken> {
    debug_assert!(
        decoder.character().is_char(' ')
            || decoder.character().is_class(CharClass::IntegerSuffixChar)
    );
    let suffix_transaction = decoder.begin_transaction();
    if decoder.character().is_char(' ') {
        decoder.next()?;
        if !decoder.character().is_class(CharClass::IntegerSuffixChar) {
            // The space is a separator, not part of a suffix; accept the
            // integer and let the parser deal with what follows, so the
            // error location is not misleading.
            decoder.rollback(suffix_transaction);
            decoder.commit(transaction);
            return Ok(decoder.create_token(TokenType::Integer, TokenContent::Integer(number)));
        }
    }
    // A letter follows the integer, so it must be a valid suffix.
    let mut identifier = String::new();
    let mut length = 0usize;
    while decoder.character().is_class(CharClass::IntegerSuffixChar) {
        decoder.character().append_lowercase_to(&mut identifier);
        decoder.next()?;
        length += 1;
        if length > limits::MAX_INTEGER_SUFFIX_LENGTH {
            return Err(decoder.syntax_error("Unknown integer suffix."));
        }
    }
    match integer_suffix(&identifier) {
        None => Err(decoder.syntax_error("Unknown integer suffix.")),
        Some(SuffixInfo::ByteCount(factor)) => {
            if factor <= 0 {
                return Err(decoder.error(
                    ErrorCategory::LimitExceeded,
                    "The byte count exceeds a 64bit value.",
                ));
            }
            let value = number.checked_mul(factor).ok_or_else(|| {
                decoder.error(
                    ErrorCategory::LimitExceeded,
                    "The byte count exceeds a 64bit value.",
                )
            })?;
            decoder.commit(suffix_transaction);
            decoder.commit(transaction);
            Ok(decoder.create_token(TokenType::Integer, TokenContent::Integer(value)))
        }
        Some(SuffixInfo::TimeUnit(unit)) => {
            decoder.commit(suffix_transaction);
            decoder.commit(transaction);
            Ok(decoder.create_token(
                TokenType::TimeDelta,
                TokenContent::TimeDelta(TimeDelta::new(unit, number)),
            ))
        }
    }
}

/// Scan an integer value: decimal, `0x…`, `0b…`, optionally signed, with
/// an optional unit suffix turning it into a byte count or time delta.
pub fn scan_integer_or_time_delta(decoder: &mut TokenDecoder) -> Result<Option<LexerToken>> {
    if !decoder.character().is_class(CharClass::NumberStart) {
        return Ok(None);
    }
    let transaction = decoder.begin_transaction();
    let mut sign = Sign::Positive;
    let number: i64;
    if decoder.character().is_class(CharClass::PlusOrMinus) {
        if decoder.character().is_char('-') {
            sign = Sign::Negative;
        }
        decoder.next()?;
        decoder.expect(CharClass::DecimalDigit, "Expected a digit after the sign.")?;
    }
    if decoder.character().is_char('0') {
        decoder.next()?;
        if decoder.character().is_letter_ci('x') {
            decoder.next()?;
            let result = parse_number(
                decoder,
                NumberBase::Hexadecimal,
                sign,
                NumberSeparators::Yes,
                0,
            )?;
            if result.digit_count == 0 {
                return Err(
                    decoder.syntax_error("Hexadecimal number must contain at least one digit.")
                );
            }
            number = result.value;
        } else if decoder.character().is_letter_ci('b') {
            decoder.next()?;
            let result =
                parse_number(decoder, NumberBase::Binary, sign, NumberSeparators::Yes, 0)?;
            if result.digit_count == 0 {
                return Err(decoder.syntax_error("Binary number must contain at least one digit."));
            }
            number = result.value;
        } else if decoder.character().is_class(CharClass::DecimalDigit) {
            return Err(decoder.syntax_error("A leading zero in an integer value is not allowed."));
        } else {
            // A lone zero, followed by something else.
            number = 0;
        }
        if decoder.character().is_char('.') {
            return Err(decoder
                .syntax_error("Hexadecimal or binary floats are not supported by the language."));
        }
    } else {
        number = parse_number(decoder, NumberBase::Decimal, sign, NumberSeparators::Yes, 0)?.value;
    }

    if decoder.character().is_char(' ')
        || decoder.character().is_class(CharClass::IntegerSuffixChar)
    {
        return scan_decimal_suffix(decoder, transaction, number).map(Some);
    }

    if !decoder.character().is_class(CharClass::ValidAfterValue) {
        return Err(decoder.syntax_error("Unexpected characters after integer value."));
    }

    decoder.commit(transaction);
    Ok(Some(
        decoder.create_token(TokenType::Integer, TokenContent::Integer(number)),
    ))
}

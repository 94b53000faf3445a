use crate::chars::CharClass;
use crate::decoder::{Decoder, TokenDecoder, Transaction};
use crate::error::{ErrorCategory, Result};
use crate::limits;
use crate::token::{LexerToken, TokenContent};
use crate::token_type::TokenType;

/// The result of reading a run of decimal digits for a float.
struct DecimalDigits {
    digit_count: usize,
    /// More than one digit with a leading zero.
    zero_prefixed: bool,
}

/// Convert the captured literal, with the leading `+` and digit
/// separators removed, using locale-independent parsing.
fn check_and_convert_float(decoder: &TokenDecoder, captured: &str) -> Result<f64> {
    let mut text: String = captured.chars().filter(|ch| *ch != '\'').collect();
    if text.starts_with('+') {
        text.remove(0);
    }
    let value: f64 = text
        .parse()
        .map_err(|_| decoder.syntax_error("The floating point number is invalid."))?;
    // `parse` saturates to infinity; finite digits must stay finite.
    if value.is_infinite() {
        return Err(decoder.syntax_error("The floating point number is out of range."));
    }
    Ok(value)
}

/// Parse decimal digits with separators, tracking leading zeros.
fn parse_decimal_digits(decoder: &mut TokenDecoder) -> Result<DecimalDigits> {
    let mut digit_count = 0usize;
    let mut zero_prefixed = false;
    while !decoder.character().is_end() {
        if digit_count == 0 && decoder.character().is_char('0') {
            zero_prefixed = true;
        }
        if decoder.character().is_char('\'') {
            if digit_count == 0 {
                return Err(decoder.syntax_error("A number cannot start with a digit separator."));
            }
            decoder.next()?;
            if decoder.character().is_char('\'') {
                return Err(decoder
                    .syntax_error("A number cannot contain two consecutive digit separators."));
            }
            if !decoder.character().is_class(CharClass::DecimalDigit) {
                return Err(decoder
                    .syntax_or_unexpected_end("Expected another digit after the digit separator."));
            }
        }
        if !decoder.character().is_class(CharClass::DecimalDigit) {
            break;
        }
        digit_count += 1;
        decoder.next()?;
    }
    if zero_prefixed && digit_count == 1 {
        zero_prefixed = false; // A single zero digit is not a prefix.
    }
    Ok(DecimalDigits {
        digit_count,
        zero_prefixed,
    })
}

/// Scan `nan` or `inf` with an optional sign.
pub fn scan_literal_float(decoder: &mut TokenDecoder) -> Result<Option<LexerToken>> {
    if !decoder.character().is_class(CharClass::FloatLiteralStart) {
        return Ok(None);
    }
    let transaction = decoder.begin_transaction();
    let mut is_negative = false;
    if decoder.character().is_class(CharClass::PlusOrMinus) {
        if decoder.character().is_char('-') {
            is_negative = true;
        }
        decoder.next()?;
    }
    if decoder.character().is_letter_ci('n') {
        decoder.next()?;
        if decoder.character().is_letter_ci('a') {
            decoder.next()?;
            if decoder.character().is_letter_ci('n') {
                decoder.next()?;
                if !decoder.character().is_class(CharClass::ValidAfterValue) {
                    return Err(
                        decoder.syntax_error("Unexpected characters after 'NaN' literal.")
                    );
                }
                decoder.commit(transaction);
                return Ok(Some(
                    decoder.create_token(TokenType::Float, TokenContent::Float(f64::NAN)),
                ));
            }
        }
        decoder.rollback(transaction);
        return Ok(None);
    }
    if decoder.character().is_letter_ci('i') {
        decoder.next()?;
        if decoder.character().is_letter_ci('n') {
            decoder.next()?;
            if decoder.character().is_letter_ci('f') {
                decoder.next()?;
                if !decoder.character().is_class(CharClass::ValidAfterValue) {
                    return Err(
                        decoder.syntax_error("Unexpected characters after 'inf' literal.")
                    );
                }
                decoder.commit(transaction);
                let value = if is_negative {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                };
                return Ok(Some(
                    decoder.create_token(TokenType::Float, TokenContent::Float(value)),
                ));
            }
        }
    }
    decoder.rollback(transaction);
    Ok(None)
}

/// Scan the exponent after `e`/`E` and produce the float token.
fn scan_float_after_exponent(
    decoder: &mut TokenDecoder,
    transaction: Transaction,
) -> Result<LexerToken> {
    if decoder.character().is_class(CharClass::PlusOrMinus) {
        decoder.next()?;
    }
    if !decoder.character().is_class(CharClass::DecimalDigit) {
        return Err(decoder.syntax_or_unexpected_end("Expected a decimal digit after the exponent."));
    }
    let mut digit_count = 0usize;
    while decoder.character().is_class(CharClass::DecimalDigit) {
        if digit_count >= limits::MAX_FLOAT_EXPONENT_DIGITS {
            return Err(decoder.error(
                ErrorCategory::LimitExceeded,
                "Exponent too long: maximum 6 digits allowed.",
            ));
        }
        decoder.next()?;
        digit_count += 1;
    }
    if !decoder.character().is_class(CharClass::ValidAfterValue) {
        return Err(decoder.syntax_error("Unexpected trailing characters after exponent."));
    }
    let value = check_and_convert_float(decoder, &decoder.captured_string(&transaction))?;
    decoder.commit(transaction);
    Ok(decoder.create_token(TokenType::Float, TokenContent::Float(value)))
}

/// Scan the fraction and optional exponent after the decimal point.
fn scan_float_after_decimal_point(
    decoder: &mut TokenDecoder,
    transaction: Transaction,
    mut total_digits: usize,
) -> Result<LexerToken> {
    if decoder.character().is_class(CharClass::DecimalDigit) {
        let fraction = parse_decimal_digits(decoder)?;
        total_digits += fraction.digit_count;
    } else if total_digits == 0 {
        // No digits before or after the decimal point is not a float.
        if !decoder.character().is_class(CharClass::ValidAfterValue) {
            return Err(decoder.syntax_error("Unexpected character after decimal point."));
        }
        return Err(decoder.syntax_error(
            "Floating-point literal must include digits before or after the decimal point.",
        ));
    }
    if total_digits > limits::MAX_FLOAT_MANTISSA_DIGITS {
        return Err(decoder.error(
            ErrorCategory::LimitExceeded,
            "Literal too long: maximum 20 digits allowed (excluding sign and decimal).",
        ));
    }
    if decoder.character().is_class(CharClass::ExponentStart) {
        decoder.next()?;
        return scan_float_after_exponent(decoder, transaction);
    }
    if !decoder.character().is_class(CharClass::ValidAfterValue) {
        return Err(decoder.syntax_error("Unexpected trailing characters after exponent."));
    }
    let value = check_and_convert_float(decoder, &decoder.captured_string(&transaction))?;
    decoder.commit(transaction);
    Ok(decoder.create_token(TokenType::Float, TokenContent::Float(value)))
}

/// Scan a float without a whole part, like `.1928` or `-.5`.
pub fn scan_float_fraction_only(decoder: &mut TokenDecoder) -> Result<Option<LexerToken>> {
    if !(decoder.character().is_class(CharClass::PlusOrMinus) || decoder.character().is_char('.'))
    {
        return Ok(None);
    }
    let transaction = decoder.begin_transaction();
    if decoder.character().is_class(CharClass::PlusOrMinus) {
        decoder.next()?;
    }
    if !decoder.character().is_char('.') {
        decoder.rollback(transaction);
        return Ok(None);
    }
    decoder.next()?;
    scan_float_after_decimal_point(decoder, transaction, 0).map(Some)
}

/// Scan a float with a whole part, like `283.1293` or `2e10`.
pub fn scan_float_with_whole_part(decoder: &mut TokenDecoder) -> Result<Option<LexerToken>> {
    if !decoder.character().is_class(CharClass::NumberStart) {
        return Ok(None);
    }
    let transaction = decoder.begin_transaction();
    if decoder.character().is_class(CharClass::PlusOrMinus) {
        decoder.next()?;
    }
    if !decoder.character().is_class(CharClass::DecimalDigit) {
        decoder.rollback(transaction);
        return Ok(None);
    }
    let whole = parse_decimal_digits(decoder)?;
    if decoder.character().is_class(CharClass::ExponentStart) {
        decoder.next()?;
        if whole.zero_prefixed {
            return Err(
                decoder.syntax_error("Leading zeros not allowed in floating-point literals.")
            );
        }
        if whole.digit_count > limits::MAX_FLOAT_MANTISSA_DIGITS {
            return Err(decoder.error(
                ErrorCategory::LimitExceeded,
                "Literal too long: maximum 20 digits allowed (excluding sign and decimal).",
            ));
        }
        return scan_float_after_exponent(decoder, transaction).map(Some);
    }
    if !decoder.character().is_char('.') {
        decoder.rollback(transaction);
        return Ok(None);
    }
    if whole.digit_count > 1 && whole.zero_prefixed {
        return Err(decoder.syntax_error("Leading zeros not allowed in floating-point literals."));
    }
    decoder.next()?;
    scan_float_after_decimal_point(decoder, transaction, whole.digit_count).map(Some)
}

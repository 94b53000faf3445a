use crate::chars::DecodedChar;
use crate::decoder::Decoder;
use crate::error::Result;

/// The base of a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberBase {
    Decimal,
    Binary,
    Hexadecimal,
}

impl NumberBase {
    pub fn factor(self) -> u64 {
        match self {
            NumberBase::Decimal => 10,
            NumberBase::Binary => 2,
            NumberBase::Hexadecimal => 16,
        }
    }

    /// The largest number of digits any in-range value can have.
    pub fn maximum_digits(self) -> usize {
        match self {
            NumberBase::Decimal => 19,
            NumberBase::Binary => 64,
            NumberBase::Hexadecimal => 16,
        }
    }

    pub fn is_valid_digit(self, character: &DecodedChar) -> bool {
        match (self, character.as_scalar()) {
            (NumberBase::Decimal, Some(ch)) => ch.is_ascii_digit(),
            (NumberBase::Binary, Some(ch)) => ch == '0' || ch == '1',
            (NumberBase::Hexadecimal, Some(ch)) => ch.is_ascii_hexdigit(),
            _ => false,
        }
    }
}

/// The sign applied to a parsed magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

/// Whether `'` digit separators are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberSeparators {
    Yes,
    No,
}

/// The result of `parse_number`: the signed value and the digit count.
///
/// With a fixed digit count, a value of `-1` signals that too few digits
/// were present, letting the caller backtrack instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedNumber {
    pub value: i64,
    pub digit_count: usize,
}

fn handle_digit_separator<D: Decoder>(
    decoder: &mut D,
    base: NumberBase,
    digit_count: usize,
) -> Result<()> {
    if decoder.character().is_char('\'') {
        if digit_count == 0 {
            return Err(decoder.syntax_error("A number cannot start with a digit separator."));
        }
        decoder.next()?;
        if decoder.character().is_char('\'') {
            return Err(
                decoder.syntax_error("A number cannot contain two consecutive digit separators.")
            );
        }
        if !base.is_valid_digit(decoder.character()) {
            return Err(decoder
                .syntax_or_unexpected_end("Expected another digit after the digit separator."));
        }
    }
    Ok(())
}

/// Parse a run of digits into a signed 64-bit value.
///
/// Overflow in any base raises `LimitExceeded`. A negative sign maps the
/// unsigned magnitude onto `i64`, with `2^63` becoming `i64::MIN`.
pub fn parse_number<D: Decoder>(
    decoder: &mut D,
    base: NumberBase,
    sign: Sign,
    separators: NumberSeparators,
    fixed_digit_count: usize,
) -> Result<ParsedNumber> {
    if decoder.character().is_end() {
        return Err(
            decoder.unexpected_end("Expected a number, but the document ended at this point.")
        );
    }
    let mut value: u64 = 0;
    let mut digit_count: usize = 0;
    while !decoder.character().is_end() {
        if fixed_digit_count > 0 && digit_count >= fixed_digit_count {
            break;
        }
        if digit_count > base.maximum_digits() {
            return Err(decoder.number_limit_exceeded());
        }
        if separators == NumberSeparators::Yes {
            handle_digit_separator(decoder, base, digit_count)?;
        }
        if base.is_valid_digit(decoder.character()) {
            let digit_value = decoder.character().hex_digit_value() as u64;
            value = value
                .checked_mul(base.factor())
                .and_then(|value| value.checked_add(digit_value))
                .ok_or_else(|| decoder.number_limit_exceeded())?;
        } else {
            break;
        }
        digit_count += 1;
        decoder.next()?;
    }
    // The digit run may have been stopped by a delayed error.
    decoder.check_for_error()?;
    if fixed_digit_count > 0 && digit_count < fixed_digit_count {
        return Ok(ParsedNumber {
            value: -1,
            digit_count,
        });
    }
    let value = match sign {
        Sign::Negative => {
            if value > (i64::MAX as u64) + 1 {
                return Err(decoder.number_limit_exceeded());
            }
            if value == (i64::MAX as u64) + 1 {
                i64::MIN
            } else {
                -(value as i64)
            }
        }
        Sign::Positive => {
            if value > i64::MAX as u64 {
                return Err(decoder.number_limit_exceeded());
            }
            value as i64
        }
    };
    Ok(ParsedNumber { value, digit_count })
}

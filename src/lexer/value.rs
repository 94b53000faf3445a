use crate::chars::CharClass;
use crate::decoder::{Decoder, TokenDecoder};
use crate::error::Result;
use crate::lexer::core::{
    expect_and_check_indentation, expect_end_of_line, scan_for_spacing, ExpectMore,
};
use crate::lexer::name::{expect_regular_or_meta_name_token, expect_text_name};
use crate::lexer::text::{expect_multi_line_text, scan_single_line_text};
use crate::lexer::value_bytes::{expect_multi_line_bytes, scan_bytes};
use crate::lexer::value_datetime::{scan_date_or_datetime, scan_time};
use crate::lexer::value_float::{
    scan_float_fraction_only, scan_float_with_whole_part, scan_literal_float,
};
use crate::lexer::value_integer::scan_integer_or_time_delta;
use crate::lexer::value_literal::scan_literal;
use crate::lexer::value_multiline::scan_multi_line_open;
use crate::lexer::TokenSink;
use crate::token::{LexerToken, TokenContent};
use crate::token_type::TokenType;

/// Whether the value starts on the line after the separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NextLine {
    Yes,
    No,
}

/// Scan a complete name and value line, including values continued on
/// following lines.
pub fn expect_name_and_value(decoder: &mut TokenDecoder, tokens: &mut TokenSink) -> Result<()> {
    // A new name/value line resets the indentation contract.
    decoder.clear_indentation_pattern();
    if decoder.character().is_class(CharClass::Letter) || decoder.character().is_char('@') {
        tokens.push_back(expect_regular_or_meta_name_token(decoder)?);
    } else {
        if !decoder.character().is_char('"') {
            return Err(
                decoder.internal_error("Function 'expect_name_and_value' called from the wrong context.")
            );
        }
        tokens.push_back(expect_text_name(decoder)?);
    }
    if let Some(token) = scan_for_spacing(decoder)? {
        tokens.push_back(token);
    }
    decoder.expect_and_next(
        CharClass::NameValueSeparator,
        "Expected a value separator after the name, but got something else.",
    )?;
    tokens.push_back(decoder.create_token(TokenType::NameValueSeparator, TokenContent::None));
    if let Some(token) = scan_for_spacing(decoder)? {
        tokens.push_back(token);
    }
    if decoder.character().is_char('#') || decoder.character().is_class(CharClass::LineBreak) {
        // The value is defined on the next line.
        expect_end_of_line(decoder, tokens, ExpectMore::Yes)?;
        decoder.expect_more("Expected a value on the next line.")?;
        tokens.push_back(expect_and_check_indentation(decoder)?);
        expect_value_or_value_list(decoder, tokens, NextLine::Yes)
    } else if decoder.character().is_end() {
        Err(decoder.unexpected_end("Expected a value after the name separator."))
    } else {
        expect_value_or_value_list(decoder, tokens, NextLine::No)
    }
}

/// Scan a multi-line value list: one `*`-prefixed value line per entry,
/// all aligned on the recorded indentation pattern.
fn expect_multi_line_value_list(decoder: &mut TokenDecoder, tokens: &mut TokenSink) -> Result<()> {
    if !decoder.character().is_char('*') {
        return Err(decoder.internal_error("Called 'expect_multi_line_value_list' in the wrong state."));
    }
    decoder.next()?;
    tokens.push_back(decoder.create_token(TokenType::MultiLineValueListSeparator, TokenContent::None));
    if let Some(token) = scan_for_spacing(decoder)? {
        tokens.push_back(token);
    }
    decoder.expect_more("Unexpected end in multi-line value list. Expected a value.")?;
    expect_single_line_value_or_value_list(decoder, tokens)?;
    // At this point, the cursor is on the following line.
    if decoder.character().is_end() {
        return Ok(()); // A valid end of the document.
    }
    if !decoder.character().is_class(CharClass::Spacing) {
        return Ok(()); // Anything unindented ends the list.
    }
    if !decoder.has_indentation_pattern() {
        return Err(decoder.internal_error("Expected to have an indentation pattern at this point."));
    }
    // Lines starting with spacing potentially continue the value list.
    while decoder.character().is_class(CharClass::Spacing) {
        let transaction = decoder.begin_transaction();
        while decoder.character().is_class(CharClass::Spacing) {
            decoder.next()?;
        }
        if decoder.character().is_class(CharClass::EndOfLineStart) {
            // An empty line is a valid end of the list.
            decoder.rollback(transaction);
            return Ok(());
        }
        if decoder.captured_string(&transaction) != decoder.indentation_pattern() {
            decoder.commit(transaction);
            tokens.push_back(decoder.create_token(TokenType::Indentation, TokenContent::None));
            return Err(decoder.error(
                crate::error::ErrorCategory::Indentation,
                "The indentation pattern does not match the one on the previous line.",
            ));
        }
        if !decoder.character().is_char('*') {
            decoder.commit(transaction);
            tokens.push_back(decoder.create_token(TokenType::Indentation, TokenContent::None));
            return Err(decoder.syntax_error(
                "Expected the asterisk for a value list continuation, but got something else.",
            ));
        }
        decoder.commit(transaction);
        tokens.push_back(decoder.create_token(TokenType::Indentation, TokenContent::None));
        decoder.next()?;
        tokens.push_back(
            decoder.create_token(TokenType::MultiLineValueListSeparator, TokenContent::None),
        );
        if let Some(token) = scan_for_spacing(decoder)? {
            tokens.push_back(token);
        }
        decoder.expect_more("Unexpected end in multi-line value list. Expected a value.")?;
        expect_single_line_value_or_value_list(decoder, tokens)?;
    }
    Ok(())
}

/// Scan a value or value list, including the multi-line forms.
fn expect_value_or_value_list(
    decoder: &mut TokenDecoder,
    tokens: &mut TokenSink,
    next_line: NextLine,
) -> Result<()> {
    if next_line == NextLine::Yes && decoder.character().is_char('*') {
        return expect_multi_line_value_list(decoder, tokens);
    }
    if decoder.character().is_class(CharClass::OpeningBracket) {
        if let Some(open_token) = scan_multi_line_open(decoder)? {
            let open_type = open_token.token_type;
            tokens.push_back(open_token);
            return match open_type {
                TokenType::MultiLineTextOpen
                | TokenType::MultiLineCodeOpen
                | TokenType::MultiLineRegexOpen => expect_multi_line_text(decoder, tokens, open_type),
                TokenType::MultiLineBytesOpen => expect_multi_line_bytes(decoder, tokens),
                _ => Err(decoder.internal_error("Unexpected token type after opening bracket.")),
            };
        }
    }
    expect_single_line_value_or_value_list(decoder, tokens)
}

/// Scan one or more comma-separated single-line values, then the line end.
fn expect_single_line_value_or_value_list(
    decoder: &mut TokenDecoder,
    tokens: &mut TokenSink,
) -> Result<()> {
    tokens.push_back(expect_single_line_value(decoder)?);
    if let Some(token) = scan_for_spacing(decoder)? {
        tokens.push_back(token);
    }
    while decoder.character().is_char(',') {
        decoder.next()?;
        tokens.push_back(decoder.create_token(TokenType::ValueListSeparator, TokenContent::None));
        if let Some(token) = scan_for_spacing(decoder)? {
            tokens.push_back(token);
        }
        if decoder.character().is_class(CharClass::LineBreakOrEnd) {
            return Err(decoder
                .syntax_or_unexpected_end("Expected another value after the value list separator."));
        }
        tokens.push_back(expect_single_line_value(decoder)?);
        if let Some(token) = scan_for_spacing(decoder)? {
            tokens.push_back(token);
        }
    }
    decoder.expect(
        CharClass::EndOfLineStart,
        "Expected end of line or a value separator, but got something else.",
    )?;
    expect_end_of_line(decoder, tokens, ExpectMore::No)
}

/// Scan a single value, trying the value scanners in their contractual
/// order; the first match wins.
fn expect_single_line_value(decoder: &mut TokenDecoder) -> Result<LexerToken> {
    // The ORDER of the scanners is contractual. A `t` is only a literal
    // when it is not followed by a digit, floats shadow integers, and
    // dates shadow both.
    let scanners: &[fn(&mut TokenDecoder) -> Result<Option<LexerToken>>] = &[
        scan_literal_float,
        scan_literal,
        scan_date_or_datetime,
        scan_time,
        scan_float_fraction_only,
        scan_float_with_whole_part,
        scan_integer_or_time_delta,
        scan_single_line_text,
        scan_bytes,
    ];
    for scanner in scanners {
        if let Some(token) = scanner(decoder)? {
            return Ok(token);
        }
    }
    Err(decoder.syntax_or_unexpected_end("Expected a value, but got something else."))
}

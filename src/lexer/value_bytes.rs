use crate::chars::CharClass;
use crate::decoder::{Decoder, TokenDecoder};
use crate::error::{ErrorCategory, Result};
use crate::lexer::core::{
    expect_and_check_indentation, expect_end_of_line, scan_format_or_language_identifier,
    skip_spacing, ExpectMore,
};
use crate::lexer::value_multiline::{is_at_multi_line_end, scan_multi_line_close};
use crate::lexer::TokenSink;
use crate::token::{LexerToken, TokenContent};
use crate::token_type::TokenType;

/// Scan the `format:` prefix of a single-line bytes value. Without a
/// colon the content is hex bytes.
fn scan_single_line_format_identifier(decoder: &mut TokenDecoder) -> Result<String> {
    let prefix_transaction = decoder.begin_transaction();
    let format_identifier = scan_format_or_language_identifier(decoder, false)?;
    if !format_identifier.is_empty() && decoder.character().is_char(':') {
        decoder.next()?; // After the colon, the actual bytes start.
        decoder.commit(prefix_transaction);
        return Ok(format_identifier);
    }
    decoder.rollback(prefix_transaction);
    Ok("hex".to_string())
}

/// Scan a single-line bytes value like `<c8 14>` or `<hex: c8 14>`.
pub fn scan_bytes(decoder: &mut TokenDecoder) -> Result<Option<LexerToken>> {
    if !decoder.character().is_char('<') {
        return Ok(None);
    }
    decoder.next()?;
    decoder.expect_more_in_line("Unexpected end in bytes value.")?;
    let format_identifier = scan_single_line_format_identifier(decoder)?;
    if format_identifier != "hex" {
        return Err(decoder.error(ErrorCategory::Unsupported, "Unknown bytes-data format."));
    }
    decoder.expect_more_in_line("Unexpected end in bytes value.")?;
    let mut bytes = Vec::new();
    while !decoder.character().is_char('>') {
        decoder.expect_more_in_line("Unexpected end in bytes value.")?;
        skip_spacing(decoder)?;
        if decoder.character().is_char('>') {
            break;
        }
        decoder.expect_more_in_line("Unexpected end in bytes value.")?;
        if !decoder.character().is_class(CharClass::HexDigit) {
            return Err(
                decoder.syntax_error("Expected first hex digit of a byte, got something else.")
            );
        }
        let mut value = (decoder.character().hex_digit_value() as u8) << 4;
        decoder.next()?;
        decoder.expect_more_in_line("Unexpected end in bytes value.")?;
        if !decoder.character().is_class(CharClass::HexDigit) {
            return Err(
                decoder.syntax_error("Expected second hex digit of a byte, got something else.")
            );
        }
        value |= decoder.character().hex_digit_value() as u8;
        decoder.next()?;
        bytes.push(value);
    }
    decoder.next()?;
    Ok(Some(
        decoder.create_token(TokenType::Bytes, TokenContent::Bytes(bytes)),
    ))
}

/// Parse one content line of a multi-line bytes block: hex pairs
/// separated by spacing.
fn parse_multi_line_bytes_hex_line(
    decoder: &mut TokenDecoder,
    tokens: &mut TokenSink,
) -> Result<()> {
    if !is_at_multi_line_end(decoder, TokenType::MultiLineBytes) {
        let mut decoded_bytes = Vec::new();
        while !is_at_multi_line_end(decoder, TokenType::MultiLineBytes) {
            skip_spacing(decoder)?;
            if is_at_multi_line_end(decoder, TokenType::MultiLineBytes) {
                break;
            }
            if !decoder.character().is_class(CharClass::HexDigit) {
                return Err(
                    decoder.syntax_error("Expected first hex digit of a byte, got something else.")
                );
            }
            let mut value = (decoder.character().hex_digit_value() as u8) << 4;
            decoder.next()?;
            if is_at_multi_line_end(decoder, TokenType::MultiLineBytes) {
                return Err(decoder
                    .syntax_error("Expected second hex digit of a byte, not the end of the line."));
            }
            if !decoder.character().is_class(CharClass::HexDigit) {
                return Err(decoder
                    .syntax_error("Expected second hex digit of a byte, got something else."));
            }
            value |= decoder.character().hex_digit_value() as u8;
            decoder.next()?;
            decoded_bytes.push(value);
        }
        tokens.push_back(
            decoder.create_token(TokenType::MultiLineBytes, TokenContent::Bytes(decoded_bytes)),
        );
    }
    // The line may end with spacing and a comment.
    expect_end_of_line(decoder, tokens, ExpectMore::No)?;
    decoder.expect_more("Unexpected end in a multi-line bytes-data.")?;
    Ok(())
}

/// Process a multi-line bytes block after the opening `<<<` token.
pub fn expect_multi_line_bytes(decoder: &mut TokenDecoder, tokens: &mut TokenSink) -> Result<()> {
    decoder.expect_more("Unexpected end in bytes value.")?;
    let format_identifier = scan_format_or_language_identifier(decoder, true)?;
    if !format_identifier.is_empty() {
        if !decoder.character().is_class(CharClass::EndOfLineStart) {
            return Err(
                decoder.syntax_error("Unexpected characters in bytes-data format identifier.")
            );
        }
        if format_identifier != "hex" {
            return Err(decoder.error(ErrorCategory::Unsupported, "Unknown bytes-data format."));
        }
        tokens.push_back(decoder.create_token(
            TokenType::MultiLineBytesFormat,
            TokenContent::Text(format_identifier),
        ));
    }
    if !decoder.character().is_class(CharClass::EndOfLineStart) {
        return Err(decoder.syntax_error("Unexpected characters in bytes-data format identifier."));
    }
    super::value_multiline::expect_multi_line_after_open(decoder, tokens)?;
    // Process the bytes data line by line; each loop iteration starts on
    // an indented continuation line.
    while !decoder.character().is_end() {
        if let Some(close_token) = scan_multi_line_close(decoder, TokenType::MultiLineBytesOpen)? {
            tokens.push_back(close_token);
            return Ok(());
        }
        parse_multi_line_bytes_hex_line(decoder, tokens)?;
        if decoder.character().is_class(CharClass::Spacing) {
            tokens.push_back(expect_and_check_indentation(decoder)?);
            decoder.expect_more("Unexpected end in multi-line byte-data.")?;
        } else if !decoder.character().is_class(CharClass::LineBreak) {
            return Err(decoder.syntax_error("Missing indentation in multi-line byte-data."));
        }
    }
    Err(decoder.unexpected_end("Unexpected end in multi-line byte-data."))
}

use crate::chars::CharClass;
use crate::decoder::{Decoder, TokenDecoder};
use crate::error::{ErrorCategory, Result};
use crate::lexer::TokenSink;
use crate::limits;
use crate::token::TokenContent;
use crate::token_type::TokenType;

/// Whether the document must continue after the line end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectMore {
    Yes,
    No,
}

/// Consume optional trailing spacing, an optional comment and the line
/// break, emitting tokens for the non-empty parts.
pub fn expect_end_of_line(
    decoder: &mut TokenDecoder,
    tokens: &mut TokenSink,
    expect_more: ExpectMore,
) -> Result<()> {
    let end_message = "Expected the data to be continued on the next line.";
    if decoder.character().is_end() {
        if expect_more == ExpectMore::Yes {
            return Err(decoder.unexpected_end(end_message));
        }
        return Ok(()); // The line end can align with the end of the data.
    }
    if let Some(token) = scan_for_spacing(decoder)? {
        tokens.push_back(token);
    }
    if decoder.character().is_end() {
        if expect_more == ExpectMore::Yes {
            return Err(decoder.unexpected_end(end_message));
        }
        return Ok(());
    }
    if decoder.character().is_char('#') {
        tokens.push_back(expect_comment(decoder)?);
    }
    if decoder.character().is_end() {
        if expect_more == ExpectMore::Yes {
            return Err(decoder.unexpected_end(end_message));
        }
        return Ok(());
    }
    decoder.expect(
        CharClass::LineBreak,
        "Expected the end of the line, but got something else.",
    )?;
    tokens.push_back(expect_line_break(decoder)?);
    Ok(())
}

/// Consume `\n` or `\r\n` and create the line-break token.
pub fn expect_line_break(decoder: &mut TokenDecoder) -> Result<crate::token::LexerToken> {
    if decoder.character().is_char('\r') {
        decoder.next()?;
        decoder.expect('\n', "Expected a newline after a carriage return.")?;
    } else {
        decoder.expect('\n', "Expected a carriage return or newline.")?;
    }
    decoder.create_end_of_line_token()
}

pub fn scan_for_spacing(decoder: &mut TokenDecoder) -> Result<Option<crate::token::LexerToken>> {
    if decoder.character().is_class(CharClass::Spacing) {
        return Ok(Some(expect_spacing(decoder)?));
    }
    Ok(None)
}

pub fn expect_spacing(decoder: &mut TokenDecoder) -> Result<crate::token::LexerToken> {
    decoder.expect(CharClass::Spacing, "Expected spacing, but got something else.")?;
    while decoder.character().is_class(CharClass::Spacing) {
        decoder.next()?;
    }
    Ok(decoder.create_token(TokenType::Spacing, TokenContent::None))
}

pub fn skip_spacing<D: Decoder>(decoder: &mut D) -> Result<()> {
    while decoder.character().is_class(CharClass::Spacing) {
        decoder.next()?;
    }
    decoder.check_for_error()
}

/// Check the continuation-line indentation against the recorded pattern,
/// or record the pattern from the current line.
pub fn expect_and_check_indentation(decoder: &mut TokenDecoder) -> Result<crate::token::LexerToken> {
    decoder.expect(CharClass::Spacing, "Expected indentation, but got something else.")?;
    if decoder.has_indentation_pattern() {
        let pattern: Vec<char> = decoder.indentation_pattern().chars().collect();
        for pattern_char in pattern {
            if !decoder.character().is_char(pattern_char) {
                return Err(decoder.error(
                    ErrorCategory::Indentation,
                    "The indentation pattern on a continued line does not match the previous one.",
                ));
            }
            decoder.next()?;
        }
        return Ok(decoder.create_token(TokenType::Indentation, TokenContent::None));
    }
    while decoder.character().is_class(CharClass::Spacing) {
        decoder.next()?;
    }
    decoder.check_for_error()?;
    let token = decoder.create_token(TokenType::Indentation, TokenContent::None);
    decoder.set_indentation_pattern(token.raw_text.clone());
    Ok(token)
}

pub fn expect_comment(decoder: &mut TokenDecoder) -> Result<crate::token::LexerToken> {
    decoder.expect_and_next('#', "Expected end of line or a comment, but got something else.")?;
    while !decoder.character().is_class(CharClass::LineBreakOrEnd) {
        decoder.check_for_error()?;
        decoder.next()?;
    }
    decoder.check_for_error()?;
    Ok(decoder.create_token(TokenType::Comment, TokenContent::None))
}

/// Scan a lowercase format or language identifier after a multi-line
/// opening sequence. Returns an empty string when no identifier starts
/// at the cursor, or when it is too long and `fail_on_length` is off.
pub fn scan_format_or_language_identifier(
    decoder: &mut TokenDecoder,
    fail_on_length: bool,
) -> Result<String> {
    if !decoder.character().is_class(CharClass::Letter) {
        return Ok(String::new());
    }
    let mut identifier = String::new();
    decoder.character().append_lowercase_to(&mut identifier);
    decoder.next()?;
    while decoder.character().is_class(CharClass::FormatIdentifierChar) {
        if identifier.len() >= limits::MAX_FORMAT_IDENTIFIER_LENGTH {
            if fail_on_length {
                return Err(decoder.limit_exceeded("Language or format identifier too long."));
            }
            return Ok(String::new());
        }
        decoder.character().append_lowercase_to(&mut identifier);
        decoder.next()?;
    }
    if decoder.character().is_end() {
        return Err(decoder.unexpected_end("Unexpected end after format or language identifier."));
    }
    Ok(identifier)
}

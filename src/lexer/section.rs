use crate::chars::CharClass;
use crate::decoder::{Decoder, TokenDecoder};
use crate::error::Result;
use crate::lexer::core::{expect_end_of_line, scan_for_spacing, ExpectMore};
use crate::lexer::name::{expect_regular_or_meta_name_token, expect_text_name};
use crate::lexer::TokenSink;
use crate::token::TokenContent;
use crate::token_type::TokenType;

/// Scan a section header: `[…]` for maps, `---[…]---` decorations and
/// `…*[…]` / `[…]*` for list sections.
pub fn expect_section(decoder: &mut TokenDecoder, tokens: &mut TokenSink) -> Result<()> {
    let mut is_list_section = false;
    while decoder.character().is_char('-') {
        decoder.next()?;
    }
    if decoder.character().is_char('*') {
        decoder.next()?;
        is_list_section = true;
    }
    decoder.expect_and_next('[', "Expected an opening square bracket, but got something else.")?;
    let open_type = if is_list_section {
        TokenType::SectionListOpen
    } else {
        TokenType::SectionMapOpen
    };
    tokens.push_back(decoder.create_token(open_type, TokenContent::None));
    // Spacing inside the section brackets is allowed.
    if let Some(token) = scan_for_spacing(decoder)? {
        tokens.push_back(token);
    }
    // Relative paths start with a path separator.
    if decoder.character().is_char('.') {
        decoder.next()?;
        tokens.push_back(decoder.create_token(TokenType::NamePathSeparator, TokenContent::None));
        if let Some(token) = scan_for_spacing(decoder)? {
            tokens.push_back(token);
        }
    }
    // Read as many names as there are; the parser checks the structure.
    while decoder.character().is_class(CharClass::SectionNameStart) {
        if decoder.character().is_char('"') {
            tokens.push_back(expect_text_name(decoder)?);
        } else {
            tokens.push_back(expect_regular_or_meta_name_token(decoder)?);
        }
        if let Some(token) = scan_for_spacing(decoder)? {
            tokens.push_back(token);
        }
        if !decoder.character().is_char('.') {
            break;
        }
        decoder.next()?;
        tokens.push_back(decoder.create_token(TokenType::NamePathSeparator, TokenContent::None));
        if let Some(token) = scan_for_spacing(decoder)? {
            tokens.push_back(token);
        }
    }
    decoder.expect_and_next(']', "Expected a closing square bracket, but got something else.")?;
    // Decorative dashes may surround the asterisk; only list sections
    // accept an asterisk at all.
    while decoder.character().is_char('-') {
        decoder.next()?;
    }
    if decoder.character().is_char('*') {
        if !is_list_section {
            return Err(decoder.syntax_error(
                "A map section cannot have an asterisk after the closing square bracket.",
            ));
        }
        decoder.next()?;
        while decoder.character().is_char('-') {
            decoder.next()?;
        }
    }
    let close_type = if is_list_section {
        TokenType::SectionListClose
    } else {
        TokenType::SectionMapClose
    };
    tokens.push_back(decoder.create_token(close_type, TokenContent::None));
    decoder.expect(
        CharClass::EndOfLineStart,
        "Expected end of line after section, but got something else.",
    )?;
    expect_end_of_line(decoder, tokens, ExpectMore::No)
}

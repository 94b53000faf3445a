use crate::chars::CharClass;
use crate::decoder::{Decoder, TokenDecoder};
use crate::error::Result;
use crate::lexer::core::{expect_and_check_indentation, expect_end_of_line, ExpectMore};
use crate::lexer::TokenSink;
use crate::token::{LexerToken, TokenContent};
use crate::token_type::TokenType;

/// Scan a run of exactly three identical characters, producing the open
/// or close token of a multi-line block. Fewer than three roll back.
fn scan_repeating_characters(
    decoder: &mut TokenDecoder,
    expected: char,
    token_type: TokenType,
) -> Result<Option<LexerToken>> {
    if !decoder.character().is_char(expected) {
        return Ok(None);
    }
    let mut count = 0;
    let transaction = decoder.begin_transaction();
    while decoder.character().is_char(expected) {
        decoder.next()?;
        count += 1;
        if count == 3 {
            decoder.commit(transaction);
            return Ok(Some(decoder.create_token(token_type, TokenContent::None)));
        }
    }
    decoder.rollback(transaction);
    Ok(None)
}

/// Scan for `"""`, ` ``` `, `///` or `<<<` at the cursor.
pub fn scan_multi_line_open(decoder: &mut TokenDecoder) -> Result<Option<LexerToken>> {
    let Some(ch) = decoder.character().as_scalar() else {
        return Ok(None);
    };
    let Some(token_type) = TokenType::from_multi_line_open(ch) else {
        return Ok(None);
    };
    scan_repeating_characters(decoder, ch, token_type)
}

/// Scan for the closing triple matching the given open token.
pub fn scan_multi_line_close(
    decoder: &mut TokenDecoder,
    open_token_type: TokenType,
) -> Result<Option<LexerToken>> {
    let (Some(expected), Some(close_type)) = (
        open_token_type.close_character(),
        open_token_type.close_for_open(),
    ) else {
        return Err(decoder.internal_error("Unexpected open token type."));
    };
    scan_repeating_characters(decoder, expected, close_type)
}

/// Process the rest of the line after a multi-line opening sequence and
/// position the cursor on the first continuation line.
pub fn expect_multi_line_after_open(
    decoder: &mut TokenDecoder,
    tokens: &mut TokenSink,
) -> Result<()> {
    expect_end_of_line(decoder, tokens, ExpectMore::Yes)?;
    decoder.expect_more("Unexpected end in multi-line expression.")?;
    if decoder.character().is_class(CharClass::Spacing) {
        tokens.push_back(expect_and_check_indentation(decoder)?);
    } else if !decoder.character().is_class(CharClass::LineBreak) {
        return Err(decoder.syntax_error("Expected continued text or data, but got something else."));
    }
    // An empty line just after the opening sequence is passed down to the
    // content loop unconsumed.
    Ok(())
}

/// Whether the cursor sits at the end of a content line. Comments are
/// recognised in regex and bytes blocks only.
pub fn is_at_multi_line_end(decoder: &TokenDecoder, content_type: TokenType) -> bool {
    let comments_allowed = matches!(
        content_type,
        TokenType::MultiLineRegex | TokenType::MultiLineBytes
    );
    decoder.character().is_class(CharClass::LineBreakOrEnd)
        || (comments_allowed && decoder.character().is_char('#'))
}

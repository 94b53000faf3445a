use crate::chars::CharClass;
use crate::decoder::{Decoder, TokenDecoder};
use crate::error::Result;
use crate::lexer::text::parse_text;
use crate::limits;
use crate::token::{LexerToken, TokenContent};
use crate::token_type::TokenType;

/// The characters that may end a regular name, depending on the context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptedNameEnd {
    /// Inside a name path: `.`, `[` or the end of the data.
    NamePath,
    /// Inside a section or name/value line: `:`, `=`, `.` or `]`.
    Section,
}

/// A scanned regular or meta name in normalised form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameResult {
    pub is_meta: bool,
    pub name: String,
}

/// Scan a regular or meta name and normalise it: ASCII lowercase, single
/// spaces become underscores. The cursor ends on the first character after
/// the name.
pub fn expect_regular_or_meta_name<D: Decoder>(
    decoder: &mut D,
    accepted_end: AcceptedNameEnd,
) -> Result<NameResult> {
    let mut is_meta = false;
    let name_transaction = decoder.begin_transaction();
    if decoder.character().is_char('@') {
        decoder.next()?;
        is_meta = true;
        decoder.expect(
            CharClass::Letter,
            "Unexpected character in meta name after at-character.",
        )?;
    }
    // Read one character past the limit, so over-long names are detected.
    while decoder.captured_size(&name_transaction) <= limits::MAX_NAME_LENGTH {
        if decoder.character().is_char(' ') {
            // The name only continues when a letter or digit follows the
            // space; anything else ends the name and returns the space.
            let space_transaction = decoder.begin_transaction();
            decoder.next()?;
            if !decoder.character().is_class(CharClass::LetterOrDigit) {
                decoder.rollback(space_transaction);
                break;
            }
            decoder.commit(space_transaction);
        } else if decoder.character().is_char('\t') {
            break;
        } else if decoder.character().is_char('_') {
            decoder.next()?;
            if decoder.captured_size(&name_transaction) > limits::MAX_NAME_LENGTH {
                break;
            }
            if !decoder.character().is_class(CharClass::LetterOrDigit) {
                if decoder.character().is_class(CharClass::LineBreakOrEnd)
                    || decoder.character().is_class(CharClass::NameValueSeparator)
                    || decoder.character().is_class(CharClass::Spacing)
                {
                    return Err(decoder.syntax_error("A name must not end with an underscore."));
                }
                if decoder.character().is_char('_') {
                    return Err(decoder.syntax_error(
                        "A name must not contain two or more subsequent word separators.",
                    ));
                }
                return Err(decoder.syntax_error("Unexpected character in this name."));
            }
        } else {
            match accepted_end {
                AcceptedNameEnd::NamePath => {
                    if decoder.character().is_end()
                        || decoder.character().is_char('.')
                        || decoder.character().is_char('[')
                    {
                        break;
                    }
                }
                AcceptedNameEnd::Section => {
                    if decoder.character().is_class(CharClass::NameValueSeparator)
                        || decoder.character().is_char('.')
                        || decoder.character().is_char(']')
                    {
                        break;
                    }
                }
            }
        }
        decoder.expect(
            CharClass::LetterOrDigit,
            "Unexpected character following a regular name.",
        )?;
        while decoder.character().is_class(CharClass::LetterOrDigit) {
            decoder.next()?;
            if decoder.captured_size(&name_transaction) > limits::MAX_NAME_LENGTH {
                break;
            }
        }
    }
    if decoder.captured_size(&name_transaction) > limits::MAX_NAME_LENGTH {
        return Err(decoder.limit_exceeded("A name must not exceed 100 characters."));
    }
    let name = decoder.captured_name(&name_transaction);
    decoder.commit(name_transaction);
    Ok(NameResult { is_meta, name })
}

pub fn expect_regular_or_meta_name_token(decoder: &mut TokenDecoder) -> Result<LexerToken> {
    let result = expect_regular_or_meta_name(decoder, AcceptedNameEnd::Section)?;
    let token_type = if result.is_meta {
        TokenType::MetaName
    } else {
        TokenType::RegularName
    };
    Ok(decoder.create_token(token_type, TokenContent::Text(result.name)))
}

/// Scan a double-quoted text name. The name must be single-line and not
/// empty.
pub fn expect_text_name(decoder: &mut TokenDecoder) -> Result<LexerToken> {
    debug_assert!(decoder.character().is_char('"'));
    let mut name = String::new();
    decoder.next()?;
    parse_text(decoder, &mut name)?;
    if name.is_empty() {
        if decoder.character().is_char('"') {
            return Err(decoder.syntax_error("A text name must not be a multi-line text."));
        }
        return Err(decoder.syntax_error("A text name must not be empty."));
    }
    Ok(decoder.create_token(TokenType::TextName, TokenContent::Text(name)))
}

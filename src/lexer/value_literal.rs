use crate::chars::CharClass;
use crate::decoder::{Decoder, TokenDecoder};
use crate::error::Result;
use crate::lexer::literal_tables::boolean_literal;
use crate::limits;
use crate::token::{LexerToken, TokenContent};
use crate::token_type::TokenType;

/// Scan a boolean keyword like `true`, `yes`, `enabled` or `off`.
///
/// A single `t` followed by a digit backtracks, as it is most likely a
/// T-prefixed time value.
pub fn scan_literal(decoder: &mut TokenDecoder) -> Result<Option<LexerToken>> {
    if !decoder.character().is_class(CharClass::Letter) {
        return Ok(None);
    }
    let transaction = decoder.begin_transaction();
    while decoder.character().is_class(CharClass::Letter) {
        decoder.next()?;
        if decoder.captured_size(&transaction) > limits::MAX_LITERAL_LENGTH {
            return Err(decoder.syntax_error("Unknown value literal."));
        }
    }
    let identifier = decoder.captured_lowercase(&transaction);
    if identifier == "t" && decoder.character().is_class(CharClass::DecimalDigit) {
        decoder.rollback(transaction);
        return Ok(None);
    }
    if !decoder.character().is_class(CharClass::ValidAfterValue) {
        return Err(decoder.syntax_error("Unexpected character after literal."));
    }
    let Some(value) = boolean_literal(&identifier) else {
        return Err(decoder.syntax_error("Unknown value literal."));
    };
    decoder.commit(transaction);
    Ok(Some(
        decoder.create_token(TokenType::Boolean, TokenContent::Boolean(value)),
    ))
}

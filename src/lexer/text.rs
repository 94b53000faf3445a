use crate::chars::CharClass;
use crate::decoder::{Decoder, TokenDecoder};
use crate::error::Result;
use crate::lexer::core::{
    expect_and_check_indentation, expect_end_of_line, scan_format_or_language_identifier,
    ExpectMore,
};
use crate::lexer::number::{parse_number, NumberBase, NumberSeparators, Sign};
use crate::lexer::value_multiline::{
    expect_multi_line_after_open, is_at_multi_line_end, scan_multi_line_close,
};
use crate::lexer::TokenSink;
use crate::token::{LexerToken, TokenContent};
use crate::token_type::TokenType;

/// Decodes one escape sequence after the escape character was consumed.
pub type EscapeFn<D> = fn(&mut D, &mut String) -> Result<()>;

/// Parse a single-line string up to the terminator, decoding escape
/// sequences through `escape`.
pub fn parse_string<D: Decoder>(
    decoder: &mut D,
    target: &mut String,
    terminator: char,
    escape_char: Option<char>,
    escape: Option<EscapeFn<D>>,
) -> Result<()> {
    while !decoder.character().is_end() {
        decoder.check_for_error()?;
        if decoder.character().is_class(CharClass::LineBreak) {
            return Err(decoder.syntax_error("Unexpected line break in text or code-block."));
        }
        if decoder.character().is_char(terminator) {
            decoder.next()?;
            return Ok(());
        }
        match (escape_char, escape) {
            (Some(escape_char), Some(escape)) if decoder.character().is_char(escape_char) => {
                decoder.next()?;
                decoder.expect_more("Unexpected end in an escape sequence.")?;
                escape(decoder, target)?;
            }
            _ => {
                decoder.character().append_to(target);
                decoder.next()?;
            }
        }
    }
    Err(decoder.unexpected_end("Unexpected end of data."))
}

pub fn parse_text<D: Decoder>(decoder: &mut D, target: &mut String) -> Result<()> {
    parse_string(decoder, target, '"', Some('\\'), Some(parse_text_escape_sequence))
}

pub fn parse_regular_expression<D: Decoder>(decoder: &mut D, target: &mut String) -> Result<()> {
    parse_string(
        decoder,
        target,
        '/',
        Some('\\'),
        Some(parse_regular_expression_escape_sequence),
    )
}

pub fn parse_code<D: Decoder>(decoder: &mut D, target: &mut String) -> Result<()> {
    parse_string(decoder, target, '`', None, None)
}

/// Parse the Unicode escape sequence, after `\u`.
fn parse_unicode_escape_sequence<D: Decoder>(decoder: &mut D, target: &mut String) -> Result<()> {
    decoder.expect_more("Unexpected end in a Unicode escape sequence.")?;
    let code_point;
    if decoder.character().is_char('{') {
        // Braced form with one to eight hex digits.
        decoder.next()?;
        decoder.expect(
            CharClass::HexDigit,
            "Expected a hex digit after the opening bracket.",
        )?;
        let number = parse_number(
            decoder,
            NumberBase::Hexadecimal,
            Sign::Positive,
            NumberSeparators::No,
            0,
        )?;
        decoder.expect_more("Unexpected end in a Unicode escape sequence.")?;
        if number.digit_count > 8 {
            return Err(decoder.syntax_error("Hex escape sequence is too long."));
        }
        decoder.expect_and_next('}', "Expected a closing bracket after the hexadecimal number.")?;
        code_point = number.value;
    } else if decoder.character().is_class(CharClass::HexDigit) {
        // Fixed form with exactly four hex digits.
        let number = parse_number(
            decoder,
            NumberBase::Hexadecimal,
            Sign::Positive,
            NumberSeparators::No,
            4,
        )?;
        decoder.expect_more("Unexpected end in a Unicode escape sequence.")?;
        if number.value < 0 {
            return Err(decoder.syntax_error("Hex escape sequence requires four digits."));
        }
        code_point = number.value;
    } else {
        return Err(decoder.syntax_error("Expected a hex digit or an opening bracket."));
    }
    let scalar = u32::try_from(code_point)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| decoder.syntax_error("Invalid unicode value in escape sequence."))?;
    target.push(scalar);
    Ok(())
}

pub fn parse_text_escape_sequence<D: Decoder>(decoder: &mut D, target: &mut String) -> Result<()> {
    // Do end checks before calling `next()`, because of open transactions.
    decoder.expect_more("Unexpected end in an escape sequence.")?;
    if decoder.character().is_class(CharClass::LineBreak) {
        return Err(decoder.syntax_error("Unexpected line break in escape sequence."));
    }
    let escaped = *decoder.character();
    decoder.check_for_error()?;
    decoder.next()?;
    match escaped.as_scalar() {
        Some('\\') => target.push('\\'),
        Some('"') => target.push('"'),
        Some('$') => target.push('$'),
        Some('t') | Some('T') => target.push('\t'),
        Some('n') | Some('N') => target.push('\n'),
        Some('r') | Some('R') => target.push('\r'),
        Some('u') | Some('U') => parse_unicode_escape_sequence(decoder, target)?,
        _ => return Err(decoder.syntax_error("Unexpected character in escape sequence.")),
    }
    Ok(())
}

/// The regular expression escape is a pass-through: `\/` becomes `/`,
/// everything else stays a backslash followed by the character.
pub fn parse_regular_expression_escape_sequence<D: Decoder>(
    decoder: &mut D,
    target: &mut String,
) -> Result<()> {
    if decoder.character().is_char('/') {
        target.push('/');
    } else if !decoder.character().is_error() {
        target.push('\\');
        decoder.character().append_to(target);
    } else {
        // Surfaces the pending encoding or control-character error.
        return Err(decoder.syntax_error("Unexpected character in escape sequence."));
    }
    decoder.next()
}

/// Scan a single-line `"…"` text, `` `…` `` code span or `/…/` regex.
pub fn scan_single_line_text(decoder: &mut TokenDecoder) -> Result<Option<LexerToken>> {
    let terminator = match decoder.character().as_scalar() {
        Some(ch @ ('"' | '`' | '/')) => ch,
        _ => return Ok(None),
    };
    decoder.next()?;
    let mut text = String::new();
    let token = match terminator {
        '"' => {
            parse_text(decoder, &mut text)?;
            decoder.create_token(TokenType::Text, TokenContent::Text(text))
        }
        '/' => {
            parse_regular_expression(decoder, &mut text)?;
            decoder.create_token(TokenType::RegEx, TokenContent::Text(text))
        }
        _ => {
            parse_code(decoder, &mut text)?;
            decoder.create_token(TokenType::Code, TokenContent::Text(text))
        }
    };
    Ok(Some(token))
}

/// Parse one content line of a multi-line text, code or regex block.
///
/// Trailing spacing is stripped from the content through a rollback
/// scope, so it ends up in the following spacing token instead.
pub fn parse_multi_line_string(
    decoder: &mut TokenDecoder,
    tokens: &mut TokenSink,
    escape_char: Option<char>,
    escape: Option<EscapeFn<TokenDecoder>>,
    token_type: TokenType,
) -> Result<()> {
    if !is_at_multi_line_end(decoder, token_type) {
        let mut decoded = String::new();
        while !is_at_multi_line_end(decoder, token_type) {
            // Consume anything that is not spacing or the end of the line.
            while !decoder.character().is_class(CharClass::Spacing)
                && !decoder.character().is_class(CharClass::LineBreakOrEnd)
            {
                decoder.check_for_error()?;
                match (escape_char, escape) {
                    (Some(escape_char), Some(escape))
                        if decoder.character().is_char(escape_char) =>
                    {
                        decoder.next()?;
                        escape(decoder, &mut decoded)?;
                    }
                    _ => {
                        decoder.character().append_to(&mut decoded);
                        decoder.next()?;
                    }
                }
            }
            if decoder.character().is_class(CharClass::LineBreakOrEnd) {
                break;
            }
            // Spacing: only keep it when more content follows on the line.
            let trailing_transaction = decoder.begin_transaction();
            while decoder.character().is_class(CharClass::Spacing) {
                decoder.next()?;
            }
            if is_at_multi_line_end(decoder, token_type) {
                decoder.rollback(trailing_transaction);
                break;
            }
            let spacing = decoder.captured_string(&trailing_transaction);
            decoded.push_str(&spacing);
            decoder.commit(trailing_transaction);
        }
        tokens.push_back(decoder.create_token(token_type, TokenContent::Text(decoded)));
    }
    // The line may end with spacing and, for regex blocks, a comment.
    expect_end_of_line(decoder, tokens, ExpectMore::No)?;
    decoder.expect_more("Unexpected end in a multi-line text, code-block or regular expression.")?;
    Ok(())
}

/// Process a multi-line text, code or regex block after its open token.
pub fn expect_multi_line_text(
    decoder: &mut TokenDecoder,
    tokens: &mut TokenSink,
    open_token_type: TokenType,
) -> Result<()> {
    debug_assert!(matches!(
        open_token_type,
        TokenType::MultiLineTextOpen | TokenType::MultiLineCodeOpen | TokenType::MultiLineRegexOpen
    ));
    // Code blocks accept a language identifier after the opening backticks.
    if open_token_type == TokenType::MultiLineCodeOpen {
        let language = scan_format_or_language_identifier(decoder, true)?;
        if !language.is_empty() {
            tokens.push_back(
                decoder.create_token(TokenType::MultiLineCodeLanguage, TokenContent::Text(language)),
            );
            decoder.expect_more("Unexpected end in multi-line code block.")?;
        }
    }
    expect_multi_line_after_open(decoder, tokens)?;
    // Process the text line by line; each loop iteration starts on an
    // indented continuation line.
    while !decoder.character().is_end() {
        if let Some(close_token) = scan_multi_line_close(decoder, open_token_type)? {
            tokens.push_back(close_token);
            return Ok(());
        }
        match open_token_type {
            TokenType::MultiLineTextOpen => {
                parse_multi_line_string(
                    decoder,
                    tokens,
                    Some('\\'),
                    Some(parse_text_escape_sequence),
                    TokenType::MultiLineText,
                )?;
            }
            TokenType::MultiLineCodeOpen => {
                parse_multi_line_string(decoder, tokens, None, None, TokenType::MultiLineCode)?;
            }
            _ => {
                parse_multi_line_string(
                    decoder,
                    tokens,
                    Some('\\'),
                    Some(parse_regular_expression_escape_sequence),
                    TokenType::MultiLineRegex,
                )?;
            }
        }
        if decoder.character().is_class(CharClass::Spacing) {
            tokens.push_back(expect_and_check_indentation(decoder)?);
            decoder
                .expect_more("Unexpected end in multi-line text, code-block or regular expression.")?;
        } else if !decoder.character().is_class(CharClass::LineBreak) {
            return Err(decoder.syntax_error("Missing indentation in multi-line text."));
        }
    }
    Err(decoder.unexpected_end("Unexpected end of data."))
}

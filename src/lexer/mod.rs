pub mod core;
pub mod literal_tables;
pub mod name;
pub mod name_lexer;
pub mod number;
pub mod section;
pub mod text;
pub mod value;
pub mod value_bytes;
pub mod value_datetime;
pub mod value_float;
pub mod value_integer;
pub mod value_literal;
pub mod value_multiline;

use std::collections::VecDeque;
use std::rc::Rc;

use crate::chars::CharClass;
use crate::decoder::reader::DocumentReader;
use crate::decoder::{Decoder, TokenDecoder};
use crate::error::{Error, ErrorCategory, Result};
use crate::source::SourceIdentifier;
use crate::token::LexerToken;
use crate::token_type::TokenType;

/// The queue the scanners emit tokens into.
pub(crate) type TokenSink = VecDeque<LexerToken>;

/// The ELCL lexer.
///
/// Pulls tokens on demand: `next_token` drains the internal queue and
/// runs one step of the line-oriented state machine when it is empty.
/// The stream ends with exactly one `EndOfData` token. Tokens produced
/// before a failure are always delivered before the error surfaces.
pub struct Lexer {
    decoder: Option<TokenDecoder>,
    tokens: TokenSink,
    pending_error: Option<Error>,
    digest: Option<Vec<u8>>,
    initialized: bool,
}

impl Lexer {
    pub fn new(source: Vec<u8>, identifier: Rc<SourceIdentifier>) -> Self {
        let reader = DocumentReader::new(source, identifier);
        Self {
            decoder: Some(TokenDecoder::new(reader)),
            tokens: TokenSink::new(),
            pending_error: None,
            digest: None,
            initialized: false,
        }
    }

    /// A lexer over an in-memory text.
    pub fn from_text(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec(), SourceIdentifier::for_text())
    }

    /// The document digest, preserved even after a failed lex; available
    /// once end-of-data was reached.
    pub fn digest(&self) -> Option<&[u8]> {
        if let Some(digest) = &self.digest {
            return Some(digest);
        }
        self.decoder.as_ref()?.digest()
    }

    /// The digest as lowercase hex.
    pub fn digest_hex(&self) -> Option<String> {
        self.digest()
            .map(|digest| digest.iter().map(|byte| format!("{:02x}", byte)).collect())
    }

    pub fn source_identifier(&self) -> Option<Rc<SourceIdentifier>> {
        self.decoder
            .as_ref()
            .map(|decoder| Rc::clone(decoder.source_identifier()))
    }

    /// Get the next token.
    ///
    /// After the `EndOfData` token, and after an error, the lexer is
    /// closed and further calls fail with an `Internal` error.
    pub fn next_token(&mut self) -> Result<LexerToken> {
        loop {
            if let Some(token) = self.tokens.pop_front() {
                return Ok(token);
            }
            if let Some(error) = self.pending_error.take() {
                self.close();
                return Err(error);
            }
            if self.decoder.is_none() {
                return Err(Error::without_location(
                    ErrorCategory::Internal,
                    "You cannot read from a closed lexer.",
                ));
            }
            if let Err(error) = self.step() {
                self.pending_error = Some(error);
            }
        }
    }

    /// Lex the whole document into a vector, including the final
    /// `EndOfData` token.
    pub fn tokenize(&mut self) -> Result<Vec<LexerToken>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_end = token.token_type == TokenType::EndOfData;
            tokens.push(token);
            if is_end {
                return Ok(tokens);
            }
        }
    }

    /// Run one step of the line state machine, with the cursor at the
    /// first character of a line.
    fn step(&mut self) -> Result<()> {
        let Some(decoder) = self.decoder.as_mut() else {
            return Err(Error::without_location(
                ErrorCategory::Internal,
                "You cannot read from a closed lexer.",
            ));
        };
        if !self.initialized {
            decoder.initialize()?;
            self.initialized = true;
        }
        if decoder.character().is_end() {
            self.tokens.push_back(decoder.create_end_of_data_token());
            self.close();
            return Ok(());
        }
        if decoder.character().is_class(CharClass::Spacing) {
            // Handle leading spacing here for better error reporting.
            self.tokens.push_back(core::expect_spacing(decoder)?);
            if decoder.character().is_class(CharClass::EndOfLineStart) {
                return core::expect_end_of_line(decoder, &mut self.tokens, core::ExpectMore::No);
            }
            if decoder.character().is_class(CharClass::NameStart) {
                return Err(decoder.syntax_error(
                    "Value names must appear at the beginning of a line without leading spaces.",
                ));
            }
            if decoder.character().is_class(CharClass::SectionStart) {
                return Err(decoder.syntax_error(
                    "Section declarations must start at the beginning of a line without any indentation.",
                ));
            }
            return Err(decoder.syntax_or_unexpected_end(
                "Unexpected content after indentation: only a comment or an empty line was expected at this point.",
            ));
        }
        if decoder.character().is_class(CharClass::EndOfLineStart) {
            return core::expect_end_of_line(decoder, &mut self.tokens, core::ExpectMore::No);
        }
        if decoder.character().is_class(CharClass::NameStart) {
            return value::expect_name_and_value(decoder, &mut self.tokens);
        }
        if decoder.character().is_class(CharClass::SectionStart) {
            return section::expect_section(decoder, &mut self.tokens);
        }
        Err(decoder.syntax_error("Expected a section, name or empty line, but got something else."))
    }

    /// Drop the decoder, preserving the digest captured so far.
    fn close(&mut self) {
        if let Some(decoder) = self.decoder.take() {
            self.digest = decoder.digest().map(|digest| digest.to_vec());
        }
    }
}

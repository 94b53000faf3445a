use std::rc::Rc;

use crate::chars::{CharClass, CharValue, DecodedChar};
use crate::decoder::reader::DocumentReader;
use crate::decoder::transaction::{Transaction, TransactionState};
use crate::decoder::Decoder;
use crate::error::{Error, ErrorCategory, Result};
use crate::position::Position;
use crate::source::{Location, SourceIdentifier};
use crate::token::{LexerToken, TokenContent};
use crate::token_type::TokenType;

/// The decoder the scanners work on.
///
/// Owns the current character, the pushback and capture buffers for
/// transactional backtracking, the delayed-error slot and the indentation
/// pattern of the active multi-line value.
pub struct TokenDecoder {
    reader: DocumentReader,
    current: DecodedChar,
    transactions: TransactionState,
    delayed_error: Option<Error>,
    token_start: Position,
    indentation_pattern: String,
}

impl TokenDecoder {
    pub fn new(reader: DocumentReader) -> Self {
        Self {
            current: DecodedChar::end_of_data(0, Position::undefined()),
            reader,
            transactions: TransactionState::default(),
            delayed_error: None,
            token_start: Position::undefined(),
            indentation_pattern: String::new(),
        }
    }

    /// Read the first character and set the initial token start.
    pub fn initialize(&mut self) -> Result<()> {
        self.next_token()
    }

    pub fn source_identifier(&self) -> &Rc<SourceIdentifier> {
        self.reader.identifier()
    }

    /// The document digest; available once end-of-data was read.
    pub fn digest(&self) -> Option<&[u8]> {
        self.reader.digest()
    }

    /// Move to the next character and start a new token.
    pub fn next_token(&mut self) -> Result<()> {
        self.next()?;
        self.reset_token_start();
        Ok(())
    }

    pub fn token_start(&self) -> Position {
        self.token_start
    }

    pub fn reset_token_start(&mut self) {
        self.token_start = self.current.position;
    }

    /// The size of the current token in characters; defined only while
    /// the token stays on a single line.
    pub fn token_size(&self) -> u32 {
        debug_assert_eq!(self.current.position.line, self.token_start.line);
        self.current.position.column - self.token_start.column
    }

    /// Expect that the current line (and the document) continues.
    pub fn expect_more_in_line(&self, message: &str) -> Result<()> {
        if self.current.is_class(CharClass::LineBreak) {
            return Err(self.syntax_error(message));
        }
        if self.current.is_end() {
            return Err(self.unexpected_end(message));
        }
        Ok(())
    }

    /// Create a token ending just before the current character.
    pub fn create_token(&mut self, token_type: TokenType, content: TokenContent) -> LexerToken {
        let raw_text = if self.current.is_end() {
            self.reader.capture_to_end_of_line()
        } else {
            self.reader.capture_to(self.current.index)
        };
        let token = LexerToken::new(
            token_type,
            self.token_start,
            self.current.position,
            raw_text,
            content,
        );
        self.reset_token_start();
        token
    }

    /// Consume the line break at the cursor and create the line-break
    /// token covering it.
    pub fn create_end_of_line_token(&mut self) -> Result<LexerToken> {
        debug_assert!(self.current.is_char('\n'));
        self.next()?;
        Ok(self.create_token(TokenType::LineBreak, TokenContent::None))
    }

    pub fn create_end_of_data_token(&self) -> LexerToken {
        LexerToken::end_of_data()
    }

    pub fn has_indentation_pattern(&self) -> bool {
        !self.indentation_pattern.is_empty()
    }

    pub fn indentation_pattern(&self) -> &str {
        &self.indentation_pattern
    }

    pub fn set_indentation_pattern(&mut self, pattern: impl Into<String>) {
        self.indentation_pattern = pattern.into();
    }

    pub fn clear_indentation_pattern(&mut self) {
        self.indentation_pattern.clear();
    }
}

impl Decoder for TokenDecoder {
    fn character(&self) -> &DecodedChar {
        &self.current
    }

    fn next(&mut self) -> Result<()> {
        if self.current.is_error() {
            return Err(Error::new(
                ErrorCategory::Internal,
                "A delayed error was not handled before advancing.",
                self.location(),
            ));
        }
        if self.transactions.has_open_transaction() {
            if self.current.is_class(CharClass::LineBreakOrEnd) {
                return Err(Error::new(
                    ErrorCategory::Internal,
                    "There is an open transaction at the end of the line.",
                    self.location(),
                ));
            }
            self.transactions.capture(self.current);
        }
        if let Some(character) = self.transactions.pop_pushback() {
            self.current = character;
            return Ok(());
        }
        match self.reader.next() {
            Ok(character) => {
                self.current = character;
                Ok(())
            }
            Err(error)
                if matches!(
                    error.category(),
                    ErrorCategory::Encoding | ErrorCategory::Character
                ) =>
            {
                // Delay the error, so all tokens before the faulty
                // character are delivered first.
                self.current = DecodedChar::new(
                    CharValue::Error,
                    self.reader.read_index(),
                    error.location().position(),
                );
                self.delayed_error = Some(error);
                Ok(())
            }
            Err(error) => Err(error),
        }
    }

    fn location(&self) -> Location {
        self.reader.location_at(self.current.position)
    }

    fn pending_error(&self) -> Option<&Error> {
        self.delayed_error.as_ref()
    }

    fn begin_transaction(&mut self) -> Transaction {
        self.transactions.begin()
    }

    fn commit(&mut self, transaction: Transaction) {
        self.transactions.commit(transaction);
    }

    fn rollback(&mut self, transaction: Transaction) {
        self.current = self.transactions.rollback(transaction, self.current);
    }

    fn captured_size(&self, transaction: &Transaction) -> usize {
        self.transactions.captured_size(transaction)
    }

    fn captured_with(
        &self,
        transaction: &Transaction,
        fold: &mut dyn FnMut(&mut String, &DecodedChar),
    ) -> String {
        self.transactions.captured_with(transaction, fold)
    }
}

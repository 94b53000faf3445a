pub mod name_decoder;
pub mod reader;
pub mod token_decoder;
pub mod transaction;

pub use name_decoder::NameDecoder;
pub use reader::DocumentReader;
pub use token_decoder::TokenDecoder;
pub use transaction::Transaction;

use crate::chars::{CharPattern, DecodedChar};
use crate::error::{Error, ErrorCategory, Result};
use crate::source::Location;

/// The cursor interface shared by the token decoder and the name decoder.
///
/// Scanners that are useful in both contexts (numbers, text, names) are
/// generic over this trait; everything else works on the token decoder
/// directly.
pub trait Decoder {
    /// The current character.
    fn character(&self) -> &DecodedChar;

    /// Capture the current character (inside transactions) and advance.
    fn next(&mut self) -> Result<()>;

    /// The location of the current character.
    fn location(&self) -> Location;

    /// A delayed error waiting on the cursor, if any.
    fn pending_error(&self) -> Option<&Error>;

    fn begin_transaction(&mut self) -> Transaction;
    fn commit(&mut self, transaction: Transaction);
    fn rollback(&mut self, transaction: Transaction);
    fn captured_size(&self, transaction: &Transaction) -> usize;
    fn captured_with(
        &self,
        transaction: &Transaction,
        fold: &mut dyn FnMut(&mut String, &DecodedChar),
    ) -> String;

    /// The captured text, verbatim.
    fn captured_string(&self, transaction: &Transaction) -> String {
        self.captured_with(transaction, &mut |text, ch| ch.append_to(text))
    }

    /// The captured text, folded to ASCII lowercase.
    fn captured_lowercase(&self, transaction: &Transaction) -> String {
        self.captured_with(transaction, &mut |text, ch| ch.append_lowercase_to(text))
    }

    /// The captured text in normalised name form: lowercase, spaces
    /// replaced with underscores.
    fn captured_name(&self, transaction: &Transaction) -> String {
        self.captured_with(transaction, &mut |text, ch| {
            if ch.is_char(' ') {
                text.push('_');
            } else {
                ch.append_lowercase_to(text);
            }
        })
    }

    /// Rethrow a delayed error without consuming it.
    fn check_for_error(&self) -> Result<()> {
        match self.pending_error() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    /// Build an error at the current location. A pending delayed error
    /// takes precedence over the new one.
    fn error(&self, category: ErrorCategory, message: impl Into<String>) -> Error
    where
        Self: Sized,
    {
        if let Some(error) = self.pending_error() {
            return error.clone();
        }
        Error::new(category, message, self.location())
    }

    fn syntax_error(&self, message: impl Into<String>) -> Error
    where
        Self: Sized,
    {
        self.error(ErrorCategory::Syntax, message)
    }

    fn limit_exceeded(&self, message: impl Into<String>) -> Error
    where
        Self: Sized,
    {
        self.error(ErrorCategory::LimitExceeded, message)
    }

    fn number_limit_exceeded(&self) -> Error
    where
        Self: Sized,
    {
        self.limit_exceeded("The number exceeds the 64-bit limit.")
    }

    fn unexpected_end(&self, message: impl Into<String>) -> Error
    where
        Self: Sized,
    {
        self.error(ErrorCategory::UnexpectedEnd, message)
    }

    fn internal_error(&self, message: impl Into<String>) -> Error
    where
        Self: Sized,
    {
        self.error(ErrorCategory::Internal, message)
    }

    /// A syntax error, or an unexpected-end error when the cursor is at
    /// the end of the data.
    fn syntax_or_unexpected_end(&self, message: impl Into<String>) -> Error
    where
        Self: Sized,
    {
        if self.character().is_end() {
            return self.unexpected_end(message);
        }
        self.syntax_error(message)
    }

    /// Expect the given character or character class at the cursor.
    fn expect(&self, expected: impl CharPattern, message: &str) -> Result<()>
    where
        Self: Sized,
    {
        if !expected.matches(self.character()) {
            return Err(self.syntax_or_unexpected_end(message));
        }
        Ok(())
    }

    /// Expect and consume the given character or character class.
    fn expect_and_next(&mut self, expected: impl CharPattern, message: &str) -> Result<()>
    where
        Self: Sized,
    {
        self.expect(expected, message)?;
        self.next()
    }

    /// Expect that the document continues.
    fn expect_more(&self, message: &str) -> Result<()>
    where
        Self: Sized,
    {
        if self.character().is_end() {
            return Err(self.unexpected_end(message));
        }
        Ok(())
    }
}

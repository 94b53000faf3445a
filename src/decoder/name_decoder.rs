use crate::chars::{CharClass, CharValue, DecodedChar};
use crate::decoder::transaction::{Transaction, TransactionState};
use crate::decoder::Decoder;
use crate::error::{Error, ErrorCategory, Result};
use crate::position::Position;
use crate::source::Location;

/// A minimal decoder over a name-path text.
///
/// Shares the cursor and transaction semantics of the token decoder, but
/// reads from an in-memory string: no digest, no raw-text capture and no
/// delayed errors.
pub struct NameDecoder {
    characters: Vec<DecodedChar>,
    read_index: usize,
    current: DecodedChar,
    transactions: TransactionState,
    end: DecodedChar,
}

impl NameDecoder {
    pub fn new(text: &str) -> Self {
        let mut characters = Vec::with_capacity(text.len());
        let mut position = Position::new(1, 1);
        for (index, ch) in text.char_indices() {
            characters.push(DecodedChar::new(CharValue::Scalar(ch), index, position));
            position.advance(ch);
        }
        let end = DecodedChar::end_of_data(text.len(), position);
        Self {
            characters,
            read_index: 0,
            current: end,
            transactions: TransactionState::default(),
            end,
        }
    }

    /// Read the first character.
    pub fn initialize(&mut self) -> Result<()> {
        self.next()
    }
}

impl Decoder for NameDecoder {
    fn character(&self) -> &DecodedChar {
        &self.current
    }

    fn next(&mut self) -> Result<()> {
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
        self.current = match self.characters.get(self.read_index) {
            Some(character) => {
                self.read_index += 1;
                *character
            }
            None => self.end,
        };
        Ok(())
    }

    fn location(&self) -> Location {
        Location::with_position(self.current.position)
    }

    fn pending_error(&self) -> Option<&Error> {
        None
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

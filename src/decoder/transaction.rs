use crate::chars::DecodedChar;

/// A handle for a backtracking scope over a decoder cursor.
///
/// Created by `Decoder::begin_transaction` and consumed by exactly one of
/// `commit` or `rollback`. The handle is move-only, so a scope cannot be
/// closed twice; closing scopes out of LIFO order is a logic error caught
/// by a debug assertion.
#[must_use = "a transaction must be committed or rolled back"]
#[derive(Debug)]
pub struct Transaction {
    pub(crate) buffer_start: usize,
    pub(crate) depth: usize,
}

/// Capture buffer, pushback stack and transaction bookkeeping shared by
/// the token decoder and the name decoder.
#[derive(Debug, Default)]
pub(crate) struct TransactionState {
    /// Characters the cursor moved past while a transaction was open.
    capture: Vec<DecodedChar>,
    /// Characters returned by a rollback, consumed before the source.
    pushback: Vec<DecodedChar>,
    /// Number of open transactions.
    depth: usize,
}

impl TransactionState {
    pub fn has_open_transaction(&self) -> bool {
        self.depth > 0
    }

    /// Record a character the cursor leaves behind.
    pub fn capture(&mut self, character: DecodedChar) {
        self.capture.push(character);
    }

    pub fn pop_pushback(&mut self) -> Option<DecodedChar> {
        self.pushback.pop()
    }

    pub fn begin(&mut self) -> Transaction {
        self.depth += 1;
        Transaction {
            buffer_start: self.capture.len(),
            depth: self.depth,
        }
    }

    /// Close the scope, handing the captured characters to the next outer
    /// transaction. With no outer scope left, the buffer is reset.
    pub fn commit(&mut self, transaction: Transaction) {
        debug_assert_eq!(transaction.depth, self.depth, "transactions must close in LIFO order");
        self.depth -= 1;
        if self.depth == 0 {
            self.capture.clear();
        }
    }

    /// Close the scope and restore the cursor to the character that was
    /// current when the scope was opened. Returns the restored character.
    pub fn rollback(&mut self, transaction: Transaction, current: DecodedChar) -> DecodedChar {
        debug_assert_eq!(transaction.depth, self.depth, "transactions must close in LIFO order");
        self.pushback.push(current);
        while self.capture.len() > transaction.buffer_start {
            // Reverse order, so the pushback stack pops front-to-back.
            if let Some(character) = self.capture.pop() {
                self.pushback.push(character);
            }
        }
        self.depth -= 1;
        // The stack cannot be empty: the current character was just pushed.
        self.pushback.pop().unwrap_or(current)
    }

    pub fn captured_size(&self, transaction: &Transaction) -> usize {
        self.capture.len() - transaction.buffer_start
    }

    /// Fold the captured characters of the scope into a string.
    pub fn captured_with(
        &self,
        transaction: &Transaction,
        fold: &mut dyn FnMut(&mut String, &DecodedChar),
    ) -> String {
        let mut result = String::new();
        for character in &self.capture[transaction.buffer_start..] {
            fold(&mut result, character);
        }
        result
    }
}

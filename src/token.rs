use std::fmt;

use serde::Serialize;

use crate::datetime::{Date, DateTime, Time, TimeDelta};
use crate::position::Position;
use crate::token_type::TokenType;

/// The typed payload of a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenContent {
    None,
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
    Bytes(Vec<u8>),
    Date(Date),
    Time(Time),
    DateTime(DateTime),
    TimeDelta(TimeDelta),
}

impl TokenContent {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenContent::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            TokenContent::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

/// A single lexer token.
///
/// `raw_text` holds the exact source text the token was produced from;
/// concatenating the raw text of all tokens of a document reconstructs
/// the input. `begin` is the position of the first character, `end` the
/// position just after the last one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexerToken {
    pub token_type: TokenType,
    pub begin: Position,
    pub end: Position,
    pub raw_text: String,
    pub content: TokenContent,
}

impl LexerToken {
    pub fn new(
        token_type: TokenType,
        begin: Position,
        end: Position,
        raw_text: String,
        content: TokenContent,
    ) -> Self {
        Self {
            token_type,
            begin,
            end,
            raw_text,
            content,
        }
    }

    /// The end-of-data token: undefined positions, no raw text.
    pub fn end_of_data() -> Self {
        Self {
            token_type: TokenType::EndOfData,
            begin: Position::undefined(),
            end: Position::undefined(),
            raw_text: String::new(),
            content: TokenContent::None,
        }
    }
}

impl fmt::Display for LexerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token({}, {:?}, {})",
            self.token_type, self.raw_text, self.begin
        )
    }
}

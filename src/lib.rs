//! Lexer for the Erbsland Configuration Language (ELCL).
//!
//! The crate turns a UTF-8 document into a stream of typed tokens with
//! exact source positions and raw text, through a three-stage pipeline:
//! a validating UTF-8 reader, a token decoder with transactional
//! backtracking, and a family of context-sensitive scanners driven by a
//! line-oriented state machine.
//!
//! ```
//! use elcl::lexer::Lexer;
//! use elcl::token_type::TokenType;
//!
//! let mut lexer = Lexer::from_text("server: \"hello\"\n");
//! let tokens = lexer.tokenize().unwrap();
//! assert_eq!(tokens.first().unwrap().token_type, TokenType::RegularName);
//! assert_eq!(tokens.last().unwrap().token_type, TokenType::EndOfData);
//! ```

pub mod chars;
pub mod datetime;
pub mod decoder;
pub mod diagnostic;
pub mod error;
pub mod lexer;
pub mod limits;
pub mod name;
pub mod name_path;
pub mod position;
pub mod source;
pub mod token;
pub mod token_type;

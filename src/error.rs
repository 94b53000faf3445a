use std::fmt;

use crate::source::Location;

/// The category of an error.
///
/// The names and codes are part of the language contract; the lexer core
/// itself raises only a subset (Encoding, UnexpectedEnd, Character, Syntax,
/// LimitExceeded, Indentation, Unsupported, Internal and Io from the byte
/// source). The remaining categories belong to downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    Io,
    Encoding,
    UnexpectedEnd,
    Character,
    Syntax,
    LimitExceeded,
    NameConflict,
    Indentation,
    Unsupported,
    Signature,
    Access,
    Validation,
    Internal,
    ValueNotFound,
    WrongType,
}

impl ErrorCategory {
    pub fn code(&self) -> u32 {
        match self {
            ErrorCategory::Io => 1,
            ErrorCategory::Encoding => 2,
            ErrorCategory::UnexpectedEnd => 3,
            ErrorCategory::Character => 4,
            ErrorCategory::Syntax => 5,
            ErrorCategory::LimitExceeded => 6,
            ErrorCategory::NameConflict => 7,
            ErrorCategory::Indentation => 8,
            ErrorCategory::Unsupported => 9,
            ErrorCategory::Signature => 10,
            ErrorCategory::Access => 11,
            ErrorCategory::Validation => 12,
            ErrorCategory::Internal => 99,
            ErrorCategory::ValueNotFound => 101,
            ErrorCategory::WrongType => 102,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ErrorCategory::Io => "IO",
            ErrorCategory::Encoding => "Encoding",
            ErrorCategory::UnexpectedEnd => "UnexpectedEnd",
            ErrorCategory::Character => "Character",
            ErrorCategory::Syntax => "Syntax",
            ErrorCategory::LimitExceeded => "LimitExceeded",
            ErrorCategory::NameConflict => "NameConflict",
            ErrorCategory::Indentation => "Indentation",
            ErrorCategory::Unsupported => "Unsupported",
            ErrorCategory::Signature => "Signature",
            ErrorCategory::Access => "Access",
            ErrorCategory::Validation => "Validation",
            ErrorCategory::Internal => "Internal",
            ErrorCategory::ValueNotFound => "ValueNotFound",
            ErrorCategory::WrongType => "WrongType",
        }
    }

    pub const ALL: &'static [ErrorCategory] = &[
        ErrorCategory::Io,
        ErrorCategory::Encoding,
        ErrorCategory::UnexpectedEnd,
        ErrorCategory::Character,
        ErrorCategory::Syntax,
        ErrorCategory::LimitExceeded,
        ErrorCategory::NameConflict,
        ErrorCategory::Indentation,
        ErrorCategory::Unsupported,
        ErrorCategory::Signature,
        ErrorCategory::Access,
        ErrorCategory::Validation,
        ErrorCategory::Internal,
        ErrorCategory::ValueNotFound,
        ErrorCategory::WrongType,
    ];
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An error raised while reading or lexing a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    category: ErrorCategory,
    message: String,
    location: Location,
}

impl Error {
    pub fn new(category: ErrorCategory, message: impl Into<String>, location: Location) -> Self {
        Self {
            category,
            message: message.into(),
            location,
        }
    }

    /// An error without a document location (API-level failures).
    pub fn without_location(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self::new(category, message, Location::undefined())
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> &Location {
        &self.location
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location.is_undefined() {
            return write!(f, "{} error: {}", self.category, self.message);
        }
        write!(f, "{} error: {} [{}]", self.category, self.message, self.location)
    }
}

impl std::error::Error for Error {}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

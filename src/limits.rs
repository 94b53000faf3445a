//! Normative limits of the configuration language.

/// Maximum number of normalised characters in a regular name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum physical line length in bytes; also the name-path text limit.
pub const MAX_LINE_LENGTH: usize = 4000;

/// Maximum length of a format or language identifier.
pub const MAX_FORMAT_IDENTIFIER_LENGTH: usize = 16;

/// Maximum length of an integer unit suffix.
pub const MAX_INTEGER_SUFFIX_LENGTH: usize = 12;

/// Maximum number of mantissa digits in a floating point literal.
pub const MAX_FLOAT_MANTISSA_DIGITS: usize = 20;

/// Maximum number of exponent digits in a floating point literal.
pub const MAX_FLOAT_EXPONENT_DIGITS: usize = 6;

/// Maximum length of a boolean literal keyword.
pub const MAX_LITERAL_LENGTH: usize = 8;

/// Maximum number of digits in a time fraction (nanoseconds).
pub const MAX_TIME_FRACTION_DIGITS: usize = 9;

use crate::position::Position;

/// Semantic character classes used by the scanners.
///
/// Classification is a pure function of the code point; end-of-data
/// membership is part of the class definition where noted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    DecimalDigit,
    HexDigit,
    LetterOrDigit,
    /// Space or tab.
    Spacing,
    /// `\n` or `\r`.
    LineBreak,
    /// `\n`, `\r` or end-of-data.
    LineBreakOrEnd,
    /// `\n`, `\r` or `#`.
    EndOfLineStart,
    /// A letter, `@` or `"` at the start of a line.
    NameStart,
    /// A name inside section brackets: letter, `@` or `"`.
    SectionNameStart,
    /// `-`, `*` or `[` at the start of a line.
    SectionStart,
    /// `:` or `=`.
    NameValueSeparator,
    /// Spacing, line break, `,`, `#` or end-of-data.
    ValidAfterValue,
    /// A decimal digit or sign.
    NumberStart,
    /// A character that can start `nan`/`inf` with an optional sign.
    FloatLiteralStart,
    PlusOrMinus,
    /// `"`, `` ` ``, `/` or `<`: possible start of a multi-line block.
    OpeningBracket,
    /// `e` or `E`.
    ExponentStart,
    /// A letter usable in an integer suffix, including the micro sign.
    IntegerSuffixChar,
    /// A decimal digit, `t` or `T`.
    TimeStart,
    /// Letter, digit, `-` or `_` inside a format or language identifier.
    FormatIdentifierChar,
    /// Any character allowed in a configuration document.
    ValidLang,
}

impl CharClass {
    /// Whether the class contains the given scalar.
    pub fn contains(self, ch: char) -> bool {
        match self {
            CharClass::Letter => ch.is_ascii_alphabetic(),
            CharClass::DecimalDigit => ch.is_ascii_digit(),
            CharClass::HexDigit => ch.is_ascii_hexdigit(),
            CharClass::LetterOrDigit => ch.is_ascii_alphanumeric(),
            CharClass::Spacing => ch == ' ' || ch == '\t',
            CharClass::LineBreak | CharClass::LineBreakOrEnd => ch == '\n' || ch == '\r',
            CharClass::EndOfLineStart => ch == '\n' || ch == '\r' || ch == '#',
            CharClass::NameStart | CharClass::SectionNameStart => {
                ch.is_ascii_alphabetic() || ch == '@' || ch == '"'
            }
            CharClass::SectionStart => ch == '-' || ch == '*' || ch == '[',
            CharClass::NameValueSeparator => ch == ':' || ch == '=',
            CharClass::ValidAfterValue => {
                ch == ' ' || ch == '\t' || ch == '\n' || ch == '\r' || ch == ',' || ch == '#'
            }
            CharClass::NumberStart => ch.is_ascii_digit() || ch == '+' || ch == '-',
            CharClass::FloatLiteralStart => matches!(ch, '+' | '-' | 'n' | 'N' | 'i' | 'I'),
            CharClass::PlusOrMinus => ch == '+' || ch == '-',
            CharClass::OpeningBracket => matches!(ch, '"' | '`' | '/' | '<'),
            CharClass::ExponentStart => ch == 'e' || ch == 'E',
            CharClass::IntegerSuffixChar => ch.is_ascii_alphabetic() || ch == '\u{00B5}',
            CharClass::TimeStart => ch.is_ascii_digit() || ch == 't' || ch == 'T',
            CharClass::FormatIdentifierChar => {
                ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
            }
            CharClass::ValidLang => ch == '\t' || !ch.is_control(),
        }
    }

    /// Whether end-of-data is a member of the class.
    pub fn contains_end(self) -> bool {
        matches!(
            self,
            CharClass::LineBreakOrEnd | CharClass::ValidAfterValue | CharClass::EndOfLineStart
        )
    }
}

/// The value carried by a decoded cursor character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharValue {
    Scalar(char),
    /// The document ended; all further reads stay here.
    EndOfData,
    /// Sentinel for a delayed encoding or character error.
    Error,
}

/// One decoded character with its byte index and source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedChar {
    pub value: CharValue,
    pub index: usize,
    pub position: Position,
}

impl DecodedChar {
    pub fn new(value: CharValue, index: usize, position: Position) -> Self {
        Self {
            value,
            index,
            position,
        }
    }

    pub fn end_of_data(index: usize, position: Position) -> Self {
        Self::new(CharValue::EndOfData, index, position)
    }

    pub fn is_end(&self) -> bool {
        self.value == CharValue::EndOfData
    }

    pub fn is_error(&self) -> bool {
        self.value == CharValue::Error
    }

    pub fn as_scalar(&self) -> Option<char> {
        match self.value {
            CharValue::Scalar(ch) => Some(ch),
            _ => None,
        }
    }

    pub fn is_char(&self, expected: char) -> bool {
        self.as_scalar() == Some(expected)
    }

    pub fn is_class(&self, class: CharClass) -> bool {
        match self.value {
            CharValue::Scalar(ch) => class.contains(ch),
            CharValue::EndOfData => class.contains_end(),
            CharValue::Error => false,
        }
    }

    /// Case-insensitive ASCII letter test (used for `t`, `z`, `x`, …).
    pub fn is_letter_ci(&self, lower: char) -> bool {
        match self.value {
            CharValue::Scalar(ch) => ch.to_ascii_lowercase() == lower,
            _ => false,
        }
    }

    /// The value of a hexadecimal digit, or zero for anything else.
    pub fn hex_digit_value(&self) -> u32 {
        match self.value {
            CharValue::Scalar(ch) => ch.to_digit(16).unwrap_or(0),
            _ => 0,
        }
    }

    pub fn append_to(&self, target: &mut String) {
        if let CharValue::Scalar(ch) = self.value {
            target.push(ch);
        }
    }

    pub fn append_lowercase_to(&self, target: &mut String) {
        if let CharValue::Scalar(ch) = self.value {
            target.push(ch.to_ascii_lowercase());
        }
    }
}

/// Anything a scanner can expect at the cursor: a single scalar or a class.
pub trait CharPattern: Copy {
    fn matches(&self, ch: &DecodedChar) -> bool;
}

impl CharPattern for char {
    fn matches(&self, ch: &DecodedChar) -> bool {
        ch.is_char(*self)
    }
}

impl CharPattern for CharClass {
    fn matches(&self, ch: &DecodedChar) -> bool {
        ch.is_class(*self)
    }
}

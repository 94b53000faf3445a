use std::fmt;

use serde::Serialize;

/// The type of a lexer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenType {
    /// The end of the data.
    EndOfData,
    /// A line break (`\n` or `\r\n`).
    LineBreak,
    /// A run of spaces and tabs.
    Spacing,
    /// The leading spacing of a continuation line.
    Indentation,
    /// A `#` comment, up to but not including the line break.
    Comment,
    /// A regular name, normalised to lowercase with `_` separators.
    RegularName,
    /// A double-quoted text name, without the quotes.
    TextName,
    /// A regular name starting with `@`, including the `@`.
    MetaName,
    /// `:` or `=`.
    NameValueSeparator,
    /// `,` between values.
    ValueListSeparator,
    /// `*` introducing a multi-line value list entry.
    MultiLineValueListSeparator,
    /// `.` between names.
    NamePathSeparator,
    Integer,
    Boolean,
    Float,
    /// A single-line double-quoted text.
    Text,
    MultiLineTextOpen,
    MultiLineTextClose,
    /// One content line of a multi-line text.
    MultiLineText,
    /// A single-line backtick code span.
    Code,
    MultiLineCodeOpen,
    /// The language identifier after the opening backticks.
    MultiLineCodeLanguage,
    MultiLineCodeClose,
    MultiLineCode,
    /// A single-line `/…/` regular expression.
    RegEx,
    MultiLineRegexOpen,
    MultiLineRegexClose,
    MultiLineRegex,
    /// A single-line `<…>` bytes block.
    Bytes,
    MultiLineBytesOpen,
    /// The format identifier after the opening `<<<`.
    MultiLineBytesFormat,
    MultiLineBytesClose,
    MultiLineBytes,
    Date,
    Time,
    DateTime,
    TimeDelta,
    SectionMapOpen,
    SectionMapClose,
    SectionListOpen,
    SectionListClose,
    /// Error placeholder, for relaxed lexing.
    Error,
}

impl TokenType {
    /// The open token for a multi-line block introduced by three of the
    /// given character.
    pub fn from_multi_line_open(ch: char) -> Option<TokenType> {
        match ch {
            '"' => Some(TokenType::MultiLineTextOpen),
            '`' => Some(TokenType::MultiLineCodeOpen),
            '/' => Some(TokenType::MultiLineRegexOpen),
            '<' => Some(TokenType::MultiLineBytesOpen),
            _ => None,
        }
    }

    /// The close token matching a multi-line open token.
    pub fn close_for_open(self) -> Option<TokenType> {
        match self {
            TokenType::MultiLineTextOpen => Some(TokenType::MultiLineTextClose),
            TokenType::MultiLineCodeOpen => Some(TokenType::MultiLineCodeClose),
            TokenType::MultiLineRegexOpen => Some(TokenType::MultiLineRegexClose),
            TokenType::MultiLineBytesOpen => Some(TokenType::MultiLineBytesClose),
            _ => None,
        }
    }

    /// The character repeated three times to close a multi-line block.
    pub fn close_character(self) -> Option<char> {
        match self {
            TokenType::MultiLineTextOpen => Some('"'),
            TokenType::MultiLineCodeOpen => Some('`'),
            TokenType::MultiLineRegexOpen => Some('/'),
            TokenType::MultiLineBytesOpen => Some('>'),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TokenType::EndOfData => "EndOfData",
            TokenType::LineBreak => "LineBreak",
            TokenType::Spacing => "Spacing",
            TokenType::Indentation => "Indentation",
            TokenType::Comment => "Comment",
            TokenType::RegularName => "RegularName",
            TokenType::TextName => "TextName",
            TokenType::MetaName => "MetaName",
            TokenType::NameValueSeparator => "NameValueSeparator",
            TokenType::ValueListSeparator => "ValueListSeparator",
            TokenType::MultiLineValueListSeparator => "MultiLineValueListSeparator",
            TokenType::NamePathSeparator => "NamePathSeparator",
            TokenType::Integer => "Integer",
            TokenType::Boolean => "Boolean",
            TokenType::Float => "Float",
            TokenType::Text => "Text",
            TokenType::MultiLineTextOpen => "MultiLineTextOpen",
            TokenType::MultiLineTextClose => "MultiLineTextClose",
            TokenType::MultiLineText => "MultiLineText",
            TokenType::Code => "Code",
            TokenType::MultiLineCodeOpen => "MultiLineCodeOpen",
            TokenType::MultiLineCodeLanguage => "MultiLineCodeLanguage",
            TokenType::MultiLineCodeClose => "MultiLineCodeClose",
            TokenType::MultiLineCode => "MultiLineCode",
            TokenType::RegEx => "RegEx",
            TokenType::MultiLineRegexOpen => "MultiLineRegexOpen",
            TokenType::MultiLineRegexClose => "MultiLineRegexClose",
            TokenType::MultiLineRegex => "MultiLineRegex",
            TokenType::Bytes => "Bytes",
            TokenType::MultiLineBytesOpen => "MultiLineBytesOpen",
            TokenType::MultiLineBytesFormat => "MultiLineBytesFormat",
            TokenType::MultiLineBytesClose => "MultiLineBytesClose",
            TokenType::MultiLineBytes => "MultiLineBytes",
            TokenType::Date => "Date",
            TokenType::Time => "Time",
            TokenType::DateTime => "DateTime",
            TokenType::TimeDelta => "TimeDelta",
            TokenType::SectionMapOpen => "SectionMapOpen",
            TokenType::SectionMapClose => "SectionMapClose",
            TokenType::SectionListOpen => "SectionListOpen",
            TokenType::SectionListClose => "SectionListClose",
            TokenType::Error => "Error",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

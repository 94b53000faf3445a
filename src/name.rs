use std::fmt;

use serde::Serialize;

use crate::error::{Error, ErrorCategory, Result};
use crate::limits;

/// The kind of a name inside a name path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NameType {
    /// A normalised regular or meta name.
    Regular,
    /// A double-quoted text name.
    Text,
    /// A `[n]` list index.
    Index,
    /// A `""[n]` text index.
    TextIndex,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
enum NameStorage {
    Text(String),
    Index(usize),
}

/// One element of a name path.
///
/// Regular names are stored normalised: ASCII lowercase, spaces replaced
/// with underscores, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Name {
    name_type: NameType,
    storage: NameStorage,
}

impl Name {
    /// Create a regular (or meta) name, normalising and validating the text.
    pub fn regular(text: &str) -> Result<Self> {
        Ok(Self {
            name_type: NameType::Regular,
            storage: NameStorage::Text(normalize(text)?),
        })
    }

    /// A regular name that is already normalised (lexer-internal).
    pub(crate) fn regular_normalized(text: String) -> Self {
        Self {
            name_type: NameType::Regular,
            storage: NameStorage::Text(text),
        }
    }

    /// Create a text name, validating the content.
    pub fn text(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        validate_text(&text)?;
        Ok(Self {
            name_type: NameType::Text,
            storage: NameStorage::Text(text),
        })
    }

    pub fn index(index: usize) -> Self {
        Self {
            name_type: NameType::Index,
            storage: NameStorage::Index(index),
        }
    }

    pub fn text_index(index: usize) -> Self {
        Self {
            name_type: NameType::TextIndex,
            storage: NameStorage::Index(index),
        }
    }

    pub fn name_type(&self) -> NameType {
        self.name_type
    }

    pub fn is_regular(&self) -> bool {
        self.name_type == NameType::Regular
    }

    pub fn is_text(&self) -> bool {
        self.name_type == NameType::Text
    }

    pub fn is_index(&self) -> bool {
        self.name_type == NameType::Index
    }

    pub fn is_text_index(&self) -> bool {
        self.name_type == NameType::TextIndex
    }

    pub fn is_meta(&self) -> bool {
        self.is_regular() && self.as_text().starts_with('@')
    }

    /// The text form of this name; indexes render as their decimal value.
    pub fn as_text(&self) -> &str {
        match &self.storage {
            NameStorage::Text(text) => text,
            NameStorage::Index(_) => "",
        }
    }

    pub fn as_index(&self) -> Option<usize> {
        match &self.storage {
            NameStorage::Index(index) => Some(*index),
            NameStorage::Text(_) => None,
        }
    }

    /// The canonical serialisation of this name inside a path.
    pub fn to_path_text(&self) -> String {
        match (&self.name_type, &self.storage) {
            (NameType::Regular, NameStorage::Text(text)) => text.clone(),
            (NameType::Text, NameStorage::Text(text)) => {
                format!("\"{}\"", escape_text_name(text))
            }
            (NameType::Index, NameStorage::Index(index)) => format!("[{}]", index),
            (NameType::TextIndex, NameStorage::Index(index)) => format!("\"\"[{}]", index),
            // Storage and type always match; the constructors enforce it.
            _ => String::new(),
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_text())
    }
}

/// Escape a text name for the canonical path form.
fn escape_text_name(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            ch if ch.is_control() => {
                result.push_str(&format!("\\u{{{:x}}}", ch as u32));
            }
            ch => result.push(ch),
        }
    }
    result
}

/// Normalise a regular name given through the API, applying the same rules
/// the lexer applies while scanning.
fn normalize(text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(Error::without_location(
            ErrorCategory::Syntax,
            "Regular names must not be empty.",
        ));
    }
    if text.chars().count() > limits::MAX_NAME_LENGTH {
        return Err(Error::without_location(
            ErrorCategory::LimitExceeded,
            "The given name is too long.",
        ));
    }
    let mut result = String::with_capacity(text.len());
    let mut last_was_separator = false;
    for (count, ch) in text.chars().enumerate() {
        if ch == ' ' || ch == '_' {
            if result.is_empty() {
                return Err(Error::without_location(
                    ErrorCategory::Syntax,
                    "A name must not start with a space or underscore.",
                ));
            }
            if last_was_separator {
                return Err(Error::without_location(
                    ErrorCategory::Syntax,
                    "Two subsequent word separators (space, underscore) are not allowed.",
                ));
            }
            last_was_separator = true;
            result.push('_');
        } else if ch.is_ascii_digit() {
            if result.is_empty() || result == "@" {
                return Err(Error::without_location(
                    ErrorCategory::Syntax,
                    "A name must not start with a number.",
                ));
            }
            last_was_separator = false;
            result.push(ch);
        } else if ch.is_ascii_alphabetic() {
            last_was_separator = false;
            result.push(ch.to_ascii_lowercase());
        } else if count == 0 && ch == '@' {
            last_was_separator = false;
            result.push('@');
        } else {
            return Err(Error::without_location(
                ErrorCategory::Syntax,
                format!("Invalid character at position {}", count),
            ));
        }
    }
    if result.ends_with('_') {
        return Err(Error::without_location(
            ErrorCategory::Syntax,
            "A name must not end with a space or underscore.",
        ));
    }
    if result == "@" {
        return Err(Error::without_location(
            ErrorCategory::Syntax,
            "A meta-name requires at least one letter.",
        ));
    }
    Ok(result)
}

fn validate_text(text: &str) -> Result<()> {
    if text.is_empty() {
        return Err(Error::without_location(
            ErrorCategory::Syntax,
            "Text-names must not be empty.",
        ));
    }
    if text.len() > limits::MAX_LINE_LENGTH {
        return Err(Error::without_location(
            ErrorCategory::LimitExceeded,
            "The given text-name exceeds the size limit.",
        ));
    }
    for ch in text.chars() {
        if ch != '\t' && ch.is_control() {
            return Err(Error::without_location(
                ErrorCategory::Syntax,
                "The text-name contains a character that is not allowed in a configuration document.",
            ));
        }
    }
    Ok(())
}

use std::fmt;
use std::rc::Rc;

use crate::position::Position;

/// Identifies the source a document was read from.
///
/// Shared by reference between the decoder, tokens and errors; never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIdentifier {
    name: String,
    path: String,
}

impl SourceIdentifier {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            path: path.into(),
        })
    }

    /// A source identifier for in-memory text.
    pub fn for_text() -> Rc<Self> {
        Self::new("text", "")
    }

    pub fn for_file(path: impl Into<String>) -> Rc<Self> {
        let path = path.into();
        Self::new("file", path)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for SourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            return write!(f, "{}", self.name);
        }
        write!(f, "{}:{}", self.name, self.path)
    }
}

/// A location in a parsed document: source plus position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    source: Option<Rc<SourceIdentifier>>,
    position: Position,
}

impl Location {
    pub fn new(source: Rc<SourceIdentifier>, position: Position) -> Self {
        Self {
            source: Some(source),
            position,
        }
    }

    /// An undefined location (no source, undefined position).
    pub fn undefined() -> Self {
        Self::default()
    }

    /// A location with a position but no source (in-memory text).
    pub fn with_position(position: Position) -> Self {
        Self {
            source: None,
            position,
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.source.is_none() && self.position.is_undefined()
    }

    pub fn source(&self) -> Option<&Rc<SourceIdentifier>> {
        self.source.as_ref()
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Some(source) => write!(f, "{}:{}", source, self.position),
            None => write!(f, "{}", self.position),
        }
    }
}

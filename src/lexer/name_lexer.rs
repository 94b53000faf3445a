use crate::chars::CharClass;
use crate::decoder::{Decoder, NameDecoder};
use crate::error::Result;
use crate::lexer::name::{expect_regular_or_meta_name, AcceptedNameEnd};
use crate::lexer::number::{parse_number, NumberBase, NumberSeparators, Sign};
use crate::lexer::text::parse_text;
use crate::limits;
use crate::name::Name;

/// A minimalistic lexer for name paths like `main.server[2].path`.
pub struct NameLexer {
    decoder: NameDecoder,
    after_first_element: bool,
}

impl NameLexer {
    pub fn new(text: &str) -> Result<Self> {
        let mut decoder = NameDecoder::new(text);
        if text.len() > limits::MAX_LINE_LENGTH {
            return Err(decoder.limit_exceeded("A name path must not exceed 4kb."));
        }
        decoder.initialize()?;
        Ok(Self {
            decoder,
            after_first_element: false,
        })
    }

    pub fn has_next(&self) -> bool {
        !self.decoder.character().is_end()
    }

    /// Read the next name from the path.
    pub fn next(&mut self) -> Result<Name> {
        self.skip_spacing()?;
        let mut read_separator = false;
        if self.decoder.character().is_end() {
            // Misuse guard; `has_next` gates correct operation.
            return Err(self
                .decoder
                .unexpected_end("The name path ended unexpectedly."));
        }
        if self.decoder.character().is_char('.') {
            if !self.after_first_element {
                return Err(self
                    .decoder
                    .syntax_error("The name path must not start with a separator."));
            }
            self.decoder.next()?;
            self.skip_spacing()?;
            if self.decoder.character().is_end() {
                return Err(self
                    .decoder
                    .unexpected_end("Name path must not end with a separator."));
            }
            read_separator = true;
        }
        if self.decoder.character().is_class(CharClass::Letter)
            || self.decoder.character().is_char('@')
        {
            return self.expect_regular_name();
        }
        if self.decoder.character().is_char('"') {
            return self.expect_text_name_or_index();
        }
        if self.decoder.character().is_char('[') {
            if read_separator {
                return Err(self
                    .decoder
                    .syntax_error("An index must not be preceded by a separator."));
            }
            return self.expect_index();
        }
        if self.decoder.character().is_class(CharClass::DecimalDigit) {
            return Err(self
                .decoder
                .syntax_error("Regular names must not start with a digit."));
        }
        if self.decoder.character().is_char('_') {
            return Err(self
                .decoder
                .syntax_error("Regular names must not start with an underscore."));
        }
        if self.decoder.character().is_char('.') {
            return Err(self
                .decoder
                .syntax_error("Name path must not contain multiple subsequent separators."));
        }
        Err(self
            .decoder
            .syntax_error("Expected regular name, text name or index but got something else."))
    }

    fn expect_name_separator_or_end(&mut self) -> Result<()> {
        self.skip_spacing()?;
        if !(self.decoder.character().is_char('.') || self.decoder.character().is_end()) {
            return Err(self.decoder.syntax_error(
                "Unexpected character after the last element. Expected name separator or the end of the path.",
            ));
        }
        Ok(())
    }

    fn expect_name_separator_index_or_end(&mut self) -> Result<()> {
        self.skip_spacing()?;
        if !(self.decoder.character().is_char('.')
            || self.decoder.character().is_char('[')
            || self.decoder.character().is_end())
        {
            return Err(self.decoder.syntax_error(
                "Unexpected character after the last element. Expected name separator or the end of the path.",
            ));
        }
        Ok(())
    }

    fn expect_generic_index(&mut self) -> Result<usize> {
        self.decoder.next()?; // Skip the opening bracket.
        self.skip_spacing()?;
        let result = parse_number(
            &mut self.decoder,
            NumberBase::Decimal,
            Sign::Positive,
            NumberSeparators::Yes,
            0,
        )?;
        self.skip_spacing()?;
        if !self.decoder.character().is_char(']') {
            return Err(self
                .decoder
                .syntax_error("An index must end with a closing bracket."));
        }
        self.decoder.next()?;
        usize::try_from(result.value)
            .map_err(|_| self.decoder.syntax_error("Index values must not be negative."))
    }

    fn expect_regular_name(&mut self) -> Result<Name> {
        let result = expect_regular_or_meta_name(&mut self.decoder, AcceptedNameEnd::NamePath)?;
        self.expect_name_separator_index_or_end()?;
        self.after_first_element = true;
        Ok(Name::regular_normalized(result.name))
    }

    fn expect_text_name_or_index(&mut self) -> Result<Name> {
        self.decoder.next()?; // Skip the opening quote.
        let mut text = String::new();
        parse_text(&mut self.decoder, &mut text)?;
        if text.is_empty() {
            // An empty string must be a text index.
            if !self.decoder.character().is_char('[') {
                return Err(self
                    .decoder
                    .syntax_error("Empty text names are not allowed, unless followed by an index."));
            }
            let index = self.expect_generic_index()?;
            self.expect_name_separator_or_end()?;
            self.after_first_element = true;
            return Ok(Name::text_index(index));
        }
        self.expect_name_separator_or_end()?;
        self.after_first_element = true;
        Name::text(text)
    }

    fn expect_index(&mut self) -> Result<Name> {
        let index = self.expect_generic_index()?;
        self.expect_name_separator_index_or_end()?;
        self.after_first_element = true;
        Ok(Name::index(index))
    }

    fn skip_spacing(&mut self) -> Result<()> {
        while self.decoder.character().is_class(CharClass::Spacing) {
            self.decoder.next()?;
        }
        Ok(())
    }
}

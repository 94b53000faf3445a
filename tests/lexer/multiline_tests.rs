use elcl::error::ErrorCategory;
use elcl::lexer::Lexer;
use elcl::token::{LexerToken, TokenContent};
use elcl::token_type::TokenType;

fn lex(input: &str) -> Vec<LexerToken> {
    Lexer::from_text(input).tokenize().unwrap()
}

fn types(tokens: &[LexerToken]) -> Vec<TokenType> {
    tokens.iter().map(|token| token.token_type).collect()
}

fn content_lines(tokens: &[LexerToken], content_type: TokenType) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| token.token_type == content_type)
        .map(|token| match &token.content {
            TokenContent::Text(text) => text.clone(),
            other => panic!("unexpected content {:?}", other),
        })
        .collect()
}

#[test]
fn multi_line_text_with_indentation_pattern() {
    let input = "msg:\n  \"\"\"\n  hello  \n  world\n  \"\"\"\n";
    let tokens = lex(input);
    assert_eq!(
        types(&tokens),
        vec![
            TokenType::RegularName,
            TokenType::NameValueSeparator,
            TokenType::LineBreak,
            TokenType::Indentation,
            TokenType::MultiLineTextOpen,
            TokenType::LineBreak,
            TokenType::Indentation,
            TokenType::MultiLineText,
            TokenType::Spacing,
            TokenType::LineBreak,
            TokenType::Indentation,
            TokenType::MultiLineText,
            TokenType::LineBreak,
            TokenType::Indentation,
            TokenType::MultiLineTextClose,
            TokenType::LineBreak,
            TokenType::EndOfData,
        ]
    );
    // Trailing spaces are stripped from the content line.
    assert_eq!(
        content_lines(&tokens, TokenType::MultiLineText),
        vec!["hello".to_string(), "world".to_string()]
    );
    let rebuilt: String = tokens.iter().map(|token| token.raw_text.as_str()).collect();
    assert_eq!(rebuilt, input);
}

#[test]
fn indentation_mismatch_is_rejected() {
    let input = "msg:\n  \"\"\"\n  hello\n   world\n  \"\"\"\n";
    let error = Lexer::from_text(input).tokenize().unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Indentation);
}

#[test]
fn tabs_and_spaces_must_match_exactly() {
    let input = "msg:\n\t\"\"\"\n  hello\n\t\"\"\"\n";
    let error = Lexer::from_text(input).tokenize().unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Indentation);
}

#[test]
fn empty_lines_inside_blocks() {
    let input = "msg:\n  \"\"\"\n  a\n\n  b\n  \"\"\"\n";
    let tokens = lex(input);
    assert_eq!(
        content_lines(&tokens, TokenType::MultiLineText),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn escapes_in_multi_line_text() {
    let input = "msg:\n  \"\"\"\n  a\\tb\n  \"\"\"\n";
    let tokens = lex(input);
    assert_eq!(
        content_lines(&tokens, TokenType::MultiLineText),
        vec!["a\tb".to_string()]
    );
}

#[test]
fn multi_line_code_with_language() {
    let input = "code:\n  ```Rust\n  fn main() {}\n  ```\n";
    let tokens = lex(input);
    let language = tokens
        .iter()
        .find(|token| token.token_type == TokenType::MultiLineCodeLanguage)
        .unwrap();
    assert_eq!(language.content, TokenContent::Text("rust".to_string()));
    assert_eq!(
        content_lines(&tokens, TokenType::MultiLineCode),
        vec!["fn main() {}".to_string()]
    );
}

#[test]
fn multi_line_code_keeps_escapes_verbatim() {
    let input = "code:\n  ```\n  let s = \"\\n\";\n  ```\n";
    let tokens = lex(input);
    assert_eq!(
        content_lines(&tokens, TokenType::MultiLineCode),
        vec!["let s = \"\\n\";".to_string()]
    );
}

#[test]
fn multi_line_regex_allows_comments() {
    let input = "pattern:\n  ///\n  ^start # match the line start\n  ///\n";
    let tokens = lex(input);
    assert_eq!(
        content_lines(&tokens, TokenType::MultiLineRegex),
        vec!["^start".to_string()]
    );
    assert!(tokens
        .iter()
        .any(|token| token.token_type == TokenType::Comment));
}

#[test]
fn multi_line_bytes_with_format() {
    let input = "data:\n  <<<hex\n  c814 01\n  >>>\n";
    let tokens = lex(input);
    let format = tokens
        .iter()
        .find(|token| token.token_type == TokenType::MultiLineBytesFormat)
        .unwrap();
    assert_eq!(format.content, TokenContent::Text("hex".to_string()));
    let bytes = tokens
        .iter()
        .find(|token| token.token_type == TokenType::MultiLineBytes)
        .unwrap();
    assert_eq!(bytes.content, TokenContent::Bytes(vec![0xc8, 0x14, 0x01]));
}

#[test]
fn multi_line_bytes_without_format() {
    let input = "data:\n  <<<\n  00ff\n  >>>\n";
    let tokens = lex(input);
    assert!(!tokens
        .iter()
        .any(|token| token.token_type == TokenType::MultiLineBytesFormat));
    let bytes = tokens
        .iter()
        .find(|token| token.token_type == TokenType::MultiLineBytes)
        .unwrap();
    assert_eq!(bytes.content, TokenContent::Bytes(vec![0x00, 0xff]));
}

#[test]
fn unsupported_bytes_format() {
    let input = "data:\n  <<<base64\n  aGVsbG8=\n  >>>\n";
    let error = Lexer::from_text(input).tokenize().unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Unsupported);
}

#[test]
fn odd_hex_digit_at_line_end() {
    let input = "data:\n  <<<\n  c8 1\n  >>>\n";
    let error = Lexer::from_text(input).tokenize().unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn unterminated_block_hits_end_of_data() {
    let input = "msg:\n  \"\"\"\n  hello\n";
    let error = Lexer::from_text(input).tokenize().unwrap_err();
    assert_eq!(error.category(), ErrorCategory::UnexpectedEnd);
}

#[test]
fn content_after_opening_triple_is_rejected() {
    let input = "msg:\n  \"\"\"inline\n  \"\"\"\n";
    let error = Lexer::from_text(input).tokenize().unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn value_with_block_on_same_line() {
    let input = "msg: \"\"\"\n  one\n  \"\"\"\n";
    let tokens = lex(input);
    assert_eq!(
        content_lines(&tokens, TokenType::MultiLineText),
        vec!["one".to_string()]
    );
}

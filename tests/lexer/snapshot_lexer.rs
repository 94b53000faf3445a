use elcl::lexer::Lexer;
use insta::assert_snapshot;

fn tokenize_to_string(input: &str) -> String {
    let mut lexer = Lexer::from_text(input);
    let tokens = lexer.tokenize().unwrap();

    let mut output = Vec::new();
    for token in tokens {
        output.push(format!(
            "{}:{} {} {:?}",
            token.begin.line, token.begin.column, token.token_type, token.raw_text
        ));
    }
    output.join("\n")
}

#[test]
fn snapshot_simple_value() {
    let output = tokenize_to_string("server: \"hello\"\n");
    assert_snapshot!(output, @r#"
    1:1 RegularName "server"
    1:7 NameValueSeparator ":"
    1:8 Spacing " "
    1:9 Text "\"hello\""
    1:16 LineBreak "\n"
    0:0 EndOfData ""
    "#);
}

#[test]
fn snapshot_section_header() {
    let output = tokenize_to_string("[main]\n");
    assert_snapshot!(output, @r#"
    1:1 SectionMapOpen "["
    1:2 RegularName "main"
    1:6 SectionMapClose "]"
    1:7 LineBreak "\n"
    0:0 EndOfData ""
    "#);
}

#[test]
fn snapshot_time_delta() {
    let output = tokenize_to_string("timeout: 500 ms\n");
    assert_snapshot!(output, @r#"
    1:1 RegularName "timeout"
    1:8 NameValueSeparator ":"
    1:9 Spacing " "
    1:10 TimeDelta "500 ms"
    1:16 LineBreak "\n"
    0:0 EndOfData ""
    "#);
}

#[test]
fn snapshot_comment_line() {
    let output = tokenize_to_string("# configuration\nport = 1\n");
    assert_snapshot!(output, @r##"
    1:1 Comment "# configuration"
    1:16 LineBreak "\n"
    2:1 RegularName "port"
    2:5 Spacing " "
    2:6 NameValueSeparator "="
    2:7 Spacing " "
    2:8 Integer "1"
    2:9 LineBreak "\n"
    0:0 EndOfData ""
    "##);
}

use elcl::error::ErrorCategory;
use elcl::name::{Name, NameType};
use elcl::name_path::NamePath;

#[test]
fn parse_simple_path() {
    let path = NamePath::from_text("main.server.port").unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path.at(0).unwrap().as_text(), "main");
    assert_eq!(path.at(2).unwrap().as_text(), "port");
    assert!(path.iter().all(Name::is_regular));
}

#[test]
fn parse_path_with_index() {
    let path = NamePath::from_text("main.server[2].path").unwrap();
    assert_eq!(path.len(), 4);
    assert_eq!(path.at(2).unwrap().name_type(), NameType::Index);
    assert_eq!(path.at(2).unwrap().as_index(), Some(2));
    assert_eq!(path.to_text(), "main.server[2].path");
}

#[test]
fn parse_text_name() {
    let path = NamePath::from_text("server.\"db-1\"").unwrap();
    assert_eq!(path.at(1).unwrap().name_type(), NameType::Text);
    assert_eq!(path.at(1).unwrap().as_text(), "db-1");
}

#[test]
fn parse_text_index() {
    let path = NamePath::from_text("\"\"[1]").unwrap();
    assert_eq!(path.len(), 1);
    assert_eq!(path.at(0).unwrap().name_type(), NameType::TextIndex);
    assert_eq!(path.at(0).unwrap().as_index(), Some(1));
    assert_eq!(path.to_text(), "\"\"[1]");
}

#[test]
fn names_are_normalised_while_parsing() {
    let path = NamePath::from_text("Main.Server Port").unwrap();
    assert_eq!(path.to_text(), "main.server_port");
}

#[test]
fn meta_names_in_paths() {
    let path = NamePath::from_text("@version").unwrap();
    assert!(path.at(0).unwrap().is_meta());
}

#[test]
fn spacing_around_separators_is_ignored() {
    let path = NamePath::from_text("main . server [ 2 ]").unwrap();
    assert_eq!(path.to_text(), "main.server[2]");
}

#[test]
fn round_trip_is_stable() {
    for text in [
        "main.server[2].path",
        "\"text name\".sub",
        "\"\"[3]",
        "a.b.c[0][1]",
        "\"with \\\"quote\\\"\"",
    ] {
        let parsed = NamePath::from_text(text).unwrap();
        let canonical = parsed.to_text();
        let reparsed = NamePath::from_text(&canonical).unwrap();
        assert_eq!(parsed, reparsed, "round trip of {}", text);
        assert_eq!(canonical, reparsed.to_text());
    }
}

#[test]
fn leading_separator_is_rejected() {
    let error = NamePath::from_text(".relative.path").unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn trailing_separator_is_rejected() {
    let error = NamePath::from_text("main.").unwrap_err();
    assert_eq!(error.category(), ErrorCategory::UnexpectedEnd);
}

#[test]
fn double_separator_is_rejected() {
    let error = NamePath::from_text("main..server").unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn index_after_separator_is_rejected() {
    let error = NamePath::from_text("main.[2]").unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn empty_text_name_without_index_is_rejected() {
    let error = NamePath::from_text("\"\".path").unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn digit_start_is_rejected() {
    let error = NamePath::from_text("9lives").unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn over_long_path_is_rejected() {
    let text = "a".repeat(5000);
    let error = NamePath::from_text(&text).unwrap_err();
    assert_eq!(error.category(), ErrorCategory::LimitExceeded);
}

#[test]
fn container_operations() {
    let mut path = NamePath::from_text("a.b[1].c").unwrap();
    assert!(path.contains_index());
    assert!(!path.contains_text());
    assert_eq!(path.parent().to_text(), "a.b[1]");
    assert_eq!(path.front().unwrap().as_text(), "a");
    assert_eq!(path.back().unwrap().as_text(), "c");
    path.pop_back();
    path.push(Name::text("x y").unwrap());
    assert_eq!(path.to_text(), "a.b[1].\"x y\"");
    assert!(path.contains_text());
}

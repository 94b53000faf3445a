use std::env;

use crate::error::Error;

/// Render an error against the document text, with a source line excerpt
/// and a caret pointing at the failing column.
pub fn render(error: &Error, source: Option<&str>) -> String {
    let mut out = String::new();
    let use_color = env::var_os("NO_COLOR").is_none();
    let yellow = "\u{1b}[33m";
    let reset = "\u{1b}[0m";

    if use_color {
        out.push_str(yellow);
    }
    out.push_str(&format!(
        "-- {} -- [E{:03}]\n",
        error.category().name().to_uppercase(),
        error.category().code()
    ));
    if use_color {
        out.push_str(reset);
    }

    out.push('\n');
    out.push_str(error.message());
    out.push('\n');

    let position = error.location().position();
    if !position.is_undefined() {
        if let Some(line_text) = source.and_then(|src| get_source_line(src, position.line)) {
            let line_str = position.line.to_string();
            let gutter_width = line_str.len();
            let caret_indent = (position.column as usize)
                .saturating_sub(1)
                .min(line_text.chars().count());
            out.push('\n');
            out.push_str(&format!(
                "{:>width$} | {}\n",
                position.line,
                line_text,
                width = gutter_width
            ));
            out.push_str(&format!(
                "{:>width$} | {}",
                "",
                " ".repeat(caret_indent),
                width = gutter_width
            ));
            if use_color {
                out.push_str(yellow);
            }
            out.push('^');
            if use_color {
                out.push_str(reset);
            }
            out.push('\n');
        }
        out.push_str(&format!("\nAt {}\n", error.location()));
    }

    out
}

fn get_source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }
    source.lines().nth(line as usize - 1)
}

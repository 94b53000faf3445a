use std::env;
use std::fs;
use std::process::ExitCode;

use elcl::diagnostic;
use elcl::lexer::Lexer;
use elcl::source::SourceIdentifier;

/// Lex a configuration file and dump the token stream as JSON lines.
fn main() -> ExitCode {
    let Some(path) = env::args().nth(1) else {
        eprintln!("usage: elcl-tokens <file>");
        return ExitCode::from(2);
    };
    let source = match fs::read(&path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("cannot read {}: {}", path, error);
            return ExitCode::FAILURE;
        }
    };
    let text = String::from_utf8_lossy(&source).into_owned();
    let mut lexer = Lexer::new(source, SourceIdentifier::for_file(&path));
    match lexer.tokenize() {
        Ok(tokens) => {
            for token in &tokens {
                match serde_json::to_string(token) {
                    Ok(line) => println!("{}", line),
                    Err(error) => {
                        eprintln!("cannot serialize token: {}", error);
                        return ExitCode::FAILURE;
                    }
                }
            }
            if let Some(digest) = lexer.digest_hex() {
                eprintln!("sha256: {}", digest);
            }
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", diagnostic::render(&error, Some(&text)));
            ExitCode::FAILURE
        }
    }
}

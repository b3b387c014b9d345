//! Parses a JSON file (or standard input) and prints the value tree.
//!
//! ```text
//! cargo run --example parse_file -- document.json
//! cargo run --example parse_file -- --strict < document.json
//! ```
#![allow(missing_docs)]

use std::{
    io::{self, Read},
    process::ExitCode,
};

use pjson::ParserOptions;

fn main() -> ExitCode {
    let mut options = ParserOptions::default();
    let mut path = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--strict" => options = ParserOptions::strict(),
            "--trailing-commas" => options.allow_trailing_commas = true,
            "--unbounded-escapes" => options.unbounded_unicode_escapes = true,
            _ => path = Some(arg),
        }
    }

    let input = match &path {
        Some(path) => std::fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).map(|_| buf)
        }
    };
    let input = match input {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: cannot read input: {err}");
            return ExitCode::FAILURE;
        }
    };

    match pjson::parse_with_options(&input, options) {
        Ok(value) => {
            println!("{value:#?}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!(
                "{}:{}:{}: {err}",
                path.as_deref().unwrap_or("<stdin>"),
                err.line(),
                err.column()
            );
            ExitCode::FAILURE
        }
    }
}

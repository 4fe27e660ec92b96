//! Command-line interface for parsekit
//! This binary is used to inspect token streams produced by the parsekit tokenizer.
//!
//! Usage:
//!   parsekit tokenize `<path>` [--keyword `<kw>`]... [--symbol `<sym>`]... [--format `<format>`]

use std::collections::BTreeSet;
use std::io::Read;
use std::process;

use clap::{Arg, ArgAction, Command};

use parsekit::{Diagnostic, Tokenizer};

fn main() {
    let matches = Command::new("parsekit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting parsekit token streams")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokenize")
                .about("Tokenize a file and print the token stream")
                .arg(
                    Arg::new("path")
                        .help("Path to the input file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("keyword")
                        .long("keyword")
                        .short('k')
                        .action(ArgAction::Append)
                        .help("Keyword literal to reserve (repeatable)"),
                )
                .arg(
                    Arg::new("symbol")
                        .long("symbol")
                        .short('s')
                        .action(ArgAction::Append)
                        .help("Symbol literal to recognize (repeatable)"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format ('json' or 'plain')")
                        .default_value("json"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("tokenize", tokenize_matches)) => {
            let path = tokenize_matches.get_one::<String>("path").unwrap();
            let keywords = literal_set(tokenize_matches.get_many::<String>("keyword"));
            let symbols = literal_set(tokenize_matches.get_many::<String>("symbol"));
            let format = tokenize_matches.get_one::<String>("format").unwrap();
            handle_tokenize_command(path, &keywords, &symbols, format);
        }
        _ => unreachable!(),
    }
}

fn literal_set(values: Option<clap::parser::ValuesRef<'_, String>>) -> BTreeSet<String> {
    values
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Handle the tokenize command
fn handle_tokenize_command(
    path: &str,
    keywords: &BTreeSet<String>,
    symbols: &BTreeSet<String>,
    format: &str,
) {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {}: {}", path, e);
            process::exit(1);
        }
    };

    let tokenizer = Tokenizer::new(keywords, symbols);
    let stream = match tokenizer.tokenize(&source) {
        Ok(stream) => stream,
        Err(e) => {
            eprintln!("{}", Diagnostic::from(e));
            process::exit(1);
        }
    };

    match format {
        "json" => match serde_json::to_string_pretty(stream.tokens()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing tokens: {}", e);
                process::exit(1);
            }
        },
        "plain" => {
            for token in stream.tokens() {
                println!(
                    "{:>5}..{:<5} {:<12} {:?}",
                    token.start,
                    token.end,
                    token.class.to_string(),
                    token.text
                );
            }
        }
        other => {
            eprintln!("Unknown format: {}", other);
            process::exit(2);
        }
    }
}

fn read_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

//! Tokenizer behavior against hand-picked sources
//!
//! Covers class priority, whole-word keywords, longest-symbol-first
//! disambiguation, lexical errors, and the end-of-input sentinel contract.

use std::collections::BTreeSet;

use rstest::rstest;

use parsekit::{LexError, Token, TokenClass, Tokenizer};

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn tokenize(source: &str, keywords: &[&str], symbols: &[&str]) -> Vec<Token> {
    Tokenizer::new(&set(keywords), &set(symbols))
        .tokenize(source)
        .expect("test source lexes")
        .tokens()
        .to_vec()
}

#[test]
fn test_every_token_mirrors_its_source_slice() {
    let source = "let x = 3.25 # bind\nif x == 3.25 { \"yes\" }";
    let tokens = tokenize(
        source,
        &["let", "if"],
        &["=", "==", "{", "}"],
    );
    for token in &tokens {
        assert_eq!(&source[token.start..token.end], token.text);
    }
    assert!(tokens.last().expect("sentinel").is_end_of_input());
}

#[test]
fn test_class_priority_over_one_line() {
    let tokens = tokenize("3 3.5 let letter \"s\" ==", &["let"], &["=", "=="]);
    let classes: Vec<TokenClass> = tokens.iter().map(|t| t.class).collect();
    assert_eq!(
        classes,
        vec![
            TokenClass::Int,
            TokenClass::Float,
            TokenClass::Keyword,
            TokenClass::Identifier,
            TokenClass::Str,
            TokenClass::Symbol,
            TokenClass::EndOfInput,
        ]
    );
}

#[rstest]
#[case("==", "==")]
#[case("= =", "=")]
#[case("<=", "<=")]
#[case("<", "<")]
#[case("==<", "==")]
fn test_symbol_disambiguation(#[case] source: &str, #[case] first: &str) {
    let tokens = tokenize(source, &[], &["=", "==", "<", "<="]);
    assert_eq!(tokens[0].class, TokenClass::Symbol);
    assert_eq!(tokens[0].text, first);
}

#[test]
fn test_overlapping_symbols_never_split() {
    // "==" must be one two-character token, never two "=" tokens.
    let tokens = tokenize("==", &[], &["=", "=="]);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "==");
}

#[test]
fn test_keywords_are_reserved_from_identifiers() {
    let tokens = tokenize("let lettuce", &["let"], &[]);
    assert_eq!(tokens[0].class, TokenClass::Keyword);
    assert_eq!(tokens[1].class, TokenClass::Identifier);
    assert_eq!(tokens[1].text, "lettuce");
}

#[test]
fn test_lexical_error_location() {
    let err = Tokenizer::new(&set(&[]), &set(&[]))
        .tokenize("@@@")
        .unwrap_err();
    let LexError::UnrecognizedToken(token) = err;
    assert_eq!(token.class, TokenClass::Error);
    assert_eq!(token.text, "@@@");
    assert_eq!(token.start, 0);
    assert_eq!(token.line_number, 1);
    assert_eq!(token.column_number, 1);
}

#[test]
fn test_lexical_error_covers_maximal_run() {
    let err = Tokenizer::new(&set(&[]), &set(&[]))
        .tokenize("ok then @@%$ more")
        .unwrap_err();
    let LexError::UnrecognizedToken(token) = err;
    assert_eq!(token.text, "@@%$");
    assert_eq!(token.start, 8);
    assert_eq!(token.column_number, 9);
}

#[test]
fn test_end_of_input_peek_is_idempotent() {
    let mut stream = Tokenizer::new(&set(&[]), &set(&[]))
        .tokenize("one")
        .expect("lexes");
    stream.consume();
    let sentinel = stream.peek().clone();
    for _ in 0..8 {
        assert_eq!(stream.peek(), &sentinel);
        assert_eq!(&stream.consume(), &sentinel);
    }
}

#[test]
fn test_multiline_positions() {
    let tokens = tokenize("first\nsecond third\n", &[], &[]);
    assert_eq!(tokens[0].line_number, 1);
    assert_eq!(tokens[0].column_number, 1);
    assert_eq!(tokens[1].line_number, 2);
    assert_eq!(tokens[1].column_number, 1);
    assert_eq!(tokens[2].line_number, 2);
    assert_eq!(tokens[2].column_number, 8);
    assert_eq!(tokens[2].line, "second third");
}

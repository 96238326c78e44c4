//! Shared helpers for the integration tests.

use std::io::Write;
use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;
use shunt_eval::Evaluation;

static INIT: Once = Once::new();

/// Initialize the logger for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        Builder::new()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .init();
    });
}

/// Run the three stages by hand, panicking on any failure.
pub fn evaluate(input: &str, use_cache: bool) -> Evaluation {
    init_test_logger();
    let tokens = shunt_lexer::tokenize(input)
        .unwrap_or_else(|e| panic!("tokenize {input:?}: {e}"));
    let postfix = shunt_parser::parse_to_postfix(tokens)
        .unwrap_or_else(|e| panic!("parse {input:?}: {e}"));
    shunt_eval::evaluate(postfix, use_cache).unwrap_or_else(|e| panic!("evaluate {input:?}: {e}"))
}

/// Postfix sequence as space separated token text.
pub fn postfix_text(input: &str) -> String {
    let tokens = shunt_lexer::tokenize(input).unwrap_or_else(|e| panic!("tokenize {input:?}: {e}"));
    shunt_parser::parse_to_postfix(tokens)
        .unwrap_or_else(|e| panic!("parse {input:?}: {e}"))
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

//! # aplish
//!
//! aplish is an APL-flavored calculator written in Rust. Statements are read
//! right to left with a single precedence level, operands are
//! arbitrary-precision integers or vectors of them, and vector operations
//! broadcast elementwise.
//!
//! ```
//! use aplish::new_session;
//!
//! let mut session = new_session();
//! assert_eq!(session.execute("1 2 3 * 2").unwrap().to_text(), "2 4 6");
//! assert_eq!(session.execute("1 2 3 +.* 4 5 6").unwrap().to_text(), "32");
//! assert_eq!(session.execute("5 - 3 - 1").unwrap().to_text(), "3");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning, parsing
/// or evaluating a statement, and the [`error::ErrorKind`] that classifies
/// them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches the position within the statement for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates scanning, parsing and evaluation of statements.
///
/// This module ties together the lexer, the parser, the value model and the
/// session state.
pub mod interpreter;
/// The binary and unary operators of the language.
pub mod operator;
/// General utilities for safe numeric conversion.
pub mod util;

pub use error::{ErrorKind, EvalError};
pub use interpreter::{evaluator::core::Session, value::core::Value};

/// Creates a session with an empty environment and an entropy-seeded random
/// source.
#[must_use]
pub fn new_session() -> Session {
    Session::new()
}

/// Runs every non-blank line of `source` as a statement in one fresh session.
///
/// Execution stops at the first failing statement. On success the value of the
/// last statement is returned, or `None` if there were no statements.
///
/// # Parameters
/// - `source`: The script, one statement per line.
/// - `seed`: Seeds the roll operator when given.
///
/// # Examples
/// ```
/// use aplish::{ErrorKind, Value, run_script};
///
/// let source = "x = 1 2 3\ny = x * 2\nx +.* y";
/// assert_eq!(run_script(source, None).unwrap(), Some(Value::from(28)));
///
/// // 'z' is never bound
/// let err = run_script("x = 1\nx + z", None).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UndefinedVariable);
/// ```
pub fn run_script(source: &str, seed: Option<u64>) -> Result<Option<Value>, EvalError> {
    let mut session = seed.map_or_else(Session::new, Session::with_seed);

    let mut result = None;
    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        result = Some(session.execute(line)?);
    }

    Ok(result)
}

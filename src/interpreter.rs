/// The evaluator module computes values.
///
/// It owns the [`evaluator::core::Session`] (variable environment and random
/// source) and implements every operator on scalars and vectors: promotion,
/// broadcasting, the dot product, negation, rolling and indexing.
///
/// # Responsibilities
/// - Applies unary and binary operators and shrinks their results.
/// - Reports shape mismatches and domain violations.
/// - Commits a statement's assignments only when it succeeds.
pub mod evaluator;
/// The lexer module tokenizes a statement.
///
/// The lexer reads raw text and produces tokens lazily from a cursor:
/// numbers, identifiers, operators, delimiters, whitespace and line breaks.
///
/// # Responsibilities
/// - Recognizes overlapping operators (`*` and `**`, `+` and `+.*`).
/// - Offers peek and advance read modes that skip whitespace.
/// - Reports unrecognized characters with their position.
pub mod lexer;
/// The parser module reduces a token stream to a value.
///
/// Parsing and evaluation happen in one pass: every grammar rule returns the
/// value it denotes instead of a syntax tree.
///
/// # Responsibilities
/// - Implements the right-associative, single-precedence grammar.
/// - Handles assignment, variable lookup, grouping and indexing.
/// - Validates syntax, reporting errors with their position.
pub mod parser;
/// The value module defines the runtime data types.
///
/// This module declares scalars and vectors of arbitrary-precision integers,
/// the promotion rule that brings two values to a common shape and the shrink
/// rule that turns one-element vectors back into scalars.
pub mod value;

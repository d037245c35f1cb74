//! Module for parsing the infix formulas of qualitative function terms into AST values

use crate::qualitative::function_term::FunctionTerm;
use thiserror::Error;

pub use lexer::LexerError;
pub use parser::ParseError;

mod lexer;
pub mod parser;
mod token;

/// Parse an infix function term formula into a function term tree
///
/// Comparisons are written `species==level`, and joined with `AND`, `Xor` and `OR`
/// (binding from strongest to weakest). Chains of one operator become a single node,
/// parenthesized groups are kept as nested nodes.
///
/// # Parameters
/// - `input`: &str representing the function term formula
///
/// # Returns
/// Parse result which is
/// - `Ok`: The root node of the function term tree
/// - `Err`: The FormulaParseError describing the issue with the formula
///
/// # Examples
/// ```rust
/// use lawgen_core::io::formula_parse::parse_function_term;
/// let term = parse_function_term("(A==1 OR B==1) AND C==0").unwrap();
/// assert_eq!(term.species(), vec!["A", "B", "C"]);
/// ```
pub fn parse_function_term(input: &str) -> Result<FunctionTerm, FormulaParseError> {
    // Convert the formula into tokens
    let mut lexer = lexer::Lexer::new(input);
    let tokens = lexer.lex()?;

    // Parse those tokens into a function term tree
    let mut parser = parser::FormulaParser::new(tokens);
    let term = parser.parse()?;
    Ok(term)
}

/// Enum representing possible lex and parse errors
#[derive(Debug, Error, PartialEq, Clone)]
pub enum FormulaParseError {
    /// Lexing Error
    #[error("Error occurred during lexing (conversion of formula to tokens): {0}")]
    LexingError(#[from] LexerError),
    /// Parsing Error
    #[error("Error occurred during parsing (conversion of tokens to function term): {0}")]
    ParsingError(#[from] ParseError),
}

//! Module providing Token struct for lexing

/// Represents Tokens in a function term formula
#[derive(Debug, PartialEq, Clone, Eq, Hash)]
pub enum Token {
    Identifier(String),
    Integer(u32),
    EqualEqual,
    And,
    Or,
    Xor,
    LeftParen,
    RightParen,
    Eof,
}

//! Lex a function term formula into a series of tokens for later parsing
use thiserror::Error;

use crate::io::formula_parse::token::Token;

pub struct Lexer {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
}

impl Lexer {
    pub fn new(source: &str) -> Self {
        Lexer {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Convert the source into tokens, ending with [`Token::Eof`]
    pub fn lex(&mut self) -> Result<Vec<Token>, LexerError> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token()?;
        }
        self.tokens.push(Token::Eof);
        Ok(std::mem::take(&mut self.tokens))
    }

    fn scan_token(&mut self) -> Result<(), LexerError> {
        let c: char = self.advance();
        match c {
            // Single Character Tokens
            '(' => self.add_token(Token::LeftParen),
            ')' => self.add_token(Token::RightParen),
            '=' => {
                if self.peek() != '=' {
                    return Err(LexerError::InvalidToken {
                        position: self.start,
                        found: c,
                    });
                }
                self.advance();
                self.add_token(Token::EqualEqual)
            }
            // Identifiers and Operators
            'a'..='z' | 'A'..='Z' | '_' => self.read_identifier()?,
            '0'..='9' => self.read_integer()?,
            // Whitespace
            ' ' | '\r' | '\n' | '\t' => {}
            found => {
                return Err(LexerError::InvalidToken {
                    position: self.start,
                    found,
                })
            }
        };
        Ok(())
    }

    fn advance(&mut self) -> char {
        let char_at_current = self.source[self.current];
        self.current += 1;
        char_at_current
    }

    fn read_identifier(&mut self) -> Result<(), LexerError> {
        while Lexer::is_alphanumeric(self.peek()) {
            self.advance();
        }
        let text: String = self.source[self.start..self.current].iter().collect();
        match text.as_str() {
            "and" | "And" | "AND" => self.add_token(Token::And),
            "or" | "Or" | "OR" => self.add_token(Token::Or),
            "Xor" | "XOR" => self.add_token(Token::Xor),
            // Name of the exclusive or function, never an operator
            "xor" => return Err(LexerError::ReservedWord(text)),
            identifier => self.add_token(Token::Identifier(identifier.to_string())),
        }
        Ok(())
    }

    fn read_integer(&mut self) -> Result<(), LexerError> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
        let text: String = self.source[self.start..self.current].iter().collect();
        let value = text
            .parse::<u32>()
            .map_err(|_| LexerError::InvalidLevel(text.clone()))?;
        self.add_token(Token::Integer(value));
        Ok(())
    }

    fn is_alphanumeric(c: char) -> bool {
        matches!(c, 'a'..='z' | 'A'..='Z' | '_' | '0'..='9')
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            return '\0';
        }
        self.source[self.current]
    }

    fn add_token(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

/// Enum representing possible lexing errors
#[derive(Debug, Error, PartialEq, Clone)]
pub enum LexerError {
    #[error("Invalid character `{found}` at position {position}")]
    InvalidToken { position: usize, found: char },
    #[error("`{0}` is a reserved function name, write exclusive or as `Xor`")]
    ReservedWord(String),
    #[error("Level `{0}` is not a valid non-negative integer")]
    InvalidLevel(String),
}

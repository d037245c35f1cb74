use thiserror::Error;

use crate::io::formula_parse::token::Token;
use crate::qualitative::function_term::{FunctionTerm, TermOperator};
/*
Function Term Grammar:
expression -> or
or -> xor ("OR" xor)* ;
xor -> and ("Xor" and)* ;
and -> primary ("AND" primary)* ;
primary -> IDENTIFIER "==" INTEGER | "(" expression ")" ;

e.g. (A==1 OR B==1) AND C==0
 */

/// Function term parser
pub struct FormulaParser {
    /// Vector of tokens from the formula
    tokens: Vec<Token>,
    /// Current token being processed
    current: usize,
}

impl FormulaParser {
    /// Create a new FormulaParser
    pub fn new(tokens: Vec<Token>) -> FormulaParser {
        FormulaParser { tokens, current: 0 }
    }

    // region Parsing Functions

    /// Parse the token vector into a function term AST
    pub fn parse(&mut self) -> Result<FunctionTerm, ParseError> {
        let term = self.or()?;
        if !self.is_at_end() {
            // If entire expression has not been parsed, and error has occured
            return Err(ParseError::EarlyTermination);
        }
        Ok(term)
    }

    fn or(&mut self) -> Result<FunctionTerm, ParseError> {
        self.chain(Token::Or, TermOperator::Or, FormulaParser::xor)
    }

    fn xor(&mut self) -> Result<FunctionTerm, ParseError> {
        self.chain(Token::Xor, TermOperator::Xor, FormulaParser::and)
    }

    fn and(&mut self) -> Result<FunctionTerm, ParseError> {
        self.chain(Token::And, TermOperator::And, FormulaParser::primary)
    }

    /// Parse operands joined by the same operator into a single operation node
    fn chain(
        &mut self,
        token: Token,
        operator: TermOperator,
        operand: fn(&mut FormulaParser) -> Result<FunctionTerm, ParseError>,
    ) -> Result<FunctionTerm, ParseError> {
        let mut operands = vec![operand(self)?];
        while self.match_token(&[token.clone()]) {
            operands.push(operand(self)?);
        }
        if operands.len() == 1 {
            return operands.pop().ok_or(ParseError::ExpectedExpression);
        }
        Ok(FunctionTerm::operation(operator, operands))
    }

    fn primary(&mut self) -> Result<FunctionTerm, ParseError> {
        if let Some(species) = self.match_identifier() {
            self.consume(Token::EqualEqual, "Expect '==' after species.")?;
            let level = match self.advance() {
                Token::Integer(level) => level,
                _ => return Err(ParseError::MissingToken("Expect level after '=='.".to_string())),
            };
            return Ok(FunctionTerm::level(&species, level));
        }

        if self.match_token(&[Token::LeftParen]) {
            let expr = self.or()?;
            self.consume(Token::RightParen, "Expect ')' after expression.")?;
            return Ok(expr);
        }

        Err(ParseError::ExpectedExpression)
    }

    // endregion Parsing Functions

    // region parsing helper functions

    /// Check whether the token at the current position matches one of the provided `tokens`,
    /// if it does advance [`self.current`] and return true, otherwise return false
    fn match_token(&mut self, tokens: &[Token]) -> bool {
        for t in tokens {
            if self.check(t) {
                self.advance();
                return true;
            }
        }
        false
    }

    /// If the current token is an identifier, advance and return it
    fn match_identifier(&mut self) -> Option<String> {
        if let Token::Identifier(id) = self.peek() {
            self.advance();
            return Some(id);
        }
        None
    }

    /// Check whether the current token matches the provided `token`
    fn check(&self, token: &Token) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.peek() == *token
    }

    /// Advance `self.current` one position unless at the end, then return the previous token
    fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek() == Token::Eof
    }

    /// Get a copy of the current token
    fn peek(&self) -> Token {
        self.tokens.get(self.current).cloned().unwrap_or(Token::Eof)
    }

    /// Get a copy of the previous token
    fn previous(&self) -> Token {
        match self.current.checked_sub(1) {
            Some(index) => self.tokens.get(index).cloned().unwrap_or(Token::Eof),
            None => Token::Eof,
        }
    }

    /// Check whether the current token matches an input token, if it matches advance to the
    /// next token, and if it doesn't return an error. Used mainly for matching parenthesis.
    fn consume(&mut self, token: Token, msg: &str) -> Result<Token, ParseError> {
        if self.check(&token) {
            return Ok(self.advance());
        }
        Err(ParseError::MissingToken(msg.to_string()))
    }

    // endregion parsing helper functions
}

/// Enum representing possible parse errors
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ParseError {
    /// Missing expected token (e.g. a right parenthesis)
    #[error("Missing expected token: {0}")]
    MissingToken(String),
    /// No expression found when one was expected
    #[error("No expression found, check that the formula is not empty")]
    ExpectedExpression,
    /// Expression was not completed when parsing terminated
    #[error("Parsing terminated early, check for a missing operator between two comparisons")]
    EarlyTermination,
}

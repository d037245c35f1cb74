//! Boolean function terms of qualitative transitions
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::io::formula_parse::{parse_function_term, FormulaParseError};

/// Representation of a function term as an AST
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionTerm {
    /// Logical operation on several terms (see [`TermOperation`])
    Operation(TermOperation),
    /// Terminal comparison of a species with a level, e.g. `A==1`
    Level(LevelComparison),
}

/// Logical operation joining any number of operands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermOperation {
    pub operator: TermOperator,
    pub operands: Vec<FunctionTerm>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TermOperator {
    And,
    Or,
    Xor,
}

impl TermOperator {
    /// Infix keyword of the operator
    ///
    /// Exclusive or is written `Xor`, the lowercase `xor` is the name of a function in SBML
    /// infix notation.
    pub fn keyword(&self) -> &'static str {
        match self {
            TermOperator::And => "AND",
            TermOperator::Or => "OR",
            TermOperator::Xor => "Xor",
        }
    }
}

/// Whether a qualitative species is at a level
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelComparison {
    pub species: String,
    pub level: u32,
}

impl FunctionTerm {
    /// Create a new level comparison node
    pub fn level(species: &str, level: u32) -> FunctionTerm {
        FunctionTerm::Level(LevelComparison {
            species: species.to_string(),
            level,
        })
    }

    /// Create a new operation node
    pub fn operation(operator: TermOperator, operands: Vec<FunctionTerm>) -> FunctionTerm {
        FunctionTerm::Operation(TermOperation { operator, operands })
    }

    /// Parse a function term from its infix formula
    ///
    /// # Examples
    /// ```rust
    /// use lawgen_core::qualitative::function_term::{FunctionTerm, TermOperator};
    /// let term = FunctionTerm::parse("A==1 AND (B==0 Xor B==1)").unwrap();
    /// let expected = FunctionTerm::operation(
    ///     TermOperator::And,
    ///     vec![
    ///         FunctionTerm::level("A", 1),
    ///         FunctionTerm::operation(
    ///             TermOperator::Xor,
    ///             vec![FunctionTerm::level("B", 0), FunctionTerm::level("B", 1)],
    ///         ),
    ///     ],
    /// );
    /// assert_eq!(term, expected);
    /// ```
    pub fn parse(formula: &str) -> Result<FunctionTerm, FormulaParseError> {
        parse_function_term(formula)
    }

    /// Generate the infix formula of the term, nested operations are parenthesized
    pub fn to_formula(&self) -> String {
        match self {
            FunctionTerm::Operation(op) => op
                .operands
                .iter()
                .map(|operand| match operand {
                    FunctionTerm::Operation(_) => format!("({})", operand.to_formula()),
                    FunctionTerm::Level(_) => operand.to_formula(),
                })
                .collect::<Vec<_>>()
                .join(&format!(" {} ", op.operator.keyword())),
            FunctionTerm::Level(comparison) => {
                format!("{}=={}", comparison.species, comparison.level)
            }
        }
    }

    /// Ids of the species the term compares, in order of first appearance
    pub fn species(&self) -> Vec<&str> {
        let mut species = Vec::new();
        self.collect_species(&mut species);
        species
    }

    fn collect_species<'a>(&'a self, species: &mut Vec<&'a str>) {
        match self {
            FunctionTerm::Operation(op) => {
                for operand in &op.operands {
                    operand.collect_species(species);
                }
            }
            FunctionTerm::Level(comparison) => {
                if !species.contains(&comparison.species.as_str()) {
                    species.push(&comparison.species);
                }
            }
        }
    }
}

impl Display for FunctionTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_formula())
    }
}

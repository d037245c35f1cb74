//! Formulas and the math-carrying parts of a network (rules, events, constraints, ...)
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A formula in infix notation, e.g. `kcat_r1 * E * S / (km_r1 + S)`
///
/// Only the identifiers a formula refers to are interpreted, formulas are never evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Math(String);

impl Math {
    pub fn new(formula: impl Into<String>) -> Self {
        Math(formula.into())
    }

    pub fn formula(&self) -> &str {
        &self.0
    }

    /// A formula without any content, as left behind by an incomplete kinetic law
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Identifiers referenced by the formula, in order of first occurrence
    ///
    /// # Examples
    /// ```rust
    /// use lawgen_core::network::math::Math;
    /// let math = Math::new("kf_r1 * A^2 - 1.5e3 * kr_r1 * B");
    /// assert_eq!(math.identifiers(), vec!["kf_r1", "A", "kr_r1", "B"]);
    /// ```
    pub fn identifiers(&self) -> Vec<&str> {
        let source = self.0.as_str();
        let bytes = source.as_bytes();
        let mut identifiers: Vec<&str> = Vec::new();
        let mut current = 0;
        while current < bytes.len() {
            let c = bytes[current];
            if c.is_ascii_alphabetic() || c == b'_' {
                let start = current;
                while current < bytes.len()
                    && (bytes[current].is_ascii_alphanumeric() || bytes[current] == b'_')
                {
                    current += 1;
                }
                let identifier = &source[start..current];
                if !identifiers.contains(&identifier) {
                    identifiers.push(identifier);
                }
            } else if c.is_ascii_digit() || c == b'.' {
                // Numbers, including exponents such as 1.5e-3
                current += 1;
                while current < bytes.len() {
                    let n = bytes[current];
                    if n.is_ascii_digit() || n == b'.' {
                        current += 1;
                    } else if (n == b'e' || n == b'E')
                        && current + 1 < bytes.len()
                        && (bytes[current + 1].is_ascii_digit()
                            || bytes[current + 1] == b'-'
                            || bytes[current + 1] == b'+')
                    {
                        current += 2;
                    } else {
                        break;
                    }
                }
            } else {
                current += 1;
            }
        }
        identifiers
    }

    /// Whether the formula references `id`
    pub fn refers_to(&self, id: &str) -> bool {
        self.identifiers().contains(&id)
    }
}

impl Display for Math {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Math {
    fn from(value: &str) -> Self {
        Math::new(value)
    }
}

impl From<String> for Math {
    fn from(value: String) -> Self {
        Math(value)
    }
}

/// Assignment, rate or algebraic rule (algebraic rules have no variable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub variable: Option<String>,
    pub math: Math,
}

/// An event with its trigger, optional delay and assignments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<String>,
    pub trigger: Math,
    #[serde(default)]
    pub delay: Option<Math>,
    #[serde(default)]
    pub assignments: Vec<EventAssignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventAssignment {
    pub variable: String,
    pub math: Math,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialAssignment {
    pub symbol: String,
    pub math: Math,
}

/// A user defined function, its arguments are part of the formula
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub id: String,
    pub math: Math,
}

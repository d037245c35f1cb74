//! This module provides the Parameter struct
use serde::{Deserialize, Serialize};

/// A named quantity, either global to the network or local to a kinetic law
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    /// Id of the unit definition (or predefined unit) of the parameter
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default = "constant_default")]
    pub constant: bool,
}

fn constant_default() -> bool {
    true
}

impl Parameter {
    pub fn new(id: &str, value: f64, units: Option<&str>) -> Parameter {
        Parameter {
            id: id.to_string(),
            name: None,
            value: Some(value),
            units: units.map(str::to_string),
            constant: true,
        }
    }

    /// Attach a human-readable name
    pub fn with_name(mut self, name: impl Into<String>) -> Parameter {
        self.name = Some(name.into());
        self
    }
}

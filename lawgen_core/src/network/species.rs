//! This module provides the Species and Compartment structs
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Represents a species (a pool of some entity in a compartment)
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// Used to identify the species (must be unique)
    pub id: String,
    /// Human Readable name of the species
    #[builder(default = "None")]
    #[serde(default)]
    pub name: Option<String>,
    /// Which compartment the species is in
    #[builder(default = "None")]
    #[serde(default)]
    pub compartment: Option<String>,
    /// Ontology code of the species type (e.g. `SBO:0000243` or `GENE`)
    #[builder(default = "None")]
    #[serde(default)]
    pub annotation: Option<String>,
    /// Whether the amount of the species is fixed by the environment
    #[builder(default = "false")]
    #[serde(default)]
    pub boundary_condition: bool,
    #[builder(default = "None")]
    #[serde(default)]
    pub initial_amount: Option<f64>,
    #[builder(default = "None")]
    #[serde(default)]
    pub initial_concentration: Option<f64>,
    #[builder(default = "false")]
    #[serde(default)]
    pub has_only_substance_units: bool,
    #[builder(default = "None")]
    #[serde(default)]
    pub substance_units: Option<String>,
    /// Controlled vocabulary term identifiers, e.g. `urn:miriam:kegg.compound:C00001`
    #[builder(default = "Vec::new()")]
    #[serde(default)]
    pub cv_terms: Vec<String>,
}

impl Species {
    /// Create a species in a compartment with an ontology annotation
    pub fn new(id: &str, compartment: &str, annotation: Option<&str>) -> Species {
        Species {
            id: id.to_string(),
            name: None,
            compartment: Some(compartment.to_string()),
            annotation: annotation.map(str::to_string),
            boundary_condition: false,
            initial_amount: None,
            initial_concentration: None,
            has_only_substance_units: false,
            substance_units: None,
            cv_terms: Vec::new(),
        }
    }

    /// Whether the species matches an identifier, either by id or by one of its CV terms
    pub fn is_identified_by(&self, identifier: &str) -> bool {
        self.id == identifier || self.cv_terms.iter().any(|term| term == identifier)
    }

    pub fn has_initial_value(&self) -> bool {
        self.initial_amount.is_some() || self.initial_concentration.is_some()
    }

    /// Set the boundary condition, returns whether the flag changed
    pub fn set_boundary_condition(&mut self, value: bool) -> bool {
        if self.boundary_condition == value {
            return false;
        }
        self.boundary_condition = value;
        true
    }
}

/// Represents a compartment species are located in
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compartment {
    pub id: String,
    #[builder(default = "None")]
    #[serde(default)]
    pub name: Option<String>,
    #[builder(default = "None")]
    #[serde(default)]
    pub size: Option<f64>,
    #[builder(default = "Some(3)")]
    #[serde(default)]
    pub spatial_dimensions: Option<u8>,
    #[builder(default = "None")]
    #[serde(default)]
    pub units: Option<String>,
}

impl Compartment {
    /// Create a three dimensional compartment without a size
    pub fn new(id: &str) -> Compartment {
        Compartment {
            id: id.to_string(),
            name: None,
            size: None,
            spatial_dimensions: Some(3),
            units: None,
        }
    }

    /// Whether the compartment needs a size, zero dimensional compartments do not
    pub fn needs_size(&self) -> bool {
        self.size.is_none() && self.spatial_dimensions != Some(0)
    }
}

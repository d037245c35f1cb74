//! This module provides structs for representing reactions and their kinetic laws
use derive_builder::Builder;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::kinetics::category::LawCategory;
use crate::network::math::Math;
use crate::network::parameter::Parameter;

/// Reference to a reactant or product of a reaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesReference {
    pub species: String,
    #[serde(default = "unit_stoichiometry")]
    pub stoichiometry: f64,
    /// Formula overriding the stoichiometry
    #[serde(default)]
    pub stoichiometry_math: Option<Math>,
}

fn unit_stoichiometry() -> f64 {
    1.
}

impl SpeciesReference {
    pub fn new(species: &str, stoichiometry: f64) -> SpeciesReference {
        SpeciesReference {
            species: species.to_string(),
            stoichiometry,
            stoichiometry_math: None,
        }
    }

    pub fn is_integer(&self) -> bool {
        self.stoichiometry.fract() == 0.
    }
}

/// Reference to a species influencing a reaction without being consumed or produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierReference {
    pub species: String,
    /// Ontology code of the modification (e.g. `SBO:0000460` or `INHIBITION`)
    #[serde(default)]
    pub annotation: Option<String>,
}

impl ModifierReference {
    pub fn new(species: &str, annotation: Option<&str>) -> ModifierReference {
        ModifierReference {
            species: species.to_string(),
            annotation: annotation.map(str::to_string),
        }
    }
}

/// Rate law of a reaction
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KineticLaw {
    /// Category the law was generated from, None for laws from other sources
    #[serde(default)]
    pub category: Option<LawCategory>,
    pub math: Math,
    /// Parameters only visible inside this law, they shadow global parameters
    #[serde(default)]
    pub local_parameters: IndexMap<String, Parameter>,
}

impl KineticLaw {
    pub fn new(math: impl Into<Math>) -> KineticLaw {
        KineticLaw {
            category: None,
            math: math.into(),
            local_parameters: IndexMap::new(),
        }
    }
}

/// Represents a reaction in the network
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Used to identify the reaction
    pub id: String,
    /// Human-readable reaction name
    #[builder(default = "None")]
    #[serde(default)]
    pub name: Option<String>,
    #[builder(default = "Vec::new()")]
    #[serde(default)]
    pub reactants: Vec<SpeciesReference>,
    #[builder(default = "Vec::new()")]
    #[serde(default)]
    pub products: Vec<SpeciesReference>,
    #[builder(default = "Vec::new()")]
    #[serde(default)]
    pub modifiers: Vec<ModifierReference>,
    #[builder(default = "false")]
    #[serde(default)]
    pub reversible: bool,
    /// Fast reactions are assumed to be in equilibrium
    #[builder(default = "false")]
    #[serde(default)]
    pub fast: bool,
    /// Ontology code of the process, e.g. `TRANSCRIPTION`
    #[builder(default = "None")]
    #[serde(default)]
    pub annotation: Option<String>,
    #[builder(default = "None")]
    #[serde(default)]
    pub kinetic_law: Option<KineticLaw>,
}

impl Reaction {
    /// Ids of every species the reaction refers to, in reactant, product, modifier order
    pub fn species_ids(&self) -> impl Iterator<Item = &str> {
        self.reactants
            .iter()
            .chain(self.products.iter())
            .map(|r| r.species.as_str())
            .chain(self.modifiers.iter().map(|m| m.species.as_str()))
    }

    /// Whether the reaction lacks a usable kinetic law
    pub fn needs_kinetic_law(&self) -> bool {
        match &self.kinetic_law {
            None => true,
            Some(law) => law.math.is_blank(),
        }
    }
}

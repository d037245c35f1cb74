//! This module provides the Network struct for representing an entire reaction network
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub mod math;
pub mod parameter;
pub mod reaction;
pub mod species;
pub mod stoichiometry;
pub mod units;

use math::{Event, FunctionDefinition, InitialAssignment, Math, Rule};
use parameter::Parameter;
use reaction::Reaction;
use species::{Compartment, Species};
use units::UnitDefinition;

/// Network wide default units, each one is the id of a unit definition or a predefined unit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub substance: Option<String>,
    pub time: Option<String>,
    pub volume: Option<String>,
    pub area: Option<String>,
    pub length: Option<String>,
    pub extent: Option<String>,
}

impl DefaultUnits {
    /// Every default unit which is set
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        [
            &self.substance,
            &self.time,
            &self.volume,
            &self.area,
            &self.length,
            &self.extent,
        ]
        .into_iter()
        .flatten()
    }

    /// Unset every default unit referring to `unit_id`
    pub(crate) fn unset(&mut self, unit_id: &str) {
        for unit in [
            &mut self.substance,
            &mut self.time,
            &mut self.volume,
            &mut self.area,
            &mut self.length,
            &mut self.extent,
        ] {
            if unit.as_deref() == Some(unit_id) {
                *unit = None;
            }
        }
    }
}

/// Represents a reaction network
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Network {
    /// Id associated with the network
    pub id: Option<String>,
    /// Map of compartment ids to compartments
    pub compartments: IndexMap<String, Compartment>,
    /// Map of species ids to species
    pub species: IndexMap<String, Species>,
    /// Map of reaction ids to reactions
    pub reactions: IndexMap<String, Reaction>,
    /// Map of global parameter ids to parameters
    pub parameters: IndexMap<String, Parameter>,
    pub unit_definitions: IndexMap<String, UnitDefinition>,
    pub function_definitions: IndexMap<String, FunctionDefinition>,
    pub rules: Vec<Rule>,
    pub events: Vec<Event>,
    pub constraints: Vec<Math>,
    pub initial_assignments: Vec<InitialAssignment>,
    pub default_units: DefaultUnits,
}

impl Network {
    pub fn new_empty() -> Self {
        Network::default()
    }

    /// Add a reaction to the network
    ///
    /// # Examples
    /// ```rust
    /// use lawgen_core::network::Network;
    /// use lawgen_core::network::reaction::ReactionBuilder;
    /// let mut network = Network::new_empty();
    /// let new_reaction = ReactionBuilder::default().id("new_reaction".to_string()).build().unwrap();
    /// network.add_reaction(new_reaction);
    /// ```
    pub fn add_reaction(&mut self, reaction: Reaction) {
        let id = reaction.id.clone();
        self.reactions.insert(id, reaction);
    }

    /// Add a species to the network
    ///
    /// # Examples
    /// ```rust
    /// use lawgen_core::network::Network;
    /// use lawgen_core::network::species::Species;
    /// let mut network = Network::new_empty();
    /// network.add_species(Species::new("atp", "cytosol", Some("SBO:0000247")));
    /// ```
    pub fn add_species(&mut self, species: Species) {
        let id = species.id.clone();
        self.species.insert(id, species);
    }

    pub fn add_compartment(&mut self, compartment: Compartment) {
        let id = compartment.id.clone();
        self.compartments.insert(id, compartment);
    }

    pub fn add_parameter(&mut self, parameter: Parameter) {
        let id = parameter.id.clone();
        self.parameters.insert(id, parameter);
    }

    pub fn add_unit_definition(&mut self, unit_definition: UnitDefinition) {
        let id = unit_definition.id.clone();
        self.unit_definitions.insert(id, unit_definition);
    }

    /// Look up a species referenced by a reaction
    pub fn resolve_species(&self, reaction: &str, species: &str) -> Result<&Species, DomainError> {
        self.species
            .get(species)
            .ok_or_else(|| DomainError::UnresolvableSpecies {
                reaction: reaction.to_string(),
                species: species.to_string(),
            })
    }

    /// Set the boundary condition of a species, returns whether the flag changed
    pub fn set_boundary_condition(&mut self, species: &str, value: bool) -> bool {
        match self.species.get_mut(species) {
            Some(s) => s.set_boundary_condition(value),
            None => false,
        }
    }
}

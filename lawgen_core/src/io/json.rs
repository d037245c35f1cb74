//! Module providing JSON IO for reaction networks
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::configuration::Configuration;
use crate::network::math::{Event, FunctionDefinition, InitialAssignment, Math, Rule};
use crate::network::parameter::Parameter;
use crate::network::reaction::Reaction;
use crate::network::species::{Compartment, Species};
use crate::network::units::UnitDefinition;
use crate::network::{DefaultUnits, Network};

// region JSON Network
/// Represents a JSON serialized network, used for reading and writing networks in json format
///
/// Components are stored as lists, their ids are taken from the entries themselves.
#[derive(Serialize, Deserialize)]
struct JsonNetwork {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    compartments: Vec<Compartment>,
    #[serde(default)]
    species: Vec<Species>,
    #[serde(default)]
    reactions: Vec<Reaction>,
    #[serde(default)]
    parameters: Vec<Parameter>,
    #[serde(default)]
    unit_definitions: Vec<UnitDefinition>,
    #[serde(default)]
    function_definitions: Vec<FunctionDefinition>,
    #[serde(default)]
    rules: Vec<Rule>,
    #[serde(default)]
    events: Vec<Event>,
    #[serde(default)]
    constraints: Vec<Math>,
    #[serde(default)]
    initial_assignments: Vec<InitialAssignment>,
    #[serde(default)]
    default_units: DefaultUnits,
}
// endregion JSON Network

// region Conversions
/// Collect a list of components into a map keyed by id, rejecting duplicate ids
fn collect_unique<T>(
    items: Vec<T>,
    id: impl Fn(&T) -> &str,
) -> Result<IndexMap<String, T>, JsonError> {
    let mut map = IndexMap::with_capacity(items.len());
    for item in items {
        let key = id(&item).to_string();
        if map.contains_key(&key) {
            return Err(JsonError::DuplicateId(key));
        }
        map.insert(key, item);
    }
    Ok(map)
}

impl Network {
    /// Read a network from a json file
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Network, JsonError> {
        let network_str = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(JsonError::UnableToRead(format!("{:?}", err))),
        };
        Network::from_json_str(&network_str)
    }

    /// Write the network to a json file
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), JsonError> {
        let network_string = self.to_json_string()?;
        fs::write(path, network_string)?;
        Ok(())
    }

    /// Parse a network from a json string
    ///
    /// # Examples
    /// ```rust
    /// use lawgen_core::network::Network;
    /// let network = Network::from_json_str(r#"{
    ///     "species": [{"id": "A", "compartment": "c"}],
    ///     "reactions": [{"id": "r1", "reactants": [{"species": "A"}]}]
    /// }"#).unwrap();
    /// assert_eq!(network.reactions["r1"].reactants[0].stoichiometry, 1.0);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Network, JsonError> {
        let json_network = match serde_json::from_str::<JsonNetwork>(json) {
            Ok(network) => network,
            Err(err) => return Err(JsonError::UnableToParse(format!("{:?}", err))),
        };
        Network::from_json(json_network)
    }

    /// Serialize the network into a json string
    pub fn to_json_string(&self) -> Result<String, JsonError> {
        Ok(serde_json::to_string_pretty(&self.to_json())?)
    }

    fn from_json(json_network: JsonNetwork) -> Result<Self, JsonError> {
        Ok(Network {
            id: json_network.id,
            compartments: collect_unique(json_network.compartments, |c| &c.id)?,
            species: collect_unique(json_network.species, |s| &s.id)?,
            reactions: collect_unique(json_network.reactions, |r| &r.id)?,
            parameters: collect_unique(json_network.parameters, |p| &p.id)?,
            unit_definitions: collect_unique(json_network.unit_definitions, |u| &u.id)?,
            function_definitions: collect_unique(json_network.function_definitions, |f| &f.id)?,
            rules: json_network.rules,
            events: json_network.events,
            constraints: json_network.constraints,
            initial_assignments: json_network.initial_assignments,
            default_units: json_network.default_units,
        })
    }

    fn to_json(&self) -> JsonNetwork {
        JsonNetwork {
            id: self.id.clone(),
            compartments: self.compartments.values().cloned().collect(),
            species: self.species.values().cloned().collect(),
            reactions: self.reactions.values().cloned().collect(),
            parameters: self.parameters.values().cloned().collect(),
            unit_definitions: self.unit_definitions.values().cloned().collect(),
            function_definitions: self.function_definitions.values().cloned().collect(),
            rules: self.rules.clone(),
            events: self.events.clone(),
            constraints: self.constraints.clone(),
            initial_assignments: self.initial_assignments.clone(),
            default_units: self.default_units.clone(),
        }
    }
}

impl Configuration {
    /// Read a configuration from a json file, missing options keep their defaults
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Configuration, JsonError> {
        let config_str = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(JsonError::UnableToRead(format!("{:?}", err))),
        };
        Configuration::from_json_str(&config_str)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, JsonError> {
        match serde_json::from_str::<Configuration>(json) {
            Ok(config) => Ok(config),
            Err(err) => Err(JsonError::UnableToParse(format!("{:?}", err))),
        }
    }
}

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Unable to read file due to {0}")]
    UnableToRead(String),
    #[error("Unable to parse json due to {0}")]
    UnableToParse(String),
    #[error("Component id {0} is used more than once")]
    DuplicateId(String),
    #[error("Serde json error")]
    SerdeJsonError(#[from] serde_json::Error),
    #[error("Unable to write to file")]
    UnableToWrite(#[from] std::io::Error),
}

// endregion Conversions

#[cfg(test)]
mod json_tests {
    use super::*;
    use crate::configuration::FailurePolicy;
    use crate::network::reaction::{KineticLaw, ModifierReference, ReactionBuilder, SpeciesReference};
    use crate::network::units::{Unit, UnitKind};
    use pretty_assertions::assert_eq;

    fn setup_network() -> Network {
        let mut network = Network::new_empty();
        network.id = Some("toy".to_string());
        network.add_compartment(Compartment::new("c"));
        network.add_species(Species::new("A", "c", Some("SBO:0000247")));
        network.add_species(Species::new("B", "c", None));
        network.add_species(Species::new("E", "c", Some("PROTEIN")));
        network.add_parameter(Parameter::new("k_global", 0.5, Some("per_second")));
        network.add_unit_definition(UnitDefinition::new(
            "per_second",
            vec![Unit::new(UnitKind::Second, -1.)],
        ));
        network.add_reaction(
            ReactionBuilder::default()
                .id("r1".to_string())
                .reactants(vec![SpeciesReference::new("A", 1.)])
                .products(vec![SpeciesReference::new("B", 2.)])
                .modifiers(vec![ModifierReference::new("E", Some("SBO:0000460"))])
                .reversible(true)
                .build()
                .unwrap(),
        );
        network.add_reaction(
            ReactionBuilder::default()
                .id("r2".to_string())
                .reactants(vec![SpeciesReference::new("B", 1.)])
                .kinetic_law(Some(KineticLaw::new("k_global * B")))
                .build()
                .unwrap(),
        );
        network.rules.push(Rule {
            variable: Some("A".to_string()),
            math: Math::new("2 * k_global"),
        });
        network.default_units.time = Some("second".to_string());
        network
    }

    #[test]
    fn json_round_trip() {
        let network = setup_network();
        let json = network.to_json_string().unwrap();
        let read_back = Network::from_json_str(&json).unwrap();
        assert_eq!(read_back, network);
        // Order of the components is kept
        assert_eq!(
            read_back.species.keys().collect::<Vec<_>>(),
            vec!["A", "B", "E"]
        );
    }

    #[test]
    fn missing_fields_use_defaults() {
        let data = r#"{
"species":[{"id":"A"}],
"reactions":[{"id":"r1","reactants":[{"species":"A","stoichiometry":2.0}],"products":[]}],
"parameters":[{"id":"k","value":1.0}]
}"#;
        let network = Network::from_json_str(data).unwrap();
        assert_eq!(network.id, None);
        assert!(!network.species["A"].boundary_condition);
        assert!(network.reactions["r1"].needs_kinetic_law());
        assert!(!network.reactions["r1"].reversible);
        assert!(network.parameters["k"].constant);
        assert!(network.compartments.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let data = r#"{"species":[{"id":"A"},{"id":"A"}]}"#;
        match Network::from_json_str(data) {
            Err(JsonError::DuplicateId(id)) => assert_eq!(id, "A"),
            _ => panic!("Duplicate species should be rejected"),
        }
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            Network::from_json_str("{\"species\": 3}"),
            Err(JsonError::UnableToParse(_))
        ));
        assert!(matches!(
            Network::read_json("this/file/does/not/exist.json"),
            Err(JsonError::UnableToRead(_))
        ));
    }

    #[test]
    fn write_and_read_file() {
        let network = setup_network();
        let path = std::env::temp_dir().join("lawgen_core_json_write_and_read.json");
        network.write_json(&path).unwrap();
        let read_back = Network::read_json(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(read_back, network);
    }

    #[test]
    fn partial_configuration() {
        let config = Configuration::from_json_str(
            r#"{"failure_policy":"SkipAndContinue","generate_for_all_reactions":true}"#,
        )
        .unwrap();
        assert_eq!(config.failure_policy, FailurePolicy::SkipAndContinue);
        assert!(config.generate_for_all_reactions);
        assert_eq!(
            config.default_function_term_scheme,
            Configuration::default().default_function_term_scheme
        );
    }
}

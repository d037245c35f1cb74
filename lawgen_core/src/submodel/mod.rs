//! Isolated working copies of a network used to regenerate kinetic laws
//!
//! A [`Submodel`] holds exactly the reactions whose laws are regenerated, together with the
//! species, compartments, units and parameters they touch. Laws are generated on the submodel,
//! the original network is only changed when the submodel is committed.
use indexmap::{IndexMap, IndexSet};
use tracing::{info, warn};

use crate::configuration::Configuration;
use crate::error::DomainError;
use crate::kinetics::classifier::ReactionClassification;
use crate::network::reaction::{KineticLaw, Reaction};
use crate::network::species::Compartment;
use crate::network::units::{is_predefined_unit, UnitDefinition};
use crate::network::Network;
use crate::ontology::sbo::format_sbo_term;
use crate::ontology::RoleResolver;

pub mod cleanup;
pub mod generator;

/// SBO term of enzymatic catalysis
const ENZYMATIC_CATALYSIS: u32 = 460;
/// SBO term of catalysis by something other than an enzyme
const CATALYSIS: u32 = 13;

/// Reactions a generation run works on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Every reaction without a kinetic law, or every reaction if configured
    All,
    /// Only the reaction with the given id, whether it has a law or not
    Reaction(String),
}

/// Outcome of committing a submodel to a network
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommitSummary {
    /// Reactions which got a new kinetic law
    pub modified_reaction_ids: Vec<String>,
    pub created_law_count: usize,
    /// Reactions left out of the run together with the reason
    pub skipped: Vec<(String, DomainError)>,
    /// Fast reactions of the network, which are treated like any other reaction
    pub fast_reaction_ids: Vec<String>,
    pub removed_parameter_ids: Vec<String>,
    pub removed_unit_ids: Vec<String>,
    /// Whether the reactions of the network are linearly independent
    pub full_column_rank: bool,
}

/// Working copy of the part of a network a generation run regenerates
#[derive(Debug, Clone)]
pub struct Submodel {
    /// Selected reactions and everything they reference
    pub network: Network,
    pub fast_reaction_ids: Vec<String>,
    pub(crate) classifications: IndexMap<String, ReactionClassification>,
    pub(crate) laws: IndexMap<String, KineticLaw>,
    pub(crate) new_unit_definitions: Vec<UnitDefinition>,
    pub(crate) skipped: Vec<(String, DomainError)>,
    pub(crate) full_column_rank: bool,
    config: Configuration,
}

impl Submodel {
    /// Copy the reactions selected by `target`, and what they reference, out of a network
    ///
    /// Missing species initial values and compartment sizes are filled with the configured
    /// defaults. Catalysts become enzymatic catalysts unless the modifying species is annotated
    /// with a role outside the possible enzymes, in which case they become generic catalysts.
    pub fn new<R: RoleResolver + ?Sized>(
        network: &Network,
        target: &Target,
        config: &Configuration,
        resolver: &R,
    ) -> Result<Submodel, DomainError> {
        if let Target::Reaction(id) = target {
            if !network.reactions.contains_key(id) {
                return Err(DomainError::UnknownReaction {
                    reaction: id.clone(),
                });
            }
        }
        let mut submodel = Network {
            id: network.id.as_ref().map(|id| format!("submodel_{}", id)),
            default_units: network.default_units.clone(),
            ..Network::default()
        };
        for unit in network.default_units.iter() {
            copy_unit_definition(network, &mut submodel, unit);
        }
        let mut fast_reaction_ids = Vec::new();
        for reaction in network.reactions.values() {
            if reaction.fast {
                warn!(reaction = %reaction.id, "Fast reactions are treated as regular reactions");
                fast_reaction_ids.push(reaction.id.clone());
            }
            if !is_selected(reaction, target, config) {
                continue;
            }
            for species in reaction.species_ids() {
                copy_species(network, &mut submodel, &reaction.id, species, config)?;
            }
            // Global parameters of the law being replaced
            if let Some(law) = &reaction.kinetic_law {
                for parameter in network.parameters.values() {
                    if law.math.refers_to(&parameter.id) {
                        submodel.add_parameter(parameter.clone());
                        if let Some(units) = &parameter.units {
                            copy_unit_definition(network, &mut submodel, units);
                        }
                    }
                }
            }
            let mut copy = reaction.clone();
            refine_catalysis(&mut copy, &submodel, config, resolver);
            submodel.add_reaction(copy);
        }
        Ok(Submodel {
            network: submodel,
            fast_reaction_ids,
            classifications: IndexMap::new(),
            laws: IndexMap::new(),
            new_unit_definitions: Vec::new(),
            skipped: Vec::new(),
            full_column_rank: true,
            config: config.clone(),
        })
    }

    /// Record the law generated for a reaction
    pub(crate) fn insert_law(&mut self, classification: ReactionClassification, law: KineticLaw) {
        let id = classification.reaction_id.clone();
        self.classifications.insert(id.clone(), classification);
        self.laws.insert(id, law);
    }

    pub fn laws(&self) -> &IndexMap<String, KineticLaw> {
        &self.laws
    }

    pub fn classifications(&self) -> &IndexMap<String, ReactionClassification> {
        &self.classifications
    }

    /// Merge the generated laws into the network the submodel was created from
    ///
    /// Unit definitions identical to one already in the network are replaced by it. New
    /// parameters are added to the network or kept in their law depending on
    /// `new_parameters_global`, and the cleanup sweep runs if configured.
    pub fn commit(self, network: &mut Network) -> CommitSummary {
        let mut summary = CommitSummary {
            fast_reaction_ids: self.fast_reaction_ids,
            skipped: self.skipped,
            full_column_rank: self.full_column_rank,
            ..CommitSummary::default()
        };

        // region Species and compartments
        for classification in self.classifications.values() {
            classification.apply_boundary_condition(network);
        }
        for species in self.network.species.values() {
            if let Some(original) = network.species.get_mut(&species.id) {
                if !original.has_initial_value() {
                    original.initial_amount = species.initial_amount;
                    original.initial_concentration = species.initial_concentration;
                }
            }
        }
        for compartment in self.network.compartments.values() {
            match network.compartments.get_mut(&compartment.id) {
                Some(original) if original.needs_size() => original.size = compartment.size,
                Some(_) => {}
                None => network.add_compartment(compartment.clone()),
            }
        }
        // endregion Species and compartments

        // region Units
        let used_units: IndexSet<&str> = self
            .laws
            .values()
            .flat_map(|law| law.local_parameters.values())
            .filter_map(|parameter| parameter.units.as_deref())
            .collect();
        let mut unit_ids: IndexMap<String, String> = IndexMap::new();
        for definition in &self.new_unit_definitions {
            if !used_units.contains(definition.id.as_str()) {
                continue;
            }
            let id = merge_unit_definition(network, definition);
            unit_ids.insert(definition.id.clone(), id);
        }
        // endregion Units

        // region Laws
        for (reaction_id, mut law) in self.laws {
            let Some(reaction) = network.reactions.get_mut(&reaction_id) else {
                continue;
            };
            for parameter in law.local_parameters.values_mut() {
                if let Some(id) = parameter.units.as_ref().and_then(|u| unit_ids.get(u)) {
                    parameter.units = Some(id.clone());
                }
            }
            if self.config.new_parameters_global {
                for (id, parameter) in law.local_parameters.drain(..) {
                    network.parameters.insert(id, parameter);
                }
            }
            if let Some(classification) = self.classifications.get(&reaction_id) {
                reaction.reversible = classification.effective_reversible;
            }
            reaction.kinetic_law = Some(law);
            summary.modified_reaction_ids.push(reaction_id);
            summary.created_law_count += 1;
        }
        // endregion Laws

        if self.config.remove_unnecessary_parameters_and_units {
            let (parameters, units) = cleanup::remove_unnecessary_parameters_and_units(network);
            summary.removed_parameter_ids = parameters;
            summary.removed_unit_ids = units;
        }
        info!(
            created = summary.created_law_count,
            skipped = summary.skipped.len(),
            removed_parameters = summary.removed_parameter_ids.len(),
            removed_units = summary.removed_unit_ids.len(),
            "Committed kinetic laws"
        );
        summary
    }
}

fn is_selected(reaction: &Reaction, target: &Target, config: &Configuration) -> bool {
    match target {
        Target::Reaction(id) => reaction.id == *id,
        Target::All => {
            if let Some(law) = &reaction.kinetic_law {
                if law.math.is_blank() {
                    warn!(reaction = %reaction.id, "Kinetic law without a formula");
                }
            }
            config.generate_for_all_reactions || reaction.needs_kinetic_law()
        }
    }
}

/// Copy a species and its compartment into the submodel, filling in missing defaults
fn copy_species(
    network: &Network,
    submodel: &mut Network,
    reaction: &str,
    species: &str,
    config: &Configuration,
) -> Result<(), DomainError> {
    if submodel.species.contains_key(species) {
        return Ok(());
    }
    let mut copy = network.resolve_species(reaction, species)?.clone();
    if !copy.has_initial_value() {
        if copy.has_only_substance_units {
            copy.initial_amount = Some(config.default_species_initial_value);
        } else {
            copy.initial_concentration = Some(config.default_species_initial_value);
        }
    }
    if let Some(units) = &copy.substance_units {
        copy_unit_definition(network, submodel, units);
    }
    if let Some(compartment) = &copy.compartment {
        if !submodel.compartments.contains_key(compartment) {
            let mut compartment = network
                .compartments
                .get(compartment)
                .cloned()
                .unwrap_or_else(|| Compartment::new(compartment));
            if compartment.spatial_dimensions.is_none() {
                compartment.spatial_dimensions = Some(3);
            }
            if compartment.needs_size() {
                compartment.size = Some(config.default_compartment_size);
            }
            if let Some(units) = &compartment.units {
                copy_unit_definition(network, submodel, units);
            }
            submodel.add_compartment(compartment);
        }
    }
    submodel.add_species(copy);
    Ok(())
}

fn copy_unit_definition(network: &Network, submodel: &mut Network, id: &str) {
    if let Some(definition) = network.unit_definitions.get(id) {
        if !submodel.unit_definitions.contains_key(id) {
            submodel.add_unit_definition(definition.clone());
        }
    }
}

/// Annotate catalysts as enzymes unless the catalysing species is annotated as something that
/// cannot be one
fn refine_catalysis<R: RoleResolver + ?Sized>(
    reaction: &mut Reaction,
    submodel: &Network,
    config: &Configuration,
    resolver: &R,
) {
    for modifier in reaction.modifiers.iter_mut() {
        if !resolver
            .role_of_opt(modifier.annotation.as_deref())
            .is_catalyst()
        {
            continue;
        }
        let species_annotation = submodel
            .species
            .get(&modifier.species)
            .and_then(|species| species.annotation.as_deref());
        let term = match species_annotation {
            Some(annotation) if !config.is_possible_enzyme(resolver.role_of(annotation)) => {
                CATALYSIS
            }
            _ => ENZYMATIC_CATALYSIS,
        };
        modifier.annotation = Some(format_sbo_term(term));
    }
}

/// Add a unit definition to a network, returns the id it is known by in the network
///
/// An identical definition already in the network is reused. Otherwise the definition is
/// added, under a fresh id if its own id is taken.
fn merge_unit_definition(network: &mut Network, definition: &UnitDefinition) -> String {
    if let Some(existing) = network
        .unit_definitions
        .values()
        .find(|existing| existing.is_identical(definition))
    {
        return existing.id.clone();
    }
    let mut id = definition.id.clone();
    let mut suffix = 2;
    while network.unit_definitions.contains_key(&id) || is_predefined_unit(&id) {
        id = format!("{}_{}", definition.id, suffix);
        suffix += 1;
    }
    network.add_unit_definition(UnitDefinition {
        id: id.clone(),
        ..definition.clone()
    });
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::math::Math;
    use crate::network::parameter::Parameter;
    use crate::network::reaction::{KineticLaw, ModifierReference, ReactionBuilder, SpeciesReference};
    use crate::network::species::{CompartmentBuilder, Species};
    use crate::network::units::{Unit, UnitKind};
    use crate::ontology::SboRoleResolver;
    use pretty_assertions::assert_eq;

    fn setup_network() -> Network {
        let mut network = Network::new_empty();
        network.add_compartment(Compartment::new("cell"));
        network.add_compartment(
            CompartmentBuilder::default()
                .id("nucleus".to_string())
                .size(Some(0.2))
                .build()
                .unwrap(),
        );
        for id in ["A", "B", "C"] {
            network.add_species(Species::new(id, "cell", Some("SBO:0000247")));
        }
        network.add_species(Species::new("E", "cell", Some("PROTEIN")));
        network.add_species(Species::new("X", "nucleus", None));
        network.add_species(Species::new("unused", "nucleus", None));
        network.add_parameter(Parameter::new("k_old", 2., None));
        network.add_reaction(
            ReactionBuilder::default()
                .id("r1".to_string())
                .reactants(vec![SpeciesReference::new("A", 1.)])
                .products(vec![SpeciesReference::new("B", 1.)])
                .modifiers(vec![
                    ModifierReference::new("E", Some("CATALYSIS")),
                    ModifierReference::new("X", Some("SBO:0000460")),
                ])
                .build()
                .unwrap(),
        );
        network.add_reaction(
            ReactionBuilder::default()
                .id("r2".to_string())
                .reactants(vec![SpeciesReference::new("B", 1.)])
                .products(vec![SpeciesReference::new("C", 1.)])
                .fast(true)
                .kinetic_law(Some(KineticLaw::new("k_old * B")))
                .build()
                .unwrap(),
        );
        network
    }

    #[test]
    fn only_reactions_without_laws_are_copied() {
        let network = setup_network();
        let submodel = Submodel::new(
            &network,
            &Target::All,
            &Configuration::default(),
            &SboRoleResolver,
        )
        .unwrap();
        assert_eq!(
            submodel.network.reactions.keys().collect::<Vec<_>>(),
            vec!["r1"]
        );
        assert_eq!(
            submodel.network.species.keys().collect::<Vec<_>>(),
            vec!["A", "B", "E", "X"]
        );
        assert!(!submodel.network.species.contains_key("unused"));
        assert_eq!(submodel.fast_reaction_ids, vec!["r2".to_string()]);
    }

    #[test]
    fn targeted_reaction_is_copied_with_its_parameters() {
        let network = setup_network();
        let submodel = Submodel::new(
            &network,
            &Target::Reaction("r2".to_string()),
            &Configuration::default(),
            &SboRoleResolver,
        )
        .unwrap();
        assert_eq!(
            submodel.network.reactions.keys().collect::<Vec<_>>(),
            vec!["r2"]
        );
        assert!(submodel.network.parameters.contains_key("k_old"));
    }

    #[test]
    fn unknown_target() {
        let network = setup_network();
        let error = Submodel::new(
            &network,
            &Target::Reaction("r9".to_string()),
            &Configuration::default(),
            &SboRoleResolver,
        )
        .unwrap_err();
        assert_eq!(
            error,
            DomainError::UnknownReaction {
                reaction: "r9".to_string()
            }
        );
    }

    #[test]
    fn defaults_are_filled_in() {
        let network = setup_network();
        let config = Configuration {
            default_species_initial_value: 0.5,
            default_compartment_size: 2.,
            ..Configuration::default()
        };
        let submodel = Submodel::new(&network, &Target::All, &config, &SboRoleResolver).unwrap();
        assert_eq!(submodel.network.species["A"].initial_concentration, Some(0.5));
        assert_eq!(submodel.network.compartments["cell"].size, Some(2.));
        assert_eq!(submodel.network.compartments["nucleus"].size, Some(0.2));
        // The original network is left alone
        assert_eq!(network.species["A"].initial_concentration, None);
    }

    #[test]
    fn catalysis_is_refined_by_possible_enzymes() {
        let mut network = setup_network();
        network.add_species(Species::new("g", "cell", Some("GENE")));
        if let Some(reaction) = network.reactions.get_mut("r1") {
            reaction
                .modifiers
                .push(ModifierReference::new("g", Some("SBO:0000460")));
        }
        let submodel = Submodel::new(
            &network,
            &Target::All,
            &Configuration::default(),
            &SboRoleResolver,
        )
        .unwrap();
        let modifiers = &submodel.network.reactions["r1"].modifiers;
        // Proteins and unannotated species are enzymes, genes are not
        assert_eq!(modifiers[0].annotation.as_deref(), Some("SBO:0000460"));
        assert_eq!(modifiers[1].annotation.as_deref(), Some("SBO:0000460"));
        assert_eq!(modifiers[2].annotation.as_deref(), Some("SBO:0000013"));
    }

    #[test]
    fn generic_catalysis_on_unannotated_species_becomes_enzymatic() {
        let mut network = setup_network();
        if let Some(reaction) = network.reactions.get_mut("r1") {
            reaction.modifiers = vec![ModifierReference::new("X", Some("CATALYSIS"))];
        }
        let submodel = Submodel::new(
            &network,
            &Target::All,
            &Configuration::default(),
            &SboRoleResolver,
        )
        .unwrap();
        assert_eq!(
            submodel.network.reactions["r1"].modifiers[0]
                .annotation
                .as_deref(),
            Some("SBO:0000460")
        );
    }

    #[test]
    fn identical_units_are_merged() {
        let mut network = setup_network();
        network.add_unit_definition(UnitDefinition::new(
            "per_s",
            vec![Unit::new(UnitKind::Second, -1.)],
        ));
        network.add_unit_definition(UnitDefinition::new(
            "litre_per_second",
            vec![Unit::new(UnitKind::Metre, 1.)],
        ));
        let per_second = UnitDefinition::new("per_second", vec![Unit::new(UnitKind::Second, -1.)]);
        assert_eq!(merge_unit_definition(&mut network, &per_second), "per_s");
        let rate = UnitDefinition::new(
            "litre_per_second",
            vec![Unit::new(UnitKind::Litre, 1.), Unit::new(UnitKind::Second, -1.)],
        );
        assert_eq!(merge_unit_definition(&mut network, &rate), "litre_per_second_2");
        assert!(network.unit_definitions.contains_key("litre_per_second_2"));
    }

    #[test]
    fn commit_without_laws_changes_nothing_but_defaults() {
        let mut network = setup_network();
        let config = Configuration {
            remove_unnecessary_parameters_and_units: false,
            ..Configuration::default()
        };
        let submodel = Submodel::new(&network, &Target::All, &config, &SboRoleResolver).unwrap();
        let summary = submodel.commit(&mut network);
        assert_eq!(summary.created_law_count, 0);
        assert_eq!(network.species["A"].initial_concentration, Some(1.));
        assert_eq!(
            network.reactions["r2"].kinetic_law.as_ref().map(|l| &l.math),
            Some(&Math::new("k_old * B"))
        );
    }
}

//! Structural and semantic classification of reactions
//!
//! The classifier inspects the stoichiometry of a reaction and the roles of its participants to
//! find the law categories which are applicable to it, and picks a default among them.
use tracing::{debug, warn};

use crate::configuration::Configuration;
use crate::error::DomainError;
use crate::kinetics::category::{LawCategory, LawFamily};
use crate::network::reaction::{Reaction, SpeciesReference};
use crate::network::Network;
use crate::ontology::{ProcessType, Role, RoleResolver, SboRoleResolver};

/// Result of classifying a single reaction
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionClassification {
    pub reaction_id: String,
    /// Reactants taken into account, ignored species and empty set placeholders removed
    pub reactants: Vec<SpeciesReference>,
    /// Products taken into account, ignored species and empty set placeholders removed
    pub products: Vec<SpeciesReference>,
    pub stoichiometry_left: f64,
    pub stoichiometry_right: f64,
    /// All reactant stoichiometries are whole numbers
    pub integer_stoichiometry: bool,
    pub enzymes: Vec<String>,
    pub non_enzyme_catalysts: Vec<String>,
    pub inhibitors: Vec<String>,
    pub activators: Vec<String>,
    /// Reversibility of the reaction, taking the configuration into account
    pub effective_reversible: bool,
    pub zero_reactants: bool,
    pub zero_products: bool,
    pub uni_uni: bool,
    pub bi_uni: bool,
    pub bi_bi: bool,
    pub reaction_with_genes: bool,
    pub reaction_with_rnas: bool,
    pub non_enzyme: bool,
    pub without_modulation: bool,
    /// Annotated process type of the reaction
    pub process_type: Option<ProcessType>,
    /// Applicable categories in the order of [`LawCategory::ALL`]
    pub legal_categories: Vec<LawCategory>,
    pub chosen_category: LawCategory,
    /// Species which should be marked as a boundary condition
    pub boundary_condition_species: Option<String>,
}

impl ReactionClassification {
    pub fn is_legal(&self, category: LawCategory) -> bool {
        self.legal_categories.contains(&category)
    }

    /// Apply the boundary condition update to a network, returns whether a species changed
    ///
    /// Applying it more than once has no further effect.
    pub fn apply_boundary_condition(&self, network: &mut Network) -> bool {
        match &self.boundary_condition_species {
            Some(id) => network.set_boundary_condition(id, true),
            None => false,
        }
    }

    /// Species ids of every modifier that modulates the reaction (inhibitors first)
    pub fn modulators(&self) -> impl Iterator<Item = &String> {
        self.inhibitors.iter().chain(self.activators.iter())
    }
}

/// Classify a reaction using the default [`SboRoleResolver`]
///
/// # Examples
/// ```rust
/// use lawgen_core::configuration::Configuration;
/// use lawgen_core::kinetics::category::LawCategory;
/// use lawgen_core::kinetics::classifier::classify;
/// use lawgen_core::network::Network;
/// use lawgen_core::network::reaction::{ReactionBuilder, SpeciesReference};
/// use lawgen_core::network::species::Species;
/// let mut network = Network::new_empty();
/// network.add_species(Species::new("A", "cell", Some("SBO:0000247")));
/// network.add_species(Species::new("B", "cell", Some("SBO:0000247")));
/// let reaction = ReactionBuilder::default()
///     .id("r1".to_string())
///     .reactants(vec![SpeciesReference::new("A", 1.)])
///     .products(vec![SpeciesReference::new("B", 1.)])
///     .build()
///     .unwrap();
/// let classification = classify(&reaction, &network, &Configuration::default()).unwrap();
/// assert!(classification.non_enzyme);
/// assert_eq!(classification.chosen_category, LawCategory::GeneralizedMassAction);
/// ```
pub fn classify(
    reaction: &Reaction,
    network: &Network,
    config: &Configuration,
) -> Result<ReactionClassification, DomainError> {
    classify_with(reaction, network, config, &SboRoleResolver)
}

/// Classify a reaction, resolving annotations with `resolver`
///
/// The configuration is validated first, a malformed one is reported as
/// [`DomainError::InvalidConfiguration`].
pub fn classify_with<R: RoleResolver + ?Sized>(
    reaction: &Reaction,
    network: &Network,
    config: &Configuration,
    resolver: &R,
) -> Result<ReactionClassification, DomainError> {
    config.validate()?;
    // Every referenced species has to exist before anything else is looked at
    let mut species_roles = Vec::new();
    for id in reaction.species_ids() {
        let species = network.resolve_species(&reaction.id, id)?;
        species_roles.push((id, resolver.role_of_opt(species.annotation.as_deref())));
    }
    let role_of = |id: &str| {
        species_roles
            .iter()
            .find(|(s, _)| *s == id)
            .map(|(_, role)| *role)
            .unwrap_or(Role::Unclassified)
    };

    // region Stoichiometry
    let is_ignored = |reference: &SpeciesReference| {
        role_of(reference.species.as_str()).is_empty_set()
            || network.species.get(&reference.species).is_some_and(|species| {
                config
                    .ignore_species_identifiers
                    .iter()
                    .any(|identifier| species.is_identified_by(identifier))
            })
    };
    let reactants: Vec<SpeciesReference> = reaction
        .reactants
        .iter()
        .filter(|r| !is_ignored(*r))
        .cloned()
        .collect();
    let products: Vec<SpeciesReference> = reaction
        .products
        .iter()
        .filter(|r| !is_ignored(*r))
        .cloned()
        .collect();
    let stoichiometry_sum = |references: &[SpeciesReference]| -> f64 {
        references.iter().map(|r| r.stoichiometry).sum()
    };
    let stoichiometry_left = stoichiometry_sum(&reactants);
    let stoichiometry_right = stoichiometry_sum(&products);
    let integer_stoichiometry = reactants.iter().all(SpeciesReference::is_integer);
    // endregion Stoichiometry

    // region Modifiers
    let mut enzymes = Vec::new();
    let mut non_enzyme_catalysts = Vec::new();
    let mut inhibitors = Vec::new();
    let mut activators = Vec::new();
    for modifier in &reaction.modifiers {
        let role = resolver.role_of_opt(modifier.annotation.as_deref());
        let species = modifier.species.clone();
        if role.is_enzymatic_catalyst() {
            enzymes.push(species);
        } else if role.is_catalyst() {
            non_enzyme_catalysts.push(species);
        } else if role.is_inhibitor() {
            inhibitors.push(species);
        } else if role.is_activator() {
            activators.push(species);
        }
    }
    // endregion Modifiers

    // region Flags
    let effective_reversible = reaction.reversible || config.treat_all_reactions_reversible;
    let zero_reactants = stoichiometry_left == 0.;
    let zero_products = stoichiometry_right == 0.;
    let non_enzyme = (!config.all_reactions_enzyme_catalyzed && enzymes.is_empty())
        || !non_enzyme_catalysts.is_empty()
        || (zero_products && effective_reversible);
    let uni_uni = stoichiometry_left == 1. && stoichiometry_right == 1.;
    let bi_uni = stoichiometry_left == 2. && stoichiometry_right == 1.;
    let bi_bi = stoichiometry_left == 2. && stoichiometry_right == 2.;
    let without_modulation = inhibitors.is_empty() && activators.is_empty();
    let reaction_with_genes = species_roles.iter().any(|(_, role)| role.is_gene_like());
    let reaction_with_rnas = species_roles.iter().any(|(_, role)| role.is_rna_like());
    let process_type = resolver
        .role_of_opt(reaction.annotation.as_deref())
        .process_type();
    // endregion Flags

    check_process_type(
        &reaction.id,
        process_type,
        &reactants,
        &products,
        &role_of,
        reaction_with_genes,
        reaction_with_rnas,
        zero_reactants,
    )?;

    // Gene and RNA reactants of uni-uni reactions are only templates, their amount is fixed
    let boundary_condition_species = if uni_uni && config.set_boundary_condition_for_genes {
        reactants
            .first()
            .filter(|r| {
                let role = role_of(r.species.as_str());
                role.is_gene_like() || role.is_rna_like()
            })
            .map(|r| r.species.clone())
    } else {
        None
    };

    let mut classification = ReactionClassification {
        reaction_id: reaction.id.clone(),
        reactants,
        products,
        stoichiometry_left,
        stoichiometry_right,
        integer_stoichiometry,
        enzymes,
        non_enzyme_catalysts,
        inhibitors,
        activators,
        effective_reversible,
        zero_reactants,
        zero_products,
        uni_uni,
        bi_uni,
        bi_bi,
        reaction_with_genes,
        reaction_with_rnas,
        non_enzyme,
        without_modulation,
        process_type,
        legal_categories: Vec::new(),
        chosen_category: config.non_enzyme_default,
        boundary_condition_species,
    };
    classification.legal_categories = legal_categories(&classification);
    classification.chosen_category = choose_category(&classification, config)?;
    debug!(
        reaction = %classification.reaction_id,
        category = %classification.chosen_category,
        legal = classification.legal_categories.len(),
        "Classified reaction"
    );
    Ok(classification)
}

/// Check the annotated process type against the participants of the reaction
#[allow(clippy::too_many_arguments)]
fn check_process_type(
    reaction: &str,
    process_type: Option<ProcessType>,
    reactants: &[SpeciesReference],
    products: &[SpeciesReference],
    role_of: &dyn Fn(&str) -> Role,
    with_genes: bool,
    with_rnas: bool,
    zero_reactants: bool,
) -> Result<(), DomainError> {
    let Some(process_type) = process_type else {
        return Ok(());
    };
    let mismatch = |expected: ProcessType| DomainError::ProcessTypeMismatch {
        reaction: reaction.to_string(),
        expected,
    };
    let any_reactant = |predicate: fn(&Role) -> bool| {
        reactants.iter().any(|r| predicate(&role_of(r.species.as_str())))
    };
    let any_product = |predicate: fn(&Role) -> bool| {
        products.iter().any(|r| predicate(&role_of(r.species.as_str())))
    };

    let transcription = (with_genes || zero_reactants) && any_product(Role::is_rna_like);
    if transcription && process_type == ProcessType::Translation {
        return Err(mismatch(ProcessType::Transcription));
    }
    let translation = (with_rnas || zero_reactants) && any_product(Role::is_protein_like);
    if translation && process_type == ProcessType::Transcription {
        return Err(mismatch(ProcessType::Translation));
    }
    // Proteins are never translated directly from a gene
    if process_type == ProcessType::Translation && any_reactant(Role::is_gene_like) {
        return Err(mismatch(ProcessType::Transcription));
    }
    if process_type == ProcessType::Transcription
        && any_reactant(Role::is_rna_like)
        && !any_reactant(Role::is_gene_like)
    {
        return Err(mismatch(ProcessType::Translation));
    }
    let expression = process_type != ProcessType::StateTransition;
    if expression && !(with_genes || with_rnas || transcription || translation) {
        return Err(mismatch(ProcessType::StateTransition));
    }
    Ok(())
}

/// Categories applicable to a classified reaction, in the order of [`LawCategory::ALL`]
fn legal_categories(c: &ReactionClassification) -> Vec<LawCategory> {
    let regulated_expression = c.reaction_with_genes || c.reaction_with_rnas;
    let mut legal: Vec<LawCategory> = LawCategory::ALL
        .into_iter()
        .filter(|category| {
            let a = category.attributes();
            let direction = if c.effective_reversible {
                a.reversible
            } else {
                a.irreversible
            };
            let stoichiometry = c.integer_stoichiometry || !a.integer_stoichiometry;
            let modulation = if c.without_modulation {
                !a.requires_modulation
            } else {
                a.supports_modulation
            };
            let shape = if c.zero_reactants || c.zero_products {
                (!c.zero_reactants || a.zero_reactants)
                    && (!c.zero_products || a.zero_products)
                    && (!a.gene_regulatory || regulated_expression)
            } else {
                let enzyme_shape = a.arbitrary_enzyme
                    || (c.uni_uni && a.uni_uni)
                    || (c.bi_uni && a.bi_uni)
                    || (c.bi_bi && a.bi_bi);
                (c.non_enzyme && a.non_enzyme)
                    || (!c.non_enzyme && enzyme_shape)
                    || (c.uni_uni && regulated_expression && a.gene_regulatory)
            };
            direction && stoichiometry && modulation && shape
        })
        .collect();
    if (c.zero_reactants || c.zero_products) && regulated_expression {
        // Synthesis and degradation of gene products prefer the gene regulatory laws
        legal.sort_by_key(|category| !category.attributes().gene_regulatory);
    }
    // Mass action always comes with its zeroth order forward variant
    if let Some(position) = legal
        .iter()
        .position(|c| *c == LawCategory::GeneralizedMassAction)
    {
        if !legal.contains(&LawCategory::ZerothOrderForward) {
            legal.insert(position + 1, LawCategory::ZerothOrderForward);
        }
    }
    legal
}

/// Pick the default category from the legal ones
fn choose_category(
    c: &ReactionClassification,
    config: &Configuration,
) -> Result<LawCategory, DomainError> {
    let regulated_expression = c.reaction_with_genes || c.reaction_with_rnas;
    let family = if c.zero_reactants || (c.zero_products && c.effective_reversible) {
        if regulated_expression {
            LawFamily::GeneRegulatory
        } else if c.zero_reactants {
            LawFamily::ZeroReactants
        } else {
            LawFamily::ZeroProducts
        }
    } else if c.zero_products {
        // Irreversible degradation is plain mass action
        LawFamily::NonEnzyme
    } else if c.uni_uni && regulated_expression {
        LawFamily::GeneRegulatory
    } else if c.non_enzyme {
        LawFamily::NonEnzyme
    } else if c.uni_uni {
        LawFamily::UniUni
    } else if c.bi_uni {
        LawFamily::BiUni
    } else if c.bi_bi {
        LawFamily::BiBi
    } else {
        LawFamily::ArbitraryEnzyme
    };
    let preferred = config.default_for(family);
    if c.is_legal(preferred) {
        return Ok(preferred);
    }
    let fallback = c
        .legal_categories
        .iter()
        .find(|category| category.belongs_to(family))
        .or_else(|| c.legal_categories.first())
        .copied()
        .ok_or_else(|| DomainError::NoApplicableLaw {
            reaction: c.reaction_id.clone(),
        })?;
    warn!(
        reaction = %c.reaction_id,
        preferred = %preferred,
        fallback = %fallback,
        "Default kinetic law is not applicable, using fallback"
    );
    Ok(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::ConfigurationBuilder;
    use crate::network::reaction::{ModifierReference, ReactionBuilder};
    use crate::network::species::Species;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn setup_network() -> Network {
        let mut network = Network::new_empty();
        for (id, annotation) in [
            ("A", "SBO:0000247"),
            ("B", "SBO:0000247"),
            ("C", "SBO:0000247"),
            ("D", "SBO:0000247"),
            ("h2o", "SIMPLE_MOLECULE"),
            ("E", "SBO:0000252"),
            ("I", "SBO:0000247"),
            ("X", "SBO:0000247"),
            ("g", "GENE"),
            ("m", "RNA"),
            ("p", "PROTEIN"),
            ("nothing", "DEGRADED"),
        ] {
            network.add_species(Species::new(id, "cell", Some(annotation)));
        }
        network
    }

    fn setup_reaction(
        reactants: &[(&str, f64)],
        products: &[(&str, f64)],
        modifiers: &[(&str, &str)],
        reversible: bool,
    ) -> Reaction {
        let references = |refs: &[(&str, f64)]| {
            refs.iter()
                .map(|(s, n)| SpeciesReference::new(s, *n))
                .collect::<Vec<_>>()
        };
        ReactionBuilder::default()
            .id("r1".to_string())
            .reactants(references(reactants))
            .products(references(products))
            .modifiers(
                modifiers
                    .iter()
                    .map(|(s, a)| ModifierReference::new(s, Some(a)))
                    .collect(),
            )
            .reversible(reversible)
            .build()
            .unwrap()
    }

    #[test]
    fn uni_uni_without_modifiers_is_mass_action() {
        let network = setup_network();
        let reaction = setup_reaction(&[("A", 1.)], &[("B", 1.)], &[], false);
        let c = classify(&reaction, &network, &Configuration::default()).unwrap();
        assert!(c.non_enzyme);
        assert!(c.uni_uni);
        assert!(!c.bi_uni);
        assert!(!c.bi_bi);
        assert_eq!(
            c.legal_categories,
            vec![
                LawCategory::GeneralizedMassAction,
                LawCategory::ZerothOrderForward
            ]
        );
        assert_eq!(c.chosen_category, LawCategory::GeneralizedMassAction);
    }

    #[test]
    fn reversible_uni_uni_without_modifiers() {
        let network = setup_network();
        let reaction = setup_reaction(&[("A", 1.)], &[("B", 1.)], &[], true);
        let c = classify(&reaction, &network, &Configuration::default()).unwrap();
        assert_eq!(
            c.legal_categories,
            vec![
                LawCategory::GeneralizedMassAction,
                LawCategory::ZerothOrderForward
            ]
        );
    }

    #[test]
    fn bi_uni_enzyme_reaction() {
        let network = setup_network();
        let reaction = setup_reaction(
            &[("A", 1.), ("B", 1.)],
            &[("C", 1.)],
            &[("E", "SBO:0000460")],
            false,
        );
        let c = classify(&reaction, &network, &Configuration::default()).unwrap();
        assert!(c.bi_uni);
        assert!(!c.non_enzyme);
        assert_eq!(c.enzymes, vec!["E".to_string()]);
        for category in [
            LawCategory::RandomOrder,
            LawCategory::Ordered,
            LawCategory::Convenience,
        ] {
            assert!(c.is_legal(category), "{category} should be legal");
        }
        assert_eq!(c.chosen_category, LawCategory::RandomOrder);

        let config = ConfigurationBuilder::default()
            .bi_uni_default(LawCategory::Ordered)
            .build()
            .unwrap();
        let c = classify(&reaction, &network, &config).unwrap();
        assert_eq!(c.chosen_category, LawCategory::Ordered);
    }

    #[test]
    fn classification_is_deterministic() {
        let network = setup_network();
        let reaction = setup_reaction(
            &[("A", 2.), ("B", 1.)],
            &[("C", 1.), ("D", 1.)],
            &[("E", "SBO:0000460"), ("I", "SBO:0000020")],
            true,
        );
        let config = Configuration::default();
        let first = classify(&reaction, &network, &config).unwrap();
        let second = classify(&reaction, &network, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unmodulated_reactions_exclude_modulation_laws() {
        let network = setup_network();
        let config = ConfigurationBuilder::default()
            .all_reactions_enzyme_catalyzed(true)
            .build()
            .unwrap();
        let reaction = setup_reaction(&[("A", 1.)], &[("B", 1.)], &[], false);
        let c = classify(&reaction, &network, &config).unwrap();
        assert!(c.without_modulation);
        assert!(!c.non_enzyme);
        assert!(c
            .legal_categories
            .iter()
            .all(|category| !category.attributes().requires_modulation));
        assert!(c.is_legal(LawCategory::IrrevNonModulatedNonInteracting));
        assert_eq!(c.chosen_category, LawCategory::MichaelisMenten);
    }

    #[test]
    fn inhibited_reactions_allow_inhibition_laws() {
        let network = setup_network();
        let reaction = setup_reaction(
            &[("A", 1.)],
            &[("B", 1.)],
            &[("E", "SBO:0000460"), ("I", "INHIBITION")],
            false,
        );
        let c = classify(&reaction, &network, &Configuration::default()).unwrap();
        assert!(!c.without_modulation);
        assert_eq!(c.inhibitors, vec!["I".to_string()]);
        assert!(c.is_legal(LawCategory::CompetitiveNonExclusiveInhibition));
        assert!(!c.is_legal(LawCategory::IrrevNonModulatedNonInteracting));
    }

    #[test]
    fn non_enzyme_catalyst_forces_non_enzyme() {
        let network = setup_network();
        let reaction = setup_reaction(
            &[("A", 1.)],
            &[("B", 1.)],
            &[("E", "SBO:0000460"), ("X", "SBO:0000013")],
            false,
        );
        let c = classify(&reaction, &network, &Configuration::default()).unwrap();
        assert!(c.non_enzyme);
        assert_eq!(c.non_enzyme_catalysts, vec!["X".to_string()]);
        assert_eq!(c.chosen_category, LawCategory::GeneralizedMassAction);
    }

    #[test]
    fn ignored_species_change_the_shape() {
        let network = setup_network();
        let reaction = setup_reaction(
            &[("A", 1.), ("h2o", 1.)],
            &[("B", 1.)],
            &[("E", "SBO:0000460")],
            false,
        );
        let c = classify(&reaction, &network, &Configuration::default()).unwrap();
        assert!(c.bi_uni);
        let config = ConfigurationBuilder::default()
            .ignore_species_identifiers(BTreeSet::from(["h2o".to_string()]))
            .build()
            .unwrap();
        let c = classify(&reaction, &network, &config).unwrap();
        assert!(c.uni_uni);
        assert_eq!(c.reactants.len(), 1);
        assert_eq!(c.chosen_category, LawCategory::MichaelisMenten);
    }

    #[test]
    fn non_integer_stoichiometry_excludes_hill() {
        let network = setup_network();
        let reaction = setup_reaction(
            &[("A", 0.5), ("B", 0.5)],
            &[("C", 1.)],
            &[("E", "SBO:0000460")],
            false,
        );
        let c = classify(&reaction, &network, &Configuration::default()).unwrap();
        assert!(!c.integer_stoichiometry);
        assert!(c.uni_uni);
        assert!(!c.is_legal(LawCategory::Hill));
        assert!(c.is_legal(LawCategory::MichaelisMenten));
    }

    #[test]
    fn synthesis_and_degradation() {
        let network = setup_network();
        let synthesis = setup_reaction(&[], &[("A", 1.)], &[], false);
        let c = classify(&synthesis, &network, &Configuration::default()).unwrap();
        assert!(c.zero_reactants);
        assert_eq!(c.chosen_category, LawCategory::ZerothOrderForward);

        let degradation = setup_reaction(&[("A", 1.)], &[("nothing", 1.)], &[], true);
        let c = classify(&degradation, &network, &Configuration::default()).unwrap();
        assert!(c.zero_products);
        assert!(c.non_enzyme);
        assert_eq!(c.chosen_category, LawCategory::ZerothOrderReverse);

        let degradation = setup_reaction(&[("A", 1.)], &[], &[], false);
        let c = classify(&degradation, &network, &Configuration::default()).unwrap();
        assert!(!c.is_legal(LawCategory::ZerothOrderReverse));
        assert_eq!(c.chosen_category, LawCategory::GeneralizedMassAction);
    }

    #[test]
    fn gene_product_synthesis_prefers_gene_regulation() {
        let network = setup_network();
        let synthesis = setup_reaction(
            &[],
            &[("m", 1.)],
            &[("g", "TRANSCRIPTIONAL_ACTIVATION")],
            false,
        );
        let c = classify(&synthesis, &network, &Configuration::default()).unwrap();
        assert!(c.zero_reactants);
        assert!(c.reaction_with_genes);
        assert!(c.reaction_with_rnas);
        assert!(!c.is_legal(LawCategory::HillHinze));
        assert_eq!(c.chosen_category, LawCategory::HillRadde);
        assert!(c.chosen_category.attributes().gene_regulatory);

        let config = ConfigurationBuilder::default()
            .gene_regulation_default(LawCategory::Vohradsky)
            .build()
            .unwrap();
        let c = classify(&synthesis, &network, &config).unwrap();
        assert_eq!(c.chosen_category, LawCategory::Vohradsky);
    }

    #[test]
    fn reversible_gene_product_degradation_prefers_gene_regulation() {
        let network = setup_network();
        let degradation = setup_reaction(&[("m", 1.)], &[], &[], true);
        let c = classify(&degradation, &network, &Configuration::default()).unwrap();
        assert!(c.zero_products);
        assert!(c.reaction_with_rnas);
        assert_eq!(c.chosen_category, LawCategory::SSystem);
        assert!(c.chosen_category.attributes().gene_regulatory);
        assert!(c.chosen_category.attributes().zero_products);

        // Irreversible degradation keeps the non-enzyme default
        let degradation = setup_reaction(&[("m", 1.)], &[], &[], false);
        let c = classify(&degradation, &network, &Configuration::default()).unwrap();
        assert_eq!(c.chosen_category, LawCategory::GeneralizedMassAction);
    }

    #[test]
    fn invalid_configuration_is_rejected() {
        let network = setup_network();
        let reaction = setup_reaction(&[("A", 1.)], &[("B", 1.)], &[], false);
        let config = Configuration {
            default_compartment_size: 0.,
            ..Configuration::default()
        };
        match classify(&reaction, &network, &config) {
            Err(DomainError::InvalidConfiguration { option, .. }) => {
                assert_eq!(option, "default_compartment_size")
            }
            other => panic!("Expected invalid configuration, got {other:?}"),
        }
    }

    #[test]
    fn transcription_prefers_gene_regulation() {
        let network = setup_network();
        let mut reaction = setup_reaction(&[("g", 1.)], &[("m", 1.)], &[], false);
        reaction.annotation = Some("TRANSCRIPTION".to_string());
        let c = classify(&reaction, &network, &Configuration::default()).unwrap();
        assert!(c.reaction_with_genes);
        assert!(c.reaction_with_rnas);
        assert_eq!(c.process_type, Some(ProcessType::Transcription));
        assert_eq!(c.chosen_category, LawCategory::HillHinze);
        assert!(c.is_legal(LawCategory::GeneralizedMassAction));
        assert_eq!(c.boundary_condition_species.as_deref(), Some("g"));
    }

    #[test]
    fn boundary_condition_is_idempotent() {
        let mut network = setup_network();
        let reaction = setup_reaction(&[("g", 1.)], &[("m", 1.)], &[], false);
        let c = classify(&reaction, &network, &Configuration::default()).unwrap();
        assert!(c.apply_boundary_condition(&mut network));
        assert!(network.species["g"].boundary_condition);
        assert!(!c.apply_boundary_condition(&mut network));
        assert!(network.species["g"].boundary_condition);

        let config = ConfigurationBuilder::default()
            .set_boundary_condition_for_genes(false)
            .build()
            .unwrap();
        let c = classify(&reaction, &network, &config).unwrap();
        assert_eq!(c.boundary_condition_species, None);
    }

    #[test]
    fn process_type_mismatches() {
        let network = setup_network();
        let cases = [
            ("g", "m", "TRANSLATION", ProcessType::Transcription),
            ("m", "p", "TRANSCRIPTION", ProcessType::Translation),
            ("g", "p", "TRANSLATION", ProcessType::Transcription),
            ("A", "B", "TRANSCRIPTION", ProcessType::StateTransition),
        ];
        for (reactant, product, annotation, expected) in cases {
            let mut reaction = setup_reaction(&[(reactant, 1.)], &[(product, 1.)], &[], false);
            reaction.annotation = Some(annotation.to_string());
            match classify(&reaction, &network, &Configuration::default()) {
                Err(DomainError::ProcessTypeMismatch {
                    reaction,
                    expected: e,
                }) => {
                    assert_eq!(reaction, "r1");
                    assert_eq!(e, expected);
                }
                other => panic!("Expected mismatch for {reactant} -> {product}, got {other:?}"),
            }
        }
    }

    #[test]
    fn translation_is_consistent() {
        let network = setup_network();
        let mut reaction = setup_reaction(&[("m", 1.)], &[("p", 1.)], &[], false);
        reaction.annotation = Some("SBO:0000184".to_string());
        let c = classify(&reaction, &network, &Configuration::default()).unwrap();
        assert_eq!(c.process_type, Some(ProcessType::Translation));
        assert_eq!(c.boundary_condition_species.as_deref(), Some("m"));
    }

    #[test]
    fn unresolvable_species_is_an_error() {
        let network = setup_network();
        let reaction = setup_reaction(&[("missing", 1.)], &[("B", 1.)], &[], false);
        assert_eq!(
            classify(&reaction, &network, &Configuration::default()),
            Err(DomainError::UnresolvableSpecies {
                reaction: "r1".to_string(),
                species: "missing".to_string()
            })
        );
    }

    #[test]
    fn treat_all_reversible_excludes_irreversible_laws() {
        let network = setup_network();
        let reaction = setup_reaction(
            &[("A", 1.)],
            &[("B", 1.)],
            &[("E", "SBO:0000460")],
            false,
        );
        let config = ConfigurationBuilder::default()
            .treat_all_reactions_reversible(true)
            .build()
            .unwrap();
        let c = classify(&reaction, &network, &config).unwrap();
        assert!(c.effective_reversible);
        assert!(!c.is_legal(LawCategory::IrrevNonModulatedNonInteracting));
        assert!(c.is_legal(LawCategory::CommonModular));
    }
}

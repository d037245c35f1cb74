//! Mapping of law categories onto the functions building their kinetic laws
use crate::error::DomainError;
use crate::kinetics::category::LawCategory;
use crate::kinetics::classifier::ReactionClassification;
use crate::kinetics::laws;
use crate::kinetics::pool::UnitParameterPool;
use crate::network::reaction::{KineticLaw, Reaction};

/// Everything a law constructor needs to know about the reaction it builds a law for
pub struct LawContext<'a> {
    pub reaction: &'a Reaction,
    pub classification: &'a ReactionClassification,
    /// Pool the law's parameters and their units are taken from
    pub pool: &'a mut UnitParameterPool,
    /// Whether the stoichiometric matrix of the network has full column rank
    pub full_column_rank: bool,
}

/// Builds the kinetic law of a given category
pub trait LawRegistry {
    fn instantiate(
        &self,
        category: LawCategory,
        ctx: &mut LawContext<'_>,
    ) -> Result<KineticLaw, DomainError>;
}

pub type LawConstructor = fn(&mut LawContext<'_>) -> Result<KineticLaw, DomainError>;

/// Registry with a constructor for every [`LawCategory`]
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticLawRegistry;

impl StaticLawRegistry {
    pub fn constructor(category: LawCategory) -> LawConstructor {
        match category {
            LawCategory::GeneralizedMassAction => laws::generalized_mass_action,
            LawCategory::ZerothOrderForward => laws::zeroth_order_forward,
            LawCategory::ZerothOrderReverse => laws::zeroth_order_reverse,
            LawCategory::Convenience => laws::convenience,
            LawCategory::MichaelisMenten => laws::michaelis_menten,
            LawCategory::RandomOrder => laws::random_order,
            LawCategory::Ordered => laws::ordered,
            LawCategory::PingPong => laws::ping_pong,
            LawCategory::Hill => laws::hill,
            LawCategory::IrrevNonModulatedNonInteracting => laws::irrev_non_modulated,
            LawCategory::CompetitiveNonExclusiveInhibition => laws::competitive_inhibition,
            LawCategory::PowerLawModular => laws::power_law_modular,
            LawCategory::CommonModular => laws::common_modular,
            LawCategory::DirectBindingModular => laws::direct_binding_modular,
            LawCategory::SimultaneousBindingModular => laws::simultaneous_binding_modular,
            LawCategory::ForceDependentModular => laws::force_dependent_modular,
            LawCategory::HillHinze => laws::hill_hinze,
            LawCategory::HillRadde => laws::hill_radde,
            LawCategory::SSystem => laws::s_system,
            LawCategory::Vohradsky => laws::vohradsky,
            LawCategory::NetGeneratorNonLinear => laws::net_generator_non_linear,
            LawCategory::Weaver => laws::weaver,
            LawCategory::HSystem => laws::h_system,
            LawCategory::AdditiveModelLinear => laws::additive_model_linear,
        }
    }
}

impl LawRegistry for StaticLawRegistry {
    fn instantiate(
        &self,
        category: LawCategory,
        ctx: &mut LawContext<'_>,
    ) -> Result<KineticLaw, DomainError> {
        if !ctx.classification.is_legal(category) {
            return Err(DomainError::LawInstantiation {
                reaction: ctx.reaction.id.clone(),
                category,
                reason: "the category is not applicable to the reaction".to_string(),
            });
        }
        StaticLawRegistry::constructor(category)(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Configuration;
    use crate::kinetics::classifier::classify;
    use crate::network::reaction::{ModifierReference, ReactionBuilder, SpeciesReference};
    use crate::network::species::Species;
    use crate::network::Network;

    fn setup_network() -> (Network, Reaction) {
        let mut network = Network::new_empty();
        for id in ["A", "B", "C", "D"] {
            network.add_species(Species::new(id, "cell", Some("SBO:0000247")));
        }
        network.add_species(Species::new("E", "cell", Some("SBO:0000252")));
        network.add_species(Species::new("I", "cell", Some("SBO:0000247")));
        let reaction = ReactionBuilder::default()
            .id("r1".to_string())
            .reactants(vec![
                SpeciesReference::new("A", 1.),
                SpeciesReference::new("B", 1.),
            ])
            .products(vec![
                SpeciesReference::new("C", 1.),
                SpeciesReference::new("D", 1.),
            ])
            .modifiers(vec![
                ModifierReference::new("E", Some("SBO:0000460")),
                ModifierReference::new("I", Some("SBO:0000020")),
            ])
            .reversible(true)
            .build()
            .unwrap();
        (network, reaction)
    }

    #[test]
    fn every_legal_category_can_be_instantiated() {
        let (network, reaction) = setup_network();
        let classification = classify(&reaction, &network, &Configuration::default()).unwrap();
        let mut pool = UnitParameterPool::new(
            &network.unit_definitions,
            &network.default_units,
            1.,
        );
        for category in classification.legal_categories.clone() {
            let mut ctx = LawContext {
                reaction: &reaction,
                classification: &classification,
                pool: &mut pool,
                full_column_rank: true,
            };
            let law = StaticLawRegistry
                .instantiate(category, &mut ctx)
                .unwrap_or_else(|e| panic!("{category}: {e}"));
            assert_eq!(law.category, Some(category));
            assert!(!law.math.is_blank());
            for id in law.local_parameters.keys() {
                assert!(law.math.refers_to(id), "{category} does not use {id}");
            }
        }
    }

    #[test]
    fn illegal_category_is_rejected() {
        let (network, reaction) = setup_network();
        let classification = classify(&reaction, &network, &Configuration::default()).unwrap();
        let mut pool = UnitParameterPool::new(
            &network.unit_definitions,
            &network.default_units,
            1.,
        );
        let mut ctx = LawContext {
            reaction: &reaction,
            classification: &classification,
            pool: &mut pool,
            full_column_rank: true,
        };
        match StaticLawRegistry.instantiate(LawCategory::MichaelisMenten, &mut ctx) {
            Err(DomainError::LawInstantiation { category, .. }) => {
                assert_eq!(category, LawCategory::MichaelisMenten)
            }
            other => panic!("Expected an instantiation error, got {other:?}"),
        }
    }
}

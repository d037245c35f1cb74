//! Batch generation of kinetic laws for the reactions of a network
use tracing::{debug, info, warn};

use crate::configuration::{Configuration, FailurePolicy};
use crate::error::DomainError;
use crate::kinetics::classifier::{classify_with, ReactionClassification};
use crate::kinetics::pool::UnitParameterPool;
use crate::kinetics::registry::{LawContext, LawRegistry, StaticLawRegistry};
use crate::network::reaction::KineticLaw;
use crate::network::stoichiometry::StoichiometricMatrix;
use crate::network::Network;
use crate::ontology::{RoleResolver, SboRoleResolver};
use crate::submodel::{CommitSummary, Submodel, Target};

/// Receives progress updates of a generation run, and may cancel it between reactions
pub trait ProgressReporter {
    /// Called before the reaction at `index` (of `total`) is processed
    fn on_item(&mut self, index: usize, total: usize);

    fn on_done(&mut self);

    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Reporter ignoring all progress
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn on_item(&mut self, _index: usize, _total: usize) {}

    fn on_done(&mut self) {}
}

/// Generates kinetic laws for the reactions of a network
///
/// # Examples
/// ```rust
/// use lawgen_core::configuration::Configuration;
/// use lawgen_core::network::Network;
/// use lawgen_core::network::reaction::{ReactionBuilder, SpeciesReference};
/// use lawgen_core::network::species::Species;
/// use lawgen_core::submodel::Target;
/// use lawgen_core::submodel::generator::{KineticLawGenerator, NoProgress};
/// let mut network = Network::new_empty();
/// network.add_species(Species::new("A", "cell", Some("SBO:0000247")));
/// network.add_species(Species::new("B", "cell", Some("SBO:0000247")));
/// network.add_reaction(
///     ReactionBuilder::default()
///         .id("r1".to_string())
///         .reactants(vec![SpeciesReference::new("A", 1.)])
///         .products(vec![SpeciesReference::new("B", 1.)])
///         .build()
///         .unwrap(),
/// );
/// let generator = KineticLawGenerator::new(Configuration::default()).unwrap();
/// let summary = generator
///     .regenerate(&mut network, &Target::All, &mut NoProgress)
///     .unwrap();
/// assert_eq!(summary.created_law_count, 1);
/// let law = network.reactions["r1"].kinetic_law.as_ref().unwrap();
/// assert_eq!(law.math.formula(), "kf_r1 * A");
/// ```
#[derive(Debug, Clone)]
pub struct KineticLawGenerator<G = StaticLawRegistry, R = SboRoleResolver> {
    config: Configuration,
    registry: G,
    resolver: R,
}

impl KineticLawGenerator {
    /// Create a generator using the built in laws and SBO resolver
    pub fn new(config: Configuration) -> Result<Self, DomainError> {
        KineticLawGenerator::with_collaborators(config, StaticLawRegistry, SboRoleResolver)
    }
}

impl<G: LawRegistry, R: RoleResolver> KineticLawGenerator<G, R> {
    pub fn with_collaborators(
        config: Configuration,
        registry: G,
        resolver: R,
    ) -> Result<Self, DomainError> {
        config.validate()?;
        Ok(KineticLawGenerator {
            config,
            registry,
            resolver,
        })
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Generate and commit kinetic laws for the reactions selected by `target`
    ///
    /// The network is only modified if every selected reaction could be handled, or if the
    /// failure policy is [`FailurePolicy::SkipAndContinue`].
    pub fn regenerate(
        &self,
        network: &mut Network,
        target: &Target,
        progress: &mut dyn ProgressReporter,
    ) -> Result<CommitSummary, DomainError> {
        let submodel = self.prepare(network, target, progress)?;
        Ok(submodel.commit(network))
    }

    /// Generate kinetic laws on a submodel, without touching the network
    pub fn prepare(
        &self,
        network: &Network,
        target: &Target,
        progress: &mut dyn ProgressReporter,
    ) -> Result<Submodel, DomainError> {
        let mut submodel = Submodel::new(network, target, &self.config, &self.resolver)?;
        submodel.full_column_rank = StoichiometricMatrix::from_network(network).has_full_column_rank();
        let mut pool = UnitParameterPool::new(
            &network.unit_definitions,
            &network.default_units,
            self.config.default_new_parameter_value,
        );
        let reaction_ids: Vec<String> = submodel.network.reactions.keys().cloned().collect();
        let total = reaction_ids.len();
        info!(
            reactions = total,
            full_column_rank = submodel.full_column_rank,
            "Generating kinetic laws"
        );
        for (index, id) in reaction_ids.iter().enumerate() {
            if progress.is_cancelled() {
                info!(processed = index, "Kinetic law generation cancelled");
                return Err(DomainError::Cancelled { processed: index });
            }
            progress.on_item(index, total);
            match self.generate_law(&submodel, id, &mut pool) {
                Ok((classification, law)) => submodel.insert_law(classification, law),
                Err(error) => match self.config.failure_policy {
                    FailurePolicy::Abort => return Err(error),
                    FailurePolicy::SkipAndContinue => {
                        warn!(reaction = %id, %error, "Skipping reaction");
                        submodel.skipped.push((id.clone(), error));
                    }
                },
            }
        }
        progress.on_done();
        let (new_unit_definitions, _) = pool.into_parts();
        submodel.new_unit_definitions = new_unit_definitions;
        Ok(submodel)
    }

    fn generate_law(
        &self,
        submodel: &Submodel,
        reaction_id: &str,
        pool: &mut UnitParameterPool,
    ) -> Result<(ReactionClassification, KineticLaw), DomainError> {
        let reaction = submodel.network.reactions.get(reaction_id).ok_or_else(|| {
            DomainError::UnknownReaction {
                reaction: reaction_id.to_string(),
            }
        })?;
        let classification =
            classify_with(reaction, &submodel.network, &self.config, &self.resolver)?;
        let mut ctx = LawContext {
            reaction,
            classification: &classification,
            pool,
            full_column_rank: submodel.full_column_rank,
        };
        let law = self
            .registry
            .instantiate(classification.chosen_category, &mut ctx)?;
        debug!(
            reaction = %reaction_id,
            category = ?classification.chosen_category,
            parameters = law.local_parameters.len(),
            "Instantiated kinetic law"
        );
        Ok((classification, law))
    }
}

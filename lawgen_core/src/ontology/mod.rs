//! Semantic roles of species, modifiers and reactions
//!
//! Annotations in a network are controlled vocabulary codes (Systems Biology Ontology terms, or
//! the species type names used by CellDesigner). Everything else in the crate only deals with
//! the [`Role`] a code resolves to, obtained through a [`RoleResolver`].
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod sbo;

pub use sbo::SboRoleResolver;

/// Maps an annotation code onto a [`Role`]
pub trait RoleResolver {
    /// Resolve the role of an annotation code, unknown codes resolve to [`Role::Unclassified`]
    fn role_of(&self, code: &str) -> Role;

    /// Resolve an optional annotation, a missing annotation is [`Role::Unclassified`]
    fn role_of_opt(&self, code: Option<&str>) -> Role {
        code.map(|c| self.role_of(c)).unwrap_or(Role::Unclassified)
    }
}

/// Semantic role of an entity in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    // region Entities
    Gene,
    GeneCodingRegion,
    Rna,
    MessengerRna,
    AntisenseRna,
    Protein,
    /// Generic macromolecule
    Macromolecule,
    Complex,
    SimpleMolecule,
    Ion,
    Receptor,
    /// Truncated protein
    Truncated,
    /// Known to be some entity, but of unknown kind
    Unknown,
    /// Placeholder for nothing, used for synthesis and degradation
    EmptySet,
    // endregion Entities

    // region Modifiers
    Catalyst,
    EnzymaticCatalyst,
    Inhibitor,
    TranscriptionalInhibitor,
    TranslationalInhibitor,
    Activator,
    TranscriptionalActivator,
    TranslationalActivator,
    Stimulator,
    Trigger,
    /// Modifier with no further specification
    Modifier,
    // endregion Modifiers

    // region Processes
    Transcription,
    Translation,
    StateTransition,
    Transport,
    BiochemicalReaction,
    // endregion Processes
    /// The code was missing or not recognized
    Unclassified,
}

impl Role {
    pub fn is_gene_like(&self) -> bool {
        matches!(self, Role::Gene | Role::GeneCodingRegion)
    }

    pub fn is_rna_like(&self) -> bool {
        matches!(self, Role::Rna | Role::MessengerRna)
    }

    /// Proteins and the generic entities a translation can produce
    pub fn is_protein_like(&self) -> bool {
        matches!(
            self,
            Role::Protein | Role::Macromolecule | Role::Receptor | Role::Truncated
        )
    }

    pub fn is_empty_set(&self) -> bool {
        matches!(self, Role::EmptySet)
    }

    /// Any catalysing modifier, enzymatic or not
    pub fn is_catalyst(&self) -> bool {
        matches!(self, Role::Catalyst | Role::EnzymaticCatalyst)
    }

    pub fn is_enzymatic_catalyst(&self) -> bool {
        matches!(self, Role::EnzymaticCatalyst)
    }

    /// Inhibitors, including transcriptional and translational ones
    pub fn is_inhibitor(&self) -> bool {
        matches!(
            self,
            Role::Inhibitor | Role::TranscriptionalInhibitor | Role::TranslationalInhibitor
        )
    }

    /// Activators, including transcriptional and translational ones, stimulators and triggers
    pub fn is_activator(&self) -> bool {
        matches!(
            self,
            Role::Activator
                | Role::TranscriptionalActivator
                | Role::TranslationalActivator
                | Role::Stimulator
                | Role::Trigger
        )
    }

    /// Process type of a reaction annotated with this role, if it is one the classifier checks
    pub fn process_type(&self) -> Option<ProcessType> {
        match self {
            Role::Transcription => Some(ProcessType::Transcription),
            Role::Translation => Some(ProcessType::Translation),
            Role::StateTransition => Some(ProcessType::StateTransition),
            _ => None,
        }
    }
}

/// Process types checked for consistency with the participants of a reaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessType {
    Transcription,
    Translation,
    StateTransition,
}

impl Display for ProcessType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessType::Transcription => write!(f, "transcription"),
            ProcessType::Translation => write!(f, "translation"),
            ProcessType::StateTransition => write!(f, "state transition"),
        }
    }
}

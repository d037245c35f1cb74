//! Errors raised while classifying reactions and generating kinetic laws
use thiserror::Error;

use crate::kinetics::category::LawCategory;
use crate::ontology::ProcessType;

/// Errors that can occur during classification, law generation or configuration validation
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomainError {
    /// The annotated process type of a reaction contradicts its participants
    #[error("Reaction {reaction} must be a {expected}")]
    ProcessTypeMismatch {
        reaction: String,
        expected: ProcessType,
    },
    /// A reaction refers to a species which is not part of the network
    #[error("Reaction {reaction} refers to unknown species {species}")]
    UnresolvableSpecies { reaction: String, species: String },
    /// A targeted reaction is not part of the network
    #[error("Reaction {reaction} is not present in the network")]
    UnknownReaction { reaction: String },
    /// A configuration option has a malformed value
    #[error("Invalid value for option `{option}`: {reason}")]
    InvalidConfiguration { option: String, reason: String },
    /// No law category is applicable to the reaction
    #[error("No kinetic law category is applicable to reaction {reaction}")]
    NoApplicableLaw { reaction: String },
    /// The registry failed to build a law of the chosen category
    #[error("Unable to create a {category} law for reaction {reaction}: {reason}")]
    LawInstantiation {
        reaction: String,
        category: LawCategory,
        reason: String,
    },
    /// The run was cancelled before it was committed
    #[error("Kinetic law generation was cancelled after {processed} reactions")]
    Cancelled { processed: usize },
}

impl DomainError {
    /// Id of the reaction the error refers to, if any
    pub fn reaction_id(&self) -> Option<&str> {
        match self {
            DomainError::ProcessTypeMismatch { reaction, .. }
            | DomainError::UnresolvableSpecies { reaction, .. }
            | DomainError::UnknownReaction { reaction }
            | DomainError::NoApplicableLaw { reaction }
            | DomainError::LawInstantiation { reaction, .. } => Some(reaction),
            DomainError::InvalidConfiguration { .. } | DomainError::Cancelled { .. } => None,
        }
    }

    pub(crate) fn invalid_configuration(option: &str, reason: impl Into<String>) -> Self {
        DomainError::InvalidConfiguration {
            option: option.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_mismatch_message() {
        let err = DomainError::ProcessTypeMismatch {
            reaction: "r1".to_string(),
            expected: ProcessType::Transcription,
        };
        assert_eq!(err.to_string(), "Reaction r1 must be a transcription");
        assert_eq!(err.reaction_id(), Some("r1"));
    }

    #[test]
    fn configuration_errors_have_no_reaction() {
        let err = DomainError::invalid_configuration("default_compartment_size", "must be > 0");
        assert_eq!(err.reaction_id(), None);
    }
}

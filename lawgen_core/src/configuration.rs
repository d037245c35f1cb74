//! Options controlling classification, kinetic law generation and function term synthesis
//!
//! A [`Configuration`] is passed explicitly to every operation that depends on it, there is no
//! process wide configuration state.
use std::collections::BTreeSet;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::kinetics::category::{LawCategory, LawFamily};
use crate::ontology::Role;

/// Options recognized by the classifier, the kinetic law generator and the function term
/// generator
///
/// # Examples
/// ```rust
/// use lawgen_core::configuration::ConfigurationBuilder;
/// use lawgen_core::kinetics::category::LawCategory;
/// let config = ConfigurationBuilder::default()
///     .new_parameters_global(true)
///     .uni_uni_default(LawCategory::Convenience)
///     .build()
///     .unwrap();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[builder(default)]
#[serde(default)]
pub struct Configuration {
    /// Treat every reaction as reversible, regardless of its own flag
    pub treat_all_reactions_reversible: bool,
    /// Treat every reaction as enzyme catalyzed, regardless of its modifiers
    pub all_reactions_enzyme_catalyzed: bool,
    /// Generate laws for every reaction, not only the ones missing a law
    pub generate_for_all_reactions: bool,
    /// Remove parameters and units no longer referenced after a commit
    pub remove_unnecessary_parameters_and_units: bool,
    /// Store newly created parameters globally instead of locally in the kinetic law
    pub new_parameters_global: bool,
    /// Mark the gene or RNA reactant of uni-uni reactions as a boundary condition
    pub set_boundary_condition_for_genes: bool,
    pub default_species_initial_value: f64,
    pub default_compartment_size: f64,
    pub default_new_parameter_value: f64,
    /// Species (by id or CV term) which are excluded from stoichiometric analysis
    pub ignore_species_identifiers: BTreeSet<String>,
    /// Species roles that can act as enzymes, proteins always can
    pub possible_enzymes: BTreeSet<Role>,
    pub uni_uni_default: LawCategory,
    pub bi_uni_default: LawCategory,
    pub bi_bi_default: LawCategory,
    pub gene_regulation_default: LawCategory,
    pub non_enzyme_default: LawCategory,
    pub arbitrary_enzyme_default: LawCategory,
    pub zero_reactants_default: LawCategory,
    pub zero_products_default: LawCategory,
    /// How positive inputs of a transition are combined
    pub default_function_term_scheme: FunctionTermScheme,
    /// Sign assumed for transition inputs with no or an unknown sign
    pub default_sign_for_unknown_input: DefaultSign,
    /// Replace function terms transitions already have
    pub overwrite_existing_function_terms: bool,
    /// What to do when a reaction of a batch cannot be classified
    pub failure_policy: FailurePolicy,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            treat_all_reactions_reversible: false,
            all_reactions_enzyme_catalyzed: false,
            generate_for_all_reactions: false,
            remove_unnecessary_parameters_and_units: true,
            new_parameters_global: false,
            set_boundary_condition_for_genes: true,
            default_species_initial_value: 1.0,
            default_compartment_size: 1.0,
            default_new_parameter_value: 1.0,
            ignore_species_identifiers: BTreeSet::new(),
            possible_enzymes: default_possible_enzymes(),
            uni_uni_default: LawCategory::MichaelisMenten,
            bi_uni_default: LawCategory::RandomOrder,
            bi_bi_default: LawCategory::RandomOrder,
            gene_regulation_default: LawCategory::HillHinze,
            non_enzyme_default: LawCategory::GeneralizedMassAction,
            arbitrary_enzyme_default: LawCategory::Convenience,
            zero_reactants_default: LawCategory::ZerothOrderForward,
            zero_products_default: LawCategory::ZerothOrderReverse,
            default_function_term_scheme: FunctionTermScheme::AllActivatorsAnd,
            default_sign_for_unknown_input: DefaultSign::Positive,
            overwrite_existing_function_terms: false,
            failure_policy: FailurePolicy::Abort,
        }
    }
}

fn default_possible_enzymes() -> BTreeSet<Role> {
    BTreeSet::from([
        Role::AntisenseRna,
        Role::SimpleMolecule,
        Role::Unknown,
        Role::Complex,
        Role::Truncated,
        Role::Macromolecule,
        Role::Rna,
        Role::Receptor,
    ])
}

impl Configuration {
    /// Check that every option holds a usable value
    pub fn validate(&self) -> Result<(), DomainError> {
        check_value(
            "default_species_initial_value",
            self.default_species_initial_value,
            false,
        )?;
        check_value(
            "default_compartment_size",
            self.default_compartment_size,
            true,
        )?;
        check_value(
            "default_new_parameter_value",
            self.default_new_parameter_value,
            false,
        )?;
        if self
            .ignore_species_identifiers
            .iter()
            .any(|id| id.trim().is_empty())
        {
            return Err(DomainError::invalid_configuration(
                "ignore_species_identifiers",
                "identifiers must not be empty",
            ));
        }
        for (option, category, family) in self.defaults() {
            if !category.belongs_to(family) {
                return Err(DomainError::invalid_configuration(
                    option,
                    format!("{} is not a {:?} law", category, family),
                ));
            }
        }
        Ok(())
    }

    /// Configured default category of each law family
    fn defaults(&self) -> [(&'static str, LawCategory, LawFamily); 8] {
        [
            ("uni_uni_default", self.uni_uni_default, LawFamily::UniUni),
            ("bi_uni_default", self.bi_uni_default, LawFamily::BiUni),
            ("bi_bi_default", self.bi_bi_default, LawFamily::BiBi),
            (
                "gene_regulation_default",
                self.gene_regulation_default,
                LawFamily::GeneRegulatory,
            ),
            (
                "non_enzyme_default",
                self.non_enzyme_default,
                LawFamily::NonEnzyme,
            ),
            (
                "arbitrary_enzyme_default",
                self.arbitrary_enzyme_default,
                LawFamily::ArbitraryEnzyme,
            ),
            (
                "zero_reactants_default",
                self.zero_reactants_default,
                LawFamily::ZeroReactants,
            ),
            (
                "zero_products_default",
                self.zero_products_default,
                LawFamily::ZeroProducts,
            ),
        ]
    }

    /// Configured default category for a law family
    pub fn default_for(&self, family: LawFamily) -> LawCategory {
        self.defaults()
            .into_iter()
            .find(|(_, _, f)| *f == family)
            .map(|(_, category, _)| category)
            .unwrap_or(self.arbitrary_enzyme_default)
    }

    /// Whether a species of the given role can act as an enzyme
    pub fn is_possible_enzyme(&self, role: Role) -> bool {
        role == Role::Protein || self.possible_enzymes.contains(&role)
    }
}

fn check_value(option: &str, value: f64, strictly_positive: bool) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::invalid_configuration(option, "must be finite"));
    }
    if strictly_positive && value <= 0. {
        return Err(DomainError::invalid_configuration(option, "must be > 0"));
    }
    if value < 0. {
        return Err(DomainError::invalid_configuration(option, "must be >= 0"));
    }
    Ok(())
}

/// How the positive inputs of a transition are combined into a function term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FunctionTermScheme {
    /// One active activator suffices (OR)
    OneActivatorOr,
    /// All activators have to be active (AND)
    AllActivatorsAnd,
    /// Do not generate function terms
    None,
}

/// Sign assumed for inputs whose sign is missing or unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultSign {
    Positive,
    Negative,
}

/// Behaviour of the kinetic law generator when a reaction cannot be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Abort the whole run, nothing is committed
    Abort,
    /// Report the failing reaction and continue with the others
    SkipAndContinue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Configuration::default().validate().is_ok());
    }

    #[test]
    fn negative_values_are_rejected() {
        let config = ConfigurationBuilder::default()
            .default_species_initial_value(-1.)
            .build()
            .unwrap();
        match config.validate() {
            Err(DomainError::InvalidConfiguration { option, .. }) => {
                assert_eq!(option, "default_species_initial_value")
            }
            _ => panic!("Negative initial value accepted"),
        }
    }

    #[test]
    fn zero_compartment_size_is_rejected() {
        let config = ConfigurationBuilder::default()
            .default_compartment_size(0.)
            .build()
            .unwrap();
        assert!(config.validate().is_err());
        let config = ConfigurationBuilder::default()
            .default_new_parameter_value(f64::NAN)
            .build()
            .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_outside_family_is_rejected() {
        let config = ConfigurationBuilder::default()
            .bi_bi_default(LawCategory::MichaelisMenten)
            .build()
            .unwrap();
        match config.validate() {
            Err(DomainError::InvalidConfiguration { option, .. }) => {
                assert_eq!(option, "bi_bi_default")
            }
            _ => panic!("Michaelis-Menten accepted as bi-bi default"),
        }
    }

    #[test]
    fn blank_ignore_identifier_is_rejected() {
        let config = ConfigurationBuilder::default()
            .ignore_species_identifiers(BTreeSet::from([" ".to_string()]))
            .build()
            .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: Configuration =
            serde_json::from_str(r#"{"new_parameters_global": true}"#).unwrap();
        assert!(config.new_parameters_global);
        assert_eq!(config.uni_uni_default, LawCategory::MichaelisMenten);
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
    }

    #[test]
    fn proteins_are_always_enzymes() {
        let config = ConfigurationBuilder::default()
            .possible_enzymes(BTreeSet::new())
            .build()
            .unwrap();
        assert!(config.is_possible_enzyme(Role::Protein));
        assert!(!config.is_possible_enzyme(Role::Complex));
        assert!(Configuration::default().is_possible_enzyme(Role::Complex));
    }

    #[test]
    fn default_for_family() {
        let config = Configuration::default();
        assert_eq!(
            config.default_for(LawFamily::GeneRegulatory),
            LawCategory::HillHinze
        );
        assert_eq!(
            config.default_for(LawFamily::ZeroProducts),
            LawCategory::ZerothOrderReverse
        );
    }
}

//! Batch generation of default function terms for the transitions of a qualitative model
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::configuration::{Configuration, DefaultSign, FunctionTermScheme};
use crate::qualitative::synthesizer::synthesize;
use crate::qualitative::transition::{LevelTerm, QualitativeModel, Transition};

/// Level the generated function terms result in
const RESULT_LEVEL: u32 = 1;

/// Generates function terms on a copy of the transitions of a model
///
/// Generated terms only reach the model when they are stored with [`FunctionTermGenerator::store`].
///
/// # Examples
/// ```rust
/// use lawgen_core::configuration::Configuration;
/// use lawgen_core::qualitative::generator::FunctionTermGenerator;
/// use lawgen_core::qualitative::transition::{Input, QualitativeModel, Sign, TransitionBuilder};
/// let mut model = QualitativeModel::new_empty();
/// model.add_transition(
///     TransitionBuilder::default()
///         .id("t1".to_string())
///         .inputs(vec![
///             Input::new("i1", "A", Some(Sign::Positive)),
///             Input::new("i2", "B", None),
///         ])
///         .build()
///         .unwrap(),
/// );
/// let mut generator = FunctionTermGenerator::new(&Configuration::default());
/// assert_eq!(generator.generate(&model), 1);
/// generator.store(&mut model);
/// let term = model.transitions["t1"].function_term.as_ref().unwrap();
/// assert_eq!(term.math.to_formula(), "A==1 AND B==1");
/// ```
#[derive(Debug, Clone)]
pub struct FunctionTermGenerator {
    scheme: FunctionTermScheme,
    default_sign: DefaultSign,
    overwrite_existing: bool,
    transitions: IndexMap<String, Transition>,
    modified_transition_ids: Vec<String>,
}

impl FunctionTermGenerator {
    pub fn new(config: &Configuration) -> Self {
        FunctionTermGenerator {
            scheme: config.default_function_term_scheme,
            default_sign: config.default_sign_for_unknown_input,
            overwrite_existing: config.overwrite_existing_function_terms,
            transitions: IndexMap::new(),
            modified_transition_ids: Vec::new(),
        }
    }

    /// Generate function terms for the transitions of a model, returns how many were created
    ///
    /// Only transitions without a function term get one, unless existing terms are to be
    /// overwritten. Input signs are completed with the default sign in any case.
    pub fn generate(&mut self, model: &QualitativeModel) -> usize {
        self.transitions = model.transitions.clone();
        self.modified_transition_ids.clear();
        for transition in self.transitions.values_mut() {
            transition.apply_default_sign(self.default_sign);
            if transition.function_term.is_some() && !self.overwrite_existing {
                continue;
            }
            if let Some(math) = synthesize(transition, self.scheme, self.default_sign) {
                debug!(transition = %transition.id, term = %math, "Generated function term");
                transition.function_term = Some(LevelTerm {
                    result_level: RESULT_LEVEL,
                    math,
                });
                self.modified_transition_ids.push(transition.id.clone());
            }
        }
        info!(
            created = self.modified_transition_ids.len(),
            transitions = self.transitions.len(),
            "Generated function terms"
        );
        self.created_count()
    }

    pub fn created_count(&self) -> usize {
        self.modified_transition_ids.len()
    }

    pub fn modified_transition_ids(&self) -> &[String] {
        &self.modified_transition_ids
    }

    /// The working copy of the transitions, with generated terms
    pub fn transitions(&self) -> &IndexMap<String, Transition> {
        &self.transitions
    }

    /// Replace the transitions of a model by the generated ones
    pub fn store(self, model: &mut QualitativeModel) {
        if !self.transitions.is_empty() {
            model.transitions = self.transitions;
        }
    }
}

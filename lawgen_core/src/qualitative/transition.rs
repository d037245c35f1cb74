//! This module provides the Transition struct, and the inputs and model it belongs to
use derive_builder::Builder;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::configuration::DefaultSign;
use crate::qualitative::function_term::FunctionTerm;

/// Effect of an input on the transition it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Positive,
    Negative,
    /// Activating or inhibiting, depending on other factors
    Dual,
    Unknown,
}

impl From<DefaultSign> for Sign {
    fn from(sign: DefaultSign) -> Self {
        match sign {
            DefaultSign::Positive => Sign::Positive,
            DefaultSign::Negative => Sign::Negative,
        }
    }
}

/// Represents an input of a transition, a qualitative species with a sign
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Input {
    pub id: String,
    /// Id of the qualitative species the input reads
    pub qualitative_species: String,
    #[builder(default = "None")]
    #[serde(default)]
    pub sign: Option<Sign>,
}

impl Input {
    pub fn new(id: &str, qualitative_species: &str, sign: Option<Sign>) -> Input {
        Input {
            id: id.to_string(),
            qualitative_species: qualitative_species.to_string(),
            sign,
        }
    }

    /// Sign of the input, with missing and unknown signs replaced by `default`
    pub fn effective_sign(&self, default: DefaultSign) -> Sign {
        match self.sign {
            None | Some(Sign::Unknown) => default.into(),
            Some(sign) => sign,
        }
    }
}

/// Function term of a transition together with the level it results in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelTerm {
    pub result_level: u32,
    pub math: FunctionTerm,
}

/// Represents a transition of a qualitative model
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub id: String,
    #[builder(default = "None")]
    #[serde(default)]
    pub name: Option<String>,
    #[builder(default = "Vec::new()")]
    #[serde(default)]
    pub inputs: Vec<Input>,
    /// Ids of the qualitative species the transition sets
    #[builder(default = "Vec::new()")]
    #[serde(default)]
    pub outputs: Vec<String>,
    #[builder(default = "None")]
    #[serde(default)]
    pub function_term: Option<LevelTerm>,
}

impl Transition {
    /// Replace missing and unknown input signs by `default`
    pub fn apply_default_sign(&mut self, default: DefaultSign) {
        for input in self.inputs.iter_mut() {
            input.sign = Some(input.effective_sign(default));
        }
    }
}

/// Qualitative model, the transitions keyed by their id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualitativeModel {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub transitions: IndexMap<String, Transition>,
}

impl QualitativeModel {
    pub fn new_empty() -> Self {
        QualitativeModel::default()
    }

    /// Add a transition to the model
    ///
    /// # Examples
    /// ```rust
    /// use lawgen_core::qualitative::transition::{Input, QualitativeModel, Sign, TransitionBuilder};
    /// let mut model = QualitativeModel::new_empty();
    /// let transition = TransitionBuilder::default()
    ///     .id("t1".to_string())
    ///     .inputs(vec![Input::new("i1", "A", Some(Sign::Positive))])
    ///     .outputs(vec!["B".to_string()])
    ///     .build()
    ///     .unwrap();
    /// model.add_transition(transition);
    /// ```
    pub fn add_transition(&mut self, transition: Transition) {
        let id = transition.id.clone();
        self.transitions.insert(id, transition);
    }
}

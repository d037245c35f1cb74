//! Synthesis of the default function term of a transition from the signs of its inputs
use crate::configuration::{DefaultSign, FunctionTermScheme};
use crate::qualitative::function_term::{FunctionTerm, TermOperator};
use crate::qualitative::transition::{Sign, Transition};

/// Level of an active input
const ACTIVE: u32 = 1;
/// Level of an inactive input
const INACTIVE: u32 = 0;

/// How many inputs of a sign a transition has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinality {
    None,
    One,
    Many,
}

impl Cardinality {
    pub fn of(count: usize) -> Cardinality {
        match count {
            0 => Cardinality::None,
            1 => Cardinality::One,
            _ => Cardinality::Many,
        }
    }
}

/// Top level structure of a synthesized function term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermShape {
    /// No signed inputs, there is no term
    Empty,
    /// The exclusive or of the dual inputs
    DualOnly,
    /// The activator term, joined with the dual term if `dual` is set
    Activators { dual: bool },
    /// The inhibitor term, joined with the dual term if `dual` is set
    Inhibitors { dual: bool },
    /// Activator and inhibitor terms joined, with the dual term if `dual` is set
    Combined { dual: bool },
}

/// Decision table mapping the input cardinalities of a transition onto the shape of its term
pub fn term_shape(activators: Cardinality, inhibitors: Cardinality, dual: bool) -> TermShape {
    use Cardinality::*;
    match (activators, inhibitors, dual) {
        (None, None, false) => TermShape::Empty,
        (None, None, true) => TermShape::DualOnly,
        (None, One | Many, dual) => TermShape::Inhibitors { dual },
        (One | Many, None, dual) => TermShape::Activators { dual },
        (One | Many, One | Many, dual) => TermShape::Combined { dual },
    }
}

/// Build the default function term of a transition
///
/// Inputs without a sign, or with an unknown one, count as `default_sign`; the transition
/// itself is not changed. Activators are combined according to `scheme`, inhibitors have to be
/// inactive, and each dual input contributes an exclusive or of both of its levels. Returns
/// `None` for the scheme [`FunctionTermScheme::None`] and for transitions without inputs.
///
/// # Examples
/// ```rust
/// use lawgen_core::configuration::{DefaultSign, FunctionTermScheme};
/// use lawgen_core::qualitative::synthesizer::synthesize;
/// use lawgen_core::qualitative::transition::{Input, Sign, TransitionBuilder};
/// let transition = TransitionBuilder::default()
///     .id("t1".to_string())
///     .inputs(vec![
///         Input::new("i1", "A", Some(Sign::Positive)),
///         Input::new("i2", "C", Some(Sign::Negative)),
///     ])
///     .build()
///     .unwrap();
/// let term = synthesize(&transition, FunctionTermScheme::AllActivatorsAnd, DefaultSign::Positive);
/// assert_eq!(term.unwrap().to_formula(), "A==1 AND C==0");
/// ```
pub fn synthesize(
    transition: &Transition,
    scheme: FunctionTermScheme,
    default_sign: DefaultSign,
) -> Option<FunctionTerm> {
    let activator_operator = match scheme {
        FunctionTermScheme::OneActivatorOr => TermOperator::Or,
        FunctionTermScheme::AllActivatorsAnd => TermOperator::And,
        FunctionTermScheme::None => return None,
    };

    let mut activators = Vec::new();
    let mut inhibitors = Vec::new();
    let mut duals = Vec::new();
    for input in &transition.inputs {
        let species = input.qualitative_species.as_str();
        match input.effective_sign(default_sign) {
            Sign::Positive => activators.push(FunctionTerm::level(species, ACTIVE)),
            Sign::Negative => inhibitors.push(FunctionTerm::level(species, INACTIVE)),
            Sign::Dual => {
                duals.push(FunctionTerm::level(species, INACTIVE));
                duals.push(FunctionTerm::level(species, ACTIVE));
            }
            // Never returned by effective_sign
            Sign::Unknown => {}
        }
    }

    let shape = term_shape(
        Cardinality::of(activators.len()),
        Cardinality::of(inhibitors.len()),
        !duals.is_empty(),
    );
    let activator_term = combine(activator_operator, activators);
    let inhibitor_term = combine(TermOperator::And, inhibitors);
    let dual_term = combine(TermOperator::Xor, duals);
    let with_dual = |term: Option<FunctionTerm>, dual: bool| -> Option<FunctionTerm> {
        match (term, dual) {
            (Some(term), true) => Some(FunctionTerm::operation(
                TermOperator::And,
                vec![term].into_iter().chain(dual_term.clone()).collect(),
            )),
            (term, _) => term,
        }
    };
    match shape {
        TermShape::Empty => None,
        TermShape::DualOnly => dual_term.clone(),
        TermShape::Activators { dual } => with_dual(activator_term, dual),
        TermShape::Inhibitors { dual } => with_dual(inhibitor_term, dual),
        TermShape::Combined { dual } => {
            let operands: Vec<FunctionTerm> = activator_term
                .into_iter()
                .chain(inhibitor_term)
                .chain(if dual { dual_term.clone() } else { None })
                .collect();
            Some(FunctionTerm::operation(TermOperator::And, operands))
        }
    }
}

/// A single term as it is, several joined by `operator`
fn combine(operator: TermOperator, mut terms: Vec<FunctionTerm>) -> Option<FunctionTerm> {
    match terms.len() {
        0 => None,
        1 => terms.pop(),
        _ => Some(FunctionTerm::operation(operator, terms)),
    }
}

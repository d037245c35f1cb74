//! Qualitative models, and the synthesis of Boolean function terms for their transitions
pub mod function_term;
pub mod generator;
pub mod synthesizer;
pub mod transition;

pub use function_term::{FunctionTerm, TermOperator};
pub use synthesizer::synthesize;
pub use transition::{Input, QualitativeModel, Sign, Transition};

//! Classification of reactions and synthesis of their kinetic laws
//!
//! A reaction is first classified ([`classifier::classify`]), which yields the law categories
//! applicable to it and the configured default among them. The [`registry::LawRegistry`] then
//! turns a category into a [`KineticLaw`](crate::network::reaction::KineticLaw), taking its
//! parameters and units from a [`pool::UnitParameterPool`].
pub mod category;
pub mod classifier;
pub(crate) mod laws;
pub mod pool;
pub mod registry;

pub use category::{LawCategory, LawFamily};
pub use classifier::{classify, classify_with, ReactionClassification};
pub use registry::{LawContext, LawRegistry, StaticLawRegistry};

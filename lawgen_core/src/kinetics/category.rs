//! The closed set of kinetic law categories and their static compatibility attributes
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A family of rate laws, each law category belongs to one or more families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LawFamily {
    /// Laws for reactions without enzymes
    NonEnzyme,
    /// Enzyme laws applicable to any number of reactants and products
    ArbitraryEnzyme,
    UniUni,
    BiUni,
    BiBi,
    /// Laws describing regulated gene expression
    GeneRegulatory,
    /// Laws applicable to reactions without reactants (synthesis)
    ZeroReactants,
    /// Laws applicable to reactions without products (degradation)
    ZeroProducts,
}

/// Static compatibility attributes of a [`LawCategory`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAttributes {
    /// Only applicable when all reactant stoichiometries are whole numbers
    pub integer_stoichiometry: bool,
    /// Only applicable when the reaction has at least one inhibitor or activator
    pub requires_modulation: bool,
    /// Can account for inhibitors and activators
    pub supports_modulation: bool,
    /// Applicable to reversible reactions
    pub reversible: bool,
    /// Applicable to irreversible reactions
    pub irreversible: bool,
    pub zero_reactants: bool,
    pub zero_products: bool,
    pub non_enzyme: bool,
    pub arbitrary_enzyme: bool,
    pub uni_uni: bool,
    pub bi_uni: bool,
    pub bi_bi: bool,
    pub gene_regulatory: bool,
}

const NONE: CategoryAttributes = CategoryAttributes {
    integer_stoichiometry: false,
    requires_modulation: false,
    supports_modulation: true,
    reversible: true,
    irreversible: true,
    zero_reactants: false,
    zero_products: false,
    non_enzyme: false,
    arbitrary_enzyme: false,
    uni_uni: false,
    bi_uni: false,
    bi_bi: false,
    gene_regulatory: false,
};

const MODULAR: CategoryAttributes = CategoryAttributes {
    irreversible: false,
    uni_uni: true,
    bi_uni: true,
    bi_bi: true,
    arbitrary_enzyme: true,
    ..NONE
};

const GENE_REGULATORY: CategoryAttributes = CategoryAttributes {
    gene_regulatory: true,
    ..NONE
};

const GENE_REGULATORY_SYNTHESIS: CategoryAttributes = CategoryAttributes {
    zero_reactants: true,
    zero_products: true,
    ..GENE_REGULATORY
};

/// Kinetic law categories
///
/// The order of [`LawCategory::ALL`] is the order legal categories are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LawCategory {
    GeneralizedMassAction,
    ZerothOrderForward,
    ZerothOrderReverse,
    Convenience,
    MichaelisMenten,
    RandomOrder,
    Ordered,
    PingPong,
    Hill,
    /// Irreversible, non-modulated, non-interacting reactant enzyme kinetics
    IrrevNonModulatedNonInteracting,
    /// Irreversible, competitive, non-exclusive, non-cooperative inhibition
    CompetitiveNonExclusiveInhibition,
    PowerLawModular,
    CommonModular,
    DirectBindingModular,
    SimultaneousBindingModular,
    ForceDependentModular,
    HillHinze,
    HillRadde,
    SSystem,
    Vohradsky,
    NetGeneratorNonLinear,
    Weaver,
    HSystem,
    AdditiveModelLinear,
}

impl LawCategory {
    pub const ALL: [LawCategory; 24] = [
        LawCategory::GeneralizedMassAction,
        LawCategory::ZerothOrderForward,
        LawCategory::ZerothOrderReverse,
        LawCategory::Convenience,
        LawCategory::MichaelisMenten,
        LawCategory::RandomOrder,
        LawCategory::Ordered,
        LawCategory::PingPong,
        LawCategory::Hill,
        LawCategory::IrrevNonModulatedNonInteracting,
        LawCategory::CompetitiveNonExclusiveInhibition,
        LawCategory::PowerLawModular,
        LawCategory::CommonModular,
        LawCategory::DirectBindingModular,
        LawCategory::SimultaneousBindingModular,
        LawCategory::ForceDependentModular,
        LawCategory::HillHinze,
        LawCategory::HillRadde,
        LawCategory::SSystem,
        LawCategory::Vohradsky,
        LawCategory::NetGeneratorNonLinear,
        LawCategory::Weaver,
        LawCategory::HSystem,
        LawCategory::AdditiveModelLinear,
    ];

    /// Static attributes of the category
    pub fn attributes(&self) -> CategoryAttributes {
        match self {
            LawCategory::GeneralizedMassAction | LawCategory::ZerothOrderForward => {
                CategoryAttributes {
                    non_enzyme: true,
                    zero_reactants: true,
                    zero_products: true,
                    ..NONE
                }
            }
            LawCategory::ZerothOrderReverse => CategoryAttributes {
                irreversible: false,
                zero_products: true,
                ..NONE
            },
            LawCategory::Convenience => CategoryAttributes {
                arbitrary_enzyme: true,
                ..NONE
            },
            LawCategory::MichaelisMenten => CategoryAttributes {
                uni_uni: true,
                ..NONE
            },
            LawCategory::RandomOrder | LawCategory::Ordered => CategoryAttributes {
                bi_uni: true,
                bi_bi: true,
                ..NONE
            },
            LawCategory::PingPong => CategoryAttributes {
                bi_bi: true,
                ..NONE
            },
            LawCategory::Hill => CategoryAttributes {
                integer_stoichiometry: true,
                uni_uni: true,
                gene_regulatory: true,
                ..NONE
            },
            LawCategory::IrrevNonModulatedNonInteracting => CategoryAttributes {
                integer_stoichiometry: true,
                supports_modulation: false,
                reversible: false,
                uni_uni: true,
                bi_uni: true,
                bi_bi: true,
                arbitrary_enzyme: true,
                ..NONE
            },
            LawCategory::CompetitiveNonExclusiveInhibition => CategoryAttributes {
                integer_stoichiometry: true,
                requires_modulation: true,
                reversible: false,
                uni_uni: true,
                ..NONE
            },
            LawCategory::PowerLawModular
            | LawCategory::CommonModular
            | LawCategory::DirectBindingModular
            | LawCategory::SimultaneousBindingModular
            | LawCategory::ForceDependentModular => MODULAR,
            LawCategory::HillRadde => CategoryAttributes {
                zero_reactants: true,
                ..GENE_REGULATORY
            },
            LawCategory::SSystem | LawCategory::Vohradsky | LawCategory::NetGeneratorNonLinear => {
                GENE_REGULATORY_SYNTHESIS
            }
            LawCategory::HillHinze
            | LawCategory::Weaver
            | LawCategory::HSystem
            | LawCategory::AdditiveModelLinear => GENE_REGULATORY,
        }
    }

    /// Whether the category is a member of a law family
    ///
    /// Shape families also admit the arbitrary enzyme laws, which apply to every shape.
    pub fn belongs_to(&self, family: LawFamily) -> bool {
        let a = self.attributes();
        match family {
            LawFamily::NonEnzyme => a.non_enzyme,
            LawFamily::ArbitraryEnzyme => a.arbitrary_enzyme,
            LawFamily::UniUni => a.uni_uni || a.arbitrary_enzyme,
            LawFamily::BiUni => a.bi_uni || a.arbitrary_enzyme,
            LawFamily::BiBi => a.bi_bi || a.arbitrary_enzyme,
            LawFamily::GeneRegulatory => a.gene_regulatory,
            LawFamily::ZeroReactants => a.zero_reactants,
            LawFamily::ZeroProducts => a.zero_products,
        }
    }

    /// Human-readable name of the category
    pub fn name(&self) -> &'static str {
        match self {
            LawCategory::GeneralizedMassAction => "generalized mass action",
            LawCategory::ZerothOrderForward => "zeroth order forward mass action",
            LawCategory::ZerothOrderReverse => "zeroth order reverse mass action",
            LawCategory::Convenience => "convenience kinetics",
            LawCategory::MichaelisMenten => "Michaelis-Menten",
            LawCategory::RandomOrder => "random order mechanism",
            LawCategory::Ordered => "ordered mechanism",
            LawCategory::PingPong => "ping-pong mechanism",
            LawCategory::Hill => "Hill equation",
            LawCategory::IrrevNonModulatedNonInteracting => {
                "irreversible non-modulated non-interacting reactant enzymes"
            }
            LawCategory::CompetitiveNonExclusiveInhibition => {
                "irreversible competitive non-exclusive non-cooperative inhibition"
            }
            LawCategory::PowerLawModular => "power-law modular rate law",
            LawCategory::CommonModular => "common modular rate law",
            LawCategory::DirectBindingModular => "direct binding modular rate law",
            LawCategory::SimultaneousBindingModular => "simultaneous binding modular rate law",
            LawCategory::ForceDependentModular => "force-dependent modular rate law",
            LawCategory::HillHinze => "Hill-Hinze equation",
            LawCategory::HillRadde => "Hill-Radde equation",
            LawCategory::SSystem => "S-system",
            LawCategory::Vohradsky => "Vohradsky equation",
            LawCategory::NetGeneratorNonLinear => "NetGenerator non-linear equation",
            LawCategory::Weaver => "Weaver equation",
            LawCategory::HSystem => "H-system",
            LawCategory::AdditiveModelLinear => "additive linear model",
        }
    }
}

impl Display for LawCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

//! Symbolic rate law templates for every [`LawCategory`]
//!
//! Each constructor writes the formula of its law in infix notation and requests the parameters
//! it needs from the [`UnitParameterPool`](crate::kinetics::pool::UnitParameterPool). Parameter
//! ids follow the pattern `<kind>_<reaction>` or `<kind>_<reaction>_<species>`.
use indexmap::IndexMap;

use crate::error::DomainError;
use crate::kinetics::category::LawCategory;
use crate::kinetics::classifier::ReactionClassification;
use crate::kinetics::pool::ParameterUnits;
use crate::kinetics::registry::LawContext;
use crate::network::parameter::Parameter;
use crate::network::reaction::{KineticLaw, SpeciesReference};

use ParameterUnits::{Concentration, Dimensionless, PerTime, RateConstant, Velocity};

// region Builder

/// Collects the parameters of a law while its formula is written
struct LawBuilder<'c, 'a> {
    ctx: &'c mut LawContext<'a>,
    category: LawCategory,
    parameters: IndexMap<String, Parameter>,
}

impl<'c, 'a> LawBuilder<'c, 'a> {
    fn new(ctx: &'c mut LawContext<'a>, category: LawCategory) -> Self {
        LawBuilder {
            ctx,
            category,
            parameters: IndexMap::new(),
        }
    }

    fn classification(&self) -> &'a ReactionClassification {
        self.ctx.classification
    }

    fn reversible(&self) -> bool {
        self.ctx.classification.effective_reversible
    }

    /// Request a parameter, returns its id
    fn parameter(
        &mut self,
        kind: &str,
        species: Option<&str>,
        name: &str,
        units: ParameterUnits,
    ) -> String {
        let id = match species {
            Some(species) => format!("{}_{}_{}", kind, self.ctx.reaction.id, species),
            None => format!("{}_{}", kind, self.ctx.reaction.id),
        };
        let parameter = self.ctx.pool.parameter(&id, name, units);
        self.parameters.insert(id.clone(), parameter);
        id
    }

    /// Maximal rate, `kcat * E` for enzyme reactions, `vmax` otherwise
    fn turnover(&mut self, suffix: &str, name: &str) -> String {
        match enzyme_term(self.classification()) {
            Some(enzyme) => {
                let kcat = self.parameter(&format!("kcat{}", suffix), None, name, PerTime);
                format!("{} * {}", kcat, enzyme)
            }
            None => self.parameter(&format!("vmax{}", suffix), None, name, Velocity),
        }
    }

    /// Ratio of a species and a parameter, e.g. `(A / km_r1_A)`
    fn scaled(&mut self, kind: &str, species: &str, name: &str) -> String {
        let constant = self.parameter(kind, Some(species), name, Concentration);
        format!("({} / {})", species, constant)
    }

    /// Hyperbolic inhibition terms of the inhibitors of the reaction
    fn inhibition_factors(&mut self) -> Vec<String> {
        let c = self.classification();
        c.inhibitors
            .iter()
            .map(|inhibitor| {
                let ki = self.parameter("ki", Some(inhibitor), "inhibition constant", Concentration);
                format!("({} / ({} + {}))", ki, ki, inhibitor)
            })
            .collect()
    }

    /// Hyperbolic activation terms of the activators of the reaction
    fn activation_factors(&mut self) -> Vec<String> {
        let c = self.classification();
        c.activators
            .iter()
            .map(|activator| {
                let ka = self.parameter("ka", Some(activator), "activation constant", Concentration);
                format!("({} / ({} + {}))", activator, ka, activator)
            })
            .collect()
    }

    /// Multiply a rate by the inhibition and activation terms of the reaction
    fn modulated(&mut self, rate: String) -> String {
        let mut factors = self.inhibition_factors();
        factors.extend(self.activation_factors());
        if factors.is_empty() {
            return rate;
        }
        factors.push(wrap(&rate));
        product(factors)
    }

    fn finish(self, formula: String) -> Result<KineticLaw, DomainError> {
        Ok(KineticLaw {
            category: Some(self.category),
            math: formula.into(),
            local_parameters: self.parameters,
        })
    }

    fn error(&self, reason: &str) -> DomainError {
        DomainError::LawInstantiation {
            reaction: self.ctx.reaction.id.clone(),
            category: self.category,
            reason: reason.to_string(),
        }
    }
}

// endregion Builder

// region Formula helpers

fn power(base: &str, exponent: f64) -> String {
    if exponent == 1. {
        base.to_string()
    } else {
        format!("{}^{}", base, exponent)
    }
}

fn product(factors: Vec<String>) -> String {
    if factors.is_empty() {
        "1".to_string()
    } else {
        factors.join(" * ")
    }
}

fn sum(terms: Vec<String>) -> String {
    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" + ")
    }
}

fn wrap(formula: &str) -> String {
    format!("({})", formula)
}

/// Mass action term of a list of references, e.g. `A^2 * B`
fn mass_action(references: &[SpeciesReference]) -> String {
    product(
        references
            .iter()
            .map(|r| power(&r.species, r.stoichiometry))
            .collect(),
    )
}

/// A single substrate, or the mass action term of several, in parentheses
fn substrate(references: &[SpeciesReference]) -> String {
    match references {
        [single] if single.stoichiometry == 1. => single.species.clone(),
        _ => wrap(&mass_action(references)),
    }
}

/// Sum of the enzymes of the reaction
fn enzyme_term(c: &ReactionClassification) -> Option<String> {
    match c.enzymes.as_slice() {
        [] => None,
        [enzyme] => Some(enzyme.clone()),
        enzymes => Some(wrap(&enzymes.join(" + "))),
    }
}

/// The two species of a bi-molecular side, a single species with stoichiometry two counts twice
fn pair(references: &[SpeciesReference]) -> Option<(String, String)> {
    match references {
        [first, second, ..] => Some((first.species.clone(), second.species.clone())),
        [single] => Some((single.species.clone(), single.species.clone())),
        [] => None,
    }
}

/// Modifiers regulating a gene, inhibitors first
fn regulators(c: &ReactionClassification) -> Vec<String> {
    let mut regulators: Vec<String> = Vec::new();
    for regulator in c.modulators() {
        if !regulators.contains(regulator) {
            regulators.push(regulator.clone());
        }
    }
    regulators
}

// endregion Formula helpers

// region Mass action

pub(crate) fn generalized_mass_action(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let full_column_rank = ctx.full_column_rank;
    let mut b = LawBuilder::new(ctx, LawCategory::GeneralizedMassAction);
    let c = b.classification();
    let catalysts: Vec<String> = c
        .enzymes
        .iter()
        .chain(c.non_enzyme_catalysts.iter())
        .cloned()
        .collect();
    let kf = b.parameter(
        "kf",
        None,
        "forward rate constant",
        RateConstant(c.stoichiometry_left),
    );
    let mut prefix = vec![kf];
    prefix.extend(catalysts.iter().cloned());
    let mut forward = prefix.clone();
    if !c.reactants.is_empty() {
        forward.push(mass_action(&c.reactants));
    }
    let rate = if !b.reversible() {
        product(forward)
    } else if full_column_rank {
        let kr = b.parameter(
            "kr",
            None,
            "reverse rate constant",
            RateConstant(c.stoichiometry_right),
        );
        let mut reverse = vec![kr];
        reverse.extend(catalysts);
        if !c.products.is_empty() {
            reverse.push(mass_action(&c.products));
        }
        format!("{} - {}", product(forward), product(reverse))
    } else {
        // Dependent reactions get a thermodynamically consistent form
        let keq = b.parameter("keq", None, "equilibrium constant", Dimensionless);
        format!(
            "{} * ({} - {} / {})",
            product(prefix),
            mass_action(&c.reactants),
            mass_action(&c.products),
            keq
        )
    };
    let formula = b.modulated(rate);
    b.finish(formula)
}

pub(crate) fn zeroth_order_forward(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::ZerothOrderForward);
    let c = b.classification();
    let k0f = b.parameter(
        "k0f",
        None,
        "zeroth order forward rate constant",
        RateConstant(0.),
    );
    let rate = if b.reversible() {
        let kr = b.parameter(
            "kr",
            None,
            "reverse rate constant",
            RateConstant(c.stoichiometry_right),
        );
        let mut reverse = vec![kr];
        if !c.products.is_empty() {
            reverse.push(mass_action(&c.products));
        }
        format!("{} - {}", k0f, product(reverse))
    } else {
        k0f
    };
    let formula = b.modulated(rate);
    b.finish(formula)
}

pub(crate) fn zeroth_order_reverse(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::ZerothOrderReverse);
    let c = b.classification();
    let kf = b.parameter(
        "kf",
        None,
        "forward rate constant",
        RateConstant(c.stoichiometry_left),
    );
    let k0r = b.parameter(
        "k0r",
        None,
        "zeroth order reverse rate constant",
        RateConstant(0.),
    );
    let mut forward = vec![kf];
    if !c.reactants.is_empty() {
        forward.push(mass_action(&c.reactants));
    }
    let formula = b.modulated(format!("{} - {}", product(forward), k0r));
    b.finish(formula)
}

// endregion Mass action

// region Enzyme kinetics

pub(crate) fn michaelis_menten(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::MichaelisMenten);
    let c = b.classification();
    if c.reactants.is_empty() {
        return Err(b.error("Michaelis-Menten kinetics needs a substrate"));
    }
    let s = substrate(&c.reactants);
    let rate = if b.reversible() && !c.products.is_empty() {
        let p = substrate(&c.products);
        let forward = b.turnover("f", "forward turnover");
        let reverse = b.turnover("r", "reverse turnover");
        let kms = b.parameter("kms", None, "Michaelis constant of the substrate", Concentration);
        let kmp = b.parameter("kmp", None, "Michaelis constant of the product", Concentration);
        format!(
            "({f} * {s} / {kms} - {r} * {p} / {kmp}) / (1 + {s} / {kms} + {p} / {kmp})",
            f = forward,
            r = reverse,
        )
    } else {
        let v = b.turnover("", "turnover");
        let km = b.parameter("km", None, "Michaelis constant", Concentration);
        format!("{} * {} / ({} + {})", v, s, km, s)
    };
    let formula = b.modulated(rate);
    b.finish(formula)
}

/// Numerator and saturation terms of the scaled reactants (or products) of a reaction
fn saturation_terms(
    b: &mut LawBuilder<'_, '_>,
    references: &[SpeciesReference],
    kind: &str,
) -> (Vec<String>, Vec<String>) {
    let mut numerator = Vec::new();
    let mut denominator = Vec::new();
    for reference in references {
        let scaled = b.scaled(kind, &reference.species, "Michaelis constant");
        numerator.push(power(&scaled, reference.stoichiometry));
        denominator.push(power(&format!("(1 + {})", scaled), reference.stoichiometry));
    }
    (numerator, denominator)
}

pub(crate) fn convenience(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let full_column_rank = ctx.full_column_rank;
    let mut b = LawBuilder::new(ctx, LawCategory::Convenience);
    let c = b.classification();
    let (substrates, substrate_saturation) = saturation_terms(&mut b, &c.reactants, "kmc");
    let rate = if b.reversible() {
        let (products, product_saturation) = saturation_terms(&mut b, &c.products, "kmc");
        let numerator = if full_column_rank {
            let forward = b.turnover("f", "forward turnover");
            let reverse = b.turnover("r", "reverse turnover");
            format!(
                "{} * {} - {} * {}",
                forward,
                product(substrates),
                reverse,
                product(products)
            )
        } else {
            let v = b.turnover("", "turnover");
            let keq = b.parameter("keq", None, "equilibrium constant", Dimensionless);
            format!(
                "{} * ({} - {} / {})",
                v,
                product(substrates),
                product(products),
                keq
            )
        };
        format!(
            "({}) / ({} + {} - 1)",
            numerator,
            product(substrate_saturation),
            product(product_saturation)
        )
    } else {
        let v = b.turnover("", "turnover");
        format!(
            "{} * {} / ({})",
            v,
            product(substrates),
            product(substrate_saturation)
        )
    };
    let formula = b.modulated(rate);
    b.finish(formula)
}

/// Random order and ordered bi-substrate mechanisms differ in their binding terms only
fn bi_substrate(
    ctx: &mut LawContext<'_>,
    category: LawCategory,
) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, category);
    let c = b.classification();
    let Some((a, bs)) = pair(&c.reactants) else {
        return Err(b.error("bi-substrate mechanisms need two substrates"));
    };
    let kia = b.parameter("kia", Some(&a), "dissociation constant", Concentration);
    let kmb = b.parameter("kmb", Some(&bs), "Michaelis constant", Concentration);
    let rate = if b.reversible() && !c.products.is_empty() {
        let forward = b.turnover("f", "forward turnover");
        let reverse = b.turnover("r", "reverse turnover");
        let ab = format!("{} * {} / ({} * {})", a, bs, kia, kmb);
        let (numerator, product_terms) = if c.bi_bi {
            let Some((p, q)) = pair(&c.products) else {
                return Err(b.error("bi-bi mechanisms need two products"));
            };
            let kip = b.parameter("kip", Some(&p), "dissociation constant", Concentration);
            let kmq = b.parameter("kmq", Some(&q), "Michaelis constant", Concentration);
            let pq = format!("{} * {} / ({} * {})", p, q, kip, kmq);
            let terms = match category {
                LawCategory::Ordered => {
                    let kiq = b.parameter("kiq", Some(&q), "dissociation constant", Concentration);
                    format!("{} / {} + {} / {} + {}", p, kip, q, kiq, pq)
                }
                _ => format!("{} / {} + {}", p, kip, pq),
            };
            (format!("{} * {} - {} * {}", forward, ab, reverse, pq), terms)
        } else {
            let p = substrate(&c.products);
            let kmp = b.parameter("kmp", None, "Michaelis constant of the product", Concentration);
            (
                format!("{} * {} - {} * {} / {}", forward, ab, reverse, p, kmp),
                format!("{} / {}", p, kmp),
            )
        };
        let substrate_terms = match category {
            LawCategory::Ordered => {
                let kma = b.parameter("kma", Some(&a), "Michaelis constant", Concentration);
                format!("{} * {} / ({} * {})", kma, bs, kia, kmb)
            }
            _ => {
                let kib = b.parameter("kib", Some(&bs), "dissociation constant", Concentration);
                format!("{} / {}", bs, kib)
            }
        };
        format!(
            "({}) / (1 + {} / {} + {} + {} + {})",
            numerator, a, kia, substrate_terms, ab, product_terms
        )
    } else {
        let v = b.turnover("", "turnover");
        let kma = b.parameter("kma", Some(&a), "Michaelis constant", Concentration);
        format!("{v} * {a} * {bs} / ({kia} * {kmb} + {kmb} * {a} + {kma} * {bs} + {a} * {bs})")
    };
    let formula = b.modulated(rate);
    b.finish(formula)
}

pub(crate) fn random_order(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    bi_substrate(ctx, LawCategory::RandomOrder)
}

pub(crate) fn ordered(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    bi_substrate(ctx, LawCategory::Ordered)
}

pub(crate) fn ping_pong(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::PingPong);
    let c = b.classification();
    let (Some((a, bs)), Some((p, q))) = (pair(&c.reactants), pair(&c.products)) else {
        return Err(b.error("ping-pong mechanisms need two substrates and two products"));
    };
    let kma = b.parameter("kma", Some(&a), "Michaelis constant", Concentration);
    let kmb = b.parameter("kmb", Some(&bs), "Michaelis constant", Concentration);
    let rate = if b.reversible() {
        let forward = b.turnover("f", "forward turnover");
        let reverse = b.turnover("r", "reverse turnover");
        let kia = b.parameter("kia", Some(&a), "dissociation constant", Concentration);
        let kip = b.parameter("kip", Some(&p), "dissociation constant", Concentration);
        let kmq = b.parameter("kmq", Some(&q), "Michaelis constant", Concentration);
        let kmp = b.parameter("kmp", Some(&p), "Michaelis constant", Concentration);
        let ab = format!("{} * {} / ({} * {})", a, bs, kia, kmb);
        let pq = format!("{} * {} / ({} * {})", p, q, kip, kmq);
        format!(
            "({forward} * {ab} - {reverse} * {pq}) / ({a} / {kia} + {kma} * {bs} / ({kia} * {kmb}) \
             + {p} / {kip} + {kmp} * {q} / ({kip} * {kmq}) + {ab} + {pq})"
        )
    } else {
        let v = b.turnover("", "turnover");
        format!("{v} * {a} * {bs} / ({kmb} * {a} + {kma} * {bs} + {a} * {bs})")
    };
    let formula = b.modulated(rate);
    b.finish(formula)
}

pub(crate) fn hill(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::Hill);
    let c = b.classification();
    if c.reactants.is_empty() {
        return Err(b.error("the Hill equation needs a substrate"));
    }
    let s = substrate(&c.reactants);
    let v = b.turnover("", "turnover");
    let h = b.parameter("hic", None, "Hill coefficient", Dimensionless);
    let ks = b.parameter("ks", None, "half saturation constant", Concentration);
    let rate = if b.reversible() && !c.products.is_empty() {
        let p = substrate(&c.products);
        let kp = b.parameter("kp", None, "half saturation constant of the product", Concentration);
        let keq = b.parameter("keq", None, "equilibrium constant", Dimensionless);
        format!(
            "{v} * ({s} / {ks}) * (1 - {p} / ({s} * {keq})) * ({s} / {ks} + {p} / {kp})^({h} - 1) \
             / (1 + ({s} / {ks} + {p} / {kp})^{h})"
        )
    } else {
        format!("{v} * {s}^{h} / ({ks}^{h} + {s}^{h})")
    };
    let formula = b.modulated(rate);
    b.finish(formula)
}

pub(crate) fn irrev_non_modulated(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::IrrevNonModulatedNonInteracting);
    let c = b.classification();
    let (substrates, saturation) = saturation_terms(&mut b, &c.reactants, "km");
    let v = b.turnover("", "turnover");
    let formula = format!(
        "{} * {} / ({})",
        v,
        product(substrates),
        product(saturation)
    );
    b.finish(formula)
}

pub(crate) fn competitive_inhibition(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::CompetitiveNonExclusiveInhibition);
    let c = b.classification();
    if c.reactants.is_empty() {
        return Err(b.error("competitive inhibition needs a substrate"));
    }
    let s = substrate(&c.reactants);
    let v = b.turnover("", "turnover");
    let km = b.parameter("km", None, "Michaelis constant", Concentration);
    let inhibition: Vec<String> = c
        .inhibitors
        .iter()
        .map(|inhibitor| {
            let ki = b.parameter("ki", Some(inhibitor), "inhibition constant", Concentration);
            format!("{} / {}", inhibitor, ki)
        })
        .collect();
    let mut factors = b.activation_factors();
    factors.push(format!(
        "{} * {} / ({} * (1 + {}) + {})",
        v,
        s,
        km,
        sum(inhibition),
        s
    ));
    b.finish(product(factors))
}

// endregion Enzyme kinetics

// region Modular rate laws

#[derive(Clone, Copy)]
enum ModularDenominator {
    PowerLaw,
    Common,
    DirectBinding,
    SimultaneousBinding,
    ForceDependent,
}

fn modular(
    ctx: &mut LawContext<'_>,
    category: LawCategory,
    denominator: ModularDenominator,
) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, category);
    let c = b.classification();
    let (substrates, substrate_saturation) = saturation_terms(&mut b, &c.reactants, "kmc");
    let (products, product_saturation) = saturation_terms(&mut b, &c.products, "kmc");
    let forward = b.turnover("f", "forward turnover");
    let reverse = b.turnover("r", "reverse turnover");
    let numerator = format!(
        "{} * {} - {} * {}",
        forward,
        product(substrates.clone()),
        reverse,
        product(products.clone())
    );
    let rate = match denominator {
        ModularDenominator::PowerLaw => numerator,
        ModularDenominator::Common => format!(
            "({}) / ({} + {} - 1)",
            numerator,
            product(substrate_saturation),
            product(product_saturation)
        ),
        ModularDenominator::DirectBinding => format!(
            "({}) / (1 + {} + {})",
            numerator,
            product(substrates),
            product(products)
        ),
        ModularDenominator::SimultaneousBinding => format!(
            "({}) / ({} * {})",
            numerator,
            product(substrate_saturation),
            product(product_saturation)
        ),
        ModularDenominator::ForceDependent => format!(
            "({}) / sqrt({} * {})",
            numerator,
            product(substrates),
            product(products)
        ),
    };
    let formula = b.modulated(rate);
    b.finish(formula)
}

pub(crate) fn power_law_modular(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    modular(ctx, LawCategory::PowerLawModular, ModularDenominator::PowerLaw)
}

pub(crate) fn common_modular(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    modular(ctx, LawCategory::CommonModular, ModularDenominator::Common)
}

pub(crate) fn direct_binding_modular(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    modular(
        ctx,
        LawCategory::DirectBindingModular,
        ModularDenominator::DirectBinding,
    )
}

pub(crate) fn simultaneous_binding_modular(
    ctx: &mut LawContext<'_>,
) -> Result<KineticLaw, DomainError> {
    modular(
        ctx,
        LawCategory::SimultaneousBindingModular,
        ModularDenominator::SimultaneousBinding,
    )
}

pub(crate) fn force_dependent_modular(
    ctx: &mut LawContext<'_>,
) -> Result<KineticLaw, DomainError> {
    modular(
        ctx,
        LawCategory::ForceDependentModular,
        ModularDenominator::ForceDependent,
    )
}

// endregion Modular rate laws

// region Gene regulation

/// Weighted sum of the regulators of a gene, `w_r_X * X + ...`
fn weighted_regulation(b: &mut LawBuilder<'_, '_>) -> String {
    let regulators = regulators(b.classification());
    sum(regulators
        .iter()
        .map(|x| {
            let w = b.parameter("w", Some(x), "regulation weight", Dimensionless);
            format!("{} * {}", w, x)
        })
        .collect())
}

/// Hill function of a regulator, `X^n / (theta^n + X^n)`
fn hill_function(b: &mut LawBuilder<'_, '_>, regulator: &str) -> String {
    let theta = b.parameter("theta", Some(regulator), "regulation threshold", Concentration);
    let n = b.parameter("hic", Some(regulator), "Hill coefficient", Dimensionless);
    format!(
        "{x}^{n} / ({theta}^{n} + {x}^{n})",
        x = regulator,
        n = n,
        theta = theta
    )
}

pub(crate) fn hill_hinze(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::HillHinze);
    let c = b.classification();
    let kg = b.parameter("kg", None, "expression rate constant", PerTime);
    let mut factors = vec![kg];
    if !c.reactants.is_empty() {
        factors.push(mass_action(&c.reactants));
    }
    for inhibitor in &c.inhibitors {
        let f = hill_function(&mut b, inhibitor);
        factors.push(format!("(1 - {})", f));
    }
    for activator in &c.activators {
        let f = hill_function(&mut b, activator);
        factors.push(wrap(&f));
    }
    b.finish(product(factors))
}

pub(crate) fn hill_radde(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::HillRadde);
    let c = b.classification();
    let basal = b.parameter("b", None, "basal expression rate", Velocity);
    let mut terms = vec![basal];
    for regulator in regulators(c) {
        let a = b.parameter("a", Some(&regulator), "regulation strength", Velocity);
        let f = hill_function(&mut b, &regulator);
        terms.push(format!("{} * {}", a, f));
    }
    b.finish(sum(terms))
}

pub(crate) fn s_system(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::SSystem);
    let c = b.classification();
    let alpha = b.parameter("alpha", None, "rate constant", Velocity);
    let mut factors = vec![alpha];
    let mut variables: Vec<String> = c.reactants.iter().map(|r| r.species.clone()).collect();
    for regulator in regulators(c) {
        if !variables.contains(&regulator) {
            variables.push(regulator);
        }
    }
    for x in variables {
        let g = b.parameter("g", Some(&x), "kinetic order", Dimensionless);
        factors.push(format!("{}^{}", x, g));
    }
    b.finish(product(factors))
}

pub(crate) fn vohradsky(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::Vohradsky);
    let vmax = b.parameter("vmax", None, "maximal expression rate", Velocity);
    let regulation = weighted_regulation(&mut b);
    let bias = b.parameter("b", None, "bias", Dimensionless);
    let formula = format!("{} / (1 + exp(-({} + {})))", vmax, regulation, bias);
    b.finish(formula)
}

pub(crate) fn net_generator_non_linear(
    ctx: &mut LawContext<'_>,
) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::NetGeneratorNonLinear);
    let vmax = b.parameter("vmax", None, "maximal expression rate", Velocity);
    let regulation = weighted_regulation(&mut b);
    let formula = format!("{} / (1 + exp(-({})))", vmax, regulation);
    b.finish(formula)
}

pub(crate) fn weaver(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::Weaver);
    let vmax = b.parameter("vmax", None, "maximal expression rate", Velocity);
    let alpha = b.parameter("alpha", None, "steepness", Dimensionless);
    let beta = b.parameter("beta", None, "bias", Dimensionless);
    let regulation = weighted_regulation(&mut b);
    let formula = format!(
        "{} / (1 + exp(-({} * ({}) + {})))",
        vmax, alpha, regulation, beta
    );
    b.finish(formula)
}

pub(crate) fn h_system(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::HSystem);
    let c = b.classification();
    let basal = b.parameter("b", None, "basal expression rate", Velocity);
    let regulation = weighted_regulation(&mut b);
    let regulators = regulators(c);
    let mut terms = vec![basal, regulation];
    for (j, x) in regulators.iter().enumerate() {
        for y in &regulators[j..] {
            let v = b.parameter(
                "v",
                Some(&format!("{}_{}", x, y)),
                "interaction weight",
                Dimensionless,
            );
            terms.push(format!("{} * {} * {}", v, x, y));
        }
    }
    b.finish(sum(terms))
}

pub(crate) fn additive_model_linear(ctx: &mut LawContext<'_>) -> Result<KineticLaw, DomainError> {
    let mut b = LawBuilder::new(ctx, LawCategory::AdditiveModelLinear);
    let m = b.parameter("m", None, "maximal expression rate", Velocity);
    let regulation = weighted_regulation(&mut b);
    let bias = b.parameter("b", None, "bias", Dimensionless);
    let formula = format!("{} * ({} + {})", m, regulation, bias);
    b.finish(formula)
}

// endregion Gene regulation

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::Configuration;
    use crate::kinetics::classifier::classify;
    use crate::kinetics::pool::UnitParameterPool;
    use crate::network::reaction::{ModifierReference, Reaction, ReactionBuilder};
    use crate::network::species::Species;
    use crate::network::Network;
    use pretty_assertions::assert_eq;

    fn setup_network() -> Network {
        let mut network = Network::new_empty();
        for id in ["A", "B", "C"] {
            network.add_species(Species::new(id, "cell", Some("SBO:0000247")));
        }
        network.add_species(Species::new("E", "cell", Some("PROTEIN")));
        network.add_species(Species::new("I", "cell", Some("PROTEIN")));
        network.add_species(Species::new("T", "cell", Some("PROTEIN")));
        network.add_species(Species::new("g", "cell", Some("GENE")));
        network.add_species(Species::new("m", "cell", Some("RNA")));
        network
    }

    fn setup_reaction(
        reactants: &[&str],
        products: &[&str],
        modifiers: &[(&str, &str)],
        reversible: bool,
    ) -> Reaction {
        ReactionBuilder::default()
            .id("r1".to_string())
            .reactants(reactants.iter().map(|s| SpeciesReference::new(s, 1.)).collect())
            .products(products.iter().map(|s| SpeciesReference::new(s, 1.)).collect())
            .modifiers(
                modifiers
                    .iter()
                    .map(|(s, a)| ModifierReference::new(s, Some(a)))
                    .collect(),
            )
            .reversible(reversible)
            .build()
            .unwrap()
    }

    fn build(
        reaction: &Reaction,
        category: LawCategory,
        full_column_rank: bool,
    ) -> KineticLaw {
        let network = setup_network();
        let classification = classify(reaction, &network, &Configuration::default()).unwrap();
        let mut pool = UnitParameterPool::new(
            &network.unit_definitions,
            &network.default_units,
            1.,
        );
        let mut ctx = LawContext {
            reaction,
            classification: &classification,
            pool: &mut pool,
            full_column_rank,
        };
        crate::kinetics::registry::StaticLawRegistry::constructor(category)(&mut ctx).unwrap()
    }

    #[test]
    fn irreversible_mass_action() {
        let reaction = setup_reaction(&["A", "B"], &["C"], &[], false);
        let law = build(&reaction, LawCategory::GeneralizedMassAction, true);
        assert_eq!(law.math.formula(), "kf_r1 * A * B");
        assert_eq!(
            law.local_parameters.keys().collect::<Vec<_>>(),
            vec!["kf_r1"]
        );
    }

    #[test]
    fn reversible_mass_action() {
        let reaction = setup_reaction(&["A"], &["B"], &[], true);
        let law = build(&reaction, LawCategory::GeneralizedMassAction, true);
        assert_eq!(law.math.formula(), "kf_r1 * A - kr_r1 * B");
        let law = build(&reaction, LawCategory::GeneralizedMassAction, false);
        assert_eq!(law.math.formula(), "kf_r1 * (A - B / keq_r1)");
    }

    #[test]
    fn inhibited_mass_action() {
        let reaction = setup_reaction(&["A"], &["B"], &[("I", "INHIBITION")], false);
        let law = build(&reaction, LawCategory::GeneralizedMassAction, true);
        assert_eq!(
            law.math.formula(),
            "(ki_r1_I / (ki_r1_I + I)) * (kf_r1 * A)"
        );
    }

    #[test]
    fn michaelis_menten_with_enzyme() {
        let reaction = setup_reaction(&["A"], &["B"], &[("E", "SBO:0000460")], false);
        let law = build(&reaction, LawCategory::MichaelisMenten, true);
        assert_eq!(law.math.formula(), "kcat_r1 * E * A / (km_r1 + A)");
    }

    #[test]
    fn competitive_inhibition_uses_inhibitors() {
        let reaction = setup_reaction(
            &["A"],
            &["B"],
            &[("E", "SBO:0000460"), ("I", "SBO:0000020")],
            false,
        );
        let law = build(&reaction, LawCategory::CompetitiveNonExclusiveInhibition, true);
        assert_eq!(
            law.math.formula(),
            "kcat_r1 * E * A / (km_r1 * (1 + I / ki_r1_I) + A)"
        );
    }

    #[test]
    fn hill_hinze_regulation() {
        let reaction = setup_reaction(
            &["g"],
            &["m"],
            &[("T", "TRANSCRIPTIONAL_ACTIVATION")],
            false,
        );
        let law = build(&reaction, LawCategory::HillHinze, true);
        assert_eq!(
            law.math.formula(),
            "kg_r1 * g * (T^hic_r1_T / (theta_r1_T^hic_r1_T + T^hic_r1_T))"
        );
    }

    #[test]
    fn zeroth_order_synthesis() {
        let reaction = setup_reaction(&[], &["A"], &[], false);
        let law = build(&reaction, LawCategory::ZerothOrderForward, true);
        assert_eq!(law.math.formula(), "k0f_r1");
    }
}

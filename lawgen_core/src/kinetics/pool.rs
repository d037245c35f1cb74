//! Deduplicating pool of derived units and parameters used while generating kinetic laws
use indexmap::IndexMap;

use crate::network::parameter::Parameter;
use crate::network::units::{is_predefined_unit, Unit, UnitDefinition, UnitKind};
use crate::network::DefaultUnits;

/// Physical dimension of a parameter created for a kinetic law
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterUnits {
    /// Substance per volume, e.g. Michaelis or inhibition constants
    Concentration,
    /// Inverse time, e.g. turnover numbers
    PerTime,
    /// Rate constant of a mass action term of the given order
    RateConstant(f64),
    /// Concentration per time, e.g. maximal velocities
    Velocity,
    Dimensionless,
}

/// Pool of unit definitions and parameters of one kinetic law generation run
///
/// Unit definitions are reused whenever an identical one is already known, new ones get a
/// readable id derived from their composition. Parameters are created once per id and reused
/// afterwards.
#[derive(Debug, Clone)]
pub struct UnitParameterPool {
    unit_definitions: IndexMap<String, UnitDefinition>,
    new_unit_ids: Vec<String>,
    parameters: IndexMap<String, Parameter>,
    default_units: DefaultUnits,
    default_value: f64,
}

impl UnitParameterPool {
    pub fn new(
        unit_definitions: &IndexMap<String, UnitDefinition>,
        default_units: &DefaultUnits,
        default_value: f64,
    ) -> Self {
        UnitParameterPool {
            unit_definitions: unit_definitions.clone(),
            new_unit_ids: Vec::new(),
            parameters: IndexMap::new(),
            default_units: default_units.clone(),
            default_value,
        }
    }

    // region Units

    /// Id of a unit definition with the given units, created if no identical one exists
    pub fn unit_id(&mut self, units: Vec<Unit>) -> String {
        let candidate = UnitDefinition::new("", units);
        if let Some(existing) = self
            .unit_definitions
            .values()
            .find(|definition| definition.is_identical(&candidate))
        {
            return existing.id.clone();
        }
        let base = candidate.derived_id();
        let mut id = base.clone();
        let mut suffix = 2;
        while self.unit_definitions.contains_key(&id) || is_predefined_unit(&id) {
            id = format!("{}_{}", base, suffix);
            suffix += 1;
        }
        let definition = UnitDefinition {
            id: id.clone(),
            ..candidate
        };
        self.unit_definitions.insert(id.clone(), definition);
        self.new_unit_ids.push(id.clone());
        id
    }

    /// Units of one of the network default units, base kinds and definitions are expanded
    fn resolve(&self, id: Option<&str>, fallback: UnitKind) -> Vec<Unit> {
        match id {
            Some(id) => {
                if let Some(kind) = UnitKind::from_name(id) {
                    vec![Unit::new(kind, 1.)]
                } else if let Some(definition) = self.unit_definitions.get(id) {
                    definition.units.clone()
                } else {
                    vec![Unit::new(fallback, 1.)]
                }
            }
            None => vec![Unit::new(fallback, 1.)],
        }
    }

    fn substance(&self) -> Vec<Unit> {
        self.resolve(self.default_units.substance.as_deref(), UnitKind::Mole)
    }

    fn volume(&self) -> Vec<Unit> {
        self.resolve(self.default_units.volume.as_deref(), UnitKind::Litre)
    }

    fn time(&self) -> Vec<Unit> {
        self.resolve(self.default_units.time.as_deref(), UnitKind::Second)
    }

    /// `units^exponent`
    fn power(units: Vec<Unit>, exponent: f64) -> impl Iterator<Item = Unit> {
        units.into_iter().map(move |unit| Unit {
            exponent: unit.exponent * exponent,
            ..unit
        })
    }

    /// Id of the units of a parameter with the given dimension
    pub fn units_for(&mut self, dimension: ParameterUnits) -> String {
        let units: Vec<Unit> = match dimension {
            ParameterUnits::Dimensionless => return UnitKind::Dimensionless.name().to_string(),
            ParameterUnits::Concentration => Self::power(self.substance(), 1.)
                .chain(Self::power(self.volume(), -1.))
                .collect(),
            ParameterUnits::PerTime => Self::power(self.time(), -1.).collect(),
            ParameterUnits::Velocity => Self::power(self.substance(), 1.)
                .chain(Self::power(self.volume(), -1.))
                .chain(Self::power(self.time(), -1.))
                .collect(),
            // substance / time / concentration^order
            ParameterUnits::RateConstant(order) => Self::power(self.substance(), 1. - order)
                .chain(Self::power(self.volume(), order))
                .chain(Self::power(self.time(), -1.))
                .collect(),
        };
        self.unit_id(units)
    }

    // endregion Units

    // region Parameters

    /// Create a parameter, or reuse the one created earlier with the same id
    pub fn parameter(&mut self, id: &str, name: &str, dimension: ParameterUnits) -> Parameter {
        if let Some(parameter) = self.parameters.get(id) {
            return parameter.clone();
        }
        let units = self.units_for(dimension);
        let parameter =
            Parameter::new(id, self.default_value, Some(units.as_str())).with_name(name);
        self.parameters.insert(id.to_string(), parameter.clone());
        parameter
    }

    // endregion Parameters

    /// Unit definitions created during the run
    pub fn new_unit_definitions(&self) -> Vec<UnitDefinition> {
        self.new_unit_ids
            .iter()
            .filter_map(|id| self.unit_definitions.get(id).cloned())
            .collect()
    }

    /// Every parameter created during the run
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    /// Consume the pool, returning the new unit definitions and the created parameters
    pub fn into_parts(self) -> (Vec<UnitDefinition>, IndexMap<String, Parameter>) {
        (self.new_unit_definitions(), self.parameters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_pool() -> UnitParameterPool {
        let mut definitions = IndexMap::new();
        definitions.insert(
            "mM".to_string(),
            UnitDefinition::new(
                "mM",
                vec![
                    Unit::new(UnitKind::Mole, 1.).with_scale(-3),
                    Unit::new(UnitKind::Litre, -1.),
                ],
            ),
        );
        definitions.insert(
            "mmol".to_string(),
            UnitDefinition::new("mmol", vec![Unit::new(UnitKind::Mole, 1.).with_scale(-3)]),
        );
        let default_units = DefaultUnits {
            substance: Some("mmol".to_string()),
            ..DefaultUnits::default()
        };
        UnitParameterPool::new(&definitions, &default_units, 0.5)
    }

    #[test]
    fn identical_units_are_reused() {
        let mut pool = setup_pool();
        assert_eq!(pool.units_for(ParameterUnits::Concentration), "mM");
        assert!(pool.new_unit_definitions().is_empty());
    }

    #[test]
    fn new_units_get_derived_ids() {
        let mut pool = setup_pool();
        let id = pool.units_for(ParameterUnits::PerTime);
        assert_eq!(id, "per_second");
        assert_eq!(pool.units_for(ParameterUnits::PerTime), "per_second");
        assert_eq!(pool.new_unit_definitions().len(), 1);
        assert_eq!(pool.units_for(ParameterUnits::Dimensionless), "dimensionless");
    }

    #[test]
    fn rate_constant_units_depend_on_order() {
        let mut pool = setup_pool();
        assert_eq!(
            pool.units_for(ParameterUnits::RateConstant(1.)),
            "litre_per_second"
        );
        assert_eq!(
            pool.units_for(ParameterUnits::RateConstant(0.)),
            "mmole_per_second"
        );
    }

    #[test]
    fn derived_ids_do_not_clash() {
        let mut definitions = IndexMap::new();
        definitions.insert(
            "per_second".to_string(),
            UnitDefinition::new("per_second", vec![Unit::new(UnitKind::Metre, 1.)]),
        );
        let mut pool = UnitParameterPool::new(&definitions, &DefaultUnits::default(), 1.);
        assert_eq!(pool.units_for(ParameterUnits::PerTime), "per_second_2");
    }

    #[test]
    fn parameters_are_reused_by_id() {
        let mut pool = setup_pool();
        let first = pool.parameter("km_r1", "Michaelis constant", ParameterUnits::Concentration);
        assert_eq!(first.value, Some(0.5));
        assert_eq!(first.units.as_deref(), Some("mM"));
        let second = pool.parameter("km_r1", "other", ParameterUnits::PerTime);
        assert_eq!(first, second);
        assert_eq!(pool.parameters().len(), 1);
    }
}

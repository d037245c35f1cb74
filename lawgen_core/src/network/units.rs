//! Unit definitions, their simplification and comparison
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Tolerance used when comparing exponents and scaling factors of units
const UNIT_TOLERANCE: f64 = 1e-9;

/// Ids which are always defined and never removed from a network
const PREDEFINED_UNITS: &[&str] = &["substance", "volume", "area", "length", "time"];

/// Base unit kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Ampere,
    Avogadro,
    Becquerel,
    Candela,
    Coulomb,
    Dimensionless,
    Farad,
    Gram,
    Gray,
    Henry,
    Hertz,
    Item,
    Joule,
    Katal,
    Kelvin,
    Kilogram,
    Litre,
    Lumen,
    Lux,
    Metre,
    Mole,
    Newton,
    Ohm,
    Pascal,
    Radian,
    Second,
    Siemens,
    Sievert,
    Steradian,
    Tesla,
    Volt,
    Watt,
    Weber,
}

impl UnitKind {
    const ALL: [UnitKind; 33] = [
        UnitKind::Ampere,
        UnitKind::Avogadro,
        UnitKind::Becquerel,
        UnitKind::Candela,
        UnitKind::Coulomb,
        UnitKind::Dimensionless,
        UnitKind::Farad,
        UnitKind::Gram,
        UnitKind::Gray,
        UnitKind::Henry,
        UnitKind::Hertz,
        UnitKind::Item,
        UnitKind::Joule,
        UnitKind::Katal,
        UnitKind::Kelvin,
        UnitKind::Kilogram,
        UnitKind::Litre,
        UnitKind::Lumen,
        UnitKind::Lux,
        UnitKind::Metre,
        UnitKind::Mole,
        UnitKind::Newton,
        UnitKind::Ohm,
        UnitKind::Pascal,
        UnitKind::Radian,
        UnitKind::Second,
        UnitKind::Siemens,
        UnitKind::Sievert,
        UnitKind::Steradian,
        UnitKind::Tesla,
        UnitKind::Volt,
        UnitKind::Watt,
        UnitKind::Weber,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            UnitKind::Ampere => "ampere",
            UnitKind::Avogadro => "avogadro",
            UnitKind::Becquerel => "becquerel",
            UnitKind::Candela => "candela",
            UnitKind::Coulomb => "coulomb",
            UnitKind::Dimensionless => "dimensionless",
            UnitKind::Farad => "farad",
            UnitKind::Gram => "gram",
            UnitKind::Gray => "gray",
            UnitKind::Henry => "henry",
            UnitKind::Hertz => "hertz",
            UnitKind::Item => "item",
            UnitKind::Joule => "joule",
            UnitKind::Katal => "katal",
            UnitKind::Kelvin => "kelvin",
            UnitKind::Kilogram => "kilogram",
            UnitKind::Litre => "litre",
            UnitKind::Lumen => "lumen",
            UnitKind::Lux => "lux",
            UnitKind::Metre => "metre",
            UnitKind::Mole => "mole",
            UnitKind::Newton => "newton",
            UnitKind::Ohm => "ohm",
            UnitKind::Pascal => "pascal",
            UnitKind::Radian => "radian",
            UnitKind::Second => "second",
            UnitKind::Siemens => "siemens",
            UnitKind::Sievert => "sievert",
            UnitKind::Steradian => "steradian",
            UnitKind::Tesla => "tesla",
            UnitKind::Volt => "volt",
            UnitKind::Watt => "watt",
            UnitKind::Weber => "weber",
        }
    }

    /// Look up a base unit kind by its name
    pub fn from_name(name: &str) -> Option<UnitKind> {
        UnitKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl Display for UnitKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Whether a unit id is predefined (a base unit kind or one of the built-in quantities)
pub fn is_predefined_unit(id: &str) -> bool {
    PREDEFINED_UNITS.contains(&id) || UnitKind::from_name(id).is_some()
}

/// A factor of a unit definition: `(multiplier * 10^scale * kind)^exponent`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub kind: UnitKind,
    #[serde(default = "one")]
    pub exponent: f64,
    #[serde(default)]
    pub scale: i32,
    #[serde(default = "one")]
    pub multiplier: f64,
}

fn one() -> f64 {
    1.
}

impl Unit {
    pub fn new(kind: UnitKind, exponent: f64) -> Unit {
        Unit {
            kind,
            exponent,
            scale: 0,
            multiplier: 1.,
        }
    }

    pub fn with_scale(mut self, scale: i32) -> Unit {
        self.scale = scale;
        self
    }

    /// Decimal logarithm of the factor this unit contributes
    fn log_factor(&self) -> f64 {
        self.exponent * (self.multiplier.log10() + self.scale as f64)
    }
}

/// A derived unit, the product of its [`Unit`]s
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub units: Vec<Unit>,
}

impl UnitDefinition {
    pub fn new(id: &str, units: Vec<Unit>) -> UnitDefinition {
        UnitDefinition {
            id: id.to_string(),
            name: None,
            units,
        }
    }

    /// Merge units of the same kind and drop the ones that cancel out
    ///
    /// The resulting units are sorted by kind, their scaling is folded into the multiplier.
    pub fn simplify(&self) -> UnitDefinition {
        let mut merged: Vec<(UnitKind, f64, f64)> = Vec::new();
        for unit in &self.units {
            match merged.iter_mut().find(|(kind, _, _)| *kind == unit.kind) {
                Some((_, exponent, log_factor)) => {
                    *exponent += unit.exponent;
                    *log_factor += unit.log_factor();
                }
                None => merged.push((unit.kind, unit.exponent, unit.log_factor())),
            }
        }
        merged.sort_by_key(|(kind, _, _)| *kind);
        let units = merged
            .into_iter()
            .filter(|(kind, exponent, _)| {
                exponent.abs() > UNIT_TOLERANCE && *kind != UnitKind::Dimensionless
            })
            .map(|(kind, exponent, log_factor)| Unit {
                kind,
                exponent,
                scale: 0,
                multiplier: 10f64.powf(log_factor / exponent),
            })
            .collect();
        UnitDefinition {
            id: self.id.clone(),
            name: self.name.clone(),
            units,
        }
    }

    /// Whether two definitions describe the same unit, regardless of ids and notation
    ///
    /// # Examples
    /// ```rust
    /// use lawgen_core::network::units::{Unit, UnitDefinition, UnitKind};
    /// let mm = UnitDefinition::new("mM", vec![
    ///     Unit::new(UnitKind::Mole, 1.).with_scale(-3),
    ///     Unit::new(UnitKind::Litre, -1.),
    /// ]);
    /// let other = UnitDefinition::new("millimolar", vec![
    ///     Unit::new(UnitKind::Litre, -1.),
    ///     Unit::new(UnitKind::Mole, 1.).with_scale(-3),
    /// ]);
    /// assert!(mm.is_identical(&other));
    /// ```
    pub fn is_identical(&self, other: &UnitDefinition) -> bool {
        let left = self.simplify();
        let right = other.simplify();
        left.units.len() == right.units.len()
            && left.units.iter().zip(right.units.iter()).all(|(l, r)| {
                l.kind == r.kind
                    && (l.exponent - r.exponent).abs() < UNIT_TOLERANCE
                    && (l.log_factor() - r.log_factor()).abs() < UNIT_TOLERANCE
            })
    }

    /// Readable id describing the composition of the unit, e.g. `mmole_per_litre_per_second`
    pub fn derived_id(&self) -> String {
        let simplified = self.simplify();
        let describe = |unit: &Unit| {
            let mut id = String::new();
            let scale = unit.log_factor() / unit.exponent;
            if (scale - scale.round()).abs() < UNIT_TOLERANCE {
                id.push_str(prefix(scale.round() as i32));
            } else {
                id.push_str("scaled_");
            }
            id.push_str(unit.kind.name());
            let power = unit.exponent.abs();
            if (power - 1.).abs() > UNIT_TOLERANCE {
                id.push_str(&format!("_pow_{}", power).replace('.', "_"));
            }
            id
        };
        let numerator: Vec<String> = simplified
            .units
            .iter()
            .filter(|u| u.exponent > 0.)
            .map(describe)
            .collect();
        let denominator: Vec<String> = simplified
            .units
            .iter()
            .filter(|u| u.exponent < 0.)
            .map(|u| format!("per_{}", describe(u)))
            .collect();
        let parts: Vec<String> = numerator.into_iter().chain(denominator).collect();
        if parts.is_empty() {
            "dimensionless_unit".to_string()
        } else {
            parts.join("_")
        }
    }
}

fn prefix(scale: i32) -> &'static str {
    match scale {
        -15 => "f",
        -12 => "p",
        -9 => "n",
        -6 => "u",
        -3 => "m",
        -2 => "c",
        0 => "",
        3 => "k",
        6 => "M",
        _ => "scaled_",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simplify_merges_and_cancels() {
        let definition = UnitDefinition::new(
            "odd",
            vec![
                Unit::new(UnitKind::Mole, 1.),
                Unit::new(UnitKind::Litre, -1.),
                Unit::new(UnitKind::Mole, -1.),
                Unit::new(UnitKind::Second, -1.),
            ],
        );
        let simplified = definition.simplify();
        assert_eq!(simplified.units.len(), 2);
        assert_eq!(simplified.units[0].kind, UnitKind::Litre);
        assert_eq!(simplified.units[1].kind, UnitKind::Second);
    }

    #[test]
    fn different_scales_are_not_identical() {
        let molar = UnitDefinition::new(
            "M",
            vec![Unit::new(UnitKind::Mole, 1.), Unit::new(UnitKind::Litre, -1.)],
        );
        let millimolar = UnitDefinition::new(
            "mM",
            vec![
                Unit::new(UnitKind::Mole, 1.).with_scale(-3),
                Unit::new(UnitKind::Litre, -1.),
            ],
        );
        assert!(!molar.is_identical(&millimolar));
        assert!(molar.is_identical(&molar.clone()));
    }

    #[test]
    fn derived_ids() {
        let rate = UnitDefinition::new(
            "x",
            vec![
                Unit::new(UnitKind::Mole, 1.).with_scale(-3),
                Unit::new(UnitKind::Litre, -1.),
                Unit::new(UnitKind::Second, -1.),
            ],
        );
        assert_eq!(rate.derived_id(), "mmole_per_litre_per_second");
        let square = UnitDefinition::new("y", vec![Unit::new(UnitKind::Metre, 2.)]);
        assert_eq!(square.derived_id(), "metre_pow_2");
    }

    #[test]
    fn predefined_units() {
        assert!(is_predefined_unit("substance"));
        assert!(is_predefined_unit("second"));
        assert!(!is_predefined_unit("mM"));
    }
}

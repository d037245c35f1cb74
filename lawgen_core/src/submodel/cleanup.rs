//! Removal of parameters and unit definitions nothing in a network refers to
use indexmap::IndexSet;
use tracing::debug;

use crate::network::math::Math;
use crate::network::units::is_predefined_unit;
use crate::network::Network;

/// Remove unreferenced parameters, then the unit definitions left unreferenced
///
/// Returns the ids of the removed parameters and unit definitions.
pub fn remove_unnecessary_parameters_and_units(network: &mut Network) -> (Vec<String>, Vec<String>) {
    let parameters = remove_unnecessary_parameters(network);
    let units = remove_unnecessary_units(network);
    (parameters, units)
}

/// Every math element of the network outside of kinetic laws, with the variables assigned to
fn model_math(network: &Network) -> (Vec<&Math>, Vec<&str>) {
    let mut math: Vec<&Math> = Vec::new();
    let mut variables: Vec<&str> = Vec::new();
    for rule in &network.rules {
        math.push(&rule.math);
        variables.extend(rule.variable.as_deref());
    }
    for event in &network.events {
        math.push(&event.trigger);
        math.extend(event.delay.as_ref());
        for assignment in &event.assignments {
            math.push(&assignment.math);
            variables.push(&assignment.variable);
        }
    }
    math.extend(network.constraints.iter());
    for assignment in &network.initial_assignments {
        math.push(&assignment.math);
        variables.push(&assignment.symbol);
    }
    math.extend(network.function_definitions.values().map(|f| &f.math));
    for reaction in network.reactions.values() {
        math.extend(
            reaction
                .reactants
                .iter()
                .chain(reaction.products.iter())
                .filter_map(|r| r.stoichiometry_math.as_ref()),
        );
    }
    (math, variables)
}

/// Remove local parameters their law does not use, and global parameters nothing refers to
///
/// A global parameter only counts as used by a law if the law has no local parameter with
/// the same id shadowing it.
pub fn remove_unnecessary_parameters(network: &mut Network) -> Vec<String> {
    let mut removed = Vec::new();
    for reaction in network.reactions.values_mut() {
        if let Some(law) = reaction.kinetic_law.as_mut() {
            let math = &law.math;
            law.local_parameters.retain(|id, _| {
                let used = math.refers_to(id);
                if !used {
                    debug!(reaction = %reaction.id, parameter = %id, "Removing local parameter");
                }
                used
            });
        }
    }

    let (math, variables) = model_math(network);
    let unused: Vec<String> = network
        .parameters
        .keys()
        .filter(|id| {
            let by_law = network.reactions.values().any(|reaction| {
                reaction.kinetic_law.as_ref().is_some_and(|law| {
                    !law.local_parameters.contains_key(*id) && law.math.refers_to(id)
                })
            });
            let by_model =
                variables.contains(&id.as_str()) || math.iter().any(|m| m.refers_to(id));
            !(by_law || by_model)
        })
        .cloned()
        .collect();
    for id in unused {
        debug!(parameter = %id, "Removing global parameter");
        network.parameters.shift_remove(&id);
        removed.push(id);
    }
    removed
}

/// Remove unit definitions no compartment, species, parameter or default unit refers to
///
/// Predefined units are never removed. Default units left pointing at a definition which
/// does not exist are unset.
pub fn remove_unnecessary_units(network: &mut Network) -> Vec<String> {
    let mut used: IndexSet<String> = IndexSet::new();
    used.extend(
        network
            .compartments
            .values()
            .filter_map(|c| c.units.clone()),
    );
    used.extend(
        network
            .species
            .values()
            .filter_map(|s| s.substance_units.clone()),
    );
    used.extend(
        network
            .parameters
            .values()
            .filter_map(|p| p.units.clone()),
    );
    for reaction in network.reactions.values() {
        if let Some(law) = &reaction.kinetic_law {
            used.extend(law.local_parameters.values().filter_map(|p| p.units.clone()));
        }
    }
    used.extend(network.default_units.iter().cloned());

    let unused: Vec<String> = network
        .unit_definitions
        .keys()
        .filter(|id| !used.contains(*id) && !is_predefined_unit(id))
        .cloned()
        .collect();
    for id in &unused {
        debug!(unit = %id, "Removing unit definition");
        network.unit_definitions.shift_remove(id);
    }

    let dangling: Vec<String> = network
        .default_units
        .iter()
        .filter(|id| !network.unit_definitions.contains_key(*id) && !is_predefined_unit(id))
        .cloned()
        .collect();
    for id in dangling {
        network.default_units.unset(&id);
    }
    unused
}

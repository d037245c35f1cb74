//! Stoichiometric matrix of a network
use nalgebra::{DMatrix, SVD};

use crate::network::Network;

/// Tolerance for singular values counted towards the rank
const RANK_TOLERANCE: f64 = 1e-10;

/// Matrix N with `N[i, j]` the net stoichiometry of species i in reaction j
///
/// Boundary species are left out, their amount is not determined by the reactions.
#[derive(Debug, Clone)]
pub struct StoichiometricMatrix {
    pub species: Vec<String>,
    pub reactions: Vec<String>,
    pub matrix: DMatrix<f64>,
}

impl StoichiometricMatrix {
    pub fn from_network(network: &Network) -> Self {
        let species: Vec<String> = network
            .species
            .values()
            .filter(|s| !s.boundary_condition)
            .map(|s| s.id.clone())
            .collect();
        let reactions: Vec<String> = network.reactions.keys().cloned().collect();
        let mut matrix = DMatrix::zeros(species.len(), reactions.len());
        for (column, reaction) in network.reactions.values().enumerate() {
            let references = reaction
                .reactants
                .iter()
                .map(|r| (r, -1.))
                .chain(reaction.products.iter().map(|r| (r, 1.)));
            for (reference, sign) in references {
                if let Some(row) = species.iter().position(|s| *s == reference.species) {
                    matrix[(row, column)] += sign * reference.stoichiometry;
                }
            }
        }
        StoichiometricMatrix {
            species,
            reactions,
            matrix,
        }
    }

    pub fn rank(&self) -> usize {
        if self.matrix.nrows() == 0 || self.matrix.ncols() == 0 {
            return 0;
        }
        SVD::new(self.matrix.clone(), false, false).rank(RANK_TOLERANCE)
    }

    /// Whether the reactions are linearly independent
    pub fn has_full_column_rank(&self) -> bool {
        self.rank() == self.matrix.ncols()
    }
}

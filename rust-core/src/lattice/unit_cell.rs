use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{BOHR_TO_ANGSTROM, RECIPROCAL_PREFACTOR, UNIT_CELL_TOLERANCE};
use crate::interfaces::Space;
use crate::{NnkpError, Result};

/// Three lattice vectors, stored as the rows of a matrix (the layout of the .win/.nnkp blocks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitCell {
    vectors: Matrix3<f64>,
    space: Space,
}

impl UnitCell {
    pub fn from_vectors(
        vector_1: Vector3<f64>,
        vector_2: Vector3<f64>,
        vector_3: Vector3<f64>,
        space: Space,
    ) -> Result<Self> {
        Self::from_matrix(
            Matrix3::from_rows(&[
                vector_1.transpose(),
                vector_2.transpose(),
                vector_3.transpose(),
            ]),
            space,
        )
    }

    pub fn from_matrix(vectors: Matrix3<f64>, space: Space) -> Result<Self> {
        // Linearly non-dependent (also rejects zero and non-finite vectors)
        let determinant = vectors.determinant();
        if !(determinant.abs() >= UNIT_CELL_TOLERANCE) {
            return Err(NnkpError::SingularUnitCell { determinant });
        }

        Ok(UnitCell { vectors, space })
    }

    /// Real-space cell from vectors given in Bohr. The stored vectors are in Ångström.
    pub fn from_bohr(vectors: Matrix3<f64>) -> Result<Self> {
        Self::from_matrix(vectors * BOHR_TO_ANGSTROM, Space::Real)
    }

    /// Converts to the dual space: rows b_j with a_i · b_j = RECIPROCAL_PREFACTOR · δ_ij.
    ///
    /// The cell does not have to be in real space: a reciprocal cell converts back to real
    /// space, so applying this twice returns the original cell.
    pub fn reciprocal(&self) -> Result<UnitCell> {
        let inverse = self
            .vectors
            .try_inverse()
            .ok_or(NnkpError::SingularUnitCell {
                determinant: self.determinant(),
            })?;

        Self::from_matrix(
            (inverse * RECIPROCAL_PREFACTOR).transpose(),
            self.space.dual(),
        )
    }

    pub fn vectors(&self) -> &Matrix3<f64> {
        &self.vectors
    }

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn determinant(&self) -> f64 {
        self.vectors.determinant()
    }

    pub fn volume(&self) -> f64 {
        self.determinant().abs()
    }

    pub fn rows(&self) -> [Vector3<f64>; 3] {
        [
            self.vectors.row(0).transpose(),
            self.vectors.row(1).transpose(),
            self.vectors.row(2).transpose(),
        ]
    }
}

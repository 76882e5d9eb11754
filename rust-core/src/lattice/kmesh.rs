//! Regular k-point grids: dimensions, axis ordering, linearisation and periodic wraparound.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_AXIS_ORDER;
use crate::{NnkpError, Result};

/// Unit steps along the three lattice directions, in emission order.
pub const DIRECTIONS: [[i64; 3]; 3] = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

/// Number of k-points along each reciprocal lattice direction (all components ≥ 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions([usize; 3]);

impl GridDimensions {
    pub fn new(d0: i64, d1: i64, d2: i64) -> Result<Self> {
        Self::try_from([d0, d1, d2].as_slice())
    }

    pub fn as_array(&self) -> [usize; 3] {
        self.0
    }

    pub fn as_i64(&self) -> [i64; 3] {
        self.0.map(|d| d as i64)
    }

    /// Number of k-points in the grid, D0·D1·D2.
    pub fn total(&self) -> usize {
        self.0.iter().product()
    }

    /// Grid points (a, b, c) with a outermost and c innermost.
    pub fn coordinates(&self) -> impl Iterator<Item = [i64; 3]> {
        let [d0, d1, d2] = self.as_i64();
        (0..d0).flat_map(move |a| (0..d1).flat_map(move |b| (0..d2).map(move |c| [a, b, c])))
    }
}

impl TryFrom<&[i64]> for GridDimensions {
    type Error = NnkpError;

    fn try_from(values: &[i64]) -> Result<Self> {
        let dims: [i64; 3] = values
            .try_into()
            .map_err(|_| NnkpError::GridRank(values.len()))?;

        for (axis, &value) in dims.iter().enumerate() {
            if value <= 0 {
                return Err(NnkpError::NonPositiveGridDimension { axis, value });
            }
        }

        Ok(GridDimensions(dims.map(|d| d as usize)))
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} x {}", self.0[0], self.0[1], self.0[2])
    }
}

/// Permutation applied to coordinates and dimensions before linearisation.
///
/// `AxisOrder([2, 1, 0])` (the default) makes the last lattice axis the fastest-varying one in
/// the k-point index, which is the ordering `.nnkp` consumers expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisOrder([usize; 3]);

impl AxisOrder {
    pub fn new(order: [usize; 3]) -> Result<Self> {
        let mut seen = [false; 3];
        for &axis in &order {
            if axis >= 3 || seen[axis] {
                return Err(NnkpError::InvalidAxisOrder(order));
            }
            seen[axis] = true;
        }
        Ok(AxisOrder(order))
    }

    pub fn identity() -> Self {
        AxisOrder([0, 1, 2])
    }

    pub fn as_array(&self) -> [usize; 3] {
        self.0
    }

    /// Reorders `v` so that entry i of the result is `v[order[i]]`.
    pub fn permute<T: Copy>(&self, v: [T; 3]) -> [T; 3] {
        self.0.map(|axis| v[axis])
    }
}

impl Default for AxisOrder {
    fn default() -> Self {
        AxisOrder(DEFAULT_AXIS_ORDER)
    }
}

/// Mixed-radix flattening: Σ v_i · w_i with w_0 = 1 and w_i = D_0 ⋯ D_{i-1}. 0-based.
pub fn linear_index(v: [i64; 3], dims: [i64; 3]) -> i64 {
    let mut weight = 1;
    let mut index = 0;
    for (coordinate, dim) in v.into_iter().zip(dims) {
        index += coordinate * weight;
        weight *= dim;
    }
    index
}

/// Brings `v` (a grid point shifted by `direction`) back into the grid.
///
/// Returns the wrapped coordinates and the translation. Any wrap along an axis where
/// `direction` is nonzero attributes the whole `direction` as translation; this equals the
/// per-axis correction only while every direction has a single nonzero component.
pub fn wrap(mut v: [i64; 3], direction: [i64; 3], dims: [i64; 3]) -> ([i64; 3], [i64; 3]) {
    let mut translation = [0; 3];
    for axis in 0..3 {
        if direction[axis] != 0 && !(0..dims[axis]).contains(&v[axis]) {
            v[axis] = v[axis].rem_euclid(dims[axis]);
            translation = direction;
        }
    }
    (v, translation)
}

/// 1-based k-point index of grid point `v` under `order`.
pub fn kpoint_index(v: [i64; 3], dims: &GridDimensions, order: &AxisOrder) -> usize {
    (linear_index(order.permute(v), order.permute(dims.as_i64())) + 1) as usize
}

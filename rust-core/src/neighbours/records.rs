use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{GRID_NEIGHBOURS_PER_KPOINT, PATH_NEIGHBOURS_PER_KPOINT};
use crate::lattice::{AxisOrder, GridDimensions};
use crate::{NnkpError, Result};

/// One line of the nnkpts block: k-point, its neighbour (both 1-based) and the G-vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeighbourRecord {
    pub kpoint: usize,
    pub neighbour: usize,
    pub translation: [i64; 3],
}

impl NeighbourRecord {
    pub fn new(kpoint: usize, neighbour: usize, translation: [i64; 3]) -> Self {
        Self {
            kpoint,
            neighbour,
            translation,
        }
    }

    pub fn as_tuple(&self) -> (usize, usize, i64, i64, i64) {
        let [g0, g1, g2] = self.translation;
        (self.kpoint, self.neighbour, g0, g1, g2)
    }
}

impl fmt::Display for NeighbourRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [g0, g1, g2] = self.translation;
        write!(
            f,
            " {:5} {:5}    {:3} {:3} {:3}",
            self.kpoint, self.neighbour, g0, g1, g2
        )
    }
}

/// Reciprocal lattice vector added to k(1) when the last point of a k-path closes the loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClosureTranslation {
    /// k(n) -> k(1)
    #[default]
    None,
    /// k(n) -> k(1) + b1
    B1,
    /// k(n) -> k(1) + b2
    B2,
    /// k(n) -> k(1) + b3
    B3,
}

impl ClosureTranslation {
    pub fn translation(&self) -> [i64; 3] {
        match self {
            Self::None => [0, 0, 0],
            Self::B1 => [1, 0, 0],
            Self::B2 => [0, 1, 0],
            Self::B3 => [0, 0, 1],
        }
    }

    pub fn selector(&self) -> i64 {
        match self {
            Self::None => 0,
            Self::B1 => 1,
            Self::B2 => 2,
            Self::B3 => 3,
        }
    }
}

impl TryFrom<i64> for ClosureTranslation {
    type Error = NnkpError;

    fn try_from(selector: i64) -> Result<Self> {
        match selector {
            0 => Ok(Self::None),
            1 => Ok(Self::B1),
            2 => Ok(Self::B2),
            3 => Ok(Self::B3),
            other => Err(NnkpError::InvalidClosureSelector(other)),
        }
    }
}

/// How the neighbour list is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationMode {
    /// Periodic Monkhorst-Pack grid: three forward neighbours per k-point.
    Grid {
        dimensions: GridDimensions,
        axis_order: AxisOrder,
    },
    /// Explicit k-points joined in order into a closed loop.
    Path {
        length: usize,
        closure: ClosureTranslation,
    },
}

impl CalculationMode {
    pub fn grid(dimensions: GridDimensions) -> Self {
        Self::Grid {
            dimensions,
            axis_order: AxisOrder::default(),
        }
    }

    /// Path mode from raw inputs; rejects a non-positive length or a selector outside 0..=3.
    pub fn path(length: i64, closure_selector: i64) -> Result<Self> {
        if length <= 0 {
            return Err(NnkpError::NonPositivePathLength(length));
        }
        Ok(Self::Path {
            length: length as usize,
            closure: ClosureTranslation::try_from(closure_selector)?,
        })
    }

    /// Header value of the nnkpts block.
    pub fn neighbours_per_kpoint(&self) -> usize {
        match self {
            Self::Grid { .. } => GRID_NEIGHBOURS_PER_KPOINT,
            Self::Path { .. } => PATH_NEIGHBOURS_PER_KPOINT,
        }
    }

    pub fn kpoint_count(&self) -> usize {
        match self {
            Self::Grid { dimensions, .. } => dimensions.total(),
            Self::Path { length, .. } => *length,
        }
    }

    pub fn record_count(&self) -> usize {
        self.kpoint_count() * self.neighbours_per_kpoint()
    }
}

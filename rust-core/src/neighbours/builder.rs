use log::debug;

use crate::lattice::{kpoint_index, wrap, AxisOrder, GridDimensions, DIRECTIONS};
use crate::neighbours::records::{CalculationMode, ClosureTranslation, NeighbourRecord};
use crate::{NnkpError, Result};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Builder for the ordered neighbour list of a k-point grid or a closed k-path
#[derive(Debug, Clone, Default)]
pub struct NeighborGraphBuilder {
    mode: Option<CalculationMode>,
    axis_order: Option<AxisOrder>,
}

impl NeighborGraphBuilder {
    /// Create a new NeighborGraphBuilder
    pub fn new() -> Self {
        NeighborGraphBuilder {
            mode: None,
            axis_order: None,
        }
    }

    /// Use a periodic grid
    pub fn with_grid(mut self, dimensions: GridDimensions) -> Self {
        self.mode = Some(CalculationMode::grid(dimensions));
        self
    }

    /// Set the axis order used to linearise grid points, regardless of call order.
    /// Overrides the order carried by a grid mode; has no effect in path mode.
    pub fn with_axis_order(mut self, order: AxisOrder) -> Self {
        self.axis_order = Some(order);
        self
    }

    /// Use a closed k-path of `length` points
    pub fn with_path(mut self, length: usize, closure: ClosureTranslation) -> Self {
        self.mode = Some(CalculationMode::Path { length, closure });
        self
    }

    pub fn with_mode(mut self, mode: CalculationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// The mode `build` runs, with the builder's axis order applied
    pub fn mode(&self) -> Option<CalculationMode> {
        match (self.mode, self.axis_order) {
            (Some(CalculationMode::Grid { dimensions, .. }), Some(axis_order)) => {
                Some(CalculationMode::Grid {
                    dimensions,
                    axis_order,
                })
            }
            (mode, _) => mode,
        }
    }

    /// Build the neighbour records
    pub fn build(&self) -> Result<Vec<NeighbourRecord>> {
        let records = match self.mode().ok_or(NnkpError::MissingMode)? {
            CalculationMode::Grid {
                dimensions,
                axis_order,
            } => grid_records(&dimensions, &axis_order),
            CalculationMode::Path { length, closure } => {
                if length == 0 {
                    return Err(NnkpError::NonPositivePathLength(0));
                }
                path_records(length, closure)
            }
        };

        debug!("Generated {} neighbour records", records.len());
        Ok(records)
    }
}

/// The three forward neighbours (+x, +y, +z) of a single grid point.
fn point_records(
    v: [i64; 3],
    dimensions: &GridDimensions,
    order: &AxisOrder,
) -> [NeighbourRecord; 3] {
    let dims = dimensions.as_i64();
    let kpoint = kpoint_index(v, dimensions, order);

    DIRECTIONS.map(|d| {
        let shifted = [v[0] + d[0], v[1] + d[1], v[2] + d[2]];
        let (v_neighbour, translation) = wrap(shifted, d, dims);
        NeighbourRecord::new(kpoint, kpoint_index(v_neighbour, dimensions, order), translation)
    })
}

#[cfg(not(feature = "parallel"))]
fn grid_records(dimensions: &GridDimensions, order: &AxisOrder) -> Vec<NeighbourRecord> {
    dimensions
        .coordinates()
        .flat_map(|v| point_records(v, dimensions, order))
        .collect()
}

// rayon's ordered collect keeps the serial emission order.
#[cfg(feature = "parallel")]
fn grid_records(dimensions: &GridDimensions, order: &AxisOrder) -> Vec<NeighbourRecord> {
    let [d0, d1, d2] = dimensions.as_i64();
    (0..d0)
        .into_par_iter()
        .flat_map_iter(move |a| {
            (0..d1).flat_map(move |b| {
                (0..d2).flat_map(move |c| point_records([a, b, c], dimensions, order))
            })
        })
        .collect()
}

/// k(1) -> k(2) -> ... -> k(n) -> k(1) + G
fn path_records(length: usize, closure: ClosureTranslation) -> Vec<NeighbourRecord> {
    (1..length)
        .map(|i| NeighbourRecord::new(i, i + 1, [0, 0, 0]))
        .chain(std::iter::once(NeighbourRecord::new(
            length,
            1,
            closure.translation(),
        )))
        .collect()
}

/// Neighbour list of a periodic grid in `.nnkp` order
pub fn grid_neighbours(dimensions: GridDimensions) -> Vec<NeighbourRecord> {
    grid_records(&dimensions, &AxisOrder::default())
}

/// Neighbour list of a closed k-path
pub fn path_neighbours(length: i64, closure_selector: i64) -> Result<Vec<NeighbourRecord>> {
    NeighborGraphBuilder::new()
        .with_mode(CalculationMode::path(length, closure_selector)?)
        .build()
}

/// Resolve raw reader/CLI inputs into a calculation mode.
///
/// In path mode the grid dimensions are not inspected; in grid mode the selector and path
/// length are not inspected.
pub fn resolve_mode(
    dimensions: &[i64],
    path_mode: bool,
    closure_selector: i64,
    path_length: i64,
) -> Result<CalculationMode> {
    if path_mode {
        CalculationMode::path(path_length, closure_selector)
    } else {
        Ok(CalculationMode::grid(GridDimensions::try_from(dimensions)?))
    }
}

/// `build(D, mode, closure_selector, path_length)` on raw inputs
pub fn calculate_neighbours(
    dimensions: &[i64],
    path_mode: bool,
    closure_selector: i64,
    path_length: i64,
) -> Result<Vec<NeighbourRecord>> {
    let mode = resolve_mode(dimensions, path_mode, closure_selector, path_length)?;
    NeighborGraphBuilder::new().with_mode(mode).build()
}

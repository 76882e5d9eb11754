// Lattice module: real/reciprocal unit cells and regular k-point grids
// This module provides the geometry the neighbour generation works on

// ======================== MODULE DECLARATIONS ========================
pub mod kmesh;
pub mod unit_cell;


// ======================== UNIT CELLS ========================
pub use unit_cell::UnitCell; // struct - three lattice vectors (rows) tagged with their space
// UnitCell impl methods:
//   from_vectors(v1, v2, v3, space) -> Result<Self>   - constructs from three row vectors
//   from_matrix(vectors, space) -> Result<Self>       - constructs from a matrix of row vectors
//   from_bohr(vectors) -> Result<Self>                - real-space cell from Bohr, stored in Ångström
//   reciprocal(&self) -> Result<UnitCell>             - converts to the dual space
//   vectors / space / determinant / volume / rows     - accessors

// ======================== K-POINT GRIDS ========================
pub use kmesh::{
    AxisOrder,      // struct - permutation applied before linearisation (default [2, 1, 0])
    DIRECTIONS,     // const - unit steps +x, +y, +z in emission order
    GridDimensions, // struct - Monkhorst-Pack grid size (D0, D1, D2), all positive
    kpoint_index,   // fn(v, dims, order) -> usize - 1-based k-point index of a grid point
    linear_index,   // fn(v, dims) -> i64 - mixed-radix flattening, 0-based
    wrap,           // fn(v, direction, dims) -> (v, G) - periodic wraparound with translation
};

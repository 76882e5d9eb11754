// Neighbours module: nearest-neighbour k-point pairs for finite-difference overlaps
// This module provides the neighbour records and the builder producing them

// ======================== MODULE DECLARATIONS ========================
pub mod builder;
pub mod records;

mod _tests_records;

// ======================== RECORDS & MODES ========================
pub use records::{
    CalculationMode,    // enum - Grid { dimensions, axis_order } or Path { length, closure }
    ClosureTranslation, // enum - G-vector closing a k-path (None, B1, B2, B3), TryFrom<i64> for 0..=3
    NeighbourRecord,    // struct - (kpoint, neighbour, translation), Display renders the nnkpts line
};

// ======================== NEIGHBOUR GENERATION ========================
pub use builder::{
    NeighborGraphBuilder, // struct - builds the ordered neighbour list for a calculation mode
    calculate_neighbours, // fn(dims, path_mode, closure_selector, path_length) -> Result<Vec<NeighbourRecord>>
    grid_neighbours,      // fn(dims) -> Vec<NeighbourRecord> - grid mode, default axis order
    path_neighbours,      // fn(length, closure_selector) -> Result<Vec<NeighbourRecord>>
    resolve_mode,         // fn(dims, path_mode, closure_selector, path_length) -> Result<CalculationMode>
};

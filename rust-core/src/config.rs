// Constants

// Units
pub const BOHR_TO_ANGSTROM: f64 = 0.52917720859; // unit_cell_cart blocks are given in Bohr

// Reciprocal lattice b = RECIPROCAL_PREFACTOR * (A^-1)^T. Truncated 2π, reproduces the
// recip_lattice block of .nnkp files written by earlier versions of the tool.
pub const RECIPROCAL_PREFACTOR: f64 = 6.28318;

// Tolerances
pub const UNIT_CELL_TOLERANCE: f64 = 1e-10; // Minimum |det| of a unit cell

// Neighbour generation
pub const DEFAULT_AXIS_ORDER: [usize; 3] = [2, 1, 0]; // Last lattice axis varies fastest in the k-point index
pub const GRID_NEIGHBOURS_PER_KPOINT: usize = 3; // +x, +y, +z
pub const PATH_NEIGHBOURS_PER_KPOINT: usize = 1; // successor along the loop

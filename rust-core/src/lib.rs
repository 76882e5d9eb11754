//! Nearest-neighbour k-point generation for Wannier interpolation
//!
//! This library turns the lattice, Monkhorst-Pack grid and k-point list of a Wannier90 `.win`
//! file into the `.nnkp` neighbour file: for every k-point, the neighbouring k-points needed for
//! finite-difference overlaps together with the reciprocal-lattice translation (G-vector) that
//! maps each neighbour back into the first Brillouin zone.

pub mod config;
pub mod error;
pub mod interfaces;
pub mod io;
pub mod lattice;
pub mod neighbours;

pub use error::NnkpError;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, NnkpError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

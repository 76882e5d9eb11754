// IO module: .win input and .nnkp output

// ======================== MODULE DECLARATIONS ========================
pub mod nnkp_writer;
pub mod win_reader;

mod _tests_win_reader;

pub use nnkp_writer::{write_nnkp, NnkpDocument, NnkpWriter};
pub use win_reader::{
    parse_kpoints, parse_mp_grid, parse_unit_cell_cart, parse_win, read_win, win_file_name,
    LengthUnit, WinInput,
};

#[cfg(test)]
mod _tests_win_reader {
    use super::super::win_reader::{
        parse_kpoints, parse_mp_grid, parse_unit_cell_cart, parse_win, read_win, win_file_name,
    };
    use crate::config::{BOHR_TO_ANGSTROM, RECIPROCAL_PREFACTOR};
    use crate::interfaces::{Space, SpinChannel};
    use crate::NnkpError;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::path::PathBuf;

    const WIN: &str = "! Wannier90 input written by w2w
 num_bands = 12
 num_wann  = 4

begin unit_cell_cart
bohr
   10.0000000    0.0000000    0.0000000
    0.0000000   10.0000000    0.0000000
    0.0000000    0.0000000   20.0000000
end unit_cell_cart

# mp_grid : 9 9 9
mp_grid :    2    1    3

begin kpoints
  0.00000000  0.00000000  0.00000000
  0.50000000  0.00000000  0.00000000

  0.00000000  0.00000000  0.33333333   1.0
end kpoints
";

    #[test]
    fn test_parse_win() {
        let input = parse_win(WIN).unwrap();

        assert_eq!(input.mp_grid, vec![2, 1, 3]);
        assert_eq!(input.kpoints.len(), 3);
        assert_eq!(input.kpoints[1], Vector3::new(0.5, 0.0, 0.0));
        assert_relative_eq!(input.kpoints[2].z, 0.33333333, epsilon = 1e-12);

        assert_eq!(input.real_lattice.space(), Space::Real);
        assert_relative_eq!(
            input.real_lattice.vectors()[(0, 0)],
            10.0 * BOHR_TO_ANGSTROM,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            input.real_lattice.vectors()[(2, 2)],
            20.0 * BOHR_TO_ANGSTROM,
            epsilon = 1e-12
        );

        assert_eq!(input.recip_lattice.space(), Space::Reciprocal);
        assert_relative_eq!(
            input.recip_lattice.vectors()[(0, 0)],
            RECIPROCAL_PREFACTOR / (10.0 * BOHR_TO_ANGSTROM),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_unit_cell_without_unit_line_is_angstrom() {
        let content = "begin unit_cell_cart
 1.0 0.0 0.0
 0.0 2.0 0.0
 0.0 0.0 3.0
end unit_cell_cart";
        let cell = parse_unit_cell_cart(content).unwrap();
        assert_relative_eq!(cell.vectors()[(1, 1)], 2.0, epsilon = 1e-12);
        assert_relative_eq!(cell.volume(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_cell_ang_unit_line() {
        let content = "BEGIN UNIT_CELL_CART
Ang
 1.0 0.0 0.0
 0.0 1.0 0.0
 0.0 0.0 1.0
END UNIT_CELL_CART";
        let cell = parse_unit_cell_cart(content).unwrap();
        assert_relative_eq!(cell.vectors()[(0, 0)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_cell_errors() {
        assert!(matches!(
            parse_unit_cell_cart("mp_grid : 1 1 1"),
            Err(NnkpError::MissingBlock("unit_cell_cart"))
        ));

        let unterminated = "begin unit_cell_cart\nbohr\n1 0 0\n0 1 0\n0 0 1\n";
        assert!(matches!(
            parse_unit_cell_cart(unterminated),
            Err(NnkpError::MissingBlock("end unit_cell_cart"))
        ));

        let short = "begin unit_cell_cart\nbohr\n1 0 0\n0 1\n0 0 1\nend unit_cell_cart";
        assert!(matches!(
            parse_unit_cell_cart(short),
            Err(NnkpError::Parse { line: 4, .. })
        ));

        let singular = "begin unit_cell_cart\n1 0 0\n2 0 0\n0 0 1\nend unit_cell_cart";
        assert!(matches!(
            parse_unit_cell_cart(singular),
            Err(NnkpError::SingularUnitCell { .. })
        ));
    }

    #[test]
    fn test_parse_mp_grid() {
        assert_eq!(parse_mp_grid("mp_grid : 4 4 4").unwrap(), vec![4, 4, 4]);
        assert_eq!(parse_mp_grid("  mp_grid = 8 6 1").unwrap(), vec![8, 6, 1]);
        // Values are validated when the calculation mode is resolved
        assert_eq!(parse_mp_grid("mp_grid : 0 4 4").unwrap(), vec![0, 4, 4]);
    }

    #[test]
    fn test_parse_mp_grid_errors() {
        assert!(matches!(
            parse_mp_grid("num_wann = 4"),
            Err(NnkpError::MissingBlock("mp_grid"))
        ));
        assert!(matches!(
            parse_mp_grid("num_wann = 4\nmp_grid : 4 x 4"),
            Err(NnkpError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse_mp_grid("mp_grid 4 4 4"),
            Err(NnkpError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_kpoints_errors() {
        assert!(matches!(
            parse_kpoints("mp_grid : 1 1 1"),
            Err(NnkpError::MissingBlock("kpoints"))
        ));
        assert!(matches!(
            parse_kpoints("begin kpoints\n0 0 0\n"),
            Err(NnkpError::MissingBlock("end kpoints"))
        ));
        assert!(matches!(
            parse_kpoints("begin kpoints\n0 0 0\n0.5 0\nend kpoints"),
            Err(NnkpError::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn test_parse_kpoints_empty_block() {
        assert!(parse_kpoints("begin kpoints\nend kpoints").unwrap().is_empty());
    }

    #[test]
    fn test_win_file_name() {
        assert_eq!(win_file_name("GaAs", SpinChannel::Unpolarized), PathBuf::from("GaAs.win"));
        assert_eq!(win_file_name("Fe", SpinChannel::Up), PathBuf::from("Fe.winup"));
        assert_eq!(win_file_name("Fe", SpinChannel::Down), PathBuf::from("Fe.windn"));
    }

    #[test]
    fn test_read_win_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case.win");
        std::fs::write(&path, WIN).unwrap();

        let input = read_win(&path).unwrap();
        assert_eq!(input.mp_grid, vec![2, 1, 3]);

        let missing = read_win(&dir.path().join("absent.win"));
        assert!(matches!(missing, Err(NnkpError::Io(_))));
    }
}

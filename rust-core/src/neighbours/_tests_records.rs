#[cfg(test)]
mod _tests_records {
    use super::super::records::{CalculationMode, ClosureTranslation, NeighbourRecord};
    use crate::lattice::{AxisOrder, GridDimensions};
    use crate::NnkpError;

    #[test]
    fn test_record_display_fixed_width() {
        let record = NeighbourRecord::new(1, 2, [0, 1, 0]);
        assert_eq!(record.to_string(), "     1     2      0   1   0");

        let record = NeighbourRecord::new(12, 1, [-1, 0, 0]);
        assert_eq!(record.to_string(), "    12     1     -1   0   0");
    }

    #[test]
    fn test_record_as_tuple() {
        let record = NeighbourRecord::new(7, 3, [0, 0, 1]);
        assert_eq!(record.as_tuple(), (7, 3, 0, 0, 1));
    }

    #[test]
    fn test_closure_translation_from_selector() {
        let expected = [
            (0, ClosureTranslation::None, [0, 0, 0]),
            (1, ClosureTranslation::B1, [1, 0, 0]),
            (2, ClosureTranslation::B2, [0, 1, 0]),
            (3, ClosureTranslation::B3, [0, 0, 1]),
        ];
        for (selector, closure, translation) in expected {
            let parsed = ClosureTranslation::try_from(selector).unwrap();
            assert_eq!(parsed, closure);
            assert_eq!(parsed.translation(), translation);
            assert_eq!(parsed.selector(), selector);
        }
    }

    #[test]
    fn test_closure_translation_invalid_selector() {
        for selector in [4, -1, 100] {
            match ClosureTranslation::try_from(selector) {
                Err(NnkpError::InvalidClosureSelector(value)) => assert_eq!(value, selector),
                other => panic!("Expected InvalidClosureSelector, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_mode_neighbours_per_kpoint() {
        let grid = CalculationMode::grid(GridDimensions::new(4, 4, 2).unwrap());
        assert_eq!(grid.neighbours_per_kpoint(), 3);
        assert_eq!(grid.kpoint_count(), 32);
        assert_eq!(grid.record_count(), 96);

        let path = CalculationMode::path(10, 0).unwrap();
        assert_eq!(path.neighbours_per_kpoint(), 1);
        assert_eq!(path.kpoint_count(), 10);
        assert_eq!(path.record_count(), 10);
    }

    #[test]
    fn test_grid_mode_uses_default_axis_order() {
        match CalculationMode::grid(GridDimensions::new(1, 2, 3).unwrap()) {
            CalculationMode::Grid { axis_order, .. } => assert_eq!(axis_order, AxisOrder::default()),
            other => panic!("Expected grid mode, got {:?}", other),
        }
    }

    #[test]
    fn test_path_mode_validation() {
        assert!(matches!(
            CalculationMode::path(0, 0),
            Err(NnkpError::NonPositivePathLength(0))
        ));
        assert!(matches!(
            CalculationMode::path(-3, 0),
            Err(NnkpError::NonPositivePathLength(-3))
        ));
        assert!(matches!(
            CalculationMode::path(5, 7),
            Err(NnkpError::InvalidClosureSelector(7))
        ));
    }
}

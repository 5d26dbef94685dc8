use crate::ffi::{cca_cells, cca_create, cca_destroy, cca_get_generation, cca_randomize, cca_step};
use crate::{Automaton, CcaConfig, CcaError, DEFAULT_MODULUS};

#[test]
fn test_construction_shape() {
    for (width, height) in [(1, 1), (3, 1), (1, 5), (7, 4)] {
        let automaton = Automaton::new(width, height).unwrap();
        let cells = automaton.cells();

        assert_eq!(cells.rows().count(), height);
        for row in cells.rows() {
            assert_eq!(row.len(), width);
            assert!(row.iter().all(|&c| c == 0));
        }
    }
}

#[test]
fn test_invalid_construction() {
    assert!(matches!(
        Automaton::new(0, 0),
        Err(CcaError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        Automaton::with_config(CcaConfig::new(3, 3).modulus(0)),
        Err(CcaError::InvalidModulus { modulus: 0 })
    ));
}

#[test]
fn test_literal_scenarios() {
    let mut line = Automaton::new(3, 1).unwrap();
    line.set(1, 0, 7).unwrap();
    line.step();
    assert_eq!(line.cells().row(0), &[0, 0, 0]);

    let mut square = Automaton::new(2, 2).unwrap();
    square.step();
    assert_eq!(square.cells().as_slice(), &[0, 0, 0, 0]);
}

#[test]
fn test_lone_cell_never_changes() {
    for value in 0..DEFAULT_MODULUS {
        let mut automaton = Automaton::new(1, 1).unwrap();
        automaton.set(0, 0, value).unwrap();

        assert_eq!(automaton.step_n(4), 0);
        assert_eq!(automaton.get(0, 0), Ok(value));
        assert_eq!(automaton.active_index(), 0);
    }
}

#[test]
fn test_wave_travels_one_cell_per_generation() {
    // A single 1 spreads rightwards across zeros, one cell per generation
    let mut automaton = Automaton::new(6, 1).unwrap();
    automaton.set(0, 0, 1).unwrap();

    for generation in 1..6 {
        automaton.step();
        let row = automaton.cells().row(0);
        for (x, &value) in row.iter().enumerate() {
            let expected = u8::from(x <= generation);
            assert_eq!(value, expected, "cell {x} at generation {generation}");
        }
    }
}

#[test]
fn test_long_run_stays_in_range() {
    let mut automaton = Automaton::with_config(CcaConfig::new(32, 24).modulus(6)).unwrap();
    automaton.randomize_seeded(2024);

    let total = automaton.step_n(50);

    assert!(total > 0);
    assert_eq!(automaton.generation(), 50);
    assert!(automaton.cells().as_slice().iter().all(|&c| c < 6));
}

#[test]
fn test_ffi_matches_rust_api() {
    let mut automaton = Automaton::new(16, 16).unwrap();
    automaton.randomize_seeded(5);
    automaton.step_n(3);

    unsafe {
        let handle = cca_create(16, 16, DEFAULT_MODULUS);
        cca_randomize(handle, 5);
        for _ in 0..3 {
            cca_step(handle);
        }

        let mut len = 0usize;
        let data = cca_cells(handle, &mut len);
        assert_eq!(std::slice::from_raw_parts(data, len), automaton.cells().as_slice());
        assert_eq!(cca_get_generation(handle), 3);

        cca_destroy(handle);
    }
}

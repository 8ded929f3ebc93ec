use wrapgrid::{Axis, Grid, GridError, GridParams, Params};

#[test]
fn read_after_write_everywhere() {
    let mut grid = Grid::new(4, 5).unwrap();
    for row in 0..4 {
        for col in 0..5 {
            grid.insert(row * 10 + col, row, col).unwrap();
        }
    }
    for row in 0..4 {
        for col in 0..5 {
            assert_eq!(grid.value_at(row, col), Ok(Some(&(row * 10 + col))));
        }
    }
}

#[test]
fn array_round_trip() {
    let mut grid = Grid::new(2, 3).unwrap();
    grid.insert("a", 0, 2).unwrap();
    grid.insert("b", 1, 0).unwrap();

    let rebuilt = Grid::from_array(grid.to_array(), 2, 3).unwrap();
    assert_eq!(rebuilt, grid);
    assert_eq!(rebuilt.get_rows(), grid.get_rows());
}

#[test]
fn wrapped_rows_repeat_every_period() {
    let grid = Grid::from_array((0..12).map(Some), 3, 4)
        .unwrap()
        .with_wrap(true, false);
    for k in -3i64..=3 {
        for row in 0..3 {
            for col in 0..4 {
                assert_eq!(grid.value_at(row, col), grid.value_at(row + k * 3, col));
            }
        }
    }
    assert!(grid.value_at(0, 4).is_err());
}

#[test]
fn upper_bound_is_exclusive_without_wrap() {
    let grid = Grid::<u8>::new(3, 3).unwrap();
    assert!(grid.value_at(2, 0).is_ok());
    assert_eq!(
        grid.value_at(3, 0),
        Err(GridError::IndexOutOfBounds { axis: Axis::Row, index: 3, bound: 3 })
    );
    assert!(grid.value_at(-1, 0).unwrap_err().is_index());
    assert!(grid.value_at(4, 0).unwrap_err().is_index());
    assert!(grid.is_empty(0, 3).is_err());
}

#[test]
fn fill_leaves_no_empties() {
    let mut grid = Grid::new(3, 2).unwrap();
    grid.fill('v');
    for row in 0..3 {
        for col in 0..2 {
            assert_eq!(grid.is_empty(row, col), Ok(false));
            assert_eq!(grid.value_at(row, col), Ok(Some(&'v')));
        }
    }
}

#[test]
fn neighbours_follow_probe_order() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.insert("X", 1, 1).unwrap();
    assert_eq!(grid.get_row(1).unwrap(), vec![None, Some(&"X"), None]);
    assert!(grid.get_neighbours(1, 1).unwrap().is_empty());

    grid.insert("A", 0, 0).unwrap();
    grid.insert("B", 2, 2).unwrap();
    // (-1,-1) is probed third, (+1,+1) sixth.
    assert_eq!(grid.get_neighbours(1, 1).unwrap(), vec![&"A", &"B"]);
}

#[test]
fn neighbour_counts_by_position() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.fill(1u8);
    assert_eq!(grid.get_neighbours(1, 1).unwrap().len(), 8);
    assert_eq!(grid.get_neighbours(0, 1).unwrap().len(), 5);
    assert_eq!(grid.get_neighbours(2, 2).unwrap().len(), 3);

    grid.set_wrap_rows(true);
    grid.set_wrap_cols(true);
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(grid.get_neighbours(row, col).unwrap().len(), 8);
        }
    }
}

#[test]
fn construction_errors() {
    assert!(Grid::<u8>::new(0, 5).unwrap_err().is_construction());

    let missing = GridParams {
        rows: Some(5),
        ..GridParams::default()
    };
    assert_eq!(
        missing.build::<u8>().unwrap_err(),
        GridError::MissingDimension { axis: Axis::Col }
    );
}

#[test]
fn simulate_small_torus() {
    let params = Params {
        grid: GridParams::new(8, 8).wrapping(true, true),
        density: 0.4,
        generations: 5,
    };
    let (run, timings) = wrapgrid::simulate(&params, 3).unwrap();
    assert_eq!((run.rows, run.cols), (8, 8));
    assert_eq!(run.rgba.len(), 8 * 8 * 4);
    assert_eq!(run.population, wrapgrid::life::population(&run.board));
    assert!(run.board.wrap_rows() && run.board.wrap_cols());
    assert_eq!(timings.last().map(|t| t.name), Some("TOTAL"));
}

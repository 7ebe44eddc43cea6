use cellsim_lib::{Config, Grid, State};
use std::error::Error;

fn step_once(text: &str, workers: usize) -> Result<Grid, Box<dyn Error>> {
    let mut simulator = Config::new(workers, 1).simulator(text.parse()?)?;
    simulator.run()?;
    Ok(simulator.into_grid())
}

#[test]
fn dead_cell_surrounded_by_weak_positives() -> Result<(), Box<dyn Error>> {
    let grid = step_once("ooo\no.o\nooo\n", 1)?;
    assert_eq!(grid.get(1, 1), Some(State::Dead));
    assert_eq!(grid.to_string(), "ooo\no.o\nooo\n");
    Ok(())
}

#[test]
fn healthy_positive_dies_on_power_of_two() -> Result<(), Box<dyn Error>> {
    let grid = step_once("OOOO\n", 1)?;
    assert_eq!(grid.get(0, 1), Some(State::Dead));
    assert_eq!(grid.to_string(), "....\n");
    Ok(())
}

#[test]
fn edges_are_hard() -> Result<(), Box<dyn Error>> {
    let grid = step_once("OOO\nOOO\nOOO\n", 2)?;
    // Corners see 6, edges 10, the center 16.
    assert_eq!(grid.to_string(), "oOo\nO.O\noOo\n");
    Ok(())
}

#[test]
fn negative_cells() -> Result<(), Box<dyn Error>> {
    // Dead cells next to a single `X` see -2, a prime; next to both, -4.
    // Each `X` sees -2, whose absolute value is a power of two.
    let grid = step_once("...\n.X.\nX..\n", 1)?;
    assert_eq!(grid.to_string(), "xxx\n..x\n..x\n");
    Ok(())
}

#[test]
fn empty_grid() -> Result<(), Box<dyn Error>> {
    let grid: Grid = "".parse()?;
    assert_eq!((grid.rows(), grid.cols()), (0, 0));
    let mut simulator = Config::new(4, 10).simulator(grid)?;
    assert_eq!(simulator.workers(), 1);
    simulator.run()?;
    assert_eq!(simulator.generation(), 10);
    assert_eq!(simulator.grid().rows(), 0);
    assert_eq!(simulator.grid().to_string(), "");
    Ok(())
}

#[test]
fn rows_without_columns() -> Result<(), Box<dyn Error>> {
    let grid = step_once("\n\n\n", 2)?;
    assert_eq!((grid.rows(), grid.cols()), (3, 0));
    assert_eq!(grid.to_string(), "\n\n\n");
    Ok(())
}

#[test]
fn invalid_symbol() {
    assert_eq!(
        "o.\nox\n.a\n".parse::<Grid>(),
        Err(cellsim_lib::Error::InvalidSymbol {
            row: 2,
            col: 1,
            symbol: 'a',
        })
    );
    assert_eq!(
        "o o\n".parse::<Grid>(),
        Err(cellsim_lib::Error::InvalidSymbol {
            row: 0,
            col: 1,
            symbol: ' ',
        })
    );
}

#[test]
fn ragged_rows() {
    assert_eq!(
        "ooo\noo\nooo\n".parse::<Grid>(),
        Err(cellsim_lib::Error::RaggedRow {
            row: 1,
            expected: 3,
            found: 2,
        })
    );
}

#[test]
fn crlf_lines() -> Result<(), Box<dyn Error>> {
    let grid: Grid = "oO\r\n.x\r\n".parse()?;
    assert_eq!((grid.rows(), grid.cols()), (2, 2));
    assert_eq!(grid.get(1, 1), Some(State::WeakNegative));
    assert_eq!(grid.to_string(), "oO\n.x\n");
    Ok(())
}

#[test]
fn non_positive_workers() -> Result<(), Box<dyn Error>> {
    let grid: Grid = "o\n".parse()?;
    assert_eq!(
        Config::new(0, 5).simulator(grid).err(),
        Some(cellsim_lib::Error::NonPositiveWorkers)
    );
    Ok(())
}

#[test]
fn workers_clamped_to_rows() -> Result<(), Box<dyn Error>> {
    let simulator = Config::new(8, 1).simulator("ox\nxo\n.O\n".parse()?)?;
    assert_eq!(simulator.workers(), 3);
    assert_eq!(simulator.config().workers, 8);
    Ok(())
}

#[test]
fn default_config() {
    let config = Config::default();
    assert_eq!(config.workers, 1);
    assert_eq!(config.generations, 100);
}

#[test]
fn observer() -> Result<(), Box<dyn Error>> {
    let mut simulator = Config::new(2, 5).simulator("Oo.\nxX.\n...\n".parse()?)?;
    let mut seen = Vec::new();
    simulator.run_with(|generation, grid| {
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        seen.push(generation);
    })?;
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    assert!(simulator.is_finished());

    // Nothing left to do.
    simulator.run_with(|_, _| panic!("no more generations"))?;
    assert_eq!(simulator.generation(), 5);
    Ok(())
}

#[test]
fn error_context() {
    let error = cellsim_lib::Error::WorkerFailed {
        generation: 3,
        start: 2,
        end: 4,
        source: Box::new(cellsim_lib::Error::CellOutOfBounds { row: 2, col: 7 }),
    };
    let message = error.to_string();
    assert!(message.contains("rows 2..4"));
    assert!(message.contains("generation 3"));
    assert!(message.contains("row 2, column 7"));
}

#[test]
#[cfg(feature = "serde")]
fn save_and_resume() -> Result<(), Box<dyn Error>> {
    let grid: Grid = "Oo.xX\n.oOx.\nXx.oO\n..O..\n".parse()?;
    let config = Config::new(3, 12);

    let mut uninterrupted = config.simulator(grid.clone())?;
    uninterrupted.run()?;

    let mut first = config.simulator(grid)?;
    for _ in 0..5 {
        first.step()?;
    }
    let json = serde_json::to_string(&first.ser())?;
    let save: cellsim_lib::SimulatorSer = serde_json::from_str(&json)?;
    assert_eq!(save.generation, 5);

    let mut second = save.simulator()?;
    assert_eq!(second.generation(), 5);
    second.run()?;
    assert_eq!(second.generation(), 12);
    assert_eq!(second.grid(), uninterrupted.grid());
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn save_past_the_end() {
    let save = cellsim_lib::SimulatorSer {
        config: Config::new(1, 3),
        generation: 4,
        grid: String::from("o\n"),
    };
    assert!(matches!(
        save.simulator(),
        Err(cellsim_lib::Error::SaveMismatch(_))
    ));
}

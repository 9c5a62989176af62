use crate::{rows_to_grid, Cell, FieldConfig, FieldError, GridGraph, DEFAULT_WALL_PROBABILITY};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

/// A seed derived from the system clock, for fields that should differ between runs.
pub fn default_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Samples a grid in which each cell independently is a wall with the given percentage.
pub fn random_grid<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    wall_probability: u8,
    rng: &mut R,
) -> BoolGrid {
    assert!(
        width > 0 && height > 0,
        "field must have at least one cell, got {}x{}",
        width,
        height
    );
    assert!(
        wall_probability <= 100,
        "wall probability {} is not in 0..=100",
        wall_probability
    );
    let mut grid = BoolGrid::new(width, height, false);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            grid.set(x, y, rng.gen_range(0..100u8) < wall_probability);
        }
    }
    grid
}

/// [Field] owns a grid of passable and blocked cells together with the [GridGraph] built from
/// it. The grid is never edited in place: regenerating replaces grid and graph as a whole.
/// Queries check their arguments and panic on points that are outside of the field or, for
/// path queries, blocked.
#[derive(Clone, Debug)]
pub struct Field {
    grid: BoolGrid,
    graph: GridGraph,
}

impl Default for Field {
    /// A randomly generated 15x15 field.
    fn default() -> Field {
        let config = FieldConfig::default();
        Field::new(config.width, config.height, config.wall_probability)
    }
}

impl Field {
    /// Generates a random field seeded from the system clock.
    pub fn new(width: usize, height: usize, wall_probability: u8) -> Field {
        Field::with_seed(width, height, wall_probability, default_seed())
    }

    /// Generates a random field with [DEFAULT_WALL_PROBABILITY] percent walls.
    pub fn with_size(width: usize, height: usize) -> Field {
        Field::new(width, height, DEFAULT_WALL_PROBABILITY)
    }

    pub fn with_seed(width: usize, height: usize, wall_probability: u8, seed: u64) -> Field {
        info!("Seeding field generator with {}", seed);
        Field::with_rng(
            width,
            height,
            wall_probability,
            &mut StdRng::seed_from_u64(seed),
        )
    }

    pub fn with_rng<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        wall_probability: u8,
        rng: &mut R,
    ) -> Field {
        Field::from_grid(random_grid(width, height, wall_probability, rng))
    }

    /// Validates the config and generates the field it describes.
    pub fn from_config(config: &FieldConfig) -> Result<Field, FieldError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(default_seed);
        Ok(Field::with_seed(
            config.width,
            config.height,
            config.wall_probability,
            seed,
        ))
    }

    /// Uses the given grid, in which `true` marks a blocked cell.
    pub fn from_grid(grid: BoolGrid) -> Field {
        let graph = GridGraph::new(&grid);
        Field { grid, graph }
    }

    /// Uses the given rows of cells, indexed `rows[y][x]`. Panics on empty or ragged rows.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Field {
        Field::from_grid(rows_to_grid(rows))
    }

    /// Replaces the field by a new random one seeded from the system clock.
    pub fn regenerate(&mut self, width: usize, height: usize, wall_probability: u8) {
        self.regenerate_with_seed(width, height, wall_probability, default_seed());
    }

    pub fn regenerate_with_seed(
        &mut self,
        width: usize,
        height: usize,
        wall_probability: u8,
        seed: u64,
    ) {
        info!("Seeding field generator with {}", seed);
        self.regenerate_with_rng(
            width,
            height,
            wall_probability,
            &mut StdRng::seed_from_u64(seed),
        );
    }

    pub fn regenerate_with_rng<R: Rng + ?Sized>(
        &mut self,
        width: usize,
        height: usize,
        wall_probability: u8,
        rng: &mut R,
    ) {
        info!(
            "Regenerating {}x{} field with {}% walls",
            width, height, wall_probability
        );
        self.grid = random_grid(width, height, wall_probability, rng);
        self.graph.build(&self.grid);
    }

    /// Finds a path with the least number of steps from `a` to `b`, both included, or [None]
    /// if `b` cannot be reached from `a`.
    ///
    /// Panics if either point is outside of the field or blocked, or if `a == b`.
    pub fn find_path(&self, a: Point, b: Point) -> Option<Vec<Point>> {
        self.assert_on_field(&a);
        self.assert_on_field(&b);
        assert_ne!(a, b, "start and goal of a path must differ");
        assert!(self.is_passable(&a), "{} is a wall", a);
        assert!(self.is_passable(&b), "{} is a wall", b);
        self.graph.find_path(a, b)
    }

    /// Panics if the point is outside of the field.
    pub fn cell_type(&self, pos: &Point) -> Cell {
        self.assert_on_field(pos);
        Cell::from_blocked(self.grid.get_point(*pos))
    }

    /// Panics if the point is outside of the field.
    pub fn is_passable(&self, pos: &Point) -> bool {
        self.cell_type(pos) == Cell::Passable
    }

    /// Whether the point lies within the field.
    pub fn contains(&self, pos: &Point) -> bool {
        self.grid.point_in_bounds(*pos)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn passable_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    /// The raw cells, in which `true` marks a blocked cell.
    pub fn grid(&self) -> &BoolGrid {
        &self.grid
    }

    fn assert_on_field(&self, pos: &Point) {
        assert!(
            self.contains(pos),
            "{} is outside of the {}x{} field",
            pos,
            self.width(),
            self.height()
        );
    }
}

/// Parses a map of `.` (passable) and `#` (blocked) characters, one row per line. Surrounding
/// whitespace and blank lines are ignored.
impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<&str>>();
        let expected = lines.first().map_or(0, |line| line.chars().count());
        if expected == 0 {
            return Err(FieldError::EmptyDimension {
                width: 0,
                height: 0,
            });
        }
        let mut rows = Vec::with_capacity(lines.len());
        for (y, line) in lines.iter().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(x, ch)| match ch {
                    '.' => Ok(Cell::Passable),
                    '#' => Ok(Cell::Blocked),
                    _ => Err(FieldError::UnknownCell { ch, x, y }),
                })
                .collect::<Result<Vec<Cell>, FieldError>>()?;
            if row.len() != expected {
                return Err(FieldError::RaggedRow {
                    row: y,
                    len: row.len(),
                    expected,
                });
            }
            rows.push(row);
        }
        Ok(Field::from_rows(&rows))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() as i32 {
            let line = (0..self.width() as i32)
                .map(|x| Cell::from_blocked(self.grid.get(x, y)).symbol())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

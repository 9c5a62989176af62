//! # grid_field
//!
//! Shortest paths between two cells of a 2-D grid of passable and blocked cells. A [Field]
//! owns a (usually randomly walled) grid and a [GridGraph] built over its passable cells,
//! which answers path queries with a
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search). Movement is
//! restricted to the four orthogonal directions and every step has the same cost, so the
//! returned paths have the minimal number of steps. Connected components are pre-computed
//! to avoid flood-filling the grid when no path exists.
pub mod bfs;
pub mod config;
pub mod error;
pub mod field;
pub mod grid_graph;
pub mod selection;

pub use config::FieldConfig;
pub use error::FieldError;
pub use field::Field;
pub use grid_graph::GridGraph;
pub use selection::Selection;

use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::Itertools;

/// Inline capacity of neighbour lists; a cell has at most four orthogonal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
/// Percentage of blocked cells used when none is given.
pub const DEFAULT_WALL_PROBABILITY: u8 = 20;
/// Largest width or height accepted by [FieldConfig].
pub const MAX_DIMENSION: usize = 1000;

/// The two kinds of cells a grid consists of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Passable,
    Blocked,
}

impl Cell {
    pub fn is_blocked(self) -> bool {
        self == Cell::Blocked
    }

    /// The [BoolGrid] representation, where `true` marks a blocked cell.
    pub fn from_blocked(blocked: bool) -> Cell {
        if blocked {
            Cell::Blocked
        } else {
            Cell::Passable
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Passable => '.',
            Cell::Blocked => '#',
        }
    }
}

/// Converts rows of cells (indexed `rows[y][x]`) into a [BoolGrid].
///
/// Panics if there are no rows, the first row is empty or the rows differ in length.
pub fn rows_to_grid(rows: &[Vec<Cell>]) -> BoolGrid {
    let height = rows.len();
    assert!(height > 0, "grid must have at least one row");
    let width = rows[0].len();
    assert!(width > 0, "grid must have at least one column");
    let mut grid = BoolGrid::new(width, height, false);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(
            row.len(),
            width,
            "row {} has length {}, expected {}",
            y,
            row.len(),
            width
        );
        for (x, cell) in row.iter().enumerate() {
            grid.set(x as i32, y as i32, cell.is_blocked());
        }
    }
    grid
}

/// Checks that consecutive points of a path are exactly one orthogonal step apart and that
/// no point is visited twice.
pub fn is_valid_path(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1)
        && path.iter().all_unique()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_converted() {
        use Cell::*;
        let grid = rows_to_grid(&[vec![Passable, Blocked, Passable]]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 1);
        assert!(!grid.get(0, 0));
        assert!(grid.get(1, 0));
        assert!(!grid.get(2, 0));
    }

    #[test]
    #[should_panic]
    fn ragged_rows_are_rejected() {
        use Cell::*;
        rows_to_grid(&[vec![Passable, Passable], vec![Passable]]);
    }

    #[test]
    #[should_panic]
    fn empty_rows_are_rejected() {
        rows_to_grid(&[]);
    }

    #[test]
    fn path_validity() {
        let p = Point::new;
        assert!(is_valid_path(&[p(0, 0)]));
        assert!(is_valid_path(&[p(0, 0), p(1, 0), p(1, 1)]));
        // Diagonal step
        assert!(!is_valid_path(&[p(0, 0), p(1, 1)]));
        // Revisits a point
        assert!(!is_valid_path(&[p(0, 0), p(1, 0), p(0, 0)]));
    }
}

use crate::{Field, FieldError};
use grid_util::point::Point;

/// Interactive choice of the two end points of a path. Each click on a passable cell moves the
/// selection along `AwaitingStart -> AwaitingGoal -> ShowingPath`; clicking a selected point
/// again steps back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    AwaitingStart,
    AwaitingGoal {
        start: Point,
    },
    ShowingPath {
        start: Point,
        goal: Point,
        /// [None] if the goal is not reachable from the start.
        path: Option<Vec<Point>>,
    },
}

impl Selection {
    pub fn new() -> Selection {
        Selection::AwaitingStart
    }

    /// Feeds a click on `cell` into the state machine. Clicks outside of the field or on
    /// walls are rejected and leave the selection unchanged. Selected points that are no
    /// longer passable cells of `field`, e.g. because it was regenerated, are dropped first.
    pub fn click(&mut self, field: &Field, cell: Point) -> Result<(), FieldError> {
        if !field.contains(&cell) {
            return Err(FieldError::OutOfBounds(cell));
        }
        if !field.is_passable(&cell) {
            return Err(FieldError::BlockedCell(cell));
        }
        if !self.fits(field) {
            self.reset();
        }
        *self = match std::mem::take(self) {
            Selection::AwaitingStart => Selection::AwaitingGoal { start: cell },
            Selection::AwaitingGoal { start } if start == cell => Selection::AwaitingStart,
            Selection::AwaitingGoal { start } => Selection::ShowingPath {
                start,
                goal: cell,
                path: field.find_path(start, cell),
            },
            Selection::ShowingPath { start, goal, .. } if goal == cell => {
                Selection::AwaitingGoal { start }
            }
            Selection::ShowingPath { .. } => Selection::AwaitingStart,
        };
        Ok(())
    }

    /// Forgets both points, e.g. after the field was regenerated.
    pub fn reset(&mut self) {
        *self = Selection::AwaitingStart;
    }

    /// Whether every selected point is a passable cell of `field`.
    pub fn fits(&self, field: &Field) -> bool {
        [self.start(), self.goal()]
            .into_iter()
            .flatten()
            .all(|p| field.contains(&p) && field.is_passable(&p))
    }

    pub fn start(&self) -> Option<Point> {
        match self {
            Selection::AwaitingStart => None,
            Selection::AwaitingGoal { start } | Selection::ShowingPath { start, .. } => {
                Some(*start)
            }
        }
    }

    pub fn goal(&self) -> Option<Point> {
        match self {
            Selection::ShowingPath { goal, .. } => Some(*goal),
            _ => None,
        }
    }

    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Selection::ShowingPath {
                path: Some(path), ..
            } => Some(path.as_slice()),
            _ => None,
        }
    }
}

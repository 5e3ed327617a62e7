//! Grid maze world parsed from layout text.
//!
//! Layout characters:
//!
//! | Char | Cell |
//! |---|---|
//! | `%` | wall |
//! | `P` | start (exactly one) |
//! | `.` | goal (any number) |
//! | space | open, entry cost 1 |
//! | `1`..=`9` | open, entry cost is the digit |
//!
//! Moving into a cell costs that cell's entry cost. Successors come out in
//! `North, South, East, West` order.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use wayfind_search::{breadth_first_search, Cost, SearchProblem, Successor};

use crate::contract::HarnessWorld;

/// `(row, col)`, row 0 at the top of the layout.
pub type Position = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Successor order.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::North => "North",
            Self::South => "South",
            Self::East => "East",
            Self::West => "West",
        }
    }

    /// The neighbour of `(row, col)` in this direction, if it has
    /// non-negative coordinates.
    #[must_use]
    pub fn step(self, (row, col): Position) -> Option<Position> {
        match self {
            Self::North => Some((row.checked_sub(1)?, col)),
            Self::South => Some((row + 1, col)),
            Self::East => Some((row, col + 1)),
            Self::West => Some((row, col.checked_sub(1)?)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Layout text that does not describe a maze.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown layout character {ch:?} at ({row}, {col})")]
    UnknownCell { row: usize, col: usize, ch: char },
    #[error("layout has no start cell 'P'")]
    MissingStart,
    #[error("layout has a second start cell at {second:?} (first at {first:?})")]
    MultipleStarts { first: Position, second: Position },
}

/// A parsed maze. `None` cells are walls; `Some(c)` is an open cell with
/// entry cost `c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMaze {
    cells: Vec<Vec<Option<Cost>>>,
    start: Position,
    goals: Vec<Position>,
}

impl GridMaze {
    /// Parse layout text. Trailing blank lines are ignored; every remaining
    /// row must have the same width.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] for empty or ragged layouts, unknown
    /// characters, or a start count other than one.
    pub fn parse(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout.trim_end_matches(['\n', '\r']).lines().collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len());
        let mut start: Option<Position> = None;
        let mut goals = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            let mut parsed = Vec::with_capacity(width);
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '%' => None,
                    ' ' => Some(1),
                    'P' => {
                        if let Some(first) = start {
                            return Err(LayoutError::MultipleStarts {
                                first,
                                second: (row, col),
                            });
                        }
                        start = Some((row, col));
                        Some(1)
                    }
                    '.' => {
                        goals.push((row, col));
                        Some(1)
                    }
                    '1'..='9' => ch.to_digit(10).map(Cost::from),
                    _ => return Err(LayoutError::UnknownCell { row, col, ch }),
                };
                parsed.push(cell);
            }
            cells.push(parsed);
        }

        let start = start.ok_or(LayoutError::MissingStart)?;
        Ok(Self {
            cells,
            start,
            goals,
        })
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn start_position(&self) -> Position {
        self.start
    }

    /// Goal cells in row-major order.
    #[must_use]
    pub fn goals(&self) -> &[Position] {
        &self.goals
    }

    /// Entry cost of `pos`, or `None` for walls and out-of-bounds positions.
    #[must_use]
    pub fn entry_cost(&self, (row, col): Position) -> Option<Cost> {
        self.cells.get(row)?.get(col).copied().flatten()
    }

    #[must_use]
    pub fn is_open(&self, pos: Position) -> bool {
        self.entry_cost(pos).is_some()
    }

    /// Open cells in row-major order.
    #[must_use]
    pub fn open_cells(&self) -> Vec<Position> {
        (0..self.height())
            .flat_map(|row| (0..self.width()).map(move |col| (row, col)))
            .filter(|&pos| self.is_open(pos))
            .collect()
    }

    /// Manhattan distance to the nearest goal (0 without goals).
    ///
    /// Consistent because every entry cost is at least 1.
    #[must_use]
    pub fn manhattan_to_goal(&self, pos: Position) -> Cost {
        self.goals
            .iter()
            .map(|&goal| manhattan(pos, goal))
            .min()
            .unwrap_or(0)
    }

    /// Fewest moves between two open cells, ignoring entry costs.
    ///
    /// Computed with a breadth-first search through the engine. `None` if
    /// either cell is a wall or `b` is unreachable from `a`.
    #[must_use]
    pub fn maze_distance(&self, a: Position, b: Position) -> Option<usize> {
        if !self.is_open(a) || !self.is_open(b) {
            return None;
        }
        let leg = PointToPoint {
            maze: self,
            from: a,
            to: b,
        };
        breadth_first_search(&leg).ok()?.plan.map(|p| p.len())
    }
}

impl FromStr for GridMaze {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// `|r1 - r2| + |c1 - c2|`.
#[must_use]
pub fn manhattan(a: Position, b: Position) -> Cost {
    let d = a.0.abs_diff(b.0) + a.1.abs_diff(b.1);
    Cost::try_from(d).unwrap_or(Cost::MAX)
}

impl SearchProblem for GridMaze {
    type State = Position;
    type Action = Direction;

    fn start(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                let next = dir.step(*state)?;
                let cost = self.entry_cost(next)?;
                Some(Successor::new(next, dir, cost))
            })
            .collect()
    }
}

impl HarnessWorld for GridMaze {
    fn world_id(&self) -> &str {
        "grid_maze"
    }

    fn estimate(&self, state: &Position) -> Cost {
        self.manhattan_to_goal(*state)
    }

    fn action_label(&self, action: &Direction) -> String {
        action.as_str().to_owned()
    }
}

/// Unit-cost search between two cells of a maze.
struct PointToPoint<'a> {
    maze: &'a GridMaze,
    from: Position,
    to: Position,
}

impl SearchProblem for PointToPoint<'_> {
    type State = Position;
    type Action = Direction;

    fn start(&self) -> Position {
        self.from
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.to
    }

    fn successors(&self, state: &Position) -> Vec<Successor<Position, Direction>> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| {
                let next = dir.step(*state)?;
                self.maze
                    .is_open(next)
                    .then_some(Successor::new(next, dir, 1))
            })
            .collect()
    }
}

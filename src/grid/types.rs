//! Core grid types: cells, actions, and the shared ordered action list.
//!
//! Agents move on an unbounded integer lattice with a control-additive
//! motion model `x_{t+1} = x_t + u_t`.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell of the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Creates a new cell.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Origin cell (0, 0).
    pub fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Returns this cell translated by `(dx, dy)`.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns true if the cell lies within `[0, width) x [0, height)`.
    pub fn is_within(&self, width: i32, height: i32) -> bool {
        (0..width).contains(&self.x) && (0..height).contains(&self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A discrete move on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    Stay,
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Displacement `(dx, dy)` applied by this action.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Action::Stay => (0, 0),
            Action::Up => (0, 1),
            Action::Down => (0, -1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        }
    }

    /// Cell reached by taking this action from `cell`.
    pub fn apply(&self, cell: Cell) -> Cell {
        let (dx, dy) = self.delta();
        cell.offset(dx, dy)
    }

    /// Returns all actions in the default order.
    pub fn all() -> [Action; 5] {
        [
            Action::Stay,
            Action::Up,
            Action::Down,
            Action::Left,
            Action::Right,
        ]
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Stay => write!(f, "stay"),
            Action::Up => write!(f, "up"),
            Action::Down => write!(f, "down"),
            Action::Left => write!(f, "left"),
            Action::Right => write!(f, "right"),
        }
    }
}

/// Ordered list of actions shared by every agent of a team.
///
/// Built once and handed to each agent at construction, so successor order
/// is identical across agents and across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionSet {
    actions: Arc<[Action]>,
}

impl ActionSet {
    /// Creates an action set with the given order.
    pub fn new(actions: Vec<Action>) -> Self {
        Self {
            actions: actions.into(),
        }
    }

    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if the set holds no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Iterates actions in order.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}

impl Default for ActionSet {
    /// Stay, up, down, left, right.
    fn default() -> Self {
        Self::new(Action::all().to_vec())
    }
}

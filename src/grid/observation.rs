//! Observation footprint model.

use std::collections::HashSet;

use super::types::Cell;

/// The set of cells an agent observes, expressed as offsets from its cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservationModel {
    offsets: Vec<(i32, i32)>,
}

impl ObservationModel {
    /// Square footprint `[-r, r) x [-r, r)` with `r = radius / 2`.
    ///
    /// A sensing radius of 2 observes the 2x2 block whose upper-right corner
    /// is the agent's own cell. Radii below 2 observe nothing.
    pub fn square(radius: u32) -> Self {
        let r = (radius / 2) as i32;
        let offsets = (-r..r)
            .flat_map(|dx| (-r..r).map(move |dy| (dx, dy)))
            .collect();
        Self { offsets }
    }

    /// Observes only the agent's own cell.
    pub fn single_cell() -> Self {
        Self {
            offsets: vec![(0, 0)],
        }
    }

    /// Cells observed from `cell`.
    pub fn observe(&self, cell: Cell) -> HashSet<Cell> {
        self.offsets
            .iter()
            .map(|&(dx, dy)| cell.offset(dx, dy))
            .collect()
    }
}

//! Concrete grid world: cells, moves, footprints and agents.

pub mod agent;
pub mod observation;
pub mod types;

pub use agent::GridAgent;
pub use observation::ObservationModel;
pub use types::{Action, ActionSet, Cell};

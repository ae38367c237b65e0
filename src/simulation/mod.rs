//! Outer simulation loop: plan, apply, measure.

pub mod command;
pub mod environment;
pub mod metrics;

pub use command::{apply_actions, ActionCommand};
pub use environment::{RoundReport, Simulator};
pub use metrics::CoverageSummary;

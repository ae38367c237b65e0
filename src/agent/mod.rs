//! Agent abstraction shared by the planners.

pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use traits::CoverageAgent;

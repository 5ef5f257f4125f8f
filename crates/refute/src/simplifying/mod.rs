//! Simplifying rules: tautology deletion and subsumption.

pub mod subsumption;
pub mod tautology;

pub use subsumption::{eliminate_redundant, SubsumptionRule};
pub use tautology::TautologyRule;

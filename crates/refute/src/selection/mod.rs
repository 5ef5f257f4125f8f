//! Selection strategies for the refutation loop
//!
//! - [`SetOfSupport`]: resolve only pairs touching the set of support, each
//!   pair at most once

pub mod pairs;

pub use pairs::{ClausePair, PairSelector, SetOfSupport};
